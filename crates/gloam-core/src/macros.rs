//! Typed dispatch surfaces generated from a list of declarations
//!
//! [`dispatch_table!`](crate::dispatch_table) turns a list of C-style entry
//! point declarations into a struct wrapping a [`DispatchTable`](crate::DispatchTable),
//! with one `unsafe` method per entry point. Each method resolves its slot on
//! first use (through the table's [`SymbolSource`](crate::SymbolSource)),
//! transmutes the address to the declared signature, and forwards the call.

/// Build a NUL-terminated `&'static CStr` from an identifier at compile time
#[doc(hidden)]
#[macro_export]
macro_rules! __symbol_cstr {
    ($sym:ident) => {
        match ::core::ffi::CStr::from_bytes_with_nul(
            ::core::concat!(::core::stringify!($sym), "\0").as_bytes(),
        ) {
            Ok(name) => name,
            Err(_) => ::core::panic!("symbol names cannot contain NUL"),
        }
    };
}

/// Return type of a generated call: the declared one, or `()`
#[doc(hidden)]
#[macro_export]
macro_rules! __entry_return {
    () => {
        ()
    };
    ($ret:ty) => {
        $ret
    };
}

/// Declare a lazily resolved, typed dispatch table
///
/// ```
/// use std::ffi::{c_void, CStr};
/// use gloam_core::{dispatch_table, ProcAddress, SymbolSource};
///
/// extern "system" fn add(a: i32, b: i32) -> i32 {
///     a + b
/// }
///
/// struct Host;
///
/// impl SymbolSource for Host {
///     fn name(&self) -> &'static str {
///         "host"
///     }
///
///     fn resolve(&self, symbol: &CStr) -> Option<ProcAddress> {
///         if symbol == c"mathAdd" {
///             ProcAddress::from_ptr(add as *const c_void)
///         } else {
///             None
///         }
///     }
/// }
///
/// dispatch_table! {
///     /// A tiny math ABI
///     pub struct MathApi;
///
///     fn mathAdd(a: i32, b: i32) -> i32 as add;
///     fn mathReset() as reset;
/// }
///
/// let api = MathApi::new(Host);
/// assert_eq!(unsafe { api.add(2, 3) }.unwrap(), 5);
/// assert!(unsafe { api.reset() }.unwrap_err().is_not_found());
/// ```
///
/// Functions use the `"system"` calling convention, which is the platform's
/// native C convention everywhere except 32-bit Windows, where it matches
/// `APIENTRY`/`__stdcall`.
#[macro_export]
macro_rules! dispatch_table {
    (
        $(#[$meta:meta])*
        $vis:vis struct $table:ident;
        $(
            $(#[$entry_meta:meta])*
            fn $sym:ident ( $($arg:ident : $arg_ty:ty),* $(,)? ) $(-> $ret:ty)? as $method:ident;
        )*
    ) => {
        $(#[$meta])*
        $vis struct $table<S> {
            table: $crate::DispatchTable<S>,
        }

        const _: () = {
            #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
            #[derive(Clone, Copy)]
            enum Entry {
                $($sym,)*
            }

            impl<S: $crate::SymbolSource> $table<S> {
                /// Every entry point in slot order
                #[allow(clippy::panic)]
                pub const ENTRY_POINTS: &'static [&'static ::core::ffi::CStr] = &[
                    $($crate::__symbol_cstr!($sym),)*
                ];

                /// A table with every entry point unresolved
                pub fn new(source: S) -> Self {
                    Self {
                        table: $crate::DispatchTable::new(source, Self::ENTRY_POINTS),
                    }
                }

                /// The untyped table, for lookups by name and slot inspection
                pub fn dispatch(&self) -> &$crate::DispatchTable<S> {
                    &self.table
                }

                $(
                    $(#[$entry_meta])*
                    #[doc = ::core::concat!("Calls `", ::core::stringify!($sym), "`, resolving it on first use.")]
                    ///
                    /// # Safety
                    ///
                    /// The caller upholds the native function's contract: a
                    /// current context where one is required and argument
                    /// values (pointers in particular) valid for the call.
                    #[inline]
                    #[allow(non_snake_case, clippy::too_many_arguments, clippy::missing_transmute_annotations)]
                    pub unsafe fn $method(&self, $($arg: $arg_ty),*) -> $crate::Result<$crate::__entry_return!($($ret)?)> {
                        let addr = self.table.resolve_index(Entry::$sym as usize)?;
                        let entry: unsafe extern "system" fn($($arg_ty),*) $(-> $ret)? =
                            unsafe { ::core::mem::transmute(addr.as_ptr()) };
                        Ok(unsafe { entry($($arg),*) })
                    }
                )*
            }
        };
    };
}
