//! Entry point resolution on Linux, the BSDs and other POSIX systems
//!
//! The running process's global symbol table (`dlopen(NULL)`) is opened once
//! and cached. If it exports an indirect lookup function (GLX's
//! `glXGetProcAddressARB` or `glXGetProcAddress`), every resolution goes
//! through that function, since it also knows extension entry points the
//! symbol table does not export. Otherwise names are looked up directly in
//! the symbol table.
//!
//! The strategy is generic over [`ProcessImage`]; [`SelfImage`] is the real
//! `dlopen`/`dlsym` pair on unix.

use std::ffi::{c_void, CStr};
use std::sync::OnceLock;

use gloam_core::{ProcAddress, SymbolSource};

/// Signature shared by `glXGetProcAddress` and `glXGetProcAddressARB`
pub type GetProcAddressFn = unsafe extern "C" fn(name: *const u8) -> *const c_void;

/// Indirect lookups tried in order when the process table is opened
pub const GLX_INDIRECT_LOOKUPS: &[&CStr] = &[c"glXGetProcAddressARB", c"glXGetProcAddress"];

/// Access to the running process's symbol table
pub trait ProcessImage: Send + Sync {
    type Handle: Send + Sync;

    /// Open the global symbol table, or `None` if that fails
    fn open_process(&self) -> Option<Self::Handle>;

    /// Direct lookup by name; null if absent
    fn symbol(&self, handle: &Self::Handle, name: &CStr) -> *const c_void;
}

struct ProcessTable<H> {
    handle: H,
    indirect: Option<GetProcAddressFn>,
}

/// Resolution through the process symbol table
pub struct PosixSource<I: ProcessImage> {
    image: I,
    indirect_names: &'static [&'static CStr],
    table: OnceLock<Option<ProcessTable<I::Handle>>>,
}

impl<I: ProcessImage> PosixSource<I> {
    /// Prefer the GLX indirect lookups when the process exports one
    pub fn with_image(image: I) -> Self {
        Self::with_indirect_lookups(image, GLX_INDIRECT_LOOKUPS)
    }

    /// Use a different list of indirect lookup functions, e.g. `eglGetProcAddress`
    ///
    /// An empty list always resolves directly.
    pub fn with_indirect_lookups(image: I, indirect_names: &'static [&'static CStr]) -> Self {
        Self {
            image,
            indirect_names,
            table: OnceLock::new(),
        }
    }

    pub fn image(&self) -> &I {
        &self.image
    }

    /// Is resolution going through an indirect lookup function?
    pub fn uses_indirect_lookup(&self) -> bool {
        self.table().is_some_and(|table| table.indirect.is_some())
    }

    fn table(&self) -> Option<&ProcessTable<I::Handle>> {
        self.table.get_or_init(|| self.open_table()).as_ref()
    }

    fn open_table(&self) -> Option<ProcessTable<I::Handle>> {
        let Some(handle) = self.image.open_process() else {
            log::warn!("Could not open the process symbol table; every lookup will miss");
            return None;
        };

        let indirect = self.indirect_names.iter().find_map(|name| {
            let ptr = self.image.symbol(&handle, name);
            if ptr.is_null() {
                return None;
            }
            log::info!("Resolving through {name:?}");
            // SAFETY: the exported symbol has the documented glXGetProcAddress signature
            Some(unsafe { std::mem::transmute::<*const c_void, GetProcAddressFn>(ptr) })
        });

        if indirect.is_none() {
            log::info!("No indirect lookup exported; resolving from the symbol table");
        }

        Some(ProcessTable { handle, indirect })
    }
}

impl<I: ProcessImage> SymbolSource for PosixSource<I> {
    fn name(&self) -> &'static str {
        "posix-dlsym"
    }

    fn resolve(&self, symbol: &CStr) -> Option<ProcAddress> {
        let table = self.table()?;
        let ptr = match table.indirect {
            Some(get_proc_address) => unsafe { get_proc_address(symbol.as_ptr().cast()) },
            None => self.image.symbol(&table.handle, symbol),
        };
        ProcAddress::from_ptr(ptr)
    }
}

#[cfg(unix)]
pub use system::SelfImage;

#[cfg(unix)]
mod system {
    use std::ffi::{c_void, CStr};

    use libloading::os::unix::Library;

    use super::{PosixSource, ProcessImage};

    /// `dlopen(NULL)` and `dlsym` on the running process
    #[derive(Debug, Default)]
    pub struct SelfImage;

    impl ProcessImage for SelfImage {
        type Handle = Library;

        fn open_process(&self) -> Option<Library> {
            Some(Library::this())
        }

        fn symbol(&self, handle: &Library, name: &CStr) -> *const c_void {
            match unsafe { handle.get::<*const c_void>(name.to_bytes_with_nul()) } {
                Ok(symbol) => symbol.into_raw() as *const c_void,
                Err(_) => std::ptr::null(),
            }
        }
    }

    impl PosixSource<SelfImage> {
        /// The strategy backed by the running process
        pub fn system() -> Self {
            Self::with_image(SelfImage)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static DIRECT_TARGET: u8 = 0;
    static INDIRECT_TARGET: u8 = 0;
    static INDIRECT_CALLS: AtomicUsize = AtomicUsize::new(0);

    unsafe extern "C" fn fake_get_proc_address(name: *const u8) -> *const c_void {
        INDIRECT_CALLS.fetch_add(1, Ordering::SeqCst);
        let name = unsafe { CStr::from_ptr(name.cast()) };
        if name == c"glCreateProgram" {
            &INDIRECT_TARGET as *const u8 as *const c_void
        } else {
            std::ptr::null()
        }
    }

    /// A process table with or without a GLX lookup
    struct FakeProcess {
        exports_glx: bool,
        opens: AtomicUsize,
        direct_lookups: AtomicUsize,
    }

    impl FakeProcess {
        fn new(exports_glx: bool) -> Self {
            Self {
                exports_glx,
                opens: AtomicUsize::new(0),
                direct_lookups: AtomicUsize::new(0),
            }
        }
    }

    impl ProcessImage for FakeProcess {
        type Handle = ();

        fn open_process(&self) -> Option<()> {
            self.opens.fetch_add(1, Ordering::SeqCst);
            Some(())
        }

        fn symbol(&self, _handle: &(), name: &CStr) -> *const c_void {
            if name == c"glXGetProcAddressARB" {
                return if self.exports_glx {
                    fake_get_proc_address as *const c_void
                } else {
                    std::ptr::null()
                };
            }
            if name == c"glXGetProcAddress" {
                return std::ptr::null();
            }
            self.direct_lookups.fetch_add(1, Ordering::SeqCst);
            if name == c"glClear" {
                &DIRECT_TARGET as *const u8 as *const c_void
            } else {
                std::ptr::null()
            }
        }
    }

    #[test]
    fn test_indirect_lookup_is_preferred() {
        let source = PosixSource::with_image(FakeProcess::new(true));
        let before = INDIRECT_CALLS.load(Ordering::SeqCst);

        let addr = source.resolve(c"glCreateProgram").unwrap();
        assert_eq!(addr.as_ptr(), &INDIRECT_TARGET as *const u8 as *const c_void);
        assert!(source.uses_indirect_lookup());
        assert!(INDIRECT_CALLS.load(Ordering::SeqCst) > before);
        assert_eq!(source.image().direct_lookups.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_direct_lookup_without_glx() {
        let source = PosixSource::with_image(FakeProcess::new(false));

        let addr = source.resolve(c"glClear").unwrap();
        assert_eq!(addr.as_ptr(), &DIRECT_TARGET as *const u8 as *const c_void);
        assert!(source.resolve(c"glCreateProgram").is_none());
        assert!(!source.uses_indirect_lookup());
    }

    #[test]
    fn test_process_table_opened_once() {
        let source = PosixSource::with_image(FakeProcess::new(false));
        for _ in 0..4 {
            source.resolve(c"glClear");
        }
        assert_eq!(source.image().opens.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_indirect_list_always_goes_direct() {
        let source = PosixSource::with_indirect_lookups(FakeProcess::new(true), &[]);
        assert!(source.resolve(c"glClear").is_some());
        assert!(!source.uses_indirect_lookup());
    }

    #[test]
    #[cfg(unix)]
    fn test_real_process_table_finds_libc() {
        let source = PosixSource::system();
        assert!(source.resolve(c"malloc").is_some());
        assert!(source.resolve(c"gloamDefinitelyNotExported").is_none());
    }
}
