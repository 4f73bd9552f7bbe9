//! The contracts every resolution strategy implements
//!
//! A strategy turns a symbol name into an address or a definite "not found".
//! Everything platform specific lives behind [`SymbolSource`]; the dispatch
//! table never knows which loader answered.
//!
//! ```
//! use std::ffi::CStr;
//! use gloam_core::{ProcAddress, SymbolSource};
//!
//! struct NothingHere;
//!
//! impl SymbolSource for NothingHere {
//!     fn name(&self) -> &'static str {
//!         "nothing"
//!     }
//!
//!     fn resolve(&self, _symbol: &CStr) -> Option<ProcAddress> {
//!         None
//!     }
//! }
//!
//! assert!(NothingHere.resolve(c"glFlush").is_none());
//! ```

use std::ffi::{c_void, CStr};
use std::fmt;
use std::ptr::NonNull;
use std::sync::Arc;

/// A resolved, non-null entry point address
///
/// The address is only ever produced by a loader and is never dereferenced
/// as data, so it is safe to share between threads.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcAddress(NonNull<c_void>);

// Code addresses are immutable for the life of the loaded image.
unsafe impl Send for ProcAddress {}
unsafe impl Sync for ProcAddress {}

impl ProcAddress {
    /// Wrap a raw loader result, mapping null to `None`
    pub fn from_ptr(ptr: *const c_void) -> Option<Self> {
        NonNull::new(ptr.cast_mut()).map(Self)
    }

    /// The raw address, ready to transmute into a typed function pointer
    pub fn as_ptr(self) -> *const c_void {
        self.0.as_ptr()
    }

    /// The address as an integer, for display and comparison
    pub fn addr(self) -> usize {
        self.0.as_ptr() as usize
    }
}

impl fmt::Debug for ProcAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProcAddress({:p})", self.0)
    }
}

impl fmt::Display for ProcAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:p}", self.0)
    }
}

/// Where symbol names become addresses
///
/// Implementations must be cheap to call repeatedly: the dispatch table
/// calls `resolve` at most once per successful entry point, but retries
/// entry points that were not found.
pub trait SymbolSource: Send + Sync {
    /// Identify the strategy in logs and error messages
    fn name(&self) -> &'static str;

    /// Look up one symbol
    ///
    /// `None` is an expected answer: the entry point may simply be absent
    /// on this platform or driver.
    fn resolve(&self, symbol: &CStr) -> Option<ProcAddress>;
}

impl<S: SymbolSource + ?Sized> SymbolSource for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn resolve(&self, symbol: &CStr) -> Option<ProcAddress> {
        (**self).resolve(symbol)
    }
}

impl<S: SymbolSource + ?Sized> SymbolSource for Arc<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn resolve(&self, symbol: &CStr) -> Option<ProcAddress> {
        (**self).resolve(symbol)
    }
}

impl<S: SymbolSource + ?Sized> SymbolSource for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn resolve(&self, symbol: &CStr) -> Option<ProcAddress> {
        (**self).resolve(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_is_not_an_address() {
        assert!(ProcAddress::from_ptr(std::ptr::null()).is_none());
    }

    #[test]
    fn test_address_round_trips_pointer() {
        let value = 7u8;
        let ptr = &value as *const u8 as *const c_void;
        let addr = ProcAddress::from_ptr(ptr).unwrap();
        assert_eq!(addr.as_ptr(), ptr);
        assert_eq!(addr.addr(), ptr as usize);
    }
}
