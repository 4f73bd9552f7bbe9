//! Entry point resolution for Windows (WGL)
//!
//! `wglGetProcAddress` only knows about functions exported through the
//! current context's ICD, and some drivers answer "absent" with small
//! integers instead of null. Everything that lookup cannot answer, including
//! the whole GL 1.1 core, lives in `OpenGL32.dll` itself:
//!
//! 1. Ask `wglGetProcAddress`
//! 2. Treat null and the sentinels `1`, `2`, `3`, `-1` as "not found"
//! 3. Fall back to `GetProcAddress` on the `OpenGL32.dll` module
//!
//! The strategy is generic over [`WglLoader`], so the fallback logic is
//! tested on every host; [`SystemWgl`] is the real loader on Windows.

use std::ffi::{c_void, CStr};

use gloam_core::{ProcAddress, SymbolSource};

/// Integer values `wglGetProcAddress` is known to return instead of null
pub const WGL_SENTINELS: [isize; 4] = [1, 2, 3, -1];

/// Module searched when the context lookup fails
pub const OPENGL_MODULE: &str = "OpenGL32.dll";

/// Is this a value the context lookup uses to mean "not present"?
pub fn is_wgl_sentinel(ptr: *const c_void) -> bool {
    WGL_SENTINELS.contains(&(ptr as isize))
}

/// Accept a context-lookup result only if it is a real address
pub fn accept_context_address(ptr: *const c_void) -> Option<ProcAddress> {
    if is_wgl_sentinel(ptr) {
        log::warn!("wglGetProcAddress returned sentinel {:#x}", ptr as isize);
        return None;
    }
    ProcAddress::from_ptr(ptr)
}

/// The two native lookups the WGL strategy chains
pub trait WglLoader: Send + Sync {
    /// Context-specific lookup (`wglGetProcAddress`); raw result, sentinels included
    fn context_proc_address(&self, symbol: &CStr) -> *const c_void;

    /// Lookup in the statically linked driver module (`GetProcAddress`)
    fn module_proc_address(&self, symbol: &CStr) -> *const c_void;
}

/// Resolution through WGL with a module fallback
pub struct WglSource<L> {
    loader: L,
}

impl<L: WglLoader> WglSource<L> {
    pub fn with_loader(loader: L) -> Self {
        Self { loader }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }
}

impl<L: WglLoader> SymbolSource for WglSource<L> {
    fn name(&self) -> &'static str {
        "wgl"
    }

    fn resolve(&self, symbol: &CStr) -> Option<ProcAddress> {
        if let Some(addr) = accept_context_address(self.loader.context_proc_address(symbol)) {
            return Some(addr);
        }

        log::trace!("{symbol:?} not in the context, trying {OPENGL_MODULE}");
        ProcAddress::from_ptr(self.loader.module_proc_address(symbol))
    }
}

#[cfg(windows)]
pub use system::SystemWgl;

#[cfg(windows)]
mod system {
    use std::ffi::{c_void, CStr};
    use std::sync::OnceLock;

    use windows::core::{s, PCSTR};
    use windows::Win32::Foundation::HMODULE;
    use windows::Win32::Graphics::OpenGL::wglGetProcAddress;
    use windows::Win32::System::LibraryLoader::{GetModuleHandleA, GetProcAddress};

    use super::{WglLoader, WglSource};

    /// The real `opengl32` lookups
    ///
    /// The module handle is cached once found. Until `OpenGL32.dll` is
    /// loaded into the process every module lookup misses.
    #[derive(Default)]
    pub struct SystemWgl {
        module: OnceLock<usize>,
    }

    impl SystemWgl {
        fn module(&self) -> Option<HMODULE> {
            if let Some(&raw) = self.module.get() {
                return Some(HMODULE(raw as *mut c_void));
            }

            match unsafe { GetModuleHandleA(s!("OpenGL32.dll")) } {
                Ok(module) => {
                    let raw = *self.module.get_or_init(|| module.0 as usize);
                    log::info!("OpenGL32.dll module handle {raw:#x}");
                    Some(HMODULE(raw as *mut c_void))
                },
                Err(e) => {
                    log::debug!("OpenGL32.dll is not loaded: {e}");
                    None
                },
            }
        }
    }

    impl WglLoader for SystemWgl {
        fn context_proc_address(&self, symbol: &CStr) -> *const c_void {
            let name = PCSTR::from_raw(symbol.as_ptr().cast());
            unsafe { wglGetProcAddress(name) }.map_or(std::ptr::null(), |f| f as *const c_void)
        }

        fn module_proc_address(&self, symbol: &CStr) -> *const c_void {
            let Some(module) = self.module() else {
                return std::ptr::null();
            };
            let name = PCSTR::from_raw(symbol.as_ptr().cast());
            unsafe { GetProcAddress(module, name) }.map_or(std::ptr::null(), |f| f as *const c_void)
        }
    }

    impl WglSource<SystemWgl> {
        /// The strategy backed by the live `opengl32` module
        pub fn system() -> Self {
            Self::with_loader(SystemWgl::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static MODULE_TARGET: u8 = 0;
    static CONTEXT_TARGET: u8 = 0;

    fn module_addr() -> *const c_void {
        &MODULE_TARGET as *const u8 as *const c_void
    }

    fn context_addr() -> *const c_void {
        &CONTEXT_TARGET as *const u8 as *const c_void
    }

    /// Returns a fixed context answer and counts module fallbacks
    struct FakeWgl {
        context: isize,
        module_hits: AtomicUsize,
    }

    impl FakeWgl {
        fn answering(context: isize) -> Self {
            Self {
                context,
                module_hits: AtomicUsize::new(0),
            }
        }
    }

    impl WglLoader for FakeWgl {
        fn context_proc_address(&self, _symbol: &CStr) -> *const c_void {
            self.context as *const c_void
        }

        fn module_proc_address(&self, _symbol: &CStr) -> *const c_void {
            self.module_hits.fetch_add(1, Ordering::SeqCst);
            module_addr()
        }
    }

    #[test]
    fn test_sentinels_fall_through_to_module() {
        for sentinel in WGL_SENTINELS {
            let source = WglSource::with_loader(FakeWgl::answering(sentinel));
            let addr = source.resolve(c"glBlendColor").unwrap();

            assert_eq!(addr.as_ptr(), module_addr(), "sentinel {sentinel} was accepted");
            assert_eq!(source.loader().module_hits.load(Ordering::SeqCst), 1);
        }
    }

    #[test]
    fn test_null_falls_through_to_module() {
        let source = WglSource::with_loader(FakeWgl::answering(0));
        let addr = source.resolve(c"glClear").unwrap();
        assert_eq!(addr.as_ptr(), module_addr());
    }

    #[test]
    fn test_real_context_address_is_used_directly() {
        let source = WglSource::with_loader(FakeWgl::answering(context_addr() as isize));
        let addr = source.resolve(c"glCreateShader").unwrap();

        assert_eq!(addr.as_ptr(), context_addr());
        assert_eq!(source.loader().module_hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_values_near_sentinels_are_addresses() {
        assert!(!is_wgl_sentinel(4 as *const c_void));
        assert!(!is_wgl_sentinel(-2isize as *const c_void));
        assert!(is_wgl_sentinel(-1isize as *const c_void));
    }

    #[test]
    fn test_missing_everywhere_is_none() {
        struct Nothing;

        impl WglLoader for Nothing {
            fn context_proc_address(&self, _symbol: &CStr) -> *const c_void {
                3 as *const c_void
            }

            fn module_proc_address(&self, _symbol: &CStr) -> *const c_void {
                std::ptr::null()
            }
        }

        assert!(WglSource::with_loader(Nothing).resolve(c"glNope").is_none());
    }
}
