//! Entry point resolution from the macOS OpenGL framework
//!
//! On macOS every GL entry point is exported by one image,
//! `OpenGL.framework`. The strategy opens that image once, caches the
//! handle for the life of the process, and resolves each name by its C-level
//! symbol: the requested name with a leading underscore.
//!
//! If the framework cannot be opened, every lookup is "not found".
//!
//! The strategy is generic over [`ImageLoader`] so that caching and mangling
//! are tested on any host; [`DyldImages`] is the real loader on macOS.

use std::ffi::{c_void, CStr, CString};
use std::sync::OnceLock;

use gloam_core::{ProcAddress, SymbolSource};

/// The system OpenGL framework binary
pub const OPENGL_FRAMEWORK: &str =
    "/System/Library/Frameworks/OpenGL.framework/Versions/Current/OpenGL";

/// The C-level (Mach-O) name of a symbol: `glClear` becomes `_glClear`
pub fn mangle(symbol: &CStr) -> CString {
    let mut bytes = Vec::with_capacity(symbol.to_bytes().len() + 1);
    bytes.push(b'_');
    bytes.extend_from_slice(symbol.to_bytes());
    // `symbol` had no interior NUL and `_` is not NUL
    CString::new(bytes).unwrap_or_default()
}

/// Opens images and finds mangled symbols in them
///
/// `lookup_symbol` receives the Mach-O name from [`mangle`], underscore included.
pub trait ImageLoader: Send + Sync {
    type Image: Send + Sync;

    /// Load the image at `path`, or `None` if it cannot be loaded
    fn add_image(&self, path: &str) -> Option<Self::Image>;

    /// Address of `mangled` in `image`, or null
    fn lookup_symbol(&self, image: &Self::Image, mangled: &CStr) -> *const c_void;
}

/// Resolution against one cached framework image
pub struct AppleSource<L: ImageLoader> {
    loader: L,
    path: &'static str,
    image: OnceLock<Option<L::Image>>,
}

impl<L: ImageLoader> AppleSource<L> {
    /// Resolve from the system OpenGL framework
    pub fn with_loader(loader: L) -> Self {
        Self::with_image_path(loader, OPENGL_FRAMEWORK)
    }

    pub fn with_image_path(loader: L, path: &'static str) -> Self {
        Self {
            loader,
            path,
            image: OnceLock::new(),
        }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// The cached image, loaded on first use
    fn image(&self) -> Option<&L::Image> {
        self.image
            .get_or_init(|| {
                let image = self.loader.add_image(self.path);
                match image {
                    Some(_) => log::info!("Loaded image {}", self.path),
                    None => log::warn!("Could not load image {}; every lookup will miss", self.path),
                }
                image
            })
            .as_ref()
    }
}

impl<L: ImageLoader> SymbolSource for AppleSource<L> {
    fn name(&self) -> &'static str {
        "apple-image"
    }

    fn resolve(&self, symbol: &CStr) -> Option<ProcAddress> {
        let image = self.image()?;
        let mangled = mangle(symbol);
        log::trace!("Looking up {mangled:?} in {}", self.path);
        ProcAddress::from_ptr(self.loader.lookup_symbol(image, &mangled))
    }
}

#[cfg(target_os = "macos")]
pub use system::DyldImages;

#[cfg(target_os = "macos")]
mod system {
    use std::ffi::{c_void, CStr};

    use libloading::os::unix::{Library, RTLD_LAZY, RTLD_LOCAL};

    use super::{AppleSource, ImageLoader};

    /// Images opened through dyld
    #[derive(Debug, Default)]
    pub struct DyldImages;

    impl ImageLoader for DyldImages {
        type Image = Library;

        fn add_image(&self, path: &str) -> Option<Library> {
            match unsafe { Library::open(Some(path), RTLD_LAZY | RTLD_LOCAL) } {
                Ok(lib) => Some(lib),
                Err(e) => {
                    log::debug!("dlopen({path}) failed: {e}");
                    None
                },
            }
        }

        fn lookup_symbol(&self, image: &Library, mangled: &CStr) -> *const c_void {
            // dlsym adds the Mach-O underscore itself, so it takes the bare name
            let bytes = mangled.to_bytes_with_nul();
            let bare = bytes.strip_prefix(b"_").unwrap_or(bytes);
            match unsafe { image.get::<*const c_void>(bare) } {
                Ok(symbol) => symbol.into_raw() as *const c_void,
                Err(_) => std::ptr::null(),
            }
        }
    }

    impl AppleSource<DyldImages> {
        /// The strategy backed by the system OpenGL framework
        pub fn system() -> Self {
            Self::with_loader(DyldImages)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    static GL_CLEAR: u8 = 0;

    /// Records every load and lookup it sees
    struct FakeImages {
        loads: AtomicUsize,
        available: bool,
        lookups: Mutex<Vec<String>>,
    }

    impl FakeImages {
        fn new(available: bool) -> Self {
            Self {
                loads: AtomicUsize::new(0),
                available,
                lookups: Mutex::new(Vec::new()),
            }
        }
    }

    impl ImageLoader for FakeImages {
        type Image = &'static str;

        fn add_image(&self, path: &str) -> Option<&'static str> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            (self.available && path == OPENGL_FRAMEWORK).then_some("opengl")
        }

        fn lookup_symbol(&self, _image: &&'static str, mangled: &CStr) -> *const c_void {
            let name = mangled.to_string_lossy().into_owned();
            let found = name == "_glClear";
            self.lookups.lock().unwrap().push(name);
            if found {
                &GL_CLEAR as *const u8 as *const c_void
            } else {
                std::ptr::null()
            }
        }
    }

    #[test]
    fn test_mangle_prefixes_underscore() {
        assert_eq!(mangle(c"glClear").as_bytes(), b"_glClear");
        assert_eq!(mangle(c"").as_bytes(), b"_");
    }

    #[test]
    fn test_lookups_use_mangled_names() {
        let _ = env_logger::builder().is_test(true).try_init();
        let source = AppleSource::with_loader(FakeImages::new(true));

        let addr = source.resolve(c"glClear").unwrap();
        assert_eq!(addr.as_ptr(), &GL_CLEAR as *const u8 as *const c_void);
        assert!(source.resolve(c"glFlush").is_none());

        assert_eq!(
            *source.loader().lookups.lock().unwrap(),
            vec!["_glClear".to_string(), "_glFlush".to_string()]
        );
    }

    #[test]
    fn test_image_is_loaded_once() {
        let source = AppleSource::with_loader(FakeImages::new(true));
        for _ in 0..5 {
            source.resolve(c"glClear");
        }
        assert_eq!(source.loader().loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_image_means_nothing_resolves() {
        let source = AppleSource::with_loader(FakeImages::new(false));

        assert!(source.resolve(c"glClear").is_none());
        assert!(source.resolve(c"glClear").is_none());
        assert_eq!(source.loader().loads.load(Ordering::SeqCst), 1);
        assert!(source.loader().lookups.lock().unwrap().is_empty());
    }
}
