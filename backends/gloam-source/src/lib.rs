//! Platform-native entry point resolution
//!
//! This crate picks the one resolution strategy that fits the build target:
//!
//! - **Windows**: `wglGetProcAddress`, falling back to `OpenGL32.dll`, via `gloam-source-win`
//! - **macOS**: the OpenGL framework image, via `gloam-source-apple`
//! - **Other unix**: the process symbol table and GLX, via `gloam-source-posix`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gloam_core::SymbolSource;
//!
//! let source = gloam_source::shared();
//! println!("Resolving through {}", source.name());
//! let clear = source.resolve(c"glClear");
//! ```
//!
//! ## Platform Support
//!
//! | Platform | Strategy | Native handle |
//! |----------|----------|---------------|
//! | Windows  | `wgl` | `OpenGL32.dll` module |
//! | macOS    | `apple-image` | `OpenGL.framework` image |
//! | Linux, BSD | `posix-dlsym` | `dlopen(NULL)` |

use std::sync::OnceLock;

pub use gloam_core::SymbolSource;

// Platform-specific implementations
#[cfg(target_os = "macos")]
pub use gloam_source_apple::{AppleSource, DyldImages};

/// The current platform's strategy
#[cfg(target_os = "macos")]
pub type NativeSource = gloam_source_apple::AppleSource<gloam_source_apple::DyldImages>;

#[cfg(windows)]
pub use gloam_source_win::{SystemWgl, WglSource};

#[cfg(windows)]
pub type NativeSource = gloam_source_win::WglSource<gloam_source_win::SystemWgl>;

#[cfg(all(unix, not(target_os = "macos")))]
pub use gloam_source_posix::{PosixSource, SelfImage};

#[cfg(all(unix, not(target_os = "macos")))]
pub type NativeSource = gloam_source_posix::PosixSource<gloam_source_posix::SelfImage>;

/// Creates a new strategy for the current platform
///
/// Each value caches its own native handle. Most callers want
/// [`shared`] instead.
pub fn native_source() -> NativeSource {
    NativeSource::system()
}

/// The process-wide strategy, created on first use
pub fn shared() -> &'static NativeSource {
    static SHARED: OnceLock<NativeSource> = OnceLock::new();
    SHARED.get_or_init(native_source)
}

/// Name of the strategy [`native_source`] returns
pub fn strategy_name() -> &'static str {
    shared().name()
}

// Compile-time error for unsupported platforms
#[cfg(not(any(unix, windows)))]
compile_error!(
    "gloam-source requires Windows, macOS or a unix with dlopen. On other targets, \
     implement gloam_core::SymbolSource for your loader and build tables with it."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_is_one_instance() {
        assert!(std::ptr::eq(shared(), shared()));
    }

    #[test]
    #[cfg(all(unix, not(target_os = "macos")))]
    fn test_strategy_name() {
        assert_eq!(strategy_name(), "posix-dlsym");
    }

    #[test]
    #[cfg(windows)]
    fn test_strategy_name() {
        assert_eq!(strategy_name(), "wgl");
    }

    #[test]
    #[cfg(target_os = "macos")]
    fn test_strategy_name() {
        assert_eq!(strategy_name(), "apple-image");
    }
}
