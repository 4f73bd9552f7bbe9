//! Extension detection for the current GL context
//!
//! The extension string is read with `glGetString(GL_EXTENSIONS)`, resolved
//! straight from the [`SymbolSource`] on every scan rather than through a
//! [`Gl`](crate::Gl) table, so detection works before any table exists.

use std::ffi::{c_void, CStr};
use std::sync::Arc;

use gloam_core::{
    Bootstrap, CapabilityError, CapabilityRegistry, CapabilitySet, CapabilityStringSource,
    ParseOptions, Result, SymbolSource,
};

use crate::types::{GLenum, GLubyte, GL_EXTENSIONS};

/// Extensions this binding tracks, in flag order
pub static EXTENSIONS: CapabilityRegistry =
    CapabilityRegistry::new(&["GL_ARB_imaging", "GL_ARB_framebuffer_object"]);

const ARB_IMAGING: usize = 0;
const ARB_FRAMEBUFFER_OBJECT: usize = 1;

type GetStringFn = unsafe extern "system" fn(name: GLenum) -> *const GLubyte;

/// Copy a string returned by `glGetString`, replacing invalid UTF-8
///
/// # Safety
///
/// `ptr` is null or points at a NUL-terminated string that stays valid for
/// the duration of the call.
pub(crate) unsafe fn copy_gl_string(ptr: *const GLubyte) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let s = unsafe { CStr::from_ptr(ptr.cast()) };
    Some(s.to_string_lossy().into_owned())
}

/// `glGetString(GL_EXTENSIONS)` on whatever context is current
pub struct GlExtensionString<S> {
    source: S,
}

impl<S: SymbolSource> GlExtensionString<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: SymbolSource> CapabilityStringSource for GlExtensionString<S> {
    fn capability_string(&self) -> Result<String> {
        let Some(addr) = self.source.resolve(c"glGetString") else {
            return Err(CapabilityError::SourceUnavailable(format!(
                "glGetString not found via {}",
                self.source.name()
            ))
            .into());
        };

        // SAFETY: glGetString has this signature on every platform
        let get_string =
            unsafe { std::mem::transmute::<*const c_void, GetStringFn>(addr.as_ptr()) };
        let raw = unsafe { get_string(GL_EXTENSIONS) };

        // SAFETY: a non-null result is a static, NUL-terminated driver string
        unsafe { copy_gl_string(raw) }.ok_or_else(|| CapabilityError::NullString.into())
    }
}

/// A snapshot of the tracked extensions
#[derive(Debug, Clone)]
pub struct GlExtensions {
    set: Arc<CapabilitySet>,
}

impl GlExtensions {
    /// Every tracked extension absent
    pub fn none() -> Self {
        Self {
            set: Arc::new(EXTENSIONS.empty()),
        }
    }

    pub fn arb_imaging(&self) -> bool {
        self.set.get(ARB_IMAGING)
    }

    pub fn arb_framebuffer_object(&self) -> bool {
        self.set.get(ARB_FRAMEBUFFER_OBJECT)
    }

    /// The untyped snapshot
    pub fn capabilities(&self) -> &CapabilitySet {
        &self.set
    }
}

impl Default for GlExtensions {
    fn default() -> Self {
        Self::none()
    }
}

impl From<Arc<CapabilitySet>> for GlExtensions {
    fn from(set: Arc<CapabilitySet>) -> Self {
        Self { set }
    }
}

impl From<CapabilitySet> for GlExtensions {
    fn from(set: CapabilitySet) -> Self {
        Arc::new(set).into()
    }
}

/// Read the current context's extensions once
///
/// Parses with the process-wide options (see [`gloam_core::config`]).
pub fn check_extensions<S: SymbolSource>(source: S) -> Result<GlExtensions> {
    let strings = GlExtensionString::new(source);
    let set = gloam_core::bootstrap::scan(&EXTENSIONS, &strings, &ParseOptions::from_config())?;
    log::debug!("GL extensions: {set:?}");
    Ok(set.into())
}

/// A re-runnable extension scan for one context
pub fn bootstrap<S: SymbolSource>(source: S) -> GlBootstrap<S> {
    Bootstrap::new(&EXTENSIONS, GlExtensionString::new(source))
}

pub type GlBootstrap<S> = Bootstrap<GlExtensionString<S>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_labels() {
        assert_eq!(EXTENSIONS.index_of("GL_ARB_imaging"), Some(ARB_IMAGING));
        assert_eq!(
            EXTENSIONS.index_of("GL_ARB_framebuffer_object"),
            Some(ARB_FRAMEBUFFER_OBJECT)
        );
        assert_eq!(EXTENSIONS.len(), 2);
    }

    #[test]
    fn test_none_reads_false() {
        let ext = GlExtensions::default();
        assert!(!ext.arb_imaging());
        assert!(!ext.arb_framebuffer_object());
    }

    #[test]
    fn test_typed_accessors_follow_the_set() {
        let ext: GlExtensions = EXTENSIONS
            .parse_with("GL_EXT_texture GL_ARB_framebuffer_object", &ParseOptions::default())
            .into();
        assert!(!ext.arb_imaging());
        assert!(ext.arb_framebuffer_object());
        assert_eq!(ext.capabilities().enabled().collect::<Vec<_>>(), ["GL_ARB_framebuffer_object"]);
    }

    #[test]
    fn test_null_string_copies_to_none() {
        assert_eq!(unsafe { copy_gl_string(std::ptr::null()) }, None);
        let s = b"2.1 Mesa\0";
        assert_eq!(unsafe { copy_gl_string(s.as_ptr()) }.as_deref(), Some("2.1 Mesa"));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let s = b"GL_ARB_imaging \xff\0";
        let copied = unsafe { copy_gl_string(s.as_ptr()) }.unwrap();
        assert!(copied.starts_with("GL_ARB_imaging "));
        assert!(copied.ends_with('\u{FFFD}'));
    }
}
