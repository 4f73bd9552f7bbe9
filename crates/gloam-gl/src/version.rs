//! `GL_VERSION` parsing
//!
//! Desktop drivers report `"<major>.<minor>[.<release>] <vendor info>"`.
//! OpenGL ES prefixes that with `"OpenGL ES "` (or `"OpenGL ES-CM "` and
//! `"OpenGL ES-CL "` for the 1.x profiles).

use std::fmt;

use gloam_core::{GloamError, Result, SymbolSource};

use crate::extensions::copy_gl_string;
use crate::types::{GLenum, GL_VERSION};
use crate::Gl;

/// A context version as reported by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlVersion {
    pub major: u32,
    pub minor: u32,
    /// OpenGL ES rather than desktop GL
    pub es: bool,
}

impl GlVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            es: false,
        }
    }

    pub const fn es(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            es: true,
        }
    }

    /// Parse a `GL_VERSION` string; `None` if it has no `major.minor`
    pub fn parse(version: &str) -> Option<Self> {
        let trimmed = version.trim_start();
        let (es, rest) = match trimmed.strip_prefix("OpenGL ES") {
            Some(rest) => {
                // Skip a profile suffix such as "-CM"
                let rest = rest.strip_prefix('-').map_or(rest, |profile| {
                    profile.trim_start_matches(|c: char| c.is_ascii_alphabetic())
                });
                (true, rest.trim_start())
            },
            None => (false, trimmed),
        };

        let number = rest.split_whitespace().next()?;
        let mut parts = number.split('.');
        let major = leading_number(parts.next()?)?;
        let minor = leading_number(parts.next()?)?;
        Some(Self { major, minor, es })
    }

    /// Is this at least `major.minor`? ES and desktop compare by number only.
    pub fn at_least(&self, major: u32, minor: u32) -> bool {
        (self.major, self.minor) >= (major, minor)
    }
}

fn leading_number(s: &str) -> Option<u32> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

impl fmt::Display for GlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.es {
            write!(f, "OpenGL ES {}.{}", self.major, self.minor)
        } else {
            write!(f, "OpenGL {}.{}", self.major, self.minor)
        }
    }
}

impl<S: SymbolSource> Gl<S> {
    /// `glGetString(name)` copied into an owned string; `None` if the driver returns null
    ///
    /// # Safety
    ///
    /// A context must be current on this thread.
    pub unsafe fn get_string_lossy(&self, name: GLenum) -> Result<Option<String>> {
        let raw = unsafe { self.get_string(name) }?;
        Ok(unsafe { copy_gl_string(raw) })
    }

    /// The current context's version
    ///
    /// # Safety
    ///
    /// A context must be current on this thread.
    pub unsafe fn query_version(&self) -> Result<GlVersion> {
        let version = unsafe { self.get_string_lossy(GL_VERSION) }?
            .ok_or_else(|| GloamError::Other("glGetString(GL_VERSION) returned null".into()))?;
        GlVersion::parse(&version)
            .ok_or_else(|| GloamError::Other(format!("unrecognized GL_VERSION {version:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_desktop() {
        assert_eq!(GlVersion::parse("2.1 Mesa 23.1.4"), Some(GlVersion::new(2, 1)));
        assert_eq!(
            GlVersion::parse("4.6.0 NVIDIA 535.104.05"),
            Some(GlVersion::new(4, 6))
        );
        assert_eq!(GlVersion::parse("3.3"), Some(GlVersion::new(3, 3)));
    }

    #[test]
    fn test_parse_es() {
        assert_eq!(
            GlVersion::parse("OpenGL ES 3.0 Mesa 23.1"),
            Some(GlVersion::es(3, 0))
        );
        assert_eq!(GlVersion::parse("OpenGL ES-CM 1.1"), Some(GlVersion::es(1, 1)));
        assert_eq!(
            GlVersion::parse("OpenGL ES 3.2 v1.r32p1"),
            Some(GlVersion::es(3, 2))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(GlVersion::parse(""), None);
        assert_eq!(GlVersion::parse("Mesa"), None);
        assert_eq!(GlVersion::parse("4"), None);
        assert_eq!(GlVersion::parse("OpenGL ES"), None);
    }

    #[test]
    fn test_at_least() {
        let v = GlVersion::new(2, 1);
        assert!(v.at_least(2, 0));
        assert!(v.at_least(2, 1));
        assert!(v.at_least(1, 5));
        assert!(!v.at_least(3, 0));
        assert!(!v.at_least(2, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(GlVersion::new(2, 0).to_string(), "OpenGL 2.0");
        assert_eq!(GlVersion::es(3, 1).to_string(), "OpenGL ES 3.1");
    }
}
