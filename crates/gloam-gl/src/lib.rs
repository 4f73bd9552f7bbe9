//! Gloam GL: OpenGL 2.0 without a link-time dependency on the driver
//!
//! [`Gl`] carries every entry point of GL 1.0 through 2.0 plus
//! `ARB_imaging` and `ARB_framebuffer_object`. Nothing is resolved up
//! front; each method looks its function up through the table's
//! [`SymbolSource`] on first use.
//!
//! ```rust,no_run
//! use gloam_gl::{check_extensions, Gl, SymbolSource, GL_COLOR_BUFFER_BIT};
//!
//! fn first_frame<S: SymbolSource>(source: &S) -> gloam_gl::Result<()> {
//!     let gl = Gl::new(source);
//!     let extensions = check_extensions(source)?;
//!
//!     unsafe {
//!         gl.clear_color(0.0, 0.0, 0.0, 1.0)?;
//!         gl.clear(GL_COLOR_BUFFER_BIT)?;
//!         if extensions.arb_framebuffer_object() {
//!             let mut fbo = 0u32;
//!             gl.gen_framebuffers(1, &mut fbo)?;
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod extensions;
pub mod types;
pub mod version;

pub use api::Gl;
pub use extensions::{
    bootstrap, check_extensions, GlBootstrap, GlExtensionString, GlExtensions, EXTENSIONS,
};
pub use gloam_core::{GloamError, Result, SymbolSource};
pub use types::*;
pub use version::GlVersion;
