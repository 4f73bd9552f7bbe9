//! Gloam Core: resolve once, call forever
//!
//! Large native C ABIs (OpenGL being the classic case) expose hundreds of
//! entry points that cannot be linked at build time and are too many to
//! resolve eagerly. This crate holds the machinery that makes them callable
//! on demand:
//!
//! 1. **[`SymbolSource`]** - A platform strategy turning a name into an address
//! 2. **[`DispatchSlot`]** - One entry point, unresolved until its first call
//! 3. **[`DispatchTable`]** - Every slot of the ABI, by index or by name
//! 4. **[`dispatch_table!`]** - A typed method per entry point, generated from a list
//! 5. **[`CapabilityRegistry`]** - Capability strings become [`CapabilitySet`] snapshots
//! 6. **[`Bootstrap`]** - Re-reads capabilities from the live context
//!
//! ## Declare an ABI
//!
//! ```rust,no_run
//! use gloam_core::{dispatch_table, SymbolSource};
//!
//! type GLenum = u32;
//!
//! dispatch_table! {
//!     pub struct Tiny;
//!
//!     fn glEnable(cap: GLenum) as enable;
//!     fn glFlush() as flush;
//! }
//!
//! fn draw<S: SymbolSource>(gl: &Tiny<S>) -> gloam_core::Result<()> {
//!     // First call resolves glEnable; later calls jump straight to it
//!     unsafe { gl.enable(0x0B71)? };
//!     unsafe { gl.flush()? };
//!     Ok(())
//! }
//! ```
//!
//! An entry point the platform lacks comes back as
//! [`ResolveError::NotFound`] before anything is called, so "is this feature
//! here?" is an ordinary `Result` rather than a crash.

pub mod bootstrap;
pub mod capability;
pub mod config;
pub mod error;
mod macros;
pub mod slot;
pub mod table;
pub mod traits;

pub use bootstrap::{Bootstrap, CapabilityStringSource};
pub use capability::{
    CapabilityRegistry, CapabilitySet, OverflowPolicy, ParseOptions, TokenOverflow,
    DEFAULT_TOKEN_LIMIT,
};
pub use error::{CapabilityError, GloamError, ResolveError, Result};
pub use slot::{DispatchSlot, SlotState};
pub use table::{DispatchTable, LoadReport};
pub use traits::{ProcAddress, SymbolSource};
