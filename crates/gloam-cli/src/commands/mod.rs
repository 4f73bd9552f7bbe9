//! Command implementations

pub mod info;
pub mod list;
pub mod parse;
pub mod resolve;

use gloam_core::{GloamError, Result};
use serde::Serialize;

/// Pretty-print a value as JSON on stdout
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| GloamError::Other(e.to_string()))?;
    println!("{json}");
    Ok(())
}
