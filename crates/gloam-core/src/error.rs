//! Error types for gloam

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GloamError>;

/// Main error type for gloam
#[derive(Debug, Error)]
pub enum GloamError {
    #[error("Resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Capability query failed: {0}")]
    Capability(#[from] CapabilityError),

    #[error("Unknown entry point: {0}")]
    UnknownEntryPoint(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl GloamError {
    /// True when the error only means "this entry point is absent here"
    pub fn is_not_found(&self) -> bool {
        matches!(self, GloamError::Resolve(ResolveError::NotFound { .. }))
    }
}

/// Symbol resolution errors
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Symbol {symbol} not found via {strategy}")]
    NotFound {
        symbol: String,
        strategy: &'static str,
    },

    #[error("Invalid symbol name: {0:?}")]
    InvalidSymbolName(String),
}

/// Capability string errors
#[derive(Debug, Error)]
pub enum CapabilityError {
    #[error("Capability source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Capability source returned no string")]
    NullString,
}
