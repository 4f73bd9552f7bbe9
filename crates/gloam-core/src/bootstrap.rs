//! Re-reading capabilities from the live environment
//!
//! [`Bootstrap`] pairs a [`CapabilityRegistry`] with a
//! [`CapabilityStringSource`] and publishes the latest [`CapabilitySet`].
//! Every [`run`](Bootstrap::run) clears the published snapshot before it
//! reads anything, so a failed or partial pass never leaves stale flags
//! behind. Readers hold an `Arc` to a snapshot, which a concurrent re-scan
//! replaces but never mutates.
//!
//! A snapshot describes the context that was current when `run` was called.
//! Keep one `Bootstrap` per native context when several are in play.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::capability::{CapabilityRegistry, CapabilitySet, ParseOptions};
use crate::error::Result;

/// Where the capability string comes from
///
/// Closures returning `Result<String>` implement this directly.
pub trait CapabilityStringSource: Send + Sync {
    /// Read the capability string as it is right now
    fn capability_string(&self) -> Result<String>;
}

impl<F> CapabilityStringSource for F
where
    F: Fn() -> Result<String> + Send + Sync,
{
    fn capability_string(&self) -> Result<String> {
        self()
    }
}

/// Clear, read, parse: one pass without publishing anything
pub fn scan<C: CapabilityStringSource + ?Sized>(
    registry: &CapabilityRegistry,
    source: &C,
    options: &ParseOptions,
) -> Result<CapabilitySet> {
    let capabilities = source.capability_string()?;
    log::trace!("Capability string: {capabilities:?}");
    Ok(registry.parse_with(&capabilities, options))
}

/// Owns the latest capability snapshot for one context
pub struct Bootstrap<C> {
    registry: &'static CapabilityRegistry,
    source: C,
    options: ParseOptions,
    current: RwLock<Arc<CapabilitySet>>,
}

impl<C: CapabilityStringSource> Bootstrap<C> {
    /// A bootstrap that parses with the process-wide options
    pub fn new(registry: &'static CapabilityRegistry, source: C) -> Self {
        Self::with_options(registry, source, ParseOptions::from_config())
    }

    pub fn with_options(
        registry: &'static CapabilityRegistry,
        source: C,
        options: ParseOptions,
    ) -> Self {
        Self {
            registry,
            current: RwLock::new(Arc::new(registry.empty())),
            source,
            options,
        }
    }

    pub fn registry(&self) -> &'static CapabilityRegistry {
        self.registry
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Re-scan the environment and publish the result
    ///
    /// On error the published snapshot stays cleared.
    pub fn run(&self) -> Result<Arc<CapabilitySet>> {
        *self.current.write() = Arc::new(self.registry.empty());

        let set = Arc::new(scan(self.registry, &self.source, &self.options)?);
        log::debug!(
            "Bootstrap found {}/{} capabilities",
            set.enabled().count(),
            self.registry.len()
        );

        *self.current.write() = Arc::clone(&set);
        Ok(set)
    }

    /// The latest published snapshot; all flags false before the first `run`
    pub fn current(&self) -> Arc<CapabilitySet> {
        Arc::clone(&self.current.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CapabilityError, GloamError};
    use std::sync::atomic::{AtomicBool, Ordering};

    static REG: CapabilityRegistry = CapabilityRegistry::new(&["ONE", "TWO"]);

    #[test]
    fn test_flags_false_before_first_run() {
        let boot = Bootstrap::new(&REG, || -> Result<String> { Ok("ONE TWO".to_string()) });
        assert!(!boot.current().any());
    }

    #[test]
    fn test_failed_run_leaves_snapshot_cleared() {
        let healthy = AtomicBool::new(true);
        let boot = Bootstrap::with_options(
            &REG,
            move || -> Result<String> {
                if healthy.swap(false, Ordering::SeqCst) {
                    Ok("ONE".to_string())
                } else {
                    Err(GloamError::Capability(CapabilityError::NullString))
                }
            },
            ParseOptions::default(),
        );

        boot.run().unwrap();
        assert!(boot.current().contains("ONE"));

        assert!(boot.run().is_err());
        assert!(!boot.current().any());
    }
}
