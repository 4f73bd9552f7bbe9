//! Global capability-parsing configuration
//!
//! Two process-wide settings control how capability strings are tokenized.
//! Both are read from the environment on first use and can be overridden at
//! runtime.
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `GLOAM_TOKEN_OVERFLOW` | `halt`, `skip`, `unbounded` | `halt` |
//! | `GLOAM_TOKEN_LIMIT` | positive integer (bytes) | `255` |
//!
//! # Example
//!
//! ```
//! use gloam_core::{config, OverflowPolicy};
//!
//! config::set_overflow_policy(OverflowPolicy::Skip);
//! assert_eq!(config::overflow_policy(), OverflowPolicy::Skip);
//!
//! config::set_overflow_policy(OverflowPolicy::Halt);
//! ```
//!
//! [`ParseOptions::default()`](crate::ParseOptions) ignores all of this;
//! only [`ParseOptions::from_config()`](crate::ParseOptions::from_config) and
//! [`CapabilityRegistry::parse`](crate::CapabilityRegistry::parse) consult it.

use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::OnceLock;

use crate::capability::{OverflowPolicy, DEFAULT_TOKEN_LIMIT};

/// Environment variable selecting the overflow policy
pub const OVERFLOW_ENV: &str = "GLOAM_TOKEN_OVERFLOW";

/// Environment variable setting the token bound
pub const LIMIT_ENV: &str = "GLOAM_TOKEN_LIMIT";

static OVERFLOW: AtomicU8 = AtomicU8::new(0);
static LIMIT: AtomicUsize = AtomicUsize::new(DEFAULT_TOKEN_LIMIT);

/// Whether the environment has been checked
static ENV_CHECKED: OnceLock<()> = OnceLock::new();

fn encode(policy: OverflowPolicy) -> u8 {
    match policy {
        OverflowPolicy::Halt => 0,
        OverflowPolicy::Skip => 1,
        OverflowPolicy::Unbounded => 2,
    }
}

fn decode(raw: u8) -> OverflowPolicy {
    match raw {
        1 => OverflowPolicy::Skip,
        2 => OverflowPolicy::Unbounded,
        _ => OverflowPolicy::Halt,
    }
}

/// Check environment variables and initialize the global state
fn check_env() {
    ENV_CHECKED.get_or_init(|| {
        if let Ok(val) = std::env::var(OVERFLOW_ENV) {
            match val.parse::<OverflowPolicy>() {
                Ok(policy) => {
                    OVERFLOW.store(encode(policy), Ordering::SeqCst);
                    log::info!("Capability token overflow policy {policy} via {OVERFLOW_ENV}");
                },
                Err(e) => log::warn!("Ignoring {OVERFLOW_ENV}: {e}"),
            }
        }

        if let Ok(val) = std::env::var(LIMIT_ENV) {
            match val.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => {
                    LIMIT.store(limit, Ordering::SeqCst);
                    log::info!("Capability token limit {limit} via {LIMIT_ENV}");
                },
                _ => log::warn!("Ignoring {LIMIT_ENV}={val:?}: expected a positive integer"),
            }
        }
    });
}

/// The active overflow policy
pub fn overflow_policy() -> OverflowPolicy {
    check_env();
    decode(OVERFLOW.load(Ordering::SeqCst))
}

/// Override the overflow policy for the whole process
pub fn set_overflow_policy(policy: OverflowPolicy) {
    check_env(); // Ensure env is checked first
    OVERFLOW.store(encode(policy), Ordering::SeqCst);
    log::debug!("Capability token overflow policy set to {policy}");
}

/// The active token bound, in bytes
pub fn token_limit() -> usize {
    check_env();
    LIMIT.load(Ordering::SeqCst)
}

/// Override the token bound; zero is ignored
pub fn set_token_limit(limit: usize) {
    check_env();
    if limit == 0 {
        log::warn!("Ignoring zero capability token limit");
        return;
    }
    LIMIT.store(limit, Ordering::SeqCst);
    log::debug!("Capability token limit set to {limit}");
}

#[cfg(test)]
mod tests {
    use super::*;

    // Global state: keep every mutation inside one test
    #[test]
    fn test_runtime_overrides() {
        set_overflow_policy(OverflowPolicy::Skip);
        assert_eq!(overflow_policy(), OverflowPolicy::Skip);
        set_overflow_policy(OverflowPolicy::Halt);
        assert_eq!(overflow_policy(), OverflowPolicy::Halt);

        let before = token_limit();
        set_token_limit(0);
        assert_eq!(token_limit(), before);
        set_token_limit(64);
        assert_eq!(token_limit(), 64);
        set_token_limit(before);
    }

    #[test]
    fn test_policy_encoding_round_trips() {
        for policy in [
            OverflowPolicy::Halt,
            OverflowPolicy::Skip,
            OverflowPolicy::Unbounded,
        ] {
            assert_eq!(decode(encode(policy)), policy);
        }
    }
}
