//! Capability strings become immutable flag snapshots
//!
//! A [`CapabilityRegistry`] is a fixed, ordered table of labels. Parsing a
//! space-delimited capability string against it produces a fresh
//! [`CapabilitySet`] with every flag cleared first, then set for each token
//! that matches a label exactly. Unknown tokens are ignored.
//!
//! Tokens are checked against a working-buffer bound before comparison. What
//! happens to a longer token is the [`OverflowPolicy`]; the default halts the
//! scan and records a [`TokenOverflow`] on the snapshot.
//!
//! ```
//! use gloam_core::{CapabilityRegistry, ParseOptions};
//!
//! static FEATURES: CapabilityRegistry = CapabilityRegistry::new(&["FEATURE_A", "FEATURE_B"]);
//!
//! let caps = FEATURES.parse_with("FEATURE_B OTHER", &ParseOptions::default());
//! assert!(caps.contains("FEATURE_B"));
//! assert!(!caps.contains("FEATURE_A"));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::config;
use crate::error::GloamError;

/// Size of the comparison buffer, in bytes, excluding the terminator
pub const DEFAULT_TOKEN_LIMIT: usize = 255;

/// What to do with a token longer than the working-buffer bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Stop scanning; later tokens are not examined
    #[default]
    Halt,
    /// Ignore the oversized token and keep scanning
    Skip,
    /// No bound at all
    Unbounded,
}

impl OverflowPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            OverflowPolicy::Halt => "halt",
            OverflowPolicy::Skip => "skip",
            OverflowPolicy::Unbounded => "unbounded",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverflowPolicy {
    type Err = GloamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "halt" | "stop" => Ok(OverflowPolicy::Halt),
            "skip" => Ok(OverflowPolicy::Skip),
            "unbounded" | "none" => Ok(OverflowPolicy::Unbounded),
            other => Err(GloamError::ConfigError(format!(
                "unknown token overflow policy {other:?} (expected halt, skip or unbounded)"
            ))),
        }
    }
}

/// How a capability string is tokenized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Longest token accepted, in bytes
    pub token_limit: usize,
    pub overflow: OverflowPolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            token_limit: DEFAULT_TOKEN_LIMIT,
            overflow: OverflowPolicy::Halt,
        }
    }
}

impl ParseOptions {
    /// Options from the process-wide configuration (environment or runtime overrides)
    pub fn from_config() -> Self {
        Self {
            token_limit: config::token_limit(),
            overflow: config::overflow_policy(),
        }
    }
}

/// A token that exceeded the bound and stopped the scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenOverflow {
    /// Byte offset of the token in the capability string
    pub offset: usize,
    pub len: usize,
    pub limit: usize,
}

/// A fixed table of capability labels
#[derive(Debug)]
pub struct CapabilityRegistry {
    labels: &'static [&'static str],
}

impl CapabilityRegistry {
    pub const fn new(labels: &'static [&'static str]) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|known| *known == label)
    }

    /// A snapshot with every flag cleared
    pub fn empty(&self) -> CapabilitySet {
        CapabilitySet {
            labels: self.labels,
            flags: vec![false; self.labels.len()].into_boxed_slice(),
            overflow: None,
        }
    }

    /// Parse with the process-wide options
    pub fn parse(&self, capabilities: &str) -> CapabilitySet {
        self.parse_with(capabilities, &ParseOptions::from_config())
    }

    /// Clear every flag, then set one per matching token
    pub fn parse_with(&self, capabilities: &str, options: &ParseOptions) -> CapabilitySet {
        let mut set = self.empty();
        let mut offset = 0;

        for token in capabilities.split(' ') {
            let token_offset = offset;
            offset += token.len() + 1;

            if options.overflow != OverflowPolicy::Unbounded && token.len() > options.token_limit {
                if options.overflow == OverflowPolicy::Halt {
                    log::warn!(
                        "Capability token at byte {token_offset} is {} bytes (limit {}); ignoring the rest of the string",
                        token.len(),
                        options.token_limit
                    );
                    set.overflow = Some(TokenOverflow {
                        offset: token_offset,
                        len: token.len(),
                        limit: options.token_limit,
                    });
                    break;
                }
                log::debug!(
                    "Skipping {}-byte capability token at byte {token_offset}",
                    token.len()
                );
                continue;
            }

            if let Some(index) = self.index_of(token) {
                set.flags[index] = true;
            }
        }

        set
    }
}

/// The flags produced by one parse, immutable once built
#[derive(Clone, PartialEq, Eq)]
pub struct CapabilitySet {
    labels: &'static [&'static str],
    flags: Box<[bool]>,
    overflow: Option<TokenOverflow>,
}

impl CapabilitySet {
    /// Is this label both known and enabled?
    pub fn contains(&self, label: &str) -> bool {
        self.labels
            .iter()
            .position(|known| *known == label)
            .is_some_and(|index| self.flags[index])
    }

    /// Flag by registry position; out-of-range reads as `false`
    pub fn get(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.labels.iter().copied().zip(self.flags.iter().copied())
    }

    /// Labels that are enabled, in registry order
    pub fn enabled(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().filter_map(|(label, on)| on.then_some(label))
    }

    pub fn any(&self) -> bool {
        self.flags.iter().any(|&on| on)
    }

    /// Set when the scan stopped early on an oversized token
    pub fn overflow(&self) -> Option<&TokenOverflow> {
        self.overflow.as_ref()
    }
}

impl fmt::Debug for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (label, on) in self.iter() {
            map.entry(&label, &on);
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TWO: CapabilityRegistry = CapabilityRegistry::new(&["A", "B"]);

    #[test]
    fn test_final_token_without_trailing_space() {
        let caps = TWO.parse_with("X B", &ParseOptions::default());
        assert!(caps.contains("B"));
    }

    #[test]
    fn test_double_and_trailing_spaces_are_harmless() {
        let caps = TWO.parse_with("A  B ", &ParseOptions::default());
        assert!(caps.get(0));
        assert!(caps.get(1));
        assert!(caps.overflow().is_none());
    }

    #[test]
    fn test_matching_is_exact() {
        let caps = TWO.parse_with("a AB BA", &ParseOptions::default());
        assert!(!caps.any());
    }

    #[test]
    fn test_token_at_limit_is_accepted() {
        let options = ParseOptions {
            token_limit: 1,
            overflow: OverflowPolicy::Halt,
        };
        let caps = TWO.parse_with("A B", &options);
        assert_eq!(caps.enabled().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("Skip".parse::<OverflowPolicy>().unwrap(), OverflowPolicy::Skip);
        assert_eq!("halt".parse::<OverflowPolicy>().unwrap(), OverflowPolicy::Halt);
        assert!("sometimes".parse::<OverflowPolicy>().is_err());
    }

    #[test]
    fn test_unknown_label_reads_false() {
        let caps = TWO.parse_with("A", &ParseOptions::default());
        assert!(!caps.contains("C"));
        assert!(!caps.get(7));
    }
}
