//! One entry point, resolved at most once
//!
//! A slot starts [`SlotState::Unresolved`]. The first successful resolution
//! stores the address in a one-time cell and every later call reads it
//! straight back, so the strategy is never consulted again. A failed
//! resolution stores nothing: the caller gets a typed error and the next call
//! may try again (for example once a context has been made current).

use std::ffi::CStr;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{ResolveError, Result};
use crate::traits::{ProcAddress, SymbolSource};

/// Where a slot is in its one-way lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Unresolved,
    Resolved(ProcAddress),
}

/// The current implementation of one named entry point
pub struct DispatchSlot {
    name: &'static CStr,
    resolved: OnceLock<ProcAddress>,
}

impl DispatchSlot {
    /// A fresh, unresolved slot for `name`
    pub const fn new(name: &'static CStr) -> Self {
        Self {
            name,
            resolved: OnceLock::new(),
        }
    }

    /// The symbol this slot resolves, as handed to the loader
    pub fn name(&self) -> &'static CStr {
        self.name
    }

    /// The symbol as UTF-8, for lookups and messages
    pub fn symbol(&self) -> &'static str {
        self.name.to_str().unwrap_or("<non-utf8 symbol>")
    }

    pub fn state(&self) -> SlotState {
        match self.resolved.get() {
            Some(addr) => SlotState::Resolved(*addr),
            None => SlotState::Unresolved,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// The stored address, without resolving
    pub fn address(&self) -> Option<ProcAddress> {
        self.resolved.get().copied()
    }

    /// Return the stored address, resolving through `source` on first use
    ///
    /// Racing callers may both consult the source; the first stored address
    /// wins and every caller receives that one.
    pub fn get_or_resolve<S: SymbolSource + ?Sized>(&self, source: &S) -> Result<ProcAddress> {
        if let Some(addr) = self.resolved.get() {
            return Ok(*addr);
        }

        let Some(found) = source.resolve(self.name) else {
            log::debug!("{} not found via {}", self.symbol(), source.name());
            return Err(ResolveError::NotFound {
                symbol: self.symbol().to_string(),
                strategy: source.name(),
            }
            .into());
        };

        let stored = *self.resolved.get_or_init(|| found);
        if stored == found {
            log::debug!("{} resolved via {} at {}", self.symbol(), source.name(), stored);
        } else {
            log::trace!("{} already resolved by another thread", self.symbol());
        }
        Ok(stored)
    }
}

impl fmt::Debug for DispatchSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchSlot")
            .field("name", &self.symbol())
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::c_void;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static TARGET: u8 = 0;

    struct OnceThenGone {
        calls: AtomicUsize,
    }

    impl SymbolSource for OnceThenGone {
        fn name(&self) -> &'static str {
            "once-then-gone"
        }

        fn resolve(&self, _symbol: &CStr) -> Option<ProcAddress> {
            // Only the first answer is a real address
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                ProcAddress::from_ptr(&TARGET as *const u8 as *const c_void)
            } else {
                None
            }
        }
    }

    #[test]
    fn test_new_slot_is_unresolved() {
        let slot = DispatchSlot::new(c"glFlush");
        assert_eq!(slot.state(), SlotState::Unresolved);
        assert_eq!(slot.symbol(), "glFlush");
        assert!(slot.address().is_none());
    }

    #[test]
    fn test_resolution_never_reverts() {
        let source = OnceThenGone {
            calls: AtomicUsize::new(0),
        };
        let slot = DispatchSlot::new(c"glFlush");

        let first = slot.get_or_resolve(&source).unwrap();
        // The source would now say "not found", but it is never asked
        let second = slot.get_or_resolve(&source).unwrap();

        assert_eq!(first, second);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(slot.state(), SlotState::Resolved(first));
    }
}
