//! Every entry point of an ABI, each behind its own lazy slot
//!
//! A [`DispatchTable`] is built once from the full list of symbol names. It
//! owns the resolution strategy and one [`DispatchSlot`] per name. Generated
//! typed surfaces (see [`dispatch_table!`](crate::dispatch_table)) reach
//! slots by index; everything else can look them up by name.

use std::collections::HashMap;
use std::ffi::CStr;

use crate::error::{GloamError, Result};
use crate::slot::{DispatchSlot, SlotState};
use crate::traits::{ProcAddress, SymbolSource};

/// Outcome of resolving every slot up front
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Slots holding an address after the pass
    pub resolved: usize,
    /// Symbols the strategy could not find, in table order
    pub missing: Vec<&'static str>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// One lazily resolved slot per entry point, plus the strategy that fills them
pub struct DispatchTable<S> {
    source: S,
    slots: Box<[DispatchSlot]>,
    by_name: HashMap<&'static str, usize>,
}

impl<S: SymbolSource> DispatchTable<S> {
    /// Build a table with every slot unresolved
    pub fn new(source: S, names: &[&'static CStr]) -> Self {
        let slots: Box<[DispatchSlot]> = names.iter().map(|&name| DispatchSlot::new(name)).collect();

        let mut by_name = HashMap::with_capacity(slots.len());
        for (index, slot) in slots.iter().enumerate() {
            if by_name.contains_key(slot.symbol()) {
                log::warn!(
                    "Duplicate entry point {} at slot {index}; lookups by name use the first",
                    slot.symbol()
                );
                continue;
            }
            by_name.insert(slot.symbol(), index);
        }

        log::debug!(
            "Dispatch table ready: {} entry points via {}",
            slots.len(),
            source.name()
        );

        Self {
            source,
            slots,
            by_name,
        }
    }

    /// The strategy resolving this table's slots
    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> impl Iterator<Item = &DispatchSlot> {
        self.slots.iter()
    }

    pub fn slot(&self, index: usize) -> Option<&DispatchSlot> {
        self.slots.get(index)
    }

    pub fn slot_by_name(&self, name: &str) -> Option<&DispatchSlot> {
        self.by_name.get(name).map(|&index| &self.slots[index])
    }

    /// Resolve the slot at `index`, memoizing the address
    ///
    /// This is the path generated entry-point methods take on every call.
    #[inline]
    pub fn resolve_index(&self, index: usize) -> Result<ProcAddress> {
        let slot = self
            .slots
            .get(index)
            .ok_or_else(|| GloamError::UnknownEntryPoint(format!("slot #{index}")))?;
        slot.get_or_resolve(&self.source)
    }

    /// Resolve an entry point by its symbol name
    pub fn resolve(&self, name: &str) -> Result<ProcAddress> {
        self.slot_by_name(name)
            .ok_or_else(|| GloamError::UnknownEntryPoint(name.to_string()))?
            .get_or_resolve(&self.source)
    }

    /// Does this entry point exist on the current platform and driver?
    ///
    /// Resolves as a side effect, so a `true` answer makes the first call free.
    pub fn is_available(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    pub fn resolved_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_resolved()).count()
    }

    /// Resolve every slot now instead of on first call
    pub fn preload(&self) -> LoadReport {
        let mut report = LoadReport::default();
        for slot in self.slots.iter() {
            match slot.get_or_resolve(&self.source) {
                Ok(_) => report.resolved += 1,
                Err(_) => report.missing.push(slot.symbol()),
            }
        }

        log::info!(
            "Preloaded {}/{} entry points via {}",
            report.resolved,
            self.slots.len(),
            self.source.name()
        );
        report
    }

    /// Snapshot of every slot's state, in table order
    pub fn states(&self) -> Vec<(&'static str, SlotState)> {
        self.slots
            .iter()
            .map(|slot| (slot.symbol(), slot.state()))
            .collect()
    }
}

impl<S> std::fmt::Debug for DispatchTable<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchTable")
            .field("slots", &self.slots.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::c_void;

    static PRESENT: u8 = 1;

    struct OnlyFlush;

    impl SymbolSource for OnlyFlush {
        fn name(&self) -> &'static str {
            "only-flush"
        }

        fn resolve(&self, symbol: &CStr) -> Option<ProcAddress> {
            if symbol == c"glFlush" {
                ProcAddress::from_ptr(&PRESENT as *const u8 as *const c_void)
            } else {
                None
            }
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let table = DispatchTable::new(OnlyFlush, &[c"glFlush", c"glFinish"]);
        assert_eq!(table.len(), 2);
        assert!(table.resolve("glFlush").is_ok());
        assert!(table.resolve("glFinish").unwrap_err().is_not_found());
        assert!(matches!(
            table.resolve("glNope"),
            Err(GloamError::UnknownEntryPoint(_))
        ));
    }

    #[test]
    fn test_duplicates_use_first_slot() {
        let table = DispatchTable::new(OnlyFlush, &[c"glFlush", c"glFlush"]);
        table.resolve("glFlush").unwrap();
        assert!(table.slot(0).unwrap().is_resolved());
        assert!(!table.slot(1).unwrap().is_resolved());
    }

    #[test]
    fn test_out_of_range_index() {
        let table = DispatchTable::new(OnlyFlush, &[c"glFlush"]);
        assert!(matches!(
            table.resolve_index(9),
            Err(GloamError::UnknownEntryPoint(_))
        ));
    }
}
