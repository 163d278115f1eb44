//! The ordered plugin list and its case-insensitive side index.
//!
//! [`PluginIndex`] owns the invariant that every stored name is unique
//! case-insensitively and that the side index always agrees with the record
//! sequence. All structural changes go through [`insert_at`] and [`remove`];
//! nothing else touches both containers.
//!
//! [`insert_at`]: PluginIndex::insert_at
//! [`remove`]: PluginIndex::remove

use indexmap::IndexMap;
use unicase::UniCase;

use super::record::PluginRecord;
use super::{names_eq, trim_ghost_suffix};

/// An ordered sequence of [`PluginRecord`]s with constant-time
/// case-insensitive name lookup.
#[derive(Debug, Clone, Default)]
pub(crate) struct PluginIndex {
    records: Vec<PluginRecord>,
    by_name: IndexMap<UniCase<String>, usize>,
}

impl PluginIndex {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn records(&self) -> &[PluginRecord] {
        &self.records
    }

    /// Position of `name`, compared case-insensitively and without any
    /// `.ghost` extension.
    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        let name = trim_ghost_suffix(name);
        self.by_name.get(&UniCase::new(name.to_owned())).copied()
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub(crate) fn record_at(&self, position: usize) -> Option<&PluginRecord> {
        self.records.get(position)
    }

    pub(crate) fn names(&self) -> Vec<&str> {
        self.records.iter().map(PluginRecord::name).collect()
    }

    /// Active plugin names, in load order.
    pub(crate) fn active_names(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| r.is_active())
            .map(PluginRecord::name)
            .collect()
    }

    pub(crate) fn active_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_active()).count()
    }

    pub(crate) fn is_active(&self, name: &str) -> bool {
        self.position(name)
            .is_some_and(|i| self.records[i].is_active())
    }

    /// Sets the active flag on `name`. Returns false if the plugin is not in
    /// the index.
    pub(crate) fn set_active(&mut self, name: &str, active: bool) -> bool {
        match self.position(name) {
            Some(i) => {
                self.records[i].set_active(active);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear_active(&mut self) {
        for record in &mut self.records {
            record.set_active(false);
        }
    }

    /// Inserts `record` at `position`, shifting later records down.
    ///
    /// The caller must have checked that the name is not already present.
    pub(crate) fn insert_at(&mut self, position: usize, record: PluginRecord) {
        debug_assert!(!self.contains(record.name()));
        for slot in self.by_name.values_mut() {
            if *slot >= position {
                *slot += 1;
            }
        }
        self.by_name
            .insert(UniCase::new(record.name().to_owned()), position);
        self.records.insert(position, record);
    }

    /// Appends `record` at the end.
    pub(crate) fn push(&mut self, record: PluginRecord) {
        self.insert_at(self.records.len(), record);
    }

    /// Removes `name` and returns its record, or `None` if absent.
    pub(crate) fn remove(&mut self, name: &str) -> Option<PluginRecord> {
        let name = trim_ghost_suffix(name);
        let position = self.position(name)?;
        self.by_name.swap_remove(&UniCase::new(name.to_owned()));
        for slot in self.by_name.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(self.records.remove(position))
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
        self.by_name.clear();
    }

    /// Where `record` belongs according to the insertion rules: a pinned
    /// game master goes first, any other master goes at the end of the
    /// leading master block, and a non-master goes last.
    pub(crate) fn slot_for(&self, record: &PluginRecord, pinned_master: Option<&str>) -> usize {
        if let Some(master) = pinned_master {
            if names_eq(record.name(), master) {
                return 0;
            }
        }
        if record.is_master() {
            self.records
                .iter()
                .position(|r| !r.is_master())
                .unwrap_or(self.records.len())
        } else {
            self.records.len()
        }
    }

    /// Inserts `record` at the slot [`slot_for`](Self::slot_for) picks and
    /// returns that slot.
    pub(crate) fn insert_by_rule(
        &mut self,
        record: PluginRecord,
        pinned_master: Option<&str>,
    ) -> usize {
        let slot = self.slot_for(&record, pinned_master);
        self.insert_at(slot, record);
        slot
    }
}
