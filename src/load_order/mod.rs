//! The load order engine.
//!
//! [`LoadOrder`] holds one game's plugin sequence and active set in memory
//! and keeps every view of it consistent:
//!
//! - masters load before non-masters
//! - plugin names are unique case-insensitively
//! - a ghosted plugin file and its plain name are one plugin
//! - games that pin their master file keep it first and active
//! - an installed auxiliary master is active whenever it is in the order
//! - at most [`MAX_ACTIVE_PLUGINS`] plugins are active
//!
//! Mutations build a scratch copy, validate it, and only then replace the
//! live state, so a rejected call changes nothing. Loading trusts the
//! invariants over the files: stored listings are folded back through the
//! same placement rules, which silently repairs files other tools wrote
//! badly.
//!
//! # Example
//!
//! ```ignore
//! let profile = GameProfile::new(GameId::SkyrimSE, &game_path, &local_path);
//! let mut load_order = LoadOrder::new(profile, Box::new(my_oracle));
//!
//! load_order.load()?;
//! load_order.set_position("Blank.esp", 2)?;
//! load_order.activate("Blank.esp")?;
//! load_order.save()?;
//! ```

use crate::error::LoadOrderError;
use crate::freshness::FreshnessCache;
use crate::models::{PluginIndex, PluginRecord, names_eq, trim_ghost_suffix};
use crate::oracle::PluginOracle;
use crate::persistence::{self, codec, textfile};
use crate::profile::{GameProfile, LoadOrderMethod};
use crate::validation;

/// The most plugins a game will load as active at once. Plugins are indexed
/// by a single byte at runtime, with `0xFF` reserved for dynamic references.
pub const MAX_ACTIVE_PLUGINS: usize = 255;

/// One game's load order and active plugin set.
pub struct LoadOrder {
    profile: GameProfile,
    oracle: Box<dyn PluginOracle>,
    index: PluginIndex,
    freshness: FreshnessCache,
}

impl LoadOrder {
    /// Creates an empty load order for `profile`. Call
    /// [`load`](Self::load) to populate it from disk.
    pub fn new(profile: GameProfile, oracle: Box<dyn PluginOracle>) -> Self {
        Self {
            profile,
            oracle,
            index: PluginIndex::new(),
            freshness: FreshnessCache::new(),
        }
    }

    pub fn profile(&self) -> &GameProfile {
        &self.profile
    }

    /// Plugin names in load order.
    pub fn load_order(&self) -> Vec<&str> {
        self.index.names()
    }

    /// The position of `name`, compared case-insensitively. Absent plugins
    /// report the load order length, one past the last valid position.
    pub fn position(&self, name: &str) -> usize {
        self.index.position(name).unwrap_or(self.index.len())
    }

    /// The plugin at `position`, or `None` past the end.
    pub fn plugin_at(&self, position: usize) -> Option<&str> {
        self.index.record_at(position).map(PluginRecord::name)
    }

    /// Active plugin names, in load order.
    pub fn active_plugins(&self) -> Vec<&str> {
        self.index.active_names()
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.index.is_active(name)
    }

    /// Reads the load order and active set from disk, repairing anything
    /// the stored files get wrong.
    ///
    /// Each portion is re-read only if its sources changed since the last
    /// load or save; an untouched filesystem makes this a no-op. Missing
    /// files read as empty: installed plugins are still picked up from the
    /// plugins directory.
    pub fn load(&mut self) -> Result<(), LoadOrderError> {
        let order_stale = self.freshness.order_stale(&self.profile);
        let active_stale = self.freshness.active_stale(&self.profile);
        if !order_stale && !active_stale {
            tracing::debug!("nothing on disk changed, keeping cached load order");
            return Ok(());
        }

        let mut scratch = if order_stale {
            self.rebuild_order()?
        } else {
            self.index.clone()
        };

        let active_names: Vec<String> = if active_stale {
            persistence::read_active_names(&self.profile)?
        } else {
            self.index
                .active_names()
                .into_iter()
                .map(String::from)
                .collect()
        };
        self.apply_active(&mut scratch, &active_names);

        self.index = scratch;
        let names = self.index.names();
        self.freshness.capture(&self.profile, &names);
        tracing::info!(
            plugins = self.index.len(),
            active = self.index.active_count(),
            "loaded load order"
        );
        Ok(())
    }

    /// Writes the load order and active set back through the profile's
    /// persistence method.
    pub fn save(&mut self) -> Result<(), LoadOrderError> {
        persistence::write(&self.profile, self.index.records())?;
        let names = self.index.names();
        self.freshness.capture(&self.profile, &names);
        tracing::info!(
            plugins = self.index.len(),
            active = self.index.active_count(),
            "saved load order"
        );
        Ok(())
    }

    /// Drops the in-memory state and the freshness snapshot. The next
    /// [`load`](Self::load) rebuilds from disk unconditionally.
    pub fn clear(&mut self) {
        self.index.clear();
        self.freshness.clear();
        tracing::debug!("cleared cached load order state");
    }

    /// Replaces the whole load order with exactly `names`, in the given
    /// sequence.
    ///
    /// Activation state carries over for plugins that stay; everything else
    /// starts inactive, except plugins the game forces active. Plugins in
    /// the old order but not in `names` are forgotten.
    pub fn set_load_order(&mut self, names: &[&str]) -> Result<(), LoadOrderError> {
        let names: Vec<&str> = names.iter().map(|name| trim_ghost_suffix(name)).collect();
        validation::validate_all_valid(&names, self.oracle.as_ref())?;
        validation::validate_unique(&names)?;

        let mut scratch = PluginIndex::new();
        for name in &names {
            scratch.push(PluginRecord::new(*name, self.oracle.is_master(name)));
        }
        validation::validate_partition(scratch.records())?;
        validation::validate_starts_with_master(&self.profile, &names)?;

        for name in &names {
            if self.index.is_active(name) {
                scratch.set_active(name, true);
            }
        }
        self.apply_forced_flags(&mut scratch);
        validation::validate_active_count(scratch.active_count())?;

        self.index = scratch;
        Ok(())
    }

    /// Moves `name` to `position`, or inserts it there if it was not in the
    /// order. Positions past the end clamp to the end. The plugin keeps its
    /// activation state.
    pub fn set_position(&mut self, name: &str, position: usize) -> Result<(), LoadOrderError> {
        let name = trim_ghost_suffix(name);
        if !self.oracle.is_valid(name) {
            return Err(LoadOrderError::InvalidPlugin(name.to_string()));
        }

        let mut scratch = self.index.clone();
        let record = scratch
            .remove(name)
            .unwrap_or_else(|| PluginRecord::new(name, self.oracle.is_master(name)));
        let slot = position.min(scratch.len());
        scratch.insert_at(slot, record);

        validation::validate_partition(scratch.records())?;
        validation::validate_slot_zero(&self.profile, name, position, self.index.is_empty())?;

        self.index = scratch;
        Ok(())
    }

    /// Replaces the active set with exactly `names`.
    ///
    /// Names not yet in the load order are inserted by the usual placement
    /// rules. The pinned game master and an installed auxiliary master must
    /// be listed; they cannot be dropped by replacement.
    pub fn set_active_plugins(&mut self, names: &[&str]) -> Result<(), LoadOrderError> {
        let names: Vec<&str> = names.iter().map(|name| trim_ghost_suffix(name)).collect();
        validation::validate_all_valid(&names, self.oracle.as_ref())?;
        validation::validate_unique(&names)?;
        validation::validate_forced_active_listed(
            &self.profile,
            self.oracle.as_ref(),
            &names,
            self.index.is_empty(),
        )?;
        validation::validate_active_count(names.len())?;

        let mut scratch = self.index.clone();
        scratch.clear_active();
        for name in &names {
            if !scratch.contains(name) {
                let record = PluginRecord::new(*name, self.oracle.is_master(name));
                scratch.insert_by_rule(record, self.pinned_master());
            }
            scratch.set_active(name, true);
        }

        self.index = scratch;
        Ok(())
    }

    /// Activates `name`, inserting it into the order first if needed.
    /// Activating an already-active plugin is a no-op.
    pub fn activate(&mut self, name: &str) -> Result<(), LoadOrderError> {
        let name = trim_ghost_suffix(name);
        if !self.oracle.is_valid(name) {
            return Err(LoadOrderError::InvalidPlugin(name.to_string()));
        }
        if self.index.is_active(name) {
            return Ok(());
        }

        let mut scratch = self.index.clone();
        if !scratch.contains(name) {
            let record = PluginRecord::new(name, self.oracle.is_master(name));
            scratch.insert_by_rule(record, self.pinned_master());
        }
        scratch.set_active(name, true);
        validation::validate_active_count(scratch.active_count())?;

        self.index = scratch;
        Ok(())
    }

    /// Deactivates `name`. Deactivating a plugin that is absent or already
    /// inactive is a no-op, but plugins the game forces active are refused
    /// even then.
    pub fn deactivate(&mut self, name: &str) -> Result<(), LoadOrderError> {
        validation::validate_can_deactivate(&self.profile, self.oracle.as_ref(), name)?;
        self.index.set_active(name, false);
        Ok(())
    }

    /// Whether anything the current state was derived from has changed on
    /// disk. True before the first load, and after [`clear`](Self::clear).
    pub fn has_filesystem_changed(&self) -> bool {
        self.freshness.has_changed(&self.profile)
    }

    /// Whether the two stored files of a textfile-based game agree on the
    /// order of the plugins they share.
    ///
    /// The listings are compared as stored, so a disagreement counts even
    /// when loading would repair both files to the same order. Games with a
    /// single source of truth are always synchronised, as is a textfile-based
    /// game with either file missing, since loading would then derive one
    /// listing from the other.
    pub fn is_synchronised(profile: &GameProfile) -> Result<bool, LoadOrderError> {
        if profile.method != LoadOrderMethod::Textfile {
            return Ok(true);
        }
        let Some(order_path) = profile.load_order_file() else {
            return Ok(true);
        };
        let Some(order_names) = textfile::read_names_from(order_path)? else {
            return Ok(true);
        };
        let Some(active_content) = codec::read_windows_1252(&profile.active_plugins_file)? else {
            return Ok(true);
        };
        let active_names: Vec<&str> =
            codec::prefixed_names(&active_content, &profile.active_line_prefix).collect();

        // The order-file names the active file also lists must appear in
        // the active file's own sequence.
        Ok(order_names
            .iter()
            .map(String::as_str)
            .filter(|name| active_names.iter().any(|active| names_eq(active, name)))
            .zip(active_names.iter())
            .all(|(order_name, active_name)| names_eq(order_name, active_name)))
    }

    fn pinned_master(&self) -> Option<&str> {
        self.profile
            .pins_master()
            .then(|| self.profile.master_file.as_str())
    }

    /// Rebuilds the plugin sequence from its on-disk sources: the stored
    /// listing, then plugins the game loads regardless of the listing, then
    /// whatever else is installed.
    fn rebuild_order(&self) -> Result<PluginIndex, LoadOrderError> {
        let order_names = persistence::read_order_names(&self.profile, self.oracle.as_ref())?;
        let mut scratch = fold_into_index(&self.profile, self.oracle.as_ref(), order_names);

        if self.profile.pins_master()
            && self.oracle.is_valid(&self.profile.master_file)
            && !scratch.contains(&self.profile.master_file)
        {
            let record = PluginRecord::new(
                self.profile.master_file.clone(),
                self.oracle.is_master(&self.profile.master_file),
            );
            scratch.insert_by_rule(record, self.pinned_master());
        }
        if let Some(aux) = self.profile.auxiliary_master() {
            if self.oracle.is_valid(aux) && !scratch.contains(aux) {
                let record = PluginRecord::new(aux, self.oracle.is_master(aux));
                scratch.insert_by_rule(record, self.pinned_master());
            }
        }

        for name in persistence::installed_plugins(&self.profile, self.oracle.as_ref())? {
            if !scratch.contains(&name) {
                let is_master = self.oracle.is_master(&name);
                scratch.insert_by_rule(PluginRecord::new(name, is_master), self.pinned_master());
            }
        }
        Ok(scratch)
    }

    /// Clears and reapplies activation: forced plugins first so the cap can
    /// never push them out, then `names` until the cap is reached.
    fn apply_active(&self, scratch: &mut PluginIndex, names: &[String]) {
        scratch.clear_active();
        self.apply_forced_flags(scratch);

        let mut count = scratch.active_count();
        for name in names {
            if scratch.is_active(name) {
                continue;
            }
            if count == MAX_ACTIVE_PLUGINS {
                tracing::warn!(
                    limit = MAX_ACTIVE_PLUGINS,
                    "stored active set exceeds the limit, dropping the rest"
                );
                break;
            }
            if scratch.set_active(name, true) {
                count += 1;
            } else {
                tracing::warn!(plugin = %name, "ignoring active plugin that is not installed");
            }
        }
    }

    /// Marks the plugins the game itself keeps active: the pinned game
    /// master, and the auxiliary master while it is installed. Plugins not
    /// in the index are skipped.
    fn apply_forced_flags(&self, scratch: &mut PluginIndex) {
        if self.profile.pins_master() {
            scratch.set_active(&self.profile.master_file, true);
        }
        if let Some(aux) = self.profile.auxiliary_master() {
            if self.oracle.is_valid(aux) {
                scratch.set_active(aux, true);
            }
        }
    }
}

/// Folds a stored listing into an index: ghost extensions are trimmed,
/// invalid names are dropped, case-insensitive repeats keep their first
/// occurrence, and each record lands where the placement rules put it.
fn fold_into_index(
    profile: &GameProfile,
    oracle: &dyn PluginOracle,
    names: Vec<String>,
) -> PluginIndex {
    let pinned = profile
        .pins_master()
        .then(|| profile.master_file.as_str());
    let mut index = PluginIndex::new();
    for name in names {
        let name = trim_ghost_suffix(&name);
        if !oracle.is_valid(name) {
            tracing::warn!(plugin = %name, "dropping invalid plugin from a stored listing");
            continue;
        }
        if index.contains(name) {
            continue;
        }
        let is_master = oracle.is_master(name);
        index.insert_by_rule(PluginRecord::new(name, is_master), pinned);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::MockPluginOracle;
    use crate::profile::GameId;
    use camino::Utf8Path;

    fn oracle_for(valid: &'static [&'static str]) -> Box<MockPluginOracle> {
        let mut oracle = MockPluginOracle::new();
        oracle
            .expect_is_valid()
            .returning(move |name| valid.iter().any(|v| v.eq_ignore_ascii_case(name)));
        oracle
            .expect_is_master()
            .returning(|name| name.to_ascii_lowercase().ends_with(".esm"));
        Box::new(oracle)
    }

    fn skyrim(valid: &'static [&'static str]) -> LoadOrder {
        let profile = GameProfile::new(
            GameId::Skyrim,
            Utf8Path::new("/game"),
            Utf8Path::new("/local"),
        );
        LoadOrder::new(profile, oracle_for(valid))
    }

    fn oblivion(valid: &'static [&'static str]) -> LoadOrder {
        let profile = GameProfile::new(
            GameId::Oblivion,
            Utf8Path::new("/game"),
            Utf8Path::new("/local"),
        );
        LoadOrder::new(profile, oracle_for(valid))
    }

    const PLUGINS: &[&str] = &["Skyrim.esm", "Blank.esm", "Blank.esp", "Other.esp"];

    #[test]
    fn test_set_load_order_is_an_exact_replacement() {
        let mut lo = skyrim(PLUGINS);
        lo.set_load_order(&["Skyrim.esm", "Blank.esm", "Blank.esp", "Other.esp"])
            .unwrap();
        lo.set_load_order(&["Skyrim.esm", "Blank.esp"]).unwrap();

        assert_eq!(lo.load_order(), vec!["Skyrim.esm", "Blank.esp"]);
        assert_eq!(lo.position("Other.esp"), 2);
        assert_eq!(lo.plugin_at(2), None);
    }

    #[test]
    fn test_set_load_order_rejects_unknown_and_duplicate_names() {
        let mut lo = skyrim(PLUGINS);

        let err = lo
            .set_load_order(&["Skyrim.esm", "missing.esp"])
            .unwrap_err();
        assert!(matches!(err, LoadOrderError::InvalidPlugin(_)));

        let err = lo
            .set_load_order(&["Skyrim.esm", "Blank.esp", "blank.ESP"])
            .unwrap_err();
        assert!(matches!(err, LoadOrderError::DuplicatePlugin(_)));

        assert!(lo.load_order().is_empty(), "rejected calls must not commit");
    }

    #[test]
    fn test_set_load_order_requires_the_master_first_when_pinned() {
        let mut lo = skyrim(PLUGINS);
        let err = lo.set_load_order(&["Blank.esm", "Blank.esp"]).unwrap_err();
        assert!(matches!(err, LoadOrderError::ForcedPositionViolation(_)));

        // Timestamp games may order the master anywhere.
        let mut lo = oblivion(&["Oblivion.esm", "Blank.esm", "Blank.esp"]);
        lo.set_load_order(&["Blank.esm", "Oblivion.esm", "Blank.esp"])
            .unwrap();
        assert_eq!(lo.position("Oblivion.esm"), 1);
    }

    #[test]
    fn test_set_load_order_treats_ghosted_spellings_as_the_same_plugin() {
        let mut lo = skyrim(PLUGINS);
        lo.set_load_order(&["Skyrim.esm", "Blank.esm.ghost", "Blank.esp"])
            .unwrap();

        assert_eq!(lo.load_order(), vec!["Skyrim.esm", "Blank.esm", "Blank.esp"]);
        assert_eq!(lo.position("blank.esm.GHOST"), 1);

        let err = lo
            .set_load_order(&["Skyrim.esm", "Blank.esm", "blank.esm.ghost"])
            .unwrap_err();
        assert!(matches!(err, LoadOrderError::DuplicatePlugin(_)));
    }

    #[test]
    fn test_set_load_order_activates_the_pinned_master() {
        let mut lo = skyrim(PLUGINS);
        lo.set_load_order(&["Skyrim.esm", "Blank.esp"]).unwrap();
        assert!(lo.is_active("Skyrim.esm"));

        let mut lo = oblivion(&["Oblivion.esm", "Blank.esp"]);
        lo.set_load_order(&["Oblivion.esm", "Blank.esp"]).unwrap();
        assert!(!lo.is_active("Oblivion.esm"));
    }

    #[test]
    fn test_set_position_moves_and_inserts() {
        let mut lo = skyrim(PLUGINS);
        lo.set_load_order(&["Skyrim.esm", "Blank.esm", "Blank.esp"])
            .unwrap();
        lo.activate("Blank.esp").unwrap();

        // Move an existing plugin; out-of-range clamps to the end.
        lo.set_position("Blank.esp", 99).unwrap();
        assert_eq!(lo.position("Blank.esp"), 2);

        // Insert a plugin that was not listed.
        lo.set_position("Other.esp", 2).unwrap();
        assert_eq!(
            lo.load_order(),
            vec!["Skyrim.esm", "Blank.esm", "Other.esp", "Blank.esp"]
        );
        assert!(lo.is_active("Blank.esp"), "moving keeps activation");
    }

    #[test]
    fn test_set_position_enforces_partition_and_pinning() {
        let mut lo = skyrim(PLUGINS);
        lo.set_load_order(&["Skyrim.esm", "Blank.esm", "Blank.esp"])
            .unwrap();

        let err = lo.set_position("Blank.esp", 1).unwrap_err();
        assert!(matches!(err, LoadOrderError::OrderingViolation(_)));

        let err = lo.set_position("Skyrim.esm", 1).unwrap_err();
        assert!(matches!(err, LoadOrderError::ForcedPositionViolation(_)));

        let err = lo.set_position("Blank.esm", 0).unwrap_err();
        assert!(matches!(err, LoadOrderError::ForcedPositionViolation(_)));

        // Nothing committed.
        assert_eq!(
            lo.load_order(),
            vec!["Skyrim.esm", "Blank.esm", "Blank.esp"]
        );
    }

    #[test]
    fn test_position_zero_is_refused_even_on_an_empty_order_when_pinned() {
        let mut lo = skyrim(PLUGINS);
        let err = lo.set_position("Blank.esm", 0).unwrap_err();
        assert!(matches!(err, LoadOrderError::ForcedPositionViolation(_)));

        lo.set_position("Skyrim.esm", 0).unwrap();
        assert_eq!(lo.load_order(), vec!["Skyrim.esm"]);
    }

    #[test]
    fn test_the_master_clamps_into_an_empty_order() {
        let mut lo = skyrim(PLUGINS);
        lo.set_position("Skyrim.esm", 5).unwrap();
        assert_eq!(lo.load_order(), vec!["Skyrim.esm"]);
        assert_eq!(lo.position("Skyrim.esm"), 0);

        // Once the order holds plugins the master is pinned again.
        let err = lo.set_position("Skyrim.esm", 5).unwrap_err();
        assert!(matches!(err, LoadOrderError::ForcedPositionViolation(_)));
    }

    #[test]
    fn test_activate_inserts_by_the_placement_rules() {
        let mut lo = skyrim(PLUGINS);
        lo.activate("Blank.esp").unwrap();
        lo.activate("Blank.esm").unwrap();
        lo.activate("Skyrim.esm").unwrap();

        assert_eq!(lo.load_order(), vec!["Skyrim.esm", "Blank.esm", "Blank.esp"]);
        assert_eq!(lo.active_plugins().len(), 3);
    }

    #[test]
    fn test_activate_rejects_invalid_plugins() {
        let mut lo = skyrim(PLUGINS);
        let err = lo.activate("missing.esp").unwrap_err();
        assert!(matches!(err, LoadOrderError::InvalidPlugin(_)));
    }

    #[test]
    fn test_activate_matches_names_case_insensitively() {
        let mut lo = skyrim(PLUGINS);
        lo.set_load_order(&["Skyrim.esm", "Blank.esp"]).unwrap();

        lo.activate("BLANK.ESP").unwrap();
        assert!(lo.is_active("blank.esp"));
        assert_eq!(lo.load_order().len(), 2, "no duplicate record is created");
    }

    #[test]
    fn test_activate_stops_at_the_active_limit() {
        let mut oracle = MockPluginOracle::new();
        oracle
            .expect_is_valid()
            .returning(|name| name.ends_with(".esp"));
        oracle.expect_is_master().returning(|_| false);
        let profile = GameProfile::new(
            GameId::Oblivion,
            Utf8Path::new("/game"),
            Utf8Path::new("/local"),
        );
        let mut lo = LoadOrder::new(profile, Box::new(oracle));

        for i in 0..MAX_ACTIVE_PLUGINS {
            lo.activate(&format!("Plugin{i}.esp")).unwrap();
        }
        assert_eq!(lo.active_plugins().len(), MAX_ACTIVE_PLUGINS);

        let err = lo.activate("OneMore.esp").unwrap_err();
        assert!(matches!(err, LoadOrderError::ActiveLimitExceeded));
        assert_eq!(lo.active_plugins().len(), MAX_ACTIVE_PLUGINS);
        assert!(
            !lo.is_active("OneMore.esp"),
            "the overflowing plugin must not stay active"
        );
    }

    #[test]
    fn test_deactivate_refuses_forced_plugins_before_checking_presence() {
        // Update.esm is installed, so it is forced even while the order is
        // still empty.
        let mut lo = skyrim(&["Skyrim.esm", "Update.esm", "Blank.esp"]);
        assert!(matches!(
            lo.deactivate("Skyrim.esm"),
            Err(LoadOrderError::ForcedActiveViolation(_))
        ));
        assert!(matches!(
            lo.deactivate("Update.esm"),
            Err(LoadOrderError::ForcedActiveViolation(_))
        ));

        // Absent non-forced plugins are a quiet no-op.
        lo.deactivate("Blank.esp").unwrap();
    }

    #[test]
    fn test_set_active_plugins_replaces_and_inserts() {
        let mut lo = skyrim(PLUGINS);
        lo.set_load_order(&["Skyrim.esm", "Blank.esm"]).unwrap();
        lo.activate("Blank.esm").unwrap();

        lo.set_active_plugins(&["Skyrim.esm", "Blank.esp"]).unwrap();
        assert!(lo.is_active("Skyrim.esm"));
        assert!(lo.is_active("Blank.esp"));
        assert!(!lo.is_active("Blank.esm"), "unlisted plugins deactivate");
        // The inserted non-master went to the end.
        assert_eq!(lo.position("Blank.esp"), 2);
    }

    #[test]
    fn test_set_active_plugins_requires_forced_plugins() {
        let mut lo = skyrim(PLUGINS);
        lo.set_load_order(&["Skyrim.esm", "Blank.esm"]).unwrap();

        let err = lo.set_active_plugins(&["Blank.esm"]).unwrap_err();
        assert!(matches!(err, LoadOrderError::ForcedActiveViolation(_)));
    }

    #[test]
    fn test_clear_forgets_everything() {
        let mut lo = skyrim(PLUGINS);
        lo.set_load_order(&["Skyrim.esm", "Blank.esp"]).unwrap();
        lo.clear();

        assert!(lo.load_order().is_empty());
        assert!(lo.active_plugins().is_empty());
        assert!(lo.has_filesystem_changed());
    }
}
