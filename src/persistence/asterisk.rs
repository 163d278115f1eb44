//! Single-file ordering with activation markers (Fallout 4 onwards).
//!
//! Every line of the active-plugins file is an ordered entry; a leading `*`
//! marks the plugin active. The game force-loads its master file regardless
//! of any marker, so its line is written bare, as a pure order entry.

use super::codec;
use crate::error::LoadOrderError;
use crate::models::{PluginRecord, names_eq};
use crate::profile::GameProfile;

/// Parsed `(name, active)` entries, in file order. A missing file reads as
/// empty.
pub(crate) fn read_entries(profile: &GameProfile) -> Result<Vec<(String, bool)>, LoadOrderError> {
    let Some(content) = codec::read_windows_1252(&profile.active_plugins_file)? else {
        return Ok(Vec::new());
    };
    Ok(codec::plugin_lines(&content)
        .map(|line| match line.strip_prefix('*') {
            Some(name) => (name.to_string(), true),
            None => (line.to_string(), false),
        })
        .collect())
}

pub(crate) fn read_order_names(profile: &GameProfile) -> Result<Vec<String>, LoadOrderError> {
    Ok(read_entries(profile)?
        .into_iter()
        .map(|(name, _)| name)
        .collect())
}

pub(crate) fn read_active_names(profile: &GameProfile) -> Result<Vec<String>, LoadOrderError> {
    Ok(read_entries(profile)?
        .into_iter()
        .filter(|(_, active)| *active)
        .map(|(name, _)| name)
        .collect())
}

/// Writes one line per record in index order: the game master bare,
/// everything else starred when active.
pub(crate) fn write(profile: &GameProfile, records: &[PluginRecord]) -> Result<(), LoadOrderError> {
    let mut lines = Vec::with_capacity(records.len());
    for record in records {
        let line = if names_eq(record.name(), &profile.master_file) {
            record.name().to_string()
        } else if record.is_active() {
            format!("*{}", record.name())
        } else {
            record.name().to_string()
        };
        lines.push((line, record.name()));
    }
    codec::write_windows_1252(&profile.active_plugins_file, &lines)
}
