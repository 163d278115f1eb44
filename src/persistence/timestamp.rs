//! Timestamp-based ordering (Morrowind through Fallout: New Vegas).
//!
//! These games order plugins by the ascending modification times of the
//! plugin files themselves; only the active set has a file of its own.

use filetime::FileTime;
use std::fs;
use std::io;

use crate::error::LoadOrderError;
use crate::models::PluginRecord;
use crate::oracle::PluginOracle;
use crate::profile::GameProfile;

/// Installed valid plugins sorted by ascending modification time. Equal
/// stamps keep directory iteration order.
pub(crate) fn read_order_names(
    profile: &GameProfile,
    oracle: &dyn PluginOracle,
) -> Result<Vec<String>, LoadOrderError> {
    let names = super::installed_plugins(profile, oracle)?;
    let mut entries = Vec::with_capacity(names.len());
    for name in names {
        let path = super::plugin_path(profile, &name);
        match fs::metadata(&path) {
            Ok(metadata) => {
                entries.push((name, FileTime::from_last_modification_time(&metadata)));
            }
            // A plugin deleted mid-scan just stops being part of the order.
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(LoadOrderError::io(path, e)),
        }
    }
    entries.sort_by_key(|(_, mtime)| *mtime);
    Ok(entries.into_iter().map(|(name, _)| name).collect())
}

/// Stamps each plugin file a minute later than the one before it, so coarse
/// filesystem clocks cannot produce ties, then writes the active set.
pub(crate) fn write(profile: &GameProfile, records: &[PluginRecord]) -> Result<(), LoadOrderError> {
    let base = FileTime::now().unix_seconds();
    for (i, record) in records.iter().enumerate() {
        let path = super::plugin_path(profile, record.name());
        let mtime = FileTime::from_unix_time(base + 60 * i as i64, 0);
        filetime::set_file_mtime(&path, mtime).map_err(|e| LoadOrderError::io(path, e))?;
    }
    super::write_active_file(profile, records)
}
