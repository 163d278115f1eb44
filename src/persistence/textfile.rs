//! Textfile-based ordering (Skyrim).
//!
//! The full order lives in `loadorder.txt` and the active set in a separate
//! `plugins.txt`. The two files can drift apart when other tools write only
//! one of them; see [`LoadOrder::is_synchronised`](crate::LoadOrder::is_synchronised).

use camino::Utf8Path;

use super::codec;
use crate::error::LoadOrderError;
use crate::models::PluginRecord;
use crate::profile::GameProfile;

/// Names listed in `loadorder.txt`, or `None` when the file is absent and
/// the caller should fall back to the active-plugins listing.
pub(crate) fn read_order_names(
    profile: &GameProfile,
) -> Result<Option<Vec<String>>, LoadOrderError> {
    let Some(path) = profile.load_order_file() else {
        return Ok(None);
    };
    read_names_from(path)
}

pub(crate) fn read_names_from(path: &Utf8Path) -> Result<Option<Vec<String>>, LoadOrderError> {
    let Some(content) = codec::read_utf8_with_fallback(path)? else {
        return Ok(None);
    };
    Ok(Some(
        codec::plugin_lines(&content).map(str::to_owned).collect(),
    ))
}

/// Writes the full order to `loadorder.txt` and the active set to the
/// active-plugins file.
pub(crate) fn write(profile: &GameProfile, records: &[PluginRecord]) -> Result<(), LoadOrderError> {
    if let Some(path) = profile.load_order_file() {
        let names: Vec<&str> = records.iter().map(PluginRecord::name).collect();
        codec::write_utf8(path, &names)?;
    }
    super::write_active_file(profile, records)
}
