//! Persistence strategies for the three load order methods.
//!
//! Each strategy implements the same read/write surface over its own file
//! layout; [`read_order_names`], [`read_active_names`], and [`write`]
//! dispatch on the profile's [`LoadOrderMethod`] so the engine performs one
//! dispatch per load or save and stays method-agnostic everywhere else.

pub(crate) mod asterisk;
pub(crate) mod codec;
pub(crate) mod textfile;
pub(crate) mod timestamp;

use camino::Utf8PathBuf;
use rayon::prelude::*;
use std::fs;
use std::io;

use crate::error::LoadOrderError;
use crate::models::{PluginRecord, trim_ghost_suffix};
use crate::oracle::PluginOracle;
use crate::profile::{GameProfile, LoadOrderMethod};

/// Ordered plugin names implied by the stored state, before any repair.
///
/// For textfile games a missing `loadorder.txt` falls back to the
/// active-plugins listing, which lists plugins in load order too.
pub(crate) fn read_order_names(
    profile: &GameProfile,
    oracle: &dyn PluginOracle,
) -> Result<Vec<String>, LoadOrderError> {
    match profile.method {
        LoadOrderMethod::Timestamp => timestamp::read_order_names(profile, oracle),
        LoadOrderMethod::Textfile => match textfile::read_order_names(profile)? {
            Some(names) => Ok(names),
            None => read_active_names(profile),
        },
        LoadOrderMethod::Asterisk => asterisk::read_order_names(profile),
    }
}

/// Stored active plugin names, in file order.
pub(crate) fn read_active_names(profile: &GameProfile) -> Result<Vec<String>, LoadOrderError> {
    match profile.method {
        LoadOrderMethod::Asterisk => asterisk::read_active_names(profile),
        _ => {
            let Some(content) = codec::read_windows_1252(&profile.active_plugins_file)? else {
                return Ok(Vec::new());
            };
            Ok(codec::prefixed_names(&content, &profile.active_line_prefix)
                .map(str::to_owned)
                .collect())
        }
    }
}

/// Writes the order and active set back through the profile's strategy.
pub(crate) fn write(profile: &GameProfile, records: &[PluginRecord]) -> Result<(), LoadOrderError> {
    match profile.method {
        LoadOrderMethod::Timestamp => timestamp::write(profile, records),
        LoadOrderMethod::Textfile => textfile::write(profile, records),
        LoadOrderMethod::Asterisk => asterisk::write(profile, records),
    }
}

/// Names of installed valid plugins, in directory iteration order. Ghosted
/// files are reported under their unghosted name.
///
/// Validity checks read plugin headers, so they run in parallel.
pub(crate) fn installed_plugins(
    profile: &GameProfile,
    oracle: &dyn PluginOracle,
) -> Result<Vec<String>, LoadOrderError> {
    let names = scan_dir(profile)?;
    Ok(names
        .into_par_iter()
        .map(|mut name| {
            let len = trim_ghost_suffix(&name).len();
            name.truncate(len);
            name
        })
        .filter(|name| oracle.is_valid(name))
        .collect())
}

/// The on-disk path of the installed plugin `name`: the plain file when it
/// exists, otherwise its ghosted spelling.
pub(crate) fn plugin_path(profile: &GameProfile, name: &str) -> Utf8PathBuf {
    let path = profile.plugins_dir.join(name);
    if path.exists() {
        return path;
    }
    let ghosted = profile.plugins_dir.join(format!("{name}.ghost"));
    if ghosted.exists() { ghosted } else { path }
}

/// File names in the plugins directory. A missing directory scans as empty.
fn scan_dir(profile: &GameProfile) -> Result<Vec<String>, LoadOrderError> {
    let dir = &profile.plugins_dir;
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(LoadOrderError::io(dir.clone(), e)),
    };
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| LoadOrderError::io(dir.clone(), e))?;
        // Plugin names must be listable in the order files, so anything
        // without a UTF-8 name cannot be a plugin.
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }
    Ok(names)
}

/// Writes the active records to the active-plugins file, one prefixed line
/// per plugin, in load order.
pub(crate) fn write_active_file(
    profile: &GameProfile,
    records: &[PluginRecord],
) -> Result<(), LoadOrderError> {
    let lines: Vec<(String, &str)> = records
        .iter()
        .filter(|r| r.is_active())
        .map(|r| {
            (
                format!("{}{}", profile.active_line_prefix, r.name()),
                r.name(),
            )
        })
        .collect();
    codec::write_windows_1252(&profile.active_plugins_file, &lines)
}
