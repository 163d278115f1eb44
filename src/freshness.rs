//! Filesystem freshness tracking.
//!
//! After every successful load or save the engine snapshots the
//! modification times of everything the load order was derived from: the
//! plugins directory, the order and active files, and each loaded plugin
//! file. Comparing a fresh stat against the snapshot tells the engine which
//! portion of its state is stale, or that a reload would be pointless.
//!
//! Comparison is by equality, so a timestamp moved backwards counts as a
//! change just like one moved forwards.

use camino::Utf8Path;
use filetime::FileTime;
use indexmap::IndexMap;
use unicase::UniCase;

use crate::persistence;
use crate::profile::{GameProfile, LoadOrderMethod};

/// Modification times captured after the last successful load or save.
///
/// `None` entries record that the path did not exist at capture time, which
/// still compares meaningfully against a later stat.
#[derive(Debug, Default)]
pub(crate) struct FreshnessCache {
    snapshot: Option<Snapshot>,
}

#[derive(Debug)]
struct Snapshot {
    plugins_dir: Option<FileTime>,
    order_file: Option<FileTime>,
    active_file: Option<FileTime>,
    plugin_files: IndexMap<UniCase<String>, Option<FileTime>>,
}

fn mtime(path: &Utf8Path) -> Option<FileTime> {
    std::fs::metadata(path)
        .ok()
        .map(|m| FileTime::from_last_modification_time(&m))
}

impl FreshnessCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether a snapshot exists. False until the first successful load or
    /// save, and again after [`clear`](Self::clear).
    pub(crate) fn is_initialised(&self) -> bool {
        self.snapshot.is_some()
    }

    pub(crate) fn clear(&mut self) {
        self.snapshot = None;
    }

    /// Snapshots every source the current state was derived from.
    /// `plugin_names` are the names now held in the index; ghosted plugins
    /// are statted through the file they actually live in.
    pub(crate) fn capture(&mut self, profile: &GameProfile, plugin_names: &[&str]) {
        let plugin_files = plugin_names
            .iter()
            .map(|name| {
                (
                    UniCase::new((*name).to_owned()),
                    mtime(&persistence::plugin_path(profile, name)),
                )
            })
            .collect();
        self.snapshot = Some(Snapshot {
            plugins_dir: mtime(&profile.plugins_dir),
            order_file: profile.load_order_file().and_then(mtime),
            active_file: mtime(&profile.active_plugins_file),
            plugin_files,
        });
    }

    /// Whether the sources the plugin sequence is derived from have changed:
    /// the plugins directory, the order file, or any loaded plugin file.
    pub(crate) fn order_stale(&self, profile: &GameProfile) -> bool {
        let Some(snapshot) = &self.snapshot else {
            return true;
        };
        if mtime(&profile.plugins_dir) != snapshot.plugins_dir {
            return true;
        }
        if let Some(order_file) = profile.load_order_file() {
            if mtime(order_file) != snapshot.order_file {
                return true;
            }
        }
        // Asterisk games keep the order in the active-plugins file.
        if profile.method == LoadOrderMethod::Asterisk
            && mtime(&profile.active_plugins_file) != snapshot.active_file
        {
            return true;
        }
        snapshot.plugin_files.iter().any(|(name, stamp)| {
            let name: &str = name.as_ref();
            mtime(&persistence::plugin_path(profile, name)) != *stamp
        })
    }

    /// Whether the active-plugins file has changed.
    pub(crate) fn active_stale(&self, profile: &GameProfile) -> bool {
        let Some(snapshot) = &self.snapshot else {
            return true;
        };
        mtime(&profile.active_plugins_file) != snapshot.active_file
    }

    /// Whether anything the current state was derived from has changed.
    pub(crate) fn has_changed(&self, profile: &GameProfile) -> bool {
        self.order_stale(profile) || self.active_stale(profile)
    }
}
