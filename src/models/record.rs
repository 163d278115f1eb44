//! A single load order entry.

/// One plugin's entry in the load order: its file name as first seen, plus
/// the two flags the engine orders and activates by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginRecord {
    name: String,
    is_master: bool,
    is_active: bool,
}

impl PluginRecord {
    /// Creates an inactive record. A trailing `.ghost` extension is trimmed
    /// from the stored name.
    pub(crate) fn new(name: impl Into<String>, is_master: bool) -> Self {
        let mut name = name.into();
        let len = super::trim_ghost_suffix(&name).len();
        name.truncate(len);
        Self {
            name,
            is_master,
            is_active: false,
        }
    }

    /// The plugin's file name, preserving the case it was first seen with
    /// but never a `.ghost` extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the plugin is a master file.
    pub fn is_master(&self) -> bool {
        self.is_master
    }

    /// Whether the plugin is in the active set.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}
