//! Core data model for an ordered plugin list.
//!
//! # Components
//!
//! - [`PluginRecord`]: one plugin's name, master flag, and active flag
//! - [`PluginIndex`]: the ordered record list with its case-insensitive
//!   side index
//!
//! Names are matched case-insensitively and without any trailing `.ghost`
//! extension, so a ghosted plugin file and its listed name resolve to the
//! same record.

pub(crate) mod index;
pub mod record;

pub(crate) use index::PluginIndex;
pub use record::PluginRecord;

use unicase::UniCase;

/// Case-insensitive plugin name equality. A trailing `.ghost` extension is
/// ignored on either side.
pub(crate) fn names_eq(a: &str, b: &str) -> bool {
    UniCase::new(trim_ghost_suffix(a)) == UniCase::new(trim_ghost_suffix(b))
}

/// Strips a trailing `.ghost` extension, matched case-insensitively.
///
/// Ghosted plugins are installed as `<plugin>.ghost` to hide them from the
/// game without uninstalling them; every listing, lookup, and stored record
/// uses the unghosted name.
pub(crate) fn trim_ghost_suffix(name: &str) -> &str {
    match name.len().checked_sub(".ghost".len()) {
        Some(end)
            if end > 0
                && name.is_char_boundary(end)
                && name[end..].eq_ignore_ascii_case(".ghost") =>
        {
            &name[..end]
        }
        _ => name,
    }
}
