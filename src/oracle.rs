//! The plugin metadata boundary.
//!
//! The engine never parses plugin files itself. Everything it needs to know
//! about a file on disk comes through [`PluginOracle`], so callers can plug
//! in a real plugin parser without this crate taking a dependency on one.

/// Answers the two questions the load order engine asks about plugin files.
///
/// Implementations are queried with bare file names (e.g. `"Skyrim.esm"`);
/// resolving them against the game's plugins directory is the
/// implementation's concern. The engine strips any `.ghost` extension
/// before asking, so a plugin installed as `Blank.esm.ghost` must answer
/// under `Blank.esm`. Both methods are expected to be cheap enough to call
/// repeatedly during a load.
#[cfg_attr(test, mockall::automock)]
pub trait PluginOracle: Send + Sync {
    /// Whether `name` refers to an installed, well-formed plugin file.
    ///
    /// Names this returns `false` for are silently dropped when reading
    /// stored state and rejected with an error when passed to a mutation.
    fn is_valid(&self, name: &str) -> bool;

    /// Whether the installed plugin `name` is a master file.
    ///
    /// Only meaningful for names [`is_valid`](Self::is_valid) accepts;
    /// implementations may answer anything for other names.
    fn is_master(&self, name: &str) -> bool;
}
