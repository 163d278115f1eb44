// loadorder - Load order and active plugin management for Bethesda's
// plugin-based games
//
// This is the library crate containing the load order engine. Callers
// supply a game profile and a plugin metadata oracle; everything else is
// handled here.

pub mod error;
mod freshness;
pub mod load_order;
pub mod models;
pub mod oracle;
mod persistence;
pub mod profile;
mod validation;

// Re-export commonly used types for convenience
pub use error::LoadOrderError;
pub use load_order::{LoadOrder, MAX_ACTIVE_PLUGINS};
pub use models::PluginRecord;
pub use oracle::PluginOracle;
pub use profile::{GameId, GameProfile, LoadOrderMethod};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
