//! Error types for load order queries and mutations.
//!
//! Mutations through [`LoadOrder`](crate::LoadOrder) are all-or-nothing: when
//! a call returns any validation error below, the in-memory state is exactly
//! as it was before the call. Read-only queries never fail on "not found";
//! they return sentinel values instead.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors produced by the load order engine.
#[derive(Debug, Error)]
pub enum LoadOrderError {
    /// The named file is not an installed, well-formed plugin according to
    /// the metadata oracle.
    #[error("\"{0}\" is not a valid plugin")]
    InvalidPlugin(String),

    /// Two names in one input collide case-insensitively.
    #[error("\"{0}\" is listed more than once")]
    DuplicatePlugin(String),

    /// A non-master plugin would load before a master.
    #[error("non-master plugin \"{0}\" would load before a master")]
    OrderingViolation(String),

    /// The game's main master file must load before all other plugins.
    #[error("\"{0}\" must load before all other plugins")]
    ForcedPositionViolation(String),

    /// A plugin the game forces active would be deactivated or omitted.
    #[error("\"{0}\" is forced active and cannot be deactivated or omitted")]
    ForcedActiveViolation(String),

    /// The mutation would leave more than
    /// [`MAX_ACTIVE_PLUGINS`](crate::MAX_ACTIVE_PLUGINS) plugins active.
    #[error("more than {} plugins would be active", crate::MAX_ACTIVE_PLUGINS)]
    ActiveLimitExceeded,

    /// A plugin name cannot be represented in Windows-1252, the encoding of
    /// the active-plugins file.
    #[error("\"{0}\" cannot be encoded in Windows-1252")]
    Encoding(String),

    /// A game profile file could not be parsed.
    #[error("failed to parse game profile: {0}")]
    Profile(#[from] serde_yaml_ng::Error),

    /// An unexpected I/O failure. Expected-missing optional files are not
    /// reported through this variant; they read as empty.
    #[error("I/O error at \"{path}\": {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadOrderError {
    /// Wraps an I/O error with the path that produced it.
    pub(crate) fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        LoadOrderError::Io {
            path: path.into(),
            source,
        }
    }
}
