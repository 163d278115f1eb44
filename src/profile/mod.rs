//! Per-game configuration for the load order engine.
//!
//! A [`GameProfile`] tells the engine everything game-specific it needs:
//! which persistence method the game uses, where its plugin files live, and
//! which plugins the game itself pins or forces active. Profiles can be
//! built from a [`GameId`] plus the two game directories, or loaded from a
//! YAML file for callers that manage game settings externally.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::LoadOrderError;

/// How a game persists its load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadOrderMethod {
    /// Order is the ascending modification-time order of the plugin files
    /// themselves. Only the active set is written to a file.
    Timestamp,
    /// Order lives in a dedicated `loadorder.txt`; the active set lives in a
    /// separate `plugins.txt`.
    Textfile,
    /// One `plugins.txt` holds both: every line is an ordered entry, and a
    /// leading `*` marks it active.
    Asterisk,
}

/// The games whose load order conventions this crate knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameId {
    Morrowind,
    Oblivion,
    Skyrim,
    SkyrimSE,
    SkyrimVR,
    Fallout3,
    FalloutNV,
    Fallout4,
    Fallout4VR,
    Starfield,
}

impl GameId {
    /// The persistence method this game ships with.
    pub fn load_order_method(self) -> LoadOrderMethod {
        match self {
            GameId::Morrowind | GameId::Oblivion | GameId::Fallout3 | GameId::FalloutNV => {
                LoadOrderMethod::Timestamp
            }
            GameId::Skyrim => LoadOrderMethod::Textfile,
            GameId::SkyrimSE
            | GameId::SkyrimVR
            | GameId::Fallout4
            | GameId::Fallout4VR
            | GameId::Starfield => LoadOrderMethod::Asterisk,
        }
    }

    /// The game's main master file name.
    pub fn master_file(self) -> &'static str {
        match self {
            GameId::Morrowind => "Morrowind.esm",
            GameId::Oblivion => "Oblivion.esm",
            GameId::Skyrim | GameId::SkyrimSE | GameId::SkyrimVR => "Skyrim.esm",
            GameId::Fallout3 => "Fallout3.esm",
            GameId::FalloutNV => "FalloutNV.esm",
            GameId::Fallout4 | GameId::Fallout4VR => "Fallout4.esm",
            GameId::Starfield => "Starfield.esm",
        }
    }

    fn plugins_folder(self) -> &'static str {
        match self {
            GameId::Morrowind => "Data Files",
            _ => "Data",
        }
    }

    fn auxiliary_master(self) -> Option<&'static str> {
        match self {
            GameId::Skyrim => Some("Update.esm"),
            _ => None,
        }
    }
}

/// Game-specific settings driving one [`LoadOrder`](crate::LoadOrder).
///
/// The profile fixes the persistence method and every path the engine
/// touches. It is plain data; nothing here reads the filesystem except the
/// YAML helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameProfile {
    /// Which game these settings describe.
    pub game: GameId,

    /// How the order and active set are persisted.
    pub method: LoadOrderMethod,

    /// The game's main master file, e.g. `Skyrim.esm`.
    pub master_file: String,

    /// A second master the game keeps active whenever it is installed.
    #[serde(default)]
    pub auxiliary_master: Option<String>,

    /// Directory the game loads plugins from.
    pub plugins_dir: Utf8PathBuf,

    /// File holding the active plugin set. For Morrowind this is the game
    /// ini; for every other game it is `plugins.txt`.
    pub active_plugins_file: Utf8PathBuf,

    /// Dedicated load order file, present only for
    /// [`LoadOrderMethod::Textfile`] games.
    #[serde(default)]
    pub load_order_file: Option<Utf8PathBuf>,

    /// Prefix carried by each plugin line in the active-plugins file. Empty
    /// for every game except Morrowind, whose ini lines read
    /// `GameFile0=<plugin>`. Lines without the prefix are ignored on read.
    #[serde(default)]
    pub active_line_prefix: String,
}

impl GameProfile {
    /// Builds the conventional profile for `game`.
    ///
    /// # Arguments
    ///
    /// * `game_path` - The game's install directory
    /// * `local_path` - The game's local application data directory, where
    ///   `plugins.txt` and `loadorder.txt` live for post-Morrowind games
    pub fn new(game: GameId, game_path: &Utf8Path, local_path: &Utf8Path) -> Self {
        let method = game.load_order_method();
        let active_plugins_file = match game {
            GameId::Morrowind => game_path.join("Morrowind.ini"),
            _ => local_path.join("plugins.txt"),
        };
        let load_order_file = match method {
            LoadOrderMethod::Textfile => Some(local_path.join("loadorder.txt")),
            _ => None,
        };
        let active_line_prefix = match game {
            GameId::Morrowind => "GameFile0=".to_string(),
            _ => String::new(),
        };

        Self {
            game,
            method,
            master_file: game.master_file().to_string(),
            auxiliary_master: game.auxiliary_master().map(str::to_string),
            plugins_dir: game_path.join(game.plugins_folder()),
            active_plugins_file,
            load_order_file,
            active_line_prefix,
        }
    }

    /// Loads a profile from a YAML file.
    pub fn from_yaml_file(path: &Utf8Path) -> Result<Self, LoadOrderError> {
        let content = fs::read_to_string(path).map_err(|e| LoadOrderError::io(path, e))?;
        Ok(serde_yaml_ng::from_str(&content)?)
    }

    /// Writes the profile to a YAML file.
    pub fn to_yaml_file(&self, path: &Utf8Path) -> Result<(), LoadOrderError> {
        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content).map_err(|e| LoadOrderError::io(path, e))
    }

    /// Whether the main master file is pinned to the first position and
    /// forced active. True for every method except timestamps, where the
    /// master is an ordinary plugin.
    pub fn pins_master(&self) -> bool {
        self.method != LoadOrderMethod::Timestamp
    }

    pub fn auxiliary_master(&self) -> Option<&str> {
        self.auxiliary_master.as_deref()
    }

    pub fn load_order_file(&self) -> Option<&Utf8Path> {
        self.load_order_file.as_deref()
    }
}
