//! Shared fixtures for the integration tests.
//!
//! Tests lay plugins out in real temporary game directories and drive the
//! engine through [`DirOracle`], which judges validity the way the fixtures
//! write files: right extension, on disk, with a plausible header.

#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use encoding_rs::WINDOWS_1252;
use filetime::FileTime;
use loadorder::{GameId, GameProfile, LoadOrder, PluginOracle};
use tempfile::TempDir;

/// Bytes every installed fixture plugin starts with.
pub const PLUGIN_HEADER: &[u8] = b"TES4PLUGIN";

/// Routes tracing output through the test capture when `RUST_LOG` is set.
/// Safe to call from every test.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A metadata oracle over a real plugins directory: a name is valid when a
/// file of that name (compared case-insensitively, with or without a
/// trailing `.ghost`) exists with an `.esm` or `.esp` extension and is at
/// least a header long. Masters are `.esm`.
pub struct DirOracle {
    plugins_dir: Utf8PathBuf,
}

impl DirOracle {
    pub fn new(plugins_dir: Utf8PathBuf) -> Self {
        Self { plugins_dir }
    }

    fn file_len(&self, name: &str) -> Option<u64> {
        // The engine asks with unghosted names; the file may be ghosted.
        for candidate in [
            self.plugins_dir.join(name),
            self.plugins_dir.join(format!("{name}.ghost")),
        ] {
            if let Ok(metadata) = std::fs::metadata(&candidate) {
                if metadata.is_file() {
                    return Some(metadata.len());
                }
            }
        }
        // Fixture listings sometimes use a different case than the file on
        // disk; resolve like a case-insensitive filesystem would.
        let wanted = name.to_lowercase();
        for entry in std::fs::read_dir(&self.plugins_dir).ok()?.flatten() {
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            let lowered = file_name.to_lowercase();
            let candidate = lowered.strip_suffix(".ghost").unwrap_or(&lowered);
            if candidate == wanted {
                let metadata = entry.metadata().ok()?;
                return metadata.is_file().then(|| metadata.len());
            }
        }
        None
    }
}

impl PluginOracle for DirOracle {
    fn is_valid(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        if !lower.ends_with(".esm") && !lower.ends_with(".esp") {
            return false;
        }
        self.file_len(name)
            .is_some_and(|len| len >= PLUGIN_HEADER.len() as u64)
    }

    fn is_master(&self, name: &str) -> bool {
        name.to_lowercase().ends_with(".esm")
    }
}

/// An oracle detached from any filesystem: every well-formed name is a
/// valid plugin. Used by the property tests, which never touch disk.
pub struct ExtensionOracle;

impl PluginOracle for ExtensionOracle {
    fn is_valid(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        lower.ends_with(".esm") || lower.ends_with(".esp")
    }

    fn is_master(&self, name: &str) -> bool {
        name.to_lowercase().ends_with(".esm")
    }
}

/// A temporary game install plus the profile pointing into it.
pub struct Fixture {
    pub profile: GameProfile,
    // Held so the temporary directories live as long as the fixture.
    game_dir: TempDir,
    local_dir: TempDir,
}

impl Fixture {
    pub fn new(game: GameId) -> Self {
        let game_dir = TempDir::new().unwrap();
        let local_dir = TempDir::new().unwrap();
        let profile = GameProfile::new(game, &utf8(&game_dir), &utf8(&local_dir));
        std::fs::create_dir_all(&profile.plugins_dir).unwrap();
        Self {
            profile,
            game_dir,
            local_dir,
        }
    }

    pub fn oracle(&self) -> Box<DirOracle> {
        Box::new(DirOracle::new(self.profile.plugins_dir.clone()))
    }

    pub fn load_order(&self) -> LoadOrder {
        LoadOrder::new(self.profile.clone(), self.oracle())
    }

    pub fn plugin_path(&self, name: &str) -> Utf8PathBuf {
        self.profile.plugins_dir.join(name)
    }

    /// Creates a valid plugin file.
    pub fn install(&self, name: &str) {
        std::fs::write(self.plugin_path(name), PLUGIN_HEADER).unwrap();
    }

    /// Creates a valid plugin file with a fixed modification time.
    pub fn install_at(&self, name: &str, unix_time: i64) {
        self.install(name);
        self.set_mtime(name, unix_time);
    }

    pub fn set_mtime(&self, name: &str, unix_time: i64) {
        filetime::set_file_mtime(
            self.plugin_path(name),
            FileTime::from_unix_time(unix_time, 0),
        )
        .unwrap();
    }

    /// Truncates a plugin below header size, making it invalid.
    pub fn corrupt(&self, name: &str) {
        std::fs::write(self.plugin_path(name), b"\0").unwrap();
    }

    pub fn uninstall(&self, name: &str) {
        std::fs::remove_file(self.plugin_path(name)).unwrap();
    }

    /// Writes the active-plugins file the way the game's own launcher does:
    /// one prefixed name per line, Windows-1252.
    pub fn write_active_file(&self, names: &[&str]) {
        let mut buf = Vec::new();
        for name in names {
            let line = format!("{}{}", self.profile.active_line_prefix, name);
            let (bytes, _, _) = WINDOWS_1252.encode(&line);
            buf.extend_from_slice(&bytes);
            buf.push(b'\n');
        }
        std::fs::write(&self.profile.active_plugins_file, buf).unwrap();
    }

    /// Writes an asterisk-method plugins.txt: every entry is an order line,
    /// starred when active.
    pub fn write_asterisk_file(&self, entries: &[(&str, bool)]) {
        let mut buf = Vec::new();
        for (name, active) in entries {
            if *active {
                buf.push(b'*');
            }
            let (bytes, _, _) = WINDOWS_1252.encode(name);
            buf.extend_from_slice(&bytes);
            buf.push(b'\n');
        }
        std::fs::write(&self.profile.active_plugins_file, buf).unwrap();
    }

    /// Writes `loadorder.txt` in UTF-8.
    pub fn write_order_file(&self, names: &[&str]) {
        let content: String = names.iter().map(|n| format!("{n}\n")).collect();
        std::fs::write(self.profile.load_order_file().unwrap(), content).unwrap();
    }

    pub fn set_file_mtime(&self, path: &Utf8Path, unix_time: i64) {
        filetime::set_file_mtime(path, FileTime::from_unix_time(unix_time, 0)).unwrap();
    }

    pub fn read_file_bytes(&self, path: &Utf8Path) -> Vec<u8> {
        std::fs::read(path).unwrap()
    }
}

fn utf8(dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap()
}
