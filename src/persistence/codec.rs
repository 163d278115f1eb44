//! Reading and writing line-oriented plugin list files.
//!
//! Active-plugins files are Windows-1252 on disk. `loadorder.txt` is UTF-8,
//! with a Windows-1252 fallback on read for files written by older tools.
//! Blank lines and `#` comments are skipped everywhere.

use camino::Utf8Path;
use encoding_rs::WINDOWS_1252;
use std::fs;
use std::io;

use crate::error::LoadOrderError;

/// Reads `path` as Windows-1252 text.
///
/// Returns `None` if the file does not exist; every byte sequence decodes,
/// so a present file always yields text.
pub(crate) fn read_windows_1252(path: &Utf8Path) -> Result<Option<String>, LoadOrderError> {
    match read_bytes(path)? {
        Some(bytes) => {
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(&bytes);
            Ok(Some(text.into_owned()))
        }
        None => Ok(None),
    }
}

/// Reads `path` as UTF-8, falling back to Windows-1252 when the bytes are
/// not valid UTF-8. Returns `None` if the file does not exist.
pub(crate) fn read_utf8_with_fallback(path: &Utf8Path) -> Result<Option<String>, LoadOrderError> {
    match read_bytes(path)? {
        Some(bytes) => match String::from_utf8(bytes) {
            Ok(text) => Ok(Some(text)),
            Err(err) => {
                let (text, _) = WINDOWS_1252.decode_without_bom_handling(err.as_bytes());
                Ok(Some(text.into_owned()))
            }
        },
        None => Ok(None),
    }
}

fn read_bytes(path: &Utf8Path) -> Result<Option<Vec<u8>>, LoadOrderError> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(LoadOrderError::io(path, e)),
    }
}

/// Splits file content into content lines, skipping blanks and `#` comments.
pub(crate) fn plugin_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Plugin names from an active-plugins file: the content lines that carry
/// `prefix`, with the prefix stripped. With an empty prefix every content
/// line is a name; otherwise unprefixed lines are other settings (Morrowind
/// stores its list inside the game ini) and are ignored.
pub(crate) fn prefixed_names<'a>(
    content: &'a str,
    prefix: &'a str,
) -> impl Iterator<Item = &'a str> {
    plugin_lines(content).filter_map(move |line| {
        if prefix.is_empty() {
            Some(line)
        } else {
            line.strip_prefix(prefix)
        }
    })
}

/// Writes decorated plugin lines to `path` in Windows-1252, one per line.
///
/// Each entry pairs the on-disk line with the plugin name it carries, so an
/// encode failure names the plugin rather than the decorated line.
pub(crate) fn write_windows_1252(
    path: &Utf8Path,
    lines: &[(String, &str)],
) -> Result<(), LoadOrderError> {
    let mut buf = Vec::new();
    for (line, name) in lines {
        let (bytes, _, had_errors) = WINDOWS_1252.encode(line);
        if had_errors {
            return Err(LoadOrderError::Encoding((*name).to_string()));
        }
        buf.extend_from_slice(&bytes);
        buf.push(b'\n');
    }
    create_parent_dirs(path)?;
    fs::write(path, buf).map_err(|e| LoadOrderError::io(path, e))
}

/// Writes plugin names to `path` as UTF-8, one per line.
pub(crate) fn write_utf8(path: &Utf8Path, names: &[&str]) -> Result<(), LoadOrderError> {
    let mut content = String::new();
    for name in names {
        content.push_str(name);
        content.push('\n');
    }
    create_parent_dirs(path)?;
    fs::write(path, content).map_err(|e| LoadOrderError::io(path, e))
}

fn create_parent_dirs(path: &Utf8Path) -> Result<(), LoadOrderError> {
    match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| LoadOrderError::io(parent, e))
        }
        _ => Ok(()),
    }
}
