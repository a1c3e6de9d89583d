//! Result map persistence

use crate::error::{Error, Result};
use crate::types::ResultMap;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;
use tracing::debug;

const INDENT: &[u8] = b"    ";

/// Render `results` as 4-space indented JSON
///
/// Keys keep insertion order and non-ASCII text is written as UTF-8.
pub fn to_pretty_json(results: &ResultMap) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    results.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write `results` to `path`, creating missing parent directories
///
/// An existing file at `path` is replaced.
///
/// # Errors
/// Returns [`Error::Output`] if the directory or file cannot be written
pub fn write_results(path: &Path, results: &ResultMap) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            debug!("Creating output directory {}", parent.display());
            fs::create_dir_all(parent).map_err(|source| Error::Output {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let json = to_pretty_json(results)?;
    fs::write(path, json).map_err(|source| Error::Output {
        path: path.to_path_buf(),
        source,
    })
}
