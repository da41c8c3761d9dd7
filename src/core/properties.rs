//! Secret lookup in `local.properties` style files.
//!
//! The file is not parsed as a key/value map. Lines are scanned in order
//! for a marker substring and the first usable match supplies the secret.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use tracing::{debug, trace};

use crate::core::types::SecretValue;
use crate::error::{Error, Result};

/// Load the secret identified by `marker` from the file at `path`.
///
/// # Arguments
///
/// * `path` - Properties file to scan
/// * `marker` - Substring identifying the secret line (e.g. `APP_SECRET`)
///
/// # Returns
///
/// `Some(secret)` for the first matching line with an `=`, `None` when no
/// line qualifies.
///
/// # Errors
///
/// Returns `Error::ConfigNotFound` if the file does not exist and
/// `Error::ConfigRead` for any other I/O failure.
pub fn load(path: &Path, marker: &str) -> Result<Option<SecretValue>> {
    debug!(path = %path.display(), marker, "scanning properties file");

    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::ConfigNotFound(path.to_path_buf()),
        _ => Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        },
    })?;

    extract(BufReader::new(file), marker).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Scan lines from `reader` for the first one carrying `marker` and a value.
///
/// Lines that contain the marker but no `=` are skipped. Later matches
/// after the first usable one are never read.
pub fn extract<R: BufRead>(reader: R, marker: &str) -> std::io::Result<Option<SecretValue>> {
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(secret) = parse_line(&line, marker) {
            debug!(line = index + 1, len = secret.len(), "secret located");
            return Ok(Some(secret));
        }
        if line.contains(marker) {
            trace!(line = index + 1, "marker without '=', skipping");
        }
    }

    debug!(marker, "no line carries the marker");
    Ok(None)
}

/// Extract the secret from a single line.
///
/// Returns `None` unless the line contains `marker` and an `=`. The value
/// is everything after the first `=`, trimmed of whitespace and then of
/// double quotes. No unescaping is done.
pub fn parse_line(line: &str, marker: &str) -> Option<SecretValue> {
    if !line.contains(marker) {
        return None;
    }

    let (_, raw) = line.split_once('=')?;
    Some(SecretValue::new(unquote(raw)))
}

fn unquote(raw: &str) -> &str {
    raw.trim().trim_matches('"')
}
