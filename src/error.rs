use std::path::PathBuf;

use thiserror::Error;

use crate::core::constants::SECRET_MARKER;

#[derive(Error, Debug)]
pub enum Error {
    #[error("missing application id")]
    Usage,

    #[error("{} not found.", display_name(.0))]
    ConfigNotFound(PathBuf),

    #[error("cannot read {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} not found", SECRET_MARKER)]
    MissingSecret,

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Bare file name for messages, falling back to the full path.
pub fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
