//! Constants used throughout actcode.
//!
//! Centralizes file names, markers and the code layout.

/// Secrets file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "local.properties";

/// Marker substring identifying the secret line.
pub const SECRET_MARKER: &str = "APP_SECRET";

/// Number of digest bytes kept in a code (16 hex characters).
pub const CODE_BYTES: usize = 8;

/// Characters per hyphen-separated group.
pub const GROUP_LEN: usize = 4;

/// Group separator.
pub const GROUP_SEPARATOR: char = '-';

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "ACTCODE_LOG";
