//! Value types passed between the loader and the generator.

use std::fmt;
use std::ops::Deref;

use serde::Serialize;
use zeroize::Zeroizing;

use crate::core::constants::{GROUP_LEN, GROUP_SEPARATOR};

/// Shared secret read from the properties file.
///
/// The backing buffer is wiped on drop and the value never shows up in
/// `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretValue(Zeroizing<String>);

impl SecretValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretValue(***)")
    }
}

/// Hyphen-grouped, uppercase hex activation code (`XXXX-XXXX-XXXX-XXXX`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ActivationCode(String);

impl ActivationCode {
    /// Group an uppercase hex string into `GROUP_LEN`-wide blocks.
    pub(crate) fn from_hex(hex: &str) -> Self {
        let mut code = String::with_capacity(hex.len() + hex.len() / GROUP_LEN);
        for (i, ch) in hex.chars().enumerate() {
            if i > 0 && i % GROUP_LEN == 0 {
                code.push(GROUP_SEPARATOR);
            }
            code.push(ch);
        }
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The code without separators.
    pub fn hex(&self) -> String {
        self.0.chars().filter(|c| *c != GROUP_SEPARATOR).collect()
    }
}

impl Deref for ActivationCode {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
