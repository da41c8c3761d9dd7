//! Activation code derivation.
//!
//! A code is the HMAC-SHA256 of the application id keyed by the shared
//! secret, cut to its first 8 bytes, rendered as uppercase hex and split
//! into four groups of four (`52CC-800A-5EA8-B09A`).
//!
//! Keeping only 64 bits of the MAC gives up full collision resistance in
//! exchange for a code a person can type. Widening it would change every
//! previously issued code.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::debug;

use crate::core::constants::CODE_BYTES;
use crate::core::types::{ActivationCode, SecretValue};
use crate::error::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

/// Generate the activation code for `app_id`.
///
/// # Arguments
///
/// * `app_id` - Application identifier, any string including empty
/// * `secret` - Shared secret as returned by the properties loader
///
/// # Errors
///
/// Returns `Error::MissingSecret` when no secret was found.
pub fn generate(app_id: &str, secret: Option<&SecretValue>) -> Result<ActivationCode> {
    let secret = secret.ok_or(Error::MissingSecret)?;
    derive(app_id, secret)
}

/// Derive the code for `app_id` with a known secret.
///
/// An empty secret is accepted as a (weak) key.
pub fn derive(app_id: &str, secret: &SecretValue) -> Result<ActivationCode> {
    let digest = hmac_sha256(secret.as_bytes(), app_id.as_bytes())?;
    let hex = hex::encode_upper(&digest[..CODE_BYTES]);

    debug!(app_id_len = app_id.len(), "derived activation code");
    Ok(ActivationCode::from_hex(&hex))
}

fn hmac_sha256(key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|e| Error::InvalidKey(e.to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}
