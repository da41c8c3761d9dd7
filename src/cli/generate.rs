//! Generate command - load the secret and print the activation code.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::cli::output;
use crate::cli::Format;
use crate::core::code;
use crate::core::constants::SECRET_MARKER;
use crate::core::properties;
use crate::core::types::ActivationCode;
use crate::error::Result;

/// JSON shape for `--json`.
#[derive(Debug, Serialize)]
struct Generated<'a> {
    app_id: &'a str,
    activation_code: &'a ActivationCode,
}

/// Derive the code for `app_id` using the secret in `config`.
pub fn execute(app_id: &str, config: &Path, format: Format) -> Result<()> {
    let code = run(app_id, config)?;
    debug!(?format, "printing activation code");

    match format {
        Format::Sentence => output::data(&sentence(app_id, &code)),
        Format::Bare => output::data(&code),
        Format::Json => {
            let generated = Generated {
                app_id,
                activation_code: &code,
            };
            let json = serde_json::to_string_pretty(&generated)?;
            output::data(&json);
        }
    }

    Ok(())
}

/// Load the secret and derive the code without printing anything.
pub fn run(app_id: &str, config: &Path) -> Result<ActivationCode> {
    let secret = properties::load(config, SECRET_MARKER)?;
    code::generate(app_id, secret.as_ref())
}

/// The success line printed by default.
pub fn sentence(app_id: &str, code: &str) -> String {
    format!("Activation Code for App ID '{}': {}", app_id, code)
}
