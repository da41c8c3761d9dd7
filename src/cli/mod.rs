//! Command-line interface.

pub mod generate;
pub mod output;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use tracing::warn;

use crate::core::constants::CONFIG_FILE;

/// actcode - Derive activation codes from an app id and a shared secret.
#[derive(Parser, Debug)]
#[command(
    name = "actcode",
    about = "Derive the activation code for an application id",
    version,
    after_help = "The secret is read from the APP_SECRET line of the properties file."
)]
pub struct Cli {
    /// Application identifier to derive the code for
    #[arg(value_name = "APP_ID", allow_hyphen_values = true)]
    pub app_id: Option<String>,

    /// Arguments after APP_ID are accepted and ignored
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Properties file holding APP_SECRET
    #[arg(short, long, value_name = "PATH", default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Output as JSON
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Print only the code
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// How the generated code is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Sentence,
    Json,
    Bare,
}

impl Cli {
    pub fn format(&self) -> Format {
        if self.json {
            Format::Json
        } else if self.quiet {
            Format::Bare
        } else {
            Format::Sentence
        }
    }
}

/// One-line usage string, e.g. `Usage: actcode [OPTIONS] [APP_ID]`.
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}

/// Execute the parsed command line.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    let format = cli.format();
    let app_id = cli.app_id.ok_or(crate::error::Error::Usage)?;
    if !cli.extra.is_empty() {
        warn!(count = cli.extra.len(), "ignoring arguments after APP_ID");
    }

    generate::execute(&app_id, &cli.config, format)
}
