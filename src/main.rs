//! actcode - Derive activation codes from an app id and a shared secret.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use actcode::cli::output;
use actcode::cli::{execute, usage, Cli};
use actcode::core::constants::LOG_ENV;
use actcode::error::{display_name, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("actcode=debug")
        } else {
            EnvFilter::new("actcode=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = cli.config.clone();

    if let Err(e) = execute(cli) {
        match &e {
            Error::Usage => output::data(&usage()),
            Error::MissingSecret => {
                output::error(&format!("{} in {}", e, display_name(&config)));
            }
            _ => output::error(&e.to_string()),
        }
        std::process::exit(1);
    }
}
