//! Passforge - generate, check and store passwords.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use passforge::cli::output;
use passforge::cli::{execute, Cli};
use passforge::core::constants;
use passforge::error::{ConfigError, Error, GeneratorError, StoreError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("passforge=debug")
        } else {
            EnvFilter::new("passforge=warn")
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

    if let Err(e) = execute(cli.command, cli.config) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingKey) => {
                Some("run: passforge keygen".to_string())
            }
            Error::Generator(GeneratorError::NoCharacterClasses) => {
                Some("drop one of the --no-* flags".to_string())
            }
            Error::Store(StoreError::Unavailable { path, .. }) => {
                Some(format!("check that {} is writable", path))
            }
            Error::NotInteractive => Some("run: passforge --help".to_string()),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
