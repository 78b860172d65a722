//! Generate command.

use serde::Serialize;
use tracing::info;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::constants::MIN_PROMPT_LENGTH;
use crate::core::generator::{self, CharsetSpec};
use crate::core::strength::Report;
use crate::core::vault::Vault;
use crate::error::{GeneratorError, Result};

#[derive(Serialize)]
struct Generated<'a> {
    password: &'a str,
    #[serde(flatten)]
    report: &'a Report,
    saved: bool,
}

/// Generate a password, show its strength and optionally save it.
pub fn execute(
    config: &Config,
    length: usize,
    charset: CharsetSpec,
    save: bool,
    json: bool,
) -> Result<()> {
    let password = create(length, charset)?;
    let report = config.evaluator().report(&password);

    if save {
        Vault::open(config)?.save(&password)?;
        info!("generated password saved");
    }

    if json {
        let generated = Generated {
            password: &password,
            report: &report,
            saved: save,
        };
        println!("{}", serde_json::to_string_pretty(&generated)?);
        return Ok(());
    }

    render(&password, &report);
    if save {
        output::success("password encrypted and saved");
    }
    Ok(())
}

/// Generate with the interactive minimum length enforced.
pub fn create(length: usize, charset: CharsetSpec) -> Result<String> {
    if length < MIN_PROMPT_LENGTH {
        return Err(GeneratorError::TooShort {
            length,
            min: MIN_PROMPT_LENGTH,
        }
        .into());
    }
    generator::generate(length, charset)
}

/// Print a generated password with its strength bar.
pub fn render(password: &str, report: &Report) {
    output::kv("Generated password:", output::password(password));
    output::strength(report);
}
