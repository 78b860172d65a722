//! Check command.
//!
//! Score a password with hidden input and print recommendations.

use crate::cli::{output, read_secret};
use crate::core::config::Config;
use crate::error::Result;

/// Score a password and list what to improve.
pub fn execute(config: &Config, password: Option<String>, json: bool) -> Result<()> {
    let password = read_secret(password, "Password to test")?;
    let report = config.evaluator().report(&password);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::strength(&report);
    output::findings(&report);
    Ok(())
}
