//! Vault commands: save, list and keygen.

use std::io::IsTerminal;

use crate::cli::{output, read_secret};
use crate::core::cipher::VaultKey;
use crate::core::config::Config;
use crate::core::vault::{Entry, Vault};
use crate::error::Result;

/// Encrypt a password and append it to the vault.
pub fn save(config: &Config, password: Option<String>) -> Result<()> {
    let password = read_secret(password, "Password to save")?;
    Vault::open(config)?.save(&password)?;
    output::success("password encrypted and saved");
    Ok(())
}

/// Decrypt and print every saved password.
pub fn list(config: &Config, json: bool) -> Result<()> {
    let vault = Vault::open(config)?;
    let entries = vault.entries()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    show(&entries);
    Ok(())
}

/// Print decrypted entries, warning about the ones that failed.
pub fn show(entries: &[Entry]) {
    if entries.is_empty() {
        output::dimmed("no passwords saved yet");
        return;
    }

    output::section("Saved passwords");
    for entry in entries {
        match entry {
            Entry::Decrypted { password, .. } => output::list_item(password),
            Entry::Malformed { index, .. } => {
                output::warn(&format!("entry {} could not be decrypted", index))
            }
        }
    }
}

/// Print a fresh base64 key for secure mode.
pub fn keygen() -> Result<()> {
    let key = VaultKey::generate();
    println!("{}", key.to_base64());

    if std::io::stdout().is_terminal() {
        output::hint("export PASSFORGE_KEY=<key> and set vault.cipher = \"secure\"");
    }
    Ok(())
}
