//! Test support utilities for passforge integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working dir (holding `config.toml` and the vault
/// file) and its own home dir. Child processes get the config path through
/// `PASSFORGE_CONFIG`, so tests can run in parallel.
pub struct Test {
    /// Working directory holding config and vault
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
    /// Extra lines appended to the `[vault]` section
    vault_extra: String,
}

impl Test {
    /// Create a test environment with the default mirror cipher.
    pub fn new() -> Self {
        Self::with_vault_config("")
    }

    /// Create a test environment in secure mode.
    pub fn secure() -> Self {
        Self::with_vault_config("cipher = \"secure\"\n")
    }

    /// Create a test environment with extra `[vault]` keys.
    pub fn with_vault_config(extra: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");
        let t = Self {
            dir,
            home,
            vault_extra: extra.to_string(),
        };
        t.write_config("");
        t
    }

    /// Path of the config file handed to the binary.
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    /// Path of the vault file.
    pub fn vault_path(&self) -> PathBuf {
        self.dir.path().join("passwords.txt")
    }

    /// Rewrite the config, appending `extra` after the `[vault]` section.
    pub fn write_config(&self, extra: &str) {
        let content = format!(
            "[vault]\npath = {:?}\n{}\n{}",
            self.vault_path().to_string_lossy(),
            self.vault_extra,
            extra
        );
        std::fs::write(self.config_path(), content).expect("failed to write config");
    }

    /// Raw lines of the vault file.
    pub fn vault_lines(&self) -> Vec<String> {
        std::fs::read_to_string(self.vault_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Replace the vault file content.
    pub fn write_vault(&self, content: &str) {
        std::fs::write(self.vault_path(), content).expect("failed to write vault");
    }
}
