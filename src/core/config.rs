//! Configuration file management.
//!
//! Handles reading, writing, and validating `config.toml`. Every field is
//! optional; a missing file means all defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::generator::CharsetSpec;
use crate::core::strength::{DenyLists, Evaluator};
use crate::error::{ConfigError, Result};

/// Top-level configuration.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vault: VaultConfig,
    pub generator: GeneratorConfig,
    pub strength: StrengthConfig,
}

/// Which codec protects stored passwords.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherMode {
    /// Legacy fixed-key format.
    #[default]
    Mirror,
    /// Random nonce, external key.
    Secure,
}

/// `[vault]` section.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Vault file. Defaults to `<Documents>/PasswordManager/senhas.txt`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub cipher: CipherMode,
    /// File holding base64 key material for secure mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_file: Option<PathBuf>,
}

/// `[generator]` section: defaults for `generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: constants::DEFAULT_LENGTH,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl GeneratorConfig {
    pub fn charset(&self) -> CharsetSpec {
        CharsetSpec {
            uppercase: self.uppercase,
            lowercase: self.lowercase,
            digits: self.digits,
            symbols: self.symbols,
        }
    }
}

/// `[strength]` section. Each list, when present, replaces the built-in one.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weak_passwords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_prefixes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_words: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequences: Option<Vec<String>>,
}

impl StrengthConfig {
    /// Built-in lists with any configured overrides applied.
    pub fn deny_lists(&self) -> DenyLists {
        let mut lists = DenyLists::default();
        let overrides = [
            (&mut lists.weak_passwords, &self.weak_passwords),
            (&mut lists.common_names, &self.common_names),
            (&mut lists.name_prefixes, &self.name_prefixes),
            (&mut lists.common_words, &self.common_words),
            (&mut lists.sequences, &self.sequences),
        ];
        for (list, replacement) in overrides {
            if let Some(replacement) = replacement {
                *list = replacement.clone();
            }
        }
        lists
    }
}

impl Config {
    /// Default location: `<config dir>/passforge/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoDirectory("config"))?;
        Ok(dir.join(constants::APP_DIR).join(constants::CONFIG_FILE))
    }

    /// Load from `path`, or from [`Config::default_path`] when `None`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::InvalidValue` when validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };
        Self::load_from(&path)
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(cipher = ?config.vault.cipher, "config loaded");

        config.validate()?;
        Ok(config)
    }

    /// Write the configuration, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving config");

        let contents = toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "config",
            reason: e.to_string(),
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Validate the configuration contents.
    ///
    /// Checks:
    /// - Generator length is at least the interactive minimum
    /// - Generator enables at least one character class
    pub fn validate(&self) -> Result<()> {
        if self.generator.length < constants::MIN_PROMPT_LENGTH {
            return Err(ConfigError::InvalidValue {
                field: "generator.length",
                reason: format!(
                    "must be at least {} (got {})",
                    constants::MIN_PROMPT_LENGTH,
                    self.generator.length
                ),
            }
            .into());
        }

        if self.generator.charset().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "generator",
                reason: "at least one character class must be enabled".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Vault file path, falling back to the Documents (or home) directory.
    pub fn vault_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.vault.path {
            return Ok(path.clone());
        }
        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .ok_or(ConfigError::NoDirectory("documents"))?;
        Ok(base.join(constants::VAULT_DIR).join(constants::VAULT_FILE))
    }

    /// Strength evaluator built from the configured deny-lists.
    pub fn evaluator(&self) -> Evaluator {
        Evaluator::new(self.strength.deny_lists())
    }
}
