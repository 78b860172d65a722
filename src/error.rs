//! Error types.
//!
//! One enum per concern, wrapped by the top-level [`Error`].

use thiserror::Error;

/// Top-level error returned by every fallible passforge operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("password cannot be empty")]
    EmptyPassword,

    #[error("the interactive menu needs a terminal")]
    NotInteractive,

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Invalid generator input. The caller is expected to re-prompt.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("invalid configuration: at least one character class must be enabled")]
    NoCharacterClasses,

    #[error("invalid configuration: password length must be at least 1")]
    ZeroLength,

    #[error("invalid configuration: password length must be at least {min} (got {length})")]
    TooShort { length: usize, min: usize },
}

/// Vault codec failures.
#[derive(Error, Debug)]
pub enum CipherError {
    /// The stored token could not be decoded or decrypted.
    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),
}

/// Persistence failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage unavailable at {path}: {source}")]
    Unavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration file problems.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("secure mode needs key material: set PASSFORGE_KEY or vault.key_file")]
    MissingKey,

    #[error("unable to determine {0} directory")]
    NoDirectory(&'static str),
}

impl Error {
    /// True for bad generator input (wrong length or empty charset).
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Error::Generator(_))
    }

    /// True when a stored token could not be turned back into a password.
    pub fn is_malformed_token(&self) -> bool {
        matches!(self, Error::Cipher(CipherError::MalformedToken(_)))
    }

    /// True when the persistence layer failed.
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, Error::Store(StoreError::Unavailable { .. }))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
