//! Constants used throughout passforge.
//!
//! Centralizes file names, environment variables and the fixed parameters of
//! the legacy vault format.

/// Application directory name under the platform config dir.
pub const APP_DIR: &str = "passforge";

/// Configuration file name inside [`APP_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Directory (under Documents, or HOME as fallback) holding the vault file.
pub const VAULT_DIR: &str = "PasswordManager";

/// Vault file name, shared with vault files from the legacy tool.
pub const VAULT_FILE: &str = "senhas.txt";

/// Environment variable overriding the config file path.
pub const CONFIG_ENV: &str = "PASSFORGE_CONFIG";

/// Environment variable carrying base64 key material for secure mode.
pub const KEY_ENV: &str = "PASSFORGE_KEY";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "PASSFORGE_LOG";

/// Minimum length accepted from the user when generating a password.
pub const MIN_PROMPT_LENGTH: usize = 9;

/// Default generated password length.
pub const DEFAULT_LENGTH: usize = 16;

/// Symmetric key size in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// Passphrase the legacy vault key is derived from.
pub const LEGACY_PASSPHRASE: &str = "ChaveSecreta12345";

/// PBKDF2 salt of the legacy vault key (eight zero bytes).
pub const LEGACY_SALT: [u8; 8] = [0u8; 8];

/// PBKDF2-HMAC-SHA256 iteration count of the legacy vault key.
pub const LEGACY_ITERATIONS: u32 = 10_000;
