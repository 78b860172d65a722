//! Test fixtures and constants.

/// Mirror-mode token for "hello".
pub const HELLO_TOKEN: &str = "+SoklY9rpGDjYlQBHtS6HA==";

/// Mirror-mode token for "Str0ng!Passw0rd".
pub const STRONG_TOKEN: &str = "jDHiTi2HHnFyLYptQlCOlw==";

/// Mirror-mode token for the empty string.
pub const EMPTY_TOKEN: &str = "bXn2ymx2SNQjQCiiLfoVTg==";

/// A password that passes every strength rule.
pub const STRONG_PASSWORD: &str = "Zq7#Lm2!Vx9$";

/// A password that fails every character-class rule it can.
pub const WEAK_PASSWORD: &str = "password";

/// A vault with one corrupt line between two good ones.
pub fn vault_with_corrupt_line() -> String {
    format!("{}\nnot-base64-%%%\n{}\n", HELLO_TOKEN, STRONG_TOKEN)
}

/// Fixed base64 key for secure-mode tests (32 bytes of 0x2a).
pub const SECURE_KEY: &str = "KioqKioqKioqKioqKioqKioqKioqKioqKioqKioqKio=";

/// A different valid key.
pub const OTHER_KEY: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";
