//! Command-line interface.

pub mod banner;
pub mod check;
pub mod completions;
pub mod generate;
pub mod menu;
pub mod output;
pub mod vault;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::Password;

use crate::core::config::Config;
use crate::core::constants;
use crate::error::{Error, Result};

/// Passforge - random passwords, strength checks and an encrypted vault.
#[derive(Parser)]
#[command(
    name = "passforge",
    about = "Generate strong passwords, check their strength and keep them encrypted",
    version,
    after_help = "Run without a command for the interactive menu."
)]
pub struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config.toml
    #[arg(long, global = true, env = constants::CONFIG_ENV)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a random password
    Generate {
        /// Password length (minimum 9)
        #[arg(short, long)]
        length: Option<usize>,
        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,
        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,
        /// Leave out digits
        #[arg(long)]
        no_digits: bool,
        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,
        /// Encrypt and save the password to the vault
        #[arg(short, long)]
        save: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a password and suggest improvements
    Check {
        /// Password to test (prompted when omitted)
        password: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Encrypt a password and save it to the vault
    Save {
        /// Password to save (prompted when omitted)
        password: Option<String>,
    },

    /// Decrypt and list saved passwords
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a fresh key for secure mode
    Keygen,

    /// Interactive menu
    Menu {
        /// Skip ASCII art banner
        #[arg(long)]
        no_banner: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command. No command opens the interactive menu.
pub fn execute(command: Option<Command>, config_path: Option<PathBuf>) -> Result<()> {
    use Command::*;

    let load = || Config::load(config_path.as_deref());

    match command.unwrap_or(Menu { no_banner: false }) {
        Generate {
            length,
            no_uppercase,
            no_lowercase,
            no_digits,
            no_symbols,
            save,
            json,
        } => {
            let config = load()?;
            let mut charset = config.generator.charset();
            charset.uppercase &= !no_uppercase;
            charset.lowercase &= !no_lowercase;
            charset.digits &= !no_digits;
            charset.symbols &= !no_symbols;
            let length = length.unwrap_or(config.generator.length);
            generate::execute(&config, length, charset, save, json)
        }
        Check { password, json } => check::execute(&load()?, password, json),
        Save { password } => vault::save(&load()?, password),
        List { json } => vault::list(&load()?, json),
        Keygen => vault::keygen(),
        Menu { no_banner } => menu::execute(&load()?, no_banner),
        Completions { shell } => completions::execute(shell),
    }
}

/// Take a secret from the argument, a pipe, or a hidden prompt.
pub(crate) fn read_secret(given: Option<String>, prompt: &str) -> Result<String> {
    let value = match given {
        Some(value) => value,
        None if !io::stdin().is_terminal() => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            strip_line_ending(&input).to_string()
        }
        None => Password::new().with_prompt(prompt).interact()?,
    };

    if value.is_empty() {
        return Err(Error::EmptyPassword);
    }
    Ok(value)
}

/// Remove one trailing `\n` or `\r\n`, leaving any earlier line endings.
fn strip_line_ending(input: &str) -> &str {
    match input.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => input,
    }
}
