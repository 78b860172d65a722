//! Interactive menu.
//!
//! Loops over generate / view / test until the user exits. Failures inside
//! an action are reported and the menu keeps running; prompt failures end it.

use std::io::{self, IsTerminal};

use dialoguer::{Confirm, Input, Password, Select};
use tracing::debug;

use crate::cli::{banner, generate, output, vault};
use crate::core::config::Config;
use crate::core::constants::MIN_PROMPT_LENGTH;
use crate::core::generator::CharsetSpec;
use crate::core::vault::Vault;
use crate::error::{Error, GeneratorError, Result};

const ITEMS: [&str; 4] = [
    "Generate a new password",
    "View saved passwords",
    "Test password strength",
    "Exit",
];

enum Action {
    Generate,
    View,
    Test,
    Exit,
}

impl Action {
    fn from_index(index: usize) -> Self {
        match index {
            0 => Action::Generate,
            1 => Action::View,
            2 => Action::Test,
            _ => Action::Exit,
        }
    }
}

/// Run the menu until the user picks Exit or declines to return.
pub fn execute(config: &Config, no_banner: bool) -> Result<()> {
    if !io::stdin().is_terminal() {
        return Err(Error::NotInteractive);
    }

    if !no_banner {
        banner::print_banner();
    }

    loop {
        output::section("Password Manager");
        let choice = Select::new()
            .with_prompt("Choose an option")
            .items(&ITEMS)
            .default(0)
            .interact()?;

        let outcome = match Action::from_index(choice) {
            Action::Generate => generate_flow(config),
            Action::View => view_flow(config),
            Action::Test => test_flow(config),
            Action::Exit => break,
        };

        match outcome {
            Ok(()) => {}
            Err(e @ Error::Prompt(_)) => return Err(e),
            Err(e) => {
                debug!(error = %e, "menu action failed");
                output::error(&e.to_string());
            }
        }

        println!();
        let again = Confirm::new()
            .with_prompt("Return to main menu?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
    }

    output::dimmed("bye");
    Ok(())
}

fn generate_flow(config: &Config) -> Result<()> {
    let defaults = &config.generator;
    let length: usize = Input::new()
        .with_prompt(format!("Password length (minimum {})", MIN_PROMPT_LENGTH))
        .default(defaults.length.max(MIN_PROMPT_LENGTH))
        .validate_with(|n: &usize| -> std::result::Result<(), String> {
            if *n >= MIN_PROMPT_LENGTH {
                Ok(())
            } else {
                Err(format!("length must be at least {}", MIN_PROMPT_LENGTH))
            }
        })
        .interact_text()?;

    let charset = CharsetSpec {
        uppercase: ask("Include uppercase letters?", defaults.uppercase)?,
        lowercase: ask("Include lowercase letters?", defaults.lowercase)?,
        digits: ask("Include digits?", defaults.digits)?,
        symbols: ask("Include symbols?", defaults.symbols)?,
    };
    if charset.is_empty() {
        return Err(GeneratorError::NoCharacterClasses.into());
    }

    let password = generate::create(length, charset)?;
    let report = config.evaluator().report(&password);
    println!();
    generate::render(&password, &report);

    if ask("Save this password?", false)? {
        Vault::open(config)?.save(&password)?;
        output::success("password encrypted and saved");
    }
    Ok(())
}

fn view_flow(config: &Config) -> Result<()> {
    let entries = Vault::open(config)?.entries()?;
    vault::show(&entries);
    Ok(())
}

fn test_flow(config: &Config) -> Result<()> {
    let password = Password::new()
        .with_prompt("Password to test")
        .allow_empty_password(true)
        .interact()?;
    if password.is_empty() {
        return Err(Error::EmptyPassword);
    }

    let report = config.evaluator().report(&password);
    output::strength(&report);
    output::findings(&report);
    Ok(())
}

fn ask(prompt: &str, default: bool) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(Into::into)
}
