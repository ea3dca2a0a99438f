use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm, Password};

use crate::config::Config;

use super::output::{self, OutputPreferences};

/// Applies view preferences from the loaded config. The `plain` theme turns
/// off all styling, including the colored movement rows.
pub fn apply_config(config: &Config) {
    let plain = config.theme.as_deref() == Some("plain");
    output::set_preferences(OutputPreferences { plain_output: plain });
    if plain {
        colored::control::set_override(false);
    }
}

pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

/// Asks a yes/no question before destructive actions.
pub fn confirm_action(theme: &ColorfulTheme, prompt: &str, default: bool) -> std::io::Result<bool> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(dialoguer_io)
}

/// Prompts for a PIN without echoing it.
pub fn prompt_pin(theme: &ColorfulTheme, prompt: &str) -> std::io::Result<String> {
    Password::with_theme(theme)
        .with_prompt(prompt)
        .interact()
        .map_err(dialoguer_io)
}

fn dialoguer_io(err: dialoguer::Error) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, err)
}
