use dialoguer::{theme::ColorfulTheme, Input, Password, Select};
use semver::Version as SemverVersion;

use crate::cli::VersionType;
use crate::error::Result;
use crate::package;
use crate::ui;

/// Ask what type of release this is, previewing the version each choice
/// would produce.
pub fn prompt_version(current: &SemverVersion) -> Result<SemverVersion> {
    let theme = ColorfulTheme::default();

    let next_patch = package::increment(current, VersionType::Patch);
    let next_minor = package::increment(current, VersionType::Minor);
    let next_major = package::increment(current, VersionType::Major);

    let choices = vec![
        format!("Patch ({next_patch})"),
        format!("Minor ({next_minor})"),
        format!("Major ({next_major})"),
        "Custom".to_string(),
    ];

    let selection = Select::with_theme(&theme)
        .with_prompt(format!("What type of release is this? (current: {current})"))
        .items(&choices)
        .default(0)
        .interact()?;

    match selection {
        0 => Ok(next_patch),
        1 => Ok(next_minor),
        2 => Ok(next_major),
        _ => prompt_custom_version(&theme),
    }
}

fn prompt_custom_version(theme: &ColorfulTheme) -> Result<SemverVersion> {
    let input: String = Input::with_theme(theme)
        .with_prompt("Enter your custom version")
        .validate_with(|value: &String| match SemverVersion::parse(value) {
            Ok(_) => Ok(()),
            Err(_) => Err("Please enter a valid semantic version"),
        })
        .interact_text()?;

    Ok(SemverVersion::parse(&input)?)
}

/// Read a secret from the environment, falling back to a hidden prompt.
pub fn resolve_token(env_var: &str, prompt: &str) -> Result<String> {
    if let Ok(value) = std::env::var(env_var) {
        if !value.is_empty() {
            return Ok(value);
        }
    }

    ui::warning_message(&format!(
        "{env_var} env variable not found (set {env_var} to skip this prompt)"
    ));
    let token = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact()?;

    Ok(token)
}

/// Read a non-secret setting from the environment, falling back to a
/// visible prompt.
pub fn resolve_setting(env_var: &str, prompt: &str) -> Result<String> {
    if let Ok(value) = std::env::var(env_var) {
        if !value.is_empty() {
            return Ok(value);
        }
    }

    ui::warning_message(&format!(
        "{env_var} env variable not found (set {env_var} to skip this prompt)"
    ));
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()?;

    Ok(value)
}
