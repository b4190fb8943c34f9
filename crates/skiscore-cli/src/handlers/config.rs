//! Config command handler.
//!
//! Handles the API key and application settings.

use anyhow::{Result, bail};

use skiscore_core::SettingsUpdate;
use skiscore_core::paths::{API_KEY_ENV, env_file_path, persist_api_key};

use crate::bootstrap::CliContext;
use crate::config_commands::{ConfigCommand, SettingsCommand};
use crate::utils::input::prompt_confirmation;

/// Execute a config subcommand that needs the application context.
///
/// `config set-api-key` is handled by [`set_api_key`] before bootstrap.
pub async fn execute(ctx: &CliContext, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => show(ctx).await,
        ConfigCommand::SetApiKey { key } => set_api_key(&key),
        ConfigCommand::Settings { command } => handle_settings(ctx, command).await,
    }
}

/// Persist the API key to the `.env` file in the data directory.
pub fn set_api_key(key: &str) -> Result<()> {
    let key = key.trim();
    if key.is_empty() {
        bail!("API key cannot be empty");
    }
    persist_api_key(key)?;
    println!("✓ API key saved to {}", env_file_path()?.display());
    Ok(())
}

async fn show(ctx: &CliContext) -> Result<()> {
    let key_status = match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => mask_key(key.trim()),
        _ => "not set".to_string(),
    };
    println!("API key ({API_KEY_ENV}): {key_status}");
    println!("Env file: {}", env_file_path()?.display());
    println!();
    print_settings(ctx).await
}

async fn print_settings(ctx: &CliContext) -> Result<()> {
    let settings = ctx.app().settings().get().await?;
    println!("Current application settings:");
    println!("  language:            {}", settings.effective_language());
    println!(
        "  search_result_count: {}",
        settings.effective_search_result_count()
    );
    println!("  units:               {}", settings.effective_units());
    Ok(())
}

async fn handle_settings(ctx: &CliContext, command: SettingsCommand) -> Result<()> {
    match command {
        SettingsCommand::Show => print_settings(ctx).await,
        SettingsCommand::Set {
            language,
            search_result_count,
            units,
        } => {
            let update = SettingsUpdate {
                language: language.map(Some),
                search_result_count: search_result_count.map(Some),
                units: units.map(Some),
            };
            if update.is_empty() {
                println!("No settings provided. Use --help to see available options.");
                return Ok(());
            }
            ctx.app().settings().update(update).await?;
            println!("✓ Settings updated successfully.");
            print_settings(ctx).await
        }
        SettingsCommand::Reset { force } => {
            if !force && !prompt_confirmation("Reset all settings to defaults?")? {
                println!("Reset cancelled.");
                return Ok(());
            }
            let update = SettingsUpdate {
                language: Some(None),
                search_result_count: Some(None),
                units: Some(None),
            };
            ctx.app().settings().update(update).await?;
            println!("✓ Settings reset to defaults.");
            Ok(())
        }
    }
}

/// Show only the first and last four characters of a key.
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}
