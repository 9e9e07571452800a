//! CLI command implementations

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::pipeline::{Orchestrator, EMAIL_SENT};

/// Generate MOM and Action Items and print them
pub async fn generate_summary(settings: &Settings, file: Option<PathBuf>) -> Result<()> {
    let orchestrator = Orchestrator::from_settings(settings)?;
    let notes = read_notes(file.as_deref())?;

    let summary = orchestrator.generate(&notes).await?;
    println!("{}", summary.display);
    Ok(())
}

/// Generate MOM and Action Items and email them
pub async fn send_summary(settings: &Settings, to: &str, file: Option<PathBuf>) -> Result<()> {
    let orchestrator = Orchestrator::from_settings(settings)?;
    let notes = read_notes(file.as_deref())?;

    let payload = orchestrator.generate_and_email(&notes, to).await?;
    println!("{}", EMAIL_SENT);
    tracing::debug!(subject = %payload.subject, recipient = %payload.recipient, "Sent");
    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            println!("{}", render_settings(settings)?);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

fn read_notes(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read notes file: {}", path.display())),
        None => {
            let mut notes = String::new();
            std::io::stdin()
                .read_to_string(&mut notes)
                .context("Failed to read notes from stdin")?;
            Ok(notes)
        }
    }
}

/// TOML view of the settings with secrets masked.
fn render_settings(settings: &Settings) -> Result<String> {
    let mut shown = settings.clone();
    mask(&mut shown.llm.api_key);
    mask(&mut shown.email.password);
    Ok(toml::to_string_pretty(&shown)?)
}

fn mask(secret: &mut String) {
    if !secret.is_empty() {
        *secret = "********".to_string();
    }
}
