//! momgen - Minutes of Meeting and Action Items from meeting notes
//!
//! Entry point for the momgen CLI application.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use momgen::cli::{Cli, Commands};
use momgen::config::Settings;
use momgen::MomError;

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<MomError>() {
                // Pipeline errors are already user-facing text.
                Some(err @ (MomError::Completion(_) | MomError::Mail(_))) => eprintln!("{}", err),
                _ => eprintln!("Error: {:?}", err),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Completions { shell } => {
            momgen::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Generate { file } => {
                    settings.require_api_key()?;
                    momgen::cli::commands::generate_summary(&settings, file).await?;
                }
                Commands::Send { to, file } => {
                    settings.require_api_key()?;
                    momgen::cli::commands::send_summary(&settings, &to, file).await?;
                }
                Commands::Tui => {
                    settings.require_api_key()?;
                    momgen::tui::run(&settings).await?;
                }
                Commands::Config(config_cmd) => {
                    momgen::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
