//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// momgen - Minutes of Meeting and Action Items from meeting notes
#[derive(Parser, Debug)]
#[command(name = "momgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate MOM and Action Items and print them
    Generate {
        /// Read notes from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Generate MOM and Action Items and email them
    Send {
        /// Recipient email address
        #[arg(short, long)]
        to: String,

        /// Read notes from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Launch the interactive form
    Tui,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
