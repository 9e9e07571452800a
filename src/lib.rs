//! momgen - Minutes of Meeting and Action Items from free-text meeting notes
//!
//! Notes go to a chat-completion model, the reply is shown as a markdown
//! document and can be mailed out as a small HTML email.

pub mod cli;
pub mod config;
pub mod llm;
pub mod mail;
pub mod pipeline;
pub mod summary;
pub mod tui;

use thiserror::Error;

/// Main error type for momgen
///
/// The `Display` output of the completion and mail variants is exactly what
/// the user sees, so the prefixes are part of the contract.
#[derive(Error, Debug)]
pub enum MomError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Error: {0}")]
    Completion(String),

    #[error("Error sending email: {0}")]
    Mail(String),
}

pub type Result<T> = std::result::Result<T, MomError>;

/// Application name
pub const APP_NAME: &str = "momgen";
