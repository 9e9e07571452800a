//! Configuration module for momgen
//!
//! Loads settings from a TOML file and fills secrets from the environment.

mod settings;

pub use settings::{EmailSettings, LlmSettings, Settings};
pub use settings::{API_KEY_ENV, EMAIL_ADDRESS_ENV, EMAIL_PASSWORD_ENV};
