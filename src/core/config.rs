//! Environment-backed bot configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial creation

use anyhow::{Context, Result};

/// Default command prefix when COMMAND_PREFIX is unset
pub const DEFAULT_PREFIX: &str = "!";

/// Runtime configuration loaded from environment variables
///
/// Call `dotenvy::dotenv()` before `Config::from_env()` so a local `.env`
/// file is picked up during development.
#[derive(Clone, Debug)]
pub struct Config {
    /// Discord bot token (required)
    pub discord_token: String,
    /// Prefix that marks a message as a command, e.g. `!`
    pub command_prefix: String,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        let discord_token = std::env::var("DISCORD_TOKEN")
            .context("DISCORD_TOKEN environment variable is required")?;

        let command_prefix =
            std::env::var("COMMAND_PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string());

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            discord_token,
            command_prefix,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<Config>();
    }

    #[test]
    fn test_default_prefix() {
        assert_eq!(DEFAULT_PREFIX, "!");
    }
}
