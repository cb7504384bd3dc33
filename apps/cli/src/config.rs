//! # Configuration
//!
//! Runtime settings for the app.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--no-color`, `--plain`)
//! 2. Environment variables (`MCSHELL_*`)
//! 3. Defaults (this file)
//!
//! Logging verbosity is not configured here; `RUST_LOG` feeds the tracing
//! filter directly (see `init_tracing`).

use crate::cli::CommandLine;

/// Environment variable toggling ANSI colors.
pub const ENV_COLOR: &str = "MCSHELL_COLOR";

/// Environment variable forcing the numbered prompt.
pub const ENV_PLAIN: &str = "MCSHELL_PLAIN";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Emit ANSI colors. When on, the terminal still decides; when off,
    /// colors are forced off.
    pub color: bool,

    /// Use the numbered prompt even on a terminal.
    pub plain_prompt: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            color: true,
            plain_prompt: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(value) = lookup(ENV_COLOR) {
            config.color = parse_flag(ENV_COLOR, &value)?;
        }

        if let Some(value) = lookup(ENV_PLAIN) {
            config.plain_prompt = parse_flag(ENV_PLAIN, &value)?;
        }

        Ok(config)
    }

    /// Applies command-line overrides. Flags only ever switch features off
    /// (colors) or on (plain prompt); absent flags keep the loaded value.
    pub fn with_args(mut self, args: &CommandLine) -> Self {
        if args.no_color {
            self.color = false;
        }
        if args.plain {
            self.plain_prompt = true;
        }
        self
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.color);
        assert!(!config.plain_prompt);
    }

    #[test]
    fn test_env_overrides() {
        let config =
            AppConfig::from_lookup(lookup(&[(ENV_COLOR, "no"), (ENV_PLAIN, " TRUE ")])).unwrap();
        assert!(!config.color);
        assert!(config.plain_prompt);
    }

    #[test]
    fn test_invalid_env_value() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_COLOR, "sometimes")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for MCSHELL_COLOR: 'sometimes'"
        );
    }

    #[test]
    fn test_args_override_env() {
        let config = AppConfig::from_lookup(lookup(&[(ENV_COLOR, "1")]))
            .unwrap()
            .with_args(&CommandLine {
                no_color: true,
                plain: true,
            });
        assert!(!config.color);
        assert!(config.plain_prompt);
    }

    #[test]
    fn test_absent_args_keep_env() {
        let config = AppConfig::from_lookup(lookup(&[(ENV_PLAIN, "on")]))
            .unwrap()
            .with_args(&CommandLine::default());
        assert!(config.plain_prompt);
        assert!(config.color);
    }
}
