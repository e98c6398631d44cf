//! Configuration errors.

use flavor_core::GatewayError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required setting is not set.
    #[error("Missing required setting {setting}: {hint}")]
    Missing {
        /// Setting name
        setting: &'static str,
        /// What to do about it
        hint: String,
    },

    /// A setting has a value that cannot be used.
    #[error("Invalid value for {setting}: {message}")]
    Invalid {
        /// Setting name
        setting: &'static str,
        /// Why the value was rejected
        message: String,
    },

    /// The config file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ConfigError {
    /// Create a missing-setting error.
    pub fn missing(setting: &'static str, hint: impl Into<String>) -> Self {
        Self::Missing {
            setting,
            hint: hint.into(),
        }
    }

    /// Create an invalid-value error.
    pub fn invalid(setting: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            setting,
            message: message.into(),
        }
    }

    /// Name of the setting at fault, if any.
    pub fn setting(&self) -> Option<&'static str> {
        match self {
            Self::Missing { setting, .. } | Self::Invalid { setting, .. } => Some(setting),
            Self::Io { .. } | Self::Toml(_) => None,
        }
    }
}

impl From<ConfigError> for GatewayError {
    fn from(err: ConfigError) -> Self {
        let setting = err.setting().unwrap_or("config file");
        Self::configuration(setting, err.to_string())
    }
}
