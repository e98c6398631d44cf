//! The configuration surface.

use crate::error::{ConfigError, ConfigResult};
use flavor_core::settings;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Shape of the backend suggestion request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendProtocol {
    /// `POST /api/suggestions/` with ingredient names and `algorithm`
    #[default]
    Names,
    /// `POST /api/suggest/` with ingredient ids, `mode`, and the full catalog
    Ids,
}

impl BackendProtocol {
    /// Suggestion endpoint path for this protocol
    pub fn suggestion_path(self) -> &'static str {
        match self {
            Self::Names => "/api/suggestions/",
            Self::Ids => "/api/suggest/",
        }
    }

    /// Lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Names => "names",
            Self::Ids => "ids",
        }
    }
}

impl FromStr for BackendProtocol {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "names" => Ok(Self::Names),
            "ids" => Ok(Self::Ids),
            other => Err(ConfigError::invalid(
                settings::BACKEND_PROTOCOL,
                format!("expected 'names' or 'ids', got '{other}'"),
            )),
        }
    }
}

impl fmt::Display for BackendProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw configuration, before transport validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlavorConfig {
    /// Gemini API credential
    pub gemini_api_key: Option<SecretString>,
    /// Prefer the REST backend
    pub use_backend: bool,
    /// REST backend base URL
    pub api_base_url: Option<String>,
    /// Backend request flavour
    pub backend_protocol: BackendProtocol,
    /// Gemini model name
    pub gemini_model: String,
    /// Gemini API base URL
    pub gemini_base_url: String,
    /// HTTP client timeout; none means the transport default
    #[serde(with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

impl FlavorConfig {
    /// Default Gemini model.
    pub const DEFAULT_GEMINI_MODEL: &'static str = "gemini-1.5-pro";
    /// Default Gemini API base (Google AI Studio).
    pub const DEFAULT_GEMINI_BASE_URL: &'static str =
        "https://generativelanguage.googleapis.com/v1beta";

    /// Load from environment variables only.
    pub fn from_env() -> ConfigResult<Self> {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Parse TOML text.
    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load an optional file, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading config file");
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (normally the process environment).
    ///
    /// Empty values count as unset.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(key) = get(settings::GEMINI_API_KEY) {
            self.gemini_api_key = Some(SecretString::new(key));
        }
        if let Some(flag) = get(settings::USE_BACKEND) {
            self.use_backend = parse_flag(&flag)?;
        }
        if let Some(url) = get(settings::API_BASE_URL) {
            self.api_base_url = Some(url);
        }
        if let Some(protocol) = get(settings::BACKEND_PROTOCOL) {
            self.backend_protocol = protocol.parse()?;
        }
        if let Some(model) = get(settings::GEMINI_MODEL) {
            self.gemini_model = model;
        }
        if let Some(url) = get(settings::GEMINI_BASE_URL) {
            self.gemini_base_url = url;
        }
        if let Some(timeout) = get(settings::TIMEOUT) {
            let parsed = humantime::parse_duration(timeout.trim())
                .map_err(|e| ConfigError::invalid(settings::TIMEOUT, e.to_string()))?;
            self.timeout = Some(parsed);
        }

        Ok(())
    }

    /// Whether a non-empty credential is configured.
    pub fn has_api_key(&self) -> bool {
        self.gemini_api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }

    /// Backend base URL, if set and non-blank.
    pub fn backend_url(&self) -> Option<&str> {
        self.api_base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Settings as displayable pairs, credential redacted.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                settings::GEMINI_API_KEY,
                if self.has_api_key() { "<set>" } else { "<unset>" }.to_string(),
            ),
            (settings::USE_BACKEND, self.use_backend.to_string()),
            (
                settings::API_BASE_URL,
                self.backend_url().unwrap_or("<unset>").to_string(),
            ),
            (settings::BACKEND_PROTOCOL, self.backend_protocol.to_string()),
            (settings::GEMINI_MODEL, self.gemini_model.clone()),
            (settings::GEMINI_BASE_URL, self.gemini_base_url.clone()),
            (
                settings::TIMEOUT,
                self.timeout.map_or_else(
                    || "<transport default>".to_string(),
                    |t| humantime::format_duration(t).to_string(),
                ),
            ),
        ]
    }
}

impl Default for FlavorConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            use_backend: false,
            api_base_url: None,
            backend_protocol: BackendProtocol::default(),
            gemini_model: Self::DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: Self::DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

fn parse_flag(value: &str) -> ConfigResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::invalid(
            settings::USE_BACKEND,
            format!("expected true or false, got '{other}'"),
        )),
    }
}
