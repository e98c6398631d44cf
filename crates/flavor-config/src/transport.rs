//! Transport selection.

use crate::config::{BackendProtocol, FlavorConfig};
use crate::error::{ConfigError, ConfigResult};
use flavor_core::{settings, TransportKind};
use secrecy::SecretString;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Settings for the REST backend transport.
#[derive(Debug, Clone)]
pub struct BackendSettings {
    /// Base URL, trailing slash removed
    pub base_url: Url,
    /// Request flavour
    pub protocol: BackendProtocol,
    /// HTTP timeout
    pub timeout: Option<Duration>,
}

/// Settings for the generative-model transport.
#[derive(Debug, Clone)]
pub struct ModelSettings {
    /// Gemini credential
    pub api_key: SecretString,
    /// Model name
    pub model: String,
    /// API base URL
    pub base_url: Url,
    /// HTTP timeout
    pub timeout: Option<Duration>,
}

/// The validated choice of upstream.
#[derive(Debug, Clone)]
pub enum TransportSettings {
    /// Talk to the REST backend
    Backend(BackendSettings),
    /// Talk to Gemini
    Model(ModelSettings),
}

impl TransportSettings {
    /// Which kind of transport was selected
    pub fn kind(&self) -> TransportKind {
        match self {
            Self::Backend(_) => TransportKind::Backend,
            Self::Model(_) => TransportKind::Model,
        }
    }
}

impl FlavorConfig {
    /// Choose and validate the transport.
    ///
    /// The backend is used when a base URL is set, when `use_backend` is on,
    /// or when there is no credential. Otherwise the model is used.
    pub fn transport(&self) -> ConfigResult<TransportSettings> {
        let wants_backend = self.backend_url().is_some() || self.use_backend || !self.has_api_key();

        if wants_backend {
            let Some(raw_url) = self.backend_url() else {
                let setting = if self.use_backend {
                    settings::API_BASE_URL
                } else {
                    settings::GEMINI_API_KEY
                };
                return Err(ConfigError::missing(
                    setting,
                    format!(
                        "set {} to use Gemini, or {} to use the REST backend",
                        settings::GEMINI_API_KEY,
                        settings::API_BASE_URL
                    ),
                ));
            };

            let base_url = parse_base_url(settings::API_BASE_URL, raw_url)?;
            debug!(base_url = %base_url, protocol = %self.backend_protocol, "Selected backend transport");

            return Ok(TransportSettings::Backend(BackendSettings {
                base_url,
                protocol: self.backend_protocol,
                timeout: self.timeout,
            }));
        }

        let api_key = self
            .gemini_api_key
            .clone()
            .ok_or_else(|| ConfigError::missing(settings::GEMINI_API_KEY, "credential not set"))?;
        let base_url = parse_base_url(settings::GEMINI_BASE_URL, &self.gemini_base_url)?;
        if self.gemini_model.trim().is_empty() {
            return Err(ConfigError::invalid(
                settings::GEMINI_MODEL,
                "model name is empty",
            ));
        }
        debug!(model = %self.gemini_model, "Selected model transport");

        Ok(TransportSettings::Model(ModelSettings {
            api_key,
            model: self.gemini_model.trim().to_string(),
            base_url,
            timeout: self.timeout,
        }))
    }
}

/// Parse a base URL and strip any trailing slash from its path.
fn parse_base_url(setting: &'static str, raw: &str) -> ConfigResult<Url> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::invalid(setting, format!("'{raw}' is not a URL: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::invalid(
            setting,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    let trimmed = url.path().trim_end_matches('/').to_string();
    url.set_path(&trimmed);
    Ok(url)
}
