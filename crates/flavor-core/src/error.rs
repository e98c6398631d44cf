//! Error types for the suggestion gateway.

use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

/// User-facing text for any generative-model failure.
pub const MODEL_FAILURE_MESSAGE: &str = "Failed to get suggestions from the AI model. \
     Check GEMINI_API_KEY or switch to the backend by setting FLAVORGRAPH_USE_BACKEND=true.";

/// User-facing text for a response that does not match the expected shape.
pub const PARSE_FAILURE_MESSAGE: &str = "Failed to get suggestions: the response was not valid";

/// Errors that can occur while fetching suggestions.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The caller supplied nothing usable; no request was sent.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input.
        message: String,
    },

    /// A required setting is missing or invalid.
    #[error("Configuration error: {setting}: {message}")]
    Configuration {
        /// Name of the offending setting.
        setting: String,
        /// Error message describing the configuration issue.
        message: String,
    },

    /// The request failed on the wire or the backend answered with a non-success status.
    #[error("{}", transport_display(*status, message))]
    Transport {
        /// HTTP status code, when a response was received.
        status: Option<u16>,
        /// Response body or network error text.
        message: String,
    },

    /// The upstream answered, but not with the expected structure.
    #[error("{message}")]
    Parse {
        /// Generic, user-presentable message.
        message: String,
    },

    /// The generative-model call failed.
    #[error("{message}")]
    Model {
        /// Generic, user-presentable message.
        message: String,
    },
}

fn transport_display(status: Option<u16>, message: &str) -> String {
    match status {
        Some(status) => format!("Backend error {status}: {message}"),
        None => format!("Network error: {message}"),
    }
}

impl GatewayError {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create the error returned when no ingredient id resolved.
    pub fn no_ingredients() -> Self {
        Self::invalid_input("no ingredients selected")
    }

    /// Create a configuration error for a named setting.
    pub fn configuration(setting: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            setting: setting.into(),
            message: message.into(),
        }
    }

    /// Create a transport error from a non-success response.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Transport {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Create a transport error for a request that never got a response.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Transport {
            status: None,
            message: message.into(),
        }
    }

    /// Create a parse error with the generic user-facing message.
    pub fn parse() -> Self {
        Self::Parse {
            message: PARSE_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Create a model error with the generic user-facing message.
    pub fn model() -> Self {
        Self::Model {
            message: MODEL_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Get the HTTP status code if available.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// Get the missing setting name for configuration errors.
    pub fn setting(&self) -> Option<&str> {
        match self {
            Self::Configuration { setting, .. } => Some(setting),
            _ => None,
        }
    }

    /// Short machine-readable kind, used in logs and in the CLI's JSON failure output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::Configuration { .. } => "configuration",
            Self::Transport { .. } => "transport",
            Self::Parse { .. } => "parse",
            Self::Model { .. } => "model",
        }
    }
}
