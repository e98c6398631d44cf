//! # FlavorGraph Providers
//!
//! Transport implementations for the suggestion gateway:
//! - REST backend (`/api/suggestions/`, `/api/suggest/`, `/api/recipe/{id}/`)
//! - Google Gemini structured generation (`models/{model}:generateContent`)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "backend")]
pub mod backend;

#[cfg(feature = "gemini")]
pub mod gemini;

mod http;

#[cfg(feature = "backend")]
pub use backend::BackendTransport;

#[cfg(feature = "gemini")]
pub use gemini::{response_schema, GeminiTransport};

use flavor_config::TransportSettings;
use flavor_core::{settings, GatewayError, GatewayResult, SuggestionTransport, TransportKind};
use std::sync::Arc;
use tracing::info;

/// Build the transport selected by validated configuration.
pub fn build_transport(settings: TransportSettings) -> GatewayResult<Arc<dyn SuggestionTransport>> {
    match settings {
        #[cfg(feature = "backend")]
        TransportSettings::Backend(backend) => {
            let base_url = backend.base_url.to_string();
            let transport = BackendTransport::new(backend)?;
            info!(base_url = %base_url, protocol = %transport.protocol(), "Using REST backend");
            Ok(Arc::new(transport))
        }
        #[cfg(feature = "gemini")]
        TransportSettings::Model(model) => {
            let transport = GeminiTransport::new(model)?;
            info!(model = %transport.model(), "Using Gemini model");
            Ok(Arc::new(transport))
        }
        #[allow(unreachable_patterns)]
        other => Err(not_compiled_in(other.kind())),
    }
}

/// The selecting setting is valid but this build lacks the transport's cargo feature.
fn not_compiled_in(kind: TransportKind) -> GatewayError {
    let setting = match kind {
        TransportKind::Backend => settings::API_BASE_URL,
        TransportKind::Model => settings::GEMINI_API_KEY,
    };
    GatewayError::configuration(
        setting,
        format!(
            "the {kind} transport was not compiled in; rebuild with the `{}` feature",
            feature_name(kind)
        ),
    )
}

fn feature_name(kind: TransportKind) -> &'static str {
    match kind {
        TransportKind::Backend => "backend",
        TransportKind::Model => "gemini",
    }
}
