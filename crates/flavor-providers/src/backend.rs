//! REST backend transport.
//!
//! # Endpoints
//! - `names`: `POST {base}/api/suggestions/` with `{"ingredients": [..names], "algorithm": mode}`
//! - `ids`: `POST {base}/api/suggest/` with `{"available_ingredient_ids": [..], "mode": mode, "allIngredients": [..]}`
//! - detail: `GET {base}/api/recipe/{id}/`

use crate::http::{build_client, join};
use async_trait::async_trait;
use flavor_config::{BackendProtocol, BackendSettings};
use flavor_core::{
    AlgorithmMode, GatewayError, GatewayResult, Ingredient, Recipe, SuggestionRequest,
    SuggestionTransport, TransportKind, UpstreamResponse,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, trace, warn};

/// Transport for the FlavorGraph REST backend.
#[derive(Debug, Clone)]
pub struct BackendTransport {
    settings: BackendSettings,
    client: Client,
}

impl BackendTransport {
    /// Create a new backend transport
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created
    pub fn new(settings: BackendSettings) -> GatewayResult<Self> {
        let client = build_client(settings.timeout)?;
        Ok(Self { settings, client })
    }

    /// Request flavour in use
    pub fn protocol(&self) -> BackendProtocol {
        self.settings.protocol
    }

    fn suggestion_url(&self) -> String {
        join(&self.settings.base_url, self.settings.protocol.suggestion_path())
    }

    fn recipe_url(&self, recipe_id: i64) -> String {
        join(&self.settings.base_url, &format!("/api/recipe/{recipe_id}/"))
    }

    fn transform_request<'a>(&self, request: &SuggestionRequest<'a>) -> BackendRequest<'a> {
        match self.settings.protocol {
            BackendProtocol::Names => BackendRequest::Names {
                ingredients: request.ingredient_names(),
                algorithm: request.mode,
            },
            BackendProtocol::Ids => BackendRequest::Ids {
                available_ingredient_ids: request.ingredient_ids(),
                mode: request.mode,
                all_ingredients: request.catalog,
            },
        }
    }

    /// Turn a non-success response into a status error.
    async fn status_error(response: Response) -> GatewayError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), body = %body, "Backend returned an error status");
        GatewayError::status(status.as_u16(), error_message(status, &body))
    }

    /// Read and parse a successful body.
    async fn parse_body<T: DeserializeOwned>(response: Response) -> GatewayResult<T> {
        let body = response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read backend response");
            GatewayError::network(format!("Failed to read response: {e}"))
        })?;

        trace!(body = %body, "Received backend response");

        serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Backend response did not match the expected shape");
            GatewayError::parse()
        })
    }
}

#[async_trait]
impl SuggestionTransport for BackendTransport {
    fn kind(&self) -> TransportKind {
        TransportKind::Backend
    }

    async fn suggest(&self, request: &SuggestionRequest<'_>) -> GatewayResult<UpstreamResponse> {
        let url = self.suggestion_url();
        let body = self.transform_request(request);

        debug!(
            url = %url,
            protocol = %self.settings.protocol,
            mode = %request.mode,
            ingredients = request.ingredients.len(),
            "Sending suggestion request"
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Backend request failed");
                GatewayError::network(e.to_string())
            })?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        Self::parse_body(response).await
    }

    async fn recipe_detail(&self, recipe_id: i64) -> GatewayResult<Recipe> {
        let url = self.recipe_url(recipe_id);
        debug!(url = %url, recipe_id, "Fetching recipe details");

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!(error = %e, "Recipe detail request failed");
            GatewayError::network(e.to_string())
        })?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        Self::parse_body(response).await
    }
}

/// Prefer the backend's `{"error": "..."}` message, then the raw body, then the reason phrase.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    #[derive(Deserialize)]
    struct BackendError {
        error: String,
    }

    if let Ok(parsed) = serde_json::from_str::<BackendError>(body) {
        return parsed.error;
    }

    let body = body.trim();
    if body.is_empty() {
        status.canonical_reason().unwrap_or("unknown error").to_string()
    } else {
        body.to_string()
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum BackendRequest<'a> {
    Names {
        ingredients: Vec<&'a str>,
        algorithm: &'a AlgorithmMode,
    },
    Ids {
        available_ingredient_ids: Vec<i64>,
        mode: &'a AlgorithmMode,
        #[serde(rename = "allIngredients")]
        all_ingredients: &'a [Ingredient],
    },
}
