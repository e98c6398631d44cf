//! Google Gemini transport.
//!
//! Uses structured generation on the Google AI Studio API:
//! `POST {base}/models/{MODEL}:generateContent`, credential in the
//! `x-goog-api-key` header.

use crate::http::{build_client, join};
use async_trait::async_trait;
use flavor_config::ModelSettings;
use flavor_core::{
    AlgorithmMode, GatewayError, GatewayResult, Ingredient, SuggestionRequest,
    SuggestionTransport, TransportKind, UpstreamResponse,
};
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use tracing::{debug, error, trace};

const API_KEY_HEADER: &str = "x-goog-api-key";
const JSON_MIME_TYPE: &str = "application/json";

/// Transport that asks a Gemini model for suggestions.
#[derive(Clone)]
pub struct GeminiTransport {
    settings: ModelSettings,
    client: Client,
    endpoint: String,
}

impl fmt::Debug for GeminiTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiTransport")
            .field("model", &self.settings.model)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl GeminiTransport {
    /// Create a new Gemini transport
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created
    pub fn new(settings: ModelSettings) -> GatewayResult<Self> {
        let client = build_client(settings.timeout)?;
        let endpoint = join(
            &settings.base_url,
            &format!("/models/{}:generateContent", settings.model),
        );

        Ok(Self {
            settings,
            client,
            endpoint,
        })
    }

    /// Model name in use
    pub fn model(&self) -> &str {
        &self.settings.model
    }

    fn transform_request(request: &SuggestionRequest<'_>) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: build_prompt(request.ingredients, request.mode),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                response_mime_type: JSON_MIME_TYPE.to_string(),
                response_schema: response_schema(),
            },
        }
    }

    /// Pull the JSON payload out of the first candidate.
    fn candidate_text(response: GeminiResponse) -> Option<String> {
        let candidate = response.candidates.into_iter().next()?;
        let text: String = candidate
            .content?
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[async_trait]
impl SuggestionTransport for GeminiTransport {
    fn kind(&self) -> TransportKind {
        TransportKind::Model
    }

    async fn suggest(&self, request: &SuggestionRequest<'_>) -> GatewayResult<UpstreamResponse> {
        let body = Self::transform_request(request);

        debug!(
            model = %self.settings.model,
            url = %self.endpoint,
            mode = %request.mode,
            ingredients = request.ingredients.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, self.settings.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e.without_url(), "Gemini request failed");
                GatewayError::model()
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!(error = %e.without_url(), "Failed to read Gemini response");
            GatewayError::model()
        })?;

        trace!(status = %status, body = %text, "Received Gemini response");

        if !status.is_success() {
            error!(status = status.as_u16(), message = %api_error_message(&text), "Gemini API error");
            return Err(GatewayError::model());
        }

        let envelope: GeminiResponse = serde_json::from_str(&text).map_err(|e| {
            error!(error = %e, "Invalid Gemini response envelope");
            GatewayError::model()
        })?;

        let Some(payload) = Self::candidate_text(envelope) else {
            error!("Gemini response contained no candidate text");
            return Err(GatewayError::model());
        };

        let parsed: UpstreamResponse = serde_json::from_str(&payload).map_err(|e| {
            error!(error = %e, "Model output did not match the response schema");
            GatewayError::parse()
        })?;

        if parsed.insights.is_none() {
            error!("Model output is missing the insights block");
            return Err(GatewayError::parse());
        }

        Ok(parsed)
    }
}

/// The natural-language prompt sent to the model.
pub fn build_prompt(ingredients: &[Ingredient], mode: &AlgorithmMode) -> String {
    let names = ingredients
        .iter()
        .map(|i| i.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are FlavorGraph, a cooking assistant. Given a list of ingredients and an \
         algorithm mode, produce a JSON object that matches the response schema. Suggest a \
         few creative recipes with realistic prep times. For each recipe give a match score \
         between 0 and 1 for how well it uses the listed ingredients, the ingredients that \
         are still missing, and substitutions for them. Include insights describing the \
         chosen mode and a simulated execution time in milliseconds.\n\n\
         Ingredients: {names}\n\
         Mode: {mode}\n"
    )
}

/// Response schema in the OpenAPI subset Gemini accepts.
pub fn response_schema() -> Value {
    let ingredient = json!({
        "type": "OBJECT",
        "properties": {
            "id": { "type": "INTEGER" },
            "name": { "type": "STRING" }
        },
        "required": ["id", "name"]
    });

    json!({
        "type": "OBJECT",
        "properties": {
            "insights": {
                "type": "OBJECT",
                "properties": {
                    "algorithm": {
                        "type": "STRING",
                        "description": "The mode that was requested."
                    },
                    "execution_time_ms": {
                        "type": "NUMBER",
                        "description": "A realistic but simulated execution time in milliseconds."
                    },
                    "time_complexity": {
                        "type": "STRING",
                        "description": "The theoretical time complexity for the mode."
                    }
                },
                "required": ["algorithm", "execution_time_ms", "time_complexity"]
            },
            "suggestions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "recipe": {
                            "type": "OBJECT",
                            "properties": {
                                "id": { "type": "INTEGER" },
                                "title": { "type": "STRING" },
                                "instructions": { "type": "STRING" },
                                "prep_time_minutes": { "type": "NUMBER" }
                            },
                            "required": ["id", "title", "instructions", "prep_time_minutes"]
                        },
                        "match_score": {
                            "type": "NUMBER",
                            "description": "Ingredient overlap between 0 and 1."
                        },
                        "missing_ingredients": {
                            "type": "ARRAY",
                            "items": ingredient
                        },
                        "substitutions": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "original_ingredient_id": { "type": "INTEGER" },
                                    "substitute_ingredient_name": { "type": "STRING" },
                                    "reason": { "type": "STRING" }
                                },
                                "required": ["substitute_ingredient_name", "reason"]
                            }
                        }
                    },
                    "required": ["recipe", "match_score", "missing_ingredients", "substitutions"]
                }
            }
        },
        "required": ["insights", "suggestions"]
    })
}

/// Extract `error.message` from a Google error body.
fn api_error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct GeminiErrorResponse {
        error: GeminiErrorDetail,
    }

    #[derive(Deserialize)]
    struct GeminiErrorDetail {
        message: String,
    }

    serde_json::from_str::<GeminiErrorResponse>(body)
        .map_or_else(|_| body.to_string(), |parsed| parsed.error.message)
}

// Gemini API types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiResponseContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}
