//! The suggestion gateway.

use flavor_config::FlavorConfig;
use flavor_core::{
    normalize, resolve_ingredients, AlgorithmMode, ApiResponse, GatewayResult, Ingredient,
    Recipe, SuggestionRequest, SuggestionTransport, TransportKind,
};
use flavor_providers::build_transport;
use flavor_telemetry::{recipe_span, suggestion_span};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn, Instrument};

/// Fetches and normalizes recipe suggestions through one transport.
///
/// Cheap to clone; clones share the transport.
#[derive(Debug, Clone)]
pub struct SuggestionGateway {
    transport: Arc<dyn SuggestionTransport>,
}

impl SuggestionGateway {
    /// Wrap an existing transport
    pub fn new(transport: Arc<dyn SuggestionTransport>) -> Self {
        Self { transport }
    }

    /// Validate configuration and build the selected transport.
    ///
    /// # Errors
    /// Returns a configuration error naming the missing or invalid setting
    pub fn from_config(config: &FlavorConfig) -> GatewayResult<Self> {
        let settings = config.transport()?;
        Ok(Self::new(build_transport(settings)?))
    }

    /// Which kind of upstream this gateway talks to
    pub fn kind(&self) -> TransportKind {
        self.transport.kind()
    }

    /// Resolve ids, make one upstream call, and normalize the result.
    ///
    /// # Errors
    /// - `InvalidInput` if no id matches a known ingredient; nothing is sent
    /// - `Transport`, `Model` or `Parse` if the upstream call fails
    pub async fn request_suggestions(
        &self,
        selected_ids: &[i64],
        mode: &AlgorithmMode,
        all_known_ingredients: &[Ingredient],
    ) -> GatewayResult<ApiResponse> {
        let kind = self.kind();
        let ingredients = resolve_ingredients(selected_ids, all_known_ingredients).map_err(|e| {
            warn!(selected = selected_ids.len(), "No selected ingredient resolved");
            e
        })?;

        let span = suggestion_span!(kind, mode, ingredients.len());
        self.dispatch(&ingredients, mode, all_known_ingredients)
            .instrument(span)
            .await
    }

    /// Fetch one recipe with its full ingredient list.
    ///
    /// # Errors
    /// - `Configuration` when the gateway is using the model transport
    /// - `Transport` or `Parse` if the backend call fails
    pub async fn fetch_recipe_detail(&self, recipe_id: i64) -> GatewayResult<Recipe> {
        let span = recipe_span!(self.kind(), recipe_id);
        self.transport.recipe_detail(recipe_id).instrument(span).await
    }

    async fn dispatch(
        &self,
        ingredients: &[Ingredient],
        mode: &AlgorithmMode,
        catalog: &[Ingredient],
    ) -> GatewayResult<ApiResponse> {
        let kind = self.kind();
        let request = SuggestionRequest {
            ingredients,
            mode,
            catalog,
        };

        let started = Instant::now();
        let upstream = self.transport.suggest(&request).await?;
        let elapsed = started.elapsed();

        debug!(
            returned = upstream.suggestions.len(),
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "Upstream responded"
        );

        let response = normalize(upstream, mode, kind, elapsed);

        info!(
            suggestions = response.suggestions.len(),
            execution_time_ms = response.insights.execution_time_ms,
            "Suggestions ready"
        );

        Ok(response)
    }
}
