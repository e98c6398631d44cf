//! The transport seam.
//!
//! A transport turns resolved ingredients and a mode into one upstream call.
//! Exactly one implementation is chosen at startup from validated
//! configuration.

use crate::error::{GatewayError, GatewayResult};
use crate::response::{Recipe, UpstreamResponse};
use crate::settings;
use crate::types::{AlgorithmMode, Ingredient};
use async_trait::async_trait;
use std::fmt;

/// Which kind of upstream a transport talks to.
///
/// Normalization treats the reported execution time differently per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportKind {
    /// REST backend
    Backend,
    /// Generative model
    Model,
}

impl TransportKind {
    /// Lowercase name for logs
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Model => "model",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs for one suggestion call.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionRequest<'a> {
    /// Resolved, non-empty ingredient selection
    pub ingredients: &'a [Ingredient],
    /// Requested mode
    pub mode: &'a AlgorithmMode,
    /// Every ingredient the caller knows about
    pub catalog: &'a [Ingredient],
}

impl<'a> SuggestionRequest<'a> {
    /// Names of the selected ingredients, borrowed from the selection itself
    pub fn ingredient_names(&self) -> Vec<&'a str> {
        self.ingredients.iter().map(|i| i.name.as_str()).collect()
    }

    /// Ids of the selected ingredients
    pub fn ingredient_ids(&self) -> Vec<i64> {
        self.ingredients.iter().map(|i| i.id).collect()
    }
}

/// One outbound suggestion call, no retries.
///
/// Implementations should be stateless and thread-safe.
#[async_trait]
pub trait SuggestionTransport: Send + Sync + fmt::Debug {
    /// Kind of upstream
    fn kind(&self) -> TransportKind;

    /// Send the request and parse the body. Parse failures are errors.
    async fn suggest(&self, request: &SuggestionRequest<'_>) -> GatewayResult<UpstreamResponse>;

    /// Fetch one recipe with its full ingredient list.
    ///
    /// Only the REST backend has a detail endpoint.
    async fn recipe_detail(&self, recipe_id: i64) -> GatewayResult<Recipe> {
        Err(GatewayError::configuration(
            settings::API_BASE_URL,
            format!("recipe {recipe_id}: details are only available from the REST backend"),
        ))
    }
}
