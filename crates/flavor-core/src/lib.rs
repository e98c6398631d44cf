//! # FlavorGraph Core
//!
//! Core types, traits, and error handling for FlavorGraph.
//!
//! This crate provides the foundational pieces shared by every other crate:
//! - Ingredient, mode, recipe and suggestion types
//! - The `SuggestionTransport` seam implemented by the backend and model clients
//! - Ingredient-id resolution and response normalization
//! - The gateway error taxonomy
//! - Static catalogs of algorithm modes and starter ingredients

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod normalize;
pub mod response;
pub mod settings;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use catalog::ModeInfo;
pub use error::{GatewayError, GatewayResult};
pub use normalize::{normalize, resolve_ingredients, FAST_MODE_LIMIT};
pub use response::{
    ApiResponse, Insights, Recipe, Substitution, Suggestion, UpstreamInsights, UpstreamResponse,
};
pub use transport::{SuggestionRequest, SuggestionTransport, TransportKind};
pub use types::{AlgorithmMode, Ingredient, TimeComplexity};
