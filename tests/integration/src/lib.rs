//! Integration tests for FlavorGraph
//!
//! These drive a real `SuggestionGateway` against wiremock stand-ins for the
//! REST backend and the Gemini API:
//! - Suggestion flows on both transports
//! - Recipe detail lookups
//! - Configuration-driven transport selection

pub mod fixtures;
pub mod helpers;
pub mod mock_upstreams;

// Re-export commonly used items
pub use fixtures::*;
pub use helpers::*;
pub use mock_upstreams::*;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod recipe_tests;
#[cfg(test)]
mod suggestion_tests;
