//! # FlavorGraph Gateway
//!
//! The single entry point for recipe suggestions. A `SuggestionGateway`
//! owns one transport, chosen at startup, and for every call:
//!
//! 1. resolves the selected ingredient ids,
//! 2. makes exactly one upstream call,
//! 3. normalizes the result.
//!
//! ```no_run
//! use flavor_config::FlavorConfig;
//! use flavor_core::{catalog, AlgorithmMode};
//! use flavor_gateway::SuggestionGateway;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = SuggestionGateway::from_config(&FlavorConfig::from_env()?)?;
//! let response = gateway
//!     .request_suggestions(&[2, 3], &AlgorithmMode::Greedy, &catalog::starter_ingredients())
//!     .await?;
//! println!("{} suggestions", response.suggestions.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gateway;

pub use gateway::SuggestionGateway;
