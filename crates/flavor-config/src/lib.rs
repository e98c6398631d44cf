//! # FlavorGraph Configuration
//!
//! Configuration is read once at startup from an optional TOML file and then
//! from environment variables, which win. The result is validated into a
//! [`TransportSettings`] that says which upstream to talk to.
//!
//! | Setting | Environment | TOML key |
//! |---|---|---|
//! | Gemini credential | `GEMINI_API_KEY` | `gemini_api_key` |
//! | Prefer backend | `FLAVORGRAPH_USE_BACKEND` | `use_backend` |
//! | Backend base URL | `FLAVORGRAPH_API_BASE_URL` | `api_base_url` |
//! | Backend protocol | `FLAVORGRAPH_BACKEND_PROTOCOL` | `backend_protocol` |
//! | Gemini model | `FLAVORGRAPH_GEMINI_MODEL` | `gemini_model` |
//! | Gemini API base | `FLAVORGRAPH_GEMINI_BASE_URL` | `gemini_base_url` |
//! | HTTP timeout | `FLAVORGRAPH_TIMEOUT` | `timeout` |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod transport;

pub use config::{BackendProtocol, FlavorConfig};
pub use error::{ConfigError, ConfigResult};
pub use transport::{BackendSettings, ModelSettings, TransportSettings};
