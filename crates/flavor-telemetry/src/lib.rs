//! # FlavorGraph Telemetry
//!
//! Structured logging for the gateway and CLI:
//! - `tracing-subscriber` setup with env-filter and plain or JSON output
//! - Span helpers for suggestion and recipe-detail calls

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod logging;

pub use logging::{init_logging, LogFormat, LoggingConfig, TelemetryError};
