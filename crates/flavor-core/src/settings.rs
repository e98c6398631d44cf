//! Names of the configuration settings, as they appear in the environment.
//!
//! Errors that complain about a missing setting always name it by one of
//! these constants so the user knows exactly what to set.

/// Gemini API credential.
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";

/// Prefer the REST backend even when a credential is present.
pub const USE_BACKEND: &str = "FLAVORGRAPH_USE_BACKEND";

/// Base URL of the REST backend.
pub const API_BASE_URL: &str = "FLAVORGRAPH_API_BASE_URL";

/// Backend request flavour (`names` or `ids`).
pub const BACKEND_PROTOCOL: &str = "FLAVORGRAPH_BACKEND_PROTOCOL";

/// Gemini model name.
pub const GEMINI_MODEL: &str = "FLAVORGRAPH_GEMINI_MODEL";

/// Gemini API base URL.
pub const GEMINI_BASE_URL: &str = "FLAVORGRAPH_GEMINI_BASE_URL";

/// HTTP timeout, humantime syntax.
pub const TIMEOUT: &str = "FLAVORGRAPH_TIMEOUT";
