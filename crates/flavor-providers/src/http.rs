//! Shared HTTP client construction.

use flavor_core::{GatewayError, GatewayResult};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// User agent sent on every request.
pub(crate) const DEFAULT_USER_AGENT: &str = concat!("flavorgraph/", env!("CARGO_PKG_VERSION"));

/// Build a client. Without a timeout the reqwest default (none) applies.
///
/// A client that cannot be built is a transport failure; no setting is at fault.
pub(crate) fn build_client(timeout: Option<Duration>) -> GatewayResult<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));

    let mut builder = Client::builder().default_headers(headers);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder
        .build()
        .map_err(|e| GatewayError::network(format!("Failed to create HTTP client: {e}")))
}

/// Join a base URL and an absolute path without doubling slashes.
pub(crate) fn join(base: &Url, path: &str) -> String {
    format!("{}{}", base.as_str().trim_end_matches('/'), path)
}
