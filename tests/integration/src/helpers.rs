//! Test helper utilities for integration tests

use crate::fixtures::TEST_API_KEY;
use flavor_config::FlavorConfig;
use flavor_gateway::SuggestionGateway;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

/// Initialize tracing for tests (only once)
static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
});

/// Initialize tracing for tests
pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// Build a configuration from environment-style pairs, ignoring the real environment.
pub fn config_from(pairs: &[(&str, &str)]) -> FlavorConfig {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();

    let mut config = FlavorConfig::default();
    config
        .apply_overrides(|key: &str| vars.get(key).cloned())
        .expect("valid test configuration");
    config
}

/// A gateway talking to a backend at `base_url`.
pub fn backend_gateway(base_url: &str, protocol: &str) -> SuggestionGateway {
    init_tracing();
    let config = config_from(&[
        ("FLAVORGRAPH_API_BASE_URL", base_url),
        ("FLAVORGRAPH_BACKEND_PROTOCOL", protocol),
    ]);
    SuggestionGateway::from_config(&config).expect("backend gateway")
}

/// A gateway talking to a Gemini API at `base_url`.
pub fn gemini_gateway(base_url: &str) -> SuggestionGateway {
    init_tracing();
    let config = config_from(&[
        ("GEMINI_API_KEY", TEST_API_KEY),
        ("FLAVORGRAPH_GEMINI_BASE_URL", base_url),
    ]);
    SuggestionGateway::from_config(&config).expect("gemini gateway")
}
