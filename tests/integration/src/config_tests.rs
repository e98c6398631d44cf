//! Configuration-driven transport selection.

use crate::fixtures::TEST_API_KEY;
use crate::helpers::config_from;
use flavor_core::TransportKind;
use flavor_gateway::SuggestionGateway;
use pretty_assertions::assert_eq;

fn kind_for(pairs: &[(&str, &str)]) -> Result<TransportKind, String> {
    SuggestionGateway::from_config(&config_from(pairs))
        .map(|gateway| gateway.kind())
        .map_err(|e| e.setting().unwrap_or_default().to_string())
}

#[test]
fn selection_matrix() {
    let url = ("FLAVORGRAPH_API_BASE_URL", "http://localhost:8000");
    let key = ("GEMINI_API_KEY", TEST_API_KEY);
    let prefer = ("FLAVORGRAPH_USE_BACKEND", "true");

    assert_eq!(kind_for(&[key]), Ok(TransportKind::Model));
    assert_eq!(kind_for(&[url]), Ok(TransportKind::Backend));
    assert_eq!(kind_for(&[key, url]), Ok(TransportKind::Backend));
    assert_eq!(kind_for(&[key, url, prefer]), Ok(TransportKind::Backend));

    assert_eq!(
        kind_for(&[key, prefer]),
        Err("FLAVORGRAPH_API_BASE_URL".to_string())
    );
    assert_eq!(kind_for(&[]), Err("GEMINI_API_KEY".to_string()));
}

#[test]
fn invalid_settings_fail_at_startup() {
    assert_eq!(
        kind_for(&[("FLAVORGRAPH_API_BASE_URL", "localhost:8000/api")]),
        Err("FLAVORGRAPH_API_BASE_URL".to_string())
    );
    assert_eq!(
        kind_for(&[
            ("GEMINI_API_KEY", TEST_API_KEY),
            ("FLAVORGRAPH_GEMINI_MODEL", "   ")
        ]),
        Ok(TransportKind::Model),
        "blank values count as unset"
    );
}

#[test]
fn configuration_errors_never_echo_the_credential() {
    let config = config_from(&[
        ("GEMINI_API_KEY", TEST_API_KEY),
        ("FLAVORGRAPH_USE_BACKEND", "true"),
    ]);
    let err = SuggestionGateway::from_config(&config).unwrap_err();
    assert!(!err.to_string().contains(TEST_API_KEY));
    assert!(!format!("{config:?}").contains(TEST_API_KEY));
}
