//! Suggestion flows through a real gateway.

use crate::fixtures::*;
use crate::helpers::*;
use crate::mock_upstreams::*;
use flavor_core::{AlgorithmMode, GatewayError, TimeComplexity};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::time::Duration;

#[tokio::test]
async fn greedy_backend_response_is_truncated_and_completed() {
    let backend = MockBackend::start().await;
    backend
        .mock_suggestions("/api/suggestions/", 200, backend_body(5))
        .await;
    let gateway = backend_gateway(&backend.uri(), "names");

    let response = gateway
        .request_suggestions(&[2, 3], &AlgorithmMode::Greedy, &known_ingredients())
        .await
        .unwrap();

    let ids: Vec<i64> = response.suggestions.iter().map(|s| s.recipe.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(response.insights.algorithm, AlgorithmMode::Greedy);
    assert_eq!(response.insights.time_complexity, TimeComplexity::Polynomial);
    assert!(response.insights.execution_time_ms > 0.0);

    let requests = backend.requests().await;
    assert_eq!(requests.len(), 1);
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        body,
        json!({"ingredients": ["Garlic", "Onion"], "algorithm": "greedy"})
    );
}

#[tokio::test]
async fn empty_selection_sends_nothing() {
    let backend = MockBackend::start().await;
    backend
        .mock_suggestions("/api/suggestions/", 200, backend_body(1))
        .await;
    let gateway = backend_gateway(&backend.uri(), "names");

    let err = gateway
        .request_suggestions(&[], &AlgorithmMode::Greedy, &known_ingredients())
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::InvalidInput { .. }));
    assert!(backend.requests().await.is_empty());
}

#[tokio::test]
async fn backend_failure_reports_status() {
    let backend = MockBackend::start().await;
    backend
        .mock_suggestions_text("/api/suggestions/", 500, "Internal Server Error")
        .await;
    let gateway = backend_gateway(&backend.uri(), "names");

    let err = gateway
        .request_suggestions(&[1], &AlgorithmMode::Graph, &known_ingredients())
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(500));
    assert!(err.to_string().contains("500"));
    assert_eq!(backend.requests().await.len(), 1, "no retries");
}

#[tokio::test]
async fn backend_time_is_kept_but_labels_are_forced() {
    let backend = MockBackend::start().await;
    backend
        .mock_suggestions(
            "/api/suggestions/",
            200,
            json!({
                "insights": {"algorithm": "greedy", "execution_time_ms": 42.0, "time_complexity": "O(1)"},
                "suggestions": suggestions_json(5)
            }),
        )
        .await;
    let gateway = backend_gateway(&backend.uri(), "names");

    let response = gateway
        .request_suggestions(&[1, 2], &AlgorithmMode::Backtracking, &known_ingredients())
        .await
        .unwrap();

    assert_eq!(response.insights.algorithm, AlgorithmMode::Backtracking);
    assert_eq!(response.insights.time_complexity, TimeComplexity::Exponential);
    assert!((response.insights.execution_time_ms - 42.0).abs() < f64::EPSILON);
    assert_eq!(response.suggestions.len(), 5);
}

#[tokio::test]
async fn ids_protocol_sends_the_catalog() {
    let backend = MockBackend::start().await;
    backend
        .mock_suggestions("/api/suggest/", 200, backend_body(2))
        .await;
    let gateway = backend_gateway(&backend.uri(), "ids");
    let known = known_ingredients();

    let response = gateway
        .request_suggestions(&[4, 1], &AlgorithmMode::from("spiceSynergy"), &known)
        .await
        .unwrap();
    assert_eq!(response.suggestions.len(), 2);
    assert_eq!(response.insights.algorithm.as_str(), "spiceSynergy");

    let requests = backend.requests().await;
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["available_ingredient_ids"], json!([1, 4]));
    assert_eq!(body["mode"], "spiceSynergy");
    assert_eq!(body["allIngredients"].as_array().unwrap().len(), known.len());
}

#[tokio::test]
async fn malformed_backend_body_is_a_parse_error() {
    let backend = MockBackend::start().await;
    backend
        .mock_suggestions("/api/suggestions/", 200, json!({"results": []}))
        .await;
    let gateway = backend_gateway(&backend.uri(), "names");

    let err = gateway
        .request_suggestions(&[1], &AlgorithmMode::Greedy, &known_ingredients())
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Parse { .. }));
}

#[tokio::test]
async fn gemini_response_is_normalized() {
    let gemini = MockGemini::start().await;
    gemini.mock_output(&model_payload(6)).await;
    let gateway = gemini_gateway(&gemini.uri());

    let response = gateway
        .request_suggestions(&[4, 8], &AlgorithmMode::Greedy, &known_ingredients())
        .await
        .unwrap();

    assert_eq!(response.suggestions.len(), 3);
    assert_eq!(response.insights.algorithm, AlgorithmMode::Greedy);
    assert_eq!(response.insights.time_complexity, TimeComplexity::Polynomial);
    assert!(response.insights.execution_time_ms > 0.0);
    assert!(response.insights.execution_time_ms < 987_654.0);

    let requests = gemini.requests().await;
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].url.as_str().contains(TEST_API_KEY));

    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Tomato, Rice"));
    assert!(prompt.contains("Mode: greedy"));
    assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
}

#[tokio::test]
async fn gemini_failure_is_generic() {
    let gemini = MockGemini::start().await;
    gemini.mock_error(400, "API key not valid").await;
    let gateway = gemini_gateway(&gemini.uri());

    let err = gateway
        .request_suggestions(&[1], &AlgorithmMode::Backtracking, &known_ingredients())
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Model { .. }));
    let message = err.to_string();
    assert!(message.starts_with("Failed to get suggestions from the AI model"));
    assert!(!message.contains(TEST_API_KEY));
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let backend = MockBackend::start().await;
    backend
        .mock_suggestions("/api/suggestions/", 200, backend_body(4))
        .await;
    let gateway = backend_gateway(&backend.uri(), "names");
    let known = known_ingredients();

    let other = gateway.clone();
    let (greedy, graph) = tokio::join!(
        gateway.request_suggestions(&[1], &AlgorithmMode::Greedy, &known),
        other.request_suggestions(&[1], &AlgorithmMode::Graph, &known),
    );

    assert_eq!(greedy.unwrap().suggestions.len(), 3);
    assert_eq!(graph.unwrap().suggestions.len(), 4);
    assert_eq!(backend.requests().await.len(), 2);
}

#[tokio::test]
async fn configured_timeout_applies() {
    let backend = MockBackend::start().await;
    backend
        .mock_slow_suggestions("/api/suggestions/", Duration::from_secs(2), backend_body(1))
        .await;
    let base_url = backend.uri();
    let config = config_from(&[
        ("FLAVORGRAPH_API_BASE_URL", base_url.as_str()),
        ("FLAVORGRAPH_TIMEOUT", "200ms"),
    ]);
    let gateway = flavor_gateway::SuggestionGateway::from_config(&config).unwrap();

    let err = gateway
        .request_suggestions(&[1], &AlgorithmMode::Greedy, &known_ingredients())
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Transport { status: None, .. }));
}
