//! Recipe detail lookups.

use crate::fixtures::*;
use crate::helpers::*;
use crate::mock_upstreams::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn recipe_detail_from_backend() {
    let backend = MockBackend::start().await;
    backend.mock_recipe(12, 200, recipe_json(12)).await;
    let gateway = backend_gateway(&backend.uri(), "names");

    let recipe = gateway.fetch_recipe_detail(12).await.unwrap();

    assert_eq!(recipe.id, 12);
    assert_eq!(recipe.title, "Garlic Butter Pasta");
    let names: Vec<&str> = recipe.ingredients.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Garlic", "Pasta", "Butter"]);
}

#[tokio::test]
async fn recipe_detail_error_status() {
    let backend = MockBackend::start().await;
    backend
        .mock_recipe(404, 404, json!({"error": "Recipe not found"}))
        .await;
    let gateway = backend_gateway(&backend.uri(), "names");

    let err = gateway.fetch_recipe_detail(404).await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.to_string(), "Backend error 404: Recipe not found");
}

#[tokio::test]
async fn recipe_detail_needs_the_backend() {
    let gemini = MockGemini::start().await;
    let gateway = gemini_gateway(&gemini.uri());

    let err = gateway.fetch_recipe_detail(1).await.unwrap_err();
    assert_eq!(err.setting(), Some("FLAVORGRAPH_API_BASE_URL"));
    assert!(gemini.requests().await.is_empty());
}
