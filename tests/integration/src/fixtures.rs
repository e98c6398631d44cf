//! Canned request data and upstream bodies.

use flavor_core::{catalog, Ingredient};
use serde_json::{json, Value};

/// Credential used by every Gemini test.
pub const TEST_API_KEY: &str = "integration-test-key-5f2a";

/// The ingredient list most tests select from.
pub fn known_ingredients() -> Vec<Ingredient> {
    catalog::starter_ingredients()
}

/// One suggestion as an upstream would send it.
pub fn suggestion_json(id: i64) -> Value {
    json!({
        "recipe": {
            "id": id,
            "title": format!("Recipe {id}"),
            "instructions": "Chop, then cook.",
            "prep_time_minutes": 10 + id
        },
        "match_score": 0.75,
        "missing_ingredients": [{"id": 100 + id, "name": format!("Extra {id}")}],
        "substitutions": [{
            "original_ingredient_id": 100 + id,
            "substitute_ingredient_name": "Butter",
            "reason": "similar fat content"
        }]
    })
}

/// `count` suggestions with ids 1..=count.
pub fn suggestions_json(count: i64) -> Vec<Value> {
    (1..=count).map(suggestion_json).collect()
}

/// A backend body without an insights block.
pub fn backend_body(count: i64) -> Value {
    json!({ "suggestions": suggestions_json(count) })
}

/// A full model payload, insights included.
pub fn model_payload(count: i64) -> Value {
    json!({
        "insights": {
            "algorithm": "backtracking",
            "execution_time_ms": 987_654.0,
            "time_complexity": "O(n!)"
        },
        "suggestions": suggestions_json(count)
    })
}

/// Wrap a model payload in a `generateContent` response envelope.
pub fn gemini_envelope(payload: &Value) -> Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{"text": payload.to_string()}]
            },
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 120, "candidatesTokenCount": 480}
    })
}

/// A recipe detail body.
pub fn recipe_json(id: i64) -> Value {
    json!({
        "id": id,
        "title": "Garlic Butter Pasta",
        "instructions": "Boil pasta.\nMelt butter with garlic.\nToss.",
        "prep_time_minutes": 20,
        "ingredients": [
            {"id": 2, "name": "Garlic"},
            {"id": 5, "name": "Pasta"},
            {"id": 18, "name": "Butter"}
        ]
    })
}
