//! Response types.
//!
//! `UpstreamResponse` is the lenient shape accepted from either transport;
//! `ApiResponse` is the fixed shape handed to callers after normalization.

use crate::types::{AlgorithmMode, Ingredient, TimeComplexity};
use serde::{Deserialize, Serialize};

/// A recipe, populated entirely by the upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe identifier
    pub id: i64,
    /// Title
    pub title: String,
    /// Preparation instructions
    #[serde(default)]
    pub instructions: String,
    /// Preparation time in minutes
    pub prep_time_minutes: f64,
    /// Full ingredient list (usually only present on the detail endpoint)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<Ingredient>,
}

/// A suggested replacement for a missing ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substitution {
    /// Id of the ingredient being replaced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_ingredient_id: Option<i64>,
    /// Name of the replacement
    pub substitute_ingredient_name: String,
    /// Why it works
    #[serde(default)]
    pub reason: String,
}

/// One recipe suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested recipe
    pub recipe: Recipe,
    /// Ingredient overlap in [0, 1]
    pub match_score: f64,
    /// Ingredients the user lacks, in upstream order
    #[serde(default)]
    pub missing_ingredients: Vec<Ingredient>,
    /// Possible substitutions
    #[serde(default)]
    pub substitutions: Vec<Substitution>,
}

impl Suggestion {
    /// The only substitution that is ever displayed.
    pub fn primary_substitution(&self) -> Option<&Substitution> {
        self.substitutions.first()
    }

    /// Match score as a whole percentage.
    pub fn match_percent(&self) -> u8 {
        (self.match_score.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

/// Metadata attached to every normalized response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    /// Always the mode the caller requested
    pub algorithm: AlgorithmMode,
    /// Client-measured wall-clock time, unless the backend supplied one
    pub execution_time_ms: f64,
    /// Derived from the mode
    pub time_complexity: TimeComplexity,
}

/// Normalized suggestion response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Metadata
    pub insights: Insights,
    /// Suggestions, in upstream order
    pub suggestions: Vec<Suggestion>,
}

/// Insights as echoed by the upstream; every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpstreamInsights {
    /// Mode tag echoed back
    #[serde(default)]
    pub algorithm: Option<String>,
    /// Upstream-reported execution time
    #[serde(default)]
    pub execution_time_ms: Option<f64>,
    /// Upstream-reported complexity
    #[serde(default)]
    pub time_complexity: Option<String>,
}

/// Raw response body from either transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamResponse {
    /// Insights block, if the upstream sent one
    #[serde(default)]
    pub insights: Option<UpstreamInsights>,
    /// Suggestions; required
    pub suggestions: Vec<Suggestion>,
}
