//! Ingredient and mode types.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// An ingredient the user can select.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ingredient {
    /// Identifier, unique within a session
    pub id: i64,
    /// Display name
    pub name: String,
}

impl Ingredient {
    /// Create an ingredient with a known id
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Create a user-added ingredient.
    ///
    /// The id is the current Unix time in milliseconds. Two ingredients added
    /// in the same millisecond collide; that is accepted.
    pub fn custom(name: impl Into<String>) -> Self {
        Self::new(Utc::now().timestamp_millis(), name)
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Algorithm mode tag.
///
/// The tag is forwarded to the upstream as-is; nothing in this workspace
/// implements the named algorithm. Unknown tags are preserved verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlgorithmMode {
    /// Exhaustive search
    Backtracking,
    /// Ingredient relationship graphs
    Graph,
    /// Fast search, at most three suggestions
    #[default]
    Greedy,
    /// "Masala Master"
    MasalaMaster,
    /// "Tadka Technique"
    TadkaTechnique,
    /// "Spice Synergy"
    SpiceSynergy,
    /// Any other tag
    Other(String),
}

impl AlgorithmMode {
    /// The wire tag
    pub fn as_str(&self) -> &str {
        match self {
            Self::Backtracking => "backtracking",
            Self::Graph => "graph",
            Self::Greedy => "greedy",
            Self::MasalaMaster => "masalaMaster",
            Self::TadkaTechnique => "tadkaTechnique",
            Self::SpiceSynergy => "spiceSynergy",
            Self::Other(tag) => tag,
        }
    }

    /// Complexity label reported for this mode.
    pub fn time_complexity(&self) -> TimeComplexity {
        match self {
            Self::Backtracking => TimeComplexity::Exponential,
            _ => TimeComplexity::Polynomial,
        }
    }

    /// Whether suggestions are capped for this mode.
    pub fn is_fast(&self) -> bool {
        matches!(self, Self::Greedy)
    }
}

impl From<&str> for AlgorithmMode {
    fn from(tag: &str) -> Self {
        match tag {
            "backtracking" => Self::Backtracking,
            "graph" => Self::Graph,
            "greedy" => Self::Greedy,
            "masalaMaster" => Self::MasalaMaster,
            "tadkaTechnique" => Self::TadkaTechnique,
            "spiceSynergy" => Self::SpiceSynergy,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for AlgorithmMode {
    fn from(tag: String) -> Self {
        match Self::from(tag.as_str()) {
            Self::Other(_) => Self::Other(tag),
            known => known,
        }
    }
}

impl From<AlgorithmMode> for String {
    fn from(mode: AlgorithmMode) -> Self {
        match mode {
            AlgorithmMode::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for AlgorithmMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for AlgorithmMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two complexity labels attached to every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeComplexity {
    /// Exhaustive modes
    #[serde(rename = "O(2^n)")]
    Exponential,
    /// Every other mode
    #[serde(rename = "O(n*m)")]
    Polynomial,
}

impl TimeComplexity {
    /// The label as shown to users
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exponential => "O(2^n)",
            Self::Polynomial => "O(n*m)",
        }
    }
}

impl fmt::Display for TimeComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
