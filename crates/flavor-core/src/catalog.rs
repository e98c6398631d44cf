//! Static catalogs: the selectable modes and the starter ingredient list.

use crate::types::{AlgorithmMode, Ingredient};
use serde::Serialize;

/// Describes one selectable mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeInfo {
    /// Mode tag
    pub id: AlgorithmMode,
    /// Display name
    pub name: &'static str,
    /// One-paragraph description
    pub description: &'static str,
    /// Longer explanation shown next to results
    pub details: &'static str,
}

/// The modes offered to users, in display order.
pub fn modes() -> Vec<ModeInfo> {
    vec![
        ModeInfo {
            id: AlgorithmMode::Backtracking,
            name: "Exhaustive Search",
            description: "Uses backtracking to find optimal recipe matches by exploring all \
                possibilities. Provides the most thorough results but may take longer to \
                execute. Complexity: O(2^n).",
            details: "Backtracking: Finds optimal recipe matches by exploring all \
                possibilities, ensuring you get the best possible combinations of ingredients.",
        },
        ModeInfo {
            id: AlgorithmMode::Graph,
            name: "Graph Theory",
            description: "Uses ingredient relationship graphs to find common and complementary \
                ingredient combinations. Balances accuracy and speed.",
            details: "Graph theory: Uses ingredient relationship graphs to find common \
                combinations, identifying patterns in successful recipes.",
        },
        ModeInfo {
            id: AlgorithmMode::Greedy,
            name: "Fast Search",
            description: "Quick matching with ingredient substitution suggestions. Ideal for \
                when you need instant results. Complexity: O(n*m).",
            details: "Greedy Algorithm: Quick matching with ingredient substitution \
                suggestions, perfect for rapid recipe exploration.",
        },
    ]
}

/// Look up a mode description by tag.
pub fn mode_info(mode: &AlgorithmMode) -> Option<ModeInfo> {
    modes().into_iter().find(|info| &info.id == mode)
}

/// Ingredients every session starts with.
pub fn starter_ingredients() -> Vec<Ingredient> {
    [
        "Chicken Breast",
        "Garlic",
        "Onion",
        "Tomato",
        "Pasta",
        "Olive Oil",
        "Bell Pepper",
        "Rice",
        "Black Beans",
        "Cheese",
        "Lettuce",
        "Ground Beef",
        "Potatoes",
        "Carrots",
        "Eggs",
        "Flour",
        "Sugar",
        "Butter",
    ]
    .into_iter()
    .zip(1..)
    .map(|(name, id)| Ingredient::new(id, name))
    .collect()
}
