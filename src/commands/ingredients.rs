//! Ingredients command - list the starter ingredients.

use anyhow::Result;
use clap::Args;
use flavor_core::{catalog, Ingredient};
use tabled::Tabled;

use crate::output;

/// Arguments for the ingredients command.
#[derive(Args, Debug)]
pub struct IngredientsArgs {
    /// Only show ingredients whose name contains this text
    #[arg(short, long)]
    pub filter: Option<String>,
}

/// Ingredient for table display.
#[derive(Debug, Tabled)]
pub struct IngredientRow {
    #[tabled(rename = "Id")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
}

/// Starter ingredients matching an optional case-insensitive filter.
pub fn filtered(filter: Option<&str>) -> Vec<Ingredient> {
    let mut ingredients = catalog::starter_ingredients();
    if let Some(filter) = filter {
        let filter = filter.to_lowercase();
        ingredients.retain(|i| i.name.to_lowercase().contains(&filter));
    }
    ingredients
}

/// Execute the ingredients command.
pub fn execute(args: &IngredientsArgs, json: bool) -> Result<()> {
    let ingredients = filtered(args.filter.as_deref());

    if json {
        return output::json(&ingredients);
    }

    if ingredients.is_empty() {
        output::warning("No ingredients match the filter");
        return Ok(());
    }

    let rows: Vec<IngredientRow> = ingredients
        .into_iter()
        .map(|i| IngredientRow {
            id: i.id,
            name: i.name,
        })
        .collect();
    output::table(&rows);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_is_case_insensitive() {
        let found = filtered(Some("PEPPER"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Bell Pepper");
    }

    #[test]
    fn test_no_filter_returns_all() {
        assert_eq!(filtered(None).len(), catalog::starter_ingredients().len());
    }
}
