//! Recipe command - show one recipe from the REST backend.

use anyhow::Result;
use clap::Args;
use flavor_core::Recipe;
use flavor_gateway::SuggestionGateway;

use crate::output;

/// Arguments for the recipe command.
#[derive(Args, Debug)]
pub struct RecipeArgs {
    /// Recipe id, as shown in suggestion output
    pub id: i64,
}

/// Execute the recipe command.
pub async fn execute(args: RecipeArgs, gateway: &SuggestionGateway, json: bool) -> Result<()> {
    let recipe = gateway.fetch_recipe_detail(args.id).await?;

    if json {
        return output::json(&recipe);
    }

    print_recipe(&recipe);
    Ok(())
}

fn print_recipe(recipe: &Recipe) {
    output::section(&recipe.title);
    output::key_value("Id", &recipe.id.to_string());
    output::key_value(
        "Prep time",
        &format!("{} min", recipe.prep_time_minutes.round()),
    );

    if !recipe.ingredients.is_empty() {
        output::section("Ingredients");
        for ingredient in &recipe.ingredients {
            println!("  - {ingredient}");
        }
    }

    output::section("Instructions");
    if recipe.instructions.trim().is_empty() {
        output::warning("No instructions provided");
    } else {
        for line in recipe.instructions.lines() {
            println!("  {line}");
        }
    }
}
