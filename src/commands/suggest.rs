//! Suggest command - fetch recipe suggestions for selected ingredients.

use anyhow::{bail, Result};
use clap::Args;
use flavor_core::{catalog, AlgorithmMode, ApiResponse, Ingredient, Suggestion};
use flavor_gateway::SuggestionGateway;
use tabled::Tabled;
use tracing::debug;

use crate::output;

/// Arguments for the suggest command.
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Starter ingredient id to use (repeatable; see `flavorgraph ingredients`)
    #[arg(short, long = "ingredient", value_name = "ID")]
    pub ingredients: Vec<i64>,

    /// Add and select an ingredient that is not in the starter list (repeatable)
    #[arg(short, long = "add", value_name = "NAME")]
    pub add: Vec<String>,

    /// Algorithm mode: greedy, graph, backtracking, or any custom tag
    #[arg(short, long, default_value = "greedy")]
    pub mode: AlgorithmMode,
}

/// One suggestion for table display.
#[derive(Debug, Tabled)]
pub struct SuggestionRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    #[tabled(rename = "Recipe")]
    pub title: String,
    #[tabled(rename = "Match")]
    pub matched: String,
    #[tabled(rename = "Prep")]
    pub prep: String,
    #[tabled(rename = "Missing")]
    pub missing: String,
    #[tabled(rename = "Substitute")]
    pub substitute: String,
}

impl SuggestionRow {
    fn new(rank: usize, suggestion: &Suggestion, known: &[Ingredient]) -> Self {
        let missing = if suggestion.missing_ingredients.is_empty() {
            "-".to_string()
        } else {
            suggestion
                .missing_ingredients
                .iter()
                .map(|i| i.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        // Only the first substitution is shown.
        let substitute = suggestion.primary_substitution().map_or_else(
            || "-".to_string(),
            |sub| {
                let original = sub.original_ingredient_id.and_then(|id| {
                    suggestion
                        .missing_ingredients
                        .iter()
                        .chain(known)
                        .find(|i| i.id == id)
                        .map(|i| i.name.clone())
                });
                match original {
                    Some(original) => format!("{} for {original}", sub.substitute_ingredient_name),
                    None => sub.substitute_ingredient_name.clone(),
                }
            },
        );

        Self {
            rank,
            title: suggestion.recipe.title.clone(),
            matched: format!("{}%", suggestion.match_percent()),
            prep: format!("{} min", suggestion.recipe.prep_time_minutes.round()),
            missing,
            substitute,
        }
    }
}

/// Build the working ingredient list and the selected ids.
///
/// Added names that match a starter ingredient (ignoring case) select it
/// instead of creating a duplicate.
pub fn selection(ids: &[i64], added: &[String]) -> (Vec<Ingredient>, Vec<i64>) {
    let mut known = catalog::starter_ingredients();
    let mut selected = ids.to_vec();

    for name in added.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
        if let Some(existing) = known.iter().find(|i| i.name.eq_ignore_ascii_case(name)) {
            debug!(name, id = existing.id, "Added ingredient already known");
            selected.push(existing.id);
        } else {
            let ingredient = Ingredient::custom(name);
            selected.push(ingredient.id);
            known.push(ingredient);
        }
    }

    (known, selected)
}

/// Execute the suggest command.
pub async fn execute(args: SuggestArgs, gateway: &SuggestionGateway, json: bool) -> Result<()> {
    let (known, selected) = selection(&args.ingredients, &args.add);
    if selected.is_empty() {
        bail!("Select at least one ingredient with --ingredient <ID> or --add <NAME>");
    }

    if json {
        let response = gateway
            .request_suggestions(&selected, &args.mode, &known)
            .await?;
        return output::json(&response);
    }

    let spinner = output::spinner(&format!("Finding recipes ({})...", args.mode));
    let result = gateway
        .request_suggestions(&selected, &args.mode, &known)
        .await;
    spinner.finish_and_clear();

    print_response(&result?, &known, gateway);
    Ok(())
}

fn print_response(response: &ApiResponse, known: &[Ingredient], gateway: &SuggestionGateway) {
    let insights = &response.insights;
    let mode = catalog::mode_info(&insights.algorithm);

    output::section("Insights");
    output::key_value(
        "Mode",
        &mode.as_ref().map_or_else(
            || insights.algorithm.to_string(),
            |info| format!("{} ({})", info.name, insights.algorithm),
        ),
    );
    output::key_value("Time complexity", insights.time_complexity.as_str());
    output::key_value("Execution time", &output::format_millis(insights.execution_time_ms));
    output::key_value("Source", gateway.kind().as_str());

    output::section("Suggestions");
    if response.suggestions.is_empty() {
        output::warning("No recipes matched the selected ingredients");
    } else {
        let rows: Vec<SuggestionRow> = response
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, s)| SuggestionRow::new(i + 1, s, known))
            .collect();
        output::table(&rows);
    }

    if let Some(info) = mode {
        println!();
        output::info(info.details);
    }
}
