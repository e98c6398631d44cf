//! CLI argument definitions using clap.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flavor_config::FlavorConfig;
use flavor_gateway::SuggestionGateway;
use std::path::PathBuf;

use crate::commands;

/// FlavorGraph - recipe suggestions from the ingredients you have
#[derive(Parser, Debug)]
#[command(name = "flavorgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// TOML configuration file; environment variables override it
    #[arg(short, long, env = "FLAVORGRAPH_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Suggest recipes for a set of ingredients
    Suggest(commands::suggest::SuggestArgs),

    /// Show one recipe from the REST backend
    Recipe(commands::recipe::RecipeArgs),

    /// List the algorithm modes
    Modes(commands::modes::ModesArgs),

    /// List the starter ingredients
    Ingredients(commands::ingredients::IngredientsArgs),

    /// Inspect or create configuration
    Config(commands::config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command.
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Suggest(args) => {
                let gateway = gateway(self.config.as_deref())?;
                commands::suggest::execute(args, &gateway, self.json).await
            }
            Commands::Recipe(args) => {
                let gateway = gateway(self.config.as_deref())?;
                commands::recipe::execute(args, &gateway, self.json).await
            }
            Commands::Modes(args) => commands::modes::execute(&args, self.json),
            Commands::Ingredients(args) => commands::ingredients::execute(&args, self.json),
            Commands::Config(args) => {
                commands::config::execute(args, self.config.as_deref(), self.json)
            }
        }
    }
}

/// Load configuration and build the gateway; fails fast on bad settings.
fn gateway(path: Option<&std::path::Path>) -> Result<SuggestionGateway> {
    let config = FlavorConfig::load(path).context("Failed to load configuration")?;
    SuggestionGateway::from_config(&config).context("Invalid configuration")
}
