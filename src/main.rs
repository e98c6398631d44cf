//! # FlavorGraph
//!
//! Recipe suggestions from the ingredients you have, served by a REST
//! backend or a Gemini model.
//!
//! ## Usage
//!
//! ```bash
//! # Suggest recipes for garlic and tomato using the fast mode
//! GEMINI_API_KEY=... flavorgraph suggest -i 2 -i 4
//!
//! # Use a local backend with an extra ingredient
//! FLAVORGRAPH_API_BASE_URL=http://localhost:8000 flavorgraph suggest -i 3 --add Paneer -m backtracking
//!
//! # Show one recipe from the backend
//! flavorgraph recipe 12
//! ```

use clap::Parser;
use flavor_telemetry::{init_logging, LoggingConfig};
use std::process::ExitCode;

mod cli;
mod commands;
mod output;

use cli::Cli;
use output::{CommandResult, OutputFormat};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let format = OutputFormat::from_json_flag(cli.json);

    let logging = LoggingConfig::from_verbosity(cli.verbose).with_json(cli.json);
    if let Err(e) = init_logging(&logging) {
        eprintln!("{e}");
    }

    match cli.execute().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Printing can only fail on a broken stdout; nothing left to report to.
            let _ = CommandResult::<()>::from_error(&e).print(format);
            ExitCode::FAILURE
        }
    }
}
