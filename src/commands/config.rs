//! Config command - inspect and create configuration.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use flavor_config::{FlavorConfig, TransportSettings};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::output::{self, CommandResult, OutputFormat};

/// Sample configuration written by `config init`.
const SAMPLE_CONFIG: &str = r#"# FlavorGraph configuration.
# Environment variables of the same name in upper case with a FLAVORGRAPH_
# prefix override these values (GEMINI_API_KEY for the credential).

# Gemini credential. Prefer the GEMINI_API_KEY environment variable.
# gemini_api_key = ""

# Use the REST backend even when a credential is set.
use_backend = false

# REST backend base URL. Setting this selects the backend.
# api_base_url = "http://localhost:8000"

# Backend request shape: "names" (/api/suggestions/) or "ids" (/api/suggest/).
backend_protocol = "names"

gemini_model = "gemini-1.5-pro"
gemini_base_url = "https://generativelanguage.googleapis.com/v1beta"

# HTTP timeout; unset means no timeout.
# timeout = "30s"
"#;

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration and the selected transport
    Show,

    /// Generate a sample configuration file
    Init(InitArgs),
}

/// Arguments for config init.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "flavorgraph.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

/// Effective configuration for JSON output.
#[derive(Debug, Serialize)]
pub struct ConfigReport {
    pub settings: BTreeMap<&'static str, String>,
    pub transport: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, path: Option<&Path>, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);

    match args.command {
        ConfigCommand::Show => show(path, format),
        ConfigCommand::Init(init) => write_sample(&init, format),
    }
}

fn show(path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = FlavorConfig::load(path).context("Failed to load configuration")?;
    let selection = config.transport();

    if format == OutputFormat::Json {
        let report = ConfigReport {
            settings: config.summary().into_iter().collect(),
            transport: selection.as_ref().ok().map(|s| s.kind().as_str()),
            problem: selection.as_ref().err().map(ToString::to_string),
        };
        return CommandResult::success(report).print(format);
    }

    output::section("Settings");
    for (key, value) in config.summary() {
        output::key_value(key, &value);
    }

    output::section("Transport");
    match selection {
        Ok(TransportSettings::Backend(backend)) => output::success(&format!(
            "REST backend at {} ({} protocol)",
            backend.base_url, backend.protocol
        )),
        Ok(TransportSettings::Model(model)) => {
            output::success(&format!("Gemini model {}", model.model));
        }
        Err(e) => output::warning(&e.to_string()),
    }

    Ok(())
}

fn write_sample(args: &InitArgs, format: OutputFormat) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!(
            "{} already exists; pass --force to overwrite",
            args.output.display()
        );
    }

    std::fs::write(&args.output, SAMPLE_CONFIG)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    CommandResult::<()>::success_message(format!(
        "Wrote sample configuration to {}",
        args.output.display()
    ))
    .print(format)
}
