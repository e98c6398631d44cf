//! Modes command - list the algorithm modes.

use anyhow::Result;
use clap::Args;
use flavor_core::{catalog, ModeInfo};
use tabled::Tabled;

use crate::output;

/// Arguments for the modes command.
#[derive(Args, Debug)]
pub struct ModesArgs {
    /// Show the long explanation for each mode
    #[arg(short, long)]
    pub detailed: bool,
}

/// Mode information for table display.
#[derive(Debug, Tabled)]
pub struct ModeRow {
    #[tabled(rename = "Mode")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: &'static str,
    #[tabled(rename = "Complexity")]
    pub complexity: &'static str,
    #[tabled(rename = "Description")]
    pub description: &'static str,
}

impl From<&ModeInfo> for ModeRow {
    fn from(info: &ModeInfo) -> Self {
        Self {
            id: info.id.to_string(),
            name: info.name,
            complexity: info.id.time_complexity().as_str(),
            description: info.description,
        }
    }
}

/// Execute the modes command.
pub fn execute(args: &ModesArgs, json: bool) -> Result<()> {
    let modes = catalog::modes();

    if json {
        return output::json(&modes);
    }

    let rows: Vec<ModeRow> = modes.iter().map(ModeRow::from).collect();
    output::table(&rows);

    if args.detailed {
        for info in &modes {
            output::section(info.name);
            println!("  {}", info.details);
        }
    }

    Ok(())
}
