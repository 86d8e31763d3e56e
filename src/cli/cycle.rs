//! Cycle command implementations

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, ListFilterArgs, OutputFormat};
use crate::models::CycleDisplay;
use crate::output::{Formattable, json};
use zapi::client::{Cycle, CycleApi};
use zapi::error::Result;

/// Fields for a new cycle, straight from the command line
#[derive(Debug, Default)]
pub struct NewCycle {
    pub name: String,
    pub project_id: i64,
    pub version_id: i64,
    pub description: Option<String>,
    pub build: Option<String>,
    pub environment: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl From<NewCycle> for Cycle {
    fn from(new: NewCycle) -> Self {
        Cycle {
            name: Some(new.name),
            project_id: Some(new.project_id),
            version_id: Some(new.version_id),
            description: new.description,
            build: new.build,
            environment: new.environment,
            start_date: new.start_date,
            end_date: new.end_date,
            ..Default::default()
        }
    }
}

/// Run the cycle list command
pub async fn list(opts: &GlobalOptions, filter: &ListFilterArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let mut cycles = ctx.client.list_cycles(filter.to_filter().as_ref()).await?;
    // Server order follows object keys, which is not stable
    cycles.sort_by_key(|c| c.id);

    debug!("Fetched {} cycles from {}", cycles.len(), ctx.base_url());

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<CycleDisplay> = cycles.iter().map(CycleDisplay::from).collect();
            rows.print(ctx.format)?;
        }
        OutputFormat::Json => println!("{}", json::format_json(&cycles)?),
    }

    Ok(())
}

/// Run the cycle create command
pub async fn create(opts: &GlobalOptions, new: NewCycle) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let name = new.name.clone();
    let reply = ctx.client.create_cycle(&Cycle::from(new)).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&reply)?),
        OutputFormat::Table => {
            eprintln!(
                "{} Cycle \"{}\" created (ID: {})",
                "✓".green(),
                name,
                reply.id
            );
            if !reply.response_message.is_empty() {
                eprintln!("  {}", reply.response_message.dimmed());
            }
            eprintln!("→ Add a folder: zapi folder create --cycle {} ...", reply.id);
        }
    }

    Ok(())
}
