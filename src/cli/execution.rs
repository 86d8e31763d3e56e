//! Execution command implementations

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::models::ExecutionDisplay;
use crate::output::{Formattable, json};
use zapi::client::{Execution, ExecutionApi, ExecutionStatus};
use zapi::error::Result;

/// Fields for a new execution, straight from the command line
#[derive(Debug, Default)]
pub struct NewExecution {
    pub issue_id: i64,
    pub project_id: i64,
    pub cycle_id: i64,
    pub version_id: Option<i64>,
    pub folder_id: Option<i64>,
    pub assignee: Option<String>,
}

impl From<NewExecution> for Execution {
    fn from(new: NewExecution) -> Self {
        Execution {
            issue_id: Some(new.issue_id),
            project_id: Some(new.project_id),
            cycle_id: Some(new.cycle_id),
            version_id: new.version_id,
            folder_id: new.folder_id,
            assigned_to: new.assignee,
            ..Default::default()
        }
    }
}

/// Print a single execution in the selected format
fn print_execution(format: OutputFormat, execution: &Execution) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", json::format_json(execution)?),
        OutputFormat::Table => vec![ExecutionDisplay::from(execution)].print(format)?,
    }
    Ok(())
}

/// Run the execution create command
pub async fn create(opts: &GlobalOptions, new: NewExecution) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let execution = ctx.client.create_execution(&Execution::from(new)).await?;

    if ctx.format == OutputFormat::Table {
        eprintln!(
            "{} Execution created (ID: {})",
            "✓".green(),
            execution.id
        );
    }
    print_execution(ctx.format, &execution)
}

/// Run the execution execute command
pub async fn execute(
    opts: &GlobalOptions,
    id: i64,
    status: String,
    assignee: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let mut request = ExecutionStatus::new(status);
    if let Some(assignee) = assignee {
        request = request.assignee(assignee);
    }

    let execution = ctx.client.execute(id, &request).await?;

    if ctx.format == OutputFormat::Table {
        eprintln!(
            "{} Execution {} set to status {}",
            "✓".green(),
            id,
            request.status.bold()
        );
    }
    print_execution(ctx.format, &execution)
}
