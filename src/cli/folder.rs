//! Folder command implementations

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, ListFilterArgs, OutputFormat};
use crate::models::FolderDisplay;
use crate::output::{Formattable, json};
use zapi::client::{Folder, FolderApi};
use zapi::error::Result;

/// Fields for a new folder, straight from the command line
#[derive(Debug, Default)]
pub struct NewFolder {
    pub name: String,
    pub cycle_id: i64,
    pub project_id: i64,
    pub version_id: i64,
    pub description: Option<String>,
}

impl From<NewFolder> for Folder {
    fn from(new: NewFolder) -> Self {
        Folder {
            name: Some(new.name),
            cycle_id: Some(new.cycle_id),
            project_id: Some(new.project_id),
            version_id: Some(new.version_id),
            description: new.description,
            ..Default::default()
        }
    }
}

/// Run the folder list command
pub async fn list(opts: &GlobalOptions, cycle_id: i64, filter: &ListFilterArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let folders = ctx
        .client
        .list_folders(cycle_id, filter.to_filter().as_ref())
        .await?;

    debug!(
        "Fetched {} folders for cycle {} from {}",
        folders.len(),
        cycle_id,
        ctx.base_url()
    );

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<FolderDisplay> = folders.iter().map(FolderDisplay::from).collect();
            rows.print(ctx.format)?;
        }
        OutputFormat::Json => println!("{}", json::format_json(&folders)?),
    }

    Ok(())
}

/// Run the folder create command
pub async fn create(opts: &GlobalOptions, new: NewFolder) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let name = new.name.clone();
    let folder = ctx.client.create_folder(&Folder::from(new)).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&folder)?),
        OutputFormat::Table => {
            let id = folder
                .effective_id()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            eprintln!("{} Folder \"{}\" created (ID: {})", "✓".green(), name, id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_folder_into_folder() {
        let folder = Folder::from(NewFolder {
            name: "Payments".to_string(),
            cycle_id: 54,
            project_id: 10000,
            version_id: -1,
            description: None,
        });

        assert_eq!(folder.effective_id(), None);
        assert_eq!(folder.name.as_deref(), Some("Payments"));
        assert_eq!(folder.cycle_id, Some(54));
        assert_eq!(folder.version_id, Some(-1));
    }
}
