//! Folder display model

use serde::Serialize;
use tabled::Tabled;

use crate::output::table::cell;
use zapi::client::Folder;

/// Folder row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct FolderDisplay {
    #[tabled(rename = "FOLDER ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "CYCLE")]
    pub cycle: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl From<&Folder> for FolderDisplay {
    fn from(folder: &Folder) -> Self {
        let cycle = folder
            .cycle_name
            .clone()
            .or_else(|| folder.cycle_id.map(|id| id.to_string()));

        Self {
            id: cell(folder.effective_id()),
            name: cell(folder.effective_name()),
            cycle: cell(cycle),
            description: cell(folder.description.as_deref()),
        }
    }
}

impl From<Folder> for FolderDisplay {
    fn from(folder: Folder) -> Self {
        Self::from(&folder)
    }
}
