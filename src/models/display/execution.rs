//! Execution display model

use serde::Serialize;
use tabled::Tabled;

use crate::output::table::cell;
use zapi::client::Execution;

/// Execution row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ExecutionDisplay {
    #[tabled(rename = "EXECUTION ID")]
    pub id: String,

    #[tabled(rename = "ISSUE")]
    pub issue: String,

    #[tabled(rename = "CYCLE")]
    pub cycle: String,

    #[tabled(rename = "FOLDER")]
    pub folder: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "ASSIGNEE")]
    pub assignee: String,
}

impl From<&Execution> for ExecutionDisplay {
    fn from(exe: &Execution) -> Self {
        let issue = exe
            .issue_key
            .clone()
            .or_else(|| exe.issue_id.map(|id| id.to_string()));
        let cycle = exe
            .cycle_name
            .clone()
            .or_else(|| exe.cycle_id.map(|id| id.to_string()));
        let folder = exe
            .folder_name
            .clone()
            .or_else(|| exe.folder_id.map(|id| id.to_string()));

        Self {
            id: exe.id.to_string(),
            issue: cell(issue),
            cycle: cell(cycle),
            folder: cell(folder),
            status: cell(exe.execution_status.as_deref()),
            assignee: cell(exe.assigned_to.as_deref()),
        }
    }
}

impl From<Execution> for ExecutionDisplay {
    fn from(exe: Execution) -> Self {
        Self::from(&exe)
    }
}
