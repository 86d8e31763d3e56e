//! Cycle display model

use serde::Serialize;
use tabled::Tabled;

use crate::output::table::cell;
use zapi::client::Cycle;

/// Cycle row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CycleDisplay {
    #[tabled(rename = "CYCLE ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "VERSION")]
    pub version: String,

    #[tabled(rename = "BUILD")]
    pub build: String,

    #[tabled(rename = "ENVIRONMENT")]
    pub environment: String,

    /// Start and end date, as sent by the server
    #[tabled(rename = "DATES")]
    pub dates: String,

    #[tabled(rename = "EXECUTIONS")]
    pub executions: String,

    #[tabled(rename = "DEFECTS")]
    pub defects: String,
}

impl From<&Cycle> for CycleDisplay {
    fn from(cycle: &Cycle) -> Self {
        let version = cycle
            .version_name
            .clone()
            .or_else(|| cycle.version_id.map(|id| id.to_string()));

        let dates = match (cycle.start_date.as_deref(), cycle.end_date.as_deref()) {
            (None, None) => cell::<&str>(None),
            (start, end) => format!("{} → {}", cell(start), cell(end)),
        };

        // Prefer the server's own total, fall back to the status breakdown
        let executions = cycle
            .total_executions
            .or_else(|| cycle.execution_summaries.as_ref().map(|_| cycle.summarized_executions()));

        Self {
            id: cell(cycle.id),
            name: cell(cycle.name.as_deref()),
            version: cell(version),
            build: cell(cycle.build.as_deref()),
            environment: cell(cycle.environment.as_deref()),
            dates,
            executions: cell(executions),
            defects: cell(cycle.total_defects),
        }
    }
}

impl From<Cycle> for CycleDisplay {
    fn from(cycle: Cycle) -> Self {
        Self::from(&cycle)
    }
}
