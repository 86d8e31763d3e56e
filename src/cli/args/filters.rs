//! Filter arguments for list commands

use clap::Args;
use zapi::client::ListFilter;

/// Project/version scoping for list commands
#[derive(Debug, Clone, Default, Args)]
pub struct ListFilterArgs {
    /// Jira project ID
    #[arg(long)]
    pub project: Option<i64>,

    /// Jira version ID (-1 for Unscheduled)
    #[arg(long, allow_negative_numbers = true)]
    pub version: Option<i64>,
}

impl ListFilterArgs {
    /// Convert to the client filter, or `None` when nothing is set.
    pub fn to_filter(&self) -> Option<ListFilter> {
        let filter = ListFilter {
            project_id: self.project,
            version_id: self.version,
        };
        if filter.is_empty() { None } else { Some(filter) }
    }
}
