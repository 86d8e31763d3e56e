//! Cycle models

use serde::{Deserialize, Serialize};

/// Test cycle resource
///
/// The list endpoint leaves `id` out of the cycle body and only carries it
/// as the surrounding object key; the client fills it back in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cycle {
    /// Cycle ID (assigned by the server)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Cycle name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Build identifier the cycle runs against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,

    /// Start date as sent by the server (e.g. "12/Mar/19"), never parsed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// End date as sent by the server, never parsed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_display: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_order_id: Option<i64>,

    /// Jira project ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_key: Option<String>,

    /// Jira version ID (-1 is the "Unscheduled" version)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,

    // Aggregate counters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_executions: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_executed: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cycle_executions: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_defects: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_folders: Option<i64>,

    /// Execution counts per status (present when the cycle is expanded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_summaries: Option<ExecutionSummaries>,
}

/// Wrapper object the API nests execution summaries in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionSummaries {
    #[serde(default, deserialize_with = "super::deserialize_null_as_default")]
    pub execution_summary: Vec<ExecutionSummary>,
}

/// Number of executions in one status
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionSummary {
    #[serde(default, deserialize_with = "super::deserialize_null_as_default")]
    pub count: i64,

    /// Numeric status code (-1 unexecuted, 1 pass, 2 fail, ...)
    #[serde(default, deserialize_with = "super::deserialize_null_as_default")]
    pub status_key: i64,

    #[serde(default, deserialize_with = "super::deserialize_null_as_default")]
    pub status_name: String,

    /// Display color, e.g. "#75B000"
    #[serde(default, deserialize_with = "super::deserialize_null_as_default")]
    pub status_color: String,
}

/// Reply from the create-cycle endpoint
///
/// The server sends `id` as a JSON string here while every other endpoint
/// uses integers. Kept as a string; see [`CycleCreateReply::parsed_id`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleCreateReply {
    #[serde(default, deserialize_with = "super::deserialize_null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "super::deserialize_null_as_default")]
    pub response_message: String,
}

impl CycleCreateReply {
    /// The new cycle ID as an integer, if the server sent a numeric string
    pub fn parsed_id(&self) -> Option<i64> {
        self.id.trim().parse().ok()
    }
}

impl Cycle {
    /// Total of all per-status execution counts
    pub fn summarized_executions(&self) -> i64 {
        self.execution_summaries
            .as_ref()
            .map(|s| s.execution_summary.iter().map(|e| e.count).sum())
            .unwrap_or(0)
    }
}
