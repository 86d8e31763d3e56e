//! Execution models

use serde::{Deserialize, Serialize};

/// A single test execution: one issue run inside a cycle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    /// Execution ID (0 until the server assigns one)
    #[serde(default, deserialize_with = "super::deserialize_null_as_default")]
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Username of the assignee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_name: Option<String>,

    /// Status code as a string. Statuses are configurable per Jira instance,
    /// so this stays free-form ("-1" unexecuted, "1" pass, "2" fail, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_name: Option<String>,

    /// Jira issue (test case) ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
}

/// Body of an execute (status transition) request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionStatus {
    /// Target status code, e.g. "1" for pass
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

impl ExecutionStatus {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            assignee: None,
        }
    }

    /// Reassign the execution as part of the transition
    pub fn assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }
}
