//! Test fixtures and builders for API model types
//!
//! Response bodies are shared with the integration tests under
//! `tests/fixtures/`. Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use super::models::{Cycle, Execution, Folder};

// ============================================================================
// Response bodies
// ============================================================================

/// Two cycles keyed by ID ("-1" and "54") plus a `recordsCount` entry
pub const ALL_CYCLES: &str = include_str!("../../tests/fixtures/all_cycles.json");

/// Cycle listing with only metadata
pub const NO_CYCLE: &str = include_str!("../../tests/fixtures/no_cycle.json");

/// Cycle listing whose single cycle has a mistyped field
pub const ERROR_CYCLES: &str = include_str!("../../tests/fixtures/error_cycles.json");

/// Create-cycle reply with string ID "54"
pub const CYCLE_CREATE: &str = include_str!("../../tests/fixtures/cycle_create.json");

/// Create-execution reply keyed by execution 13377
pub const EXECUTION_CREATE: &str = include_str!("../../tests/fixtures/execution_create.json");

/// Execution 13377 after a transition to status "-1"
pub const EXECUTION_EXECUTE: &str = include_str!("../../tests/fixtures/execution_execute.json");

/// Two folders of cycle 54
pub const ALL_FOLDERS: &str = include_str!("../../tests/fixtures/all_folders.json");

/// Empty folder listing
pub const NO_FOLDER: &str = include_str!("../../tests/fixtures/no_folder.json");

/// Folder 9 as returned by folder creation
pub const FOLDER_CREATE: &str = include_str!("../../tests/fixtures/folder_create.json");

/// ZAPI error body
pub const ERROR_BODY: &str = include_str!("../../tests/fixtures/error_body.json");

// ============================================================================
// CycleBuilder
// ============================================================================

/// Builder for creating test Cycle instances.
///
/// # Example
/// ```ignore
/// let cycle = CycleBuilder::new("Sprint 12")
///     .project(10000)
///     .version(-1)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct CycleBuilder {
    cycle: Cycle,
}

impl CycleBuilder {
    /// Create a new builder with the given cycle name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            cycle: Cycle {
                name: Some(name.into()),
                ..Default::default()
            },
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.cycle.id = Some(id);
        self
    }

    pub fn project(mut self, project_id: i64) -> Self {
        self.cycle.project_id = Some(project_id);
        self
    }

    pub fn version(mut self, version_id: i64) -> Self {
        self.cycle.version_id = Some(version_id);
        self
    }

    pub fn dates(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.cycle.start_date = Some(start.into());
        self.cycle.end_date = Some(end.into());
        self
    }

    pub fn build(self) -> Cycle {
        self.cycle
    }
}

// ============================================================================
// ExecutionBuilder
// ============================================================================

/// Builder for creating test Execution instances.
#[derive(Debug, Clone, Default)]
pub struct ExecutionBuilder {
    execution: Execution,
}

impl ExecutionBuilder {
    /// Start an execution of `issue_id` in `cycle_id`.
    pub fn new(issue_id: i64, cycle_id: i64) -> Self {
        Self {
            execution: Execution {
                issue_id: Some(issue_id),
                cycle_id: Some(cycle_id),
                ..Default::default()
            },
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.execution.id = id;
        self
    }

    pub fn project(mut self, project_id: i64) -> Self {
        self.execution.project_id = Some(project_id);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.execution.execution_status = Some(status.into());
        self
    }

    pub fn assigned_to(mut self, user: impl Into<String>) -> Self {
        self.execution.assigned_to = Some(user.into());
        self
    }

    pub fn build(self) -> Execution {
        self.execution
    }
}

// ============================================================================
// FolderBuilder
// ============================================================================

/// Builder for creating test Folder instances.
#[derive(Debug, Clone)]
pub struct FolderBuilder {
    folder: Folder,
}

impl FolderBuilder {
    /// Start a folder named `name` in `cycle_id`.
    pub fn new(name: impl Into<String>, cycle_id: i64) -> Self {
        Self {
            folder: Folder {
                name: Some(name.into()),
                cycle_id: Some(cycle_id),
                ..Default::default()
            },
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.folder.id = Some(id);
        self
    }

    pub fn project(mut self, project_id: i64) -> Self {
        self.folder.project_id = Some(project_id);
        self
    }

    pub fn version(mut self, version_id: i64) -> Self {
        self.folder.version_id = Some(version_id);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.folder.description = Some(description.into());
        self
    }

    pub fn build(self) -> Folder {
        self.folder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_bodies_are_valid_json() {
        for body in [
            ALL_CYCLES,
            NO_CYCLE,
            ERROR_CYCLES,
            CYCLE_CREATE,
            EXECUTION_CREATE,
            EXECUTION_EXECUTE,
            ALL_FOLDERS,
            NO_FOLDER,
            FOLDER_CREATE,
            ERROR_BODY,
        ] {
            serde_json::from_str::<serde_json::Value>(body).expect("fixture should be JSON");
        }
    }

    #[test]
    fn test_cycle_builder() {
        let cycle = CycleBuilder::new("Sprint 12")
            .id(54)
            .project(10000)
            .version(-1)
            .dates("12/Mar/19", "29/Mar/19")
            .build();

        assert_eq!(cycle.id, Some(54));
        assert_eq!(cycle.name.as_deref(), Some("Sprint 12"));
        assert_eq!(cycle.end_date.as_deref(), Some("29/Mar/19"));
    }

    #[test]
    fn test_execution_builder() {
        let exe = ExecutionBuilder::new(10100, 54).status("1").build();
        assert_eq!(exe.id, 0);
        assert_eq!(exe.issue_id, Some(10100));
        assert_eq!(exe.execution_status.as_deref(), Some("1"));
    }

    #[test]
    fn test_folder_builder() {
        let folder = FolderBuilder::new("Smoke", 54).version(-1).build();
        assert_eq!(folder.cycle_id, Some(54));
        assert_eq!(folder.version_id, Some(-1));
    }
}
