//! Execution API trait

use async_trait::async_trait;

use crate::client::models::{Execution, ExecutionStatus};
use crate::error::Result;

/// Test execution operations
#[async_trait]
pub trait ExecutionApi: Send + Sync {
    /// Add an issue to a cycle as a new execution.
    ///
    /// An empty reply from the server yields `Execution::default()`.
    async fn create_execution(&self, execution: &Execution) -> Result<Execution>;

    /// Move an execution to a new status (and optionally reassign it).
    async fn execute(&self, execution_id: i64, status: &ExecutionStatus) -> Result<Execution>;
}
