//! Cycle API trait

use async_trait::async_trait;

use crate::client::models::{Cycle, CycleCreateReply, CycleListFilter};
use crate::error::Result;

/// Test cycle operations
#[async_trait]
pub trait CycleApi: Send + Sync {
    /// List the cycles of a project/version.
    ///
    /// Every returned cycle has its `id` set. Order is unspecified. A project
    /// without cycles yields an empty vector.
    async fn list_cycles(&self, filter: Option<&CycleListFilter>) -> Result<Vec<Cycle>>;

    /// Create a cycle.
    ///
    /// The reply carries the new ID as a string, exactly as the server sends it.
    async fn create_cycle(&self, cycle: &Cycle) -> Result<CycleCreateReply>;
}
