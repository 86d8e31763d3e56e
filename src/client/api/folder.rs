//! Folder API trait

use async_trait::async_trait;

use crate::client::models::{Folder, FolderListFilter};
use crate::error::Result;

/// Folder operations
#[async_trait]
pub trait FolderApi: Send + Sync {
    /// List the folders of a cycle.
    async fn list_folders(
        &self,
        cycle_id: i64,
        filter: Option<&FolderListFilter>,
    ) -> Result<Vec<Folder>>;

    /// Create a folder inside a cycle.
    async fn create_folder(&self, folder: &Folder) -> Result<Folder>;
}
