//! Folder models

use serde::{Deserialize, Serialize};

/// Named group of executions inside a cycle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Folder ID as reported by the folder listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_name: Option<String>,

    #[serde(
        default,
        rename = "folderDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
}

impl Folder {
    /// The folder's ID, whichever of `id` / `folderId` the endpoint filled in
    pub fn effective_id(&self) -> Option<i64> {
        self.id.or(self.folder_id)
    }

    /// The folder's name, whichever of `name` / `folderName` the endpoint filled in
    pub fn effective_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.folder_name.as_deref())
    }
}
