//! Query filters for list endpoints

/// Project/version scoping for list requests.
///
/// Unset and zero fields are left out of the query string.
///
/// # Example
/// ```
/// use zapi::client::ListFilter;
///
/// let filter = ListFilter::new().project(10000).version(-1);
/// assert_eq!(filter.to_query_params().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub project_id: Option<i64>,
    pub version_id: Option<i64>,
}

/// Filter for cycle listings
pub type CycleListFilter = ListFilter;

/// Filter for folder listings
pub type FolderListFilter = ListFilter;

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a Jira project.
    pub fn project(mut self, project_id: i64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Restrict to a Jira version.
    pub fn version(mut self, version_id: i64) -> Self {
        self.version_id = Some(version_id);
        self
    }

    /// Convert to `(key, value)` query pairs using the API's parameter names.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(project_id) = self.project_id.filter(|&id| id != 0) {
            params.push(("projectId", project_id.to_string()));
        }
        if let Some(version_id) = self.version_id.filter(|&id| id != 0) {
            params.push(("versionId", version_id.to_string()));
        }

        params
    }

    pub fn is_empty(&self) -> bool {
        self.project_id.unwrap_or(0) == 0 && self.version_id.unwrap_or(0) == 0
    }
}
