//! Endpoint path templates
//!
//! Every path the client requests comes from an [`Endpoints`] value handed to
//! the client at construction, so deployments with a different REST prefix
//! (or tests that need a broken path) only swap the table.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Placeholder substituted with a numeric ID in templated paths
pub const ID_PLACEHOLDER: &str = "{id}";

/// Default REST prefix of the ZAPI plugin
pub const DEFAULT_PREFIX: &str = "/rest/zapi/latest";

/// Path templates for every ZAPI endpoint the client talks to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Cycle collection (GET list, POST create)
    pub cycle: String,

    /// Execution collection (POST create)
    pub execution: String,

    /// Status transition of one execution, templated on the execution ID
    pub execute: String,

    /// Folders of one cycle, templated on the cycle ID
    pub cycle_folders: String,

    /// Folder creation
    pub folder_create: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }
}

impl Endpoints {
    /// Build the standard endpoint table under a custom REST prefix.
    pub fn with_prefix(prefix: &str) -> Self {
        let prefix = prefix.trim_end_matches('/');
        Self {
            cycle: format!("{prefix}/cycle"),
            execution: format!("{prefix}/execution"),
            execute: format!("{prefix}/execution/{ID_PLACEHOLDER}/execute"),
            cycle_folders: format!("{prefix}/cycle/{ID_PLACEHOLDER}/folders"),
            folder_create: format!("{prefix}/folder/create"),
        }
    }

    /// Path of the execute endpoint for one execution
    pub fn execute_path(&self, execution_id: i64) -> String {
        render(&self.execute, execution_id)
    }

    /// Path of the folder listing for one cycle
    pub fn cycle_folders_path(&self, cycle_id: i64) -> String {
        render(&self.cycle_folders, cycle_id)
    }

    /// Check that ID-scoped templates carry the `{id}` placeholder.
    ///
    /// Character-level problems in a path are reported per request as
    /// `ApiError::RequestBuild`, not here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, template) in [
            ("execute", &self.execute),
            ("cycle_folders", &self.cycle_folders),
        ] {
            if !template.contains(ID_PLACEHOLDER) {
                return Err(ConfigError::Invalid(format!(
                    "endpoint `{name}` must contain the {ID_PLACEHOLDER} placeholder: {template}"
                )));
            }
        }
        Ok(())
    }
}

/// Substitute `id` into every `{id}` placeholder of a template
pub fn render(template: &str, id: i64) -> String {
    template.replace(ID_PLACEHOLDER, &id.to_string())
}
