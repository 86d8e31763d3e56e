//! API trait definitions split by resource
//!
//! - [`CycleApi`] - Test cycle listing and creation
//! - [`ExecutionApi`] - Execution creation and status transitions
//! - [`FolderApi`] - Folder listing and creation
//!
//! The [`ZapiApi`](super::ZapiApi) super-trait combines all three.

mod cycle;
mod execution;
mod folder;

pub use cycle::CycleApi;
pub use execution::ExecutionApi;
pub use folder::FolderApi;
