//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod cycle;
mod execution;
mod folder;

pub use cycle::CycleDisplay;
pub use execution::ExecutionDisplay;
pub use folder::FolderDisplay;
