//! Display models for CLI output
//!
//! Converts API response types into table rows with CLI-friendly columns.

pub mod display;

pub use display::{CycleDisplay, ExecutionDisplay, FolderDisplay};
