//! ZAPI data models
//!
//! Domain types sent to and returned by the ZAPI endpoints, organized by
//! resource type. Field names follow the API's lowerCamelCase JSON keys.

mod cycle;
mod execution;
mod filter;
mod folder;

pub use cycle::{Cycle, CycleCreateReply, ExecutionSummaries, ExecutionSummary};
pub use execution::{Execution, ExecutionStatus};
pub use filter::{CycleListFilter, FolderListFilter, ListFilter};
pub use folder::Folder;

/// Deserialize `null` as the type's default, as the server sends `null` for
/// unset scalars and collections alike
pub(crate) fn deserialize_null_as_default<'de, D, T>(
    deserializer: D,
) -> std::result::Result<T, D::Error>
where
    D: serde::de::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    use serde::Deserialize;

    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
