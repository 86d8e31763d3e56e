//! ZAPI client
//!
//! [`ZapiClient`] implements one trait per resource ([`CycleApi`],
//! [`ExecutionApi`], [`FolderApi`]) on top of a pluggable [`Transport`].

pub mod api;
pub mod endpoints;
#[cfg(test)]
pub mod fixtures;
pub mod keyed;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod transport;
pub mod zapi;

pub use api::{CycleApi, ExecutionApi, FolderApi};
pub use endpoints::Endpoints;
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockTransport;
pub use models::{
    Cycle, CycleCreateReply, CycleListFilter, Execution, ExecutionStatus, ExecutionSummaries,
    ExecutionSummary, Folder, FolderListFilter, ListFilter,
};
pub use transport::{ApiRequest, HttpTransport, Transport};
pub use zapi::ZapiClient;

/// Combined ZAPI surface (all resource traits)
///
/// Implemented automatically for anything implementing the three resource
/// traits, so command code can take `&dyn ZapiApi`.
pub trait ZapiApi: CycleApi + ExecutionApi + FolderApi {}

impl<T: CycleApi + ExecutionApi + FolderApi> ZapiApi for T {}
