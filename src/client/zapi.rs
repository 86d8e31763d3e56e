//! ZAPI client implementation

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use serde::de::DeserializeOwned;

use super::api::{CycleApi, ExecutionApi, FolderApi};
use super::endpoints::Endpoints;
use super::keyed;
use super::models::{
    Cycle, CycleCreateReply, CycleListFilter, Execution, ExecutionStatus, Folder,
    FolderListFilter,
};
use super::transport::{ApiRequest, HttpTransport, Transport};
use crate::config::Config;
use crate::error::{ApiError, Error, Resource, Result};

/// ZAPI client
///
/// Stateless apart from the shared transport; clones are cheap and share the
/// underlying connection pool.
#[derive(Clone)]
pub struct ZapiClient {
    transport: Arc<dyn Transport>,
    endpoints: Arc<Endpoints>,
}

impl ZapiClient {
    /// Create a client using the default endpoint paths.
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self::with_endpoints(Arc::new(transport), Endpoints::default())
    }

    /// Create a client over a shared transport with explicit endpoint paths.
    pub fn with_endpoints(transport: Arc<dyn Transport>, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints: Arc::new(endpoints),
        }
    }

    /// Create an authenticated HTTP client from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::from_config(config)?;
        Ok(Self::with_endpoints(
            Arc::new(transport),
            config.endpoints.clone(),
        ))
    }

    /// Endpoint paths in use
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

/// Decode a response body that maps directly onto `T`
fn decode<T: DeserializeOwned>(body: &str) -> std::result::Result<T, ApiError> {
    serde_json::from_str(body)
        .map_err(|e| ApiError::Decode(format!("Failed to parse response: {}", e)))
}

fn filter_params(filter: Option<&CycleListFilter>) -> Vec<(&'static str, String)> {
    filter.map(|f| f.to_query_params()).unwrap_or_default()
}

#[async_trait]
impl CycleApi for ZapiClient {
    async fn list_cycles(&self, filter: Option<&CycleListFilter>) -> Result<Vec<Cycle>> {
        let label = Error::list(Resource::Cycle);

        let request = ApiRequest::get(self.endpoints.cycle.as_str())
            .map_err(&label)?
            .query(filter_params(filter));
        let body = self.transport.execute(request).await.map_err(&label)?;
        let cycles: Vec<Cycle> = keyed::decode_keyed_list(&body).map_err(&label)?;

        debug!("Listed {} cycles", cycles.len());
        Ok(cycles)
    }

    async fn create_cycle(&self, cycle: &Cycle) -> Result<CycleCreateReply> {
        let label = Error::create(Resource::Cycle);

        let request = ApiRequest::post(self.endpoints.cycle.as_str())
            .and_then(|r| r.json(cycle))
            .map_err(&label)?;
        let body = self.transport.execute(request).await.map_err(&label)?;
        let reply: CycleCreateReply = decode(&body).map_err(&label)?;

        debug!("Created cycle {}", reply.id);
        Ok(reply)
    }
}

#[async_trait]
impl ExecutionApi for ZapiClient {
    async fn create_execution(&self, execution: &Execution) -> Result<Execution> {
        let label = Error::create(Resource::Execution);

        let request = ApiRequest::post(self.endpoints.execution.as_str())
            .and_then(|r| r.json(execution))
            .map_err(&label)?;
        let body = self.transport.execute(request).await.map_err(&label)?;

        match keyed::decode_first_entry::<Execution>(&body).map_err(&label)? {
            Some(created) => {
                debug!("Created execution {}", created.id);
                Ok(created)
            }
            None => {
                warn!("Execution create returned an empty object; returning a default execution");
                Ok(Execution::default())
            }
        }
    }

    async fn execute(&self, execution_id: i64, status: &ExecutionStatus) -> Result<Execution> {
        let label = Error::execute();

        let request = ApiRequest::put(self.endpoints.execute_path(execution_id))
            .and_then(|r| r.json(status))
            .map_err(&label)?;
        let body = self.transport.execute(request).await.map_err(&label)?;
        let execution: Execution = decode(&body).map_err(&label)?;

        debug!(
            "Execution {} now in status {:?}",
            execution_id, execution.execution_status
        );
        Ok(execution)
    }
}

#[async_trait]
impl FolderApi for ZapiClient {
    async fn list_folders(
        &self,
        cycle_id: i64,
        filter: Option<&FolderListFilter>,
    ) -> Result<Vec<Folder>> {
        let label = Error::list(Resource::Folder);

        let request = ApiRequest::get(self.endpoints.cycle_folders_path(cycle_id))
            .map_err(&label)?
            .query(filter_params(filter));
        let body = self.transport.execute(request).await.map_err(&label)?;
        // `null` stands for a cycle without folders
        let folders: Vec<Folder> = decode::<Option<Vec<Folder>>>(&body)
            .map_err(&label)?
            .unwrap_or_default();

        debug!("Listed {} folders of cycle {}", folders.len(), cycle_id);
        Ok(folders)
    }

    async fn create_folder(&self, folder: &Folder) -> Result<Folder> {
        let label = Error::create(Resource::Folder);

        let request = ApiRequest::post(self.endpoints.folder_create.as_str())
            .and_then(|r| r.json(folder))
            .map_err(&label)?;
        let body = self.transport.execute(request).await.map_err(&label)?;
        let created: Folder = decode(&body).map_err(&label)?;

        debug!("Created folder {:?}", created.effective_id());
        Ok(created)
    }
}
