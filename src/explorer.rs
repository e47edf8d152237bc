use tracing::{error, info};

use crate::config::ExplorerConfig;
use crate::error::{ExplorerError, Result};
use crate::ipc::client::{DescriptorSource, IpcClient};
use crate::schema::descriptor::{Descriptor, ModelType};
use crate::schema::summary::DatabaseSummary;

/// Convenience wrapper over [`IpcClient`] that must be connected before use.
pub struct Explorer {
    conf: ExplorerConfig,
    client: Option<IpcClient>,
}

impl Explorer {
    pub fn new(port: u16) -> Self {
        Self::with_config(ExplorerConfig::with_port(port))
    }

    pub fn with_config(conf: ExplorerConfig) -> Self {
        Self { conf, client: None }
    }

    pub fn port(&self) -> u16 {
        self.conf.port
    }

    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    /// Returns `false` when the IPC server cannot be reached. Not retried.
    pub async fn connect(&mut self) -> bool {
        let client = match IpcClient::new(&self.conf) {
            Ok(t) => t,
            Err(e) => {
                error!(?e, "could not build IPC client");
                return false;
            }
        };

        match client.probe().await {
            Ok(()) => {
                info!(endpoint = client.endpoint(), "connected to IPC server");
                self.client = Some(client);
                true
            }
            Err(e) => {
                error!(?e, "could not connect to IPC server");
                self.client = None;
                false
            }
        }
    }

    pub async fn get_flows(&self) -> Result<Vec<Descriptor>> {
        self.client()?.get_descriptors(ModelType::Flow).await
    }

    pub async fn get_processes(&self) -> Result<Vec<Descriptor>> {
        self.client()?.get_descriptors(ModelType::Process).await
    }

    pub async fn get_database_summary(&self) -> Result<DatabaseSummary> {
        let flows = self.get_flows().await?;
        let processes = self.get_processes().await?;

        Ok(DatabaseSummary::from_counts(flows.len(), processes.len()))
    }

    fn client(&self) -> Result<&IpcClient> {
        self.client.as_ref().ok_or(ExplorerError::NotConnected)
    }
}
