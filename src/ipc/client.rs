use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpStream;
use tracing::{debug, error, info, warn};

use super::protocol::{Request, Response, TypeRef, GET_DESCRIPTORS};
use crate::config::ExplorerConfig;
use crate::error::{ExplorerError, Result};
use crate::schema::descriptor::{Descriptor, ModelType};
use crate::schema::IdentifiableDescriptor;

#[async_trait::async_trait]
pub trait DescriptorSource {
    async fn get_descriptors(&self, model_type: ModelType) -> Result<Vec<Descriptor>>;
}

/// JSON-RPC client for the openLCA IPC server.
#[derive(Debug)]
pub struct IpcClient {
    http_client: reqwest::Client,
    host: String,
    port: u16,
    endpoint: String,
    timeout: Duration,
    next_id: AtomicU64,
}

impl IpcClient {
    pub fn new(conf: &ExplorerConfig) -> Result<Self> {
        let endpoint = conf.endpoint();
        let timeout = Duration::from_secs(conf.timeout_secs);

        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ExplorerError::connection(&endpoint, e))?;

        Ok(Self {
            http_client,
            host: conf.host.clone(),
            port: conf.port,
            endpoint,
            timeout,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Opens and immediately drops a TCP connection to the server.
    pub async fn probe(&self) -> Result<()> {
        debug!(endpoint = %self.endpoint, "probing IPC server");

        match tokio::time::timeout(self.timeout, TcpStream::connect((self.host.as_str(), self.port)))
            .await
        {
            Ok(Ok(_stream)) => Ok(()),
            Ok(Err(e)) => Err(ExplorerError::connection(&self.endpoint, e)),
            Err(elapsed) => Err(ExplorerError::connection(&self.endpoint, elapsed)),
        }
    }

    async fn call<P, T>(&self, method: &'static str, params: P) -> Result<T>
    where
        P: Serialize + Send,
        T: DeserializeOwned,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(id, method, "sending IPC request");

        let resp = self
            .http_client
            .post(&self.endpoint)
            .json(&Request::new(id, method, params))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ExplorerError::connection(&self.endpoint, e))?;

        let body = resp
            .bytes()
            .await
            .map_err(|e| ExplorerError::connection(&self.endpoint, e))?;

        serde_json::from_slice::<Response>(&body)
            .map_err(ExplorerError::Decode)?
            .into_result()
    }
}

#[async_trait::async_trait]
impl DescriptorSource for IpcClient {
    #[tracing::instrument(level = "info", skip(self), fields(endpoint = %self.endpoint))]
    async fn get_descriptors(&self, model_type: ModelType) -> Result<Vec<Descriptor>> {
        let mut descriptors: Vec<Descriptor> = self
            .call(GET_DESCRIPTORS, TypeRef { model_type })
            .await
            .inspect_err(|e| error!(?e, "descriptor request failed"))?;

        for d in descriptors.iter_mut() {
            d.model_type.get_or_insert(model_type);
        }

        let foreign = descriptors
            .iter()
            .filter(|d| d.kind() != model_type)
            .count();
        if foreign > 0 {
            warn!(foreign, "server returned descriptors of another type");
        }

        info!(count = descriptors.len(), "received descriptors");
        Ok(descriptors)
    }
}
