use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExplorerError>;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("could not reach the openLCA IPC server at {endpoint}")]
    Connection {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("IPC server returned error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("malformed response from IPC server")]
    Decode(#[source] serde_json::Error),
    #[error("not connected, call connect() first")]
    NotConnected,
    #[error("failed to write output")]
    Io(#[from] std::io::Error),
    #[error("failed to write CSV output")]
    Csv(#[from] csv::Error),
}

impl ExplorerError {
    pub fn connection(
        endpoint: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Connection {
            endpoint: endpoint.into(),
            source: source.into(),
        }
    }
}
