use crate::constants::{
    APP_NAME, DEFAULT_FLOWS_CSV, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PROCESSES_CSV,
    DEFAULT_REPORT_FILE, DEFAULT_TIMEOUT_SECS,
};

use anyhow::Result;
use config::Config;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ExplorerConfig {
    pub host: String,
    pub port: u16,
    pub timeout_secs: u64,
    pub report_file: String,
    pub flows_csv: String,
    pub processes_csv: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            report_file: DEFAULT_REPORT_FILE.to_string(),
            flows_csv: DEFAULT_FLOWS_CSV.to_string(),
            processes_csv: DEFAULT_PROCESSES_CSV.to_string(),
        }
    }
}

impl ExplorerConfig {
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Self::default()
        }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Layers the optional config file and `OLCA_EXPLORER_*` environment
/// variables over the built-in defaults.
pub fn init(file: &str) -> Result<ExplorerConfig> {
    Ok(Config::builder()
        .set_default("host", DEFAULT_HOST)?
        .set_default("port", i64::from(DEFAULT_PORT))?
        .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
        .set_default("report_file", DEFAULT_REPORT_FILE)?
        .set_default("flows_csv", DEFAULT_FLOWS_CSV)?
        .set_default("processes_csv", DEFAULT_PROCESSES_CSV)?
        .add_source(config::File::with_name(file).required(false))
        .add_source(config::Environment::with_prefix(APP_NAME))
        .build()?
        .try_deserialize::<ExplorerConfig>()?)
}
