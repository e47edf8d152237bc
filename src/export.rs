use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::ipc::client::DescriptorSource;
use crate::report;
use crate::schema::descriptor::{Descriptor, ModelType};
use crate::schema::summary::DatabaseSummary;

pub struct Fetched {
    pub flows: Vec<Descriptor>,
    pub processes: Vec<Descriptor>,
}

/// Flows first, then processes. Nothing is fetched concurrently.
pub async fn fetch_all<S: DescriptorSource + Sync>(source: &S) -> Result<Fetched> {
    let flows = source.get_descriptors(ModelType::Flow).await?;
    let processes = source.get_descriptors(ModelType::Process).await?;

    Ok(Fetched { flows, processes })
}

/// Fetch everything and write the text report. No file is created unless
/// both fetches succeed.
pub async fn text_report<S: DescriptorSource + Sync>(
    source: &S,
    path: &Path,
) -> Result<DatabaseSummary> {
    let fetched = fetch_all(source).await?;

    info!(path = %path.display(), "writing text report");
    report::text::write_report(path, &fetched.flows, &fetched.processes)
}

/// Returns the number of flows and processes written.
pub async fn csv_export<S: DescriptorSource + Sync>(
    source: &S,
    flows_path: &Path,
    processes_path: &Path,
) -> Result<(usize, usize)> {
    let fetched = fetch_all(source).await?;

    let flows = report::csv::export_csv(flows_path, &fetched.flows)?;
    let processes = report::csv::export_csv(processes_path, &fetched.processes)?;

    Ok((flows, processes))
}
