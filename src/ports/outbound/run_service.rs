use async_trait::async_trait;
use serde::Deserialize;

use crate::report_generation::domain::{RunLocator, RunReference};
use crate::shared::Result;

/// The single-row result-index record a job keeps per run. Each field is
/// an artifact path relative to the job folder on the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunIndexRecord {
    #[serde(rename = "credit-summary")]
    pub credit_summary: String,
    #[serde(rename = "space-summary")]
    pub space_summary: String,
    pub model: String,
}

/// RunService port for the remote job/run query service.
///
/// The service itself is an opaque external API; this port covers the
/// four calls the bundle fetch needs. Implementations must be
/// `Send + Sync` so the use case can hold them across awaits.
///
/// # Errors
/// Every method surfaces transport and HTTP-status failures as
/// `ReportError::Network` with the cause attached. Failures are not
/// retried here.
#[async_trait]
pub trait RunService: Send + Sync {
    /// Resolves run metadata, including the recipe that produced it.
    async fn fetch_run(&self, locator: &RunLocator) -> Result<RunReference>;

    /// Downloads one named run output as a zipped archive and returns
    /// the raw archive bytes.
    async fn download_output(&self, run: &RunReference, output_name: &str) -> Result<Vec<u8>>;

    /// Fetches the run's single-row result-index record with the
    /// artifact references for the two summaries and the model.
    async fn fetch_run_index(&self, run: &RunReference) -> Result<RunIndexRecord>;

    /// Downloads a job artifact by its path from the index record.
    async fn download_artifact(&self, run: &RunReference, artifact_path: &str) -> Result<Vec<u8>>;
}
