use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;

use crate::ports::outbound::{RunIndexRecord, RunService};
use crate::report_generation::domain::{RecipeIdentity, RunLocator, RunReference};
use crate::shared::error::ReportError;
use crate::shared::Result;

/// Default API host. The app host (`app.pollination.cloud`) serves the
/// dashboard; run metadata and artifacts come from here.
pub const DEFAULT_API_BASE: &str = "https://api.pollination.cloud";

const API_KEY_HEADER: &str = "x-pollination-token";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct RunPayload {
    recipe: RecipePayload,
}

#[derive(Debug, Deserialize)]
struct RecipePayload {
    owner: String,
    name: String,
    tag: String,
}

/// PollinationRunService adapter for the Pollination query service.
///
/// Implements the RunService port with an async reqwest client. An API
/// key is only required for runs in private projects and is sent as a
/// default header on every request when configured.
///
/// Failures are not retried; each transport or HTTP-status problem is
/// surfaced once as `ReportError::Network`.
pub struct PollinationRunService {
    client: reqwest::Client,
    api_base: String,
}

impl PollinationRunService {
    /// Creates a client against `api_base` with an optional API key.
    pub fn new(api_base: &str, api_key: Option<&str>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("leed-report/{}", version);

        let mut headers = HeaderMap::new();
        if let Some(key) = api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|e| anyhow::anyhow!("API key is not a valid header value: {}", e))?;
            headers.insert(API_KEY_HEADER, value);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    fn run_url(&self, locator: &RunLocator) -> String {
        format!(
            "{}/projects/{}/{}/runs/{}",
            self.api_base,
            urlencoding::encode(&locator.owner),
            urlencoding::encode(&locator.project),
            locator.run_id
        )
    }

    fn output_url(&self, locator: &RunLocator, output_name: &str) -> String {
        format!(
            "{}/outputs/{}/zip",
            self.run_url(locator),
            urlencoding::encode(output_name)
        )
    }

    fn results_url(&self, locator: &RunLocator) -> String {
        format!(
            "{}/projects/{}/{}/jobs/{}/results",
            self.api_base,
            urlencoding::encode(&locator.owner),
            urlencoding::encode(&locator.project),
            locator.job_id
        )
    }

    fn artifact_url(&self, locator: &RunLocator, artifact_path: &str) -> String {
        format!(
            "{}/projects/{}/{}/jobs/{}/artifacts/download?path={}",
            self.api_base,
            urlencoding::encode(&locator.owner),
            urlencoding::encode(&locator.project),
            locator.job_id,
            urlencoding::encode(artifact_path)
        )
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|e| ReportError::Network {
                    details: format!("GET {} failed: {}", url, e),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::Network {
                details: format!("GET {} returned status {}", url, status),
            }
            .into());
        }

        Ok(response)
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.get(url).await?;
        let bytes = response.bytes().await.map_err(|e| ReportError::Network {
            details: format!("reading body of {} failed: {}", url, e),
        })?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl RunService for PollinationRunService {
    async fn fetch_run(&self, locator: &RunLocator) -> Result<RunReference> {
        let url = self.run_url(locator);
        let response = self.get(&url).await?;
        let payload: RunPayload = response.json().await.map_err(|e| ReportError::Network {
            details: format!("run metadata from {} is not valid JSON: {}", url, e),
        })?;

        Ok(RunReference::new(
            locator.clone(),
            RecipeIdentity::new(payload.recipe.owner, payload.recipe.name, payload.recipe.tag),
        ))
    }

    async fn download_output(&self, run: &RunReference, output_name: &str) -> Result<Vec<u8>> {
        self.get_bytes(&self.output_url(&run.locator, output_name))
            .await
    }

    async fn fetch_run_index(&self, run: &RunReference) -> Result<RunIndexRecord> {
        let url = self.results_url(&run.locator);
        let response = self.get(&url).await?;
        let records: Vec<RunIndexRecord> =
            response.json().await.map_err(|e| ReportError::Network {
                details: format!("result index from {} is not valid JSON: {}", url, e),
            })?;

        // One row per run; this job was started for a single run.
        records
            .into_iter()
            .next()
            .ok_or_else(|| {
                ReportError::Network {
                    details: format!("result index from {} is empty", url),
                }
                .into()
            })
    }

    async fn download_artifact(&self, run: &RunReference, artifact_path: &str) -> Result<Vec<u8>> {
        self.get_bytes(&self.artifact_url(&run.locator, artifact_path))
            .await
    }
}
