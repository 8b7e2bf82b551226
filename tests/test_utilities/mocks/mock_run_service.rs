use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use leed_report::prelude::*;

/// Mock RunService for testing
///
/// Serves a fixed recipe, canned zip archives for every metric and
/// canned summary/model artifacts. Individual metrics can be configured
/// to fail, and every download is counted so tests can assert on cache
/// behavior.
pub struct MockRunService {
    recipe: RecipeIdentity,
    fail_metric: Option<String>,
    credit_summary: Vec<u8>,
    download_calls: AtomicUsize,
}

impl MockRunService {
    pub fn new() -> Self {
        Self {
            recipe: RecipeIdentity::new("pollination", "leed-daylight-illuminance", "0.3.1"),
            fail_metric: None,
            credit_summary:
                br#"{"credits": 2, "percentage_passing": 76.5, "first_floor": 82.0}"#.to_vec(),
            download_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_recipe(mut self, owner: &str, name: &str, tag: &str) -> Self {
        self.recipe = RecipeIdentity::new(owner, name, tag);
        self
    }

    pub fn with_failing_metric(mut self, metric: &str) -> Self {
        self.fail_metric = Some(metric.to_string());
        self
    }

    pub fn with_credit_summary(mut self, raw: &[u8]) -> Self {
        self.credit_summary = raw.to_vec();
        self
    }

    pub fn download_count(&self) -> usize {
        self.download_calls.load(Ordering::SeqCst)
    }

    fn metric_zip() -> Vec<u8> {
        let mut buffer = std::io::Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buffer);
            writer
                .start_file("grid.res", zip::write::SimpleFileOptions::default())
                .unwrap();
            writer.write_all(b"312.5\n80.1\n").unwrap();
            writer.finish().unwrap();
        }
        buffer.into_inner()
    }
}

impl Default for MockRunService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RunService for MockRunService {
    async fn fetch_run(&self, locator: &RunLocator) -> Result<RunReference> {
        Ok(RunReference::new(locator.clone(), self.recipe.clone()))
    }

    async fn download_output(&self, _run: &RunReference, output_name: &str) -> Result<Vec<u8>> {
        self.download_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_metric.as_deref() == Some(output_name) {
            anyhow::bail!("GET /outputs/{}/zip returned status 502", output_name);
        }
        Ok(Self::metric_zip())
    }

    async fn fetch_run_index(&self, _run: &RunReference) -> Result<RunIndexRecord> {
        Ok(RunIndexRecord {
            credit_summary: "outputs/credit_summary.json".to_string(),
            space_summary: "outputs/space_summary.csv".to_string(),
            model: "outputs/model.hbjson".to_string(),
        })
    }

    async fn download_artifact(&self, _run: &RunReference, artifact_path: &str) -> Result<Vec<u8>> {
        self.download_calls.fetch_add(1, Ordering::SeqCst);
        match artifact_path {
            "outputs/credit_summary.json" => Ok(self.credit_summary.clone()),
            "outputs/space_summary.csv" => {
                Ok(b"space,illuminance-9am,pass-fail-combined\nOffice,312.5,1\nLobby,80.1,0\n"
                    .to_vec())
            }
            "outputs/model.hbjson" => Ok(br#"{"type": "Model", "rooms": []}"#.to_vec()),
            other => anyhow::bail!("unexpected artifact path: {}", other),
        }
    }
}
