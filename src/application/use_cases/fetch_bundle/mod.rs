use chrono::Utc;

use crate::application::dto::{FetchRequest, FetchResponse};
use crate::ports::outbound::{BundleRepository, ModelMerger, ProgressReporter, RunService};
use crate::report_generation::domain::{
    CreditSummary, DisplayConfig, ResultBundle, RunLocator, RunReference, SpaceSummary, METRICS,
};
use crate::report_generation::services::RunValidator;
use crate::shared::error::ReportError;
use crate::shared::Result;

/// FetchBundleUseCase - Core use case materializing a result bundle
///
/// Orchestrates the acquisition workflow: resolve the run, validate its
/// recipe, reuse a cached bundle when one is complete on disk, otherwise
/// download the five metric archives, the two summaries and the model,
/// and merge everything into the visualization file. All infrastructure
/// comes in through generic dependency injection.
///
/// # Type Parameters
/// * `RS` - RunService implementation
/// * `BR` - BundleRepository implementation
/// * `MM` - ModelMerger implementation
/// * `PR` - ProgressReporter implementation
pub struct FetchBundleUseCase<RS, BR, MM, PR> {
    run_service: RS,
    bundle_repository: BR,
    model_merger: MM,
    progress_reporter: PR,
}

impl<RS, BR, MM, PR> FetchBundleUseCase<RS, BR, MM, PR>
where
    RS: RunService,
    BR: BundleRepository,
    MM: ModelMerger,
    PR: ProgressReporter,
{
    /// Creates a new FetchBundleUseCase with injected dependencies
    pub fn new(run_service: RS, bundle_repository: BR, model_merger: MM, progress_reporter: PR) -> Self {
        Self {
            run_service,
            bundle_repository,
            model_merger,
            progress_reporter,
        }
    }

    /// The injected run service
    pub fn run_service(&self) -> &RS {
        &self.run_service
    }

    /// The injected model merger
    pub fn model_merger(&self) -> &MM {
        &self.model_merger
    }

    /// The injected progress reporter
    pub fn progress_reporter(&self) -> &PR {
        &self.progress_reporter
    }

    /// Executes the bundle fetch.
    ///
    /// Errors are terminal for the whole fetch: a failed metric archive
    /// aborts before any summary is written and nothing is retried.
    pub async fn execute(&self, request: FetchRequest) -> Result<FetchResponse> {
        let locator = RunLocator::parse(&request.run_url)?;

        self.progress_reporter
            .report(&format!("🔎 Resolving run {}", locator));
        let run = self.run_service.fetch_run(&locator).await?;
        RunValidator::validate(&run)?;

        if !request.refresh {
            if let Some(bundle) = self
                .bundle_repository
                .lookup(&run, request.display_mode)
            {
                return self.reuse_cached_bundle(run, bundle);
            }
        }

        let bundle = self.download_bundle(&run, &request).await?;
        let credit_summary = CreditSummary::from_file(&bundle.credit_summary_file())?;
        let space_summary = SpaceSummary::from_file(&bundle.space_summary_file())?;

        self.progress_reporter.report_completion(&format!(
            "✅ Results ready: {}",
            bundle.root().display()
        ));

        Ok(FetchResponse::new(
            run,
            bundle,
            credit_summary,
            space_summary,
            false,
        ))
    }

    /// Serves a bundle that is already complete on disk, re-reading the
    /// summaries from the cached files. No network calls happen here.
    fn reuse_cached_bundle(
        &self,
        run: RunReference,
        bundle: ResultBundle,
    ) -> Result<FetchResponse> {
        self.progress_reporter.report(&format!(
            "📂 Using cached results from {}",
            bundle.root().display()
        ));
        let credit_summary = CreditSummary::from_file(&bundle.credit_summary_file())?;
        let space_summary = SpaceSummary::from_file(&bundle.space_summary_file())?;
        Ok(FetchResponse::new(
            run,
            bundle,
            credit_summary,
            space_summary,
            true,
        ))
    }

    /// Downloads and materializes everything the bundle needs.
    async fn download_bundle(
        &self,
        run: &RunReference,
        request: &FetchRequest,
    ) -> Result<ResultBundle> {
        let root = self.bundle_repository.root_for(run);

        self.progress_reporter
            .report(&format!("⬇️  Downloading results into {}", root.display()));

        let total = METRICS.len();
        for (idx, metric) in METRICS.iter().enumerate() {
            self.progress_reporter
                .report_progress(idx, total, Some(metric.name));

            let archive = self
                .run_service
                .download_output(run, metric.name)
                .await
                .map_err(|e| ReportError::ArchiveFetch {
                    metric: metric.name.to_string(),
                    details: e.to_string(),
                })?;

            let entries = self
                .bundle_repository
                .unpack_metric(run, metric, &archive)
                .map_err(|e| ReportError::ArchiveFetch {
                    metric: metric.name.to_string(),
                    details: e.to_string(),
                })?;

            if entries == 0 {
                return Err(ReportError::ArchiveFetch {
                    metric: metric.name.to_string(),
                    details: "archive contained no result files".to_string(),
                }
                .into());
            }
        }
        self.progress_reporter.report_progress(total, total, None);

        let index = self.run_service.fetch_run_index(run).await?;

        let credit_bytes = self
            .run_service
            .download_artifact(run, &index.credit_summary)
            .await?;
        let credit_summary = CreditSummary::from_json_bytes(&credit_bytes)?;
        self.bundle_repository
            .write_credit_summary(run, &credit_summary)?;

        let space_bytes = self
            .run_service
            .download_artifact(run, &index.space_summary)
            .await?;
        // Validate before the verbatim write so a broken table never
        // lands in the cache.
        SpaceSummary::parse(&space_bytes)?;
        self.bundle_repository.write_space_summary(run, &space_bytes)?;

        let model_bytes = self.run_service.download_artifact(run, &index.model).await?;
        let model: serde_json::Value =
            serde_json::from_slice(&model_bytes).map_err(|e| ReportError::SummaryParse {
                artifact: "model".to_string(),
                details: e.to_string(),
            })?;

        self.progress_reporter.report("🏗️  Building visualization...");
        let config = DisplayConfig::leed_overlays(&root, request.display_mode);
        self.model_merger.merge(
            &model,
            &config,
            &self.bundle_repository.visualization_path(run),
        )?;

        let bundle = ResultBundle::new(root, request.display_mode, Some(Utc::now()));
        self.bundle_repository.store(run, &bundle)?;
        Ok(bundle)
    }
}
