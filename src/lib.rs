//! leed-report - LEED Option II report tool for Pollination runs
//!
//! This library fetches the result bundle of a LEED Daylight Illuminance
//! simulation run from the Pollination cloud service, materializes it in
//! a local cache directory keyed by job and run id, and derives a single
//! renderable visualization artifact from the model description plus the
//! result overlays. It follows hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`report_generation`): run references, recipe
//!   compatibility rules, bundle layout, summaries, display config
//! - **Application Layer** (`application`): use cases, DTOs, read models
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common error types and Result alias
//!
//! # Example
//!
//! ```no_run
//! use leed_report::prelude::*;
//!
//! # async fn demo() -> Result<()> {
//! // Create adapters
//! let run_service = PollinationRunService::new("https://api.pollination.cloud", None)?;
//! let bundle_repository = FileSystemBundleCache::new("data");
//! let model_merger = VtkJsSceneWriter::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = FetchBundleUseCase::new(
//!     run_service,
//!     bundle_repository,
//!     model_merger,
//!     progress_reporter,
//! );
//!
//! // Execute
//! let request = FetchRequest::new(
//!     "https://app.pollination.cloud/projects/owner/demo/jobs/0cd8f29b-71e1-44be-9ce2-7d4c6e4e5d13/runs/ec6bbd7e-1579-550c-9e89-2ba424cd2d04",
//!     DisplayMode::Wireframe,
//!     false,
//! );
//! let response = use_case.execute(request).await?;
//!
//! // Format the report
//! let view = ReportView::from_response(&response);
//! let formatter = FormatterFactory::create(ReportFormat::Text);
//! println!("{}", formatter.format(&view)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod report_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemBundleCache, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonReportFormatter, TextReportFormatter};
    pub use crate::adapters::outbound::network::PollinationRunService;
    pub use crate::adapters::outbound::visualization::VtkJsSceneWriter;
    pub use crate::application::dto::{FetchRequest, FetchResponse, ReportFormat};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::read_models::{CreditView, ReportView, SpaceTableView};
    pub use crate::application::use_cases::FetchBundleUseCase;
    pub use crate::ports::outbound::{
        BundleRepository, ModelMerger, OutputPresenter, ProgressReporter, ReportFormatter,
        RunIndexRecord, RunService,
    };
    pub use crate::report_generation::domain::{
        CreditBadge, CreditSummary, DisplayConfig, DisplayMode, Metric, RecipeIdentity,
        ResultBundle, RunLocator, RunReference, SpaceSummary, METRICS,
    };
    pub use crate::report_generation::services::{RunValidator, REQUIRED_RECIPE};
    pub use crate::shared::error::{ExitCode, ReportError};
    pub use crate::shared::Result;
}
