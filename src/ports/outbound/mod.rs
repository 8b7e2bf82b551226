/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (cloud API, file system, viewer
/// tooling, console).
pub mod bundle_repository;
pub mod model_merger;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;
pub mod run_service;

pub use bundle_repository::BundleRepository;
pub use model_merger::ModelMerger;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use run_service::{RunIndexRecord, RunService};
