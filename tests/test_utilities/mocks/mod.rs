pub mod mock_model_merger;
pub mod mock_progress_reporter;
pub mod mock_run_service;

pub use mock_model_merger::MockModelMerger;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_run_service::MockRunService;
