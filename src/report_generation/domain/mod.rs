/// Domain models for the result bundle workflow
pub mod credit_summary;
pub mod display_config;
pub mod result_bundle;
pub mod run_reference;
pub mod space_summary;

pub use credit_summary::{CreditBadge, CreditSummary};
pub use display_config::{DisplayConfig, DisplayMode, GridOverlay};
pub use result_bundle::{BundleManifest, Metric, ResultBundle, METRICS};
pub use run_reference::{RecipeIdentity, RunLocator, RunReference};
pub use space_summary::SpaceSummary;
