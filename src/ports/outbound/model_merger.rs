use std::path::{Path, PathBuf};

use crate::report_generation::domain::DisplayConfig;
use crate::shared::Result;

/// ModelMerger port for producing the single renderable visualization
/// artifact.
///
/// Combines the downloaded model description with the result overlays
/// from the display configuration into one file the external viewer can
/// load. The merge is a pure function of its inputs; it must be re-run
/// whenever the metric data or display mode changes.
pub trait ModelMerger: Send + Sync {
    /// Merges `model` and `config` into the file at `output_path` and
    /// returns that path.
    fn merge(
        &self,
        model: &serde_json::Value,
        config: &DisplayConfig,
        output_path: &Path,
    ) -> Result<PathBuf>;
}
