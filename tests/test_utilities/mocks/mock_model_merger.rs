use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use leed_report::prelude::*;

/// Mock ModelMerger for testing
///
/// Writes a stub visualization file and counts invocations.
pub struct MockModelMerger {
    merge_calls: AtomicUsize,
}

impl MockModelMerger {
    pub fn new() -> Self {
        Self {
            merge_calls: AtomicUsize::new(0),
        }
    }

    pub fn merge_count(&self) -> usize {
        self.merge_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockModelMerger {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelMerger for MockModelMerger {
    fn merge(
        &self,
        _model: &serde_json::Value,
        config: &DisplayConfig,
        output_path: &Path,
    ) -> Result<PathBuf> {
        self.merge_calls.fetch_add(1, Ordering::SeqCst);
        std::fs::write(
            output_path,
            format!("stub vtkjs ({})", config.display_mode),
        )?;
        Ok(output_path.to_path_buf())
    }
}
