use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use super::archive::extract_zip;
use crate::ports::outbound::BundleRepository;
use crate::report_generation::domain::{
    BundleManifest, CreditSummary, DisplayMode, Metric, ResultBundle, RunReference,
};
use crate::shared::error::ReportError;
use crate::shared::Result;

/// FileSystemBundleCache adapter for the local result-bundle store.
///
/// Bundles live under `<cache_root>/<job_id>/<run_id>/`. A lookup is
/// answered from an in-session memo first, then from an explicit
/// filesystem probe: every metric folder must exist and be non-empty and
/// all bundle files (including the manifest) must be present. Stale
/// directories from older sessions are reused when they probe complete;
/// partially written ones never are, since the manifest is written last.
///
/// The cache assumes a single session per cache root and does not lock
/// against concurrent writers.
pub struct FileSystemBundleCache {
    cache_root: PathBuf,
    memo: DashMap<(Uuid, Uuid), ResultBundle>,
}

impl FileSystemBundleCache {
    pub fn new(cache_root: impl Into<PathBuf>) -> Self {
        Self {
            cache_root: cache_root.into(),
            memo: DashMap::new(),
        }
    }

    /// Returns the current memo size (for testing/monitoring)
    #[cfg(test)]
    pub fn memo_size(&self) -> usize {
        self.memo.len()
    }

    fn bundle_shell(&self, run: &RunReference, display_mode: DisplayMode) -> ResultBundle {
        ResultBundle::new(self.root_for(run), display_mode, None)
    }

    fn ensure_root(&self, run: &RunReference) -> Result<PathBuf> {
        let root = self.root_for(run);
        fs::create_dir_all(&root).map_err(|e| ReportError::CacheDir {
            path: root.clone(),
            details: e.to_string(),
        })?;
        Ok(root)
    }

    /// Filesystem probe: every required entry present, metric folders
    /// populated, and a manifest whose display mode matches.
    fn probe(&self, run: &RunReference, display_mode: DisplayMode) -> Option<ResultBundle> {
        let shell = self.bundle_shell(run, display_mode);

        let manifest_bytes = fs::read(shell.manifest_file()).ok()?;
        let manifest: BundleManifest = serde_json::from_slice(&manifest_bytes).ok()?;
        if manifest.display_mode != display_mode {
            return None;
        }

        for metric in crate::report_generation::domain::METRICS.iter() {
            let dir = shell.metric_dir(metric);
            let mut entries = fs::read_dir(&dir).ok()?;
            entries.next()?.ok()?;
        }

        for file in [
            shell.credit_summary_file(),
            shell.space_summary_file(),
            shell.visualization_file(),
        ] {
            if !file.is_file() {
                return None;
            }
        }

        Some(ResultBundle::new(
            shell.root().to_path_buf(),
            manifest.display_mode,
            Some(manifest.fetched_at),
        ))
    }
}

impl BundleRepository for FileSystemBundleCache {
    fn root_for(&self, run: &RunReference) -> PathBuf {
        ResultBundle::root_for(&self.cache_root, run.job_id(), run.run_id())
    }

    fn lookup(&self, run: &RunReference, display_mode: DisplayMode) -> Option<ResultBundle> {
        let key = (run.job_id(), run.run_id());

        if let Some(cached) = self.memo.get(&key) {
            if cached.display_mode() == display_mode {
                return Some(cached.clone());
            }
            return None;
        }

        let bundle = self.probe(run, display_mode)?;
        self.memo.insert(key, bundle.clone());
        Some(bundle)
    }

    fn unpack_metric(&self, run: &RunReference, metric: &Metric, archive: &[u8]) -> Result<u64> {
        self.ensure_root(run)?;
        let dest = self.bundle_shell(run, DisplayMode::default()).metric_dir(metric);
        extract_zip(archive, &dest)
    }

    fn write_credit_summary(&self, run: &RunReference, summary: &CreditSummary) -> Result<PathBuf> {
        let root = self.ensure_root(run)?;
        let path = root.join(crate::report_generation::domain::result_bundle::CREDIT_SUMMARY_FILE);
        let json = serde_json::to_string(summary).map_err(|e| ReportError::FileWrite {
            path: path.clone(),
            details: e.to_string(),
        })?;
        fs::write(&path, json).map_err(|e| ReportError::FileWrite {
            path: path.clone(),
            details: e.to_string(),
        })?;
        Ok(path)
    }

    fn write_space_summary(&self, run: &RunReference, bytes: &[u8]) -> Result<PathBuf> {
        let root = self.ensure_root(run)?;
        let path = root.join(crate::report_generation::domain::result_bundle::SPACE_SUMMARY_FILE);
        fs::write(&path, bytes).map_err(|e| ReportError::FileWrite {
            path: path.clone(),
            details: e.to_string(),
        })?;
        Ok(path)
    }

    fn visualization_path(&self, run: &RunReference) -> PathBuf {
        self.bundle_shell(run, DisplayMode::default())
            .visualization_file()
    }

    fn store(&self, run: &RunReference, bundle: &ResultBundle) -> Result<()> {
        let manifest = BundleManifest {
            job_id: run.job_id(),
            run_id: run.run_id(),
            recipe: run.recipe.clone(),
            display_mode: bundle.display_mode(),
            fetched_at: bundle.fetched_at().unwrap_or_else(Utc::now),
        };
        let path = bundle.manifest_file();
        let json =
            serde_json::to_string_pretty(&manifest).map_err(|e| ReportError::FileWrite {
                path: path.clone(),
                details: e.to_string(),
            })?;
        fs::write(&path, json).map_err(|e| ReportError::FileWrite {
            path: path.clone(),
            details: e.to_string(),
        })?;

        self.memo
            .insert((run.job_id(), run.run_id()), bundle.clone());
        Ok(())
    }
}
