use std::path::PathBuf;

use crate::report_generation::domain::{
    CreditSummary, DisplayMode, Metric, ResultBundle, RunReference,
};
use crate::shared::Result;

/// BundleRepository port for the local result-bundle store.
///
/// Owns the cache directory tree: the deterministic `(job_id, run_id)`
/// keying, all writes into a bundle root, and the decision whether an
/// existing directory can be reused without network calls. The store
/// assumes a single session per cache root; concurrent writers are not
/// coordinated.
pub trait BundleRepository: Send + Sync {
    /// The bundle root this run materializes into. Two calls with the
    /// same run reference always return the same path.
    fn root_for(&self, run: &RunReference) -> PathBuf;

    /// Returns the cached bundle if every required entry exists on disk
    /// and the manifest matches the requested display mode. `None` means
    /// the caller has to fetch.
    fn lookup(&self, run: &RunReference, display_mode: DisplayMode) -> Option<ResultBundle>;

    /// Unpacks one downloaded metric archive into `root/<metric>/`.
    /// Returns the number of files extracted.
    fn unpack_metric(&self, run: &RunReference, metric: &Metric, archive: &[u8]) -> Result<u64>;

    /// Writes the parsed credit summary to `root/credit_summary.json`.
    fn write_credit_summary(&self, run: &RunReference, summary: &CreditSummary) -> Result<PathBuf>;

    /// Writes the raw space-summary bytes verbatim to
    /// `root/space_summary.csv`.
    fn write_space_summary(&self, run: &RunReference, bytes: &[u8]) -> Result<PathBuf>;

    /// Where the merged visualization for this run belongs.
    fn visualization_path(&self, run: &RunReference) -> PathBuf;

    /// Records a completed bundle: writes the manifest and remembers the
    /// bundle for the rest of the session.
    fn store(&self, run: &RunReference, bundle: &ResultBundle) -> Result<()>;
}
