use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::display_config::DisplayMode;
use super::run_reference::RecipeIdentity;

/// One of the five fixed result outputs produced per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    /// Output name on the compute service, also the local folder name.
    pub name: &'static str,
    /// Human readable label used in the viewer and the report.
    pub label: &'static str,
    /// Unit of the grid values. Empty for pass/fail metrics.
    pub unit: &'static str,
}

/// The five metric outputs every LEED Option II run produces.
pub const METRICS: [Metric; 5] = [
    Metric {
        name: "illuminance-9am",
        label: "Illuminance 9am",
        unit: "lux",
    },
    Metric {
        name: "illuminance-3pm",
        label: "Illuminance 3pm",
        unit: "lux",
    },
    Metric {
        name: "pass-fail-9am",
        label: "Pass/Fail 9am",
        unit: "",
    },
    Metric {
        name: "pass-fail-3pm",
        label: "Pass/Fail 3pm",
        unit: "",
    },
    Metric {
        name: "pass-fail-combined",
        label: "Pass/Fail Combined",
        unit: "",
    },
];

pub const CREDIT_SUMMARY_FILE: &str = "credit_summary.json";
pub const SPACE_SUMMARY_FILE: &str = "space_summary.csv";
pub const VISUALIZATION_FILE: &str = "model.vtkjs";
pub const MANIFEST_FILE: &str = "manifest.json";

/// The local materialization of a run's outputs.
///
/// The root directory is a deterministic function of `(job_id, run_id)`;
/// all artifact paths are derived from it. A bundle is only handed out
/// once every metric folder was unpacked and both summaries plus the
/// visualization file were written.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultBundle {
    root: PathBuf,
    display_mode: DisplayMode,
    fetched_at: Option<DateTime<Utc>>,
}

impl ResultBundle {
    pub fn new(root: PathBuf, display_mode: DisplayMode, fetched_at: Option<DateTime<Utc>>) -> Self {
        Self {
            root,
            display_mode,
            fetched_at,
        }
    }

    /// The deterministic bundle root for a run: `<cache_root>/<job_id>/<run_id>`.
    pub fn root_for(cache_root: &Path, job_id: Uuid, run_id: Uuid) -> PathBuf {
        cache_root.join(job_id.to_string()).join(run_id.to_string())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn metric_dir(&self, metric: &Metric) -> PathBuf {
        self.root.join(metric.name)
    }

    pub fn credit_summary_file(&self) -> PathBuf {
        self.root.join(CREDIT_SUMMARY_FILE)
    }

    pub fn space_summary_file(&self) -> PathBuf {
        self.root.join(SPACE_SUMMARY_FILE)
    }

    pub fn visualization_file(&self) -> PathBuf {
        self.root.join(VISUALIZATION_FILE)
    }

    pub fn manifest_file(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// Every entry that must exist on disk for the bundle to count as
    /// complete. Metric folders are listed first, files last.
    pub fn required_entries(&self) -> Vec<PathBuf> {
        let mut entries: Vec<PathBuf> = METRICS.iter().map(|m| self.metric_dir(m)).collect();
        entries.push(self.credit_summary_file());
        entries.push(self.space_summary_file());
        entries.push(self.visualization_file());
        entries.push(self.manifest_file());
        entries
    }
}

/// Written to `manifest.json` in the bundle root when a fetch completes.
/// Records what the bundle was built from so a later session can decide
/// whether the directory can be reused as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleManifest {
    pub job_id: Uuid,
    pub run_id: Uuid,
    pub recipe: RecipeIdentity,
    pub display_mode: DisplayMode,
    pub fetched_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bundle() -> ResultBundle {
        ResultBundle::new(
            PathBuf::from("data/job/run"),
            DisplayMode::Wireframe,
            None,
        )
    }

    #[test]
    fn test_metric_names_and_units() {
        let names: Vec<&str> = METRICS.iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            vec![
                "illuminance-9am",
                "illuminance-3pm",
                "pass-fail-9am",
                "pass-fail-3pm",
                "pass-fail-combined"
            ]
        );
        assert_eq!(METRICS[0].unit, "lux");
        assert_eq!(METRICS[4].unit, "");
    }

    #[test]
    fn test_root_is_deterministic_for_same_ids() {
        let job = Uuid::new_v4();
        let run = Uuid::new_v4();
        let a = ResultBundle::root_for(Path::new("data"), job, run);
        let b = ResultBundle::root_for(Path::new("data"), job, run);
        assert_eq!(a, b);
        assert!(a.ends_with(PathBuf::from(job.to_string()).join(run.to_string())));
    }

    #[test]
    fn test_roots_differ_per_run() {
        let job = Uuid::new_v4();
        let a = ResultBundle::root_for(Path::new("data"), job, Uuid::new_v4());
        let b = ResultBundle::root_for(Path::new("data"), job, Uuid::new_v4());
        assert_ne!(a, b);
    }

    #[test]
    fn test_derived_paths() {
        let bundle = sample_bundle();
        assert_eq!(
            bundle.credit_summary_file(),
            PathBuf::from("data/job/run/credit_summary.json")
        );
        assert_eq!(
            bundle.space_summary_file(),
            PathBuf::from("data/job/run/space_summary.csv")
        );
        assert_eq!(
            bundle.visualization_file(),
            PathBuf::from("data/job/run/model.vtkjs")
        );
        assert_eq!(
            bundle.metric_dir(&METRICS[2]),
            PathBuf::from("data/job/run/pass-fail-9am")
        );
    }

    #[test]
    fn test_required_entries_cover_all_artifacts() {
        let bundle = sample_bundle();
        let entries = bundle.required_entries();
        // five metric folders + credit summary + space summary + viz + manifest
        assert_eq!(entries.len(), METRICS.len() + 4);
        assert!(entries.contains(&bundle.manifest_file()));
    }
}
