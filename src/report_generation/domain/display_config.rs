use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::result_bundle::{Metric, METRICS};

/// How the merged model is rendered in the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Shaded,
    Surface,
    SurfaceWithEdges,
    Wireframe,
    Points,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Shaded => "shaded",
            DisplayMode::Surface => "surface",
            DisplayMode::SurfaceWithEdges => "surfacewithedges",
            DisplayMode::Wireframe => "wireframe",
            DisplayMode::Points => "points",
        }
    }
}

impl Default for DisplayMode {
    fn default() -> Self {
        DisplayMode::Wireframe
    }
}

impl std::str::FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shaded" => Ok(DisplayMode::Shaded),
            "surface" => Ok(DisplayMode::Surface),
            "surfacewithedges" => Ok(DisplayMode::SurfaceWithEdges),
            "wireframe" => Ok(DisplayMode::Wireframe),
            "points" => Ok(DisplayMode::Points),
            _ => Err(format!(
                "Invalid display mode: {}. Please specify one of shaded, surface, surfacewithedges, wireframe, points",
                s
            )),
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One result overlay on the model grids: where the unpacked data lives
/// and how it is labelled in the viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridOverlay {
    pub identifier: String,
    pub object_type: String,
    pub unit: String,
    pub path: PathBuf,
    pub hide: bool,
}

impl GridOverlay {
    fn for_metric(metric: &Metric, bundle_root: &Path) -> Self {
        Self {
            identifier: metric.label.to_string(),
            object_type: "grid".to_string(),
            unit: metric.unit.to_string(),
            path: bundle_root.join(metric.name),
            hide: false,
        }
    }
}

/// The display configuration handed to the model merge: the base model's
/// display mode plus one overlay per metric result folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub display_mode: DisplayMode,
    pub overlays: Vec<GridOverlay>,
}

impl DisplayConfig {
    /// Builds the LEED overlay set: all five metric folders under the
    /// bundle root, rendered over the base model.
    pub fn leed_overlays(bundle_root: &Path, display_mode: DisplayMode) -> Self {
        let overlays = METRICS
            .iter()
            .map(|metric| GridOverlay::for_metric(metric, bundle_root))
            .collect();
        Self {
            display_mode,
            overlays,
        }
    }
}
