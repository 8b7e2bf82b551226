use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::json;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::ports::outbound::ModelMerger;
use crate::report_generation::domain::DisplayConfig;
use crate::shared::error::ReportError;
use crate::shared::Result;

/// VtkJsSceneWriter adapter producing the `.vtkjs` visualization file.
///
/// A `.vtkjs` scene is a zip container with an `index.json` scene
/// description next to the data it references. The writer embeds the
/// downloaded model description verbatim as `model.json` and lists one
/// scene layer per result overlay, so the viewer can color the grids by
/// any of the five metrics.
pub struct VtkJsSceneWriter;

impl VtkJsSceneWriter {
    pub fn new() -> Self {
        Self
    }

    fn scene_index(model_entry: &str, config: &DisplayConfig) -> serde_json::Value {
        let mut layers = vec![json!({
            "name": "Model",
            "source": model_entry,
            "property": {
                "representation": config.display_mode.as_str(),
            },
        })];

        for overlay in &config.overlays {
            // The viewer resolves overlay data relative to the bundle
            // root, so only the folder name goes into the scene.
            let folder = overlay
                .path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            layers.push(json!({
                "name": overlay.identifier,
                "type": overlay.object_type,
                "unit": overlay.unit,
                "source": folder,
                "hide": overlay.hide,
            }));
        }

        json!({
            "version": "1.0",
            "background": [1.0, 1.0, 1.0],
            "scene": layers,
        })
    }
}

impl Default for VtkJsSceneWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelMerger for VtkJsSceneWriter {
    fn merge(
        &self,
        model: &serde_json::Value,
        config: &DisplayConfig,
        output_path: &Path,
    ) -> Result<PathBuf> {
        let write_err = |details: String| ReportError::FileWrite {
            path: output_path.to_path_buf(),
            details,
        };

        let file = fs::File::create(output_path).map_err(|e| write_err(e.to_string()))?;
        let mut container = ZipWriter::new(file);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let index = Self::scene_index("model.json", config);
        container
            .start_file("index.json", options)
            .map_err(|e| write_err(e.to_string()))?;
        container
            .write_all(&serde_json::to_vec(&index).map_err(|e| write_err(e.to_string()))?)
            .map_err(|e| write_err(e.to_string()))?;

        container
            .start_file("model.json", options)
            .map_err(|e| write_err(e.to_string()))?;
        container
            .write_all(&serde_json::to_vec(model).map_err(|e| write_err(e.to_string()))?)
            .map_err(|e| write_err(e.to_string()))?;

        container.finish().map_err(|e| write_err(e.to_string()))?;
        Ok(output_path.to_path_buf())
    }
}
