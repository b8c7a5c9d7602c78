//! Configuration of the `field_layout` tool.
//!
//! ```json
//! {
//!   "input": "rois.json",
//!   "depths": [0, 10, 20],
//!   "layout": { "page_height": 1024, "fly_to_lines": 16, "line_period_s": 6.3e-5, "join_contiguous": true },
//!   "contiguity": { "verify_right_distance": true },
//!   "output": { "json_out": "out/fields.json", "mask_dir": "out/masks" }
//! }
//! ```
//!
//! `input` holds a JSON array of ROI objects as found in the acquisition
//! header (`discretePlaneMode`, `zs`, `scanfields`).
use crate::contiguity::ContiguityOptions;
use crate::layout::PageLayout;
use crate::roi::{Roi, RoiInfo};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    pub json_out: Option<PathBuf>,
    pub mask_dir: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FieldLayoutConfig {
    pub input: PathBuf,
    pub depths: Vec<f64>,
    #[serde(default)]
    pub layout: PageLayout,
    #[serde(default)]
    pub contiguity: ContiguityOptions,
    #[serde(default)]
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<FieldLayoutConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

/// Load and validate the ROI definitions listed in `path`.
pub fn load_rois(path: &Path) -> Result<Vec<Roi>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read ROIs {}: {e}", path.display()))?;
    let infos: Vec<RoiInfo> = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse ROIs {}: {e}", path.display()))?;
    infos
        .into_iter()
        .enumerate()
        .map(|(i, info)| {
            Roi::new(info).map_err(|e| format!("Invalid ROI {i} in {}: {e}", path.display()))
        })
        .collect()
}
