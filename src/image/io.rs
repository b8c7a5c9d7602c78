//! I/O helpers for field masks and JSON reports.
//!
//! - `save_roi_mask_png`: write an ROI mask as a grayscale PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{Grid, ImageView};
use crate::field::NO_ROI;
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Save an ROI mask as an 8-bit PNG. Pixels without an ROI are black; ROI
/// ids are spread evenly over the remaining gray levels.
pub fn save_roi_mask_png(mask: &Grid<i32>, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let max_id = mask.data.iter().copied().max().unwrap_or(NO_ROI).max(0);
    let step = 255.0 / (max_id as f32 + 1.0);
    let mut out = GrayImage::new(mask.w as u32, mask.h as u32);
    for (y, row) in mask.rows().enumerate() {
        for (x, &id) in row.iter().enumerate() {
            let v = if id == NO_ROI {
                0.0
            } else {
                ((id as f32 + 1.0) * step).clamp(0.0, 255.0)
            };
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
