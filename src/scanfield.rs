//! Geometry of one ROI at one fixed depth.
//!
//! Sizes are carried twice: in pixels (what the page holds) and in
//! scan-angle degrees (where the mirrors pointed). Degree geometry decides
//! adjacency; pixel geometry decides slicing.

use crate::field::Field;
use serde::{Deserialize, Serialize};

/// Rectangular scan region at a single depth.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Scanfield {
    /// Height in pixels (lines on the page).
    pub height_px: usize,
    /// Width in pixels.
    pub width_px: usize,
    /// Depth in microns relative to the reference z = 0 plane.
    pub depth: f64,
    /// Vertical centre in scan-angle degrees.
    pub y_center_deg: f64,
    /// Horizontal centre in scan-angle degrees.
    pub x_center_deg: f64,
    /// Vertical extent in scan-angle degrees.
    pub height_deg: f64,
    /// Horizontal extent in scan-angle degrees.
    pub width_deg: f64,
}

impl Scanfield {
    /// Fresh single-chunk field covering this scanfield.
    pub fn as_field(&self) -> Field {
        Field::new(*self)
    }
}
