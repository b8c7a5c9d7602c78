//! Placement of per-ROI fields on the raw page.
//!
//! Within one page (one depth slice) the scanner visits ROIs in order and
//! records each ROI as a band of lines, separated by fly-to lines while the
//! mirrors travel to the next ROI:
//!
//! ```text
//! line 0           ┌──────────────┐
//!                  │ ROI 0        │ height_px(0)
//!                  ├──────────────┤
//!                  │ fly-to       │ fly_to_lines
//!                  ├──────────────┤
//!                  │ ROI 1        │ height_px(1)
//!                  └──────────────┘
//! ```
//!
//! [`build_fields`] turns that into one [`Field`] per (depth, ROI) and can
//! then merge the fields that touch in scan-angle space.

use crate::contiguity::ContiguityOptions;
use crate::field::Field;
use crate::roi::Roi;
use log::debug;
use serde::{Deserialize, Serialize};

/// Page geometry and timing of the acquisition.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PageLayout {
    /// Lines per page; `0` disables the check.
    pub page_height: usize,
    /// Pixels per line; `0` disables the check.
    pub page_width: usize,
    /// Lines spent travelling between consecutive ROIs.
    pub fly_to_lines: usize,
    /// Seconds per scanned line, used for chunk time offsets.
    pub line_period_s: f64,
    /// Merge contiguous fields within each depth slice. Off unless asked.
    pub join_contiguous: bool,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_height: 0,
            page_width: 0,
            fly_to_lines: 0,
            line_period_s: 0.0,
            join_contiguous: false,
        }
    }
}

/// Reasons a set of ROIs does not fit the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutError {
    FieldExceedsPage {
        slice_id: usize,
        roi_id: usize,
        needed: usize,
        available: usize,
    },
    FieldTooWide {
        slice_id: usize,
        roi_id: usize,
        width: usize,
        available: usize,
    },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::FieldExceedsPage {
                slice_id,
                roi_id,
                needed,
                available,
            } => write!(
                f,
                "ROI {roi_id} in slice {slice_id} needs {needed} lines, page has {available}"
            ),
            LayoutError::FieldTooWide {
                slice_id,
                roi_id,
                width,
                available,
            } => write!(
                f,
                "ROI {roi_id} in slice {slice_id} is {width} px wide, page has {available}"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Build the fields of every ROI at every requested depth.
///
/// `slice_id` is the index into `depths`, `roi_id` the index into `rois`.
/// ROIs with no field at a depth are skipped and take no page lines.
pub fn build_fields(
    rois: &[Roi],
    depths: &[f64],
    layout: &PageLayout,
    contiguity: &ContiguityOptions,
) -> Result<Vec<Field>, LayoutError> {
    let mut fields = Vec::new();
    for (slice_id, &depth) in depths.iter().enumerate() {
        let mut next_line = 0usize;
        for (roi_id, roi) in rois.iter().enumerate() {
            let Some(field) = roi.get_field_at(depth) else {
                continue;
            };
            let needed = next_line + field.height_px();
            if layout.page_height > 0 && needed > layout.page_height {
                return Err(LayoutError::FieldExceedsPage {
                    slice_id,
                    roi_id,
                    needed,
                    available: layout.page_height,
                });
            }
            if layout.page_width > 0 && field.width_px() > layout.page_width {
                return Err(LayoutError::FieldTooWide {
                    slice_id,
                    roi_id,
                    width: field.width_px(),
                    available: layout.page_width,
                });
            }
            let offset = next_line as f64 * layout.line_period_s;
            fields.push(field.at_page_position(slice_id, roi_id, next_line, offset));
            next_line = needed + layout.fly_to_lines;
        }
    }
    debug!(
        "build_fields: {} fields over {} slices from {} ROIs",
        fields.len(),
        depths.len(),
        rois.len()
    );
    if layout.join_contiguous {
        let joins = join_contiguous_fields(&mut fields, contiguity);
        debug!("build_fields: {joins} joins -> {} fields", fields.len());
    }
    Ok(fields)
}

/// Merge contiguous fields of the same slice until no pair joins.
///
/// The earlier field of a pair absorbs the later one. Returns the number of
/// joins performed.
pub fn join_contiguous_fields(fields: &mut Vec<Field>, contiguity: &ContiguityOptions) -> usize {
    let mut joins = 0;
    while let Some((i, j)) = find_joinable_pair(fields, contiguity) {
        let (head, tail) = fields.split_at_mut(j);
        if head[i].join_with_options(&tail[0], contiguity).is_err() {
            break;
        }
        fields.remove(j);
        joins += 1;
    }
    joins
}

fn find_joinable_pair(fields: &[Field], contiguity: &ContiguityOptions) -> Option<(usize, usize)> {
    for i in 0..fields.len() {
        for j in i + 1..fields.len() {
            if fields[i].slice_id == fields[j].slice_id
                && fields[i].is_contiguous_to_with(&fields[j], contiguity)
            {
                return Some((i, j));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanfield::Scanfield;

    fn field(slice_id: usize, roi_id: usize, y: f64, x: f64) -> Field {
        Scanfield {
            height_px: 8,
            width_px: 8,
            depth: 0.0,
            y_center_deg: y,
            x_center_deg: x,
            height_deg: 1.0,
            width_deg: 1.0,
        }
        .as_field()
        .at_page_position(slice_id, roi_id, roi_id * 10, 0.0)
    }

    #[test]
    fn joins_chains_within_a_slice_only() {
        let mut fields = vec![
            field(0, 0, 0.0, 0.0),
            field(0, 1, 1.0, 0.0),
            field(0, 2, 2.0, 0.0),
            field(1, 0, 3.0, 0.0),
        ];
        let joins = join_contiguous_fields(&mut fields, &ContiguityOptions::strict());
        assert_eq!(joins, 2);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].roi_ids, vec![0, 1, 2]);
        assert_eq!(fields[0].height_px(), 24);
        assert_eq!(fields[1].slice_id, 1);
        assert!(!fields[1].has_contiguous_subfields());
    }

    #[test]
    fn strict_contiguity_keeps_separate_rois_apart() {
        let mut fields = vec![field(0, 0, 0.0, 0.0), field(0, 1, 0.0, 5.0)];
        assert_eq!(
            join_contiguous_fields(&mut fields, &ContiguityOptions::strict()),
            0
        );
        // Default options fall back to `Right` for equal-height fields.
        assert_eq!(
            join_contiguous_fields(&mut fields, &ContiguityOptions::default()),
            1
        );
        assert_eq!(fields.len(), 1);
    }
}
