//! Fields: scanfield geometry plus the chunk bookkeeping needed to cut a
//! field out of a raw page and paste it into an assembled output.
//!
//! A field built from one ROI has exactly one chunk. Joining contiguous
//! fields (see [`Field::join_with`]) appends the other field's chunks, so a
//! merged field carries one entry per contributing strip in every list:
//!
//! ```text
//! output[placement_y[i], placement_x[i]] = page[source_y[i], source_x[i]]
//! ```

mod join;
mod paint;

pub use join::JoinError;
pub use paint::{NO_OFFSET, NO_ROI};

use crate::scanfield::Scanfield;
use crate::slices::PixelSlice;
use serde::Serialize;

/// Two-dimensional imaging plane, possibly merged from several ROIs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Field {
    /// Geometry of the (merged) field; updated in place by joins.
    pub geometry: Scanfield,
    /// Where each chunk is read from on the page, vertically.
    pub source_y_slices: Vec<PixelSlice>,
    /// Where each chunk is read from on the page, horizontally.
    pub source_x_slices: Vec<PixelSlice>,
    /// Where each chunk lands in the assembled field, vertically.
    pub placement_y_slices: Vec<PixelSlice>,
    /// Where each chunk lands in the assembled field, horizontally.
    pub placement_x_slices: Vec<PixelSlice>,
    /// Index of the depth slice (z-plane) this field belongs to.
    pub slice_id: usize,
    /// Contributing ROI per chunk.
    pub roi_ids: Vec<usize>,
    /// Acquisition time offset in seconds per chunk.
    pub offsets: Vec<f64>,
}

/// One source/placement pair of a field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chunk {
    pub source_y: PixelSlice,
    pub source_x: PixelSlice,
    pub placement_y: PixelSlice,
    pub placement_x: PixelSlice,
    pub roi_id: usize,
    pub offset: f64,
}

impl Field {
    /// Single-chunk field read from the top-left corner of the page, ROI 0,
    /// slice 0, zero offset. Use [`Field::at_page_position`] to place it.
    pub fn new(geometry: Scanfield) -> Self {
        let ys = PixelSlice::from_len(geometry.height_px);
        let xs = PixelSlice::from_len(geometry.width_px);
        Self {
            geometry,
            source_y_slices: vec![ys],
            source_x_slices: vec![xs],
            placement_y_slices: vec![ys],
            placement_x_slices: vec![xs],
            slice_id: 0,
            roi_ids: vec![0],
            offsets: vec![0.0],
        }
    }

    /// Reset to a single chunk that starts at page line `first_line`.
    pub fn at_page_position(
        self,
        slice_id: usize,
        roi_id: usize,
        first_line: usize,
        offset: f64,
    ) -> Self {
        let h = self.geometry.height_px;
        let w = self.geometry.width_px;
        Self {
            source_y_slices: vec![PixelSlice::new(first_line, first_line + h)],
            source_x_slices: vec![PixelSlice::from_len(w)],
            placement_y_slices: vec![PixelSlice::from_len(h)],
            placement_x_slices: vec![PixelSlice::from_len(w)],
            slice_id,
            roi_ids: vec![roi_id],
            offsets: vec![offset],
            ..self
        }
    }

    #[inline]
    pub fn height_px(&self) -> usize {
        self.geometry.height_px
    }

    #[inline]
    pub fn width_px(&self) -> usize {
        self.geometry.width_px
    }

    #[inline]
    pub fn depth(&self) -> f64 {
        self.geometry.depth
    }

    pub fn num_chunks(&self) -> usize {
        self.source_x_slices.len()
    }

    /// Whether this field was formed by joining contiguous subfields.
    pub fn has_contiguous_subfields(&self) -> bool {
        self.num_chunks() > 1
    }

    /// All per-chunk lists have the same length.
    pub fn is_consistent(&self) -> bool {
        let n = self.source_x_slices.len();
        self.source_y_slices.len() == n
            && self.placement_y_slices.len() == n
            && self.placement_x_slices.len() == n
            && self.roi_ids.len() == n
            && self.offsets.len() == n
    }

    pub fn chunk(&self, i: usize) -> Option<Chunk> {
        Some(Chunk {
            source_y: *self.source_y_slices.get(i)?,
            source_x: *self.source_x_slices.get(i)?,
            placement_y: *self.placement_y_slices.get(i)?,
            placement_x: *self.placement_x_slices.get(i)?,
            roi_id: *self.roi_ids.get(i)?,
            offset: *self.offsets.get(i)?,
        })
    }

    /// Chunks in paint order.
    pub fn chunks(&self) -> impl Iterator<Item = Chunk> + '_ {
        (0..self.num_chunks()).filter_map(move |i| self.chunk(i))
    }
}

impl From<Scanfield> for Field {
    fn from(geometry: Scanfield) -> Self {
        Self::new(geometry)
    }
}
