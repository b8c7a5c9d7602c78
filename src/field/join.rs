use super::Field;
use crate::contiguity::{classify, ContiguityOptions, Position};
use crate::slices::PixelSlice;
use log::debug;

/// Reasons a join is refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinError {
    /// The fields do not share an edge; the receiver was left untouched.
    NotContiguous,
}

impl std::fmt::Display for JoinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinError::NotContiguous => write!(f, "fields are not contiguous"),
        }
    }
}

impl std::error::Error for JoinError {}

impl Field {
    /// Where `other` lies relative to this field, with default tolerances.
    pub fn contiguity(&self, other: &Field) -> Position {
        self.contiguity_with(other, &ContiguityOptions::default())
    }

    pub fn contiguity_with(&self, other: &Field, opts: &ContiguityOptions) -> Position {
        classify(&self.geometry, &other.geometry, opts)
    }

    pub fn is_contiguous_to(&self, other: &Field) -> bool {
        self.contiguity(other) != Position::NonContiguous
    }

    pub fn is_contiguous_to_with(&self, other: &Field, opts: &ContiguityOptions) -> bool {
        self.contiguity_with(other, opts) != Position::NonContiguous
    }

    /// Absorb `other` into this field. `other` is not modified.
    ///
    /// Returns the position `other` had relative to this field before the
    /// join.
    pub fn join_with(&mut self, other: &Field) -> Result<Position, JoinError> {
        self.join_with_options(other, &ContiguityOptions::default())
    }

    pub fn join_with_options(
        &mut self,
        other: &Field,
        opts: &ContiguityOptions,
    ) -> Result<Position, JoinError> {
        let position = self.contiguity_with(other, opts);
        match position {
            Position::NonContiguous => return Err(JoinError::NotContiguous),
            Position::Above => self.stack_vertical(other, true),
            Position::Below => self.stack_vertical(other, false),
            Position::Left => self.stack_horizontal(other, true),
            Position::Right => self.stack_horizontal(other, false),
        }

        // Source slices, ids and offsets describe where data comes from and
        // never move.
        self.source_y_slices.extend_from_slice(&other.source_y_slices);
        self.source_x_slices.extend_from_slice(&other.source_x_slices);
        self.roi_ids.extend_from_slice(&other.roi_ids);
        self.offsets.extend_from_slice(&other.offsets);

        debug!(
            "Field::join_with slice={} position={:?} -> {}x{} px, {} chunks",
            self.slice_id,
            position,
            self.geometry.height_px,
            self.geometry.width_px,
            self.num_chunks()
        );
        Ok(position)
    }

    fn stack_vertical(&mut self, other: &Field, other_on_top: bool) {
        let g = &mut self.geometry;
        let o = &other.geometry;
        if other_on_top {
            g.y_center_deg = o.y_center_deg + 0.5 * g.height_deg;
            shift_all(&mut self.placement_y_slices, o.height_px);
            self.placement_y_slices
                .extend_from_slice(&other.placement_y_slices);
        } else {
            g.y_center_deg += 0.5 * o.height_deg;
            let by = g.height_px;
            self.placement_y_slices
                .extend(other.placement_y_slices.iter().map(|s| s.shifted(by)));
        }
        g.height_px += o.height_px;
        g.height_deg += o.height_deg;
        self.placement_x_slices
            .extend_from_slice(&other.placement_x_slices);
    }

    fn stack_horizontal(&mut self, other: &Field, other_on_left: bool) {
        let g = &mut self.geometry;
        let o = &other.geometry;
        if other_on_left {
            g.x_center_deg = o.x_center_deg + 0.5 * g.width_deg;
            shift_all(&mut self.placement_x_slices, o.width_px);
            self.placement_x_slices
                .extend_from_slice(&other.placement_x_slices);
        } else {
            g.x_center_deg += 0.5 * o.width_deg;
            let by = g.width_px;
            self.placement_x_slices
                .extend(other.placement_x_slices.iter().map(|s| s.shifted(by)));
        }
        g.width_px += o.width_px;
        g.width_deg += o.width_deg;
        self.placement_y_slices
            .extend_from_slice(&other.placement_y_slices);
    }
}

fn shift_all(slices: &mut [PixelSlice], by: usize) {
    for s in slices.iter_mut() {
        *s = s.shifted(by);
    }
}
