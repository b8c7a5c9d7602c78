#![doc = include_str!("../README.md")]

// Core geometry
pub mod contiguity;
pub mod field;
pub mod roi;
pub mod scanfield;
pub mod slices;

// Placement on the page and helpers
pub mod config;
pub mod image;
pub mod interp;
pub mod layout;

// --- High-level re-exports -------------------------------------------------

pub use crate::contiguity::{ContiguityOptions, Position};
pub use crate::field::{Chunk, Field, JoinError, NO_OFFSET, NO_ROI};
pub use crate::layout::{build_fields, join_contiguous_fields, LayoutError, PageLayout};
pub use crate::roi::{Roi, RoiError, RoiInfo};
pub use crate::scanfield::Scanfield;
pub use crate::slices::PixelSlice;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use mroi_fields::prelude::*;
///
/// let top = Scanfield { height_px: 10, width_px: 20, height_deg: 1.0, width_deg: 2.0, ..Default::default() };
/// let bottom = Scanfield { y_center_deg: 1.0, ..top };
///
/// let mut field = top.as_field();
/// assert_eq!(field.join_with(&bottom.as_field()), Ok(Position::Below));
/// assert_eq!(field.geometry.height_px, 20);
/// ```
pub mod prelude {
    pub use crate::{ContiguityOptions, Field, PageLayout, Position, Roi, Scanfield};
}
