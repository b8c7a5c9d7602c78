use super::Field;
use crate::image::{Grid, ImageView, ImageViewMut};

/// ROI mask value for pixels no chunk covers.
pub const NO_ROI: i32 = -1;
/// Offset mask value for pixels no chunk covers.
pub const NO_OFFSET: f64 = -1.0;

impl Field {
    /// Per-pixel contributing ROI. Later chunks overwrite earlier ones.
    ///
    /// Mask values are `i32` so that [`NO_ROI`] fits; ROI ids above
    /// `i32::MAX` saturate to `i32::MAX`.
    pub fn roi_mask(&self) -> Grid<i32> {
        let mut mask = Grid::filled(self.width_px(), self.height_px(), NO_ROI);
        for chunk in self.chunks() {
            let id = i32::try_from(chunk.roi_id).unwrap_or(i32::MAX);
            mask.fill_region(chunk.placement_y, chunk.placement_x, id);
        }
        mask
    }

    /// Per-pixel acquisition time offset in seconds.
    pub fn offset_mask(&self) -> Grid<f64> {
        let mut mask = Grid::filled(self.width_px(), self.height_px(), NO_OFFSET);
        for chunk in self.chunks() {
            mask.fill_region(chunk.placement_y, chunk.placement_x, chunk.offset);
        }
        mask
    }

    /// Cut every chunk out of `page` and paste it at its placement.
    ///
    /// Pixels no chunk covers keep `T::default()`. Returns `None` if a source
    /// slice reaches outside the page.
    pub fn assemble<I>(&self, page: &I) -> Option<Grid<I::Pixel>>
    where
        I: ImageView,
        I::Pixel: Default,
    {
        let mut out = Grid::filled(self.width_px(), self.height_px(), I::Pixel::default());
        for chunk in self.chunks() {
            if chunk.source_y.stop > page.height() || chunk.source_x.stop > page.width() {
                return None;
            }
            let rows = chunk.source_y.len().min(chunk.placement_y.len());
            let cols = chunk.source_x.len().min(chunk.placement_x.len());
            for r in 0..rows {
                let dst_y = chunk.placement_y.start + r;
                if dst_y >= out.h {
                    break;
                }
                let src = &page.row(chunk.source_y.start + r)[chunk.source_x.range()];
                let x0 = chunk.placement_x.start.min(out.w);
                let n = cols.min(out.w - x0);
                out.row_mut(dst_y)[x0..x0 + n].copy_from_slice(&src[..n]);
            }
        }
        Some(out)
    }
}
