//! Owned single-channel grid in row-major layout (stride == width).
//!
//! Backs field masks and assembled fields. Indexing is `(x, y)` with `y`
//! counting lines from the top of the field.
use crate::slices::PixelSlice;

#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    /// Width in pixels
    pub w: usize,
    /// Height in pixels
    pub h: usize,
    /// Number of elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Construct a `w × h` grid with every element set to `fill`.
    pub fn filled(w: usize, h: usize, fill: T) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![fill; w * h],
        }
    }
    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.idx(x, y)]
    }
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Set every element of the `ys × xs` block to `v`, clipped to the grid.
    pub fn fill_region(&mut self, ys: PixelSlice, xs: PixelSlice, v: T) {
        let y1 = ys.stop.min(self.h);
        let x1 = xs.stop.min(self.w);
        for y in ys.start.min(y1)..y1 {
            let start = y * self.stride;
            self.data[start + xs.start.min(x1)..start + x1].fill(v);
        }
    }

    /// Count elements equal to `v`.
    pub fn count(&self, v: T) -> usize
    where
        T: PartialEq,
    {
        self.data.iter().filter(|&&d| d == v).count()
    }
}

impl<T: Copy> crate::image::traits::ImageView for Grid<T> {
    type Pixel = T;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[T] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl<T: Copy> crate::image::traits::ImageViewMut for Grid<T> {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;
    use crate::slices::PixelSlice;

    #[test]
    fn fill_region_is_clipped() {
        let mut g = Grid::filled(4, 3, -1i32);
        g.fill_region(PixelSlice::new(1, 5), PixelSlice::new(2, 9), 7);
        assert_eq!(g.count(7), 4);
        assert_eq!(g.get(1, 1), -1);
        assert_eq!(g.get(3, 2), 7);
        assert_eq!(g.get(2, 0), -1);
    }
}
