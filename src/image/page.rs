use super::traits::ImageView;

/// Borrowed view over one raw page (all ROIs of one depth, fly-to lines included).
#[derive(Clone, Debug)]
pub struct PageView<'a, T> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // elements between rows
    pub data: &'a [T],
}

impl<'a, T: Copy> PageView<'a, T> {
    /// Tightly packed view; `None` when `data` is shorter than `w * h`.
    pub fn new(w: usize, h: usize, data: &'a [T]) -> Option<Self> {
        (data.len() >= w * h).then_some(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[y * self.stride + x]
    }
}

impl<'a, T: Copy> ImageView for PageView<'a, T> {
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
