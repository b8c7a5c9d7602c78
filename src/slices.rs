//! Half-open pixel ranges used to cut pages and paste chunks.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Pixel range `[start, stop)` along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelSlice {
    pub start: usize,
    pub stop: usize,
}

impl PixelSlice {
    #[inline]
    pub fn new(start: usize, stop: usize) -> Self {
        debug_assert!(start <= stop, "slice start {start} past stop {stop}");
        Self { start, stop }
    }

    /// Slice `[0, len)`.
    #[inline]
    pub fn from_len(len: usize) -> Self {
        Self::new(0, len)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stop.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Same extent moved `by` pixels towards larger indices.
    #[inline]
    pub fn shifted(&self, by: usize) -> Self {
        Self {
            start: self.start + by,
            stop: self.stop + by,
        }
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.stop
    }
}

impl From<Range<usize>> for PixelSlice {
    fn from(r: Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}
