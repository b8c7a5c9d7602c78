//! Adjacency classification between two fields in scan-angle space.
//!
//! Two fields are contiguous when they share a full edge: equal widths and
//! stacked centres for vertical neighbours, equal heights and side-by-side
//! centres for horizontal ones. Comparisons use a relative/absolute
//! tolerance since the degree values come from floating-point headers.
//! Rotation is never consulted, so rotated neighbours classify as
//! [`Position::NonContiguous`].

use crate::scanfield::Scanfield;
use serde::{Deserialize, Serialize};

/// Where the second field sits relative to the first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    NonContiguous,
    Above,
    Below,
    Left,
    Right,
}

impl Position {
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Position::Above | Position::Below)
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Position::Left | Position::Right)
    }
}

/// Tolerances used by [`classify`].
///
/// - `rtol`, `atol`: `|a - b| <= atol + rtol * |b|`.
/// - `verify_right_distance`: when `false`, equal-height fields that are not
///   to the left are reported as `Right` without checking the distance.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ContiguityOptions {
    pub rtol: f64,
    pub atol: f64,
    pub verify_right_distance: bool,
}

impl Default for ContiguityOptions {
    fn default() -> Self {
        Self {
            rtol: 1e-5,
            atol: 1e-8,
            verify_right_distance: false,
        }
    }
}

impl ContiguityOptions {
    /// Same tolerances, with the right-side distance also required.
    pub fn strict() -> Self {
        Self {
            verify_right_distance: true,
            ..Self::default()
        }
    }
}

/// Approximate equality, asymmetric in `b` like the usual `isclose`.
#[inline]
pub fn is_close(a: f64, b: f64, opts: &ContiguityOptions) -> bool {
    (a - b).abs() <= opts.atol + opts.rtol * b.abs()
}

/// Classify where `other` lies with respect to `this`.
///
/// The vertical test runs first and wins; the horizontal test is only
/// consulted when no vertical relation was found.
pub fn classify(this: &Scanfield, other: &Scanfield, opts: &ContiguityOptions) -> Position {
    if is_close(this.width_deg, other.width_deg, opts) {
        let expected = 0.5 * this.height_deg + 0.5 * other.height_deg;
        if is_close(this.y_center_deg, other.y_center_deg + expected, opts) {
            return Position::Above;
        }
        if is_close(other.y_center_deg, this.y_center_deg + expected, opts) {
            return Position::Below;
        }
    }
    if is_close(this.height_deg, other.height_deg, opts) {
        let expected = 0.5 * this.width_deg + 0.5 * other.width_deg;
        if is_close(this.x_center_deg, other.x_center_deg + expected, opts) {
            return Position::Left;
        }
        if !opts.verify_right_distance
            || is_close(other.x_center_deg, this.x_center_deg + expected, opts)
        {
            return Position::Right;
        }
    }
    Position::NonContiguous
}
