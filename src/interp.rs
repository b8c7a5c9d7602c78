//! Piecewise-linear interpolation helpers for depth-indexed attributes.

/// Linear interpolation of `fp` sampled at the increasing abscissae `xp`.
///
/// Returns `None` when `x` lies outside `[xp[0], xp[n - 1]]`, when the slices
/// are empty, or when their lengths differ. Exact hits on a sample return
/// that sample's value.
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> Option<f64> {
    if xp.is_empty() || xp.len() != fp.len() || !x.is_finite() {
        return None;
    }
    let idx = xp.partition_point(|&v| v <= x);
    if idx == 0 {
        return None;
    }
    if idx == xp.len() {
        let last = xp.len() - 1;
        return (x == xp[last]).then_some(fp[last]);
    }
    let (x0, x1) = (xp[idx - 1], xp[idx]);
    let (y0, y1) = (fp[idx - 1], fp[idx]);
    let t = (x - x0) / (x1 - x0);
    Some(y0 + t * (y1 - y0))
}

/// Round to the nearest even integer (`round(v / 2) * 2`, ties to even on
/// the halved value). Negative inputs clamp to zero.
#[inline]
pub fn round_to_even(v: f64) -> usize {
    let r = (v / 2.0).round_ties_even() * 2.0;
    if r.is_finite() && r > 0.0 {
        r as usize
    } else {
        0
    }
}

/// True when every abscissa is strictly larger than the previous one.
pub fn is_strictly_increasing(xs: &[f64]) -> bool {
    xs.windows(2).all(|w| w[0] < w[1])
}
