//! Point type and rounding helpers.

use nalgebra::Vector3;

use super::cfg::DECIMALS;

/// A point in R³; electrode positions live on the unit sphere.
pub type Point3 = Vector3<f64>;

/// Round every coordinate to `decimals` places (ties to even) and fold `-0.0`
/// into `0.0`.
#[inline]
pub fn round_point(p: Point3, decimals: i32) -> Point3 {
    let s = 10f64.powi(decimals);
    p.map(|c| (c * s).round_ties_even() / s + 0.0)
}

/// `round_point` at the crate-wide precision.
#[inline]
pub(crate) fn round_default(p: Point3) -> Point3 {
    round_point(p, DECIMALS)
}
