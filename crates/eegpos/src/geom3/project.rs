//! Stereographic projection onto the plane tangent at the vertex.

use nalgebra::Vector2;

use super::types::Point3;

/// Projection point at the south pole of the unit sphere.
pub const STEREO_SCALE: f64 = 1.0;

/// Project `p` from `(0, 0, -scale)` onto the plane `z = 1`: `(x, y) / (scale + z)`.
///
/// For the unit sphere, `Cz = (0,0,1)` lands on the origin and equator points
/// land on the unit circle.
#[inline]
pub fn stereographic(p: Point3, scale: f64) -> Vector2<f64> {
    let mu = 1.0 / (scale + p.z);
    Vector2::new(p.x * mu, p.y * mu)
}
