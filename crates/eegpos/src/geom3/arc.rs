//! Points at a fraction along the circle through three points on a sphere.
//!
//! Model
//! - Three distinct, non-collinear points on a sphere centered at the origin
//!   span a plane; its intersection with the sphere is a circle with center
//!   `c = (n·p1) n`, where `n` is the unit plane normal.
//! - A 2D frame in that plane has `u = p1 − c` (radius-length, not unit) and
//!   `v = n × u`, oriented so that `p2` lies on the positive `v` side.
//! - `theta ∈ [0, 2π)` is the angle of `p3` in that frame. Fraction `f` maps to
//!   the angle `f·theta`, so 0 ↦ p1, 1 ↦ p3, and 0.5 ↦ p2 when `p2` bisects
//!   the arc. Fractions outside [0, 1] keep going around the full circle.
//!
//! References
//! - Oostenveld & Praamstra (2001), the 10-05 system:
//!   https://doi.org/10.1016/S1388-2457(00)00527-7
//! - Code cross-refs: `contour::expand_contour`, `contour::extend_below_equator`

use std::f64::consts::TAU;
use std::fmt;

use super::cfg::NORMAL_EPS;
use super::types::{round_default, Point3};

/// The three points do not define a circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArcError {
    /// Coincident or collinear input; carries the length of the raw normal.
    Degenerate { normal_norm: f64 },
}

impl fmt::Display for ArcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArcError::Degenerate { normal_norm } => write!(
                f,
                "points are either collinear or share the same coordinates (|n| = {normal_norm:e})"
            ),
        }
    }
}

impl std::error::Error for ArcError {}

/// Circle through `p1`, `p2`, `p3` with the angular span from `p1` to `p3`.
///
/// Invariants:
/// - `u` and `v` are orthogonal, both of length equal to the circle radius.
/// - `theta ∈ [0, 2π)`, measured in the rotational sense `p1 → p2`.
#[derive(Clone, Copy, Debug)]
pub struct ArcFrame {
    pub center: Point3,
    pub u: Point3,
    pub v: Point3,
    pub theta: f64,
}

impl ArcFrame {
    pub fn new(p1: Point3, p2: Point3, p3: Point3) -> Result<Self, ArcError> {
        let n = (p2 - p1).cross(&(p3 - p1));
        let norm = n.norm();
        // |n| = |a||b| sin∠(a, b); compare the sine so the test is scale-free.
        let scale = (p2 - p1).norm() * (p3 - p1).norm();
        if !norm.is_finite() || norm <= NORMAL_EPS * scale {
            return Err(ArcError::Degenerate { normal_norm: norm });
        }
        let n = n / norm;

        // Signed distance of the plane from the origin; any of p1..p3 works.
        let d = n.dot(&p1);
        let center = n * d;

        let u = p1 - center;
        let mut v = n.cross(&u);
        if (p2 - center).dot(&v) < 0.0 {
            v = -v;
        }

        let t = p3 - center;
        let mut theta = t.dot(&v).atan2(t.dot(&u));
        if theta < 0.0 {
            theta += TAU;
        }
        Ok(Self {
            center,
            u,
            v,
            theta,
        })
    }

    /// Point at `frac` before rounding.
    #[inline]
    pub fn at_exact(&self, frac: f64) -> Point3 {
        let (s, c) = (frac * self.theta).sin_cos();
        self.center + self.u * c + self.v * s
    }

    /// Point at `frac`, rounded to the crate precision.
    #[inline]
    pub fn at(&self, frac: f64) -> Point3 {
        round_default(self.at_exact(frac))
    }
}

/// Point at fraction `frac` of the arc from `p1` over `p2` to `p3`.
///
/// Pre: the three points lie on a common sphere centered at the origin.
/// Post: result is rounded to `cfg::DECIMALS` places.
pub fn point_at_fraction(p1: Point3, p2: Point3, p3: Point3, frac: f64) -> Result<Point3, ArcError> {
    Ok(ArcFrame::new(p1, p2, p3)?.at(frac))
}
