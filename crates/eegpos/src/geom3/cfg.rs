//! Numeric policy for sphere geometry.
//!
//! Policy
//! - Fixed constants, same as the rest of the crate: every solver output is
//!   rounded before it is stored, so tables are bit-identical across platforms
//!   and diff cleanly when written as 4-decimal text.

/// Minimum sine of the angle between `p2 − p1` and `p3 − p1`, i.e. the length
/// of their cross product relative to the product of their lengths. Anything
/// smaller means the three points are coincident or collinear.
pub(crate) const NORMAL_EPS: f64 = 1e-12;
/// Decimal places kept for every computed coordinate.
pub const DECIMALS: i32 = 4;
