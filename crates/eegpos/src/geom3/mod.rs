//! Geometry on the sphere: the arc point solver and the 2D projection.
//!
//! Purpose
//! - `point_at_fraction` is the single geometric primitive behind every
//!   electrode position; everything else in the crate is bookkeeping.
//! - `stereographic` flattens finished positions for 2D layouts.
//!
//! Assumptions and conventions
//! - Coordinates are RAS: x to the right ear, y to the nasion, z up.
//! - Results are rounded to `cfg::DECIMALS` places (ties to even) as the last
//!   step of every solve.

pub mod cfg;
mod arc;
mod project;
mod types;

pub use arc::{point_at_fraction, ArcError, ArcFrame};
pub use project::{stereographic, STEREO_SCALE};
pub use types::{round_point, Point3};
