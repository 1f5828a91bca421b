//! Contour expansion engine and catalogs.
//!
//! Purpose
//! - Grow the five seeds of an `Equator` into the full 10-05 table by running
//!   the arc solver along every contour of the catalog, in order.
//!
//! Why this design (short)
//! - First writer wins is a table operation (`insert_if_absent`), not a
//!   dedup pass afterwards.
//! - Catalog ordering is checked, not trusted: missing anchors are an error at
//!   run time, and `check_catalog` verifies a whole catalog without geometry.
//! - The Fpz convention needs eight extrapolated anchors halfway through; that
//!   is the named step `extend_below_equator`.
//!
//! References
//! - Code cross-refs: `geom3::{point_at_fraction, ArcFrame}`, `systems::SYSTEM1005`

pub mod catalog;
mod expand;
mod types;

pub use catalog::{Catalog, Contour};
pub use expand::{
    check_catalog, expand_all_contours, expand_contour, extend_below_equator, midpoint_index,
    seed_table, ExpandError,
};
pub use types::{Equator, PointTable, BACK, FRONT, LEFT, RIGHT, TOP, VERTEX};

#[cfg(test)]
mod tests;
