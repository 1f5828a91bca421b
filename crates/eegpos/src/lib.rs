//! Standard EEG electrode positions on a spherical head.
//!
//! Layout
//! - `geom3`: the arc point solver and the stereographic projection.
//! - `contour`: contour catalogs and the expansion engine that grows five
//!   seed points into all 345 positions of the 10-05 system.
//! - `systems`: the 10-20 / 10-10 / 10-05 label sets, landmarks and aliases.
//! - `coords`: selection, alias resolution, projection and montages.
//!
//! Coordinates are RAS on the unit sphere: x to the right, y to the front,
//! z up, with Cz at the vertex.

pub mod api;
pub mod contour;
pub mod coords;
pub mod geom3;
pub mod systems;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::contour::{expand_all_contours, Equator, PointTable};
    pub use crate::coords::{get_elec_coords, CoordsRequest, Dim, ElectrodeCoord};
    pub use crate::geom3::{point_at_fraction, Point3};
    pub use crate::systems::System;
}
