//! Curated API surface.
//!
//! Prefer these re-exports over reaching into submodules; module paths may
//! move, this list is kept stable within a minor version.

// Sphere geometry
pub use crate::geom3::{
    point_at_fraction, round_point, stereographic, ArcError, ArcFrame, Point3, STEREO_SCALE,
};
// Contour expansion
pub use crate::contour::{
    check_catalog, expand_all_contours, expand_contour, extend_below_equator, midpoint_index,
    seed_table, Catalog, Equator, ExpandError, PointTable,
};
// Naming systems
pub use crate::systems::{
    alias_for, available_elec_names, Alias, NameSet, ParseNameError, System, ALIASES, LANDMARKS,
    SYSTEM1005, SYSTEM1010, SYSTEM1020,
};
// Coordinate requests
pub use crate::coords::{
    get_elec_coords, get_montage, CoordsError, CoordsRequest, Dim, ElectrodeCoord, Montage,
    HEAD_SIZE_DEFAULT,
};
