//! Coordinate requests: selection, aliases, landmarks and projection.
//!
//! Purpose
//! - Turn an expanded `PointTable` into the rows a caller asked for: a whole
//!   system or a list of names (which may include landmarks and aliases), in
//!   3D or stereographically projected to 2D.
//! - Build a montage: 3D channel positions in meters plus the three fiducials.
//!
//! Conventions
//! - Landmarks NAS, LPA, RPA take the points of Nz, T9, T10.
//! - Output labels are the requested names, so an alias stays an alias.
//! - Duplicate labels are dropped after selection, keeping the first.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::contour::{expand_all_contours, Equator, ExpandError, PointTable};
use crate::geom3::{stereographic, Point3, STEREO_SCALE};
use crate::systems::{
    alias_for, available_elec_names, landmark_source, Alias, NameSet, ParseNameError, System,
    LANDMARKS,
};

/// MNE's default head radius in meters; montage coordinates are scaled by it.
pub const HEAD_SIZE_DEFAULT: f64 = 0.095;

/// Output dimensionality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dim {
    /// Stereographic projection of the 3D points.
    #[default]
    D2,
    D3,
}

impl Dim {
    pub fn as_str(self) -> &'static str {
        match self {
            Dim::D2 => "2d",
            Dim::D3 => "3d",
        }
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dim {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2d" => Ok(Dim::D2),
            "3d" => Ok(Dim::D3),
            _ => Err(ParseNameError::new("dim", s, &["2d", "3d"])),
        }
    }
}

/// What `get_elec_coords` should return.
///
/// `elec_names` takes precedence over `system` when set and non-empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoordsRequest {
    pub system: System,
    pub elec_names: Option<Vec<String>>,
    pub drop_landmarks: bool,
    pub dim: Dim,
    pub equator: Equator,
    pub sort: bool,
}

impl CoordsRequest {
    /// Request for an explicit list of names, everything else default.
    pub fn for_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elec_names: Some(names.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Explicit names, if any. An empty list selects the whole system.
    pub fn requested_names(&self) -> Option<&[String]> {
        self.elec_names.as_deref().filter(|names| !names.is_empty())
    }
}

/// One output row. `z` is `None` for 2D output.
#[derive(Clone, Debug, PartialEq)]
pub struct ElectrodeCoord {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CoordsError {
    /// Names with no available position, in request order.
    UnknownElectrodes(Vec<String>),
    /// A plain alias was requested together with the label it stands for.
    DuplicateAlias { alias: String, target: String },
    Expand(ExpandError),
}

impl fmt::Display for CoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordsError::UnknownElectrodes(names) => write!(
                f,
                "no available positions for {names:?}; check capitalization against `available_elec_names`"
            ),
            CoordsError::DuplicateAlias { alias, target } => write!(
                f,
                "the same position was requested twice: {alias}, {target}; remove one of them"
            ),
            CoordsError::Expand(e) => write!(f, "contour expansion failed: {e}"),
        }
    }
}

impl std::error::Error for CoordsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CoordsError::Expand(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ExpandError> for CoordsError {
    fn from(e: ExpandError) -> Self {
        CoordsError::Expand(e)
    }
}

fn check_names(names: &[String]) -> Result<(), CoordsError> {
    let available: HashSet<&str> = available_elec_names(NameSet::All).into_iter().collect();
    let mut unknown: Vec<String> = Vec::new();
    for name in names {
        if !available.contains(name.as_str()) && !unknown.contains(name) {
            unknown.push(name.clone());
        }
    }
    if !unknown.is_empty() {
        return Err(CoordsError::UnknownElectrodes(unknown));
    }
    for name in names {
        if let Some(Alias::Same(target)) = alias_for(name) {
            if names.iter().any(|n| n == target) {
                return Err(CoordsError::DuplicateAlias {
                    alias: name.clone(),
                    target: target.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Position of a table label, landmark or alias.
fn resolve(table: &PointTable, name: &str) -> Result<Point3, CoordsError> {
    if let Some(source) = landmark_source(name) {
        return resolve(table, source);
    }
    match alias_for(name) {
        Some(Alias::Same(target)) => resolve(table, target),
        Some(Alias::Offset { base, offset }) => {
            Ok(resolve(table, base)? + Point3::new(offset[0], offset[1], offset[2]))
        }
        None => table.get(name).ok_or_else(|| {
            CoordsError::Expand(ExpandError::MissingReferencePoint {
                label: name.to_string(),
            })
        }),
    }
}

fn is_landmark(label: &str) -> bool {
    LANDMARKS.contains(&label)
}

/// Selected 3D rows in output order, before projection.
fn select(req: &CoordsRequest, table: &PointTable) -> Result<Vec<(String, Point3)>, CoordsError> {
    let names: Vec<String> = match req.requested_names() {
        Some(names) => names.to_vec(),
        None => req
            .system
            .labels()
            .iter()
            .chain(LANDMARKS.iter())
            .map(|s| s.to_string())
            .collect(),
    };
    let mut seen = HashSet::new();
    let mut rows = Vec::with_capacity(names.len());
    for name in names {
        if req.drop_landmarks && is_landmark(&name) {
            continue;
        }
        if !seen.insert(name.clone()) {
            continue;
        }
        let p = resolve(table, &name)?;
        rows.push((name, p));
    }
    if req.sort {
        rows.sort_by(|a, b| a.0.cmp(&b.0));
    }
    Ok(rows)
}

/// Standard electrode coordinates on the unit sphere.
///
/// Errors: unknown names and duplicate plain aliases are rejected before any
/// geometry runs; expansion errors are passed through.
pub fn get_elec_coords(req: &CoordsRequest) -> Result<Vec<ElectrodeCoord>, CoordsError> {
    if let Some(names) = req.requested_names() {
        check_names(names)?;
    }
    let table = expand_all_contours(req.equator)?;
    let rows = select(req, &table)?;
    tracing::debug!(
        system = req.system.as_str(),
        equator = req.equator.as_str(),
        dim = req.dim.as_str(),
        rows = rows.len(),
        "get_elec_coords"
    );
    Ok(rows
        .into_iter()
        .map(|(label, p)| match req.dim {
            Dim::D3 => ElectrodeCoord {
                label,
                x: p.x,
                y: p.y,
                z: Some(p.z),
            },
            Dim::D2 => {
                let q = stereographic(p, STEREO_SCALE);
                ElectrodeCoord {
                    label,
                    x: q.x,
                    y: q.y,
                    z: None,
                }
            }
        })
        .collect())
}

/// Channel positions and fiducials in meters, ready for a digitization
/// montage.
#[derive(Clone, Debug, PartialEq)]
pub struct Montage {
    /// Channels in output order; landmarks are never channels.
    pub ch_pos: Vec<(String, Point3)>,
    pub nasion: Point3,
    pub lpa: Point3,
    pub rpa: Point3,
}

/// Montage for `req`. `dim` and `drop_landmarks` are ignored: positions are
/// always 3D and the fiducials are always filled in.
pub fn get_montage(req: &CoordsRequest) -> Result<Montage, CoordsError> {
    if let Some(names) = req.requested_names() {
        check_names(names)?;
    }
    let table = expand_all_contours(req.equator)?;
    let req = CoordsRequest {
        dim: Dim::D3,
        drop_landmarks: true,
        ..req.clone()
    };
    let ch_pos = select(&req, &table)?
        .into_iter()
        .map(|(label, p)| (label, p * HEAD_SIZE_DEFAULT))
        .collect();
    Ok(Montage {
        ch_pos,
        nasion: resolve(&table, "NAS")? * HEAD_SIZE_DEFAULT,
        lpa: resolve(&table, "LPA")? * HEAD_SIZE_DEFAULT,
        rpa: resolve(&table, "RPA")? * HEAD_SIZE_DEFAULT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(rows: &[ElectrodeCoord]) -> Vec<&str> {
        rows.iter().map(|r| r.label.as_str()).collect()
    }

    fn row<'a>(rows: &'a [ElectrodeCoord], label: &str) -> &'a ElectrodeCoord {
        rows.iter().find(|r| r.label == label).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn system_request_lists_system_then_landmarks() {
        let req = CoordsRequest {
            system: System::S1020,
            dim: Dim::D3,
            ..Default::default()
        };
        let rows = get_elec_coords(&req).unwrap();
        assert_eq!(rows.len(), 21 + 3);
        assert_eq!(&labels(&rows)[21..], &["LPA", "RPA", "NAS"]);
        assert_eq!(row(&rows, "NAS").z, Some(0.0));
        assert_eq!(row(&rows, "LPA").x, -1.0);

        let dropped = get_elec_coords(&CoordsRequest {
            drop_landmarks: true,
            ..req
        })
        .unwrap();
        assert_eq!(dropped.len(), 21);
        assert!(dropped.iter().all(|r| !is_landmark(&r.label)));
    }

    #[test]
    fn requested_order_is_kept_unless_sorted() {
        let names = ["T7", "Cz", "AF3", "Fp1"];
        let rows = get_elec_coords(&CoordsRequest::for_names(names)).unwrap();
        assert_eq!(labels(&rows), names);

        let sorted = get_elec_coords(&CoordsRequest {
            sort: true,
            ..CoordsRequest::for_names(names)
        })
        .unwrap();
        assert_eq!(labels(&sorted), ["AF3", "Cz", "Fp1", "T7"]);
    }

    #[test]
    fn empty_name_list_selects_the_system() {
        let rows = get_elec_coords(&CoordsRequest::for_names(Vec::<String>::new())).unwrap();
        assert_eq!(rows.len(), 345 + 3);
        assert_eq!(rows, get_elec_coords(&CoordsRequest::default()).unwrap());
    }

    #[test]
    fn duplicates_keep_the_first() {
        let rows = get_elec_coords(&CoordsRequest::for_names(["Cz", "Fz", "Cz"])).unwrap();
        assert_eq!(labels(&rows), ["Cz", "Fz"]);
    }

    #[test]
    fn two_dimensional_rows_are_projected() {
        let rows = get_elec_coords(&CoordsRequest::for_names(["Cz", "T9", "Fpz"])).unwrap();
        assert!(rows.iter().all(|r| r.z.is_none()));
        let cz = row(&rows, "Cz");
        assert_eq!((cz.x, cz.y), (0.0, 0.0));
        let t9 = row(&rows, "T9");
        assert_eq!((t9.x, t9.y), (-1.0, 0.0));
        let fpz = row(&rows, "Fpz");
        assert!(close(fpz.y, 0.9511 / 1.309));
    }

    #[test]
    fn aliases_keep_their_names() {
        let req = CoordsRequest {
            dim: Dim::D3,
            ..CoordsRequest::for_names(["M1", "A1", "A2", "Cz"])
        };
        let rows = get_elec_coords(&req).unwrap();
        assert_eq!(labels(&rows), ["M1", "A1", "A2", "Cz"]);

        let base = get_elec_coords(&CoordsRequest {
            dim: Dim::D3,
            ..CoordsRequest::for_names(["TP9", "LPA", "RPA"])
        })
        .unwrap();
        assert_eq!(row(&rows, "M1").x, row(&base, "TP9").x);
        assert_eq!(row(&rows, "M1").z, row(&base, "TP9").z);
        let (a1, lpa) = (row(&rows, "A1"), row(&base, "LPA"));
        assert!(close(a1.x, lpa.x - 0.1));
        assert!(close(a1.y, lpa.y - 0.01));
        assert!(close(a1.z.unwrap(), lpa.z.unwrap() - 0.01));
        let (a2, rpa) = (row(&rows, "A2"), row(&base, "RPA"));
        assert!(close(a2.x, rpa.x + 0.1));
    }

    #[test]
    fn unknown_names_are_listed() {
        let err = get_elec_coords(&CoordsRequest::for_names(["Cz", "cz", "Xx", "cz"])).unwrap_err();
        assert_eq!(
            err,
            CoordsError::UnknownElectrodes(vec!["cz".to_string(), "Xx".to_string()])
        );
        assert!(err.to_string().contains("capitalization"));
    }

    #[test]
    fn alias_with_its_target_is_rejected() {
        let err = get_elec_coords(&CoordsRequest::for_names(["TP9", "M1"])).unwrap_err();
        assert_eq!(
            err,
            CoordsError::DuplicateAlias {
                alias: "M1".to_string(),
                target: "TP9".to_string()
            }
        );
        // offset aliases are distinct positions
        assert!(get_elec_coords(&CoordsRequest::for_names(["A1", "LPA"])).is_ok());
    }

    #[test]
    fn fpz_equator_puts_landmarks_below_the_equator() {
        let rows = get_elec_coords(&CoordsRequest {
            equator: Equator::FpzT8OzT7,
            dim: Dim::D3,
            ..CoordsRequest::for_names(["NAS", "T7"])
        })
        .unwrap();
        assert!(row(&rows, "NAS").z.unwrap() < 0.0);
        assert_eq!(row(&rows, "T7").z, Some(0.0));
    }

    #[test]
    fn montage_is_scaled_and_has_fiducials() {
        let m = get_montage(&CoordsRequest::for_names(["Cz", "NAS", "Oz"])).unwrap();
        let channels: Vec<&str> = m.ch_pos.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(channels, ["Cz", "Oz"]);
        assert_eq!(m.ch_pos[0].1, Point3::new(0.0, 0.0, HEAD_SIZE_DEFAULT));
        assert_eq!(m.nasion, Point3::new(0.0, HEAD_SIZE_DEFAULT, 0.0));
        assert_eq!(m.lpa, Point3::new(-HEAD_SIZE_DEFAULT, 0.0, 0.0));
        assert_eq!(m.rpa, Point3::new(HEAD_SIZE_DEFAULT, 0.0, 0.0));

        let full = get_montage(&CoordsRequest::default()).unwrap();
        assert_eq!(full.ch_pos.len(), 345);
    }

    #[test]
    fn dim_parses() {
        assert_eq!("3d".parse::<Dim>(), Ok(Dim::D3));
        assert!("4d".parse::<Dim>().is_err());
    }
}
