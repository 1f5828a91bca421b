//! Contour expansion: fill a `PointTable` by interpolating along contours.
//!
//! Why this shape
//! - Each contour names three anchors (first, middle, last) that must already
//!   be in the table; all other labels are proposals at `i / (n − 1)`.
//! - Proposals merge with `PointTable::insert_if_absent`, so the value from
//!   the earliest contour (or seed) is authoritative and reruns are no-ops.
//! - A contour is validated and solved completely before anything is merged;
//!   errors leave the table as it was, and `expand_all_contours` returns no
//!   table at all on error.

use std::collections::BTreeSet;
use std::fmt;

use crate::geom3::{point_at_fraction, ArcError, ArcFrame, Point3};

use super::catalog::Catalog;
use super::types::{Equator, PointTable};

/// Errors surfaced by contour expansion. All are data or geometry bugs; none
/// are worth retrying.
#[derive(Clone, Debug, PartialEq)]
pub enum ExpandError {
    /// The anchors of a contour do not define a circle.
    InvalidGeometry {
        first: String,
        last: String,
        source: ArcError,
    },
    /// Contours must have 17 or 21 labels.
    InvalidContourLength { len: usize },
    /// An anchor label was not resolved when its contour came up.
    MissingReferencePoint { label: String },
}

impl fmt::Display for ExpandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpandError::InvalidGeometry { first, last, source } => {
                write!(f, "contour {first} … {last} has degenerate anchors: {source}")
            }
            ExpandError::InvalidContourLength { len } => {
                write!(f, "contour must be of len 17 or 21 but is {len}")
            }
            ExpandError::MissingReferencePoint { label } => {
                write!(f, "reference point {label} is not resolved yet")
            }
        }
    }
}

impl std::error::Error for ExpandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExpandError::InvalidGeometry { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Index of the anchor in the middle of a contour of length `len`.
pub fn midpoint_index(len: usize) -> Result<usize, ExpandError> {
    match len {
        21 => Ok(10),
        17 => Ok(8),
        _ => Err(ExpandError::InvalidContourLength { len }),
    }
}

fn anchor(table: &PointTable, label: &str) -> Result<Point3, ExpandError> {
    table
        .get(label)
        .ok_or_else(|| ExpandError::MissingReferencePoint {
            label: label.to_string(),
        })
}

/// Expand one contour into `table`; returns the number of new labels.
pub fn expand_contour(table: &mut PointTable, contour: &[&str]) -> Result<usize, ExpandError> {
    let mid = midpoint_index(contour.len())?;
    let last = contour.len() - 1;
    let p1 = anchor(table, contour[0])?;
    let p2 = anchor(table, contour[mid])?;
    let p3 = anchor(table, contour[last])?;
    let frame = ArcFrame::new(p1, p2, p3).map_err(|source| ExpandError::InvalidGeometry {
        first: contour[0].to_string(),
        last: contour[last].to_string(),
        source,
    })?;

    let proposals: Vec<(&str, Point3)> = contour
        .iter()
        .enumerate()
        .map(|(i, &label)| (label, frame.at(i as f64 / last as f64)))
        .collect();
    let inserted = proposals
        .into_iter()
        .filter(|&(label, p)| table.insert_if_absent(label, p))
        .count();
    tracing::trace!(
        first = contour[0],
        last = contour[last],
        inserted,
        "expand_contour"
    );
    Ok(inserted)
}

/// A table holding only the five seeds of `equator`.
pub fn seed_table(equator: Equator) -> PointTable {
    let mut table = PointTable::new();
    for (label, p) in equator.seeds() {
        table.insert_if_absent(label, p);
    }
    table
}

/// Anchors of the late Fpz contours. No early contour reaches below the
/// equator, so these come from running past the ends of the two great circles
/// through the seeds, at fraction `1 + k·step`.
fn below_equator_targets() -> [(&'static str, u32, [&'static str; 3]); 8] {
    [
        ("OIz", 1, ["Fpz", "Cz", "Oz"]),
        ("Iz", 2, ["Fpz", "Cz", "Oz"]),
        ("NFpz", 1, ["Oz", "Cz", "Fpz"]),
        ("Nz", 2, ["Oz", "Cz", "Fpz"]),
        ("T10h", 1, ["T7", "Cz", "T8"]),
        ("T10", 2, ["T7", "Cz", "T8"]),
        ("T9h", 1, ["T8", "Cz", "T7"]),
        ("T9", 2, ["T8", "Cz", "T7"]),
    ]
}

/// Fix-up step of the Fpz convention: place the eight points listed in
/// `below_equator_targets` from the seeds Fpz/T8/Oz/T7/Cz in `table`.
/// Returns the number of new labels.
pub fn extend_below_equator(table: &mut PointTable, step: f64) -> Result<usize, ExpandError> {
    let mut proposals = Vec::with_capacity(8);
    for (label, k, [first, mid, last]) in below_equator_targets() {
        let (p1, p2, p3) = (anchor(table, first)?, anchor(table, mid)?, anchor(table, last)?);
        let p = point_at_fraction(p1, p2, p3, 1.0 + f64::from(k) * step).map_err(|source| {
            ExpandError::InvalidGeometry {
                first: first.to_string(),
                last: last.to_string(),
                source,
            }
        })?;
        proposals.push((label, p));
    }
    Ok(proposals
        .into_iter()
        .filter(|&(label, p)| table.insert_if_absent(label, p))
        .count())
}

/// Extrapolation step: one label-length of the first early contour.
///
/// Pre: a catalog that extends below the equator has at least one early
/// contour; otherwise the first fix-up target is reported missing.
pub(super) fn below_equator_step(catalog: &Catalog) -> Result<f64, ExpandError> {
    match catalog.early.first() {
        Some(first) => Ok(1.0 / first.len() as f64),
        None => Err(ExpandError::MissingReferencePoint {
            label: below_equator_targets()[0].0.to_string(),
        }),
    }
}

/// Compute every labeled position of the catalog for `equator`.
pub fn expand_all_contours(equator: Equator) -> Result<PointTable, ExpandError> {
    let catalog = Catalog::for_equator(equator);
    let mut table = seed_table(equator);
    for contour in catalog.early {
        expand_contour(&mut table, contour)?;
    }
    if catalog.extend_below_equator {
        let step = below_equator_step(&catalog)?;
        let added = extend_below_equator(&mut table, step)?;
        tracing::debug!(added, step, "extend_below_equator");
    }
    for contour in catalog.late {
        expand_contour(&mut table, contour)?;
    }
    tracing::debug!(
        equator = equator.as_str(),
        contours = catalog.early.len() + catalog.late.len(),
        labels = table.len(),
        "expand_all_contours"
    );
    Ok(table)
}

fn visit(known: &mut BTreeSet<&'static str>, contour: &[&'static str]) -> Result<(), ExpandError> {
    let mid = midpoint_index(contour.len())?;
    for label in [contour[0], contour[mid], contour[contour.len() - 1]] {
        if !known.contains(label) {
            return Err(ExpandError::MissingReferencePoint {
                label: label.to_string(),
            });
        }
    }
    known.extend(contour.iter().copied());
    Ok(())
}

/// Dry run of the catalog for `equator` on labels only: lengths and anchor
/// availability, in processing order. Returns the set of labels produced.
pub fn check_catalog(equator: Equator) -> Result<BTreeSet<&'static str>, ExpandError> {
    let catalog = Catalog::for_equator(equator);
    let mut known: BTreeSet<&'static str> = equator.seeds().iter().map(|(l, _)| *l).collect();
    for contour in catalog.early {
        visit(&mut known, contour)?;
    }
    if catalog.extend_below_equator {
        below_equator_step(&catalog)?;
        for (label, _, arc) in below_equator_targets() {
            if let Some(missing) = arc.into_iter().find(|l| !known.contains(l)) {
                return Err(ExpandError::MissingReferencePoint {
                    label: missing.to_string(),
                });
            }
            known.insert(label);
        }
    }
    for contour in catalog.late {
        visit(&mut known, contour)?;
    }
    Ok(known)
}
