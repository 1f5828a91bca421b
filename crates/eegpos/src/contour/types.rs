//! Label → point table and the equator conventions that seed it.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use nalgebra::vector;

use crate::geom3::Point3;
use crate::systems::ParseNameError;

/// Named points computed so far.
///
/// Invariants:
/// - Labels are unique; an entry is never overwritten once present.
/// - Iteration is in label order, so equal contents compare equal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointTable {
    points: BTreeMap<String, Point3>,
}

impl PointTable {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, label: &str) -> Option<Point3> {
        self.points.get(label).copied()
    }

    #[inline]
    pub fn contains(&self, label: &str) -> bool {
        self.points.contains_key(label)
    }

    /// First writer wins: insert only if `label` is new. Returns whether it was.
    pub fn insert_if_absent(&mut self, label: &str, p: Point3) -> bool {
        if self.points.contains_key(label) {
            return false;
        }
        self.points.insert(label.to_string(), p);
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Point3)> + '_ {
        self.points.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.points.keys().map(String::as_str)
    }
}

/// Fixed seed coordinates shared by both conventions.
pub const FRONT: Point3 = vector![0.0, 1.0, 0.0];
pub const RIGHT: Point3 = vector![1.0, 0.0, 0.0];
pub const BACK: Point3 = vector![0.0, -1.0, 0.0];
pub const LEFT: Point3 = vector![-1.0, 0.0, 0.0];
pub const TOP: Point3 = vector![0.0, 0.0, 1.0];

/// Label of the vertex electrode, always at `TOP`.
pub const VERTEX: &str = "Cz";

/// Which contour of electrodes lies on the equator of the sphere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Equator {
    /// Nz, T10, Iz, T9 on the equator. The landmarks NAS/RPA/LPA coincide with
    /// Nz/T10/T9, and every electrode projects inside the unit circle.
    #[default]
    NzT10IzT9,
    /// Fpz, T8, Oz, T7 on the equator, i.e. where head circumference is measured.
    FpzT8OzT7,
}

impl Equator {
    pub const ALL: [Equator; 2] = [Equator::NzT10IzT9, Equator::FpzT8OzT7];

    pub fn as_str(self) -> &'static str {
        match self {
            Equator::NzT10IzT9 => "Nz-T10-Iz-T9",
            Equator::FpzT8OzT7 => "Fpz-T8-Oz-T7",
        }
    }

    /// Labels placed at front, right, back, left.
    pub fn labels(self) -> [&'static str; 4] {
        match self {
            Equator::NzT10IzT9 => ["Nz", "T10", "Iz", "T9"],
            Equator::FpzT8OzT7 => ["Fpz", "T8", "Oz", "T7"],
        }
    }

    /// The five seed entries every expansion starts from.
    pub fn seeds(self) -> [(&'static str, Point3); 5] {
        let [f, r, b, l] = self.labels();
        [(f, FRONT), (r, RIGHT), (b, BACK), (l, LEFT), (VERTEX, TOP)]
    }
}

impl fmt::Display for Equator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Equator {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Equator::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| ParseNameError::new("equator", s, &["Nz-T10-Iz-T9", "Fpz-T8-Oz-T7"]))
    }
}
