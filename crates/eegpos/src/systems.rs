//! Electrode naming systems, anatomical landmarks and aliases.
//!
//! - `SYSTEM1005` is exactly the set of labels produced by the contour
//!   catalogs; `SYSTEM1010` and `SYSTEM1020` are nested subsets.
//! - Landmarks NAS, LPA, RPA coincide with Nz, T9, T10 on the spherical head.
//! - Aliases map names outside the 10-05 namespace onto it, optionally with a
//!   constant offset (ear-lobe references sit just below and outside LPA/RPA).

use std::fmt;
use std::str::FromStr;

/// A string did not name any known variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseNameError {
    pub what: &'static str,
    pub input: String,
    pub expected: &'static [&'static str],
}

impl ParseNameError {
    pub(crate) fn new(what: &'static str, input: &str, expected: &'static [&'static str]) -> Self {
        Self {
            what,
            input: input.to_string(),
            expected,
        }
    }
}

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` must be one of {:?}, got {:?}",
            self.what, self.expected, self.input
        )
    }
}

impl std::error::Error for ParseNameError {}

/// Anatomical landmarks: left and right preauricular points, nasion.
pub const LANDMARKS: [&str; 3] = ["LPA", "RPA", "NAS"];

/// Electrode each landmark coincides with.
pub const LANDMARK_SOURCES: [(&str, &str); 3] = [("LPA", "T9"), ("RPA", "T10"), ("NAS", "Nz")];

/// The 10-20 system.
pub const SYSTEM1020: [&str; 21] = [
    "Fp1", "Fpz", "Fp2", "F7", "F3", "Fz", "F4", "F8", "T7", "C3", "Cz", "C4", "T8", "P7", "P3",
    "Pz", "P4", "P8", "O1", "Oz", "O2",
];

/// The 10-10 system.
pub const SYSTEM1010: [&str; 71] = [
    "Fp1", "Fpz", "Fp2", "AF7", "AF3", "AFz", "AF4", "AF8", "F9", "F7", "F5", "F3", "F1", "Fz",
    "F2", "F4", "F6", "F8", "F10", "FT9", "FT7", "FC5", "FC3", "FC1", "FCz", "FC2", "FC4", "FC6",
    "FT8", "FT10", "T9", "T7", "C5", "C3", "C1", "Cz", "C2", "C4", "C6", "T8", "T10", "TP9", "TP7",
    "CP5", "CP3", "CP1", "CPz", "CP2", "CP4", "CP6", "TP8", "TP10", "P9", "P7", "P5", "P3", "P1",
    "Pz", "P2", "P4", "P6", "P8", "P10", "PO7", "PO3", "POz", "PO4", "PO8", "O1", "Oz", "O2",
];

/// The 10-05 system, front to back and left to right.
pub const SYSTEM1005: [&str; 345] = [
    "N1", "N1h", "Nz", "N2h", "N2", "NFp1", "NFp1h", "NFpz", "NFp2h", "NFp2", "Fp1", "Fp1h", "Fpz",
    "Fp2h", "Fp2", "AFp9", "AFp9h", "AFp7", "AFp7h", "AFp5", "AFp5h", "AFp3", "AFp3h", "AFp1",
    "AFp1h", "AFpz", "AFp2h", "AFp2", "AFp4h", "AFp4", "AFp6h", "AFp6", "AFp8h", "AFp8", "AFp10h",
    "AFp10", "AF9", "AF9h", "AF7", "AF7h", "AF5", "AF5h", "AF3", "AF3h", "AF1", "AF1h", "AFz",
    "AF2h", "AF2", "AF4h", "AF4", "AF6h", "AF6", "AF8h", "AF8", "AF10h", "AF10", "AFF9", "AFF9h",
    "AFF7", "AFF7h", "AFF5", "AFF5h", "AFF3", "AFF3h", "AFF1", "AFF1h", "AFFz", "AFF2h", "AFF2",
    "AFF4h", "AFF4", "AFF6h", "AFF6", "AFF8h", "AFF8", "AFF10h", "AFF10", "F9", "F9h", "F7", "F7h",
    "F5", "F5h", "F3", "F3h", "F1", "F1h", "Fz", "F2h", "F2", "F4h", "F4", "F6h", "F6", "F8h", "F8",
    "F10h", "F10", "FFT9", "FFT9h", "FFT7", "FFT7h", "FFC5", "FFC5h", "FFC3", "FFC3h", "FFC1",
    "FFC1h", "FFCz", "FFC2h", "FFC2", "FFC4h", "FFC4", "FFC6h", "FFC6", "FFT8h", "FFT8", "FFT10h",
    "FFT10", "FT9", "FT9h", "FT7", "FT7h", "FC5", "FC5h", "FC3", "FC3h", "FC1", "FC1h", "FCz",
    "FC2h", "FC2", "FC4h", "FC4", "FC6h", "FC6", "FT8h", "FT8", "FT10h", "FT10", "FTT9", "FTT9h",
    "FTT7", "FTT7h", "FCC5", "FCC5h", "FCC3", "FCC3h", "FCC1", "FCC1h", "FCCz", "FCC2h", "FCC2",
    "FCC4h", "FCC4", "FCC6h", "FCC6", "FTT8h", "FTT8", "FTT10h", "FTT10", "T9", "T9h", "T7", "T7h",
    "C5", "C5h", "C3", "C3h", "C1", "C1h", "Cz", "C2h", "C2", "C4h", "C4", "C6h", "C6", "T8h", "T8",
    "T10h", "T10", "TTP9", "TTP9h", "TTP7", "TTP7h", "CCP5", "CCP5h", "CCP3", "CCP3h", "CCP1",
    "CCP1h", "CCPz", "CCP2h", "CCP2", "CCP4h", "CCP4", "CCP6h", "CCP6", "TTP8h", "TTP8", "TTP10h",
    "TTP10", "TP9", "TP9h", "TP7", "TP7h", "CP5", "CP5h", "CP3", "CP3h", "CP1", "CP1h", "CPz",
    "CP2h", "CP2", "CP4h", "CP4", "CP6h", "CP6", "TP8h", "TP8", "TP10h", "TP10", "TPP9", "TPP9h",
    "TPP7", "TPP7h", "CPP5", "CPP5h", "CPP3", "CPP3h", "CPP1", "CPP1h", "CPPz", "CPP2h", "CPP2",
    "CPP4h", "CPP4", "CPP6h", "CPP6", "TPP8h", "TPP8", "TPP10h", "TPP10", "P9", "P9h", "P7", "P7h",
    "P5", "P5h", "P3", "P3h", "P1", "P1h", "Pz", "P2h", "P2", "P4h", "P4", "P6h", "P6", "P8h", "P8",
    "P10h", "P10", "PPO9", "PPO9h", "PPO7", "PPO7h", "PPO5", "PPO5h", "PPO3", "PPO3h", "PPO1",
    "PPO1h", "PPOz", "PPO2h", "PPO2", "PPO4h", "PPO4", "PPO6h", "PPO6", "PPO8h", "PPO8", "PPO10h",
    "PPO10", "PO9", "PO9h", "PO7", "PO7h", "PO5", "PO5h", "PO3", "PO3h", "PO1", "PO1h", "POz",
    "PO2h", "PO2", "PO4h", "PO4", "PO6h", "PO6", "PO8h", "PO8", "PO10h", "PO10", "POO9", "POO9h",
    "POO7", "POO7h", "POO5", "POO5h", "POO3", "POO3h", "POO1", "POO1h", "POOz", "POO2h", "POO2",
    "POO4h", "POO4", "POO6h", "POO6", "POO8h", "POO8", "POO10h", "POO10", "O1", "O1h", "Oz", "O2h",
    "O2", "OI1", "OI1h", "OIz", "OI2h", "OI2", "I1", "I1h", "Iz", "I2h", "I2",
];

/// The nested standard systems.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum System {
    S1020,
    S1010,
    #[default]
    S1005,
}

impl System {
    pub const ALL: [System; 3] = [System::S1020, System::S1010, System::S1005];

    pub fn as_str(self) -> &'static str {
        match self {
            System::S1020 => "1020",
            System::S1010 => "1010",
            System::S1005 => "1005",
        }
    }

    pub fn labels(self) -> &'static [&'static str] {
        match self {
            System::S1020 => &SYSTEM1020,
            System::S1010 => &SYSTEM1010,
            System::S1005 => &SYSTEM1005,
        }
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for System {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        System::ALL
            .into_iter()
            .find(|sys| sys.as_str() == s)
            .ok_or_else(|| ParseNameError::new("system", s, &["1020", "1010", "1005"]))
    }
}

/// Name sets that can be listed with `available_elec_names`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NameSet {
    System(System),
    Landmarks,
    /// 10-05, landmarks and every alias name.
    #[default]
    All,
}

impl FromStr for NameSet {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "landmarks" => Ok(NameSet::Landmarks),
            "all" => Ok(NameSet::All),
            _ => s.parse::<System>().map(NameSet::System).map_err(|_| {
                ParseNameError::new("system", s, &["1020", "1010", "1005", "landmarks", "all"])
            }),
        }
    }
}

/// Electrode names for which positions are available in `set`.
pub fn available_elec_names(set: NameSet) -> Vec<&'static str> {
    match set {
        NameSet::System(sys) => sys.labels().to_vec(),
        NameSet::Landmarks => LANDMARKS.to_vec(),
        NameSet::All => SYSTEM1005
            .iter()
            .chain(LANDMARKS.iter())
            .copied()
            .chain(ALIASES.iter().map(|(name, _)| *name))
            .collect(),
    }
}

/// Where an alias name points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Alias {
    /// Another name for a 10-05 position.
    Same(&'static str),
    /// A 10-05 position or landmark shifted by a constant (x, y, z).
    Offset {
        base: &'static str,
        offset: [f64; 3],
    },
}

impl Alias {
    /// The 10-05 label or landmark the alias is anchored on.
    pub fn base(&self) -> &'static str {
        match *self {
            Alias::Same(base) | Alias::Offset { base, .. } => base,
        }
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alias::Same(base) => f.write_str(base),
            Alias::Offset { base, offset } => {
                write!(f, "{base}+({}, {}, {})", offset[0], offset[1], offset[2])
            }
        }
    }
}

/// Names outside the 10-05 namespace and what they resolve to.
pub const ALIASES: [(&str, Alias); 4] = [
    (
        "A1",
        Alias::Offset {
            base: "LPA",
            offset: [-0.1, -0.01, -0.01],
        },
    ),
    (
        "A2",
        Alias::Offset {
            base: "RPA",
            offset: [0.1, -0.01, -0.01],
        },
    ),
    ("M1", Alias::Same("TP9")),
    ("M2", Alias::Same("TP10")),
];

pub fn alias_for(name: &str) -> Option<Alias> {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, target)| *target)
}

/// Electrode a landmark coincides with, if `name` is a landmark.
pub fn landmark_source(name: &str) -> Option<&'static str> {
    LANDMARK_SOURCES
        .iter()
        .find(|(landmark, _)| *landmark == name)
        .map(|(_, source)| *source)
}
