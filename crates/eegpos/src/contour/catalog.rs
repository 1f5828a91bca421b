//! The contour catalogs: hand-authored label sequences in processing order.
//!
//! Layout
//! - Midline rows run Nz → Iz in 5% steps. Three rings parallel to the Nz
//!   equator carry the lateral columns: the "9" ring (Nz, T9, Iz), the "9h"
//!   ring (NFpz, T9h, OIz) and the "7" ring (Fpz, T7, Oz). Right-hand labels
//!   use even numbers (10, 10h, 8).
//! - Rows AFp … POO cross the head left to right through the midline. A full
//!   row spans 9 → 9 ring (21 labels); an inner row spans 7 → 7 ring (17).
//! - A trailing `h` marks the 5% position medial to the named electrode.
//!
//! Ordering
//! - Each contour's first, middle and last labels must be known by the time
//!   it is expanded. `contour::check_catalog` verifies this without geometry.

use super::types::Equator;

/// A contour: labels equally spaced along one circular arc.
pub type Contour = &'static [&'static str];

/// Nz → Cz → Iz.
pub const MIDLINE: [&str; 21] = [
    "Nz", "NFpz", "Fpz", "AFpz", "AFz", "AFFz", "Fz", "FFCz", "FCz", "FCCz", "Cz", "CCPz", "CPz",
    "CPPz", "Pz", "PPOz", "POz", "POOz", "Oz", "OIz", "Iz",
];

/// Fpz → Cz → Oz.
pub const MIDLINE_INNER: [&str; 17] = [
    "Fpz", "AFpz", "AFz", "AFFz", "Fz", "FFCz", "FCz", "FCCz", "Cz", "CCPz", "CPz", "CPPz", "Pz",
    "PPOz", "POz", "POOz", "Oz",
];

/// Equator ring of the Nz convention, left half: Nz → T9 → Iz.
pub const RING9_LEFT: [&str; 21] = [
    "Nz", "N1h", "N1", "AFp9", "AF9", "AFF9", "F9", "FFT9", "FT9", "FTT9", "T9", "TTP9", "TP9",
    "TPP9", "P9", "PPO9", "PO9", "POO9", "I1", "I1h", "Iz",
];

/// Equator ring of the Nz convention, right half: Nz → T10 → Iz.
pub const RING9_RIGHT: [&str; 21] = [
    "Nz", "N2h", "N2", "AFp10", "AF10", "AFF10", "F10", "FFT10", "FT10", "FTT10", "T10", "TTP10",
    "TP10", "TPP10", "P10", "PPO10", "PO10", "POO10", "I2", "I2h", "Iz",
];

/// Ring 5% above the Nz equator, left half: NFpz → T9h → OIz.
pub const RING9H_LEFT: [&str; 21] = [
    "NFpz", "NFp1h", "NFp1", "AFp9h", "AF9h", "AFF9h", "F9h", "FFT9h", "FT9h", "FTT9h", "T9h",
    "TTP9h", "TP9h", "TPP9h", "P9h", "PPO9h", "PO9h", "POO9h", "OI1", "OI1h", "OIz",
];

/// Ring 5% above the Nz equator, right half: NFpz → T10h → OIz.
pub const RING9H_RIGHT: [&str; 21] = [
    "NFpz", "NFp2h", "NFp2", "AFp10h", "AF10h", "AFF10h", "F10h", "FFT10h", "FT10h", "FTT10h",
    "T10h", "TTP10h", "TP10h", "TPP10h", "P10h", "PPO10h", "PO10h", "POO10h", "OI2", "OI2h", "OIz",
];

/// Ring through Fpz, 10% above the Nz equator, left half: Fpz → T7 → Oz.
pub const RING7_LEFT: [&str; 21] = [
    "Fpz", "Fp1h", "Fp1", "AFp7", "AF7", "AFF7", "F7", "FFT7", "FT7", "FTT7", "T7", "TTP7", "TP7",
    "TPP7", "P7", "PPO7", "PO7", "POO7", "O1", "O1h", "Oz",
];

/// Ring through Fpz, 10% above the Nz equator, right half: Fpz → T8 → Oz.
pub const RING7_RIGHT: [&str; 21] = [
    "Fpz", "Fp2h", "Fp2", "AFp8", "AF8", "AFF8", "F8", "FFT8", "FT8", "FTT8", "T8", "TTP8", "TP8",
    "TPP8", "P8", "PPO8", "PO8", "POO8", "O2", "O2h", "Oz",
];

/// AFp9 → AFpz → AFp10.
pub const ROW_AFP: [&str; 21] = [
    "AFp9", "AFp9h", "AFp7", "AFp7h", "AFp5", "AFp5h", "AFp3", "AFp3h", "AFp1", "AFp1h", "AFpz",
    "AFp2h", "AFp2", "AFp4h", "AFp4", "AFp6h", "AFp6", "AFp8h", "AFp8", "AFp10h", "AFp10",
];

/// AFp7 → AFpz → AFp8.
pub const ROW_AFP_INNER: [&str; 17] = [
    "AFp7", "AFp7h", "AFp5", "AFp5h", "AFp3", "AFp3h", "AFp1", "AFp1h", "AFpz", "AFp2h", "AFp2",
    "AFp4h", "AFp4", "AFp6h", "AFp6", "AFp8h", "AFp8",
];

/// AF9 → AFz → AF10.
pub const ROW_AF: [&str; 21] = [
    "AF9", "AF9h", "AF7", "AF7h", "AF5", "AF5h", "AF3", "AF3h", "AF1", "AF1h", "AFz", "AF2h", "AF2",
    "AF4h", "AF4", "AF6h", "AF6", "AF8h", "AF8", "AF10h", "AF10",
];

/// AF7 → AFz → AF8.
pub const ROW_AF_INNER: [&str; 17] = [
    "AF7", "AF7h", "AF5", "AF5h", "AF3", "AF3h", "AF1", "AF1h", "AFz", "AF2h", "AF2", "AF4h", "AF4",
    "AF6h", "AF6", "AF8h", "AF8",
];

/// AFF9 → AFFz → AFF10.
pub const ROW_AFF: [&str; 21] = [
    "AFF9", "AFF9h", "AFF7", "AFF7h", "AFF5", "AFF5h", "AFF3", "AFF3h", "AFF1", "AFF1h", "AFFz",
    "AFF2h", "AFF2", "AFF4h", "AFF4", "AFF6h", "AFF6", "AFF8h", "AFF8", "AFF10h", "AFF10",
];

/// AFF7 → AFFz → AFF8.
pub const ROW_AFF_INNER: [&str; 17] = [
    "AFF7", "AFF7h", "AFF5", "AFF5h", "AFF3", "AFF3h", "AFF1", "AFF1h", "AFFz", "AFF2h", "AFF2",
    "AFF4h", "AFF4", "AFF6h", "AFF6", "AFF8h", "AFF8",
];

/// F9 → Fz → F10.
pub const ROW_F: [&str; 21] = [
    "F9", "F9h", "F7", "F7h", "F5", "F5h", "F3", "F3h", "F1", "F1h", "Fz", "F2h", "F2", "F4h", "F4",
    "F6h", "F6", "F8h", "F8", "F10h", "F10",
];

/// F7 → Fz → F8.
pub const ROW_F_INNER: [&str; 17] = [
    "F7", "F7h", "F5", "F5h", "F3", "F3h", "F1", "F1h", "Fz", "F2h", "F2", "F4h", "F4", "F6h", "F6",
    "F8h", "F8",
];

/// FFT9 → FFCz → FFT10.
pub const ROW_FFC: [&str; 21] = [
    "FFT9", "FFT9h", "FFT7", "FFT7h", "FFC5", "FFC5h", "FFC3", "FFC3h", "FFC1", "FFC1h", "FFCz",
    "FFC2h", "FFC2", "FFC4h", "FFC4", "FFC6h", "FFC6", "FFT8h", "FFT8", "FFT10h", "FFT10",
];

/// FFT7 → FFCz → FFT8.
pub const ROW_FFC_INNER: [&str; 17] = [
    "FFT7", "FFT7h", "FFC5", "FFC5h", "FFC3", "FFC3h", "FFC1", "FFC1h", "FFCz", "FFC2h", "FFC2",
    "FFC4h", "FFC4", "FFC6h", "FFC6", "FFT8h", "FFT8",
];

/// FT9 → FCz → FT10.
pub const ROW_FC: [&str; 21] = [
    "FT9", "FT9h", "FT7", "FT7h", "FC5", "FC5h", "FC3", "FC3h", "FC1", "FC1h", "FCz", "FC2h", "FC2",
    "FC4h", "FC4", "FC6h", "FC6", "FT8h", "FT8", "FT10h", "FT10",
];

/// FT7 → FCz → FT8.
pub const ROW_FC_INNER: [&str; 17] = [
    "FT7", "FT7h", "FC5", "FC5h", "FC3", "FC3h", "FC1", "FC1h", "FCz", "FC2h", "FC2", "FC4h", "FC4",
    "FC6h", "FC6", "FT8h", "FT8",
];

/// FTT9 → FCCz → FTT10.
pub const ROW_FCC: [&str; 21] = [
    "FTT9", "FTT9h", "FTT7", "FTT7h", "FCC5", "FCC5h", "FCC3", "FCC3h", "FCC1", "FCC1h", "FCCz",
    "FCC2h", "FCC2", "FCC4h", "FCC4", "FCC6h", "FCC6", "FTT8h", "FTT8", "FTT10h", "FTT10",
];

/// FTT7 → FCCz → FTT8.
pub const ROW_FCC_INNER: [&str; 17] = [
    "FTT7", "FTT7h", "FCC5", "FCC5h", "FCC3", "FCC3h", "FCC1", "FCC1h", "FCCz", "FCC2h", "FCC2",
    "FCC4h", "FCC4", "FCC6h", "FCC6", "FTT8h", "FTT8",
];

/// T9 → Cz → T10.
pub const ROW_C: [&str; 21] = [
    "T9", "T9h", "T7", "T7h", "C5", "C5h", "C3", "C3h", "C1", "C1h", "Cz", "C2h", "C2", "C4h", "C4",
    "C6h", "C6", "T8h", "T8", "T10h", "T10",
];

/// T7 → Cz → T8.
pub const ROW_C_INNER: [&str; 17] = [
    "T7", "T7h", "C5", "C5h", "C3", "C3h", "C1", "C1h", "Cz", "C2h", "C2", "C4h", "C4", "C6h", "C6",
    "T8h", "T8",
];

/// TTP9 → CCPz → TTP10.
pub const ROW_CCP: [&str; 21] = [
    "TTP9", "TTP9h", "TTP7", "TTP7h", "CCP5", "CCP5h", "CCP3", "CCP3h", "CCP1", "CCP1h", "CCPz",
    "CCP2h", "CCP2", "CCP4h", "CCP4", "CCP6h", "CCP6", "TTP8h", "TTP8", "TTP10h", "TTP10",
];

/// TTP7 → CCPz → TTP8.
pub const ROW_CCP_INNER: [&str; 17] = [
    "TTP7", "TTP7h", "CCP5", "CCP5h", "CCP3", "CCP3h", "CCP1", "CCP1h", "CCPz", "CCP2h", "CCP2",
    "CCP4h", "CCP4", "CCP6h", "CCP6", "TTP8h", "TTP8",
];

/// TP9 → CPz → TP10.
pub const ROW_CP: [&str; 21] = [
    "TP9", "TP9h", "TP7", "TP7h", "CP5", "CP5h", "CP3", "CP3h", "CP1", "CP1h", "CPz", "CP2h", "CP2",
    "CP4h", "CP4", "CP6h", "CP6", "TP8h", "TP8", "TP10h", "TP10",
];

/// TP7 → CPz → TP8.
pub const ROW_CP_INNER: [&str; 17] = [
    "TP7", "TP7h", "CP5", "CP5h", "CP3", "CP3h", "CP1", "CP1h", "CPz", "CP2h", "CP2", "CP4h", "CP4",
    "CP6h", "CP6", "TP8h", "TP8",
];

/// TPP9 → CPPz → TPP10.
pub const ROW_CPP: [&str; 21] = [
    "TPP9", "TPP9h", "TPP7", "TPP7h", "CPP5", "CPP5h", "CPP3", "CPP3h", "CPP1", "CPP1h", "CPPz",
    "CPP2h", "CPP2", "CPP4h", "CPP4", "CPP6h", "CPP6", "TPP8h", "TPP8", "TPP10h", "TPP10",
];

/// TPP7 → CPPz → TPP8.
pub const ROW_CPP_INNER: [&str; 17] = [
    "TPP7", "TPP7h", "CPP5", "CPP5h", "CPP3", "CPP3h", "CPP1", "CPP1h", "CPPz", "CPP2h", "CPP2",
    "CPP4h", "CPP4", "CPP6h", "CPP6", "TPP8h", "TPP8",
];

/// P9 → Pz → P10.
pub const ROW_P: [&str; 21] = [
    "P9", "P9h", "P7", "P7h", "P5", "P5h", "P3", "P3h", "P1", "P1h", "Pz", "P2h", "P2", "P4h", "P4",
    "P6h", "P6", "P8h", "P8", "P10h", "P10",
];

/// P7 → Pz → P8.
pub const ROW_P_INNER: [&str; 17] = [
    "P7", "P7h", "P5", "P5h", "P3", "P3h", "P1", "P1h", "Pz", "P2h", "P2", "P4h", "P4", "P6h", "P6",
    "P8h", "P8",
];

/// PPO9 → PPOz → PPO10.
pub const ROW_PPO: [&str; 21] = [
    "PPO9", "PPO9h", "PPO7", "PPO7h", "PPO5", "PPO5h", "PPO3", "PPO3h", "PPO1", "PPO1h", "PPOz",
    "PPO2h", "PPO2", "PPO4h", "PPO4", "PPO6h", "PPO6", "PPO8h", "PPO8", "PPO10h", "PPO10",
];

/// PPO7 → PPOz → PPO8.
pub const ROW_PPO_INNER: [&str; 17] = [
    "PPO7", "PPO7h", "PPO5", "PPO5h", "PPO3", "PPO3h", "PPO1", "PPO1h", "PPOz", "PPO2h", "PPO2",
    "PPO4h", "PPO4", "PPO6h", "PPO6", "PPO8h", "PPO8",
];

/// PO9 → POz → PO10.
pub const ROW_PO: [&str; 21] = [
    "PO9", "PO9h", "PO7", "PO7h", "PO5", "PO5h", "PO3", "PO3h", "PO1", "PO1h", "POz", "PO2h", "PO2",
    "PO4h", "PO4", "PO6h", "PO6", "PO8h", "PO8", "PO10h", "PO10",
];

/// PO7 → POz → PO8.
pub const ROW_PO_INNER: [&str; 17] = [
    "PO7", "PO7h", "PO5", "PO5h", "PO3", "PO3h", "PO1", "PO1h", "POz", "PO2h", "PO2", "PO4h", "PO4",
    "PO6h", "PO6", "PO8h", "PO8",
];

/// POO9 → POOz → POO10.
pub const ROW_POO: [&str; 21] = [
    "POO9", "POO9h", "POO7", "POO7h", "POO5", "POO5h", "POO3", "POO3h", "POO1", "POO1h", "POOz",
    "POO2h", "POO2", "POO4h", "POO4", "POO6h", "POO6", "POO8h", "POO8", "POO10h", "POO10",
];

/// POO7 → POOz → POO8.
pub const ROW_POO_INNER: [&str; 17] = [
    "POO7", "POO7h", "POO5", "POO5h", "POO3", "POO3h", "POO1", "POO1h", "POOz", "POO2h", "POO2",
    "POO4h", "POO4", "POO6h", "POO6", "POO8h", "POO8",
];

/// Nz equator: seeds Nz/T10/Iz/T9/Cz, then everything resolves in one pass.
pub static NZ_EQUATOR: [Contour; 22] = [
    &MIDLINE, &ROW_C, &RING9_LEFT, &RING9_RIGHT, &RING9H_LEFT, &RING9H_RIGHT, &RING7_LEFT,
    &RING7_RIGHT, &ROW_AFP, &ROW_AF, &ROW_AFF, &ROW_F, &ROW_FFC, &ROW_FC, &ROW_FCC, &ROW_CCP,
    &ROW_CP, &ROW_CPP, &ROW_P, &ROW_PPO, &ROW_PO, &ROW_POO,
];

/// Fpz equator, before the points below the equator exist.
pub static FPZ_EQUATOR_EARLY: [Contour; 18] = [
    &MIDLINE_INNER, &ROW_C_INNER, &RING7_LEFT, &RING7_RIGHT, &ROW_AFP_INNER, &ROW_AF_INNER,
    &ROW_AFF_INNER, &ROW_F_INNER, &ROW_FFC_INNER, &ROW_FC_INNER, &ROW_FCC_INNER, &ROW_CCP_INNER,
    &ROW_CP_INNER, &ROW_CPP_INNER, &ROW_P_INNER, &ROW_PPO_INNER, &ROW_PO_INNER, &ROW_POO_INNER,
];

/// Fpz equator, after `extend_below_equator` placed Nz/NFpz/Iz/OIz/T9/T9h/T10/T10h.
pub static FPZ_EQUATOR_LATE: [Contour; 4] =
    [&RING9_LEFT, &RING9_RIGHT, &RING9H_LEFT, &RING9H_RIGHT];

/// Processing plan for one equator convention.
///
/// Invariant: when `extend_below_equator` is set, `early` is non-empty; the
/// extrapolation step is derived from the length of its first contour.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    pub early: &'static [Contour],
    /// Run `extend_below_equator` between `early` and `late`.
    pub extend_below_equator: bool,
    pub late: &'static [Contour],
}

impl Catalog {
    pub fn for_equator(equator: Equator) -> Self {
        match equator {
            Equator::NzT10IzT9 => Self {
                early: &NZ_EQUATOR,
                extend_below_equator: false,
                late: &[],
            },
            Equator::FpzT8OzT7 => Self {
                early: &FPZ_EQUATOR_EARLY,
                extend_below_equator: true,
                late: &FPZ_EQUATOR_LATE,
            },
        }
    }

    /// All contours in processing order.
    pub fn contours(&self) -> impl Iterator<Item = Contour> + '_ {
        self.early.iter().chain(self.late.iter()).copied()
    }
}
