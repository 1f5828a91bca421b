use std::collections::BTreeSet;

use super::catalog::*;
use super::*;
use crate::geom3::{ArcError, Point3};
use crate::systems::SYSTEM1005;
use nalgebra::vector;

fn table(equator: Equator) -> PointTable {
    expand_all_contours(equator).unwrap()
}

fn at(table: &PointTable, label: &str) -> Point3 {
    table
        .get(label)
        .unwrap_or_else(|| panic!("{label} missing"))
}

#[test]
fn midpoint_index_by_length() {
    assert_eq!(midpoint_index(21), Ok(10));
    assert_eq!(midpoint_index(17), Ok(8));
    let err = midpoint_index(40).unwrap_err();
    assert_eq!(err, ExpandError::InvalidContourLength { len: 40 });
    assert!(err.to_string().contains("40"));
}

#[test]
fn catalog_contours_have_valid_lengths() {
    for equator in Equator::ALL {
        for contour in Catalog::for_equator(equator).contours() {
            assert!(
                midpoint_index(contour.len()).is_ok(),
                "{} has {} labels",
                contour[0],
                contour.len()
            );
        }
    }
    assert_eq!(NZ_EQUATOR.len(), 22);
    assert_eq!(FPZ_EQUATOR_EARLY.len() + FPZ_EQUATOR_LATE.len(), 22);
}

#[test]
fn catalog_dry_run_yields_the_10_05_labels() {
    let expected: BTreeSet<&str> = SYSTEM1005.iter().copied().collect();
    for equator in Equator::ALL {
        assert_eq!(check_catalog(equator).unwrap(), expected, "{equator}");
    }
}

#[test]
fn expand_contour_requires_anchors() {
    let mut t = seed_table(Equator::NzT10IzT9);
    let err = expand_contour(&mut t, &ROW_F).unwrap_err();
    assert_eq!(
        err,
        ExpandError::MissingReferencePoint {
            label: "F9".to_string()
        }
    );
    assert_eq!(t, seed_table(Equator::NzT10IzT9));
}

#[test]
fn expand_contour_rejects_bad_lengths_without_touching_the_table() {
    let mut t = seed_table(Equator::NzT10IzT9);
    let err = expand_contour(&mut t, &MIDLINE[..20]).unwrap_err();
    assert_eq!(err, ExpandError::InvalidContourLength { len: 20 });
    assert_eq!(t.len(), 5);
}

#[test]
fn degenerate_anchors_are_reported_with_their_labels() {
    let mut t = PointTable::new();
    for label in ["a", "m", "b"] {
        t.insert_if_absent(label, TOP);
    }
    let mut contour = vec!["x"; 17];
    contour[0] = "a";
    contour[8] = "m";
    contour[16] = "b";
    let err = expand_contour(&mut t, &contour).unwrap_err();
    match &err {
        ExpandError::InvalidGeometry { first, last, source } => {
            assert_eq!((first.as_str(), last.as_str()), ("a", "b"));
            assert!(matches!(source, ArcError::Degenerate { .. }));
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(std::error::Error::source(&err).is_some());
    assert!(!t.contains("x"));
}

#[test]
fn first_writer_wins() {
    let mut t = seed_table(Equator::NzT10IzT9);
    let planted = vector![0.1, 0.2, 0.3];
    t.insert_if_absent("Fz", planted);
    let inserted = expand_contour(&mut t, &MIDLINE).unwrap();
    // 21 labels, Nz/Cz/Iz seeded, Fz planted
    assert_eq!(inserted, 17);
    assert_eq!(at(&t, "Fz"), planted);
    assert_eq!(at(&t, "Cz"), TOP);
}

#[test]
fn midline_matches_the_great_circle() {
    let mut t = seed_table(Equator::NzT10IzT9);
    expand_contour(&mut t, &MIDLINE).unwrap();
    assert_eq!(at(&t, "Fpz"), vector![0.0, 0.9511, 0.309]);
    assert_eq!(at(&t, "Pz"), vector![0.0, -0.5878, 0.809]);
    assert_eq!(at(&t, "Iz"), BACK);
}

#[test]
fn both_conventions_produce_the_full_system() {
    let expected: Vec<&str> = SYSTEM1005
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    for equator in Equator::ALL {
        let t = table(equator);
        assert_eq!(t.len(), 345, "{equator}");
        assert_eq!(t.labels().collect::<Vec<_>>(), expected);
        assert_eq!(at(&t, VERTEX), vector![0.0, 0.0, 1.0]);
        for (label, p) in t.iter() {
            assert!((p.norm() - 1.0).abs() < 2e-4, "{label}: {p:?}");
        }
    }
}

#[test]
fn expansion_is_deterministic_and_idempotent() {
    for equator in Equator::ALL {
        let mut t = table(equator);
        assert_eq!(t, table(equator));
        for contour in Catalog::for_equator(equator).contours() {
            assert_eq!(expand_contour(&mut t, contour).unwrap(), 0);
        }
        assert_eq!(t, table(equator));
    }
}

#[test]
fn nz_equator_positions() {
    let t = table(Equator::NzT10IzT9);
    let cases = [
        ("Nz", [0.0, 1.0, 0.0]),
        ("T9", [-1.0, 0.0, 0.0]),
        ("Fp1", [-0.2939, 0.9045, 0.309]),
        ("Fpz", [0.0, 0.9511, 0.309]),
        ("F3", [-0.4755, 0.5878, 0.6545]),
        ("T7", [-0.9511, 0.0, 0.309]),
        ("AF7", [-0.559, 0.7695, 0.309]),
        ("O2", [0.2939, -0.9045, 0.309]),
        ("NFp1", [-0.3052, 0.9394, 0.1564]),
        ("I2h", [0.1564, -0.9877, 0.0]),
        ("FCC3h", [-0.4484, 0.1564, 0.88]),
        ("PPO10h", [0.6984, -0.6984, 0.1564]),
    ];
    for (label, [x, y, z]) in cases {
        assert_eq!(at(&t, label), vector![x, y, z], "{label}");
    }
}

#[test]
fn fpz_equator_positions() {
    let t = table(Equator::FpzT8OzT7);
    let cases = [
        ("Fpz", [0.0, 1.0, 0.0]),
        ("T7", [-1.0, 0.0, 0.0]),
        ("Fp1", [-0.309, 0.9511, 0.0]),
        ("F3", [-0.5405, 0.673, 0.5049]),
        ("NFp1", [-0.3038, 0.9349, -0.1837]),
        ("FCC3h", [-0.5468, 0.1886, 0.8157]),
    ];
    for (label, [x, y, z]) in cases {
        assert_eq!(at(&t, label), vector![x, y, z], "{label}");
    }
}

#[test]
fn fpz_points_below_the_equator_are_extrapolated() {
    let t = table(Equator::FpzT8OzT7);
    assert_eq!(at(&t, "Nz"), vector![0.0, 0.9325, -0.3612]);
    assert_eq!(at(&t, "Iz"), vector![0.0, -0.9325, -0.3612]);
    assert_eq!(at(&t, "T9"), vector![-0.9325, 0.0, -0.3612]);
    assert_eq!(at(&t, "T10"), vector![0.9325, 0.0, -0.3612]);
    assert_eq!(at(&t, "OIz"), vector![0.0, -0.983, -0.1837]);
    assert_eq!(at(&t, "T9h"), vector![-0.983, 0.0, -0.1837]);
}

#[test]
fn extend_below_equator_respects_existing_entries() {
    let mut t = seed_table(Equator::FpzT8OzT7);
    assert_eq!(extend_below_equator(&mut t, 1.0 / 17.0).unwrap(), 8);
    assert_eq!(extend_below_equator(&mut t, 0.5).unwrap(), 0);
    assert_eq!(at(&t, "Nz"), vector![0.0, 0.9325, -0.3612]);
}

#[test]
fn extend_below_equator_needs_the_fpz_seeds() {
    let mut t = seed_table(Equator::NzT10IzT9);
    let err = extend_below_equator(&mut t, 1.0 / 17.0).unwrap_err();
    assert_eq!(
        err,
        ExpandError::MissingReferencePoint {
            label: "Fpz".to_string()
        }
    );
    assert_eq!(t, seed_table(Equator::NzT10IzT9));
}

#[test]
fn extrapolation_errors_name_the_seed_arc() {
    let mut t = PointTable::new();
    for label in ["Fpz", "Cz", "Oz", "T7", "T8"] {
        t.insert_if_absent(label, TOP);
    }
    let err = extend_below_equator(&mut t, 1.0 / 17.0).unwrap_err();
    assert!(matches!(
        &err,
        ExpandError::InvalidGeometry { first, last, .. } if first == "Fpz" && last == "Oz"
    ));
    assert!(err.to_string().starts_with("contour Fpz … Oz"), "{err}");
    assert_eq!(t.len(), 5);
}

#[test]
fn empty_early_catalog_reports_the_first_fixup_label() {
    let catalog = Catalog {
        early: &[],
        extend_below_equator: true,
        late: &FPZ_EQUATOR_LATE,
    };
    assert_eq!(
        super::expand::below_equator_step(&catalog),
        Err(ExpandError::MissingReferencePoint {
            label: "OIz".to_string()
        })
    );
    let step = super::expand::below_equator_step(&Catalog::for_equator(Equator::FpzT8OzT7));
    assert_eq!(step, Ok(1.0 / 17.0));
}
