//! TSV tables of electrode coordinates: build, write, read back, compare.
//!
//! File layout under a data directory:
//! `<equator>/standard_<system>_<2D|3D>.tsv`, columns `label x y [z]`,
//! four decimals, `n/a` for nulls, sorted by label, landmarks included.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, ensure, Context, Result};
use eegpos::api::{get_elec_coords, CoordsRequest, Dim, ElectrodeCoord, Equator, System};
use polars::prelude::*;

use crate::provenance::{write_sidecar, Payload};

/// Decimal places written to disk.
pub const PRECISION: usize = 4;
pub const NULL_VALUE: &str = "n/a";

pub fn coords_frame(rows: &[ElectrodeCoord], dim: Dim) -> PolarsResult<DataFrame> {
    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    let xs: Vec<f64> = rows.iter().map(|r| r.x).collect();
    let ys: Vec<f64> = rows.iter().map(|r| r.y).collect();
    match dim {
        Dim::D2 => df!("label" => labels, "x" => xs, "y" => ys),
        Dim::D3 => {
            let zs: Vec<Option<f64>> = rows.iter().map(|r| r.z).collect();
            df!("label" => labels, "x" => xs, "y" => ys, "z" => zs)
        }
    }
}

/// Write `df` as tab-separated text to any writer.
pub fn write_tsv_to<W: Write>(df: &mut DataFrame, out: W) -> PolarsResult<()> {
    CsvWriter::new(out)
        .include_header(true)
        .with_separator(b'\t')
        .with_float_precision(Some(PRECISION))
        .with_null_value(NULL_VALUE.to_string())
        .finish(df)
}

pub fn write_tsv(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_tsv_to(df, file).with_context(|| format!("writing {}", path.display()))
}

pub fn read_tsv(path: &Path) -> Result<DataFrame> {
    let df = LazyCsvReader::new(path)
        .with_separator(b'\t')
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .with_null_values(Some(NullValues::AllColumnsSingle(NULL_VALUE.into())))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(df)
}

fn dim_tag(dim: Dim) -> &'static str {
    match dim {
        Dim::D2 => "2D",
        Dim::D3 => "3D",
    }
}

/// `<data_dir>/<equator>/standard_<system>_<2D|3D>.tsv`
pub fn standard_path(data_dir: &Path, equator: Equator, system: System, dim: Dim) -> PathBuf {
    data_dir
        .join(equator.as_str())
        .join(format!("standard_{}_{}.tsv", system.as_str(), dim_tag(dim)))
}

fn standard_request(equator: Equator, system: System, dim: Dim) -> CoordsRequest {
    CoordsRequest {
        system,
        elec_names: None,
        drop_landmarks: false,
        dim,
        equator,
        sort: true,
    }
}

/// Every (equator, system, dim) combination of the shipped tables.
fn combinations() -> impl Iterator<Item = (Equator, System, Dim)> {
    Equator::ALL.into_iter().flat_map(|e| {
        System::ALL
            .into_iter()
            .flat_map(move |s| [Dim::D2, Dim::D3].map(|d| (e, s, d)))
    })
}

fn standard_frame(equator: Equator, system: System, dim: Dim) -> Result<DataFrame> {
    let rows = get_elec_coords(&standard_request(equator, system, dim))?;
    Ok(coords_frame(&rows, dim)?)
}

/// Regenerate every standard table under `data_dir`, each with a provenance
/// sidecar. Returns the table paths in write order.
pub fn produce(data_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (equator, system, dim) in combinations() {
        let path = standard_path(data_dir, equator, system, dim);
        let mut df = standard_frame(equator, system, dim)?;
        write_tsv(&mut df, &path)?;
        let params = serde_json::json!({
            "equator": equator.as_str(),
            "system": system.as_str(),
            "dim": dim.as_str(),
            "precision": PRECISION,
            "eegpos": eegpos::VERSION,
        });
        write_sidecar(&path, Payload::new(params))?;
        tracing::info!(path = %path.display(), rows = df.height(), "produce");
        written.push(path);
    }
    Ok(written)
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column {name}"))?
        .cast(&DataType::Float64)?;
    Ok(col.f64()?.into_iter().collect())
}

fn label_column(df: &DataFrame) -> Result<Vec<String>> {
    let col = df.column("label").context("missing column label")?;
    Ok(col
        .str()?
        .into_iter()
        .map(|s| s.unwrap_or(NULL_VALUE).to_string())
        .collect())
}

fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names().iter().map(|c| c.to_string()).collect()
}

fn round_to_precision(v: f64) -> f64 {
    let s = 10f64.powi(PRECISION as i32);
    (v * s).round() / s
}

/// Compare a freshly computed frame with one read from disk: same labels in
/// the same order, same columns, coordinates equal within `tol` after rounding.
pub fn compare_frames(produced: &DataFrame, on_disk: &DataFrame, tol: f64) -> Result<()> {
    let (want, got) = (label_column(produced)?, label_column(on_disk)?);
    ensure!(
        want == got,
        "labels differ: expected {} rows, found {}; first mismatch {:?}",
        want.len(),
        got.len(),
        want.iter().zip(&got).find(|(a, b)| a != b)
    );
    let (want_cols, got_cols) = (column_names(produced), column_names(on_disk));
    ensure!(
        want_cols == got_cols,
        "columns differ: expected {want_cols:?}, found {got_cols:?}"
    );
    for name in want_cols.iter().filter(|c| *c != "label") {
        let want = float_column(produced, name)?;
        let got = float_column(on_disk, name)?;
        for (i, (a, b)) in want.iter().zip(&got).enumerate() {
            let ok = match (a, b) {
                (Some(a), Some(b)) => (round_to_precision(*a) - b).abs() <= tol,
                (None, None) => true,
                _ => false,
            };
            if !ok {
                bail!(
                    "column {name} differs at {}: expected {a:?}, found {b:?}",
                    want_label(produced, i)
                );
            }
        }
    }
    Ok(())
}

fn want_label(df: &DataFrame, i: usize) -> String {
    label_column(df)
        .ok()
        .and_then(|labels| labels.get(i).cloned())
        .unwrap_or_else(|| format!("row {i}"))
}

/// Regenerate every standard table and compare it with the file under
/// `data_dir`. Returns the number of tables checked.
pub fn compare(data_dir: &Path, tol: f64) -> Result<usize> {
    let mut checked = 0;
    for (equator, system, dim) in combinations() {
        let path = standard_path(data_dir, equator, system, dim);
        let produced = standard_frame(equator, system, dim)?;
        let on_disk = read_tsv(&path)?;
        compare_frames(&produced, &on_disk, tol)
            .with_context(|| format!("{} is out of date", path.display()))?;
        tracing::info!(path = %path.display(), "compare ok");
        checked += 1;
    }
    Ok(checked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn rows_3d() -> Vec<ElectrodeCoord> {
        get_elec_coords(&CoordsRequest {
            dim: Dim::D3,
            ..CoordsRequest::for_names(["Cz", "Fp1", "T7"])
        })
        .unwrap()
    }

    #[test]
    fn standard_paths_follow_the_layout() {
        let p = standard_path(Path::new("data"), Equator::FpzT8OzT7, System::S1010, Dim::D2);
        assert_eq!(p, Path::new("data/Fpz-T8-Oz-T7/standard_1010_2D.tsv"));
        assert_eq!(combinations().count(), 12);
    }

    #[test]
    fn tsv_has_four_decimals_and_tabs() {
        let mut df = coords_frame(&rows_3d(), Dim::D3).unwrap();
        let mut buf = Vec::new();
        write_tsv_to(&mut df, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "label\tx\ty\tz");
        assert_eq!(lines[1], "Cz\t0.0000\t0.0000\t1.0000");
        assert_eq!(lines[2], "Fp1\t-0.2939\t0.9045\t0.3090");
    }

    #[test]
    fn two_dimensional_frames_have_no_z() {
        let rows = get_elec_coords(&CoordsRequest::for_names(["Cz"])).unwrap();
        let df = coords_frame(&rows, Dim::D2).unwrap();
        assert_eq!(df.width(), 3);
        assert!(df.column("z").is_err());
    }

    #[test]
    fn produce_then_compare_round_trips() {
        let dir = tempdir().unwrap();
        let written = produce(dir.path()).unwrap();
        assert_eq!(written.len(), 12);
        for path in &written {
            assert!(path.exists());
            assert!(path.with_file_name(format!(
                "{}.provenance.json",
                path.file_stem().unwrap().to_string_lossy()
            ))
            .exists());
        }
        let df = read_tsv(&standard_path(dir.path(), Equator::NzT10IzT9, System::S1005, Dim::D3))
            .unwrap();
        assert_eq!(df.height(), 345 + 3);
        assert_eq!(compare(dir.path(), 1e-6).unwrap(), 12);
    }

    #[test]
    fn compare_rejects_extra_columns() {
        let rows = rows_3d();
        let produced = coords_frame(&rows, Dim::D2).unwrap();
        let mut on_disk = coords_frame(&rows, Dim::D3).unwrap();
        let mut buf = Vec::new();
        write_tsv_to(&mut on_disk, &mut buf).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("standard_1020_2D.tsv");
        fs::write(&path, buf).unwrap();
        let err = compare_frames(&produced, &read_tsv(&path).unwrap(), 1e-6).unwrap_err();
        assert!(err.to_string().contains("columns differ"), "{err}");
    }

    #[test]
    fn compare_detects_edits() {
        let dir = tempdir().unwrap();
        produce(dir.path()).unwrap();
        let path = standard_path(dir.path(), Equator::NzT10IzT9, System::S1020, Dim::D3);
        let text = fs::read_to_string(&path).unwrap();
        fs::write(&path, text.replacen("\t1.0000\n", "\t0.9000\n", 1)).unwrap();
        let err = compare(dir.path(), 1e-6).unwrap_err();
        assert!(format!("{err:#}").contains("differs"), "{err:#}");
    }
}
