use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use eegpos::api::{
    available_elec_names, get_elec_coords, get_montage, CoordsRequest, Dim, ElectrodeCoord,
    Equator, Montage, NameSet, System, ALIASES, HEAD_SIZE_DEFAULT,
};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

#[derive(Parser)]
#[command(name = "eegpos")]
#[command(about = "Standard EEG electrode positions on a spherical head")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Tsv,
    Json,
    /// 3D positions in meters plus nasion/LPA/RPA fiducials, as JSON
    Montage,
}

#[derive(Subcommand)]
enum Action {
    /// Print or write electrode coordinates
    Coords {
        #[arg(long, default_value = "1005")]
        system: System,
        /// Comma-separated names; overrides --system
        #[arg(long, value_delimiter = ',')]
        elec: Vec<String>,
        #[arg(long, default_value = "Nz-T10-Iz-T9")]
        equator: Equator,
        #[arg(long, default_value = "2d")]
        dim: Dim,
        #[arg(long)]
        drop_landmarks: bool,
        #[arg(long)]
        sort: bool,
        #[arg(long, value_enum, default_value_t = Format::Tsv)]
        format: Format,
        /// Write here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List available electrode names
    Names {
        #[arg(long, default_value = "all")]
        system: NameSet,
    },
    /// List alias names and what they resolve to
    Aliases,
    /// Regenerate all standard tables under a data directory
    Produce {
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },
    /// Check the standard tables under a data directory against fresh output
    Compare {
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
        #[arg(long, default_value_t = 1e-6)]
        tol: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Coords {
            system,
            elec,
            equator,
            dim,
            drop_landmarks,
            sort,
            format,
            out,
        } => {
            let req = CoordsRequest {
                system,
                elec_names: (!elec.is_empty()).then_some(elec),
                drop_landmarks,
                dim,
                equator,
                sort,
            };
            coords(&req, format, out.as_deref())
        }
        Action::Names { system } => names(system),
        Action::Aliases => aliases(),
        Action::Produce { data_dir } => produce(&data_dir),
        Action::Compare { data_dir, tol } => compare(&data_dir, tol),
        Action::Report => report(),
    }
}

#[derive(Serialize)]
struct Row<'a> {
    label: &'a str,
    x: f64,
    y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    z: Option<f64>,
}

fn open_output(out: Option<&Path>) -> Result<Box<dyn Write>> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let file = std::fs::File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}

fn rows_document(rows: &[ElectrodeCoord]) -> serde_json::Value {
    let rows: Vec<Row> = rows
        .iter()
        .map(|r| Row {
            label: &r.label,
            x: r.x,
            y: r.y,
            z: r.z,
        })
        .collect();
    serde_json::json!(rows)
}

fn montage_document(m: &Montage) -> serde_json::Value {
    let ch_pos: serde_json::Map<String, serde_json::Value> = m
        .ch_pos
        .iter()
        .map(|(label, p)| (label.clone(), serde_json::json!([p.x, p.y, p.z])))
        .collect();
    serde_json::json!({
        "coord_frame": "head",
        "head_size": HEAD_SIZE_DEFAULT,
        "ch_pos": ch_pos,
        "nasion": [m.nasion.x, m.nasion.y, m.nasion.z],
        "lpa": [m.lpa.x, m.lpa.y, m.lpa.z],
        "rpa": [m.rpa.x, m.rpa.y, m.rpa.z],
    })
}

fn coords(req: &CoordsRequest, format: Format, out: Option<&Path>) -> Result<()> {
    tracing::info!(
        system = %req.system,
        equator = %req.equator,
        dim = %req.dim,
        format = ?format,
        "coords"
    );
    let mut sink = open_output(out)?;
    match format {
        Format::Tsv => {
            let rows = get_elec_coords(req)?;
            let mut df = table::coords_frame(&rows, req.dim)?;
            table::write_tsv_to(&mut df, &mut sink)?;
        }
        Format::Json => {
            let rows = get_elec_coords(req)?;
            serde_json::to_writer_pretty(&mut sink, &rows_document(&rows))?;
            writeln!(sink)?;
        }
        Format::Montage => {
            let m = get_montage(req)?;
            serde_json::to_writer_pretty(&mut sink, &montage_document(&m))?;
            writeln!(sink)?;
        }
    }
    if let Some(path) = out {
        let params = serde_json::json!({
            "system": req.system.as_str(),
            "elec": req.elec_names,
            "equator": req.equator.as_str(),
            "dim": req.dim.as_str(),
            "drop_landmarks": req.drop_landmarks,
            "sort": req.sort,
            "format": format!("{format:?}").to_lowercase(),
        });
        provenance::write_sidecar(path, provenance::Payload::new(params))?;
    }
    Ok(())
}

fn names(set: NameSet) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for name in available_elec_names(set) {
        writeln!(stdout, "{name}")?;
    }
    Ok(())
}

fn aliases() -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for (name, alias) in ALIASES {
        writeln!(stdout, "{name}\t{alias}")?;
    }
    Ok(())
}

fn produce(data_dir: &Path) -> Result<()> {
    tracing::info!(data_dir = %data_dir.display(), "produce");
    let written = table::produce(data_dir)?;
    tracing::info!(tables = written.len(), "produce done");
    Ok(())
}

fn compare(data_dir: &Path, tol: f64) -> Result<()> {
    tracing::info!(data_dir = %data_dir.display(), tol, "compare");
    let checked = table::compare(data_dir, tol)?;
    tracing::info!(tables = checked, "all tables match");
    Ok(())
}

fn report() -> Result<()> {
    let params = serde_json::json!({
        "equators": Equator::ALL.map(Equator::as_str),
        "systems": System::ALL.map(System::as_str),
    });
    let doc = provenance::document(provenance::Payload::new(params), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_rows_omit_z_in_2d() {
        let req = CoordsRequest::for_names(["Cz", "M1"]);
        let doc = rows_document(&get_elec_coords(&req).unwrap());
        assert_eq!(doc[0]["label"], "Cz");
        assert_eq!(doc[0]["x"], 0.0);
        assert!(doc[0].get("z").is_none());
        assert_eq!(doc[1]["label"], "M1");

        let req = CoordsRequest {
            dim: Dim::D3,
            ..req
        };
        let doc = rows_document(&get_elec_coords(&req).unwrap());
        assert_eq!(doc[0]["z"], 1.0);
    }

    #[test]
    fn montage_document_has_fiducials_in_meters() {
        let m = get_montage(&CoordsRequest::for_names(["Cz", "NAS"])).unwrap();
        let doc = montage_document(&m);
        assert_eq!(doc["head_size"], HEAD_SIZE_DEFAULT);
        assert_eq!(doc["ch_pos"]["Cz"][2], HEAD_SIZE_DEFAULT);
        assert!(doc["ch_pos"].get("NAS").is_none());
        assert_eq!(doc["nasion"][1], HEAD_SIZE_DEFAULT);
        assert_eq!(doc["lpa"][0], -HEAD_SIZE_DEFAULT);
    }

    #[test]
    fn cli_arguments_parse() {
        let cmd = Cmd::try_parse_from([
            "eegpos", "coords", "--system", "1020", "--elec", "Cz,Fz", "--dim", "3d", "--format",
            "montage",
        ])
        .unwrap();
        match cmd.action {
            Action::Coords {
                system, elec, dim, format, ..
            } => {
                assert_eq!(system, System::S1020);
                assert_eq!(elec, ["Cz", "Fz"]);
                assert_eq!(dim, Dim::D3);
                assert!(matches!(format, Format::Montage));
            }
            _ => panic!("expected coords"),
        }
        assert!(Cmd::try_parse_from(["eegpos", "coords", "--equator", "Cz"]).is_err());
    }
}
