//! Print the 10-20 system as a 2D layout.
//!
//! Usage:
//!   cargo run -p eegpos --example print_1020 -- [Nz-T10-Iz-T9|Fpz-T8-Oz-T7]

use eegpos::prelude::*;

fn main() {
    let equator = std::env::args()
        .nth(1)
        .unwrap_or_else(|| Equator::default().to_string());
    let equator: Equator = match equator.parse() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    let req = CoordsRequest {
        system: System::S1020,
        drop_landmarks: true,
        equator,
        ..Default::default()
    };
    match get_elec_coords(&req) {
        Ok(rows) => {
            println!("label\tx\ty");
            for r in rows {
                println!("{}\t{:.4}\t{:.4}", r.label, r.x, r.y);
            }
        }
        Err(e) => eprintln!("error: {e}"),
    }
}
