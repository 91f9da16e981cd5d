use std::{fs::File, io::BufWriter};

use anyhow::Result;
use chrono::Local;
use log::info;
use serde_json::json;
use std::io::Write;

use crate::grid::Grid;
use crate::precision::RealScalar;
use crate::settings::Settings;
use crate::stack::Amplitudes;

/// Name of the plain-text amplitude grid written by [`write_amplitudes`].
pub const AMPLITUDE_FILE: &str = "amplitude_scatgrid";
/// Name of the JSON run summary written by [`write_summary`].
pub const SUMMARY_FILE: &str = "run_summary.json";

/// Write the amplitude grid to a file, one row per cell:
/// wavelength, angle, Re r, Im r, Re t, Im t.
pub fn write_amplitudes<T: RealScalar>(grid: &Grid<T>, ampl: &Amplitudes<T>) -> Result<()> {
    let file = File::create(AMPLITUDE_FILE)?;
    let mut writer = BufWriter::new(file);

    for (i, lambda) in grid.wavelengths.iter().enumerate() {
        for (j, theta) in grid.angles.iter().enumerate() {
            let r = ampl.r[[i, j]];
            let t = ampl.t[[i, j]];
            writeln!(
                writer,
                "{} {} {} {} {} {}",
                lambda, theta, r.re, r.im, t.re, t.im
            )?;
        }
    }

    info!("wrote amplitude grid to {}", AMPLITUDE_FILE);
    Ok(())
}

/// Write a JSON summary of the run next to the amplitude grid.
pub fn write_summary(settings: &Settings) -> Result<()> {
    let summary = json!({
        "generated": Local::now().to_rfc3339(),
        "settings": settings,
        "amplitude_file": AMPLITUDE_FILE,
    });

    let file = File::create(SUMMARY_FILE)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &summary)?;

    info!("wrote run summary to {}", SUMMARY_FILE);
    Ok(())
}
