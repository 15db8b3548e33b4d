//! Debug bundle writer for comparing the attenuation models side by side.
//!
//! Writes a markdown file with both models evaluated over the current depth
//! grid, which is handy when a profile looks off and you want the raw numbers
//! without re-running sweeps by hand.

use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;

use crate::domain::{IceModel, ProfileConfig};
use crate::error::AppError;
use crate::models;
use crate::units;

pub fn write_debug_bundle(config: &ProfileConfig) -> Result<PathBuf, AppError> {
    let dir = PathBuf::from("debug");
    create_dir_all(&dir).map_err(|e| AppError::new(4, format!("Failed to create debug dir: {e}")))?;

    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!(
        "iceatt_debug_{:.0}mhz_{}.md",
        config.frequency / units::MHZ,
        ts
    ));

    let mut file = File::create(&path)
        .map_err(|e| AppError::new(4, format!("Failed to create debug file: {e}")))?;

    write_bundle(&mut file, config)
        .map_err(|e| AppError::new(4, format!("Failed to write debug bundle: {e}")))?;

    Ok(path)
}

fn write_bundle(file: &mut File, config: &ProfileConfig) -> std::io::Result<()> {
    writeln!(file, "# iceatt debug bundle")?;
    writeln!(file, "- generated: {}", Local::now().to_rfc3339())?;
    writeln!(file, "- frequency_mhz: {:.3}", config.frequency / units::MHZ)?;
    writeln!(
        file,
        "- depth_range_m: {:.2}..{:.2}",
        config.depth_min_m, config.depth_max_m
    )?;
    writeln!(file, "- samples: {}", config.samples)?;
    writeln!(file)?;

    writeln!(file, "| depth_m | temp_c | L_dielectric_m | L_greenland_m |")?;
    writeln!(file, "|---|---|---|---|")?;

    let n = config.samples.max(2);
    for i in 0..n {
        let u = i as f64 / (n as f64 - 1.0);
        let depth_m = config.depth_min_m + u * (config.depth_max_m - config.depth_min_m);
        let z = depth_m * units::METER;
        let l1 = models::attenuation_length(z, config.frequency, IceModel::Dielectric);
        let l2 = models::attenuation_length(z, config.frequency, IceModel::Greenland);
        writeln!(
            file,
            "| {:.2} | {:.3} | {:.3} | {:.3} |",
            depth_m,
            models::temperature(z),
            l1 / units::METER,
            l2 / units::METER
        )?;
    }

    Ok(())
}
