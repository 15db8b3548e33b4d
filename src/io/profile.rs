//! Read/write profile JSON files.
//!
//! Profile JSON is the "portable" representation of a sampled profile:
//! - model + frequency
//! - generation date
//! - the sampled depth/length grid for quick plotting
//!
//! The schema is defined by `domain::ProfileFile`.

use std::fs::File;
use std::path::Path;

use chrono::Local;

use crate::app::pipeline::RunOutput;
use crate::domain::{ProfileConfig, ProfileFile, ProfileGrid};
use crate::error::AppError;
use crate::units;

/// Write a profile JSON file.
pub fn write_profile_json(
    path: &Path,
    run: &RunOutput,
    config: &ProfileConfig,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create profile JSON '{}': {e}", path.display()))
    })?;

    let profile = profile_file(run, config);

    serde_json::to_writer_pretty(file, &profile)
        .map_err(|e| AppError::new(2, format!("Failed to write profile JSON: {e}")))?;

    Ok(())
}

/// Read a profile JSON file.
pub fn read_profile_json(path: &Path) -> Result<ProfileFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open profile JSON '{}': {e}", path.display()))
    })?;
    let profile: ProfileFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid profile JSON: {e}")))?;
    Ok(profile)
}

fn profile_file(run: &RunOutput, config: &ProfileConfig) -> ProfileFile {
    let depth_m: Vec<f64> = run.points.iter().map(|p| p.depth_m).collect();
    let length_m: Vec<f64> = run.points.iter().map(|p| p.length_m).collect();

    ProfileFile {
        tool: "iceatt".to_string(),
        generated: Local::now().date_naive(),
        model: config.model,
        frequency_mhz: config.frequency / units::MHZ,
        grid: ProfileGrid { depth_m, length_m },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_profile;
    use crate::domain::IceModel;

    #[test]
    fn profile_file_mirrors_the_run() {
        let config = ProfileConfig {
            model: IceModel::Greenland,
            frequency: 75.0 * units::MHZ,
            depth_min_m: -2000.0,
            depth_max_m: 0.0,
            samples: 21,
            table_rows: 5,
            plot: false,
            plot_width: 80,
            plot_height: 20,
            export_results: None,
            export_profile: None,
        };
        let run = run_profile(&config).unwrap();
        let file = profile_file(&run, &config);

        assert_eq!(file.tool, "iceatt");
        assert_eq!(file.model, IceModel::Greenland);
        assert_eq!(file.frequency_mhz, 75.0);
        assert_eq!(file.grid.depth_m.len(), 21);
        assert_eq!(file.grid.length_m.len(), 21);
        assert_eq!(file.grid.depth_m[0], run.points[0].depth_m);
        assert_eq!(file.grid.length_m[20], run.points[20].length_m);
    }

    #[test]
    fn profile_json_schema_round_trips() {
        let config = ProfileConfig {
            model: IceModel::Dielectric,
            frequency: 300.0 * units::MHZ,
            depth_min_m: -1000.0,
            depth_max_m: 0.0,
            samples: 11,
            table_rows: 5,
            plot: false,
            plot_width: 80,
            plot_height: 20,
            export_results: None,
            export_profile: None,
        };
        let run = run_profile(&config).unwrap();
        let file = profile_file(&run, &config);

        let json = serde_json::to_string(&file).unwrap();
        let back: ProfileFile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.model, file.model);
        assert_eq!(back.generated, file.generated);
        assert_eq!(back.frequency_mhz, file.frequency_mhz);
        // Grids survive bit-exactly (serde_json's float_roundtrip feature).
        assert_eq!(back.grid.depth_m, file.grid.depth_m);
        assert_eq!(back.grid.length_m, file.grid.length_m);
    }
}
