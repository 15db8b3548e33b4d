//! Export sampled profiles to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::app::pipeline::RunOutput;
use crate::domain::ProfileConfig;
use crate::error::AppError;
use crate::units;

/// Write sampled profile points to a CSV file.
pub fn write_results_csv(
    path: &Path,
    run: &RunOutput,
    config: &ProfileConfig,
) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display()))
    })?;

    writeln!(file, "depth_m,temperature_c,model,frequency_mhz,length_m")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    let model = format!("{:?}", config.model).to_lowercase();
    let freq_mhz = config.frequency / units::MHZ;
    for p in &run.points {
        writeln!(
            file,
            "{:.4},{:.4},{},{:.4},{:.4}",
            p.depth_m, p.temperature_c, model, freq_mhz, p.length_m
        )
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
