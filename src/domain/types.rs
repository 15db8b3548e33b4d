//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during profile sweeps
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which attenuation model to evaluate.
///
/// The set is closed on purpose: the upstream convention selects models by a
/// small integer code, and anything outside `{1, 2}` is a caller bug rather
/// than a value we could meaningfully compute with. See [`IceModel::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IceModel {
    /// Temperature-dependent dielectric-loss model (code 1).
    Dielectric,
    /// Tabulated Greenland depth profile at 75 MHz reference (code 2).
    Greenland,
}

/// Error for a model code outside the supported set.
///
/// Raised synchronously at the numeric boundary and propagated unchanged:
/// an unknown code is a programming/configuration error, not a transient
/// condition, so there is no fallback value and no retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedModel {
    pub code: i32,
}

impl std::fmt::Display for UnsupportedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "attenuation length model {} unknown", self.code)
    }
}

impl std::error::Error for UnsupportedModel {}

impl IceModel {
    /// Resolve an integer model selector.
    ///
    /// `1` is the dielectric model, `2` the Greenland table; any other code
    /// fails with [`UnsupportedModel`].
    pub fn from_code(code: i32) -> Result<Self, UnsupportedModel> {
        match code {
            1 => Ok(IceModel::Dielectric),
            2 => Ok(IceModel::Greenland),
            _ => Err(UnsupportedModel { code }),
        }
    }

    /// The integer selector this model answers to.
    pub fn code(self) -> i32 {
        match self {
            IceModel::Dielectric => 1,
            IceModel::Greenland => 2,
        }
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            IceModel::Dielectric => "dielectric (model 1)",
            IceModel::Greenland => "Greenland table (model 2)",
        }
    }

    /// Cycle to the other model (used by the TUI toggle).
    pub fn next(self) -> Self {
        match self {
            IceModel::Dielectric => IceModel::Greenland,
            IceModel::Greenland => IceModel::Dielectric,
        }
    }
}

/// A single sampled point of an attenuation profile.
///
/// Lengths are in meters; depth is negative below the surface.
#[derive(Debug, Clone, Copy)]
pub struct ProfilePoint {
    pub depth_m: f64,
    /// Ice temperature at this depth (°C), from the bore-hole fit.
    pub temperature_c: f64,
    /// Attenuation length (m) at the configured frequency.
    pub length_m: f64,
}

/// Summary statistics over a sampled profile.
#[derive(Debug, Clone, Copy)]
pub struct ProfileStats {
    pub n_points: usize,
    pub depth_min_m: f64,
    pub depth_max_m: f64,
    pub length_min_m: f64,
    pub length_max_m: f64,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults). Physical quantities are
/// stored in the crate's base units (meters, gigahertz).
#[derive(Debug, Clone)]
pub struct ProfileConfig {
    pub model: IceModel,
    /// Signal frequency in base units (multiples of `units::GHZ`).
    pub frequency: f64,
    /// Shallow end of the sweep (m, typically 0 or negative).
    pub depth_max_m: f64,
    /// Deep end of the sweep (m, negative).
    pub depth_min_m: f64,
    /// Number of uniformly spaced depth samples.
    pub samples: usize,
    /// Number of rows to print in the sample table.
    pub table_rows: usize,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_results: Option<PathBuf>,
    pub export_profile: Option<PathBuf>,
}

/// A saved profile file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileFile {
    pub tool: String,
    pub generated: NaiveDate,
    pub model: IceModel,
    pub frequency_mhz: f64,
    pub grid: ProfileGrid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileGrid {
    pub depth_m: Vec<f64>,
    pub length_m: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_codes_round_trip() {
        assert_eq!(IceModel::from_code(1), Ok(IceModel::Dielectric));
        assert_eq!(IceModel::from_code(2), Ok(IceModel::Greenland));
        assert_eq!(IceModel::Dielectric.code(), 1);
        assert_eq!(IceModel::Greenland.code(), 2);
    }

    #[test]
    fn unknown_codes_are_rejected() {
        for code in [0, 3, -1, 42] {
            let err = IceModel::from_code(code).unwrap_err();
            assert_eq!(err.code, code);
            assert!(err.to_string().contains(&code.to_string()));
        }
    }
}
