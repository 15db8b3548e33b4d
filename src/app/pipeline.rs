//! Shared "profile pipeline" logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! depth grid -> model evaluation -> stats
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use rayon::prelude::*;

use crate::domain::{ProfileConfig, ProfilePoint, ProfileStats};
use crate::error::AppError;
use crate::models;
use crate::units;

/// All computed outputs of a single profile run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub points: Vec<ProfilePoint>,
    pub stats: ProfileStats,
}

/// Sample the attenuation profile on a uniform depth grid.
///
/// Each grid point is an independent pure model call, so the sweep is a
/// plain parallel map.
pub fn run_profile(config: &ProfileConfig) -> Result<RunOutput, AppError> {
    if config.samples < 2 {
        return Err(AppError::new(3, "Need at least 2 depth samples."));
    }
    if !(config.depth_min_m < config.depth_max_m) {
        return Err(AppError::new(
            3,
            format!(
                "Invalid depth range [{}, {}]: the deep end must be below the shallow end.",
                config.depth_min_m, config.depth_max_m
            ),
        ));
    }
    if !(config.frequency > 0.0) {
        return Err(AppError::new(3, "Frequency must be positive."));
    }

    let n = config.samples;
    let points: Vec<ProfilePoint> = (0..n)
        .into_par_iter()
        .map(|i| {
            let u = i as f64 / (n as f64 - 1.0);
            let depth_m = config.depth_min_m + u * (config.depth_max_m - config.depth_min_m);
            let z = depth_m * units::METER;
            ProfilePoint {
                depth_m,
                temperature_c: models::temperature(z),
                length_m: models::attenuation_length(z, config.frequency, config.model)
                    / units::METER,
            }
        })
        .collect();

    let stats = compute_stats(&points)?;

    Ok(RunOutput { points, stats })
}

fn compute_stats(points: &[ProfilePoint]) -> Result<ProfileStats, AppError> {
    let mut length_min = f64::INFINITY;
    let mut length_max = f64::NEG_INFINITY;
    for p in points {
        if !p.length_m.is_finite() {
            return Err(AppError::new(
                4,
                format!("Non-finite attenuation length at depth {} m.", p.depth_m),
            ));
        }
        length_min = length_min.min(p.length_m);
        length_max = length_max.max(p.length_m);
    }

    Ok(ProfileStats {
        n_points: points.len(),
        depth_min_m: points.first().map(|p| p.depth_m).unwrap_or(0.0),
        depth_max_m: points.last().map(|p| p.depth_m).unwrap_or(0.0),
        length_min_m: length_min,
        length_max_m: length_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IceModel;
    use crate::units;

    fn config(model: IceModel) -> ProfileConfig {
        ProfileConfig {
            model,
            frequency: 300.0 * units::MHZ,
            depth_min_m: -3000.0,
            depth_max_m: 0.0,
            samples: 61,
            table_rows: 10,
            plot: false,
            plot_width: 80,
            plot_height: 20,
            export_results: None,
            export_profile: None,
        }
    }

    #[test]
    fn profile_covers_the_requested_grid() {
        let run = run_profile(&config(IceModel::Dielectric)).unwrap();
        assert_eq!(run.points.len(), 61);
        assert_eq!(run.points[0].depth_m, -3000.0);
        assert_eq!(run.points[60].depth_m, 0.0);
        assert_eq!(run.stats.n_points, 61);
        assert!(run.stats.length_min_m > 0.0);
        assert!(run.stats.length_max_m >= run.stats.length_min_m);
    }

    #[test]
    fn grid_points_match_direct_model_calls() {
        let cfg = config(IceModel::Greenland);
        let run = run_profile(&cfg).unwrap();
        for p in run.points.iter().step_by(10) {
            let expected =
                models::attenuation_length(p.depth_m * units::METER, cfg.frequency, cfg.model);
            assert_eq!(p.length_m, expected);
        }
    }

    #[test]
    fn bad_ranges_are_rejected() {
        let mut cfg = config(IceModel::Dielectric);
        cfg.depth_min_m = 0.0;
        cfg.depth_max_m = -100.0;
        let err = run_profile(&cfg).unwrap_err();
        assert_eq!(err.exit_code(), 3);

        let mut cfg = config(IceModel::Dielectric);
        cfg.samples = 1;
        assert!(run_profile(&cfg).is_err());
    }
}
