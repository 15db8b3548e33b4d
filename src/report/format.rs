//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the model/math code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::app::pipeline::RunOutput;
use crate::domain::{IceModel, ProfileConfig, ProfilePoint};
use crate::units;

/// Format the full run summary (configuration + profile stats).
pub fn format_run_summary(run: &RunOutput, config: &ProfileConfig) -> String {
    let mut out = String::new();

    out.push_str("=== iceatt - Ice Attenuation Profile ===\n");
    out.push_str(&format!("Model: {}\n", config.model.display_name()));
    out.push_str(&format!(
        "Frequency: {:.1} MHz\n",
        config.frequency / units::MHZ
    ));
    out.push_str(&format!(
        "Depth: [{:.1}, {:.1}] m | n={}\n",
        run.stats.depth_min_m, run.stats.depth_max_m, run.stats.n_points
    ));
    out.push_str(&format!(
        "Attenuation length: [{:.2}, {:.2}] m\n",
        run.stats.length_min_m, run.stats.length_max_m
    ));

    if let (Some(deep), Some(shallow)) = (run.points.first(), run.points.last()) {
        out.push_str(&format!(
            "Ice temperature: {:.2} C at {:.0} m, {:.2} C at {:.0} m\n",
            deep.temperature_c, deep.depth_m, shallow.temperature_c, shallow.depth_m
        ));
    }
    out.push('\n');

    out
}

/// Format an evenly thinned table of sampled profile points.
pub fn format_sample_table(points: &[ProfilePoint], rows: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:>12} {:>10} {:>14}\n",
        "depth (m)", "T (C)", "L (m)"
    ));
    out.push_str(&format!("{:->12} {:->10} {:->14}\n", "", "", ""));

    for p in thin(points, rows) {
        out.push_str(&format!(
            "{:>12.1} {:>10.2} {:>14.2}\n",
            p.depth_m, p.temperature_c, p.length_m
        ));
    }

    out
}

/// Format a single-point evaluation.
pub fn format_eval(depth_m: f64, freq_mhz: f64, model: IceModel, temp_c: f64, length_m: f64) -> String {
    let mut out = String::new();
    out.push_str(&format!("Model: {}\n", model.display_name()));
    out.push_str(&format!("Depth: {depth_m:.2} m\n"));
    out.push_str(&format!("Frequency: {freq_mhz:.1} MHz\n"));
    out.push_str(&format!("Ice temperature: {temp_c:.2} C\n"));
    out.push_str(&format!("Attenuation length: {length_m:.2} m\n"));
    out
}

/// Pick up to `rows` points evenly across the profile, always keeping both ends.
fn thin(points: &[ProfilePoint], rows: usize) -> Vec<ProfilePoint> {
    let rows = rows.max(2);
    if points.len() <= rows {
        return points.to_vec();
    }
    let mut out = Vec::with_capacity(rows);
    for i in 0..rows {
        let u = i as f64 / (rows as f64 - 1.0);
        let idx = (u * (points.len() as f64 - 1.0)).round() as usize;
        out.push(points[idx]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_profile;
    use crate::domain::ProfileConfig;

    fn sample_run() -> (RunOutput, ProfileConfig) {
        let config = ProfileConfig {
            model: IceModel::Greenland,
            frequency: 150.0 * units::MHZ,
            depth_min_m: -3000.0,
            depth_max_m: 0.0,
            samples: 31,
            table_rows: 8,
            plot: false,
            plot_width: 80,
            plot_height: 20,
            export_results: None,
            export_profile: None,
        };
        let run = run_profile(&config).unwrap();
        (run, config)
    }

    #[test]
    fn summary_mentions_model_and_frequency() {
        let (run, config) = sample_run();
        let summary = format_run_summary(&run, &config);
        assert!(summary.contains("Greenland table"));
        assert!(summary.contains("150.0 MHz"));
        assert!(summary.contains("n=31"));
    }

    #[test]
    fn table_is_thinned_and_keeps_both_ends() {
        let (run, _) = sample_run();
        let table = format_sample_table(&run.points, 8);
        // 2 header lines + 8 data rows.
        assert_eq!(table.lines().count(), 10);
        assert!(table.contains("-3000.0"));
        assert!(table.contains("0.0"));
    }

    #[test]
    fn short_profiles_are_printed_in_full() {
        let (run, _) = sample_run();
        let table = format_sample_table(&run.points[..3], 8);
        assert_eq!(table.lines().count(), 5);
    }
}
