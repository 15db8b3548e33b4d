//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - evaluates the attenuation models / samples profiles
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, EvalArgs, PlotArgs, ProfileArgs};
use crate::domain::{IceModel, ProfileConfig};
use crate::error::AppError;
use crate::units;

pub mod pipeline;

/// Entry point for the `iceatt` binary.
pub fn run() -> Result<(), AppError> {
    // We want `iceatt` and `iceatt -m greenland` to behave like `iceatt tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Eval(args) => handle_eval(args),
        Command::Profile(args) => handle_profile(args),
        Command::Plot(args) => handle_plot(args),
        Command::Tui(args) => handle_tui(args),
    }
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    let model = IceModel::from_code(args.model)?;

    let z = args.depth * units::METER;
    let f = args.freq_mhz * units::MHZ;

    let temp_c = crate::models::temperature(z);
    let length_m = crate::models::attenuation_length(z, f, model) / units::METER;

    print!(
        "{}",
        crate::report::format_eval(args.depth, args.freq_mhz, model, temp_c, length_m)
    );
    Ok(())
}

fn handle_profile(args: ProfileArgs) -> Result<(), AppError> {
    let config = profile_config_from_args(&args);
    let run = pipeline::run_profile(&config)?;

    println!("{}", crate::report::format_run_summary(&run, &config));
    println!("{}", crate::report::format_sample_table(&run.points, config.table_rows));

    if config.plot {
        let plot = crate::plot::render_profile_plot(
            &run,
            config.model,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &config.export_results {
        crate::io::export::write_results_csv(path, &run, &config)?;
    }
    if let Some(path) = &config.export_profile {
        crate::io::profile::write_profile_json(path, &run, &config)?;
    }

    Ok(())
}

fn handle_tui(args: ProfileArgs) -> Result<(), AppError> {
    crate::tui::run(args)
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let profile = crate::io::profile::read_profile_json(&args.profile)?;

    let plot = crate::plot::render_profile_plot_from_file(&profile, args.width, args.height);

    println!("{plot}");
    Ok(())
}

pub fn profile_config_from_args(args: &ProfileArgs) -> ProfileConfig {
    ProfileConfig {
        model: args.model,
        frequency: args.freq_mhz * units::MHZ,
        depth_min_m: args.depth_min,
        depth_max_m: args.depth_max,
        samples: args.samples,
        table_rows: args.rows,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_results: args.export.clone(),
        export_profile: args.export_profile.clone(),
    }
}

/// Rewrite argv so `iceatt` defaults to `iceatt tui`.
///
/// Rules:
/// - `iceatt`                      -> `iceatt tui`
/// - `iceatt -m greenland ...`     -> `iceatt tui -m greenland ...`
/// - `iceatt --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "eval" | "profile" | "plot" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(args(&["iceatt"])), args(&["iceatt", "tui"]));
        assert_eq!(
            rewrite_args(args(&["iceatt", "-m", "greenland"])),
            args(&["iceatt", "tui", "-m", "greenland"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(args(&["iceatt", "profile", "-f", "150"])),
            args(&["iceatt", "profile", "-f", "150"])
        );
        assert_eq!(rewrite_args(args(&["iceatt", "--help"])), args(&["iceatt", "--help"]));
    }
}
