//! Command-line parsing for the ice attenuation calculator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::IceModel;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "iceatt", version, about = "Glacial-ice radio attenuation length calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate the attenuation length at a single depth and frequency.
    Eval(EvalArgs),
    /// Sample a full depth profile, print a summary/table, and optionally plot/export.
    Profile(ProfileArgs),
    /// Plot a previously exported profile JSON.
    Plot(PlotArgs),
    /// Launch the interactive TUI.
    ///
    /// This uses the same underlying profile pipeline as `iceatt profile`, but
    /// renders results in a terminal UI using Ratatui.
    Tui(ProfileArgs),
}

/// Single-point evaluation.
///
/// The model is selected by its integer code here, mirroring the calling
/// convention of the surrounding propagation simulation; unknown codes fail
/// cleanly before any computation.
#[derive(Debug, Parser)]
pub struct EvalArgs {
    /// Depth (m, negative below the ice surface).
    #[arg(short = 'z', long, allow_hyphen_values = true)]
    pub depth: f64,

    /// Signal frequency (MHz).
    #[arg(short = 'f', long, default_value_t = 300.0)]
    pub freq_mhz: f64,

    /// Model code (1 = dielectric, 2 = Greenland table).
    #[arg(short = 'm', long, default_value_t = 1)]
    pub model: i32,
}

/// Common options for profile sweeps and the TUI.
#[derive(Debug, Parser, Clone)]
pub struct ProfileArgs {
    /// Attenuation model.
    #[arg(short = 'm', long, value_enum, default_value_t = IceModel::Dielectric)]
    pub model: IceModel,

    /// Signal frequency (MHz).
    #[arg(short = 'f', long, default_value_t = 300.0)]
    pub freq_mhz: f64,

    /// Deep end of the sweep (m, negative below the surface).
    #[arg(long, default_value_t = -3000.0, allow_hyphen_values = true)]
    pub depth_min: f64,

    /// Shallow end of the sweep (m).
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub depth_max: f64,

    /// Number of uniformly spaced depth samples.
    #[arg(short = 'n', long, default_value_t = 121)]
    pub samples: usize,

    /// Rows in the printed sample table.
    #[arg(long, default_value_t = 12)]
    pub rows: usize,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export sampled points to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export profile (model + frequency + sampled grid) to JSON.
    #[arg(long = "export-profile")]
    pub export_profile: Option<PathBuf>,
}

/// Options for plotting a saved profile.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Profile JSON file produced by `iceatt profile --export-profile`.
    #[arg(long, value_name = "JSON")]
    pub profile: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
