//! `ice-atten` library crate.
//!
//! The binary (`iceatt`) is a thin wrapper around this library so that:
//!
//! - the attenuation models are testable without spawning processes
//! - modules are reusable (e.g., embedding in a propagation simulation)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod debug;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
pub mod tui;
pub mod units;
