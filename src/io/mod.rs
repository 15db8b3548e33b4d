//! Input/output helpers.
//!
//! - profile JSON read/write (`profile`)
//! - result exports (CSV) (`export`)

pub mod export;
pub mod profile;

pub use export::*;
pub use profile::*;
