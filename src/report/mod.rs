//! Reporting utilities: run summaries and sampled-profile tables.

pub mod format;

pub use format::*;
