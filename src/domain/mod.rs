//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the closed ice-model enum (`IceModel`) and its numeric-code boundary
//! - profile sweep configuration (`ProfileConfig`)
//! - sampled profile outputs (`ProfilePoint`, `ProfileStats`)
//! - the portable profile JSON schema (`ProfileFile`, `ProfileGrid`)

pub mod types;

pub use types::*;
