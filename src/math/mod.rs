//! Mathematical utilities: small interpolation helpers.

pub mod interp;

pub use interp::*;
