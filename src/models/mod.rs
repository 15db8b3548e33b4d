//! Attenuation models and the model dispatcher.
//!
//! The simulation-facing surface is two pure functions:
//!
//! - [`attenuation_length`] for callers holding an [`IceModel`]
//! - [`attenuation_length_from_code`] for callers carrying the legacy
//!   integer model selector
//!
//! Everything is deterministic, allocation-free, and safe to call from any
//! number of threads: the only state is the compiled-in Greenland table.

pub mod dielectric;
pub mod greenland;
pub mod temperature;

pub use temperature::temperature;

use crate::domain::{IceModel, UnsupportedModel};

/// Radio attenuation length at depth `z` and `frequency` under `model`.
///
/// `z` is in base length units (negative below the ice surface), `frequency`
/// in base frequency units; the result is in base length units.
pub fn attenuation_length(z: f64, frequency: f64, model: IceModel) -> f64 {
    match model {
        IceModel::Dielectric => dielectric::attenuation_length(z, frequency),
        IceModel::Greenland => greenland::attenuation_length(z, frequency),
    }
}

/// Numeric-selector boundary: model 1 is dielectric, model 2 the Greenland
/// table, anything else an [`UnsupportedModel`] error.
pub fn attenuation_length_from_code(
    z: f64,
    frequency: f64,
    code: i32,
) -> Result<f64, UnsupportedModel> {
    Ok(attenuation_length(z, frequency, IceModel::from_code(code)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units;

    #[test]
    fn code_dispatch_matches_direct_calls() {
        let z = -800.0 * units::METER;
        let f = 200.0 * units::MHZ;

        let l1 = attenuation_length_from_code(z, f, 1).unwrap();
        assert_eq!(l1, attenuation_length(z, f, IceModel::Dielectric));

        let l2 = attenuation_length_from_code(z, f, 2).unwrap();
        assert_eq!(l2, attenuation_length(z, f, IceModel::Greenland));
    }

    #[test]
    fn unknown_code_is_an_error_not_a_number() {
        let err = attenuation_length_from_code(-100.0, 75.0 * units::MHZ, 3).unwrap_err();
        assert_eq!(err.code, 3);
    }
}
