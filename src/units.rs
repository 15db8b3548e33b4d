//! Physical unit constants.
//!
//! All lengths inside this crate are held in meters and all frequencies in
//! gigahertz. Call sites attach units explicitly (`-1500.0 * units::METER`,
//! `300.0 * units::MHZ`) and formulas divide by the unit they expect
//! (`f / units::GHZ`), so a quantity can never silently change convention.

/// Base length unit: the meter.
pub const METER: f64 = 1.0;

/// Base frequency unit: the gigahertz.
pub const GHZ: f64 = 1.0;

pub const MHZ: f64 = 1e-3 * GHZ;

pub const HZ: f64 = 1e-9 * GHZ;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_units_are_consistent() {
        assert_eq!(1000.0 * MHZ, 1.0 * GHZ);
        assert_eq!(1e9 * HZ, 1.0 * GHZ);
    }
}
