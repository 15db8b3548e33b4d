//! Bore-hole temperature profile of deep glacial ice.
//!
//! Cubic polynomial fit to measured ice temperatures,
//! from <https://icecube.wisc.edu/~araproject/radio/#icetemperature>.

use crate::units;

/// Ice temperature (°C) at depth `z` (base length units, negative below the
/// surface). Defined for all real `z`; only the magnitude of the depth enters
/// the fit.
pub fn temperature(z: f64) -> f64 {
    let d = (z / units::METER).abs();
    1.83415e-9 * d * d * d - 1.59061e-8 * d * d + 0.00267687 * d - 51.0696
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units;

    #[test]
    fn surface_temperature_is_the_fit_constant() {
        assert!((temperature(0.0) - (-51.0696)).abs() < 1e-12);
    }

    #[test]
    fn matches_hand_computed_value_at_1km() {
        // d = 1000: 1.83415 - 0.0159061 + 2.67687 - 51.0696
        let expected = -46.574_486_1;
        assert!((temperature(-1000.0 * units::METER) - expected).abs() < 1e-6);
    }

    #[test]
    fn depends_only_on_depth_magnitude() {
        assert_eq!(temperature(-573.0), temperature(573.0));
    }

    #[test]
    fn warms_monotonically_with_depth_over_the_bore_hole() {
        let mut prev = temperature(0.0);
        for d in 1..=30 {
            let t = temperature(-(d as f64) * 100.0 * units::METER);
            assert!(t > prev, "temperature should increase with depth at {d}00 m");
            prev = t;
        }
    }
}
