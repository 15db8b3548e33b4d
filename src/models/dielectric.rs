//! Temperature-dependent dielectric-loss attenuation model (model 1).
//!
//! The attenuation rate of cold ice is known from laboratory fits at two
//! reference frequencies, 0.1 MHz and 3.16 GHz, plus a mid fit at 1 GHz.
//! The log attenuation rate is linear in log frequency within each regime,
//! so we interpolate (or extrapolate) the rate between the bracketing fits
//! and invert it into a length.

use crate::math::line_through;
use crate::models::temperature::temperature;
use crate::units;

/// Attenuation length (base length units) at depth `z` and `frequency`.
///
/// Strictly positive for all finite inputs: the result is the reciprocal of
/// an exponential. Continuous in frequency, including across the regime seam
/// at 1 GHz, which evaluates on the upper fit.
pub fn attenuation_length(z: f64, frequency: f64) -> f64 {
    let t = temperature(z);

    // Reference frequencies in GHz; w is log frequency, so the mid fit at
    // 1 GHz sits at w1 = 0.
    let f0: f64 = 1e-4;
    let f2: f64 = 3.16;
    let w0 = f0.ln();
    let w1 = 0.0;
    let w2 = f2.ln();
    let w = (frequency / units::GHZ).ln();

    // Temperature-dependent log attenuation rates at the three fit points.
    let b0 = -6.748_90 + t * (0.026709 - t * 0.000884);
    let b1 = -6.221_21 - t * (0.070927 + t * 0.001773);
    let b2 = -4.094_68 - t * (0.002213 + t * 0.000332);

    // Below 1 GHz the rate follows the (f0, 1 GHz) line; at and above 1 GHz
    // the (1 GHz, f2) line. The seam is inclusive on the high side.
    let (a, bb) = if frequency < 1.0 * units::GHZ {
        line_through(w0, b0, w1, b1)
    } else {
        line_through(w1, b1, w2, b2)
    };

    1.0 / (a + bb * w).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units;

    #[test]
    fn length_is_strictly_positive() {
        for depth_m in [0.0, -200.0, -1000.0, -2500.0, -3000.0] {
            for freq_mhz in [10.0, 75.0, 300.0, 1000.0, 2500.0] {
                let l = attenuation_length(depth_m * units::METER, freq_mhz * units::MHZ);
                assert!(l > 0.0, "L must be positive at z={depth_m}, f={freq_mhz} MHz");
                assert!(l.is_finite());
            }
        }
    }

    #[test]
    fn seam_at_1ghz_is_continuous() {
        let z = -1200.0 * units::METER;
        let below = attenuation_length(z, 0.999_999 * units::GHZ);
        let at = attenuation_length(z, 1.0 * units::GHZ);
        assert!(((below - at) / at).abs() < 1e-4);
    }

    #[test]
    fn one_ghz_evaluates_the_mid_fit_directly() {
        // At w = 0 both regime lines pass through b1, so L(1 GHz) = exp(-b1).
        let z = -700.0 * units::METER;
        let t = temperature(z);
        let b1 = -6.221_21 - t * (0.070927 + t * 0.001773);
        let l = attenuation_length(z, 1.0 * units::GHZ);
        assert!((l - (-b1).exp()).abs() < 1e-9 * l);
    }

    #[test]
    fn length_shrinks_with_frequency() {
        // Dielectric loss grows with frequency throughout the band of
        // interest, so the length should fall as frequency rises.
        let z = -1500.0 * units::METER;
        let mut prev = attenuation_length(z, 50.0 * units::MHZ);
        for freq_mhz in [100.0, 200.0, 500.0, 1000.0, 2000.0] {
            let l = attenuation_length(z, freq_mhz * units::MHZ);
            assert!(l < prev, "L should decrease with frequency at {freq_mhz} MHz");
            prev = l;
        }
    }
}
