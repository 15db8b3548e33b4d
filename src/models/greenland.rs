//! Tabulated Greenland attenuation-depth profile (model 2).
//!
//! Measured bulk attenuation lengths for the Greenland ice sheet, taken from
//! DOI: <https://doi.org/10.3189/2015JoG15J057>. The measurements are at a
//! reference frequency of 75 MHz; other frequencies apply a linear
//! correction on top of the depth interpolation.

use crate::math::{bracket_strict, lerp};
use crate::units;

/// Measured attenuation lengths (m) at the 75 MHz reference frequency,
/// index-aligned with [`DEPTH_M`].
pub const ATT_LENGTH_75MHZ_M: [f64; 90] = [
    453.19, 461.92, 472.39, 483.73, 492.46, 502.05, 510.78, 519.50, 528.23,
    534.33, 543.06, 550.91, 561.38, 575.34, 584.06, 595.40, 605.87, 617.21,
    627.68, 639.90, 651.24, 660.83, 673.05, 683.52, 693.98, 702.71, 714.05,
    728.88, 741.97, 760.29, 775.99, 786.46, 799.54, 810.88, 823.10, 836.18,
    848.40, 860.61, 871.08, 883.29, 899.87, 911.21, 926.04, 938.25, 948.72,
    960.94, 974.02, 986.24, 997.58, 1008.05, 1022.01, 1031.61, 1043.82,
    1056.91, 1065.63, 1076.98, 1088.32, 1099.66, 1113.63, 1121.48, 1133.7,
    1141.55, 1150.28, 1159.89, 1168.62, 1174.74, 1179.11, 1180.87, 1180.01,
    1179.15, 1174.80, 1169.59, 1165.25, 1160.03, 1153.94, 1149.59, 1144.37,
    1140.03, 1137.42, 1134.82, 1133.97, 1135.73, 1136.62, 1140.12, 1143.63,
    1148.00, 1154.12, 1153.27, 1153.28, 1152.42,
];

/// Measurement depths (m, negative below the surface), ascending from the
/// bottom of the sounded column to just under the surface.
pub const DEPTH_M: [f64; 90] = [
    -3038.15, -3007.84, -2988.93, -2962.42, -2947.29, -2935.95, -2913.23,
    -2901.89, -2890.55, -2875.41, -2860.27, -2845.14, -2826.22, -2811.10,
    -2792.18, -2773.26, -2754.34, -2739.22, -2716.51, -2701.39, -2682.47,
    -2663.55, -2644.64, -2633.30, -2614.38, -2603.04, -2580.34, -2565.23,
    -2538.73, -2512.26, -2493.36, -2470.65, -2451.74, -2440.41, -2417.71,
    -2395.01, -2379.89, -2357.19, -2342.06, -2319.35, -2296.67, -2285.34,
    -2262.64, -2243.73, -2221.02, -2202.11, -2179.41, -2156.70, -2126.41,
    -2118.87, -2092.38, -2069.66, -2043.16, -2024.26, -1997.74, -1967.45,
    -1944.74, -1918.24, -1880.37, -1853.86, -1827.36, -1789.47, -1755.37,
    -1702.31, -1641.67, -1588.60, -1524.14, -1459.67, -1395.19, -1330.71,
    -1285.18, -1194.14, -1129.64, -1061.35, -1000.64, -947.53, -883.03,
    -810.95, -746.46, -678.19, -606.12, -537.86, -458.22, -378.59, -306.54,
    -238.29, -173.84, -97.98, -44.89, -3.16,
];

/// Attenuation length (base length units) at depth `z` and `frequency`.
///
/// Depths outside the tabulated range return the nearest edge value as-is;
/// the frequency correction deliberately does not apply there. Interior
/// depths interpolate the 75 MHz measurement linearly, then shift it by
/// −0.55 m per MHz above the reference. Far above 75 MHz the shifted length
/// can go non-positive; that degenerate regime is returned silently.
pub fn attenuation_length(z: f64, frequency: f64) -> f64 {
    let z = z / units::METER;

    let last = DEPTH_M.len() - 1;
    if z < DEPTH_M[0] {
        return ATT_LENGTH_75MHZ_M[0] * units::METER;
    }
    if z > DEPTH_M[last] {
        return ATT_LENGTH_75MHZ_M[last] * units::METER;
    }

    // Exact table hits take the measured value directly; a zero-width
    // bracket would divide by zero.
    let l75 = if let Some(k) = DEPTH_M.iter().position(|&d| d == z) {
        ATT_LENGTH_75MHZ_M[k]
    } else if let Some(i) = bracket_strict(&DEPTH_M, z) {
        lerp(
            z,
            DEPTH_M[i],
            ATT_LENGTH_75MHZ_M[i],
            DEPTH_M[i + 1],
            ATT_LENGTH_75MHZ_M[i + 1],
        )
    } else {
        // Not reachable: the table is strictly ascending and z is interior
        // and not an exact entry. Nearest edge, rather than a panic path.
        ATT_LENGTH_75MHZ_M[0]
    };

    (l75 - 0.55 * (frequency / units::MHZ - 75.0)) * units::METER
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units;

    #[test]
    fn table_columns_are_aligned_and_ordered() {
        assert_eq!(ATT_LENGTH_75MHZ_M.len(), DEPTH_M.len());
        for w in DEPTH_M.windows(2) {
            assert!(w[0] < w[1], "depth table must be strictly ascending");
        }
    }

    #[test]
    fn edge_clamps_ignore_frequency() {
        for freq_mhz in [10.0, 75.0, 600.0] {
            let f = freq_mhz * units::MHZ;
            assert_eq!(attenuation_length(-4000.0, f), ATT_LENGTH_75MHZ_M[0]);
            assert_eq!(attenuation_length(0.0, f), ATT_LENGTH_75MHZ_M[89]);
        }
    }

    #[test]
    fn exact_depths_return_the_measurement_at_reference_frequency() {
        let f75 = 75.0 * units::MHZ;
        for k in [0, 1, 40, 88, 89] {
            let l = attenuation_length(DEPTH_M[k] * units::METER, f75);
            assert!(
                (l - ATT_LENGTH_75MHZ_M[k]).abs() < 1e-9,
                "L(depth[{k}], 75 MHz) should be the table value"
            );
        }
    }

    #[test]
    fn interior_midpoints_interpolate_linearly() {
        let f75 = 75.0 * units::MHZ;
        let z = 0.5 * (DEPTH_M[0] + DEPTH_M[1]);
        let expected = 0.5 * (ATT_LENGTH_75MHZ_M[0] + ATT_LENGTH_75MHZ_M[1]);
        assert!((attenuation_length(z, f75) - expected).abs() < 1e-9);
    }

    #[test]
    fn frequency_correction_is_linear_with_known_slope() {
        let z = DEPTH_M[5] * units::METER;
        let base = ATT_LENGTH_75MHZ_M[5];
        let l = attenuation_length(z, 100.0 * units::MHZ);
        assert!((l - (base - 0.55 * 25.0)).abs() < 1e-9);
    }

    #[test]
    fn length_strictly_decreases_with_frequency_at_fixed_depth() {
        let z = -1500.0 * units::METER;
        let mut prev = attenuation_length(z, 75.0 * units::MHZ);
        for freq_mhz in [100.0, 150.0, 300.0, 600.0] {
            let l = attenuation_length(z, freq_mhz * units::MHZ);
            assert!(l < prev);
            prev = l;
        }
    }
}
