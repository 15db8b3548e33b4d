//! Linear interpolation helpers shared by the attenuation models.
//!
//! Both models reduce to lines through two known points:
//!
//! - model 1 interpolates the log attenuation rate between two fit regimes
//!   in log-frequency space
//! - model 2 interpolates the measured attenuation length between two
//!   adjacent table depths
//!
//! Keeping the formulas here makes the intent of each model file read as
//! physics rather than index arithmetic.

/// Intercept and slope of the line through `(x0, y0)` and `(x1, y1)`.
///
/// Returned as `(a, b)` with `y = a + b·x`. The caller guarantees `x0 != x1`.
pub fn line_through(x0: f64, y0: f64, x1: f64, y1: f64) -> (f64, f64) {
    let a = (y1 * x0 - y0 * x1) / (x0 - x1);
    let b = (y1 - y0) / (x1 - x0);
    (a, b)
}

/// Linear interpolation of `y` at `x` between `(x0, y0)` and `(x1, y1)`.
///
/// The caller guarantees `x0 != x1`; `x` outside `[x0, x1]` extrapolates.
pub fn lerp(x: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

/// Find `i` such that `xs[i] < x < xs[i+1]` (strict on both sides).
///
/// Linear scan over an ascending table. Returns `None` when `x` falls outside
/// the table or lands exactly on an entry; the caller decides the policy for
/// those cases.
pub fn bracket_strict(xs: &[f64], x: f64) -> Option<usize> {
    for i in 0..xs.len().saturating_sub(1) {
        if xs[i] < x && x < xs[i + 1] {
            return Some(i);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_through_recovers_endpoints() {
        let (a, b) = line_through(1.0, 3.0, 4.0, 9.0);
        assert!((a + b * 1.0 - 3.0).abs() < 1e-12);
        assert!((a + b * 4.0 - 9.0).abs() < 1e-12);
        assert!((b - 2.0).abs() < 1e-12);
    }

    #[test]
    fn lerp_midpoint_and_extrapolation() {
        assert!((lerp(1.5, 1.0, 10.0, 2.0, 20.0) - 15.0).abs() < 1e-12);
        // Extrapolation follows the same line.
        assert!((lerp(3.0, 1.0, 10.0, 2.0, 20.0) - 30.0).abs() < 1e-12);
    }

    #[test]
    fn bracket_strict_interior_edges_and_exact() {
        let xs = [-3.0, -2.0, -1.0, 0.0];
        assert_eq!(bracket_strict(&xs, -1.5), Some(1));
        assert_eq!(bracket_strict(&xs, -4.0), None);
        assert_eq!(bracket_strict(&xs, 1.0), None);
        // Exact table entries are not a strict bracket.
        assert_eq!(bracket_strict(&xs, -2.0), None);
    }
}
