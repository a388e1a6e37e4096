//! Float comparison helpers shared by the workspace test suites.

/// Absolute and relative tolerance pair for comparing floats.
///
/// The defaults suit quantities of order one (mass fractions, ratios);
/// comparisons against large magnitudes lean on the relative bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// True when `a` and `b` agree within `tol`: the absolute bound decides
/// near zero, the relative bound (scaled by the larger magnitude)
/// everywhere else.
pub fn nearly_equal(a: f64, b: f64, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}
