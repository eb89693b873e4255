// src/math_utils.rs
use statrs::function::erf;
use std::f64::consts::{PI, SQRT_2};

/// Standard normal cumulative distribution function Φ(x)
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf::erf(x / SQRT_2))
}

/// Standard normal probability density function
///
/// # Formula
/// ```text
/// φ(x) = (1/√(2π)) * exp(-x²/2)
/// ```
pub fn norm_pdf(x: f64) -> f64 {
    (1.0 / (2.0 * PI).sqrt()) * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_norm_cdf_table_values() {
        assert_abs_diff_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(norm_cdf(1.0), 0.841_344_746, epsilon = 1e-8);
        assert_abs_diff_eq!(norm_cdf(-1.96), 0.024_997_895, epsilon = 1e-8);
        assert_abs_diff_eq!(norm_cdf(1.0) + norm_cdf(-1.0), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_pdf_peak_and_symmetry() {
        assert_abs_diff_eq!(norm_pdf(0.0), 0.398_942_280_4, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_pdf(1.3), norm_pdf(-1.3), epsilon = 1e-15);
    }
}
