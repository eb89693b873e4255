// src/linearization.rs
//! Tangent-line (first-order Taylor) approximation checks
//!
//! # Mathematical Foundation
//!
//! For a differentiable f near x₀:
//! ```text
//! f(x₀ + Δ) ≈ f(x₀) + f'(x₀)·Δ
//! ```
//! The remainder is O(Δ²), so halving the step should roughly quarter the
//! error. The same idea drives Greek-based P&L estimates: a Greek is the
//! slope, the parameter move is Δ.

use crate::analytics::bs_analytic::{call_greeks, price_call, BsParams};
use crate::error::{validation::*, BsError, BsResult};
use log::debug;

/// Actual versus linearized change of a function around `x0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentCheck {
    pub x0: f64,
    pub delta: f64,
    /// f(x0 + Δ) - f(x0)
    pub actual_change: f64,
    /// f'(x0)·Δ
    pub approx_change: f64,
    /// |actual - approx|
    pub error: f64,
}

/// f(x) = x²
pub fn square(x: f64) -> f64 {
    x * x
}

/// f'(x) = 2x
pub fn square_derivative(x: f64) -> f64 {
    2.0 * x
}

/// Compare the actual change of `f` over `[x0, x0 + delta]` with its tangent-line estimate
///
/// # Errors
/// `BsError::Domain` when `x0`, `delta` or any evaluated value is not finite.
pub fn tangent_check<F, D>(f: F, df: D, x0: f64, delta: f64) -> BsResult<TangentCheck>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    validate_finite("x0", x0)?;
    validate_finite("delta", delta)?;

    let base = f(x0);
    let moved = f(x0 + delta);
    let slope = df(x0);
    validate_finite("f(x0)", base)?;
    validate_finite("f(x0 + delta)", moved)?;
    validate_finite("f'(x0)", slope)?;

    let actual_change = moved - base;
    let approx_change = slope * delta;
    Ok(TangentCheck {
        x0,
        delta,
        actual_change,
        approx_change,
        error: (actual_change - approx_change).abs(),
    })
}

/// Run [`tangent_check`] for each perturbation in `deltas`
pub fn error_decay<F, D>(f: F, df: D, x0: f64, deltas: &[f64]) -> BsResult<Vec<TangentCheck>>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    if deltas.is_empty() {
        return Err(BsError::InvalidConfiguration {
            field: "deltas".to_string(),
            reason: "at least one perturbation is required".to_string(),
        });
    }
    deltas
        .iter()
        .map(|&delta| tangent_check(&f, &df, x0, delta))
        .collect()
}

/// True when every successive check has a strictly smaller error
pub fn decays_monotonically(checks: &[TangentCheck]) -> bool {
    checks.windows(2).all(|w| w[1].error < w[0].error)
}

/// Option price after shortening maturity versus its theta-based estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThetaDecayCheck {
    pub dt: f64,
    /// Price at the original maturity T
    pub base_price: f64,
    /// Price recomputed at T - dt
    pub actual_price: f64,
    /// price + (∂C/∂T)·(-dt)
    pub approx_price: f64,
    /// |actual - approx|
    pub error: f64,
}

/// Advance calendar time by `dt` and compare the recomputed price with the
/// first-order estimate built from theta.
///
/// Theta is calendar decay, so the maturity sensitivity is `-theta` and the
/// maturity moves by `-dt`.
///
/// # Errors
/// - `BsError::Domain` for invalid pricing inputs or non-positive `dt`
/// - `BsError::InvalidConfiguration` when `dt >= T`
pub fn theta_decay_check(params: &BsParams, dt: f64) -> BsResult<ThetaDecayCheck> {
    params.validate()?;
    validate_positive("dt", dt)?;
    validate_below("dt", dt, params.t)?;

    let base_price = price_call(params)?.price;
    let theta = call_greeks(params)?.theta;
    let actual_price = price_call(&params.with_t(params.t - dt))?.price;

    let maturity_sensitivity = -theta;
    let approx_price = base_price + maturity_sensitivity * (-dt);
    let error = (actual_price - approx_price).abs();

    debug!(
        "theta decay dt={} actual={:.6} approx={:.6} error={:e}",
        dt, actual_price, approx_price, error
    );

    Ok(ThetaDecayCheck {
        dt,
        base_price,
        actual_price,
        approx_price,
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_square_tangent_small_step() {
        let check = tangent_check(square, square_derivative, 10.0, 0.1).unwrap();
        assert_relative_eq!(check.actual_change, 2.01, epsilon = 1e-9);
        assert_relative_eq!(check.approx_change, 2.0, epsilon = 1e-12);
        assert_relative_eq!(check.error, 0.01, epsilon = 1e-9);
    }

    #[test]
    fn test_linear_function_has_no_error() {
        let check = tangent_check(|x| 3.0 * x + 1.0, |_| 3.0, 2.0, 0.5).unwrap();
        assert!(check.error < 1e-12);
    }

    #[test]
    fn test_empty_deltas_rejected() {
        assert!(error_decay(square, square_derivative, 1.0, &[]).is_err());
    }

    #[test]
    fn test_non_finite_evaluation_rejected() {
        let err = tangent_check(|x: f64| x.ln(), |x| 1.0 / x, 0.0, 0.1).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn test_theta_decay_rejects_dt_past_expiry() {
        let params = BsParams::default();
        assert!(theta_decay_check(&params, 1.0).is_err());
        assert!(theta_decay_check(&params, 0.0).is_err());
        assert!(theta_decay_check(&params, -0.1).is_err());
    }
}
