// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes formulas for European calls and their Greeks
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! The European call has the closed-form value
//! ```text
//! C(S,K,T,r,σ) = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
//! d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
//! d₂ = d₁ - σ√T
//! ```
//!
//! Every public function validates its inputs before evaluating anything,
//! so a bad slider value surfaces as [`BsError::Domain`](crate::error::BsError)
//! instead of NaN.

use crate::error::{validation::*, BsError, BsResult};
use crate::math_utils::{norm_cdf, norm_pdf};
use log::warn;

/// Below this σ√T the call value is numerically its discounted intrinsic value.
const DEGENERATE_VOL_TIME: f64 = 1e-8;

/// The five Black-Scholes inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BsParams {
    /// Current underlying price S
    pub s: f64,
    /// Strike price K
    pub k: f64,
    /// Time to maturity T in years
    pub t: f64,
    /// Risk-free rate r
    pub r: f64,
    /// Volatility σ
    pub sigma: f64,
}

impl BsParams {
    pub fn new(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> Self {
        BsParams { s, k, t, r, sigma }
    }

    /// Validate the pricing inputs
    pub fn validate(&self) -> BsResult<()> {
        validate_positive("s", self.s)?;
        validate_positive("k", self.k)?;
        validate_positive("t", self.t)?;
        validate_finite("r", self.r)?;
        validate_positive("sigma", self.sigma)?;

        // A very negative r·T overflows e^(-rT) and turns K·e^(-rT)·Φ(d₂) into ∞·0
        if !self.discounted_strike().is_finite() {
            return Err(BsError::Domain {
                parameter: "r".to_string(),
                value: self.r,
                constraint: format!(
                    "K·e^(-r·T) must be finite (r·T = {} is too negative)",
                    self.r * self.t
                ),
            });
        }
        Ok(())
    }

    /// Copy of these inputs with a different time to maturity
    pub fn with_t(&self, t: f64) -> Self {
        BsParams { t, ..*self }
    }

    /// Standardized variables (d₁, d₂) after validating the inputs
    pub fn d1_d2(&self) -> BsResult<(f64, f64)> {
        self.validate()?;
        let vol_time = self.sigma * self.t.sqrt();
        if vol_time < DEGENERATE_VOL_TIME {
            warn!(
                "σ√T = {:e} is degenerate; call value collapses to discounted intrinsic",
                vol_time
            );
        }
        let d1 = ((self.s / self.k).ln() + (self.r + 0.5 * self.sigma * self.sigma) * self.t)
            / vol_time;
        let d1 = validate_output("d1", d1)?;
        Ok((d1, d1 - vol_time))
    }

    fn discount(&self) -> f64 {
        (-self.r * self.t).exp()
    }

    fn discounted_strike(&self) -> f64 {
        self.k * self.discount()
    }
}

impl Default for BsParams {
    fn default() -> Self {
        BsParams {
            s: 101.0,
            k: 100.0,
            t: 1.0,
            r: 0.05,
            sigma: 0.2,
        }
    }
}

/// Call price together with the standardized variables it was built from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallQuote {
    pub price: f64,
    pub d1: f64,
    pub d2: f64,
}

/// First-order Greeks of a European call, plus Gamma
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Greeks {
    /// ∂C/∂S
    pub delta: f64,
    /// ∂²C/∂S²
    pub gamma: f64,
    /// Calendar time decay, equal to -∂C/∂T
    pub theta: f64,
    /// ∂C/∂σ
    pub vega: f64,
    /// ∂C/∂r
    pub rho: f64,
}

/// Black-Scholes European call option price
///
/// # Parameters
/// - `s`: Current stock price
/// - `k`: Strike price
/// - `t`: Time to expiration
/// - `r`: Risk-free rate
/// - `sigma`: Volatility
///
/// # Returns
/// Present value of the call with d₁ and d₂
///
/// # Errors
/// - `BsError::Domain` when S, K, T or σ is not strictly positive, any input
///   is not finite, or K·e^(-rT) overflows
/// - `BsError::NumericalInstability` if the result is still not finite
pub fn black_scholes_call(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> BsResult<CallQuote> {
    price_call(&BsParams::new(s, k, t, r, sigma))
}

/// [`black_scholes_call`] taking the bundled inputs
pub fn price_call(params: &BsParams) -> BsResult<CallQuote> {
    let (d1, d2) = params.d1_d2()?;
    let price = params.s * norm_cdf(d1) - params.discounted_strike() * norm_cdf(d2);
    let price = validate_output("call price", price)?;
    Ok(CallQuote { price, d1, d2 })
}

/// Black-Scholes Delta (∂C/∂S)
///
/// # Formula
/// ```text
/// Δ = Φ(d₁)
/// ```
///
/// # Interpretation
/// - Hedge ratio: shares of underlying per option sold
/// - Range: (0, 1) for calls
pub fn call_delta(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> BsResult<f64> {
    let (d1, _) = BsParams::new(s, k, t, r, sigma).d1_d2()?;
    validate_output("delta", norm_cdf(d1))
}

/// Black-Scholes Gamma (∂²C/∂S²)
///
/// # Formula
/// ```text
/// Γ = φ(d₁) / (S * σ * √T)
/// ```
pub fn call_gamma(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> BsResult<f64> {
    let (d1, _) = BsParams::new(s, k, t, r, sigma).d1_d2()?;
    validate_output("gamma", norm_pdf(d1) / (s * sigma * t.sqrt()))
}

/// Black-Scholes Theta for a European call
///
/// # Formula
/// ```text
/// Θ = -S*φ(d₁)*σ/(2√T) - r*K*e^(-rT)*Φ(d₂)
/// ```
///
/// # Interpretation
/// - Value lost per year of elapsed calendar time, usually negative
/// - Sensitivity to time *to maturity* is ∂C/∂T = -Θ; callers that move
///   T directly negate at the call site (see
///   [`theta_decay_check`](crate::linearization::theta_decay_check))
pub fn call_theta(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> BsResult<f64> {
    let params = BsParams::new(s, k, t, r, sigma);
    let (d1, d2) = params.d1_d2()?;
    let theta =
        (-s * norm_pdf(d1) * sigma) / (2.0 * t.sqrt()) - r * params.discounted_strike() * norm_cdf(d2);
    validate_output("theta", theta)
}

/// Black-Scholes Vega (∂C/∂σ)
///
/// # Formula
/// ```text
/// ν = S * φ(d₁) * √T
/// ```
///
/// Never negative; largest at-the-money.
pub fn call_vega(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> BsResult<f64> {
    let (d1, _) = BsParams::new(s, k, t, r, sigma).d1_d2()?;
    validate_output("vega", s * norm_pdf(d1) * t.sqrt())
}

/// Black-Scholes Rho (∂C/∂r)
///
/// # Formula
/// ```text
/// ρ = K * T * e^(-rT) * Φ(d₂)
/// ```
pub fn call_rho(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> BsResult<f64> {
    let params = BsParams::new(s, k, t, r, sigma);
    let (_, d2) = params.d1_d2()?;
    validate_output("rho", t * params.discounted_strike() * norm_cdf(d2))
}

/// All Greeks from a single d₁/d₂ evaluation
pub fn call_greeks(params: &BsParams) -> BsResult<Greeks> {
    let (d1, d2) = params.d1_d2()?;
    let BsParams { s, t, r, sigma, .. } = *params;
    let sqrt_t = t.sqrt();
    let pdf_d1 = norm_pdf(d1);
    let discounted_k = params.discounted_strike();

    Ok(Greeks {
        delta: validate_output("delta", norm_cdf(d1))?,
        gamma: validate_output("gamma", pdf_d1 / (s * sigma * sqrt_t))?,
        theta: validate_output(
            "theta",
            (-s * pdf_d1 * sigma) / (2.0 * sqrt_t) - r * discounted_k * norm_cdf(d2),
        )?,
        vega: validate_output("vega", s * pdf_d1 * sqrt_t)?,
        rho: validate_output("rho", t * discounted_k * norm_cdf(d2))?,
    })
}
