//! # bs-greeks: Black-Scholes Greeks and Tangent-Line Approximation
//!
//! Closed-form European call pricing under Black-Scholes, its first-order
//! sensitivities, and checks of how well those sensitivities predict actual
//! price moves.
//!
//! ## Key Features
//!
//! - **Closed-form pricing**: call price with d₁ and d₂
//! - **Greeks**: Delta, Gamma, Theta, Vega, Rho
//! - **Strict validation**: invalid inputs return [`BsError::Domain`], never NaN
//! - **Linearization checks**: tangent-line error for arbitrary functions and
//!   for theta-based time decay
//! - **Parameter sweeps**: evaluate price and Greeks along one input in parallel
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_greeks::analytics::bs_analytic::{black_scholes_call, call_delta};
//!
//! let quote = black_scholes_call(101.0, 100.0, 1.0, 0.05, 0.2).expect("valid inputs");
//! let delta = call_delta(101.0, 100.0, 1.0, 0.05, 0.2).expect("valid inputs");
//! println!("price {:.2}, d1 {:.4}, delta {:.2}", quote.price, quote.d1, delta);
//!
//! assert!(black_scholes_call(101.0, 100.0, 0.0, 0.05, 0.2).is_err());
//! ```
//!
//! ## Time decay sign convention
//!
//! Theta is calendar decay. Moving time to maturity from T to T - dt changes
//! the price by about `(-theta) * (-dt)`; see
//! [`linearization::theta_decay_check`].

// Module declarations
pub mod error;
pub mod math_utils;
pub mod analytics;
pub mod linearization;
pub mod sweep;
pub mod scenarios;
pub mod output;

// Re-export commonly used types for convenience
pub use analytics::bs_analytic::{BsParams, CallQuote, Greeks};
pub use error::{BsError, BsResult};
