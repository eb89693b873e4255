// src/analytics/mod.rs
pub mod bs_analytic;

pub use bs_analytic::{
    black_scholes_call, call_delta, call_gamma, call_greeks, call_rho, call_theta, call_vega,
    price_call, BsParams, CallQuote, Greeks,
};
