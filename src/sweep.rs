// src/sweep.rs
//! Parameter sweeps over the Black-Scholes inputs
//!
//! A sweep holds four inputs fixed at `base` and walks the fifth across an
//! evenly spaced grid, pricing the call and the selected Greeks at every
//! point. Grid points are independent, so they are evaluated in parallel;
//! results come back in grid order.

use crate::analytics::bs_analytic::{call_greeks, price_call, BsParams, Greeks};
use crate::error::{validation::*, BsResult};
use bitflags::bitflags;
use log::debug;
use ndarray::Array1;
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GreekSet: u32 {
        const NONE  = 0;
        const DELTA = 1 << 0;
        const GAMMA = 1 << 1;
        const THETA = 1 << 2;
        const VEGA  = 1 << 3;
        const RHO   = 1 << 4;
        const ALL   = Self::DELTA.bits()
            | Self::GAMMA.bits()
            | Self::THETA.bits()
            | Self::VEGA.bits()
            | Self::RHO.bits();
    }
}

/// The input varied by a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepAxis {
    Spot,
    Strike,
    Maturity,
    Rate,
    Volatility,
}

impl SweepAxis {
    pub fn name(&self) -> &'static str {
        match self {
            SweepAxis::Spot => "s",
            SweepAxis::Strike => "k",
            SweepAxis::Maturity => "t",
            SweepAxis::Rate => "r",
            SweepAxis::Volatility => "sigma",
        }
    }

    /// `base` with this axis set to `value`
    pub fn apply(&self, base: &BsParams, value: f64) -> BsParams {
        let mut p = *base;
        match self {
            SweepAxis::Spot => p.s = value,
            SweepAxis::Strike => p.k = value,
            SweepAxis::Maturity => p.t = value,
            SweepAxis::Rate => p.r = value,
            SweepAxis::Volatility => p.sigma = value,
        }
        p
    }
}

impl fmt::Display for SweepAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SweepAxis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "s" | "spot" => Ok(SweepAxis::Spot),
            "k" | "strike" => Ok(SweepAxis::Strike),
            "t" | "maturity" => Ok(SweepAxis::Maturity),
            "r" | "rate" => Ok(SweepAxis::Rate),
            "sigma" | "vol" | "volatility" => Ok(SweepAxis::Volatility),
            other => Err(format!("unknown sweep axis '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub base: BsParams,
    pub axis: SweepAxis,
    pub start: f64,
    pub end: f64,
    pub points: usize,
    pub greeks: GreekSet,
}

impl SweepConfig {
    /// Validate the sweep configuration
    ///
    /// The base inputs and both grid endpoints must be valid pricing inputs,
    /// so every grid point is too.
    pub fn validate(&self) -> BsResult<()> {
        validate_points(self.points)?;
        validate_range(self.axis.name(), self.start, self.end)?;
        self.axis.apply(&self.base, self.start).validate()?;
        self.axis.apply(&self.base, self.end).validate()?;
        Ok(())
    }

    /// Evenly spaced values of the swept input, endpoints included
    pub fn grid(&self) -> Array1<f64> {
        Array1::linspace(self.start, self.end, self.points)
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            base: BsParams::default(),
            axis: SweepAxis::Spot,
            start: 50.0,
            end: 150.0,
            points: 101,
            greeks: GreekSet::ALL,
        }
    }
}

/// One evaluated grid point; Greeks outside the selected set are `None`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub value: f64,
    pub price: f64,
    pub delta: Option<f64>,
    pub gamma: Option<f64>,
    pub theta: Option<f64>,
    pub vega: Option<f64>,
    pub rho: Option<f64>,
}

impl SweepPoint {
    fn from_parts(value: f64, price: f64, greeks: Option<Greeks>, set: GreekSet) -> Self {
        let pick = |flag: GreekSet, f: fn(&Greeks) -> f64| {
            greeks.as_ref().filter(|_| set.contains(flag)).map(f)
        };
        SweepPoint {
            value,
            price,
            delta: pick(GreekSet::DELTA, |g| g.delta),
            gamma: pick(GreekSet::GAMMA, |g| g.gamma),
            theta: pick(GreekSet::THETA, |g| g.theta),
            vega: pick(GreekSet::VEGA, |g| g.vega),
            rho: pick(GreekSet::RHO, |g| g.rho),
        }
    }
}

/// Evaluate price and selected Greeks at every grid point
///
/// # Errors
/// Returns `BsError` for an invalid configuration; grid points are not
/// evaluated in that case.
pub fn run_sweep(cfg: &SweepConfig) -> BsResult<Vec<SweepPoint>> {
    cfg.validate()?;
    let grid = cfg.grid();
    debug!(
        "sweeping {} over [{}, {}] with {} points",
        cfg.axis, cfg.start, cfg.end, cfg.points
    );

    let points = grid
        .into_raw_vec()
        .into_par_iter()
        .map(|value| -> BsResult<SweepPoint> {
            let params = cfg.axis.apply(&cfg.base, value);
            let price = price_call(&params)?.price;
            let greeks = if cfg.greeks.is_empty() {
                None
            } else {
                Some(call_greeks(&params)?)
            };
            Ok(SweepPoint::from_parts(value, price, greeks, cfg.greeks))
        })
        .collect::<BsResult<Vec<_>>>()?;

    debug!("sweep finished: {} points", points.len());
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_round_trip_names() {
        for axis in [
            SweepAxis::Spot,
            SweepAxis::Strike,
            SweepAxis::Maturity,
            SweepAxis::Rate,
            SweepAxis::Volatility,
        ] {
            assert_eq!(axis.name().parse::<SweepAxis>().unwrap(), axis);
        }
        assert!("gamma".parse::<SweepAxis>().is_err());
    }

    #[test]
    fn test_apply_sets_only_one_input() {
        let base = BsParams::default();
        let p = SweepAxis::Volatility.apply(&base, 0.35);
        assert_eq!(p.sigma, 0.35);
        assert_eq!(p.s, base.s);
        assert_eq!(p.t, base.t);
    }

    #[test]
    fn test_grid_includes_endpoints() {
        let cfg = SweepConfig {
            start: 80.0,
            end: 120.0,
            points: 5,
            ..Default::default()
        };
        let grid = cfg.grid();
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0], 80.0);
        assert_eq!(grid[4], 120.0);
    }

    #[test]
    fn test_every_grid_point_is_evaluated() {
        let cfg = SweepConfig {
            points: 7,
            greeks: GreekSet::NONE,
            ..Default::default()
        };
        let values: Vec<f64> = run_sweep(&cfg).unwrap().iter().map(|p| p.value).collect();
        assert_eq!(values, cfg.grid().to_vec());
    }
}
