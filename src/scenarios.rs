// src/scenarios.rs
//! Reproducible random pricing scenarios
//!
//! Properties such as "delta lies in (0, 1) for every valid input" are
//! checked by drawing many input sets from bounded uniform ranges. Each
//! scenario gets its own `StdRng` seeded from `(base_seed, index)`, so the
//! same seed yields the same scenarios regardless of how many threads draw
//! them.

use crate::analytics::bs_analytic::BsParams;
use crate::error::{validation::*, BsError, BsResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};
use rayon::prelude::*;

/// Inclusive-exclusive bounds `[low, high)` for each input
///
/// The defaults keep |d₁| below about 6, where Φ(d₁) is still
/// distinguishable from 1 in `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioRanges {
    pub s: (f64, f64),
    pub k: (f64, f64),
    pub t: (f64, f64),
    pub r: (f64, f64),
    pub sigma: (f64, f64),
}

impl ScenarioRanges {
    pub fn validate(&self) -> BsResult<()> {
        for (name, (lo, hi)) in [
            ("s", self.s),
            ("k", self.k),
            ("t", self.t),
            ("sigma", self.sigma),
        ] {
            validate_positive(name, lo)?;
            validate_range(name, lo, hi)?;
        }
        validate_range("r", self.r.0, self.r.1)?;
        Ok(())
    }
}

impl Default for ScenarioRanges {
    fn default() -> Self {
        ScenarioRanges {
            s: (90.0, 110.0),
            k: (90.0, 110.0),
            t: (0.5, 2.0),
            r: (-0.01, 0.08),
            sigma: (0.15, 0.5),
        }
    }
}

/// Seeded factory of random, always-valid [`BsParams`]
pub struct ScenarioSampler {
    base_seed: u64,
    ranges: ScenarioRanges,
}

impl ScenarioSampler {
    pub fn new(base_seed: u64) -> Self {
        Self {
            base_seed,
            ranges: ScenarioRanges::default(),
        }
    }

    pub fn with_ranges(base_seed: u64, ranges: ScenarioRanges) -> BsResult<Self> {
        ranges.validate()?;
        Ok(Self { base_seed, ranges })
    }

    /// RNG for scenario `index`
    pub fn create_std_rng(&self, index: u64) -> StdRng {
        StdRng::seed_from_u64(self.base_seed.wrapping_add(index))
    }

    /// Scenario `index`; identical for identical `(base_seed, index)`
    pub fn scenario(&self, index: u64) -> BsParams {
        let mut rng = self.create_std_rng(index);
        draw_params(&mut rng, &self.ranges)
    }

    /// `count` scenarios in index order
    pub fn sample(&self, count: usize) -> BsResult<Vec<BsParams>> {
        if count == 0 {
            return Err(BsError::InvalidConfiguration {
                field: "count".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok((0..count as u64)
            .into_par_iter()
            .map(|i| self.scenario(i))
            .collect())
    }
}

/// Draw one input set from `ranges`
///
/// # Errors
/// `BsError` when `ranges` is invalid (non-positive bounds for S, K, T, σ or
/// an empty `[low, high)` interval).
pub fn random_params<R: Rng + ?Sized>(rng: &mut R, ranges: &ScenarioRanges) -> BsResult<BsParams> {
    ranges.validate()?;
    Ok(draw_params(rng, ranges))
}

// `ranges` must already be validated; `Uniform::new` panics on low >= high
fn draw_params<R: Rng + ?Sized>(rng: &mut R, ranges: &ScenarioRanges) -> BsParams {
    let mut draw = |(lo, hi): (f64, f64)| Uniform::new(lo, hi).sample(&mut *rng);
    BsParams {
        s: draw(ranges.s),
        k: draw(ranges.k),
        t: draw(ranges.t),
        r: draw(ranges.r),
        sigma: draw(ranges.sigma),
    }
}
