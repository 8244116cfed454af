//! Solow-Swan capital accumulation.
//!
//! Capital per worker follows the discrete law of motion
//! `k_{t+1} = k_t + s·k_t^α − (n + g)·k_t`, with Cobb-Douglas production
//! `y = k^α`. [`SolowParams`] holds the fixed parameters and implements the
//! map as a [`DynamicalSystem`]; [`SolowModel`] pairs them with the current
//! capital stock and steps it with a [`DiscreteMap`].

use crate::error::{GrowthError, GrowthResult};
use crate::solvers::DiscreteMap;
use crate::traits::{DynamicalSystem, Steppable};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolowParams {
    /// Capital share of output, conventionally in (0, 1).
    pub alpha: f64,
    /// Fraction of output reinvested, conventionally in [0, 1].
    pub savings_rate: f64,
    pub population_growth: f64,
    pub technology_growth: f64,
}

impl SolowParams {
    pub fn new(
        alpha: f64,
        savings_rate: f64,
        population_growth: f64,
        technology_growth: f64,
    ) -> Self {
        Self {
            alpha,
            savings_rate,
            population_growth,
            technology_growth,
        }
    }

    /// Rate at which population and technology growth dilute capital per worker (n + g).
    pub fn dilution(&self) -> f64 {
        self.population_growth + self.technology_growth
    }

    /// Output per worker, `k^alpha`.
    ///
    /// A negative base is only accepted for integer exponents; otherwise the
    /// power has no real value and a [`GrowthError::Domain`] is returned.
    pub fn production(&self, capital: f64) -> GrowthResult<f64> {
        if capital < 0.0 && self.alpha.fract() != 0.0 {
            return Err(GrowthError::Domain {
                capital,
                alpha: self.alpha,
            });
        }
        Ok(capital.powf(self.alpha))
    }

    /// Investment minus dilution, `s·k^alpha − (n + g)·k`.
    pub fn capital_change(&self, capital: f64) -> GrowthResult<f64> {
        let investment = self.savings_rate * self.production(capital)?;
        Ok(investment - self.dilution() * capital)
    }

    pub fn law_of_motion(&self, capital: f64) -> GrowthResult<f64> {
        Ok(capital + self.capital_change(capital)?)
    }
}

impl DynamicalSystem<f64> for SolowParams {
    fn dimension(&self) -> usize {
        1
    }

    fn apply(&self, _t: f64, x: &[f64], out: &mut [f64]) -> GrowthResult<()> {
        out[0] = self.law_of_motion(x[0])?;
        Ok(())
    }
}

/// Stateful growth simulator.
///
/// Capital only changes through [`SolowModel::advance`], and repeated calls to
/// [`SolowModel::simulate`] continue from wherever the previous call stopped.
#[derive(Debug, Clone)]
pub struct SolowModel {
    params: SolowParams,
    state: [f64; 1],
    period: usize,
    stepper: DiscreteMap<f64>,
}

impl SolowModel {
    pub fn new(alpha: f64, s: f64, n: f64, g: f64, k_initial: f64) -> Self {
        Self::from_params(SolowParams::new(alpha, s, n, g), k_initial)
    }

    pub fn from_params(params: SolowParams, k_initial: f64) -> Self {
        Self {
            params,
            state: [k_initial],
            period: 0,
            stepper: DiscreteMap::new(params.dimension()),
        }
    }

    pub fn params(&self) -> &SolowParams {
        &self.params
    }

    /// Current capital stock per worker.
    pub fn capital(&self) -> f64 {
        self.state[0]
    }

    /// Number of periods advanced since construction.
    pub fn period(&self) -> usize {
        self.period
    }

    pub fn output(&self) -> GrowthResult<f64> {
        self.params.production(self.capital())
    }

    pub fn capital_change(&self) -> GrowthResult<f64> {
        self.params.capital_change(self.capital())
    }

    /// Moves capital forward one period. Leaves the model unchanged on error.
    pub fn advance(&mut self) -> GrowthResult<()> {
        let mut t = self.period as f64;
        self.stepper
            .step(&self.params, &mut t, &mut self.state[..], 1.0)?;
        self.period += 1;
        trace!(period = self.period, capital = self.capital(), "advanced");
        Ok(())
    }

    /// Runs `periods` steps and returns the capital path, starting with the
    /// current stock, so the result has `periods + 1` entries.
    ///
    /// Negative period counts are rejected before any step is taken. A domain
    /// error aborts the run; steps already taken stay applied.
    pub fn simulate<P>(&mut self, periods: P) -> GrowthResult<Vec<f64>>
    where
        P: TryInto<usize> + Copy + fmt::Display,
    {
        let steps: usize = periods.try_into().map_err(|_| {
            GrowthError::InvalidArgument(format!(
                "periods must be a non-negative integer, got {periods}"
            ))
        })?;

        debug!(
            steps,
            start_period = self.period,
            capital = self.capital(),
            "simulating capital path"
        );

        let mut path = Vec::with_capacity(steps.saturating_add(1));
        path.push(self.capital());
        for _ in 0..steps {
            self.advance()?;
            path.push(self.capital());
        }

        debug!(
            end_period = self.period,
            capital = self.capital(),
            "simulation finished"
        );
        Ok(path)
    }
}
