use rand::distributions::Uniform;
use rand::prelude::*;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{ACTIVE_ALLOCATION_THRESHOLD, RAW_WEIGHT_DRAW_BOUND};
use crate::error::SimulationError;
use crate::market::MarketModel;
use crate::portfolio::Portfolio;

pub mod pareto;

/// Run parameters, fixed at engine construction.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SimulationConfig {
    pub num_assets: usize,
    pub num_simulations: usize,
    pub transaction_cost_rate: f64,
    /// Minimum number of active assets (allocation above the activity
    /// threshold) a portfolio must hold to enter the population.
    pub min_assets: usize,
    /// Maximum number of active assets allowed.
    pub max_assets: usize,
    /// Seed for the engine's random source. `None` seeds from entropy,
    /// so runs are not reproducible run-to-run unless a seed is given.
    #[serde(default)]
    pub global_seed: Option<u64>,
}

/// Monte Carlo engine: generates random portfolios, evaluates them
/// against a [`MarketModel`] and filters by the cardinality constraint.
///
/// The engine owns its random source rather than touching any global
/// generator; seed it through [`SimulationConfig::global_seed`] for
/// deterministic runs.
pub struct PortfolioSimulation {
    config: SimulationConfig,
    market: MarketModel,
    rng: StdRng,
}

impl PortfolioSimulation {
    pub fn new(config: SimulationConfig, market: MarketModel) -> Result<Self, SimulationError> {
        if config.num_assets == 0 {
            return Err(SimulationError::BadParameter(
                "Asset count cannot be zero".into(),
            ));
        }
        if config.num_assets != market.asset_count() {
            return Err(SimulationError::ShapeMismatch {
                what: "configured asset count",
                expected: market.asset_count(),
                actual: config.num_assets,
            });
        }
        if config.min_assets > config.max_assets {
            return Err(SimulationError::BadParameter(format!(
                "min_assets ({}) cannot exceed max_assets ({})",
                config.min_assets, config.max_assets
            )));
        }
        if config.max_assets > config.num_assets {
            return Err(SimulationError::BadParameter(format!(
                "max_assets ({}) cannot exceed the asset count ({})",
                config.max_assets, config.num_assets
            )));
        }

        let rng = match config.global_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(PortfolioSimulation {
            config,
            market,
            rng,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn market(&self) -> &MarketModel {
        &self.market
    }

    /// Generates one random portfolio.
    ///
    /// Raw weights are independent uniform integers in [0, 99] — NOT a
    /// uniform-on-simplex sample; the normalized weights lean toward
    /// independent discrete uniforms rather than a Dirichlet draw. This
    /// sampling law is part of the model and is kept as-is.
    ///
    /// The recorded transaction cost scales with the raw weight sum
    /// (order of magnitude ~ `num_assets` * 50), not with the normalized
    /// sum of 1. Evaluation later subtracts this figure from the return.
    pub fn generate_random_portfolio(&mut self) -> Portfolio {
        let (raw_weights, total_weight) = loop {
            match draw_raw_weights(&mut self.rng, self.config.num_assets) {
                Ok(draw) => break draw,
                Err(SimulationError::DegenerateSample) => {
                    // All draws were zero; normalization would divide by
                    // zero. Resample transparently.
                    debug!("degenerate all-zero weight draw, resampling");
                }
                Err(other) => unreachable!("unexpected draw error: {other}"),
            }
        };

        let mut portfolio = Portfolio::new(self.config.num_assets);
        for (slot, raw) in portfolio.allocations.iter_mut().zip(raw_weights.iter()) {
            *slot = raw / total_weight;
        }
        portfolio.transaction_cost = total_weight * self.config.transaction_cost_rate;
        portfolio
    }

    /// Runs the full Monte Carlo batch.
    ///
    /// Exactly `num_simulations` portfolios are generated and evaluated;
    /// only those whose active-asset count falls within
    /// `[min_assets, max_assets]` enter the returned population, in
    /// generation order. Evaluation failures abort the run.
    pub fn simulate_portfolios(&mut self) -> Result<Vec<Portfolio>, SimulationError> {
        let mut population = Vec::new();

        for _ in 0..self.config.num_simulations {
            let mut portfolio = self.generate_random_portfolio();
            portfolio.evaluate(&self.market, self.config.transaction_cost_rate)?;

            let active_assets = portfolio
                .allocations
                .iter()
                .filter(|&&weight| weight > ACTIVE_ALLOCATION_THRESHOLD)
                .count();
            if active_assets >= self.config.min_assets && active_assets <= self.config.max_assets {
                population.push(portfolio);
            }
        }

        debug!(
            simulated = self.config.num_simulations,
            kept = population.len(),
            "simulation batch complete"
        );
        Ok(population)
    }
}

/// Draws `num_assets` raw weights as uniform integers in [0, 99].
///
/// Fails with [`SimulationError::DegenerateSample`] when every draw is
/// zero; callers resample rather than surfacing this.
fn draw_raw_weights(
    rng: &mut impl Rng,
    num_assets: usize,
) -> Result<(Vec<f64>, f64), SimulationError> {
    let uniform = Uniform::from(0..RAW_WEIGHT_DRAW_BOUND);
    let raw_weights: Vec<f64> = (0..num_assets)
        .map(|_| rng.sample(uniform) as f64)
        .collect();
    let total_weight: f64 = raw_weights.iter().sum();

    if total_weight <= 0.0 {
        return Err(SimulationError::DegenerateSample);
    }
    Ok((raw_weights, total_weight))
}
