use itertools::izip;
use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::consts::FLOAT_COMPARISON_EPSILON;
use crate::error::SimulationError;
use crate::market::MarketModel;

/// One candidate asset allocation together with its evaluated metrics.
///
/// `allocations` holds one non-negative weight per asset and sums to 1
/// once the generator has normalized it. `net_return`, `volatility` and
/// `transaction_cost` are derived by [`Portfolio::evaluate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub allocations: Vec<f64>,
    pub net_return: f64,
    pub volatility: f64,
    pub transaction_cost: f64,
}

impl Portfolio {
    /// A zeroed portfolio over `num_assets` assets.
    pub fn new(num_assets: usize) -> Self {
        Portfolio {
            allocations: vec![0.0; num_assets],
            net_return: 0.0,
            volatility: 0.0,
            transaction_cost: 0.0,
        }
    }

    /// Evaluates return and risk against the market model.
    ///
    /// The net return subtracts the transaction cost recorded at
    /// generation time (scaled by the raw, pre-normalization weight sum).
    /// Only afterwards is `transaction_cost` refreshed from the
    /// normalized weights, so the refreshed figure is reported but never
    /// subtracted from any return. Keep the ordering as-is: swapping it
    /// would shift every portfolio's net return and with it the whole
    /// front.
    pub fn evaluate(
        &mut self,
        market: &MarketModel,
        transaction_cost_rate: f64,
    ) -> Result<(), SimulationError> {
        if self.allocations.len() != market.asset_count() {
            return Err(SimulationError::ShapeMismatch {
                what: "portfolio allocations",
                expected: market.asset_count(),
                actual: self.allocations.len(),
            });
        }

        let total_return: f64 = izip!(&self.allocations, market.expected_returns().iter())
            .map(|(&weight, &expected)| weight * expected)
            .sum();

        // Full quadratic form w' * Sigma * w over the whole matrix.
        let weights = DVector::from_column_slice(&self.allocations);
        let total_risk = (market.covariance() * &weights).dot(&weights);
        if total_risk < -FLOAT_COMPARISON_EPSILON {
            return Err(SimulationError::InvalidCovariance {
                reason: format!("negative portfolio variance {total_risk} (matrix is not PSD)"),
            });
        }

        self.net_return = total_return - self.transaction_cost;
        self.volatility = total_risk.max(0.0).sqrt();
        self.transaction_cost = transaction_cost_rate * self.allocations.iter().sum::<f64>();
        Ok(())
    }

    /// Pareto dominance on (maximize return, minimize risk).
    ///
    /// True iff `self` is at least as good as `other` in both objectives
    /// and strictly better in at least one. Irreflexive, asymmetric,
    /// transitive. Deliberately independent of [`FrontKey`], which only
    /// orders storage.
    pub fn dominates(&self, other: &Portfolio) -> bool {
        // Negate volatility so that "greater is better" holds for both.
        let self_metrics = [self.net_return, -self.volatility];
        let other_metrics = [other.net_return, -other.volatility];

        let at_least_as_good_in_all = self_metrics
            .iter()
            .zip(other_metrics.iter())
            .all(|(&own, &theirs)| own >= theirs);
        let strictly_better_in_one = self_metrics
            .iter()
            .zip(other_metrics.iter())
            .any(|(&own, &theirs)| own > theirs);

        at_least_as_good_in_all && strictly_better_in_one
    }

    /// The storage key for front membership.
    pub fn front_key(&self) -> FrontKey {
        FrontKey {
            net_return: self.net_return,
            volatility: self.volatility,
        }
    }
}

/// Canonical ordering key for front storage: net return ascending, then
/// volatility ascending.
///
/// This is a total order over stored portfolios, not a stand-in for
/// dominance; two portfolios can be ordered by this key while neither
/// dominates the other. Portfolios sharing an exact key collapse to a
/// single stored front entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrontKey {
    pub net_return: f64,
    pub volatility: f64,
}

impl Eq for FrontKey {}

impl Ord for FrontKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.net_return
            .total_cmp(&other.net_return)
            .then_with(|| self.volatility.total_cmp(&other.volatility))
    }
}

impl PartialOrd for FrontKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
