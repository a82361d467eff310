//! Monte Carlo simulation of asset-allocation portfolios with
//! Pareto-front extraction.
//!
//! The pipeline: [`simulation::PortfolioSimulation`] generates random
//! candidate allocations under a cardinality constraint, evaluates each
//! against a [`market::MarketModel`] (expected returns + covariance),
//! and [`simulation::pareto::construct_pareto_front`] folds the
//! surviving population into the non-dominated subset under the
//! (maximize return, minimize risk) order.

pub mod consts;
pub mod error;
pub mod market;
pub mod portfolio;
pub mod report;
pub mod simulation;

pub use error::SimulationError;
pub use market::MarketModel;
pub use portfolio::Portfolio;
pub use simulation::{PortfolioSimulation, SimulationConfig};
