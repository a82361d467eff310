use nalgebra::DMatrix;
use tracing_subscriber::EnvFilter;

use paretosim::report::render_front;
use paretosim::simulation::pareto::construct_pareto_front;
use paretosim::{MarketModel, PortfolioSimulation, SimulationConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Example data: five assets with fixed expected returns and risk.
    let expected_returns = vec![0.12, 0.10, 0.14, 0.08, 0.11];
    let covariance = DMatrix::from_row_slice(
        5,
        5,
        &[
            0.1, 0.02, 0.04, 0.01, 0.03, //
            0.02, 0.15, 0.05, 0.02, 0.01, //
            0.04, 0.05, 0.2, 0.01, 0.02, //
            0.01, 0.02, 0.01, 0.3, 0.01, //
            0.03, 0.01, 0.02, 0.01, 0.25,
        ],
    );
    let market = MarketModel::new(expected_returns, covariance)?;

    let config = SimulationConfig {
        num_assets: 5,
        num_simulations: 10_000,
        transaction_cost_rate: 0.001,
        min_assets: 2,
        max_assets: 4,
        global_seed: None,
    };

    let mut simulation = PortfolioSimulation::new(config, market)?;
    let population = simulation.simulate_portfolios()?;
    let pareto_front = construct_pareto_front(&population);

    println!("Pareto Front:");
    print!("{}", render_front(&pareto_front));

    Ok(())
}
