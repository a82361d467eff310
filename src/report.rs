//! Console and structured reporting for a finished run.

use serde::{Deserialize, Serialize};

use crate::portfolio::Portfolio;

/// Renders the front as the canonical one-line-per-member report.
///
/// The labels and field order are fixed; downstream consumers parse
/// these lines.
pub fn render_front(front: &[Portfolio]) -> String {
    let mut out = String::new();
    for portfolio in front {
        out.push_str(&format!(
            "Return: {}, Risk: {}, Transaction Cost: {}\n",
            portfolio.net_return, portfolio.volatility, portfolio.transaction_cost
        ));
    }
    out
}

/// Structured export of a Pareto front, for machine consumption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontReport {
    pub members: Vec<FrontMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontMember {
    pub net_return: f64,
    pub volatility: f64,
    pub transaction_cost: f64,
    pub allocations: Vec<f64>,
}

impl FrontReport {
    pub fn from_front(front: &[Portfolio]) -> Self {
        FrontReport {
            members: front
                .iter()
                .map(|portfolio| FrontMember {
                    net_return: portfolio.net_return,
                    volatility: portfolio.volatility,
                    transaction_cost: portfolio.transaction_cost,
                    allocations: portfolio.allocations.clone(),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio(net_return: f64, volatility: f64, transaction_cost: f64) -> Portfolio {
        Portfolio {
            allocations: vec![0.5, 0.5],
            net_return,
            volatility,
            transaction_cost,
        }
    }

    #[test]
    fn test_render_front_preserves_labels_and_order() {
        let front = vec![portfolio(0.1, 0.2, 0.001), portfolio(0.15, 0.25, 0.001)];
        let rendered = render_front(&front);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Return: 0.1, Risk: 0.2, Transaction Cost: 0.001");
        assert_eq!(lines[1], "Return: 0.15, Risk: 0.25, Transaction Cost: 0.001");
    }

    #[test]
    fn test_render_empty_front_is_empty() {
        assert!(render_front(&[]).is_empty());
    }

    #[test]
    fn test_json_export_round_trips() {
        let front = vec![portfolio(0.1, 0.2, 0.001)];
        let json = FrontReport::from_front(&front).to_json().unwrap();
        let parsed: FrontReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.members.len(), 1);
        assert_eq!(parsed.members[0].net_return, 0.1);
        assert_eq!(parsed.members[0].allocations, vec![0.5, 0.5]);
    }
}
