//! Incremental Pareto-front construction.
//!
//! The front is stored in a `BTreeMap` keyed by [`FrontKey`], so members
//! iterate in ascending (net return, volatility) order and two portfolios
//! sharing an exact key collapse to the first stored entry. Dominance and
//! storage order stay separate: the key never decides who survives.

use std::collections::BTreeMap;

use tracing::trace;

use crate::portfolio::{FrontKey, Portfolio};

/// Folds a population into its Pareto front, one portfolio at a time, in
/// input order.
///
/// For each candidate the current front is scanned once: any member that
/// dominates the candidate rejects it, and any member the candidate
/// dominates is evicted. Evictions are collected during the scan and
/// applied before the insertion is finalized, so the map is never
/// modified mid-iteration. The two cases are mutually exclusive — a
/// front member dominating the candidate and another dominated by it
/// would, by transitivity, dominate each other, which the front's
/// invariant rules out.
///
/// Complexity is O(population x front size); the front is bounded by the
/// population.
pub fn construct_pareto_front(population: &[Portfolio]) -> Vec<Portfolio> {
    let mut front: BTreeMap<FrontKey, Portfolio> = BTreeMap::new();

    for candidate in population {
        let mut is_dominated = false;
        let mut evicted: Vec<FrontKey> = Vec::new();

        for (key, member) in &front {
            if member.dominates(candidate) {
                is_dominated = true;
                break;
            }
            if candidate.dominates(member) {
                evicted.push(*key);
            }
        }

        if is_dominated {
            continue;
        }

        for key in &evicted {
            front.remove(key);
        }
        if !evicted.is_empty() {
            trace!(evicted = evicted.len(), "candidate displaced front members");
        }
        // Identical keys keep the first entry seen, like an ordered set.
        front
            .entry(candidate.front_key())
            .or_insert_with(|| candidate.clone());
    }

    front.into_values().collect()
}
