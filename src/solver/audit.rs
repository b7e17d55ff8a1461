use super::extras::Extras;
use super::search::Solver;
use crate::Plays;
use crate::cards::hand::Hand;
use crate::cards::shard::Shard;
use crate::melds::oracle::Oracle;
use rayon::prelude::*;

/// A run-free hand where the greedy extras plan is longer than optimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discrepancy {
    pub hand: Hand,
    pub exact: Plays,
    pub estimate: Plays,
}

impl std::fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<16}exact {:<4}estimate {}",
            self.hand, self.exact, self.estimate
        )
    }
}

/// compare the extras estimate with exhaustive search on one hand.
/// hands with runs never take the shortcut, so they pass trivially.
pub fn check(exact: &mut Solver, hand: Hand) -> Option<Discrepancy> {
    if Oracle::from(hand).has_runs() {
        return None;
    }
    let estimate = Extras::from(hand).estimate();
    let exact = exact.solve(hand).plays();
    if estimate == exact {
        None
    } else {
        Some(Discrepancy {
            hand,
            exact,
            estimate,
        })
    }
}

/// check every hand up to `ceiling` cards, one exhaustive solver per
/// shard, and report discrepancies in generation order
pub fn audit(ceiling: usize) -> Vec<Discrepancy> {
    log::info!("{:<32}{:<32}", "auditing extras up to", ceiling);
    let found = Shard::all(ceiling, crate::SHARD_DEPTH)
        .par_iter()
        .map(|shard| {
            let mut exact = Solver::default();
            shard
                .hands()
                .filter_map(|hand| check(&mut exact, hand))
                .collect::<Vec<Discrepancy>>()
        })
        .collect::<Vec<Vec<Discrepancy>>>()
        .into_iter()
        .flatten()
        .inspect(|d| log::warn!("{:<32}{}", "extras estimate too high", d))
        .collect::<Vec<Discrepancy>>();
    log::info!("{:<32}{:<32}", "discrepancies", found.len());
    found
}
