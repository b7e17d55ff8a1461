use super::oracle::Oracle;
use crate::cards::hand::Hand;
use crate::cards::shard::Shard;
use rayon::prelude::*;

/// The hand of exactly `total` cards that admits the most legal melds,
/// and how many it admits. Ties keep whichever comes first in
/// generation order, so the answer does not depend on thread count.
pub fn widest(total: usize) -> Option<(Hand, usize)> {
    log::info!("{:<32}{:<32}", "counting melds", total);
    Shard::all(total, crate::SHARD_DEPTH)
        .par_iter()
        .map(|shard| {
            shard
                .hands()
                .filter(|h| h.size() == total)
                .map(|h| (h, Oracle::from(h).count()))
                .fold(None, first_max)
        })
        .collect::<Vec<Option<(Hand, usize)>>>()
        .into_iter()
        .flatten()
        .fold(None, first_max)
}

fn first_max(best: Option<(Hand, usize)>, next: (Hand, usize)) -> Option<(Hand, usize)> {
    match best {
        Some((_, n)) if n >= next.1 => best,
        _ => Some(next),
    }
}
