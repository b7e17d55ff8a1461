use super::hand::Hand;
use super::rank::capacity;
use crate::N_RANKS;
use std::ops::Range;

/// HandIterator walks every composition of at most `ceiling` cards.
/// - depth first, rank by rank, lowest rank outermost
/// - each rank takes 0..=min(capacity, remaining budget) copies
/// - ranks outside the free range stay pinned to the starting Hand
///
/// it is memory efficient because it holds one composition at a time
/// it is deterministic because counts advance like an odometer, so
/// compositions come out in lexicographic order and never repeat
pub struct HandIterator {
    counts: [u8; N_RANKS],
    ranks: Range<usize>,
    total: usize,
    ceiling: usize,
    remaining: usize,
}

impl HandIterator {
    /// iterate the free ranks on top of a pinned base Hand
    pub fn new(ceiling: usize, base: Hand, ranks: Range<usize>) -> Self {
        let counts = <[u8; N_RANKS]>::from(base);
        assert!(ranks.end <= N_RANKS);
        assert!(ranks.clone().all(|i| counts[i] == 0));
        let total = base.size();
        let remaining = match ceiling.checked_sub(total) {
            Some(budget) => Self::spread(ranks.clone(), budget).iter().sum(),
            None => 0,
        };
        Self {
            counts,
            ranks,
            total,
            ceiling,
            remaining,
        }
    }

    /// number of compositions with at most `ceiling` cards
    pub fn combinations(ceiling: usize) -> usize {
        Self::spread(0..N_RANKS, ceiling).iter().sum()
    }
    /// number of compositions with exactly `total` cards
    pub fn exactly(total: usize) -> usize {
        Self::spread(0..N_RANKS, total)[total]
    }

    /// ways[t] counts the ways to place exactly t cards
    /// across the given ranks within their capacities
    fn spread(ranks: Range<usize>, budget: usize) -> Vec<usize> {
        let mut ways = vec![0usize; budget + 1];
        ways[0] = 1;
        for i in ranks {
            let mut next = vec![0usize; budget + 1];
            for (t, &w) in ways.iter().enumerate().filter(|&(_, &w)| w > 0) {
                for c in 0..=(capacity(i) as usize).min(budget - t) {
                    next[t + c] += w;
                }
            }
            ways = next;
        }
        ways
    }

    fn exhausted(&self) -> bool {
        self.remaining == 0
    }

    fn current(&self) -> Hand {
        Hand::from(self.counts)
    }

    /// bump the fastest free rank that still has room, resetting
    /// every faster rank that has none.
    fn advance(&mut self) {
        for i in self.ranks.clone().rev() {
            if self.counts[i] < capacity(i) && self.total < self.ceiling {
                self.counts[i] += 1;
                self.total += 1;
                return;
            } else {
                self.total -= self.counts[i] as usize;
                self.counts[i] = 0;
            }
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let hand = self.current();
            self.advance();
            self.remaining -= 1;
            Some(hand)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for HandIterator {}

/// every composition up to the ceiling
impl From<usize> for HandIterator {
    fn from(ceiling: usize) -> Self {
        Self::new(ceiling, Hand::empty(), 0..N_RANKS)
    }
}
