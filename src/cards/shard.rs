use super::hand::Hand;
use super::hands::HandIterator;
use crate::N_RANKS;

/// A slice of the state space sharing the same counts on the first
/// `depth` ranks. shards taken in prefix order partition the full
/// HandIterator sequence into contiguous runs, so they can be solved
/// independently and still be written out in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shard {
    prefix: Hand,
    depth: usize,
    ceiling: usize,
}

impl Shard {
    pub fn all(ceiling: usize, depth: usize) -> Vec<Self> {
        assert!(depth <= N_RANKS);
        HandIterator::new(ceiling, Hand::empty(), 0..depth)
            .map(|prefix| Self {
                prefix,
                depth,
                ceiling,
            })
            .collect()
    }
    pub fn prefix(&self) -> Hand {
        self.prefix
    }
    pub fn hands(&self) -> HandIterator {
        HandIterator::new(self.ceiling, self.prefix, self.depth..N_RANKS)
    }
    pub fn size(&self) -> usize {
        self.hands().len()
    }
}
