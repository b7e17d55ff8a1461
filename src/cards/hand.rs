use super::rank::Rank;
use crate::N_RANKS;

/// Hand represents a multiset of ranks: how many copies of each rank are
/// held, regardless of which physical cards they are. each rank gets a
/// nibble of a single u64, so the whole composition is one word, hashes
/// as one word, and removing a meld is one subtraction.
///
/// nibble i (bits 4i..4i+4) holds the count of Rank::from(i).
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    /// every card in the deck
    pub fn full() -> Self {
        Self::from(crate::CAPACITY)
    }
    /// n copies of a single rank
    pub fn of(rank: Rank, n: u8) -> Self {
        assert!(n <= 0xF);
        Self((n as u64) << (u8::from(rank) * 4))
    }
    /// n copies of every rank in lo..=hi
    pub fn run(lo: Rank, hi: Rank, n: u8) -> Self {
        (u8::from(lo)..=u8::from(hi))
            .map(Rank::from)
            .map(|r| Self::of(r, n))
            .fold(Self::empty(), Self::add)
    }

    pub fn add(lhs: Self, rhs: Self) -> Self {
        let sum = Self(lhs.0 + rhs.0);
        debug_assert!(
            Rank::all()
                .iter()
                .all(|&r| sum.count(r) == lhs.count(r) + rhs.count(r))
        );
        sum
    }
    /// take a sub-multiset out of this hand. the caller
    /// guarantees containment, so no nibble borrows.
    pub fn remove(&self, other: Self) -> Self {
        assert!(self.contains(other));
        Self(self.0 - other.0)
    }
    pub fn contains(&self, other: Self) -> bool {
        Rank::all()
            .iter()
            .all(|&r| self.count(r) >= other.count(r))
    }

    pub fn count(&self, rank: Rank) -> u8 {
        ((self.0 >> (u8::from(rank) * 4)) & 0xF) as u8
    }
    pub fn size(&self) -> usize {
        Rank::all().iter().map(|&r| self.count(r) as usize).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    /// per-rank bounds only. the total is enforced by whoever
    /// decides the ceiling.
    pub fn is_valid(&self) -> bool {
        self.0 >> (N_RANKS * 4) == 0
            && Rank::all()
                .iter()
                .all(|&r| self.count(r) <= r.capacity())
    }

    /// lowest rank with at least one copy
    pub fn lowest(&self) -> Option<Rank> {
        if self.is_empty() {
            None
        } else {
            Some(Rank::from((self.0.trailing_zeros() / 4) as u8))
        }
    }
    /// ranks held, low to high
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        Rank::all().iter().copied().filter(move |&r| self.count(r) > 0)
    }
    /// ranks holding at least n copies
    pub fn holding(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        Rank::all().iter().copied().filter(move |&r| self.count(r) >= n)
    }
}

/// u64 isomorphism
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n)
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// [u8; 13] isomorphism
/// counts indexed by rank, the representation written to disk
impl From<[u8; N_RANKS]> for Hand {
    fn from(counts: [u8; N_RANKS]) -> Self {
        Rank::all()
            .iter()
            .zip(counts)
            .map(|(&r, n)| Self::of(r, n))
            .fold(Self::empty(), Self::add)
    }
}
impl From<Hand> for [u8; N_RANKS] {
    fn from(h: Hand) -> Self {
        let mut counts = [0u8; N_RANKS];
        for &r in Rank::all() {
            counts[r as usize] = h.count(r);
        }
        counts
    }
}

/// checked conversion for counts read from outside
impl TryFrom<&[u8]> for Hand {
    type Error = anyhow::Error;
    fn try_from(counts: &[u8]) -> Result<Self, Self::Error> {
        let counts = <[u8; N_RANKS]>::try_from(counts)
            .map_err(|_| anyhow::anyhow!("expected {} counts, got {}", N_RANKS, counts.len()))?;
        Rank::all()
            .iter()
            .zip(counts)
            .find(|&(r, n)| n > r.capacity())
            .map_or(Ok(Self::from(counts)), |(r, n)| {
                Err(anyhow::anyhow!("{} copies of {} exceeds capacity", n, r))
            })
    }
}

/// str isomorphism
/// one char per card, whitespace ignored: "333 45 2"
impl TryFrom<&str> for Hand {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut counts = [0u8; N_RANKS];
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let rank = Rank::try_from(c)?;
            counts[rank as usize] += 1;
            if counts[rank as usize] > rank.capacity() {
                return Err(anyhow::anyhow!("too many copies of {}", rank));
            }
        }
        Ok(Self::from(counts))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self
            .ranks()
            .flat_map(|r| std::iter::repeat_n(r, self.count(r) as usize))
            .map(|r| r.to_string())
            .collect::<String>();
        f.pad(&cards)
    }
}

impl crate::Arbitrary for Hand {
    /// a random endgame hand of CEILING cards
    fn random() -> Self {
        use rand::seq::SliceRandom;
        let mut deck = Rank::all()
            .iter()
            .flat_map(|&r| std::iter::repeat_n(r, r.capacity() as usize))
            .collect::<Vec<Rank>>();
        let ref mut rng = rand::rng();
        deck.shuffle(rng);
        deck.into_iter()
            .take(crate::CEILING)
            .map(|r| Self::of(r, 1))
            .fold(Self::empty(), Self::add)
    }
}
