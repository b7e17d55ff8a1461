use super::outcome::Outcome;
use crate::Plays;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::melds::meld::Meld;

/// Greedy plan for a hand with no runs.
///
/// Every rank is a lone group: a bomb, a triple, a pair or a single.
/// Each bomb carries off one single as its kicker and each triple
/// carries off one pair as a full house; whatever is left goes down
/// one group at a time. The plan is always playable, so its length
/// bounds the true minimum from above. It is not always tight:
/// 333 555 7777 takes three plays this way but two with 7777+3, 555+33.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Extras {
    bombs: Vec<Rank>,
    triples: Vec<Rank>,
    pairs: Vec<Rank>,
    singles: Vec<Rank>,
}

impl From<Hand> for Extras {
    fn from(hand: Hand) -> Self {
        let mut extras = Self::default();
        for r in hand.ranks() {
            match hand.count(r) {
                n if r.bomb() == Some(n) => extras.bombs.push(r),
                3 => extras.triples.push(r),
                2 => extras.pairs.push(r),
                _ => extras.singles.push(r),
            }
        }
        extras
    }
}

impl Extras {
    /// plays in the greedy plan
    pub fn estimate(&self) -> Plays {
        let bombs = self.bombs.len();
        let triples = self.triples.len();
        let spare = self.singles.len().saturating_sub(bombs)
            + self.pairs.len().saturating_sub(triples);
        (bombs + triples + spare) as Plays
    }

    /// first play of the greedy plan. bombs go first and take the
    /// lowest single along; triples then take the lowest pair.
    pub fn witness(&self) -> Option<Meld> {
        let lowest = |v: &Vec<Rank>| v.first().copied();
        match (
            lowest(&self.bombs),
            lowest(&self.triples),
            lowest(&self.pairs),
            lowest(&self.singles),
        ) {
            (Some(b), _, _, kicker) => Some(Meld::Bomb(b, kicker)),
            (None, Some(t), Some(p), _) => Some(Meld::FullHouse(t, p)),
            (None, Some(t), None, _) => Some(Meld::Triple(t)),
            (None, None, Some(p), _) => Some(Meld::Pair(p)),
            (None, None, None, Some(s)) => Some(Meld::Single(s)),
            (None, None, None, None) => None,
        }
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::new(self.estimate(), self.witness())
    }
}
