use crate::Plays;
use crate::melds::meld::Meld;

/// What the solver knows about a hand: the fewest plays that empty it,
/// and a first meld that achieves that count. Only the empty hand
/// has no witness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    plays: Plays,
    witness: Option<Meld>,
}

impl Outcome {
    pub fn new(plays: Plays, witness: Option<Meld>) -> Self {
        assert!(witness.is_some() == (plays > 0));
        Self { plays, witness }
    }
    pub const fn empty() -> Self {
        Self {
            plays: 0,
            witness: None,
        }
    }
    /// lay down `meld` first, then follow `rest`
    pub fn after(meld: Meld, rest: Self) -> Self {
        Self {
            plays: rest.plays + 1,
            witness: Some(meld),
        }
    }
    pub fn plays(&self) -> Plays {
        self.plays
    }
    pub fn witness(&self) -> Option<Meld> {
        self.witness
    }
}

/// a meld that clears the hand on its own
impl From<Meld> for Outcome {
    fn from(meld: Meld) -> Self {
        Self::after(meld, Self::empty())
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.witness {
            Some(meld) => write!(f, "{:<4}{}", self.plays, meld),
            None => write!(f, "{:<4}-", self.plays),
        }
    }
}
