use crate::N_RANKS;
use crate::Plays;
use crate::cards::hand::Hand;
use crate::melds::meld::Meld;
use crate::solver::outcome::Outcome;
use serde::Deserialize;
use serde::Serialize;

/// One exported row: the hand as per-rank counts, the fewest plays,
/// and the encoded first meld. Field names are kept to one letter
/// because the table runs to tens of millions of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    h: [u8; N_RANKS],
    s: Plays,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    m: Option<(u8, u8)>,
}

impl Record {
    pub fn counts(&self) -> [u8; N_RANKS] {
        self.h
    }
    pub fn plays(&self) -> Plays {
        self.s
    }
    pub fn encoded(&self) -> Option<(u8, u8)> {
        self.m
    }
    /// raw parts as read back from disk, unchecked
    pub(crate) fn raw(h: [u8; N_RANKS], s: Plays, m: Option<(u8, u8)>) -> Self {
        Self { h, s, m }
    }
}

impl From<(Hand, Outcome)> for Record {
    fn from((hand, outcome): (Hand, Outcome)) -> Self {
        Self {
            h: <[u8; N_RANKS]>::from(hand),
            s: outcome.plays(),
            m: outcome.witness().map(<(u8, u8)>::from),
        }
    }
}

/// checked decoding of a row read from outside
impl TryFrom<Record> for (Hand, Outcome) {
    type Error = anyhow::Error;
    fn try_from(record: Record) -> Result<Self, Self::Error> {
        let hand = Hand::try_from(&record.h[..])?;
        let witness = record.m.map(Meld::try_from).transpose()?;
        if witness.is_some() != (record.s > 0) {
            return Err(anyhow::anyhow!("{} plays with witness {:?}", record.s, witness));
        }
        if witness.is_some_and(|m| !hand.contains(m.hand())) {
            return Err(anyhow::anyhow!("witness not held in {}", hand));
        }
        Ok((hand, Outcome::new(record.s, witness)))
    }
}
