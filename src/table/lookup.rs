use super::format::Format;
use super::reader::Reader;
use crate::cards::hand::Hand;
use crate::solver::outcome::Outcome;
use std::collections::HashMap;
use std::path::Path;

/// An exported table pulled back into memory for point lookups.
#[derive(Debug, Default)]
pub struct Table(HashMap<Hand, Outcome>);

impl Table {
    pub fn load(path: impl AsRef<Path>, format: Format) -> anyhow::Result<Self> {
        log::info!("{:<32}{:<32}", "loading table", path.as_ref().display());
        let table = Reader::open(path, format)?.collect::<anyhow::Result<Self>>()?;
        log::info!("{:<32}{:<32}", "rows loaded", table.len());
        Ok(table)
    }
    pub fn get(&self, hand: &Hand) -> Option<&Outcome> {
        self.0.get(hand)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Hand, Outcome)> for Table {
    fn from_iter<I: IntoIterator<Item = (Hand, Outcome)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
