use crate::Plays;
use crate::solver::outcome::Outcome;
use std::collections::BTreeMap;

/// How many hands need each number of plays.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary(BTreeMap<Plays, usize>);

impl Summary {
    pub fn add(&mut self, outcome: &Outcome) {
        *self.0.entry(outcome.plays()).or_default() += 1;
    }
    pub fn count(&self, plays: Plays) -> usize {
        self.0.get(&plays).copied().unwrap_or_default()
    }
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }
    /// the most plays any hand needed
    pub fn worst(&self) -> Option<Plays> {
        self.0.keys().last().copied()
    }
    pub fn mean(&self) -> f64 {
        let weighted = self.0.iter().map(|(&p, &n)| p as f64 * n as f64).sum::<f64>();
        weighted / self.total().max(1) as f64
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let total = self.total().max(1) as f64;
        writeln!(f, "{:<8}{:>12}{:>10}", "plays", "hands", "share")?;
        for (plays, n) in self.0.iter() {
            writeln!(
                f,
                "{:<8}{:>12}{:>9.3}%",
                plays,
                n,
                *n as f64 / total * 100.
            )?;
        }
        write!(f, "{:<8}{:>12}{:>10.3}", "mean", self.total(), self.mean())
    }
}
