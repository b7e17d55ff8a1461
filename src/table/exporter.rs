use super::format::Format;
use super::progress::Progress;
use super::summary::Summary;
use super::writer::Writer;
use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::cards::shard::Shard;
use crate::solver::outcome::Outcome;
use crate::solver::search::Solver;
use crate::solver::shortcut::Shortcut;
use rayon::prelude::*;
use std::io::Write;
use std::path::Path;

/// Solves every hand up to a ceiling and writes one row per hand,
/// in generation order.
///
/// With more than one thread the state space is cut into shards by
/// the counts of the lowest ranks. A batch of shards is solved on the
/// pool, each shard with a private Solver, and the batch is written
/// out in shard order before the next starts. The table comes out
/// byte for byte the same as a single-threaded run.
#[derive(Debug, Clone, Copy)]
pub struct Exporter {
    ceiling: usize,
    shortcut: Shortcut,
    threads: usize,
}

impl From<usize> for Exporter {
    fn from(ceiling: usize) -> Self {
        Self {
            ceiling,
            shortcut: Shortcut::default(),
            threads: num_cpus::get(),
        }
    }
}

impl Exporter {
    pub fn shortcut(self, shortcut: Shortcut) -> Self {
        Self { shortcut, ..self }
    }
    pub fn threads(self, threads: usize) -> Self {
        Self {
            threads: threads.max(1),
            ..self
        }
    }

    /// export to a file, returning the distribution of plays
    pub fn save(&self, path: impl AsRef<Path>, format: Format) -> anyhow::Result<Summary> {
        let mut writer = Writer::create(path, format)?;
        let summary = self.export(&mut writer)?;
        writer.finish()?;
        Ok(summary)
    }

    pub fn export<W: Write>(&self, writer: &mut Writer<W>) -> anyhow::Result<Summary> {
        log::info!("{:<32}{:<32}", "exporting up to", self.ceiling);
        log::info!("{:<32}{:<32}", "hands", HandIterator::combinations(self.ceiling));
        log::info!("{:<32}{:<32}", "threads", self.threads);
        log::info!("{:<32}{:<32}", "shortcut", self.shortcut);
        let summary = if self.threads > 1 {
            self.parallel(writer)?
        } else {
            self.sequential(writer)?
        };
        log::info!("{:<32}{:<32}", "rows written", summary.total());
        log::info!("distribution\n{}", summary);
        Ok(summary)
    }

    fn sequential<W: Write>(&self, writer: &mut Writer<W>) -> anyhow::Result<Summary> {
        let hands = HandIterator::from(self.ceiling);
        let mut progress = Progress::new(hands.len());
        let mut summary = Summary::default();
        let mut solver = Solver::from(self.shortcut);
        // the empty hand comes first and is written with 0 plays and no move
        for hand in hands {
            let outcome = solver.solve(hand);
            writer.append(hand, outcome)?;
            summary.add(&outcome);
            progress.tick();
        }
        log::debug!("{:<32}{:<32}", "memoized", solver.cached());
        progress.checkpoint();
        Ok(summary)
    }

    fn parallel<W: Write>(&self, writer: &mut Writer<W>) -> anyhow::Result<Summary> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()?;
        let shards = Shard::all(self.ceiling, crate::SHARD_DEPTH);
        let mut progress = Progress::new(HandIterator::combinations(self.ceiling));
        let mut summary = Summary::default();
        for batch in shards.chunks(self.threads) {
            let solved = pool.install(|| {
                batch
                    .par_iter()
                    .map(|shard| self.solve(shard))
                    .collect::<Vec<Vec<(Hand, Outcome)>>>()
            });
            for (hand, outcome) in solved.into_iter().flatten() {
                writer.append(hand, outcome)?;
                summary.add(&outcome);
                progress.tick();
            }
        }
        progress.checkpoint();
        Ok(summary)
    }

    fn solve(&self, shard: &Shard) -> Vec<(Hand, Outcome)> {
        let mut solver = Solver::from(self.shortcut);
        let solved = shard
            .hands()
            .map(|hand| (hand, solver.solve(hand)))
            .collect::<Vec<_>>();
        log::debug!("{:<32}{:<32}", "solved shard", shard.prefix());
        solved
    }
}
