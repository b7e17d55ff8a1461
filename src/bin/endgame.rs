//! Endgame Binary
//!
//! Exports the fewest-plays table, solves single hands, and audits
//! the greedy shortcut against exhaustive search.

use clap::Parser;
use shedder::cards::*;
use shedder::melds::*;
use shedder::solver::*;
use shedder::table::*;
use shedder::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Endgame {
    #[command(about = "Solve every hand up to a ceiling and write the table", alias = "exp")]
    Export {
        #[arg(short, long, default_value_t = CEILING)]
        ceiling: usize,
        #[arg(short, long, value_enum, default_value_t = Format::default())]
        format: Format,
        #[arg(short, long, value_enum, default_value_t = Shortcut::default())]
        shortcut: Shortcut,
        #[arg(short, long, default_value_t = num_cpus::get())]
        threads: usize,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    #[command(about = "Solve one hand, e.g. \"333 4567 AA 2\"", alias = "sol")]
    Solve {
        #[arg(required = true)]
        hand: String,
        #[arg(short, long, value_enum, default_value_t = Shortcut::default())]
        shortcut: Shortcut,
    },
    #[command(about = "Compare the extras shortcut with exhaustive search", alias = "aud")]
    Audit {
        #[arg(short, long, default_value_t = 8)]
        ceiling: usize,
    },
    #[command(about = "Find the hand with the most legal melds", alias = "wid")]
    Widest {
        #[arg(short, long, default_value_t = STARTING_SIZE)]
        total: usize,
    },
    #[command(about = "Count hands up to a ceiling, or of an exact size", alias = "cnt")]
    Count {
        #[arg(short, long, default_value_t = CEILING)]
        ceiling: usize,
        #[arg(short, long)]
        exactly: Option<usize>,
    },
}

impl Endgame {
    fn run(self) -> anyhow::Result<()> {
        match self {
            Self::Export {
                ceiling,
                format,
                shortcut,
                threads,
                output,
            } => {
                let path = output.unwrap_or_else(|| {
                    PathBuf::from(format!("endgame.{}.{}", ceiling, format.extension()))
                });
                Exporter::from(ceiling)
                    .shortcut(shortcut)
                    .threads(threads)
                    .save(path, format)?;
            }
            Self::Solve { hand, shortcut } => {
                let mut hand = Hand::try_from(hand.as_str())?;
                let mut solver = Solver::from(shortcut);
                let outcome = solver.solve(hand);
                log::info!("{:<32}{:<32}", "hand", hand);
                log::info!("{:<32}{:<32}", "plays", outcome.plays());
                log::info!("{:<32}{:<32}", "nodes", solver.nodes());
                while let Some(meld) = solver.solve(hand).witness() {
                    log::info!("{:<32}{}", "play", meld);
                    hand = hand.remove(meld.hand());
                }
            }
            Self::Audit { ceiling } => {
                let found = audit(ceiling);
                if !found.is_empty() {
                    log::warn!("{:<32}{:<32}", "extras disagrees on", found.len());
                }
            }
            Self::Widest { total } => match widest(total) {
                Some((hand, n)) => {
                    log::info!("{:<32}{:<32}", "widest hand", hand);
                    log::info!("{:<32}{:<32}", "legal melds", n);
                    for meld in Oracle::from(hand).melds() {
                        log::debug!("{}", meld);
                    }
                }
                None => log::warn!("{:<32}{:<32}", "no hand holds", total),
            },
            Self::Count { ceiling, exactly } => match exactly {
                Some(total) => {
                    log::info!("{:<32}{:<32}", "hands of exactly", total);
                    log::info!("{:<32}{:<32}", "count", HandIterator::exactly(total));
                }
                None => {
                    log::info!("{:<32}{:<32}", "hands up to", ceiling);
                    log::info!("{:<32}{:<32}", "count", HandIterator::combinations(ceiling));
                }
            },
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    log();
    Endgame::parse().run()
}
