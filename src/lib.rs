pub mod cards;
pub mod melds;
pub mod solver;
pub mod table;

/// Number of plays needed to empty a hand.
pub type Plays = u8;

/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    fn random() -> Self;
}

// ============================================================================
// DECK PARAMETERS
// ============================================================================
/// Number of distinct ranks, 3 through 2.
pub const N_RANKS: usize = 13;
/// Copies held per rank: eleven ordinary ranks, three aces, one deuce.
pub const CAPACITY: [u8; N_RANKS] = [4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 3, 1];
/// Cards dealt into a full starting hand.
pub const STARTING_SIZE: usize = 16;
/// Largest endgame hand enumerated by the batch solver.
pub const CEILING: usize = 15;

// ============================================================================
// MELD CATALOGUE
// ============================================================================
/// Shortest and longest straight of singles.
pub const STRAIGHT_MIN: u8 = 5;
pub const STRAIGHT_MAX: u8 = 13;
/// Shortest and longest straight of pairs.
pub const DOUBLE_STRAIGHT_MIN: u8 = 2;
pub const DOUBLE_STRAIGHT_MAX: u8 = 8;
/// Shortest and longest straight of triples.
pub const TRIPLE_STRAIGHT_MIN: u8 = 2;
pub const TRIPLE_STRAIGHT_MAX: u8 = 5;

// ============================================================================
// BATCH INFRASTRUCTURE
// ============================================================================
/// Interval between progress log messages during export.
pub const PROGRESS_INTERVAL: std::time::Duration = std::time::Duration::from_secs(10);
/// Number of leading ranks fixed per shard in parallel export.
pub const SHARD_DEPTH: usize = 2;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
