//! Multi-way Omaha equity over a partially revealed board.
//!
//! Given every player's four hole cards, the known community cards and any
//! dead cards, the engine completes the board either exhaustively or by
//! Monte Carlo sampling, settles the high and (8-or-better) low halves of
//! the pot on each completion, and accumulates per-player win/tie/loss
//! counts and expected pot share.
//!
//! - [`cards`]: card sets, combinatorial iteration, hand evaluation
//! - [`equity`]: runout generation, showdown settlement, accumulation
pub mod cards;
pub mod equity;

#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Seat index at the table, in the order hands were given.
pub type Position = usize;
/// Fraction of a pot, expressed in whole [`POT`] units.
pub type Chips = u64;
/// Percentages and averaged pot shares.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TABLE LIMITS
// ============================================================================
/// Fewest players that can contest a pot.
pub const MIN_PLAYERS: usize = 2;
/// Most players the engine (and a nine-handed table) supports.
pub const MAX_PLAYERS: usize = 9;
/// Private cards dealt to each Omaha player.
pub const HOLE_SIZE: usize = 4;
/// Community cards on a complete board.
pub const BOARD_SIZE: usize = 5;
/// Hole cards a player must use in each five-card hand.
pub const HOLE_USED: usize = 2;
/// Board cards a player must use in each five-card hand.
pub const BOARD_USED: usize = 3;
/// Highest rank (ace counted as one) a qualifying low may contain.
pub const LOW_QUALIFIER: u8 = 8;

// ============================================================================
// POT ACCOUNTING
// Shares are integers so that splits are exact and merges are associative.
// ============================================================================
/// Units in one whole pot. Divisible by every split of a whole pot among
/// 1..=9 winners and of a half pot among 1..=9 winners.
pub const POT: Chips = 5040;
/// Units in one half of a split pot.
pub const HALF_POT: Chips = POT / 2;

// ============================================================================
// SAMPLING AND PROGRESS
// ============================================================================
/// Monte Carlo iterations handled by one independently seeded job.
pub const SAMPLING_CHUNK: usize = 0x1000;
/// Boards a worker processes between progress checkpoints.
pub const PROGRESS_STRIDE: usize = 0x4000;
/// Minimum time between progress log messages.
pub const PROGRESS_INTERVAL: std::time::Duration = std::time::Duration::from_secs(5);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr, optionally mirrored to a file.
/// The file receives DEBUG and above regardless of the terminal level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter, file: Option<&std::path::Path>) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )];
    if let Some(path) = file {
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config.clone(),
            std::fs::File::create(path)?,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}

/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (split, unit) = s.char_indices().last()?;
    let value: u64 = s[..split].parse().ok()?;
    let scale = match unit {
        's' => 1,
        'm' => 60,
        'h' => 3600,
        'd' => 86400,
        _ => return None,
    };
    value.checked_mul(scale).map(std::time::Duration::from_secs)
}
