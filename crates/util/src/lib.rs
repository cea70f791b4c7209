//! Core type aliases, traits, and constants for minimaxer.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the minimaxer workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Node scores, including the ±∞ alpha-beta sentinels.
pub type Score = f64;
/// Raw leaf values as typed by the user.
pub type Value = i32;
/// Distance from the root (root = 0). Parity decides MAX/MIN.
pub type Depth = usize;
/// Percentage of the tree skipped by pruning.
pub type Efficiency = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for demos and property tests.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TREE INPUT PARAMETERS
// ============================================================================
/// Leaf values loaded at startup when none are given.
pub const DEFAULT_LEAVES: &str = "3, 12, 8, 2, 4, 6, 14, 5, 2, 1, 9, 11, 7, 10, 4, 13";
/// Leaf count of a generated random tree.
pub const RANDOM_TREE_SIZE: usize = 16;
/// Smallest value of a generated leaf (inclusive).
pub const RANDOM_VALUE_MIN: Value = 1;
/// Largest value of a generated leaf (inclusive).
pub const RANDOM_VALUE_MAX: Value = 15;
/// Separator between leaf values in textual input.
pub const LEAF_DELIMITER: char = ',';

// ============================================================================
// PLAYBACK
// ============================================================================
/// Delay between two animation ticks.
pub const TICK_INTERVAL: std::time::Duration = std::time::Duration::from_millis(500);
/// Environment override for [`TICK_INTERVAL`], e.g. "250ms" or "1s".
pub const TICK_INTERVAL_VAR: &str = "MMX_INTERVAL";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
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

/// Playback interval, honoring the `MMX_INTERVAL` override when it parses.
pub fn interval() -> std::time::Duration {
    match std::env::var(TICK_INTERVAL_VAR) {
        Err(_) => TICK_INTERVAL,
        Ok(s) => parse_duration(&s).unwrap_or_else(|| {
            log::warn!("ignoring unparseable {}={}", TICK_INTERVAL_VAR, s);
            TICK_INTERVAL
        }),
    }
}

/// Parse duration string like "250ms", "30s", "5m", "2h" into Duration.
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    if let Some(num) = s.strip_suffix("ms") {
        return num.parse().ok().map(std::time::Duration::from_millis);
    }
    let (num, unit) = s.split_at(s.len().saturating_sub(1));
    let value: u64 = num.parse().ok()?;
    match unit {
        "s" => Some(std::time::Duration::from_secs(value)),
        "m" => Some(std::time::Duration::from_secs(value * 60)),
        "h" => Some(std::time::Duration::from_secs(value * 3600)),
        _ => None,
    }
}
