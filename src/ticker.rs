use std::time::Duration;

/// Default event poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Shortest poll interval accepted from the command line
pub const MIN_TICK_MS: u64 = 10;

/// How long to wait for a key event before redrawing
pub fn tick_duration(tick_ms: u64) -> Duration {
    Duration::from_millis(tick_ms.max(MIN_TICK_MS))
}
