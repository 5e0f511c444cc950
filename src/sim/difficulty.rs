//! Difficulty curve
//!
//! Pure functions of the current level. Each is clamped independently and
//! monotonic: speed up, interval down, cap up as the level rises.

use crate::consts::*;

/// Fall speed for a level (percent per reference frame)
pub fn fall_speed(level: u32) -> f32 {
    (BASE_FALL_SPEED + level.saturating_sub(1) as f32 * FALL_SPEED_STEP).min(MAX_FALL_SPEED)
}

/// Nominal spawn interval for a level (ms), before panic adjustments
pub fn spawn_interval_ms(level: u32) -> f32 {
    (BASE_SPAWN_INTERVAL_MS - level.saturating_sub(1) as f32 * SPAWN_INTERVAL_STEP_MS)
        .max(MIN_SPAWN_INTERVAL_MS)
}

/// Maximum concurrent falling items for a level
pub fn concurrency_cap(level: u32) -> usize {
    BASE_CONCURRENT_ITEMS + (level / 2) as usize
}
