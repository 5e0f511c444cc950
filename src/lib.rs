//! Sort Rush - a festive falling-item sorting arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, kinematics, scoring)
//! - `catalog`: Product catalog, categories and special items
//! - `audio`: Procedural sound effects via Web Audio (wasm only)
//! - `settings` / `highscores`: LocalStorage-backed preferences and leaderboard

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod catalog;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game balance constants
pub mod consts {
    /// Reference frame duration all motion deltas are scaled against (ms).
    /// A dt of exactly this length yields one "unit" of motion.
    pub const FRAME_REF_MS: f32 = 16.0;
    /// Largest dt a single tick will integrate (tab-switch protection, ms)
    pub const MAX_TICK_MS: f32 = 100.0;

    /// Fall speed at level 1 (percent of play-area height per reference frame)
    pub const BASE_FALL_SPEED: f32 = 0.20;
    /// Fall speed gained per level
    pub const FALL_SPEED_STEP: f32 = 0.07;
    /// Fall speed ceiling
    pub const MAX_FALL_SPEED: f32 = 0.85;

    /// Spawn interval at level 1 (ms)
    pub const BASE_SPAWN_INTERVAL_MS: f32 = 1400.0;
    /// Spawn interval reduction per level (ms)
    pub const SPAWN_INTERVAL_STEP_MS: f32 = 110.0;
    /// Spawn interval floor (ms)
    pub const MIN_SPAWN_INTERVAL_MS: f32 = 500.0;
    /// Forced interval when the play area is empty (ms)
    pub const PANIC_SPAWN_INTERVAL_MS: f32 = 150.0;
    /// Interval factor when only one item is falling
    pub const LOW_PRESSURE_SPAWN_FACTOR: f32 = 0.6;
    /// Concurrent falling items at level 1 (grows by one every two levels)
    pub const BASE_CONCURRENT_ITEMS: usize = 5;

    /// Horizontal spawn band: avoids the extreme edges
    pub const SPAWN_X_MIN: f32 = 15.0;
    pub const SPAWN_X_SPAN: f32 = 70.0;
    /// Vertical spawn position, fully above the visible area
    pub const SPAWN_Y: f32 = -15.0;
    /// Crossing this vertical position costs a life
    pub const FLOOR_Y: f32 = 115.0;
    /// Missed items are removed once they tumble past this
    pub const MISSED_DESPAWN_Y: f32 = 150.0;

    /// Horizontal sway amplitude while falling
    pub const SWAY_AMPLITUDE: f32 = 6.0;
    /// Vertical travel per sway radian
    pub const SWAY_WAVELENGTH: f32 = 22.0;

    /// Streak above which items fall slightly faster
    pub const STREAK_SPEED_BONUS_THRESHOLD: u32 = 5;
    /// Extra speed fraction granted past the streak threshold
    pub const STREAK_SPEED_BONUS: f32 = 0.1;

    /// Fall speed factor while the time-slow power-up is active
    pub const SLOWDOWN_FACTOR: f32 = 0.4;
    /// Time-slow power-up duration (ms); re-triggering restarts the clock
    pub const SLOWDOWN_DURATION_MS: f32 = 2000.0;

    /// Speed of a sorted item flying to its bin (percent per reference frame)
    pub const FLY_SPEED: f32 = 7.6;
    /// Distance to the bin anchor at which a flying item is removed
    pub const BIN_ARRIVE_DIST: f32 = 4.0;
    /// Spin of a flying item (degrees per reference frame)
    pub const FLY_SPIN: f32 = 20.0;
    /// Fall speed of an item tumbling away after a wrong sort
    pub const MISSED_FALL_SPEED: f32 = 1.2;
    /// Spin of a missed item (degrees per reference frame)
    pub const MISSED_SPIN: f32 = 5.0;
    /// Horizontal wobble amplitude of a missed item
    pub const MISSED_WOBBLE: f32 = 2.0;
    /// Wobble period driver for missed items (ms per radian)
    pub const MISSED_WOBBLE_PERIOD_MS: f64 = 50.0;

    /// Points for an ordinary product before the multiplier
    pub const BASE_POINTS: u32 = 100;
    /// Points for the voucher before the multiplier
    pub const VOUCHER_POINTS: u32 = 500;
    /// Multiplier gained per streak point
    pub const STREAK_MULT_STEP: f32 = 0.1;
    /// Multiplier gained per level
    pub const LEVEL_MULT_STEP: f32 = 0.2;

    /// Starting and maximum lives
    pub const LIVES_START: u8 = 3;
    pub const LIVES_MAX: u8 = 3;
    /// Streak points per level-up
    pub const STREAK_PER_LEVEL: u32 = 10;

    /// Chance of a bonus-life heart on levels divisible by 3
    pub const HEART_SPAWN_CHANCE: f32 = 0.15;
    /// Chance of a time-slow clock on levels divisible by 2
    pub const CLOCK_SPAWN_CHANCE: f32 = 0.12;
    /// Score past which the one-time voucher is guaranteed
    pub const VOUCHER_SCORE_THRESHOLD: u64 = 150;
    /// Chance of the voucher reappearing after its one-time emission
    pub const VOUCHER_RESPAWN_CHANCE: f32 = 0.01;

    /// Bin fill meter step per correct sort, and its cap
    pub const BIN_FILL_STEP: u32 = 5;
    pub const BIN_FILL_MAX: u32 = 100;
}

/// Scale factor turning per-reference-frame motion into per-dt motion
#[inline]
pub fn frame_factor(dt_ms: f32) -> f32 {
    dt_ms / consts::FRAME_REF_MS
}
