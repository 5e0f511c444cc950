//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit elapsed-time deltas only, no wall-clock reads
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod difficulty;
pub mod score;
pub mod spawn;
pub mod state;
pub mod target;
pub mod tick;

pub use score::{BinGeometry, resolve_sort};
pub use state::{
    CollectedItem, GameEvent, GamePhase, GameState, Item, ItemState, PerCategory, RunSummary,
    SoundCue,
};
pub use target::select_target;
pub use tick::tick;
