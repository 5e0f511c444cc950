//! Run state and core simulation types
//!
//! A single `GameState` value owns everything a session mutates: the item
//! arena, the score accumulators, the target lock and the power-up clock.
//! Only the tick updater and input resolution mutate it.

use std::collections::HashMap;
use std::sync::Arc;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Category, Product};
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Host asked for a breather; nothing advances
    Paused,
    /// Lives hit zero. Terminal; no further mutation.
    GameOver,
}

/// Lifecycle state of a falling item
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemState {
    /// Swaying down toward the floor
    Falling,
    /// Correctly sorted, flying to its bin anchor
    Sorted { bin: Vec2 },
    /// Wrongly sorted, tumbling off the bottom of the screen
    Missed,
}

/// One on-screen item instance. Items reference their product; duplicates
/// of the same product share one allocation.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: u32,
    pub product: Arc<Product>,
    /// Rendered position (percent coordinates, y grows downward)
    pub pos: Vec2,
    /// Sway/fall driver; `pos` diverges from it while flying to a bin
    pub base: Vec2,
    /// Fixed sway phase offset, randomized at spawn
    pub phase: f32,
    /// Rendered rotation in degrees
    pub rotation: f32,
    pub state: ItemState,
}

impl Item {
    pub fn is_falling(&self) -> bool {
        self.state == ItemState::Falling
    }
}

/// Sound cues the shell maps to actual audio. Suppressed while muted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Pop,
    Error,
    LevelUp,
    Voucher,
}

/// Fire-and-forget notifications for the presentation layer, drained once
/// per frame. The sim never waits on any of these.
#[derive(Debug, Clone)]
pub enum GameEvent {
    Sound(SoundCue),
    ScoreDelta { points: u64, at: Vec2 },
    LevelUp { level: u32 },
    DamageFlash,
    ScreenShake,
    Confetti { at: Vec2, golden: bool },
    BinBump { category: Category },
    VoucherGlow { category: Category },
    ExtraLife { at: Vec2 },
    SlowTime { at: Vec2 },
    ItemLost { at: Vec2 },
    SessionEnded(RunSummary),
}

/// Per-category counters (collections, bin fill meters)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerCategory {
    pub nails: u32,
    pub makeup: u32,
    pub accessories: u32,
}

impl PerCategory {
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Nails => self.nails,
            Category::Makeup => self.makeup,
            Category::Accessories => self.accessories,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut u32 {
        match category {
            Category::Nails => &mut self.nails,
            Category::Makeup => &mut self.makeup,
            Category::Accessories => &mut self.accessories,
        }
    }
}

/// A product and how many of it were collected this session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectedItem {
    pub product: Product,
    pub count: u32,
}

/// Frozen end-of-session summary, handed to the session-end sink exactly
/// once when lives reach zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub final_score: u64,
    pub best_streak: u32,
    pub collected: PerCategory,
    /// Collected products, descending by count (ties by product id)
    pub collected_items: Vec<CollectedItem>,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    /// Consecutive correct non-power-up sorts
    pub streak: u32,
    /// High-water mark of `streak`, survives resets
    pub best_streak: u32,
    pub level: u32,
    /// Active items in insertion order
    pub items: Vec<Item>,
    /// Id of the item input acts on; revalidated every tick and input
    pub locked_target: Option<u32>,
    pub bin_fills: PerCategory,
    pub collected: PerCategory,
    /// Product id -> product + count, for the end-of-session summary
    pub collected_items: HashMap<String, CollectedItem>,
    /// Time-slow power-up countdown; active while positive
    pub slow_remaining_ms: f32,
    /// The one-time voucher has been emitted
    pub voucher_spawned: bool,
    /// Sound cues are dropped while muted
    pub muted: bool,
    pub(crate) spawn_timer_ms: f32,
    /// Accumulated session clock, drives the missed-item wobble
    pub(crate) time_ms: f64,
    pub(crate) rng: Pcg32,
    catalog: Catalog,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new session over the given catalog
    pub fn new(catalog: Catalog, seed: u64) -> Self {
        if catalog.is_empty() {
            log::warn!("catalog is empty; spawner will idle");
        }
        Self {
            seed,
            phase: GamePhase::Playing,
            score: 0,
            lives: LIVES_START,
            streak: 0,
            best_streak: 0,
            level: 1,
            items: Vec::new(),
            locked_target: None,
            bin_fills: PerCategory::default(),
            collected: PerCategory::default(),
            collected_items: HashMap::new(),
            slow_remaining_ms: 0.0,
            voucher_spawned: false,
            muted: false,
            spawn_timer_ms: 0.0,
            time_ms: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            catalog,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Uniform pick from the ordinary product pool using the session RNG
    pub(crate) fn pick_ordinary(&mut self) -> Option<Arc<Product>> {
        self.catalog.pick(&mut self.rng)
    }

    pub fn item(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub(crate) fn item_mut(&mut self, id: u32) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    pub fn falling_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_falling()).count()
    }

    pub fn slowdown_active(&self) -> bool {
        self.slow_remaining_ms > 0.0
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Pause the session. No-op unless playing.
    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
        }
    }

    /// Resume a paused session. No-op unless paused.
    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Emit a sound cue unless muted
    pub(crate) fn push_sound(&mut self, cue: SoundCue) {
        if !self.muted {
            self.events.push(GameEvent::Sound(cue));
        }
    }

    /// Take all pending presentation events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Shared penalty path for wrong sorts and floor misses: one life down,
    /// streak reset, feedback events, session finalization at zero lives.
    pub(crate) fn lose_life(&mut self) {
        self.push_sound(SoundCue::Error);
        self.lives = self.lives.saturating_sub(1);
        self.streak = 0;
        self.push_event(GameEvent::DamageFlash);
        self.push_event(GameEvent::ScreenShake);
        if self.lives == 0 {
            self.finalize();
        }
    }

    /// Freeze the session and emit the summary. Idempotent.
    pub(crate) fn finalize(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        let summary = self.summary();
        log::info!(
            "session over: score={} best_streak={} items={}",
            summary.final_score,
            summary.best_streak,
            summary.collected_items.len()
        );
        self.events.push(GameEvent::SessionEnded(summary));
    }

    /// Snapshot of the session totals
    pub fn summary(&self) -> RunSummary {
        let mut collected_items: Vec<CollectedItem> =
            self.collected_items.values().cloned().collect();
        collected_items.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.product.id.cmp(&b.product.id))
        });
        RunSummary {
            final_score: self.score,
            best_streak: self.best_streak,
            collected: self.collected,
            collected_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let state = GameState::new(Catalog::fallback(), 42);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.streak, 0);
        assert!(state.items.is_empty());
        assert!(state.locked_target.is_none());
        assert!(!state.slowdown_active());
    }

    #[test]
    fn test_pause_resume_guards() {
        let mut state = GameState::new(Catalog::fallback(), 42);
        state.pause();
        assert_eq!(state.phase, GamePhase::Paused);
        // pausing again is a no-op
        state.pause();
        assert_eq!(state.phase, GamePhase::Paused);
        state.resume();
        assert_eq!(state.phase, GamePhase::Playing);
        // resume out of GameOver must not revive the session
        state.finalize();
        state.resume();
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_lose_life_resets_streak_and_finalizes_at_zero() {
        let mut state = GameState::new(Catalog::fallback(), 42);
        state.streak = 7;
        state.lose_life();
        assert_eq!(state.lives, 2);
        assert_eq!(state.streak, 0);
        assert_eq!(state.phase, GamePhase::Playing);

        state.lose_life();
        state.lose_life();
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        let events = state.drain_events();
        let ended = events
            .iter()
            .filter(|e| matches!(e, GameEvent::SessionEnded(_)))
            .count();
        assert_eq!(ended, 1);
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let mut state = GameState::new(Catalog::fallback(), 42);
        state.score = 1234;
        state.finalize();
        state.finalize();
        let events = state.drain_events();
        let ended = events
            .iter()
            .filter(|e| matches!(e, GameEvent::SessionEnded(_)))
            .count();
        assert_eq!(ended, 1);
    }

    #[test]
    fn test_muted_drops_sound_cues() {
        let mut state = GameState::new(Catalog::fallback(), 42);
        state.set_muted(true);
        state.push_sound(SoundCue::Pop);
        assert!(state.drain_events().is_empty());
        state.set_muted(false);
        state.push_sound(SoundCue::Pop);
        assert_eq!(state.drain_events().len(), 1);
    }

    #[test]
    fn test_summary_orders_by_descending_count() {
        let mut state = GameState::new(Catalog::fallback(), 42);
        let products: Vec<Product> = state
            .catalog()
            .products()
            .iter()
            .take(3)
            .map(|p| (**p).clone())
            .collect();
        for (product, count) in products.iter().zip([2u32, 5, 1]) {
            state.collected_items.insert(
                product.id.clone(),
                CollectedItem {
                    product: product.clone(),
                    count,
                },
            );
        }
        let summary = state.summary();
        let counts: Vec<u32> = summary.collected_items.iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![5, 2, 1]);
    }
}
