//! Spawner
//!
//! Once per tick, decides whether exactly one new item enters the play
//! area and which product it wraps. Pacing follows the difficulty curve
//! with panic adjustments so the screen never goes dead; power-ups and the
//! voucher substitute into the uniform pick, first match wins.

use std::f32::consts::TAU;
use std::sync::Arc;

use glam::Vec2;
use rand::Rng;

use super::difficulty;
use super::state::{GameState, Item, ItemState};
use crate::catalog::Product;
use crate::consts::*;

/// Advance the spawn timer and spawn at most one item
pub(crate) fn maybe_spawn(state: &mut GameState, dt_ms: f32) {
    state.spawn_timer_ms += dt_ms;

    let falling = state.falling_count();
    let interval = match falling {
        // dead air: force an immediate spawn
        0 => PANIC_SPAWN_INTERVAL_MS,
        // low pressure: shorten the wait
        1 => difficulty::spawn_interval_ms(state.level) * LOW_PRESSURE_SPAWN_FACTOR,
        _ => difficulty::spawn_interval_ms(state.level),
    };
    if state.spawn_timer_ms < interval {
        return;
    }
    if falling >= difficulty::concurrency_cap(state.level) {
        // timer keeps running; the next free slot spawns immediately
        return;
    }

    let Some(product) = pick_product(state) else {
        // empty catalog: suspend spawning
        return;
    };

    let x = SPAWN_X_MIN + state.rng.random::<f32>() * SPAWN_X_SPAN;
    let phase = state.rng.random::<f32>() * TAU;
    let id = state.next_entity_id();
    log::debug!("spawn item {id}: {}", product.name);
    state.items.push(Item {
        id,
        product,
        pos: Vec2::new(x, SPAWN_Y),
        base: Vec2::new(x, SPAWN_Y),
        phase,
        rotation: 0.0,
        state: ItemState::Falling,
    });
    state.spawn_timer_ms = 0.0;
}

/// Choose the product for this spawn. Exactly one substitution wins:
/// heart, then clock, then the one-time voucher, then the rare voucher
/// re-spawn, then a uniform catalog pick.
fn pick_product(state: &mut GameState) -> Option<Arc<Product>> {
    let level = state.level;

    if level % 3 == 0 && state.rng.random::<f32>() < HEART_SPAWN_CHANCE {
        return Some(state.catalog().heart());
    }
    if level % 2 == 0 && state.rng.random::<f32>() < CLOCK_SPAWN_CHANCE {
        return Some(state.catalog().clock());
    }
    if !state.voucher_spawned && state.score > VOUCHER_SCORE_THRESHOLD {
        state.voucher_spawned = true;
        return Some(state.catalog().voucher());
    }
    if state.voucher_spawned && state.rng.random::<f32>() < VOUCHER_RESPAWN_CHANCE {
        return Some(state.catalog().voucher());
    }

    state.pick_ordinary()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CampaignData, Catalog, SpecialKind};

    fn playing_state(seed: u64) -> GameState {
        GameState::new(Catalog::fallback(), seed)
    }

    fn spawn_once(state: &mut GameState) -> Option<u32> {
        let before: Vec<u32> = state.items.iter().map(|i| i.id).collect();
        // a panic-interval wait is always enough to trigger a spawn attempt
        maybe_spawn(state, BASE_SPAWN_INTERVAL_MS + 1.0);
        state
            .items
            .iter()
            .map(|i| i.id)
            .find(|id| !before.contains(id))
    }

    #[test]
    fn test_spawns_within_safe_band() {
        let mut state = playing_state(3);
        for _ in 0..50 {
            let id = spawn_once(&mut state).expect("spawn");
            let item = state.item(id).unwrap();
            assert!(item.pos.x >= SPAWN_X_MIN);
            assert!(item.pos.x < SPAWN_X_MIN + SPAWN_X_SPAN);
            assert_eq!(item.pos.y, SPAWN_Y);
            assert_eq!(item.state, ItemState::Falling);
            state.items.clear();
        }
    }

    #[test]
    fn test_panic_spawn_when_field_is_empty() {
        let mut state = playing_state(3);
        maybe_spawn(&mut state, PANIC_SPAWN_INTERVAL_MS + 1.0);
        assert_eq!(state.items.len(), 1, "empty field must spawn at panic rate");
    }

    #[test]
    fn test_respects_concurrency_cap() {
        let mut state = playing_state(3);
        // fill up to the level-1 cap
        for _ in 0..difficulty::concurrency_cap(1) {
            spawn_once(&mut state).expect("below cap");
        }
        assert!(spawn_once(&mut state).is_none(), "cap must refuse spawns");
    }

    #[test]
    fn test_timer_only_resets_on_spawn() {
        let mut state = playing_state(3);
        for _ in 0..difficulty::concurrency_cap(1) {
            spawn_once(&mut state).expect("below cap");
        }
        // refused spawn leaves the timer elapsed...
        maybe_spawn(&mut state, BASE_SPAWN_INTERVAL_MS + 1.0);
        let cap = state.items.len();
        // ...so freeing a slot spawns on the very next tick
        state.items.remove(0);
        maybe_spawn(&mut state, 1.0);
        assert_eq!(state.items.len(), cap);
    }

    #[test]
    fn test_one_time_voucher_guaranteed_past_threshold() {
        let mut state = playing_state(3);
        state.score = VOUCHER_SCORE_THRESHOLD + 1;
        // level 1 gates both power-up substitutions off, so the voucher is
        // the first substitution checked
        let id = spawn_once(&mut state).expect("spawn");
        let item = state.item(id).unwrap();
        assert_eq!(item.product.special, Some(SpecialKind::Voucher));
        assert!(state.voucher_spawned);

        // after the one-time emission the voucher is only a rare re-spawn
        let mut vouchers = 0;
        for _ in 0..100 {
            state.items.clear();
            let id = spawn_once(&mut state).expect("spawn");
            if state.item(id).unwrap().product.special == Some(SpecialKind::Voucher) {
                vouchers += 1;
            }
        }
        assert!(vouchers < 10, "voucher re-spawn must stay rare, got {vouchers}");
    }

    #[test]
    fn test_power_ups_gated_by_level() {
        // at level 1 neither gate is open: no heart, no clock, ever
        let mut state = playing_state(99);
        for _ in 0..200 {
            let id = spawn_once(&mut state).expect("spawn");
            let special = state.item(id).unwrap().product.special;
            assert!(
                !matches!(special, Some(SpecialKind::Heart | SpecialKind::Clock)),
                "level 1 must not spawn power-ups"
            );
            state.items.clear();
        }

        // at level 6 both gates are open; with enough rolls both appear
        let mut state = playing_state(99);
        state.level = 6;
        let mut seen_heart = false;
        let mut seen_clock = false;
        for _ in 0..500 {
            let id = spawn_once(&mut state).expect("spawn");
            match state.item(id).unwrap().product.special {
                Some(SpecialKind::Heart) => seen_heart = true,
                Some(SpecialKind::Clock) => seen_clock = true,
                _ => {}
            }
            state.items.clear();
        }
        assert!(seen_heart, "heart should appear at a level divisible by 3");
        assert!(seen_clock, "clock should appear at a level divisible by 2");
    }

    #[test]
    fn test_empty_catalog_idles() {
        let empty = Catalog::from_campaign(CampaignData {
            title: "empty".to_string(),
            description: String::new(),
            products: vec![],
            grounding_urls: vec![],
        });
        let mut state = GameState::new(empty, 3);
        maybe_spawn(&mut state, BASE_SPAWN_INTERVAL_MS * 10.0);
        assert!(state.items.is_empty());
    }
}
