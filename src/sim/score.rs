//! Input resolution and scoring
//!
//! Maps a player's "sort into category" action against the locked target.
//! There are no error paths here, only state-machine guards: a stale or
//! missing target, or a finished session, turn the call into a no-op.

use glam::Vec2;

use super::state::{CollectedItem, GameEvent, GamePhase, GameState, ItemState, SoundCue};
use super::target;
use crate::catalog::{Category, SpecialKind};
use crate::consts::*;

/// Where the bins currently sit on screen, in the sim's normalized percent
/// coordinates. Queried once per successful sort; the flying item animates
/// toward the returned anchor.
pub trait BinGeometry {
    fn bin_anchor(&self, category: Category) -> Vec2;
}

/// Resolve one sort action against the current target.
///
/// Wildcard specials (voucher, heart, clock) are correct for any category.
/// Hearts and clocks grant their effect without touching streak, score or
/// the collection; the voucher scores like a premium product. A category
/// mismatch costs a life and resets the streak.
pub fn resolve_sort(state: &mut GameState, category: Category, bins: &dyn BinGeometry) {
    if state.phase != GamePhase::Playing {
        return;
    }

    // resolve the lock, falling back to a fresh selection if stale
    let target_id = state
        .locked_target
        .filter(|&id| state.item(id).is_some_and(|i| i.is_falling()))
        .or_else(|| target::select_target(&state.items));
    let Some(target_id) = target_id else {
        return;
    };
    state.locked_target = Some(target_id);

    let Some(item) = state.item(target_id) else {
        return;
    };
    let product = item.product.clone();
    let at = item.pos;

    let correct = product.special.is_some() || product.category == category;
    if correct {
        match product.special {
            Some(SpecialKind::Heart) => {
                state.push_sound(SoundCue::Voucher);
                state.lives = (state.lives + 1).min(LIVES_MAX);
                state.push_event(GameEvent::ExtraLife { at });
                state.push_event(GameEvent::Confetti { at, golden: true });
            }
            Some(SpecialKind::Clock) => {
                state.push_sound(SoundCue::Voucher);
                // re-trigger restarts the clock rather than stacking
                state.slow_remaining_ms = SLOWDOWN_DURATION_MS;
                state.push_event(GameEvent::SlowTime { at });
                state.push_event(GameEvent::Confetti { at, golden: true });
            }
            special => {
                let voucher = special == Some(SpecialKind::Voucher);
                if voucher {
                    state.push_sound(SoundCue::Voucher);
                    state.push_event(GameEvent::VoucherGlow { category });
                } else {
                    state.push_sound(SoundCue::Pop);
                }

                // price the sort with the streak/level in effect when the
                // input arrived
                let streak0 = state.streak;
                let level0 = state.level;

                state.streak += 1;
                state.best_streak = state.best_streak.max(state.streak);
                *state.collected.get_mut(category) += 1;
                state
                    .collected_items
                    .entry(product.id.clone())
                    .and_modify(|c| c.count += 1)
                    .or_insert_with(|| CollectedItem {
                        product: (*product).clone(),
                        count: 1,
                    });

                if state.streak % STREAK_PER_LEVEL == 0 {
                    state.level += 1;
                    log::info!("level up: {}", state.level);
                    state.push_sound(SoundCue::LevelUp);
                    state.push_event(GameEvent::LevelUp { level: state.level });
                    state.push_event(GameEvent::ScreenShake);
                }

                let base = if voucher { VOUCHER_POINTS } else { BASE_POINTS };
                let multiplier =
                    1.0 + streak0 as f32 * STREAK_MULT_STEP + level0 as f32 * LEVEL_MULT_STEP;
                let points = (base as f32 * multiplier).round() as u64;
                state.score += points;

                let fill = state.bin_fills.get_mut(category);
                *fill = (*fill + BIN_FILL_STEP).min(BIN_FILL_MAX);

                state.push_event(GameEvent::BinBump { category });
                if !voucher {
                    state.push_event(GameEvent::ScoreDelta { points, at });
                }
                state.push_event(GameEvent::Confetti { at, golden: voucher });
            }
        }

        let bin = bins.bin_anchor(category);
        if let Some(item) = state.item_mut(target_id) {
            item.state = ItemState::Sorted { bin };
        }
    } else {
        state.lose_life();
        if let Some(item) = state.item_mut(target_id) {
            item.state = ItemState::Missed;
        }
    }

    target::revalidate_lock(state);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::{Catalog, Product};
    use crate::sim::state::Item;

    /// Fixed bin anchors for tests
    struct TestBins;

    impl BinGeometry for TestBins {
        fn bin_anchor(&self, category: Category) -> Vec2 {
            let x = match category {
                Category::Nails => 20.0,
                Category::Makeup => 50.0,
                Category::Accessories => 80.0,
            };
            Vec2::new(x, 92.0)
        }
    }

    fn state_with_item(product: Product, y: f32) -> GameState {
        let mut state = GameState::new(Catalog::fallback(), 42);
        push_item(&mut state, product, y);
        state
    }

    fn push_item(state: &mut GameState, product: Product, y: f32) -> u32 {
        let id = state.items.last().map(|i| i.id + 1).unwrap_or(1);
        state.items.push(Item {
            id,
            product: Arc::new(product),
            pos: Vec2::new(50.0, y),
            base: Vec2::new(50.0, y),
            phase: 0.0,
            rotation: 0.0,
            state: ItemState::Falling,
        });
        id
    }

    fn ordinary(category: Category) -> Product {
        Product {
            id: "test_item".to_string(),
            name: "Test Item".to_string(),
            category,
            description: String::new(),
            form_factor: Default::default(),
            color_hex: String::new(),
            image_url: String::new(),
            special: None,
        }
    }

    #[test]
    fn test_correct_sort_scores_and_flies_to_bin() {
        let mut state = state_with_item(ordinary(Category::Nails), 40.0);
        resolve_sort(&mut state, Category::Nails, &TestBins);

        // streak 0, level 1 -> 100 * (1 + 0 + 0.2) = 120
        assert_eq!(state.score, 120);
        assert_eq!(state.streak, 1);
        assert_eq!(state.collected.nails, 1);
        assert_eq!(state.collected_items["test_item"].count, 1);
        assert_eq!(state.bin_fills.nails, BIN_FILL_STEP);
        let item = &state.items[0];
        assert_eq!(
            item.state,
            ItemState::Sorted {
                bin: TestBins.bin_anchor(Category::Nails)
            }
        );
    }

    #[test]
    fn test_wrong_sort_costs_life_and_resets_streak() {
        let mut state = state_with_item(ordinary(Category::Nails), 40.0);
        state.streak = 4;
        state.best_streak = 4;
        resolve_sort(&mut state, Category::Makeup, &TestBins);

        assert_eq!(state.lives, 2);
        assert_eq!(state.streak, 0);
        assert_eq!(state.best_streak, 4);
        assert_eq!(state.score, 0);
        assert_eq!(state.items[0].state, ItemState::Missed);
        assert!(state.collected_items.is_empty());
    }

    #[test]
    fn test_streak_milestone_levels_up_exactly_once() {
        let mut state = state_with_item(ordinary(Category::Nails), 40.0);
        state.streak = 9;
        resolve_sort(&mut state, Category::Nails, &TestBins);

        assert_eq!(state.streak, 10);
        assert_eq!(state.level, 2);
        let level_ups = state
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::LevelUp { .. }))
            .count();
        assert_eq!(level_ups, 1);

        // the next sort must not fire a second level-up
        push_item(&mut state, ordinary(Category::Nails), 40.0);
        resolve_sort(&mut state, Category::Nails, &TestBins);
        assert_eq!(state.level, 2);
        assert!(
            !state
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::LevelUp { .. }))
        );
    }

    #[test]
    fn test_voucher_points_use_pre_sort_streak_and_level() {
        let mut state = state_with_item(Product::voucher(), 40.0);
        state.streak = 4;
        state.level = 2;
        // any category works: the voucher is a wildcard
        resolve_sort(&mut state, Category::Nails, &TestBins);

        // round(500 * (1 + 0.4 + 0.4)) = 900
        assert_eq!(state.score, 900);
        // and the voucher does count toward streak and collection
        assert_eq!(state.streak, 5);
        assert_eq!(state.collected.nails, 1);
        assert_eq!(state.collected_items["voucher_gold"].count, 1);
    }

    #[test]
    fn test_heart_adds_life_capped_and_skips_scoring() {
        let mut state = state_with_item(Product::heart(), 40.0);
        state.lives = 2;
        state.streak = 3;
        resolve_sort(&mut state, Category::Makeup, &TestBins);

        assert_eq!(state.lives, 3);
        assert_eq!(state.streak, 3, "power-ups must not touch the streak");
        assert_eq!(state.score, 0);
        assert!(state.collected_items.is_empty());
        // still flies to the chosen bin
        assert!(matches!(state.items[0].state, ItemState::Sorted { .. }));

        // at the cap, the heart is still correct but grants nothing
        push_item(&mut state, Product::heart(), 40.0);
        resolve_sort(&mut state, Category::Makeup, &TestBins);
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_clock_restarts_slowdown() {
        let mut state = state_with_item(Product::clock(), 40.0);
        resolve_sort(&mut state, Category::Accessories, &TestBins);
        assert_eq!(state.slow_remaining_ms, SLOWDOWN_DURATION_MS);
        assert_eq!(state.streak, 0);
        assert_eq!(state.score, 0);

        // half a timer later, a second clock restarts the countdown
        state.slow_remaining_ms = SLOWDOWN_DURATION_MS / 2.0;
        push_item(&mut state, Product::clock(), 40.0);
        resolve_sort(&mut state, Category::Accessories, &TestBins);
        assert_eq!(state.slow_remaining_ms, SLOWDOWN_DURATION_MS);
    }

    #[test]
    fn test_no_target_is_a_noop() {
        let mut state = GameState::new(Catalog::fallback(), 42);
        resolve_sort(&mut state, Category::Nails, &TestBins);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_stale_lock_falls_back_to_selection() {
        let mut state = state_with_item(ordinary(Category::Nails), 40.0);
        // lock points at an id that no longer exists
        state.locked_target = Some(999);
        resolve_sort(&mut state, Category::Nails, &TestBins);
        assert_eq!(state.score, 120);
    }

    #[test]
    fn test_acts_on_most_urgent_item() {
        let mut state = GameState::new(Catalog::fallback(), 42);
        push_item(&mut state, ordinary(Category::Nails), 20.0);
        let low = push_item(&mut state, ordinary(Category::Makeup), 70.0);
        resolve_sort(&mut state, Category::Makeup, &TestBins);

        // the lower (y=70) item was the target; the sort matched it
        assert_eq!(state.score, 120);
        assert!(matches!(
            state.item(low).unwrap().state,
            ItemState::Sorted { .. }
        ));
        // a new lock was derived for the remaining falling item
        assert_eq!(state.locked_target, Some(1));
    }

    #[test]
    fn test_last_life_finalizes_and_freezes() {
        let mut state = state_with_item(ordinary(Category::Nails), 40.0);
        state.lives = 1;
        state.score = 777;
        resolve_sort(&mut state, Category::Makeup, &TestBins);

        assert_eq!(state.lives, 0);
        assert!(state.is_over());
        let events = state.drain_events();
        let summary = events
            .iter()
            .find_map(|e| match e {
                GameEvent::SessionEnded(s) => Some(s.clone()),
                _ => None,
            })
            .expect("summary emitted");
        assert_eq!(summary.final_score, 777);

        // a queued input arriving after the end must not mutate anything
        push_item(&mut state, ordinary(Category::Nails), 40.0);
        resolve_sort(&mut state, Category::Nails, &TestBins);
        assert_eq!(state.score, 777);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_collection_count_increments_per_sort() {
        let mut state = GameState::new(Catalog::fallback(), 42);
        for _ in 0..3 {
            push_item(&mut state, ordinary(Category::Nails), 40.0);
            resolve_sort(&mut state, Category::Nails, &TestBins);
        }
        assert_eq!(state.collected_items["test_item"].count, 3);
        assert_eq!(state.collected.nails, 3);
    }
}
