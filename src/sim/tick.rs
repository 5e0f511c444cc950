//! Kinematics and lifecycle updater
//!
//! Runs once per animation frame with the elapsed delta. All motion scales
//! by the delta, so the game plays identically at any refresh rate. Each
//! tick builds a fresh next-state item list and swaps it in at the end;
//! no update observes a partially-advanced sibling.

use glam::Vec2;

use super::state::{GameEvent, GamePhase, GameState, ItemState};
use super::{difficulty, spawn, target};
use crate::consts::*;
use crate::frame_factor;

/// Advance the session by one frame
pub fn tick(state: &mut GameState, dt_ms: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }
    let dt_ms = dt_ms.clamp(0.0, MAX_TICK_MS);
    state.time_ms += dt_ms as f64;

    // expires-at countdown: re-activation overwrites this, so there is no
    // timer to cancel and nothing to race
    if state.slow_remaining_ms > 0.0 {
        state.slow_remaining_ms = (state.slow_remaining_ms - dt_ms).max(0.0);
    }

    let ff = frame_factor(dt_ms);
    let speed_mult = if state.streak > STREAK_SPEED_BONUS_THRESHOLD {
        1.0 + STREAK_SPEED_BONUS
    } else {
        1.0
    };
    let slow_mult = if state.slowdown_active() {
        SLOWDOWN_FACTOR
    } else {
        1.0
    };
    let fall_step = difficulty::fall_speed(state.level) * speed_mult * slow_mult * ff;
    let wobble = ((state.time_ms / MISSED_WOBBLE_PERIOD_MS).sin() as f32) * MISSED_WOBBLE;

    let locked = state.locked_target;
    let mut floor_crossed = false;
    let mut lost_lock = false;
    let mut lost_at: Vec<Vec2> = Vec::new();

    let current = std::mem::take(&mut state.items);
    let mut next = Vec::with_capacity(current.len());
    for mut item in current {
        match item.state {
            ItemState::Falling => {
                item.base.y += fall_step;
                if item.base.y > FLOOR_Y {
                    // reached the floor: the item is lost
                    floor_crossed = true;
                    lost_at.push(Vec2::new(item.pos.x, 90.0));
                    if locked == Some(item.id) {
                        lost_lock = true;
                    }
                    continue;
                }
                item.pos.y = item.base.y;
                item.pos.x = item.base.x
                    + SWAY_AMPLITUDE * (item.base.y / SWAY_WAVELENGTH + item.phase).sin();
                next.push(item);
            }
            ItemState::Sorted { bin } => {
                let delta = bin - item.pos;
                let dist = delta.length();
                if dist < BIN_ARRIVE_DIST {
                    // arrived; arrival is implicit, not a rendered state
                    continue;
                }
                let step = (FLY_SPEED * ff).min(dist);
                item.pos += delta / dist * step;
                item.rotation += FLY_SPIN * ff;
                next.push(item);
            }
            ItemState::Missed => {
                if item.pos.y > MISSED_DESPAWN_Y {
                    continue;
                }
                item.pos.y += MISSED_FALL_SPEED * ff;
                item.pos.x += wobble;
                item.rotation -= MISSED_SPIN * ff;
                next.push(item);
            }
        }
    }
    state.items = next;

    if lost_lock {
        state.locked_target = None;
    }
    for at in lost_at {
        state.push_event(GameEvent::ItemLost { at });
    }

    spawn::maybe_spawn(state, dt_ms);

    // several items hitting the floor within one tick cost a single life
    if floor_crossed {
        state.lose_life();
    }

    target::revalidate_lock(state);
}
