//! Target selection
//!
//! Input always acts on the most urgent falling item: the one closest to
//! the floor. The lock is an id, never a reference, and is revalidated
//! against the arena on every read.

use super::state::{GameState, Item};

/// Pick the falling item with the greatest vertical position. Ties keep
/// the earliest-spawned item, so selection is deterministic.
pub fn select_target(items: &[Item]) -> Option<u32> {
    let mut best: Option<&Item> = None;
    for item in items.iter().filter(|i| i.is_falling()) {
        match best {
            Some(leader) if item.pos.y <= leader.pos.y => {}
            _ => best = Some(item),
        }
    }
    best.map(|i| i.id)
}

/// Re-derive the lock when it no longer names a falling item
pub(crate) fn revalidate_lock(state: &mut GameState) {
    let stale = match state.locked_target {
        Some(id) => !state.item(id).is_some_and(|i| i.is_falling()),
        None => true,
    };
    if stale {
        state.locked_target = select_target(&state.items);
    }
}
