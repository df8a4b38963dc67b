/// Level progression: quotas and the delayed advance after a wave is cleared.
///
/// The advance is a one-shot transition keyed off `level_complete_at`.  It is
/// checked once per tick, after rendering, and clearing the timestamp is part
/// of the advance itself, so each cleared wave advances exactly once.

use rand::Rng;

use crate::compute::reset_player_position;
use crate::constants::FIRST_LEVEL_QUOTA;
use crate::entities::{GameState, GameStatus, Overlay};
use crate::spawner::spawn_wave;

/// Enemies in the wave for `level`: 5 on level 1, then `5 + 2 * level`.
pub fn quota_for_level(level: u32) -> u32 {
    if level <= 1 {
        FIRST_LEVEL_QUOTA
    } else {
        FIRST_LEVEL_QUOTA + level * 2
    }
}

/// Show the level-complete panel once the settle delay has passed, and start
/// the next level once the advance delay has passed.
pub fn check_progression(state: &GameState, now: u64, rng: &mut impl Rng) -> GameState {
    let Some(completed_at) = state.level_complete_at else {
        return state.clone();
    };
    if state.status == GameStatus::GameOver {
        return state.clone();
    }

    let elapsed = now.saturating_sub(completed_at);
    if elapsed >= state.config.level_advance_delay_ms {
        return advance_level(state, rng);
    }

    let mut next = state.clone();
    if elapsed > state.config.level_complete_settle_ms && next.overlay.is_none() {
        next.overlay = Some(Overlay::LevelComplete {
            next_level: state.level + 1,
        });
    }
    next
}

/// Move on to the next level: new quota, player back at spawn, fresh wave.
pub fn advance_level(state: &GameState, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    next.level += 1;
    next.quota = quota_for_level(next.level);
    reset_player_position(&mut next.player, &next.config);
    next.enemies.clear();
    spawn_wave(&mut next.enemies, next.quota, &next.config, rng);
    next.level_complete_at = None;
    if matches!(next.overlay, Some(Overlay::LevelComplete { .. })) {
        next.overlay = None;
    }
    log::info!("Level {} started with {} enemies", next.level, next.quota);
    next
}
