/// Wave layout: a centred grid of enemies, row by row.

use rand::Rng;

use crate::config::GameConfig;
use crate::constants::*;
use crate::entities::{Enemy, EnemyKind};

/// Width and height of one grid cell.
const CELL: f32 = ENEMY_WIDTH + WAVE_PADDING;

/// Top-left corner of grid slot `index`.
pub fn slot_position(index: usize, playfield_width: f32) -> (f32, f32) {
    let start_x = (playfield_width - WAVE_COLUMNS as f32 * CELL) / 2.0;
    let row = index / WAVE_COLUMNS;
    let col = index % WAVE_COLUMNS;
    (start_x + col as f32 * CELL, WAVE_TOP + row as f32 * CELL)
}

/// Append `quota` enemies to `enemies` in an 8-column grid.
///
/// Each enemy is independently a dive variant with probability
/// `config.dive_spawn_chance`.  Existing enemies are left in place; callers
/// clear the collection first when starting a wave.
pub fn spawn_wave(enemies: &mut Vec<Enemy>, quota: u32, config: &GameConfig, rng: &mut impl Rng) {
    let quota = quota as usize;
    enemies.reserve(quota);
    for index in 0..quota {
        let (x, y) = slot_position(index, config.playfield_width);
        let kind = if rng.gen_bool(config.dive_spawn_chance) {
            EnemyKind::Dive
        } else {
            EnemyKind::Normal
        };
        enemies.push(Enemy::new(x, y, kind, config));
    }
    log::debug!(
        "Spawned wave of {} ({} rows)",
        quota,
        quota.div_ceil(WAVE_COLUMNS)
    );
}
