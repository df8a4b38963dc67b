/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current state
/// (and, where needed, an RNG handle and a clock reading in milliseconds)
/// and returns a brand-new value.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::collision::resolve_collisions;
use crate::config::GameConfig;
use crate::constants::*;
use crate::entities::{
    Enemy, EnemyKind, GameState, GameStatus, InputState, Motion, Player, Projectile,
};
use crate::progression::{check_progression, quota_for_level};
use crate::spawner::spawn_wave;

// ── Constructors ─────────────────────────────────────────────────────────────

/// The player at the spawn point with a full set of lives.
pub fn spawn_player(config: &GameConfig) -> Player {
    let mut player = Player {
        x: 0.0,
        y: 0.0,
        width: PLAYER_WIDTH,
        height: PLAYER_HEIGHT,
        speed: config.player_speed,
        last_shot: None,
        shot_delay_ms: config.shot_delay_ms,
        lives: config.starting_lives,
    };
    reset_player_position(&mut player, config);
    player
}

/// Move the player back to the spawn point; lives and cooldown are kept.
pub fn reset_player_position(player: &mut Player, config: &GameConfig) {
    player.x = config.playfield_width / 2.0 - player.width / 2.0;
    player.y = config.playfield_height - PLAYER_SPAWN_OFFSET_Y;
}

/// Session state for level 1 with no enemies yet.
pub fn init_state(config: GameConfig) -> GameState {
    GameState {
        player: spawn_player(&config),
        projectiles: Vec::new(),
        enemies: Vec::new(),
        score: 0,
        level: 1,
        quota: quota_for_level(1),
        level_complete_at: None,
        status: GameStatus::Playing,
        overlay: None,
        frame: 0,
        config,
    }
}

/// A fresh session with the first wave already spawned.
///
/// Used both for the initial start and for restarting after game over; no
/// state from the previous session survives.
pub fn new_game(config: GameConfig, rng: &mut impl Rng) -> GameState {
    let mut state = init_state(config);
    spawn_wave(&mut state.enemies, state.quota, &state.config, rng);
    log::info!("New game: level 1, {} enemies", state.enemies.len());
    state
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Apply movement intent.  Left is applied before right, so with both flags
/// set the right-hand clamp has the last word.
pub fn update_player(player: &Player, input: &InputState, playfield_width: f32) -> Player {
    let mut x = player.x;
    if input.moving_left {
        x = (x - player.speed).max(0.0);
    }
    if input.moving_right {
        x = (x + player.speed).min(playfield_width - player.width);
    }
    Player { x, ..player.clone() }
}

/// Fire if the cooldown has expired.
///
/// Returns the player (with `last_shot` updated when a shot was taken) and
/// the new projectile, if any.  Requests inside the cooldown are dropped.
pub fn player_shoot(
    player: &Player,
    now: u64,
    projectile_speed: f32,
) -> (Player, Option<Projectile>) {
    let ready = match player.last_shot {
        None => true,
        Some(last) => now.saturating_sub(last) > player.shot_delay_ms,
    };
    if !ready {
        return (player.clone(), None);
    }
    let projectile = Projectile {
        x: player.x + player.width / 2.0 - PROJECTILE_WIDTH / 2.0,
        y: player.y,
        width: PROJECTILE_WIDTH,
        height: PROJECTILE_HEIGHT,
        speed: projectile_speed,
    };
    let player = Player {
        last_shot: Some(now),
        ..player.clone()
    };
    (player, Some(projectile))
}

// ── Projectiles ──────────────────────────────────────────────────────────────

/// Move every projectile up and drop the ones that left the top edge.
pub fn update_projectiles(projectiles: &[Projectile]) -> Vec<Projectile> {
    projectiles
        .iter()
        .map(|p| Projectile {
            y: p.y - p.speed,
            ..p.clone()
        })
        .filter(|p| p.y + p.height >= 0.0)
        .collect()
}

// ── Enemies ──────────────────────────────────────────────────────────────────

fn at_leading_edge(enemy: &Enemy, playfield_width: f32) -> bool {
    (enemy.direction < 0.0 && enemy.x <= 0.0)
        || (enemy.direction > 0.0 && enemy.x + enemy.width >= playfield_width)
}

/// Advance one enemy by a tick: patrol/descend, then roll for a dive.
pub fn update_enemy(enemy: &Enemy, config: &GameConfig, rng: &mut impl Rng) -> Enemy {
    let mut e = enemy.clone();

    match e.motion {
        Motion::Patrol => {
            if at_leading_edge(&e, config.playfield_width) {
                // Already against the wall it is heading into: drop without moving.
                e.motion = Motion::Descending;
            } else {
                e.x += e.speed * e.direction;
                if e.x <= 0.0 || e.x + e.width >= config.playfield_width {
                    e.motion = Motion::Descending;
                }
            }
        }
        Motion::Descending => {
            e.y += config.enemy_descent_rate;
            if e.y >= e.baseline_y + e.descent_distance {
                e.motion = Motion::Patrol;
                e.baseline_y = e.y;
                e.direction = -e.direction;
            }
        }
    }

    if e.kind == EnemyKind::Dive && rng.gen_bool(config.dive_probability) {
        e = dive(&e, config, rng);
    }
    e
}

/// Start a long plunge in a random direction.
pub fn dive(enemy: &Enemy, config: &GameConfig, rng: &mut impl Rng) -> Enemy {
    let direction = if rng.gen_bool(0.5) { -1.0 } else { 1.0 };
    Enemy {
        speed: config.dive_speed,
        direction,
        motion: Motion::Descending,
        descent_distance: config.dive_descent_distance,
        ..enemy.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Entity update phase followed by collision resolution.
///
/// A frozen (game over) state is returned unchanged.
pub fn update(
    state: &GameState,
    input: &InputState,
    now: u64,
    rng: &mut impl Rng,
) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }
    let config = state.config;

    // ── 1. Fire ──────────────────────────────────────────────────────────────
    let mut projectiles = state.projectiles.clone();
    let mut player = state.player.clone();
    if input.fire_pressed {
        let (shooter, shot) = player_shoot(&player, now, config.projectile_speed);
        player = shooter;
        projectiles.extend(shot);
    }

    // ── 2. Move player ───────────────────────────────────────────────────────
    let player = update_player(&player, input, config.playfield_width);

    // ── 3. Move projectiles ──────────────────────────────────────────────────
    let projectiles = update_projectiles(&projectiles);

    // ── 4. Move enemies ──────────────────────────────────────────────────────
    let enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .map(|e| update_enemy(e, &config, rng))
        .collect();

    let moved = GameState {
        player,
        projectiles,
        enemies,
        frame: state.frame + 1,
        ..state.clone()
    };

    // ── 5. Collisions ────────────────────────────────────────────────────────
    resolve_collisions(&moved, now)
}

/// One full headless frame: update, collide, then progression.
///
/// `Game::frame` runs the same steps with rendering between collision and
/// progression.
pub fn tick(state: &GameState, input: &InputState, now: u64, rng: &mut impl Rng) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }
    let state = update(state, input, now, rng);
    check_progression(&state, now, rng)
}
