//! Compile-time defaults and fixed entity geometry.
//!
//! Sizes are fixed; everything a player might reasonably want to tune is
//! mirrored in `GameConfig`, which uses these values as its defaults.

// ── Playfield ─────────────────────────────────────────────────────────────────

pub const PLAYFIELD_WIDTH: f32 = 800.0;
pub const PLAYFIELD_HEIGHT: f32 = 600.0;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 50.0;
pub const PLAYER_HEIGHT: f32 = 50.0;
pub const PLAYER_SPEED: f32 = 5.0;
/// Distance of the spawn row from the bottom edge.
pub const PLAYER_SPAWN_OFFSET_Y: f32 = 80.0;
pub const SHOT_DELAY_MS: u64 = 300;
pub const MAX_LIVES: u32 = 3;

// ── Projectiles ───────────────────────────────────────────────────────────────

pub const PROJECTILE_WIDTH: f32 = 5.0;
pub const PROJECTILE_HEIGHT: f32 = 15.0;
pub const PROJECTILE_SPEED: f32 = 7.0;

// ── Enemies ───────────────────────────────────────────────────────────────────

pub const ENEMY_WIDTH: f32 = 40.0;
pub const ENEMY_HEIGHT: f32 = 40.0;
pub const NORMAL_ENEMY_SPEED: f32 = 1.0;
pub const DIVE_ENEMY_SPEED: f32 = 1.5;
pub const NORMAL_ENEMY_HEALTH: u8 = 1;
pub const DIVE_ENEMY_HEALTH: u8 = 2;
pub const NORMAL_ENEMY_POINTS: u32 = 10;
pub const DIVE_ENEMY_POINTS: u32 = 30;
/// Pixels per tick while descending.
pub const ENEMY_DESCENT_RATE: f32 = 2.0;
pub const ENEMY_DESCENT_DISTANCE: f32 = 20.0;

// ── Dive behaviour ────────────────────────────────────────────────────────────

/// Per-tick chance that a dive-variant enemy starts a plunge.
pub const DIVE_PROBABILITY: f64 = 0.005;
/// Chance that a spawned enemy is a dive variant.
pub const DIVE_SPAWN_CHANCE: f64 = 0.2;
pub const DIVE_SPEED: f32 = 3.0;
pub const DIVE_DESCENT_DISTANCE: f32 = 100.0;

// ── Wave grid ─────────────────────────────────────────────────────────────────

pub const WAVE_COLUMNS: usize = 8;
pub const WAVE_PADDING: f32 = 10.0;
pub const WAVE_TOP: f32 = 50.0;

// ── Progression ───────────────────────────────────────────────────────────────

pub const FIRST_LEVEL_QUOTA: u32 = 5;
pub const LEVEL_COMPLETE_SETTLE_MS: u64 = 1000;
pub const LEVEL_ADVANCE_DELAY_MS: u64 = 1500;

// ── Front-end ─────────────────────────────────────────────────────────────────

/// ≈60 FPS, one simulation tick per frame.
pub const FRAME_MS: u64 = 16;
