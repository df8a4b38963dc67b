/// All game entity types — pure data, no logic.

use crate::config::GameConfig;
use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    Normal,
    /// Tougher variant that occasionally plunges towards the player.
    Dive,
}

/// Enemy motion state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Horizontal sweep.
    Patrol,
    /// Vertical drop towards `baseline_y + descent_distance`.
    Descending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Named panels owned by the front-end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayKind {
    GameOver,
    LevelComplete,
}

/// A panel the front-end should currently be showing, with its data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    GameOver { final_score: u32 },
    LevelComplete { next_level: u32 },
}

impl Overlay {
    pub fn kind(&self) -> OverlayKind {
        match self {
            Overlay::GameOver { .. } => OverlayKind::GameOver,
            Overlay::LevelComplete { .. } => OverlayKind::LevelComplete,
        }
    }
}

/// Player intent for a single frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub moving_left: bool,
    pub moving_right: bool,
    pub fire_pressed: bool,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Upward speed in pixels per tick.
    pub speed: f32,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Clock reading (ms) of the last accepted shot.
    pub last_shot: Option<u64>,
    pub shot_delay_ms: u64,
    pub lives: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub health: u8,
    pub kind: EnemyKind,
    /// +1 moves right, -1 moves left.
    pub direction: f32,
    pub motion: Motion,
    pub descent_distance: f32,
    /// `y` when the current (or last) descent started.
    pub baseline_y: f32,
    pub points: u32,
}

impl Enemy {
    /// A fresh enemy of the given kind, patrolling to the right.
    pub fn new(x: f32, y: f32, kind: EnemyKind, config: &GameConfig) -> Self {
        let (speed, health, points) = match kind {
            EnemyKind::Normal => (NORMAL_ENEMY_SPEED, NORMAL_ENEMY_HEALTH, NORMAL_ENEMY_POINTS),
            EnemyKind::Dive => (DIVE_ENEMY_SPEED, DIVE_ENEMY_HEALTH, DIVE_ENEMY_POINTS),
        };
        Enemy {
            x,
            y,
            width: ENEMY_WIDTH,
            height: ENEMY_HEIGHT,
            speed,
            health,
            kind,
            direction: 1.0,
            motion: Motion::Patrol,
            descent_distance: config.enemy_descent_distance,
            baseline_y: y,
            points,
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    /// Insertion order is update and render order.
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub score: u32,
    pub level: u32,
    /// Enemies spawned for the current level.
    pub quota: u32,
    /// Clock reading (ms) at which the last enemy of the wave fell.
    /// `Some` means the level is complete and an advance is pending.
    pub level_complete_at: Option<u64>,
    pub status: GameStatus,
    /// Panel the front-end should be showing, if any.
    pub overlay: Option<Overlay>,
    pub frame: u64,
    pub config: GameConfig,
}

impl GameState {
    pub fn is_level_complete(&self) -> bool {
        self.level_complete_at.is_some()
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}
