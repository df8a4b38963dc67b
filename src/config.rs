//! Runtime configuration loaded from a TOML file.
//!
//! Every field defaults to the matching constant in [`crate::constants`], so
//! a file only needs the keys it wants to override:
//!
//! ```toml
//! shot_delay_ms = 200
//! dive_probability = 0.01
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::*;
use crate::error::ConfigError;

/// File looked up in the working directory when no override is given.
pub const DEFAULT_CONFIG_FILE: &str = "wave_shooter.toml";
/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "WAVE_SHOOTER_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Playfield ─────────────────────────────────────────────────────────────
    pub playfield_width: f32,
    pub playfield_height: f32,

    // ── Player ────────────────────────────────────────────────────────────────
    pub player_speed: f32,
    pub shot_delay_ms: u64,
    pub projectile_speed: f32,
    pub starting_lives: u32,

    // ── Enemies ───────────────────────────────────────────────────────────────
    pub enemy_descent_rate: f32,
    pub enemy_descent_distance: f32,
    pub dive_probability: f64,
    pub dive_spawn_chance: f64,
    pub dive_speed: f32,
    pub dive_descent_distance: f32,

    // ── Progression ───────────────────────────────────────────────────────────
    pub level_complete_settle_ms: u64,
    pub level_advance_delay_ms: u64,

    // ── Front-end ─────────────────────────────────────────────────────────────
    pub frame_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            player_speed: PLAYER_SPEED,
            shot_delay_ms: SHOT_DELAY_MS,
            projectile_speed: PROJECTILE_SPEED,
            starting_lives: MAX_LIVES,
            enemy_descent_rate: ENEMY_DESCENT_RATE,
            enemy_descent_distance: ENEMY_DESCENT_DISTANCE,
            dive_probability: DIVE_PROBABILITY,
            dive_spawn_chance: DIVE_SPAWN_CHANCE,
            dive_speed: DIVE_SPEED,
            dive_descent_distance: DIVE_DESCENT_DISTANCE,
            level_complete_settle_ms: LEVEL_COMPLETE_SETTLE_MS,
            level_advance_delay_ms: LEVEL_ADVANCE_DELAY_MS,
            frame_ms: FRAME_MS,
        }
    }
}

impl GameConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }

    /// Resolve the configuration the way the binary does at startup.
    ///
    /// An explicit `WAVE_SHOOTER_CONFIG` path must load cleanly. The default
    /// file is optional: if it is missing or broken the compiled defaults are
    /// used and a log line says why.
    pub fn resolve() -> Result<Self, ConfigError> {
        if let Some(explicit) = std::env::var_os(CONFIG_ENV_VAR) {
            let path = PathBuf::from(explicit);
            let config = Self::load(&path)?;
            log::info!("Loaded config from {}", path.display());
            return Ok(config);
        }

        let path = Path::new(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            log::info!("No {} found; using compiled defaults", path.display());
            return Ok(Self::default());
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                Ok(config)
            }
            Err(e) => {
                log::warn!("{e}; using compiled defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reject values that would break the simulation's invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn probability(field: &'static str, p: f64) -> Result<(), ConfigError> {
            if p.is_finite() && (0.0..=1.0).contains(&p) {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: format!("{p} is not a probability in [0, 1]"),
                })
            }
        }

        for (field, value) in [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("player_speed", self.player_speed),
            ("projectile_speed", self.projectile_speed),
            ("enemy_descent_rate", self.enemy_descent_rate),
            ("enemy_descent_distance", self.enemy_descent_distance),
            ("dive_speed", self.dive_speed),
            ("dive_descent_distance", self.dive_descent_distance),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{value} is not a finite number"),
                });
            }
        }

        probability("dive_probability", self.dive_probability)?;
        probability("dive_spawn_chance", self.dive_spawn_chance)?;

        if !(1..=MAX_LIVES).contains(&self.starting_lives) {
            return Err(ConfigError::Invalid {
                field: "starting_lives",
                reason: format!("must be between 1 and {MAX_LIVES}"),
            });
        }

        let grid_width = WAVE_COLUMNS as f32 * (ENEMY_WIDTH + WAVE_PADDING);
        if self.playfield_width < grid_width || self.playfield_width < PLAYER_WIDTH {
            return Err(ConfigError::Invalid {
                field: "playfield_width",
                reason: format!("must be at least {grid_width} to fit a wave"),
            });
        }
        // The spawn box must sit clear of the first wave row.
        let min_height = PLAYER_SPAWN_OFFSET_Y + WAVE_TOP + ENEMY_HEIGHT;
        if self.playfield_height < min_height {
            return Err(ConfigError::Invalid {
                field: "playfield_height",
                reason: format!("must be at least {min_height}"),
            });
        }

        for (field, value) in [
            ("player_speed", self.player_speed),
            ("projectile_speed", self.projectile_speed),
            ("enemy_descent_rate", self.enemy_descent_rate),
            ("enemy_descent_distance", self.enemy_descent_distance),
            ("dive_speed", self.dive_speed),
            ("dive_descent_distance", self.dive_descent_distance),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be positive".to_string(),
                });
            }
        }

        if self.level_advance_delay_ms < self.level_complete_settle_ms {
            return Err(ConfigError::Invalid {
                field: "level_advance_delay_ms",
                reason: "must not be shorter than level_complete_settle_ms".to_string(),
            });
        }
        if self.frame_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "frame_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
