//! Wave Shooter — a 2D arcade shooter simulation.
//!
//! Core modules:
//! - `entities`: pure data (player, projectiles, enemies, session state)
//! - `compute`: per-entity updates and the per-frame tick
//! - `spawner`, `collision`, `progression`: wave layout, hits, level flow
//! - `game`: frame driver tying the simulation to a renderer
//! - `render`: traits a front-end implements
//! - `config`, `constants`, `error`: tuning and error types

pub mod collision;
pub mod compute;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod game;
pub mod progression;
pub mod render;
pub mod spawner;

pub use config::GameConfig;
pub use error::{AppError, ConfigError};
pub use game::{FrameOutcome, Game};
