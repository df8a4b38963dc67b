/// The frame driver: owns the session state and the RNG, and runs one frame
/// at a time in a fixed order — update, collide, render, progression.

use std::io;

use rand::Rng;

use crate::compute::{new_game, update};
use crate::config::GameConfig;
use crate::entities::{GameState, InputState, OverlayKind};
use crate::progression::check_progression;
use crate::render::{render_frame, sync_overlay, Frontend, OverlayHost, Renderer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Schedule another frame.
    Continue,
    /// Game over: stop scheduling until `restart`.
    Halted,
}

pub struct Game<R: Rng> {
    state: GameState,
    rng: R,
}

impl<R: Rng> Game<R> {
    /// Start a session with the first wave on the field.
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let state = new_game(config, &mut rng);
        Game { state, rng }
    }

    /// Wrap an existing state, e.g. a hand-built scenario.
    pub fn from_state(state: GameState, rng: R) -> Self {
        Game { state, rng }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run one frame.  After game over this does nothing and keeps
    /// returning `Halted`.
    pub fn frame<F: Frontend + ?Sized>(
        &mut self,
        input: &InputState,
        now: u64,
        frontend: &mut F,
    ) -> io::Result<FrameOutcome> {
        if self.state.is_game_over() {
            return Ok(FrameOutcome::Halted);
        }
        let before = self.state.overlay;

        let collided = update(&self.state, input, now, &mut self.rng);
        render_frame(frontend, &collided)?;
        self.state = check_progression(&collided, now, &mut self.rng);

        sync_overlay(frontend, before, self.state.overlay);

        Ok(if self.state.is_game_over() {
            FrameOutcome::Halted
        } else {
            FrameOutcome::Continue
        })
    }

    /// Paint the current state again without advancing it, e.g. after the
    /// terminal was resized while halted.
    pub fn redraw<F: Renderer + ?Sized>(&self, renderer: &mut F) -> io::Result<()> {
        render_frame(renderer, &self.state)
    }

    /// Throw away the session and start again from level 1.
    pub fn restart<H: OverlayHost + ?Sized>(&mut self, overlays: &mut H) {
        overlays.hide(OverlayKind::GameOver);
        overlays.hide(OverlayKind::LevelComplete);

        let config = self.state.config;
        self.state = new_game(config, &mut self.rng);
    }
}
