/// Collision resolution: projectiles against enemies, then enemies against
/// the player.  At most one hit per projectile and one player collision are
/// processed per tick.

use crate::compute::reset_player_position;
use crate::entities::{Enemy, GameState, GameStatus, Overlay, Player, Projectile};

/// Axis-aligned box in playfield pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    /// Strict overlap: boxes that only share an edge do not collide.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

impl From<&Player> for Aabb {
    fn from(p: &Player) -> Self {
        Aabb { x: p.x, y: p.y, width: p.width, height: p.height }
    }
}

impl From<&Projectile> for Aabb {
    fn from(p: &Projectile) -> Self {
        Aabb { x: p.x, y: p.y, width: p.width, height: p.height }
    }
}

impl From<&Enemy> for Aabb {
    fn from(e: &Enemy) -> Self {
        Aabb { x: e.x, y: e.y, width: e.width, height: e.height }
    }
}

/// Run both collision phases and return the resulting state.
///
/// `now` stamps the level-complete moment when the last enemy goes.
pub fn resolve_collisions(state: &GameState, now: u64) -> GameState {
    let mut next = state.clone();
    resolve_projectile_hits(&mut next, now);
    resolve_player_collision(&mut next, now);
    next
}

/// Phase 1.  Both collections are walked back to front so removals never
/// disturb the indices still to be visited.
fn resolve_projectile_hits(state: &mut GameState, now: u64) {
    for pi in (0..state.projectiles.len()).rev() {
        let shot = Aabb::from(&state.projectiles[pi]);

        for ei in (0..state.enemies.len()).rev() {
            if !shot.overlaps(&Aabb::from(&state.enemies[ei])) {
                continue;
            }

            state.projectiles.remove(pi);
            let enemy = &mut state.enemies[ei];
            enemy.health = enemy.health.saturating_sub(1);

            if enemy.health == 0 {
                let killed = state.enemies.remove(ei);
                state.score += killed.points;
                log::debug!(
                    "{:?} enemy destroyed (+{}), score {}",
                    killed.kind,
                    killed.points,
                    state.score
                );
                mark_level_complete_if_cleared(state, now);
            }
            break;
        }
    }
}

/// Phase 2.  Only the first enemy touching the player counts this tick.
fn resolve_player_collision(state: &mut GameState, now: u64) {
    let player_box = Aabb::from(&state.player);
    let Some(index) = state
        .enemies
        .iter()
        .position(|e| player_box.overlaps(&Aabb::from(e)))
    else {
        return;
    };

    state.player.lives = state.player.lives.saturating_sub(1);
    reset_player_position(&mut state.player, &state.config);
    state.enemies.remove(index);
    log::debug!("Player hit, {} lives left", state.player.lives);

    if state.player.lives == 0 {
        state.status = GameStatus::GameOver;
        state.overlay = Some(Overlay::GameOver {
            final_score: state.score,
        });
        log::info!("Game over at level {} with score {}", state.level, state.score);
    } else {
        mark_level_complete_if_cleared(state, now);
    }
}

fn mark_level_complete_if_cleared(state: &mut GameState, now: u64) {
    if state.enemies.is_empty() && state.level_complete_at.is_none() {
        state.level_complete_at = Some(now);
        log::info!("Level {} cleared", state.level);
    }
}
