/// Rendering seam between the simulation and a concrete front-end.
///
/// The simulation never paints anything itself; it hands entities and HUD
/// text to a [`Renderer`] and tells an [`OverlayHost`] which named panel
/// should be visible.

use std::io;

use crate::entities::{Enemy, GameState, Overlay, OverlayKind, Player, Projectile};

/// Something the renderer knows how to paint.
#[derive(Clone, Copy, Debug)]
pub enum Drawable<'a> {
    Player(&'a Player),
    Projectile(&'a Projectile),
    Enemy(&'a Enemy),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    /// Small left-aligned status line.
    Hud,
    /// Large message centred on `x`.
    Banner,
}

pub trait Renderer {
    fn clear_frame(&mut self) -> io::Result<()>;
    fn draw(&mut self, entity: Drawable<'_>) -> io::Result<()>;
    /// `x`/`y` are playfield pixels.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle) -> io::Result<()>;
    /// Flush the finished frame.  Default is a no-op for renderers that draw eagerly.
    fn present(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub trait OverlayHost {
    fn show(&mut self, overlay: &Overlay);
    fn hide(&mut self, kind: OverlayKind);
}

/// A front-end that both paints frames and owns the overlay panels.
pub trait Frontend: Renderer + OverlayHost {}

impl<T: Renderer + OverlayHost + ?Sized> Frontend for T {}

/// Paint one frame: player, projectiles, enemies, then the HUD.
pub fn render_frame<R: Renderer + ?Sized>(out: &mut R, state: &GameState) -> io::Result<()> {
    out.clear_frame()?;

    out.draw(Drawable::Player(&state.player))?;
    for projectile in &state.projectiles {
        out.draw(Drawable::Projectile(projectile))?;
    }
    for enemy in &state.enemies {
        out.draw(Drawable::Enemy(enemy))?;
    }

    out.draw_text(&format!("Score: {}", state.score), 10.0, 30.0, TextStyle::Hud)?;
    out.draw_text(&format!("Lives: {}", state.player.lives), 10.0, 60.0, TextStyle::Hud)?;
    out.draw_text(&format!("Level: {}", state.level), 10.0, 90.0, TextStyle::Hud)?;

    if state.is_level_complete() {
        out.draw_text(
            "Level Complete!",
            state.config.playfield_width / 2.0,
            state.config.playfield_height / 2.0,
            TextStyle::Banner,
        )?;
    }

    out.present()
}

/// Bring the host in line with the overlay the state wants visible.
pub fn sync_overlay<H: OverlayHost + ?Sized>(
    host: &mut H,
    before: Option<Overlay>,
    after: Option<Overlay>,
) {
    if before == after {
        return;
    }
    if let Some(old) = before {
        host.hide(old.kind());
    }
    if let Some(new) = after {
        host.show(&new);
    }
}
