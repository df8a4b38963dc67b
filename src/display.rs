/// Rendering layer — all terminal I/O lives here.
///
/// `TerminalDisplay` scales the simulation's pixel playfield onto the
/// terminal grid.  No game logic is performed; this module only translates
/// what the simulation hands it into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use wave_shooter::entities::{EnemyKind, Overlay, OverlayKind};
use wave_shooter::render::{Drawable, OverlayHost, Renderer, TextStyle};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::White;
const C_BEST: Color = Color::Yellow;
const C_BANNER: Color = Color::Green;
const C_PLAYER: Color = Color::Blue;
const C_ENEMY_NORMAL: Color = Color::Red;
const C_ENEMY_DIVE: Color = Color::Yellow;
const C_PROJECTILE: Color = Color::Green;
const C_HINT: Color = Color::DarkGrey;

pub struct TerminalDisplay<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    playfield_width: f32,
    playfield_height: f32,
    visible: Vec<Overlay>,
    /// Best final score this session; never written to disk.
    best_score: u32,
    new_best: bool,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, cols: u16, rows: u16, playfield_width: f32, playfield_height: f32) -> Self {
        TerminalDisplay {
            out,
            cols,
            rows,
            playfield_width,
            playfield_height,
            visible: Vec::new(),
            best_score: 0,
            new_best: false,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    // ── Coordinate mapping ────────────────────────────────────────────────────
    //
    // Row 0 is the status bar, rows 1 and h-2 the border, h-1 the key hint.

    fn inner_cols(&self) -> f32 {
        self.cols.saturating_sub(2).max(1) as f32
    }

    fn inner_rows(&self) -> f32 {
        self.rows.saturating_sub(4).max(1) as f32
    }

    fn to_cell(&self, x: f32, y: f32) -> (u16, u16) {
        let col = (x / self.playfield_width * self.inner_cols()).floor().max(0.0) as u16;
        let row = (y / self.playfield_height * self.inner_rows()).floor().max(0.0) as u16;
        let col = (col + 1).min(self.cols.saturating_sub(2));
        let row = (row + 2).min(self.rows.saturating_sub(3));
        (col, row)
    }

    /// Whether pixel row `y` is inside the visible playfield.
    fn on_screen(&self, y: f32, height: f32) -> bool {
        y + height > 0.0 && y < self.playfield_height
    }

    fn span(&self, width: f32) -> u16 {
        ((width / self.playfield_width * self.inner_cols()).round() as u16).max(1)
    }

    fn put(&mut self, col: u16, row: u16, color: Color, text: &str) -> std::io::Result<()> {
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    // ── Border & chrome ───────────────────────────────────────────────────────

    fn draw_border(&mut self) -> std::io::Result<()> {
        let w = self.cols as usize;
        let h = self.rows;

        self.put(0, 1, C_BORDER, &format!("┌{}┐", "─".repeat(w.saturating_sub(2))))?;
        self.put(
            0,
            h.saturating_sub(2),
            C_BORDER,
            &format!("└{}┘", "─".repeat(w.saturating_sub(2))),
        )?;
        for row in 2..h.saturating_sub(2) {
            self.put(0, row, C_BORDER, "│")?;
            self.put(self.cols.saturating_sub(1), row, C_BORDER, "│")?;
        }
        Ok(())
    }

    fn draw_status_bar(&mut self) -> std::io::Result<()> {
        if self.best_score > 0 {
            let best = format!("Best: {:>6}", self.best_score);
            let col = self.cols.saturating_sub(best.chars().count() as u16 + 1);
            self.put(col, 0, C_BEST, &best)?;
        }
        let hint = "← → / A D : Move   SPACE : Shoot   Q : Quit";
        self.put(1, self.rows.saturating_sub(1), C_HINT, hint)
    }

    // ── Overlays ──────────────────────────────────────────────────────────────

    fn draw_overlay(&mut self, overlay: Overlay) -> std::io::Result<()> {
        let mut lines: Vec<(String, Color)> = match overlay {
            Overlay::GameOver { final_score } => {
                let best_line = if self.new_best {
                    format!("★ NEW BEST: {:>6} ★", self.best_score)
                } else {
                    format!("Best Score:  {:>6}", self.best_score)
                };
                vec![
                    ("╔════════════════════╗".to_string(), Color::Red),
                    ("║    GAME  OVER      ║".to_string(), Color::Red),
                    ("╚════════════════════╝".to_string(), Color::Red),
                    (format!("Final Score: {:>6}", final_score), Color::Yellow),
                    (best_line, if self.new_best { Color::Yellow } else { Color::DarkGrey }),
                ]
            }
            Overlay::LevelComplete { next_level } => vec![
                ("╔════════════════════╗".to_string(), Color::Green),
                ("║  LEVEL  COMPLETE!  ║".to_string(), Color::Green),
                ("╚════════════════════╝".to_string(), Color::Green),
                (format!("Get ready for level {next_level}"), Color::White),
            ],
        };
        if overlay.kind() == OverlayKind::GameOver {
            lines.push(("R - Play Again  Q - Quit".to_string(), Color::White));
        }

        let cx = self.cols / 2;
        let start_row = (self.rows / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, (msg, color)) in lines.iter().enumerate() {
            let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
            self.put(col, start_row + i as u16, *color, msg)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalDisplay<W> {
    fn clear_frame(&mut self) -> std::io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.draw_border()?;
        self.draw_status_bar()
    }

    fn draw(&mut self, entity: Drawable<'_>) -> std::io::Result<()> {
        match entity {
            Drawable::Player(p) => {
                // Sprite:
                //   ▲       ← nose
                //  /███\    ← hull, as wide as the ship
                let (col, row) = self.to_cell(p.x, p.y);
                let span = self.span(p.width);
                self.put(col + span / 2, row, C_PLAYER, "▲")?;
                if row + 1 < self.rows.saturating_sub(2) {
                    let hull = if span >= 3 {
                        format!("/{}\\", "█".repeat(span as usize - 2))
                    } else {
                        "█".repeat(span as usize)
                    };
                    self.put(col, row + 1, C_PLAYER, &hull)?;
                }
            }
            Drawable::Projectile(b) => {
                if self.on_screen(b.y, b.height) {
                    let (col, row) = self.to_cell(b.x, b.y);
                    self.put(col, row, C_PROJECTILE, "║")?;
                }
            }
            Drawable::Enemy(e) => {
                if self.on_screen(e.y, e.height) {
                    let (col, row) = self.to_cell(e.x, e.y);
                    let (sprite, color) = match e.kind {
                        EnemyKind::Normal => ("«▼»", C_ENEMY_NORMAL),
                        EnemyKind::Dive if e.health > 1 => ("(◎)", C_ENEMY_DIVE),
                        // Damaged dive enemy.
                        EnemyKind::Dive => ("(○)", C_ENEMY_DIVE),
                    };
                    self.put(col, row, color, sprite)?;
                }
            }
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle) -> std::io::Result<()> {
        let (col, row) = self.to_cell(x, y);
        match style {
            TextStyle::Hud => self.put(col, row, C_HUD, text),
            TextStyle::Banner => {
                let col = col.saturating_sub(text.chars().count() as u16 / 2);
                self.put(col, row, C_BANNER, text)
            }
        }
    }

    fn present(&mut self) -> std::io::Result<()> {
        for overlay in self.visible.clone() {
            self.draw_overlay(overlay)?;
        }
        self.flush()
    }
}

impl<W: Write> OverlayHost for TerminalDisplay<W> {
    fn show(&mut self, overlay: &Overlay) {
        if let Overlay::GameOver { final_score } = *overlay {
            self.new_best = final_score > self.best_score;
            self.best_score = self.best_score.max(final_score);
        }
        self.visible.retain(|o| o.kind() != overlay.kind());
        self.visible.push(*overlay);

        // The loop stops rendering at game over, so paint the panel now.
        let painted = self.draw_overlay(*overlay).and_then(|_| self.flush());
        if let Err(e) = painted {
            log::warn!("Failed to draw {:?} overlay: {e}", overlay.kind());
        }
    }

    fn hide(&mut self, kind: OverlayKind) {
        self.visible.retain(|o| o.kind() != kind);
    }
}
