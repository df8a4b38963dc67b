mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use wave_shooter::entities::InputState;
use wave_shooter::{AppError, FrameOutcome, Game, GameConfig};

use display::TerminalDisplay;

/// Frames a key stays held after its last press or repeat event.  Terminals
/// without release events only resend `Press` at the OS repeat rate.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

/// Collapse the held-key map into this frame's intent flags.
fn input_state(key_frame: &HashMap<KeyCode, u64>, frame: u64) -> InputState {
    let held = |keys: &[KeyCode]| keys.iter().any(|k| is_held(key_frame, k, frame));
    InputState {
        moving_left: held(&[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]),
        moving_right: held(&[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]),
        fire_pressed: held(&[KeyCode::Char(' ')]),
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw mode on the alternate screen, so log lines go to a
/// file instead of stderr.  `RUST_LOG` picks the level (default `info`).
fn init_logging() {
    let path = std::env::temp_dir().join("wave_shooter.log");
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match std::fs::File::create(&path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    let _ = builder.try_init();
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// `key_frame` records the frame of the last press or repeat for each key;
/// keys seen within `HOLD_WINDOW` frames count as held and become this
/// frame's `InputState`.  Release events, where the terminal sends them,
/// drop a key at once.  Fire is just an intent: the simulation applies the
/// shot cooldown.
fn game_loop<W: Write>(
    display: &mut TerminalDisplay<W>,
    game: &mut Game<impl rand::Rng>,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let frame_time = Duration::from_millis(game.state().config.frame_ms);
    let clock = Instant::now();

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut halted = false;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let (code, kind, modifiers) = match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => (code, kind, modifiers),
                Event::Resize(cols, rows) => {
                    display.resize(cols, rows);
                    // No frames run while halted; repaint the final frame
                    // and the game-over panel at the new size.
                    if halted {
                        game.redraw(display)?;
                    }
                    continue;
                }
                _ => continue,
            };
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') if halted => {
                            log::info!("Restarting");
                            game.restart(display);
                            key_frame.clear();
                            halted = false;
                        }
                        _ => {}
                    }
                }
                // Repeat: refresh timestamp so key stays "held"
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        if !halted {
            let input = input_state(&key_frame, frame);
            let now = clock.elapsed().as_millis() as u64;
            halted = game.frame(&input, now, display)? == FrameOutcome::Halted;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), AppError> {
    init_logging();
    let config = GameConfig::resolve()?;
    log::info!(
        "Wave Shooter starting ({}x{} playfield)",
        config.playfield_width,
        config.playfield_height
    );

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = terminal::size().and_then(|(cols, rows)| {
        let mut display = TerminalDisplay::new(
            &mut out,
            cols,
            rows,
            config.playfield_width,
            config.playfield_height,
        );
        let mut game = Game::new(config, thread_rng());
        game_loop(&mut display, &mut game, &rx)
    });

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("Terminal error: {e}");
    }
    Ok(result?)
}
