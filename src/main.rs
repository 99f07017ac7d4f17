mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
    ExecutableCommand,
};
use rand::thread_rng;

use coin_dodge::compute::{
    init_state, move_player_down, move_player_left, move_player_right, move_player_up, tick,
};
use coin_dodge::entities::{GameEvent, GameState, GameStatus};

const FRAME: Duration = Duration::from_millis(16); // ≈60 ticks/sec

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Fixed-timestep loop: drain pending input, advance the simulation one
/// tick, render, then sleep out the frame remainder.  Runs until the state
/// machine flips to `Stopped` on a quit gesture.
///
/// Every directional key event applies one move immediately and
/// unconditionally; there is no per-frame movement throttle.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut term = terminal::size()?;
    let mut last_event: Option<GameEvent> = None;

    while state.status == GameStatus::Running {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) if kind != KeyEventKind::Release => match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        state.status = GameStatus::Stopped;
                    }
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        state.status = GameStatus::Stopped;
                    }
                    KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                        *state = move_player_left(state);
                    }
                    KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                        *state = move_player_right(state);
                    }
                    KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                        *state = move_player_up(state);
                    }
                    KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                        *state = move_player_down(state);
                    }
                    _ => {}
                },
                Event::Resize(w, h) => term = (w, h),
                _ => {}
            }
        }
        if state.status == GameStatus::Stopped {
            break;
        }

        *state = tick(state, &mut rng);
        if let Some(&event) = state.events.last() {
            last_event = Some(event);
        }

        display::render(out, state, last_event, term)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    // Any failure here aborts startup with a non-zero exit; everything
    // after this point is a game event, never an error.
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });

    let mut state = init_state(&mut thread_rng());
    let result = game_loop(&mut out, &mut state, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
