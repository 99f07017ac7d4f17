/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.  The 400×400 logical space is scaled to
/// whatever cell grid the terminal offers.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use coin_dodge::compute::{WINDOW_H, WINDOW_W};
use coin_dodge::entities::{GameEvent, GameState, Rect};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BAR: Color = Color::DarkGrey;
const C_PLAYER: Color = Color::Blue;
const C_COIN: Color = Color::Yellow;
const C_WALL: Color = Color::Grey;
const C_ENEMY: Color = Color::Red;
const C_HUD: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.  `last_event` is the most recent signal the
/// simulation raised, shown on the HUD row until superseded.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    last_event: Option<GameEvent>,
    term: (u16, u16),
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let grid = Grid::new(term);

    draw_hud(out, state, last_event, term)?;

    // Same draw order as collision order: bars, player, coins, walls, enemies.
    draw_rect(out, &grid, &state.top_bar, C_BAR)?;
    draw_rect(out, &grid, &state.bottom_bar, C_BAR)?;
    draw_rect(out, &grid, &state.player, C_PLAYER)?;
    for coin in &state.collectibles {
        draw_rect(out, &grid, &coin.rect, C_COIN)?;
    }
    for wall in &state.walls {
        draw_rect(out, &grid, &wall.rect, C_WALL)?;
    }
    for enemy in &state.enemies {
        draw_rect(out, &grid, &enemy.rect, C_ENEMY)?;
    }

    draw_controls_hint(out, term)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, term.1.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Logical-to-cell scaling ───────────────────────────────────────────────────

/// Maps logical window coordinates onto the terminal cell grid.  Row 0 is
/// the HUD and the last row is the controls hint; the play area is the
/// rows in between.
struct Grid {
    cols: u16,
    rows: u16,
    row_offset: u16,
}

impl Grid {
    fn new((term_w, term_h): (u16, u16)) -> Self {
        Grid {
            cols: term_w,
            rows: term_h.saturating_sub(2).max(1),
            row_offset: 1,
        }
    }

    /// Cell span of a logical rectangle, clipped to the window.  Returns
    /// `None` when the rectangle lies entirely outside the logical bounds.
    fn span(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        let x0 = rect.x.clamp(0, WINDOW_W);
        let x1 = (rect.x + rect.w).clamp(0, WINDOW_W);
        let y0 = rect.y.clamp(0, WINDOW_H);
        let y1 = (rect.y + rect.h).clamp(0, WINDOW_H);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }

        let cx0 = (x0 as u32 * self.cols as u32 / WINDOW_W as u32) as u16;
        let cx1 = (x1 as u32 * self.cols as u32 / WINDOW_W as u32) as u16;
        let cy0 = (y0 as u32 * self.rows as u32 / WINDOW_H as u32) as u16;
        let cy1 = (y1 as u32 * self.rows as u32 / WINDOW_H as u32) as u16;

        // A visible rectangle always gets at least one cell
        let cx1 = cx1.max(cx0 + 1).min(self.cols);
        let cy1 = cy1.max(cy0 + 1).min(self.rows);
        Some((cx0, cx1, cy0 + self.row_offset, cy1 + self.row_offset))
    }
}

/// Draw one solid filled rectangle.
fn draw_rect<W: Write>(
    out: &mut W,
    grid: &Grid,
    rect: &Rect,
    color: Color,
) -> std::io::Result<()> {
    let Some((cx0, cx1, cy0, cy1)) = grid.span(rect) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(color))?;
    let run = "█".repeat((cx1 - cx0) as usize);
    for row in cy0..cy1 {
        out.queue(cursor::MoveTo(cx0, row))?;
        out.queue(Print(&run))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn event_message(event: GameEvent) -> (&'static str, Color) {
    match event {
        GameEvent::Won => ("You won, try again?", Color::Green),
        GameEvent::Died => ("Oops, you are dead, try again?", Color::Red),
        GameEvent::Coin => ("Hey, you found a coin!", Color::Yellow),
        GameEvent::WallTouched => ("That's a wall, no touching!", Color::DarkYellow),
    }
}

fn draw_hud<W: Write>(
    out: &mut W,
    state: &GameState,
    last_event: Option<GameEvent>,
    (term_w, _): (u16, u16),
) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!("Coins:{:>4}", state.coins)))?;

    if let Some(event) = last_event {
        let (msg, color) = event_message(event);
        let col = (term_w / 2).saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, 0))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(msg))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, (_, term_h): (u16, u16)) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, term_h.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← ↑ ↓ → / WASD : Move   Q / Esc : Quit"))?;
    Ok(())
}
