/// Rendering layer: all terminal output lives here.
///
/// Each function receives a mutable writer and an immutable view of what to
/// draw.  No game logic is performed; this module only maps field pixels
/// onto terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use duel_minigames::assets::Assets;
use duel_minigames::consts::{HEIGHT, WIDTH};
use duel_minigames::entities::{self, Outcome, Side};
use duel_minigames::geometry::Rect;
use duel_minigames::render::{DrawCmd, FontSize, Frame};

const C_HINT: Color = Color::DarkGrey;

fn term_color(color: entities::Color) -> Color {
    match color {
        entities::Color::White => Color::White,
        entities::Color::Red => Color::Red,
        entities::Color::Blue => Color::Blue,
        entities::Color::Green => Color::Green,
        entities::Color::Yellow => Color::Yellow,
        entities::Color::Orange => Color::DarkYellow,
    }
}

// ── Field → cell mapping ──────────────────────────────────────────────────────

/// Terminal grid the field is scaled onto.
#[derive(Clone, Copy, Debug)]
pub struct Grid {
    pub cols: u16,
    pub rows: u16,
}

impl Grid {
    pub fn current() -> std::io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self { cols: cols.max(1), rows: rows.max(1) })
    }

    fn col(&self, x: f32) -> i32 {
        (x / WIDTH * self.cols as f32).floor() as i32
    }

    fn row(&self, y: f32) -> i32 {
        (y / HEIGHT * self.rows as f32).floor() as i32
    }

    /// Cell span covered by `rect`, at least one cell each way, clipped.
    fn cells(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        let c0 = self.col(rect.left()).max(0);
        let r0 = self.row(rect.top()).max(0);
        let c1 = self.col(rect.right()).max(c0 + 1).min(self.cols as i32);
        let r1 = self.row(rect.bottom()).max(r0 + 1).min(self.rows as i32);
        if c0 >= c1 || r0 >= r1 {
            return None;
        }
        Some((c0 as u16, r0 as u16, c1 as u16, r1 as u16))
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, frame: &Frame, assets: &Assets) -> std::io::Result<()> {
    let grid = Grid::current()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for cmd in &frame.cmds {
        match cmd {
            DrawCmd::Fill { rect, color } => draw_fill(out, &grid, rect, *color)?,
            DrawCmd::Outline { rect, color } => draw_outline(out, &grid, rect, *color)?,
            DrawCmd::Sprite { id, pos } => {
                if let Some(sprite) = assets.get(*id) {
                    let (c, r) = (grid.col(pos.x), grid.row(pos.y));
                    draw_lines(out, &grid, c, r, &sprite.art, Color::White)?;
                }
            }
            DrawCmd::Text { text, size, color, pos } => {
                draw_text(out, &grid, text, *size, *color, (pos.x, pos.y))?
            }
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, grid.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Primitives ────────────────────────────────────────────────────────────────

fn draw_fill<W: Write>(out: &mut W, grid: &Grid, rect: &Rect, color: entities::Color) -> std::io::Result<()> {
    let Some((c0, r0, c1, r1)) = grid.cells(rect) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(term_color(color)))?;
    let run = "█".repeat((c1 - c0) as usize);
    for row in r0..r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(&run))?;
    }
    Ok(())
}

fn draw_outline<W: Write>(out: &mut W, grid: &Grid, rect: &Rect, color: entities::Color) -> std::io::Result<()> {
    let Some((c0, r0, c1, r1)) = grid.cells(rect) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(term_color(color)))?;
    for row in r0..r1 {
        for col in [c0, c1 - 1] {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print("│"))?;
        }
    }
    let bar = "─".repeat((c1 - c0) as usize);
    for row in [r0, r1 - 1] {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(&bar))?;
    }
    Ok(())
}

/// Print rows of text starting at a cell, clipping anything off-screen.
fn draw_lines<W: Write>(
    out: &mut W,
    grid: &Grid,
    col: i32,
    row: i32,
    lines: &[String],
    color: Color,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(color))?;
    for (i, line) in lines.iter().enumerate() {
        let r = row + i as i32;
        if r < 0 || r >= grid.rows as i32 {
            continue;
        }
        let skip = (-col).max(0) as usize;
        let room = (grid.cols as i32 - col.max(0)).max(0) as usize;
        let visible: String = line.chars().skip(skip).take(room).collect();
        if visible.is_empty() {
            continue;
        }
        out.queue(cursor::MoveTo(col.max(0) as u16, r as u16))?;
        out.queue(Print(visible))?;
    }
    Ok(())
}

fn draw_text<W: Write>(
    out: &mut W,
    grid: &Grid,
    text: &str,
    size: FontSize,
    color: entities::Color,
    (x, y): (f32, f32),
) -> std::io::Result<()> {
    // Terminals have one font size; big text is spaced out instead.
    let shown = match size {
        FontSize::Normal => text.to_string(),
        FontSize::Big => text.chars().map(|c| c.to_string()).collect::<Vec<_>>().join(" "),
    };
    let width = shown.chars().count() as i32;
    let (col, row) = (grid.col(x) - width / 2, grid.row(y));
    draw_lines(out, grid, col, row, &[shown], term_color(color))
}

// ── Menus ─────────────────────────────────────────────────────────────────────

fn centered<W: Write>(out: &mut W, text: &str, row: u16, color: Color) -> std::io::Result<()> {
    let (width, _) = terminal::size()?;
    out.queue(cursor::MoveTo(
        (width / 2).saturating_sub(text.chars().count() as u16 / 2),
        row,
    ))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

/// Title page, or the instructions sub-page.
pub fn draw_title<W: Write>(out: &mut W, instructions: bool, pulse: bool) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let (_, height) = terminal::size()?;
    let cy = height / 2;

    if instructions {
        centered(out, "Instructions", cy.saturating_sub(6), Color::White)?;
        centered(out, "Player 1: W A S D to move, SPACE to fire", cy.saturating_sub(2), Color::Blue)?;
        centered(out, "Player 2: arrow keys to move, ENTER to fire", cy, Color::Red)?;
        centered(out, "Press ENTER to go back", cy + 4, Color::White)?;
    } else {
        centered(out, "★  PLAYER  DUEL  ★", cy.saturating_sub(6), Color::Cyan)?;
        let start = if pulse { "> Press ENTER to start <" } else { "  Press ENTER to start  " };
        centered(out, start, cy.saturating_sub(1), Color::White)?;
        centered(out, "Press I for instructions", cy + 2, Color::Yellow)?;
        centered(out, "Press ESC to quit", cy + 4, Color::Red)?;
        centered(out, "Five minigames. Best score wins.", cy + 7, C_HINT)?;
    }

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

pub fn draw_game_over<W: Write>(out: &mut W, outcome: Outcome, scores: [u32; 2]) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let (_, height) = terminal::size()?;
    let cy = height / 2;

    let (banner, color) = match outcome {
        Outcome::Draw => ("It's a draw!".to_string(), Color::White),
        Outcome::Won(side) => (
            format!("Player {} wins!", side.index() + 1),
            if side == Side::One { Color::Blue } else { Color::Red },
        ),
    };
    centered(out, &banner, cy.saturating_sub(2), color)?;
    centered(out, &format!("Final score: {} x {}", scores[0], scores[1]), cy, Color::Yellow)?;
    centered(out, "Press ENTER to exit", cy + 3, Color::White)?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}
