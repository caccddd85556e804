//! Terminal renderer
//!
//! Thin crossterm wrapper: draws the tile grid, entities by their
//! appearance, a status line and the latest fight log. Raw mode and the
//! alternate screen are restored on drop.

use std::io::{stdout, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, PrintStyledContent, Stylize},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::core::{ColorTag, Point, Result};
use crate::game::{Game, Phase};
use crate::world::Tile;

/// Consumes the game state once per turn, purely observational
pub trait Renderer {
    fn draw(&mut self, game: &Game) -> Result<()>;
}

pub struct TerminalRenderer {
    out: Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Result<Self> {
        let mut out = stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { out })
    }

    fn glyph_colors(tag: ColorTag) -> (Color, Color) {
        match tag {
            ColorTag::Player => (Color::White, Color::Blue),
            ColorTag::Goblin => (Color::White, Color::Red),
            ColorTag::Orc => (Color::White, Color::Green),
            ColorTag::Troll => (Color::White, Color::Yellow),
            ColorTag::Dragon => (Color::White, Color::Magenta),
            ColorTag::Treasure => (Color::White, Color::Cyan),
        }
    }

    fn put_entity(&mut self, at: Point, glyph: char, tag: ColorTag) -> Result<()> {
        let (fg, bg) = Self::glyph_colors(tag);
        queue!(
            self.out,
            cursor::MoveTo(at.x as u16, at.y as u16),
            PrintStyledContent(glyph.with(fg).on(bg)),
        )?;
        Ok(())
    }
}

impl Renderer for TerminalRenderer {
    fn draw(&mut self, game: &Game) -> Result<()> {
        queue!(self.out, Clear(ClearType::All))?;

        let map = game.map();
        let grid = map.snapshot();
        for y in 0..grid.height() {
            let mut row = String::with_capacity(grid.width() as usize);
            for x in 0..grid.width() {
                let p = Point::new(x, y);
                row.push(match grid.get(p) {
                    Some(Tile::Wall) => '#',
                    _ if p == map.end() => '>',
                    _ => '.',
                });
            }
            queue!(self.out, cursor::MoveTo(0, y as u16), Print(row))?;
        }

        for treasure in game.treasures() {
            let a = treasure.core.appearance();
            self.put_entity(treasure.core.position(), a.glyph, a.color)?;
        }
        for monster in game.monsters() {
            let a = monster.core.appearance();
            self.put_entity(monster.core.position(), a.glyph, a.color)?;
        }
        let player = game.player();
        let a = player.core.appearance();
        self.put_entity(player.core.position(), a.glyph, a.color)?;

        let status_row = grid.height() as u16;
        let status = format!(
            "HP {:>3}  ATK {:>2}  XP {:>4}  Depth {}",
            player.core.health(),
            player.core.attack(),
            player.exp(),
            game.depth(),
        );
        queue!(self.out, cursor::MoveTo(0, status_row), Print(status))?;

        for (i, line) in game.fight_log().iter().rev().take(5).enumerate() {
            queue!(
                self.out,
                cursor::MoveTo(0, status_row + 1 + i as u16),
                Print(line),
            )?;
        }

        if game.phase() == Phase::GameOver {
            let (cols, rows) = terminal::size()?;
            queue!(
                self.out,
                cursor::MoveTo((cols / 2).saturating_sub(5), rows / 2),
                PrintStyledContent("Game Over".with(Color::White).on(Color::Red)),
            )?;
        }

        self.out.flush()?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = execute!(self.out, LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}
