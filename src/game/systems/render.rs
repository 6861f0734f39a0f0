//! Game rendering system (terminal).
//!
//! `FrameView` is everything a renderer needs from the core: one sprite per non-air
//! cell, the player, and the HUD values. `TerminalRenderer` turns it into ANSI text.

use std::collections::HashMap;
use std::fmt::Write as _;

use serde::{Serialize, Deserialize};

use crate::game::state::GameState;
use crate::game::types::{Color, Position};

/// A coloured cell to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    pub pos: Position,
    pub color: Color,
}

/// Renderer-facing copy of the game state for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameView {
    pub width: usize,
    pub height: usize,
    pub sprites: Vec<Sprite>,
    pub player: Position,
    pub bombs: u32,
    pub tick: u64,
    pub game_over: bool,
}

impl FrameView {
    pub fn capture(game: &GameState) -> Self {
        FrameView {
            width: game.grid.width(),
            height: game.grid.height(),
            sprites: game
                .grid
                .tiles()
                .filter_map(|(pos, tile)| tile.render(pos))
                .collect(),
            player: game.player.pos,
            bombs: game.player.bombs,
            tick: game.tick,
            game_over: game.game_over,
        }
    }
}

pub struct TerminalRenderer {
    /// Terminal columns per cell.
    cell_size: usize,
}

impl TerminalRenderer {
    pub fn new(cell_size: usize) -> Self {
        Self { cell_size: cell_size.max(1) }
    }

    /// Draw the grid, the player and the HUD as ANSI text.
    pub fn draw(&self, view: &FrameView) -> String {
        let colors: HashMap<Position, Color> =
            view.sprites.iter().map(|s| (s.pos, s.color)).collect();
        let blank = " ".repeat(self.cell_size);
        let player_glyph = "@".repeat(self.cell_size);

        let mut out = String::new();
        for y in 0..view.height as i32 {
            for x in 0..view.width as i32 {
                let pos = Position::new(x, y);
                let background = colors.get(&pos);
                if let Some(c) = background {
                    let _ = write!(out, "\x1b[48;2;{};{};{}m", c.r, c.g, c.b);
                }
                if pos == view.player {
                    let _ = write!(out, "\x1b[1;97m{}", player_glyph);
                } else {
                    out.push_str(&blank);
                }
                if background.is_some() || pos == view.player {
                    out.push_str("\x1b[0m");
                }
            }
            out.push('\n');
        }

        let _ = writeln!(
            out,
            "Pos: ({}, {})  Bombs: {}  Tick: {}",
            view.player.x, view.player.y, view.bombs, view.tick
        );
        if view.game_over {
            out.push_str("*** GAME OVER ***\n");
        }
        out.push_str("w/a/s/d move, space or b bomb, q quit (then Enter)\n");
        out
    }
}
