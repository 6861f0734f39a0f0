//! Player commands produced by the input layer.

use serde::{Serialize, Deserialize};

use crate::game::entities::Player;
use crate::game::grid::Grid;
use crate::game::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Unit step; exactly one of `dx`, `dy` is non-zero.
    Move { dx: i32, dy: i32 },
    PlaceBomb,
}

impl Command {
    pub fn step(direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Command::Move { dx, dy }
    }

    /// Keyboard mapping: `wasd` to move, space or `b` to drop a bomb.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'w' => Some(Self::step(Direction::Up)),
            'a' => Some(Self::step(Direction::Left)),
            's' => Some(Self::step(Direction::Down)),
            'd' => Some(Self::step(Direction::Right)),
            ' ' | 'b' => Some(Command::PlaceBomb),
            _ => None,
        }
    }

    /// Apply this command to the player. Returns whether anything changed.
    pub fn apply(self, player: &mut Player, grid: &mut Grid) -> bool {
        match self {
            Command::Move { dx, dy } => player.move_by(dx, dy, grid),
            Command::PlaceBomb => player.place_bomb(grid),
        }
    }
}
