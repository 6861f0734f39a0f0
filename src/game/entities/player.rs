use log::{debug, warn};
use serde::{Serialize, Deserialize};

use crate::game::grid::Grid;
use crate::game::types::Position;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Position,
    /// Bomb capacity. Gates placement; only powerups change it.
    pub bombs: u32,
}

impl Player {
    pub fn new(pos: Position, bombs: u32) -> Self {
        Self { pos, bombs }
    }

    /// Step one cell along a single axis if the destination is walkable.
    /// Returns whether the player moved.
    pub fn move_by(&mut self, dx: i32, dy: i32, grid: &Grid) -> bool {
        let unit_step = (dx.abs() == 1 && dy == 0) || (dx == 0 && dy.abs() == 1);
        if !unit_step {
            warn!("[Player] Rejected move ({}, {}): not a single step", dx, dy);
            return false;
        }

        let target = self.pos.offset(dx, dy);
        if !grid.get_tile(target).is_walkable() {
            return false;
        }
        self.pos = target;
        true
    }

    /// Light a bomb on the player's cell.
    /// Only succeeds if the player has a bomb and the cell is air.
    pub fn place_bomb(&self, grid: &mut Grid) -> bool {
        if self.bombs == 0 {
            return false;
        }
        let placed = grid.light_fuse(self.pos);
        if placed {
            debug!("[Player] Bomb placed at ({}, {})", self.pos.x, self.pos.y);
        }
        placed
    }
}
