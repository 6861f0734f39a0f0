//! Monster movement chain.
//!
//! A monster walks one cell per tick along its facing. When the next cell is not air it
//! turns clockwise in place instead. Monsters arriving by a right or down move pass
//! through a transient variant for one tick before walking on.

use crate::game::grid::{Grid, TickWrites};
use crate::game::tile::Tile;
use crate::game::types::{Direction, Position};

/// Stable monster tile for a facing.
pub fn facing_tile(direction: Direction) -> Tile {
    match direction {
        Direction::Up => Tile::MonsterUp,
        Direction::Right => Tile::MonsterRight,
        Direction::Down => Tile::MonsterDown,
        Direction::Left => Tile::MonsterLeft,
    }
}

/// Tile a monster becomes in the cell it just moved into.
fn arrival_tile(direction: Direction) -> Tile {
    match direction {
        Direction::Right => Tile::TmpMonsterRight,
        Direction::Down => Tile::TmpMonsterDown,
        Direction::Left | Direction::Up => facing_tile(direction),
    }
}

/// Try to move one cell forward, or turn clockwise when blocked.
pub fn step(monster: Tile, world: &Grid, pos: Position, writes: &mut TickWrites) {
    let Some(facing) = monster.monster_facing() else {
        return;
    };
    let target = pos.step(facing);
    if world.get_tile(target).is_air() {
        writes.relocate(pos, target, arrival_tile(facing));
    } else {
        writes.set(pos, facing_tile(facing.turn_clockwise()));
    }
}

/// Resolve a transient arrival variant into the stable one.
pub fn settle(monster: Tile, pos: Position, writes: &mut TickWrites) {
    if let Some(facing) = monster.monster_facing() {
        writes.set(pos, facing_tile(facing));
    }
}
