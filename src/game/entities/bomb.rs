//! Bomb fuse chain: `Bomb -> BombClose -> BombReallyClose -> explosion`.

use rand::Rng;

use crate::game::grid::{Grid, TickWrites, explosion};
use crate::game::tile::Tile;
use crate::game::types::Position;

/// Advance a fuse tile by one stage; the last stage detonates in place.
pub fn advance_fuse<R: Rng + ?Sized>(
    stage: Tile,
    world: &Grid,
    pos: Position,
    writes: &mut TickWrites,
    rng: &mut R,
) {
    match stage {
        Tile::Bomb => writes.set(pos, Tile::BombClose),
        Tile::BombClose => writes.set(pos, Tile::BombReallyClose),
        Tile::BombReallyClose => explosion::propagate(world, pos, writes, rng),
        _ => {}
    }
}
