//! Explosion propagation.
//!
//! A blast destroys its origin and reaches the four axis-aligned neighbours once.
//! It never spreads further and never chains through other bombs.

use log::debug;
use rand::Rng;

use crate::game::grid::{Grid, TickWrites};
use crate::game::types::Position;

/// Queue the destruction caused by a blast at `origin`, reading tiles from `world`.
pub fn propagate<R: Rng + ?Sized>(
    world: &Grid,
    origin: Position,
    writes: &mut TickWrites,
    rng: &mut R,
) {
    // The origin is always destroyed, explodable or not.
    world.get_tile(origin).on_destroyed(origin, writes, rng);

    for pos in origin.neighbours() {
        let tile = world.get_tile(pos);
        if tile.is_explodable() {
            tile.on_destroyed(pos, writes, rng);
        }
    }
    debug!("[Grid] Explosion at ({}, {})", origin.x, origin.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tile::Tile;
    use rand::{SeedableRng, rngs::StdRng};

    fn grid_with(center: Tile, around: Tile) -> (Grid, Position) {
        let mut grid = Grid::new(5, 5);
        let origin = Position::new(2, 2);
        grid.set_tile(origin, center);
        for pos in origin.neighbours() {
            grid.set_tile(pos, around);
        }
        for (dx, dy) in [(-1, -1), (1, -1), (-1, 1), (1, 1)] {
            grid.set_tile(origin.offset(dx, dy), Tile::Stone);
        }
        (grid, origin)
    }

    #[test]
    fn blast_leaves_fire_at_origin_and_spares_diagonals() {
        let (mut grid, origin) = grid_with(Tile::BombReallyClose, Tile::Air);
        grid.explode(origin, &mut StdRng::seed_from_u64(1));

        assert_eq!(grid.get_tile(origin), Tile::Fire);
        for pos in origin.neighbours() {
            assert_eq!(grid.get_tile(pos), Tile::Air);
        }
        for (dx, dy) in [(-1, -1), (1, -1), (-1, 1), (1, 1)] {
            assert_eq!(grid.get_tile(origin.offset(dx, dy)), Tile::Stone);
        }
    }

    #[test]
    fn blast_destroys_neighbouring_stone() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let (mut grid, origin) = grid_with(Tile::BombReallyClose, Tile::Stone);
            grid.explode(origin, &mut rng);
            for pos in origin.neighbours() {
                let tile = grid.get_tile(pos);
                assert!(tile == Tile::Fire || tile == Tile::ExtraBombPowerup, "got {:?}", tile);
            }
        }
    }

    #[test]
    fn blast_does_not_chain_or_touch_immune_tiles() {
        for immune in [Tile::Unbreakable, Tile::Bomb, Tile::BombClose, Tile::BombReallyClose, Tile::ExtraBombPowerup] {
            let (mut grid, origin) = grid_with(Tile::BombReallyClose, immune);
            grid.explode(origin, &mut StdRng::seed_from_u64(5));
            for pos in origin.neighbours() {
                assert_eq!(grid.get_tile(pos), immune);
            }
        }
    }

    #[test]
    fn blast_kills_neighbouring_monster() {
        let (mut grid, origin) = grid_with(Tile::BombReallyClose, Tile::MonsterUp);
        grid.explode(origin, &mut StdRng::seed_from_u64(9));
        for pos in origin.neighbours() {
            assert_eq!(grid.get_tile(pos), Tile::Fire);
        }
    }

    #[test]
    fn blast_at_edge_ignores_outside() {
        let mut grid = Grid::new(2, 2);
        let origin = Position::new(0, 0);
        grid.set_tile(origin, Tile::BombReallyClose);
        grid.set_tile(Position::new(1, 0), Tile::MonsterDown);
        grid.explode(origin, &mut StdRng::seed_from_u64(11));
        assert_eq!(grid.get_tile(origin), Tile::Fire);
        assert_eq!(grid.get_tile(Position::new(1, 0)), Tile::Fire);
        assert_eq!(grid.get_tile(Position::new(1, 1)), Tile::Air);
    }
}
