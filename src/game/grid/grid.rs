use std::collections::HashSet;

use log::debug;
use rand::Rng;

use crate::game::grid::explosion;
use crate::game::map::MapError;
use crate::game::tile::Tile;
use crate::game::types::Position;

/// Tile returned for every read outside the grid: impassable and immune to explosions.
pub const OUT_OF_BOUNDS: Tile = Tile::Unbreakable;

/// Rectangular table of tiles, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Tile>,
    /// Fuses lit since the last update pass. They hold their first stage for one pass.
    fresh_fuses: Vec<Position>,
}

/// A change decided during an update pass, applied when the pass is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileWrite {
    Set { pos: Position, tile: Tile },
    /// Move `tile` from `from` to `to`, leaving air behind.
    Relocate { from: Position, to: Position, tile: Tile },
}

/// Ordered list of writes produced by one update pass (or one explosion).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TickWrites {
    writes: Vec<TileWrite>,
}

impl TickWrites {
    pub fn set(&mut self, pos: Position, tile: Tile) {
        self.writes.push(TileWrite::Set { pos, tile });
    }

    pub fn relocate(&mut self, from: Position, to: Position, tile: Tile) {
        self.writes.push(TileWrite::Relocate { from, to, tile });
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TileWrite> {
        self.writes.iter()
    }
}

impl Grid {
    /// Create a grid of the given size filled with air.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Tile::Air; width * height],
            fresh_fuses: Vec::new(),
        }
    }

    /// Build a grid from row-major numeric tile codes.
    /// Unknown codes become air; empty or ragged maps are rejected.
    pub fn from_codes(rows: &[Vec<u8>]) -> Result<Self, MapError> {
        let width = rows.first().map(|row| row.len()).unwrap_or(0);
        if width == 0 {
            return Err(MapError::Empty);
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MapError::Ragged { row: y, expected: width, found: row.len() });
            }
            cells.extend(row.iter().map(|&code| Tile::from_code(code)));
        }
        Ok(Self {
            width,
            height: rows.len(),
            cells,
            fresh_fuses: Vec::new(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Tile at `pos`, or `OUT_OF_BOUNDS` outside the grid.
    pub fn get_tile(&self, pos: Position) -> Tile {
        self.index(pos).map(|i| self.cells[i]).unwrap_or(OUT_OF_BOUNDS)
    }

    /// Replace the tile at `pos`. Writes outside the grid are ignored.
    pub fn set_tile(&mut self, pos: Position, tile: Tile) {
        match self.index(pos) {
            Some(i) => self.cells[i] = tile,
            None => debug!("[Grid] Ignored write of {:?} outside the grid at {:?}", tile, pos),
        }
    }

    /// Every cell with its position, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, &tile)| {
            (Position::new((i % width) as i32, (i / width) as i32), tile)
        })
    }

    /// Numeric codes of the current state, row by row.
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        if self.width == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|tile| tile.code()).collect())
            .collect()
    }

    /// Put a freshly lit bomb on an air cell. Returns whether it was placed.
    ///
    /// A lit fuse is skipped by the next update pass, so it reads `Bomb`, `BombClose`,
    /// `BombReallyClose` after ticks one to three and detonates on tick four. Fuses
    /// loaded from a map or written with `set_tile` are not held.
    pub fn light_fuse(&mut self, pos: Position) -> bool {
        if !self.get_tile(pos).is_air() {
            return false;
        }
        self.set_tile(pos, Tile::Bomb);
        self.fresh_fuses.push(pos);
        true
    }

    /// Advance every tile by one transition, as if all at once.
    ///
    /// Transitions are decided against a snapshot of the grid taken before the pass and
    /// committed afterwards, so the traversal order only matters for conflicting writes.
    pub fn update_tiles<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let snapshot = self.clone();
        let fresh = std::mem::take(&mut self.fresh_fuses);
        let mut writes = TickWrites::default();

        for (pos, tile) in snapshot.tiles() {
            if tile == Tile::Bomb && fresh.contains(&pos) {
                continue;
            }
            tile.on_tick(&snapshot, pos, &mut writes, rng);
        }

        debug!("[Grid] Update pass decided {} writes", writes.len());
        self.commit(writes);
    }

    /// Detonate at `origin` and apply the blast immediately.
    pub fn explode<R: Rng + ?Sized>(&mut self, origin: Position, rng: &mut R) {
        let mut writes = TickWrites::default();
        explosion::propagate(self, origin, &mut writes, rng);
        self.commit(writes);
    }

    /// Apply queued writes in order. A relocation into a cell already claimed by an
    /// earlier relocation of the same batch is dropped and the mover stays put.
    /// A mover leaves air behind only if nothing else was set on its cell earlier in
    /// the batch (fire from a blast stays).
    pub fn commit(&mut self, writes: TickWrites) {
        let mut claimed = HashSet::new();
        let mut set = HashSet::new();
        for write in writes.writes {
            match write {
                TileWrite::Set { pos, tile } => {
                    set.insert(pos);
                    self.set_tile(pos, tile);
                }
                TileWrite::Relocate { from, to, tile } => {
                    if claimed.insert(to) {
                        if !set.contains(&from) {
                            self.set_tile(from, Tile::Air);
                        }
                        self.set_tile(to, tile);
                    } else {
                        debug!("[Grid] {:?} at {:?} lost the race for {:?}", tile, from, to);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_grid_generation_size() {
        let grid = Grid::new(10, 8);
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 8);
        assert_eq!(grid.tiles().count(), 80);
        assert!(grid.tiles().all(|(_, t)| t == Tile::Air));
    }

    #[test]
    fn out_of_bounds_reads_are_solid_and_writes_ignored() {
        let mut grid = Grid::new(3, 3);
        for pos in [Position::new(-1, 0), Position::new(0, -1), Position::new(3, 0), Position::new(0, 3), Position::new(99, 99)] {
            let tile = grid.get_tile(pos);
            assert!(!tile.is_walkable());
            assert!(!tile.is_explodable());
            assert!(!tile.is_air());

            grid.set_tile(pos, Tile::Fire);
        }
        assert!(grid.tiles().all(|(_, t)| t == Tile::Air));
    }

    #[test]
    fn from_codes_is_row_major() {
        let grid = Grid::from_codes(&[vec![0, 1, 2], vec![6, 7, 0]]).unwrap();
        assert_eq!(grid.get_tile(Position::new(2, 0)), Tile::Stone);
        assert_eq!(grid.get_tile(Position::new(0, 1)), Tile::Fire);
        assert_eq!(grid.get_tile(Position::new(1, 1)), Tile::ExtraBombPowerup);
        assert_eq!(grid.to_codes(), vec![vec![0, 1, 2], vec![6, 7, 0]]);
    }

    #[test]
    fn from_codes_rejects_bad_shapes() {
        assert!(matches!(Grid::from_codes(&[]), Err(MapError::Empty)));
        assert!(matches!(
            Grid::from_codes(&[vec![0, 0], vec![0]]),
            Err(MapError::Ragged { row: 1, expected: 2, found: 1 })
        ));
    }

    #[test]
    fn unknown_codes_become_air() {
        let grid = Grid::from_codes(&[vec![42, 1]]).unwrap();
        assert_eq!(grid.get_tile(Position::new(0, 0)), Tile::Air);
    }

    #[test]
    fn fire_burns_out_after_one_tick() {
        let mut grid = Grid::new(3, 3);
        let pos = Position::new(1, 1);
        grid.set_tile(pos, Tile::Fire);
        grid.update_tiles(&mut rng());
        assert_eq!(grid.get_tile(pos), Tile::Air);
        assert!(grid.tiles().all(|(_, t)| t == Tile::Air));
    }

    #[test]
    fn static_tiles_never_change() {
        let mut grid = Grid::from_codes(&[vec![0, 1, 2, 7]]).unwrap();
        let before = grid.clone();
        let mut rng = rng();
        for _ in 0..5 {
            grid.update_tiles(&mut rng);
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn light_fuse_needs_air() {
        let mut grid = Grid::from_codes(&[vec![0, 2]]).unwrap();
        assert!(grid.light_fuse(Position::new(0, 0)));
        assert!(!grid.light_fuse(Position::new(0, 0)));
        assert!(!grid.light_fuse(Position::new(1, 0)));
        assert!(!grid.light_fuse(Position::new(5, 0)));
        assert_eq!(grid.get_tile(Position::new(1, 0)), Tile::Stone);
    }

    #[test]
    fn converging_monsters_first_in_row_order_wins() {
        let mut grid = Grid::new(3, 1);
        grid.set_tile(Position::new(0, 0), Tile::MonsterRight);
        grid.set_tile(Position::new(2, 0), Tile::MonsterLeft);
        grid.update_tiles(&mut rng());

        assert_eq!(grid.get_tile(Position::new(0, 0)), Tile::Air);
        assert_eq!(grid.get_tile(Position::new(1, 0)), Tile::TmpMonsterRight);
        assert_eq!(grid.get_tile(Position::new(2, 0)), Tile::MonsterLeft);

        let mut grid = Grid::new(3, 3);
        grid.set_tile(Position::new(1, 0), Tile::MonsterDown);
        grid.set_tile(Position::new(1, 2), Tile::MonsterUp);
        grid.update_tiles(&mut rng());

        assert_eq!(grid.get_tile(Position::new(1, 0)), Tile::Air);
        assert_eq!(grid.get_tile(Position::new(1, 1)), Tile::TmpMonsterDown);
        assert_eq!(grid.get_tile(Position::new(1, 2)), Tile::MonsterUp);
        assert_eq!(grid.tiles().filter(|(_, t)| t.is_monster()).count(), 2);
    }

    #[test]
    fn monster_fleeing_a_blast_leaves_fire_behind() {
        let bomb = Position::new(3, 3);
        let cases = [
            (Tile::MonsterUp, Position::new(3, 2), Position::new(3, 1), Tile::MonsterUp),
            (Tile::MonsterDown, Position::new(3, 4), Position::new(3, 5), Tile::TmpMonsterDown),
            (Tile::MonsterLeft, Position::new(2, 3), Position::new(1, 3), Tile::MonsterLeft),
            (Tile::MonsterRight, Position::new(4, 3), Position::new(5, 3), Tile::TmpMonsterRight),
        ];
        for (monster, start, end, arrived) in cases {
            let mut grid = Grid::new(7, 7);
            grid.set_tile(bomb, Tile::BombReallyClose);
            grid.set_tile(start, monster);
            grid.update_tiles(&mut rng());

            assert_eq!(grid.get_tile(bomb), Tile::Fire);
            assert_eq!(grid.get_tile(start), Tile::Fire, "{:?} left no fire", monster);
            assert_eq!(grid.get_tile(end), arrived);
        }
    }

    #[test]
    fn relocation_race_keeps_the_loser_in_place() {
        let mut grid = Grid::new(3, 1);
        grid.set_tile(Position::new(0, 0), Tile::MonsterRight);
        grid.set_tile(Position::new(2, 0), Tile::MonsterLeft);

        let mut writes = TickWrites::default();
        writes.relocate(Position::new(0, 0), Position::new(1, 0), Tile::TmpMonsterRight);
        writes.relocate(Position::new(2, 0), Position::new(1, 0), Tile::MonsterLeft);
        grid.commit(writes);

        assert_eq!(grid.get_tile(Position::new(0, 0)), Tile::Air);
        assert_eq!(grid.get_tile(Position::new(1, 0)), Tile::TmpMonsterRight);
        assert_eq!(grid.get_tile(Position::new(2, 0)), Tile::MonsterLeft);
    }
}
