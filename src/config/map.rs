/// Built-in map used when no map file is given.
///
/// One numeric tile code per cell, row-major (see `Tile::from_code`).
/// The player spawns at `(PLAYER_START_X, PLAYER_START_Y)`, which must be air.
pub const DEFAULT_MAP: [[u8; 13]; 11] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 2, 2, 2, 0, 2, 2, 0, 0, 0, 1],
    [1, 0, 1, 2, 1, 0, 1, 2, 1, 2, 1, 0, 1],
    [1, 2, 2, 0, 0, 0, 2, 2, 0, 0, 2, 2, 1],
    [1, 2, 1, 0, 1, 2, 1, 0, 1, 2, 1, 2, 1],
    [1, 0, 2, 0, 2, 0, 9, 0, 0, 0, 2, 0, 1],
    [1, 2, 1, 2, 1, 0, 1, 2, 1, 0, 1, 2, 1],
    [1, 2, 0, 0, 2, 2, 0, 2, 0, 2, 2, 0, 1],
    [1, 0, 1, 2, 1, 2, 1, 0, 1, 2, 1, 0, 1],
    [1, 0, 2, 2, 0, 0, 2, 2, 0, 0, 0, 11, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// Built-in map as owned rows, ready for `Grid::from_codes`.
pub fn default_map() -> Vec<Vec<u8>> {
    DEFAULT_MAP.iter().map(|row| row.to_vec()).collect()
}
