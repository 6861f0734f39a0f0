//! Numeric map loading.
//!
//! A map is a rectangular grid of tile codes, row-major. Files are JSON arrays of rows,
//! e.g. `[[1,1,1],[1,0,1],[1,1,1]]`.

use std::fs;
use std::path::Path;

use log::warn;
use thiserror::Error;

use crate::config::map::default_map;
use crate::game::tile::Tile;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read map file: {0}")]
    Io(#[from] std::io::Error),
    #[error("map is not a JSON array of code rows: {0}")]
    Json(#[from] serde_json::Error),
    #[error("map has no cells")]
    Empty,
    #[error("map row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
}

/// Parse a JSON map. Codes too large for a tile code become air.
pub fn parse_map(json: &str) -> Result<Vec<Vec<u8>>, MapError> {
    let rows: Vec<Vec<u64>> = serde_json::from_str(json)?;
    Ok(rows
        .into_iter()
        .map(|row| row.into_iter().map(narrow_code).collect())
        .collect())
}

fn narrow_code(code: u64) -> u8 {
    u8::try_from(code).unwrap_or_else(|_| {
        warn!("[Map] Unknown tile code {}, using air", code);
        Tile::Air.code()
    })
}

pub fn load_map(path: impl AsRef<Path>) -> Result<Vec<Vec<u8>>, MapError> {
    let json = fs::read_to_string(path)?;
    parse_map(&json)
}

/// Codes from `path` when given, otherwise the built-in map.
pub fn load_or_default(path: Option<&Path>) -> Result<Vec<Vec<u8>>, MapError> {
    match path {
        Some(path) => load_map(path),
        None => Ok(default_map()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::Grid;
    use crate::game::types::Position;

    #[test]
    fn parses_rows_of_codes() {
        let codes = parse_map("[[1,1,1],[1,0,1],[1,1,1]]").unwrap();
        assert_eq!(codes.len(), 3);
        assert_eq!(codes[1], vec![1, 0, 1]);
    }

    #[test]
    fn rejects_non_numeric_maps() {
        assert!(matches!(parse_map("[[\"wall\"]]"), Err(MapError::Json(_))));
        assert!(matches!(parse_map("[[1, -1]]"), Err(MapError::Json(_))));
    }

    #[test]
    fn oversized_codes_load_as_air() {
        let codes = parse_map("[[0, 300, 1]]").unwrap();
        let grid = Grid::from_codes(&codes).unwrap();
        assert_eq!(grid.get_tile(Position::new(0, 0)), Tile::Air);
        assert_eq!(grid.get_tile(Position::new(1, 0)), Tile::Air);
        assert_eq!(grid.get_tile(Position::new(2, 0)), Tile::Unbreakable);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_map("/definitely/not/a/map.json").unwrap_err();
        assert!(matches!(err, MapError::Io(_)));
    }

    #[test]
    fn default_map_builds_a_grid() {
        let codes = load_or_default(None).unwrap();
        let grid = Grid::from_codes(&codes).unwrap();
        assert_eq!(grid.width(), 13);
        assert_eq!(grid.height(), 11);
    }
}
