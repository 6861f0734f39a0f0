//! Game entities module.
//!
//! Bombs and monsters live in the grid as tile variants; these modules hold their
//! transition logic. The player is the only entity stored outside the grid.

pub mod bomb;
pub mod monster;
pub mod player;

pub use player::*;
