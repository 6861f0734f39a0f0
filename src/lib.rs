//! Tile-grid bomb game.
//!
//! The core is the tile automaton in `game`: a grid of tiles that all advance one
//! transition per tick, bombs whose fuse ends in a plus-shaped blast, and wall-following
//! monsters. `session` drives it at a fixed frame rate from terminal input.

pub mod config;
pub mod game;
pub mod session;
