pub mod types;
pub mod tile;
pub mod map;
pub mod command;
pub mod state;

pub mod entities;
pub mod grid;
pub mod systems;
