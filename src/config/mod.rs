/// Main configuration module.
///
/// Re-exports submodules for game parameters and the built-in map.
pub mod game;
pub mod map;
