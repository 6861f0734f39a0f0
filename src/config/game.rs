/// Game configuration constants.
///
/// This module defines the main gameplay parameters such as frame rate,
/// tick divisor, player spawn and starting inventory.
pub const FRAME_RATE: u32 = 30; // Rendered frames per second.

/// Number of rendered frames per tile automaton tick.
pub const TICK_DIVISOR: u32 = 10;

/// Starting column of the player.
pub const PLAYER_START_X: i32 = 1;

/// Starting row of the player.
pub const PLAYER_START_Y: i32 = 1;

/// Bombs available to the player when the game starts.
pub const START_BOMBS: u32 = 1;

/// Probability that a destroyed stone leaves an extra-bomb powerup instead of fire.
pub const POWERUP_CHANCE: f64 = 0.1;

/// Width of one cell in terminal columns.
pub const CELL_SIZE: usize = 2;
