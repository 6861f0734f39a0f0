use log::{debug, info, warn};
use rand::{SeedableRng, rngs::StdRng};

use crate::config::game::{PLAYER_START_X, PLAYER_START_Y, START_BOMBS, TICK_DIVISOR};
use crate::game::command::Command;
use crate::game::entities::Player;
use crate::game::grid::Grid;
use crate::game::map::MapError;
use crate::game::types::Position;

/// Parameters fixed when the game is composed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Rendered frames per automaton tick.
    pub tick_divisor: u32,
    pub player_start: Position,
    pub start_bombs: u32,
    /// Seed for explosion randomness; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_divisor: TICK_DIVISOR,
            player_start: Position::new(PLAYER_START_X, PLAYER_START_Y),
            start_bombs: START_BOMBS,
            seed: None,
        }
    }
}

/// Composition root: the grid, the player and the tick clock.
#[derive(Debug)]
pub struct GameState {
    pub grid: Grid,
    pub player: Player,
    pub game_over: bool,
    /// Number of automaton ticks run so far.
    pub tick: u64,
    delay: u32,
    tick_divisor: u32,
    rng: StdRng,
}

impl GameState {
    pub fn new(grid: Grid, config: GameConfig) -> Self {
        if !grid.get_tile(config.player_start).is_walkable() {
            warn!(
                "[Game] Player starts on {:?} at ({}, {})",
                grid.get_tile(config.player_start),
                config.player_start.x,
                config.player_start.y
            );
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        GameState {
            grid,
            player: Player::new(config.player_start, config.start_bombs),
            game_over: false,
            tick: 0,
            delay: 0,
            tick_divisor: config.tick_divisor.max(1),
            rng,
        }
    }

    pub fn from_codes(codes: &[Vec<u8>], config: GameConfig) -> Result<Self, MapError> {
        Ok(Self::new(Grid::from_codes(codes)?, config))
    }

    /// Apply one command, then resolve what the player is standing on.
    pub fn apply_command(&mut self, command: Command) {
        if self.game_over {
            return;
        }
        command.apply(&mut self.player, &mut self.grid);
        self.resolve_contact();
    }

    /// Drain queued commands, newest first, stopping as soon as the game ends.
    pub fn drain_input(&mut self, queue: &mut Vec<Command>) {
        while !self.game_over {
            let Some(command) = queue.pop() else {
                break;
            };
            self.apply_command(command);
        }
    }

    /// Run one rendered frame: input first, then a tick every `tick_divisor` frames.
    /// Returns whether the tile automaton advanced.
    pub fn frame(&mut self, queue: &mut Vec<Command>) -> bool {
        if self.game_over {
            queue.clear();
            return false;
        }
        self.drain_input(queue);
        if self.game_over {
            return false;
        }

        self.delay += 1;
        if self.delay < self.tick_divisor {
            return false;
        }
        self.delay = 0;
        self.advance();
        true
    }

    /// One automaton tick: update every tile, then check the player's cell.
    pub fn advance(&mut self) {
        if self.game_over {
            return;
        }
        self.grid.update_tiles(&mut self.rng);
        self.tick += 1;
        debug!("[Game] Tick {} done", self.tick);
        self.resolve_contact();
    }

    /// Run the contact effect of the tile under the player.
    pub fn resolve_contact(&mut self) {
        let pos = self.player.pos;
        let tile = self.grid.get_tile(pos);
        tile.on_entered(self, pos);
    }

    pub fn end_game(&mut self, reason: &str) {
        if self.game_over {
            return;
        }
        self.game_over = true;
        info!(
            "[Game] Game over at tick {}: player {} at ({}, {})",
            self.tick, reason, self.player.pos.x, self.player.pos.y
        );
    }
}
