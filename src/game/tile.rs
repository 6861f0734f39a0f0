//! Tile variants and their behaviour.
//!
//! Every cell of the grid holds exactly one `Tile`. A tile carries no state besides its
//! variant: bomb fuses and monster facings are encoded as distinct variants, and a tile
//! only ever changes by being replaced with another one. The per-variant behaviour
//! (appearance, walkability, explosion response, per-tick transition, contact effect)
//! is dispatched here by exhaustive `match`.

use log::warn;
use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::config::game::POWERUP_CHANCE;
use crate::game::entities::{bomb, monster};
use crate::game::grid::{Grid, TickWrites};
use crate::game::state::GameState;
use crate::game::systems::render::Sprite;
use crate::game::types::{Color, Direction, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Air,
    Unbreakable,
    Stone,
    Bomb,
    BombClose,
    BombReallyClose,
    Fire,
    ExtraBombPowerup,
    MonsterUp,
    MonsterRight,
    MonsterDown,
    MonsterLeft,
    TmpMonsterRight,
    TmpMonsterDown,
}

impl Tile {
    /// Tile for a numeric map code, or `None` if the code is unknown.
    pub fn try_from_code(code: u8) -> Option<Tile> {
        let tile = match code {
            0 => Tile::Air,
            1 => Tile::Unbreakable,
            2 => Tile::Stone,
            3 => Tile::Bomb,
            4 => Tile::BombClose,
            5 => Tile::BombReallyClose,
            6 => Tile::Fire,
            7 => Tile::ExtraBombPowerup,
            8 => Tile::MonsterUp,
            9 => Tile::MonsterRight,
            10 => Tile::MonsterDown,
            11 => Tile::MonsterLeft,
            12 => Tile::TmpMonsterRight,
            13 => Tile::TmpMonsterDown,
            _ => return None,
        };
        Some(tile)
    }

    /// Tile factory used when building a grid. Unknown codes become `Air`.
    pub fn from_code(code: u8) -> Tile {
        Self::try_from_code(code).unwrap_or_else(|| {
            warn!("[Tile] Unknown tile code {}, using air", code);
            Tile::Air
        })
    }

    pub fn code(self) -> u8 {
        match self {
            Tile::Air => 0,
            Tile::Unbreakable => 1,
            Tile::Stone => 2,
            Tile::Bomb => 3,
            Tile::BombClose => 4,
            Tile::BombReallyClose => 5,
            Tile::Fire => 6,
            Tile::ExtraBombPowerup => 7,
            Tile::MonsterUp => 8,
            Tile::MonsterRight => 9,
            Tile::MonsterDown => 10,
            Tile::MonsterLeft => 11,
            Tile::TmpMonsterRight => 12,
            Tile::TmpMonsterDown => 13,
        }
    }

    pub fn color(self) -> Option<Color> {
        match self {
            Tile::Air => None,
            Tile::Unbreakable => Some(Color::rgb(90, 90, 90)),
            Tile::Stone => Some(Color::rgb(150, 100, 50)),
            Tile::Bomb => Some(Color::rgb(40, 40, 40)),
            Tile::BombClose => Some(Color::rgb(130, 30, 30)),
            Tile::BombReallyClose => Some(Color::rgb(220, 30, 30)),
            Tile::Fire => Some(Color::rgb(255, 150, 0)),
            Tile::ExtraBombPowerup => Some(Color::rgb(60, 200, 120)),
            Tile::MonsterUp
            | Tile::MonsterRight
            | Tile::MonsterDown
            | Tile::MonsterLeft
            | Tile::TmpMonsterRight
            | Tile::TmpMonsterDown => Some(Color::rgb(170, 60, 210)),
        }
    }

    /// What to draw for this tile at `pos`; air draws nothing.
    pub fn render(self, pos: Position) -> Option<Sprite> {
        self.color().map(|color| Sprite { pos, color })
    }

    pub fn is_air(self) -> bool {
        self == Tile::Air
    }

    pub fn is_walkable(self) -> bool {
        matches!(self, Tile::Air | Tile::Fire | Tile::ExtraBombPowerup)
    }

    /// Whether an explosion reaching this cell from a neighbour affects it.
    pub fn is_explodable(self) -> bool {
        !matches!(
            self,
            Tile::Unbreakable
                | Tile::Bomb
                | Tile::BombClose
                | Tile::BombReallyClose
                | Tile::ExtraBombPowerup
        )
    }

    pub fn is_fuse(self) -> bool {
        matches!(self, Tile::Bomb | Tile::BombClose | Tile::BombReallyClose)
    }

    pub fn is_monster(self) -> bool {
        self.monster_facing().is_some()
    }

    /// Facing of a monster tile, including monsters that just arrived in a cell.
    pub fn monster_facing(self) -> Option<Direction> {
        match self {
            Tile::MonsterUp => Some(Direction::Up),
            Tile::MonsterRight | Tile::TmpMonsterRight => Some(Direction::Right),
            Tile::MonsterDown | Tile::TmpMonsterDown => Some(Direction::Down),
            Tile::MonsterLeft => Some(Direction::Left),
            _ => None,
        }
    }

    /// Advance this tile's automaton by one step.
    ///
    /// `world` is the pre-tick snapshot; every change is queued into `writes` and only
    /// lands in the live grid once the whole pass has been decided.
    pub fn on_tick<R: Rng + ?Sized>(
        self,
        world: &Grid,
        pos: Position,
        writes: &mut TickWrites,
        rng: &mut R,
    ) {
        match self {
            Tile::Air | Tile::Unbreakable | Tile::Stone | Tile::ExtraBombPowerup => {}
            Tile::Bomb | Tile::BombClose | Tile::BombReallyClose => {
                bomb::advance_fuse(self, world, pos, writes, rng)
            }
            Tile::Fire => writes.set(pos, Tile::Air),
            Tile::MonsterUp | Tile::MonsterRight | Tile::MonsterDown | Tile::MonsterLeft => {
                monster::step(self, world, pos, writes)
            }
            Tile::TmpMonsterRight | Tile::TmpMonsterDown => monster::settle(self, pos, writes),
        }
    }

    /// Called when an explosion reaches this cell.
    pub fn on_destroyed<R: Rng + ?Sized>(self, pos: Position, writes: &mut TickWrites, rng: &mut R) {
        match self {
            Tile::Air
            | Tile::Unbreakable
            | Tile::Bomb
            | Tile::BombClose
            | Tile::Fire
            | Tile::ExtraBombPowerup => {}
            Tile::Stone => {
                let debris = if rng.random_bool(POWERUP_CHANCE) {
                    Tile::ExtraBombPowerup
                } else {
                    Tile::Fire
                };
                writes.set(pos, debris);
            }
            Tile::BombReallyClose
            | Tile::MonsterUp
            | Tile::MonsterRight
            | Tile::MonsterDown
            | Tile::MonsterLeft
            | Tile::TmpMonsterRight
            | Tile::TmpMonsterDown => writes.set(pos, Tile::Fire),
        }
    }

    /// Contact effect when the player's cell is resolved.
    pub fn on_entered(self, game: &mut GameState, pos: Position) {
        match self {
            Tile::Fire => game.end_game("burned"),
            Tile::ExtraBombPowerup => {
                game.grid.set_tile(pos, Tile::Air);
                game.player.bombs += 1;
            }
            t if t.is_monster() => game.end_game("caught by a monster"),
            _ => {}
        }
    }
}
