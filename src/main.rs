//! Main entry point for the terminal game.
//!
//! Loads the map, composes the game state, starts the session actor that runs the
//! frame loop, and feeds it keyboard commands from stdin until `q` or end of input.

use std::io;
use std::path::PathBuf;

use actix::Actor;
use log::info;

use bomber_grid::config::game::CELL_SIZE;
use bomber_grid::game::map;
use bomber_grid::game::state::{GameConfig, GameState};
use bomber_grid::game::systems::render::TerminalRenderer;
use bomber_grid::session::input::read_commands;
use bomber_grid::session::server::{GameSession, frame_interval};

/// Command line: `[map.json] [--seed N]`.
fn parse_args(mut args: impl Iterator<Item = String>) -> io::Result<(Option<PathBuf>, Option<u64>)> {
    let mut map_path = None;
    let mut seed = None;
    while let Some(arg) = args.next() {
        if arg == "--seed" {
            let value = args.next().ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "--seed needs a value")
            })?;
            let parsed = value.parse().map_err(|_| {
                io::Error::new(io::ErrorKind::InvalidInput, format!("invalid seed: {}", value))
            })?;
            seed = Some(parsed);
        } else {
            map_path = Some(PathBuf::from(arg));
        }
    }
    Ok((map_path, seed))
}

#[actix::main]
async fn main() -> io::Result<()> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    let (map_path, seed) = parse_args(std::env::args().skip(1))?;
    let codes = map::load_or_default(map_path.as_deref()).map_err(io::Error::other)?;
    let config = GameConfig { seed, ..GameConfig::default() };
    let game = GameState::from_codes(&codes, config).map_err(io::Error::other)?;
    info!(
        "[Main] Map {}x{} loaded from {}",
        game.grid.width(),
        game.grid.height(),
        map_path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "built-in map".to_string())
    );

    // Start the GameSession actor (frame loop and rendering).
    let session = GameSession::new(game, Some(TerminalRenderer::new(CELL_SIZE)), frame_interval()).start();

    read_commands(session).await;
    Ok(())
}
