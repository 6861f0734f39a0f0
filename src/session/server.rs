use std::io::{self, Write};
use std::time::Duration;

use actix::prelude::*;
use actix::MessageResult;
use log::{debug, info};
use uuid::Uuid;

use crate::config::game::FRAME_RATE;
use crate::game::command::Command;
use crate::game::state::GameState;
use crate::game::systems::render::{FrameView, TerminalRenderer};
use crate::session::messages::{GetFrame, PushCommand, Quit};

/// Time between two rendered frames at the configured frame rate.
pub fn frame_interval() -> Duration {
    Duration::from_secs_f64(1.0 / FRAME_RATE.max(1) as f64)
}

/// Runs one game at a fixed frame rate: drains queued commands, ticks the grid every
/// few frames and redraws. Ticking stops at game over but drawing goes on.
pub struct GameSession {
    pub session_id: Uuid,
    game: GameState,
    pending_commands: Vec<Command>,
    renderer: Option<TerminalRenderer>,
    frame_interval: Duration,
    frame_timer: Option<SpawnHandle>,
    last_drawn: Option<String>,
    end_reported: bool,
}

impl GameSession {
    /// `renderer` is `None` for headless sessions.
    pub fn new(game: GameState, renderer: Option<TerminalRenderer>, frame_interval: Duration) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            game,
            pending_commands: Vec::new(),
            renderer,
            frame_interval,
            frame_timer: None,
            last_drawn: None,
            end_reported: false,
        }
    }

    fn run_frame(&mut self) {
        if self.game.frame(&mut self.pending_commands) {
            debug!("[GameSession] session_id={} tick={}", self.session_id, self.game.tick);
        }
        if self.game.game_over && !self.end_reported {
            self.end_reported = true;
            self.report_end();
        }
        self.draw();
    }

    fn report_end(&self) {
        info!(
            "[GameSession] Game over: session_id={} ticks={} bombs={}",
            self.session_id, self.game.tick, self.game.player.bombs
        );
        match serde_json::to_string(&FrameView::capture(&self.game)) {
            Ok(json) => debug!("[GameSession] Final state: {}", json),
            Err(e) => debug!("[GameSession] Failed to serialize final state: {}", e),
        }
    }

    fn draw(&mut self) {
        let Some(renderer) = &self.renderer else {
            return;
        };
        let text = renderer.draw(&FrameView::capture(&self.game));
        if self.last_drawn.as_deref() == Some(text.as_str()) {
            return;
        }
        let mut stdout = io::stdout().lock();
        let _ = write!(stdout, "\x1b[2J\x1b[H{}", text);
        let _ = stdout.flush();
        self.last_drawn = Some(text);
    }
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!("[GameSession] Started session_id={}", self.session_id);
        self.draw();
        let handle = ctx.run_interval(self.frame_interval, |act, _| act.run_frame());
        self.frame_timer = Some(handle);
    }

    fn stopped(&mut self, _: &mut Self::Context) {
        info!(
            "[GameSession] Stopped session_id={} after {} ticks",
            self.session_id, self.game.tick
        );
    }
}

impl Handler<PushCommand> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: PushCommand, _: &mut Context<Self>) -> Self::Result {
        if self.game.game_over {
            debug!("[GameSession] Ignored {:?} after game over", msg.0);
            return;
        }
        self.pending_commands.push(msg.0);
    }
}

impl Handler<GetFrame> for GameSession {
    type Result = MessageResult<GetFrame>;

    fn handle(&mut self, _: GetFrame, _: &mut Context<Self>) -> Self::Result {
        MessageResult(FrameView::capture(&self.game))
    }
}

impl Handler<Quit> for GameSession {
    type Result = ();

    fn handle(&mut self, _: Quit, ctx: &mut Context<Self>) -> Self::Result {
        if let Some(handle) = self.frame_timer.take() {
            ctx.cancel_future(handle);
        }
        ctx.stop();
    }
}
