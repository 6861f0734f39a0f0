use actix::prelude::*;

use crate::game::command::Command;
use crate::game::systems::render::FrameView;

/// Queue a player command for the next frame.
#[derive(Message, Clone, Copy, Debug)]
#[rtype(result = "()")]
pub struct PushCommand(pub Command);

/// Ask for the renderer view of the current state.
#[derive(Message)]
#[rtype(result = "FrameView")]
pub struct GetFrame;

/// Stop the session.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Quit;
