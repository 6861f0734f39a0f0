//! Game session: the actor that drives frames and the terminal input feeding it.

pub mod messages;
pub mod server;
pub mod input;
