//! Terminal input: reads stdin line by line and forwards commands to a session.

use actix::Addr;
use log::{debug, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::game::command::Command;
use crate::session::messages::{PushCommand, Quit};
use crate::session::server::GameSession;

/// Commands typed on one line, in typing order, and whether `q` was pressed.
/// Keys after `q` are dropped.
pub fn parse_line(line: &str) -> (Vec<Command>, bool) {
    let mut commands = Vec::new();
    for key in line.chars() {
        if key.eq_ignore_ascii_case(&'q') {
            return (commands, true);
        }
        match Command::from_key(key) {
            Some(command) => commands.push(command),
            None => debug!("[Input] Ignored key {:?}", key),
        }
    }
    (commands, false)
}

/// Forward stdin to `session` until `q`, end of input or a read error.
pub async fn read_commands(session: Addr<GameSession>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let (commands, quit) = parse_line(&line);
                for command in commands {
                    session.do_send(PushCommand(command));
                }
                if quit {
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                warn!("[Input] Failed to read stdin: {}", e);
                break;
            }
        }
    }
    session.do_send(Quit);
}
