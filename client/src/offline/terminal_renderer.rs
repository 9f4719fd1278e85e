use std::io::{self, Write};

use common::CellHandle;
use common::log;
use common::games::GameRenderer;
use common::games::tictactoe::{GameStatus, MarkOwner};

/// Prints each mark as it lands and the final message when the game ends.
pub struct TerminalRenderer<W: Write> {
    out: W,
    write_error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            write_error: None,
        }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    /// First write failure since the last call.
    pub fn take_write_error(&mut self) -> Option<io::Error> {
        self.write_error.take()
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            log!("Failed to render: {}", e);
            self.write_error.get_or_insert(e);
        }
    }
}

impl<W: Write> GameRenderer for TerminalRenderer<W> {
    fn render_mark(&mut self, cell: &CellHandle, owner: MarkOwner) {
        let who = match owner {
            MarkOwner::Player => "You",
            MarkOwner::Bot => "Bot",
        };
        let result = writeln!(self.out, "{} marked {} with {}", who, cell, owner);
        self.record(result);
    }

    fn render_status(&mut self, status: GameStatus) {
        if let Some(message) = status.message() {
            let result = writeln!(self.out, "{}", message);
            self.record(result);
        }
    }
}
