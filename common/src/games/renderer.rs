use crate::CellHandle;
use super::tictactoe::{GameStatus, MarkOwner};

/// Outbound side of a game: whatever draws the board.
pub trait GameRenderer {
    fn render_mark(&mut self, cell: &CellHandle, owner: MarkOwner);

    /// Called after every applied move. Only terminal statuses carry a
    /// message for the player.
    fn render_status(&mut self, status: GameStatus);
}
