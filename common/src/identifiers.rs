use std::fmt;

use crate::games::tictactoe::Position;

/// Opaque handle the presentation layer uses to find the widget for a cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellHandle(String);

impl CellHandle {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    /// The `"{row}{col}"` handle used for cells the bot marks.
    pub fn from_position(pos: Position) -> Self {
        Self(format!("{}{}", pos.row, pos.col))
    }
}

impl fmt::Display for CellHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
