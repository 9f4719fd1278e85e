use super::board::{Board, LineString};
use super::types::{CELL_COUNT, Cell, GameStatus};

const PLAYER_TRIPLE: [Cell; 3] = [Cell::PlayerMark; 3];
const BOT_TRIPLE: [Cell; 3] = [Cell::BotMark; 3];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    None,
    PlayerWin,
    BotWin,
}

pub fn classify_line(line: &LineString) -> LineOutcome {
    if line.matches(&PLAYER_TRIPLE) {
        LineOutcome::PlayerWin
    } else if line.matches(&BOT_TRIPLE) {
        LineOutcome::BotWin
    } else {
        LineOutcome::None
    }
}

/// `move_count` is the number of marks on the board including the one just
/// placed. A full board without a winner is a draw.
pub fn evaluate_board(board: &Board, move_count: u32) -> GameStatus {
    for (_, line) in board.winning_lines() {
        match classify_line(&line) {
            LineOutcome::PlayerWin => return GameStatus::PlayerWon,
            LineOutcome::BotWin => return GameStatus::BotWon,
            LineOutcome::None => {}
        }
    }

    if move_count as usize == CELL_COUNT {
        return GameStatus::Draw;
    }

    GameStatus::InProgress
}
