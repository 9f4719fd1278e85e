mod board;
mod bot_controller;
mod defense;
mod game_state;
mod offense;
mod outcome;
mod session;
mod settings;
mod types;

pub use board::{Board, DIAMOND_CELLS, LineKind, LineString};
pub use bot_controller::{
    BotRule, defensive_candidates, heuristic_candidates, offensive_candidates, take_bot_turn,
};
pub use defense::{DefenseSignal, find_block_index, find_defensive_block};
pub use game_state::{AppliedMove, TicTacToeGameState};
pub use offense::find_offensive_completion;
pub use outcome::{LineOutcome, classify_line, evaluate_board};
pub use session::TicTacToeSession;
pub use settings::TicTacToeSessionSettings;
pub use types::{BOARD_SIZE, CELL_COUNT, Cell, Difficulty, GameStatus, MarkOwner, Position};
