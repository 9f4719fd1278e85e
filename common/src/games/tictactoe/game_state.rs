use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::take_bot_turn;
use super::outcome::evaluate_board;
use super::types::{Cell, Difficulty, GameStatus, MarkOwner, Position};

/// A mark that made it onto the board, with the status right after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    pub position: Position,
    pub owner: MarkOwner,
    pub status: GameStatus,
}

/// One game against the bot. Board, turn and status are only ever written
/// through [`TicTacToeGameState::apply_move`] and its three steps.
#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    turn: u32,
    status: GameStatus,
    difficulty: Difficulty,
    rng: SessionRng,
    last_move: Option<Position>,
    applied_moves: Vec<AppliedMove>,
}

impl TicTacToeGameState {
    pub fn new(difficulty: Difficulty, rng: SessionRng) -> Self {
        Self {
            board: Board::new(),
            turn: 1,
            status: GameStatus::InProgress,
            difficulty,
            rng,
            last_move: None,
            applied_moves: Vec::new(),
        }
    }

    /// Resumes from an arbitrary position. The turn counter is derived from
    /// the number of marks already placed.
    pub fn from_board(board: Board, difficulty: Difficulty, rng: SessionRng) -> Self {
        let marks = board.mark_count() as u32;
        Self {
            board,
            turn: marks + 1,
            status: evaluate_board(&board, marks),
            difficulty,
            rng,
            last_move: None,
            applied_moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub(super) fn rng_mut(&mut self) -> &mut SessionRng {
        &mut self.rng
    }

    /// Places `owner`'s mark and, for a human move, lets the bot answer
    /// before returning. The bot is invoked even when the human's move ended
    /// the game; its own attempts are then rejected here.
    pub fn apply_move(&mut self, pos: Position, owner: MarkOwner) -> Result<(), String> {
        self.place_mark(pos, owner)?;
        let status = self.evaluate_outcome();
        self.finish_move(pos, owner, status);

        if owner == MarkOwner::Player {
            take_bot_turn(self);
        }

        Ok(())
    }

    /// Writes the mark without evaluating it.
    pub fn place_mark(&mut self, pos: Position, owner: MarkOwner) -> Result<(), String> {
        if self.status.is_terminal() {
            return Err("Game is already over".to_string());
        }

        if self.board.get(pos) != Cell::Empty {
            return Err(format!("Cell {} is already marked", pos));
        }

        self.board.set(pos, owner.mark());
        self.last_move = Some(pos);
        Ok(())
    }

    /// Status of the board as it stands, with the current turn as the number
    /// of placed marks. Only meaningful between [`Self::place_mark`] and
    /// [`Self::finish_move`].
    pub fn evaluate_outcome(&self) -> GameStatus {
        evaluate_board(&self.board, self.turn)
    }

    /// Records the evaluated status and advances the turn.
    pub fn finish_move(&mut self, pos: Position, owner: MarkOwner, status: GameStatus) {
        self.transition(status);
        self.turn += 1;
        self.applied_moves.push(AppliedMove {
            position: pos,
            owner,
            status: self.status,
        });
    }

    fn transition(&mut self, status: GameStatus) {
        if self.status.is_terminal() || !status.is_terminal() {
            return;
        }
        log!("Game over after {} moves: {:?}", self.turn, status);
        self.status = status;
    }

    /// Moves applied since the last call, oldest first.
    pub fn take_applied_moves(&mut self) -> Vec<AppliedMove> {
        std::mem::take(&mut self.applied_moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_from(notation: &str, difficulty: Difficulty) -> TicTacToeGameState {
        TicTacToeGameState::from_board(
            Board::from_notation(notation).unwrap(),
            difficulty,
            SessionRng::new(12345),
        )
    }

    #[test]
    fn test_new_game_is_empty_and_in_progress() {
        let state = TicTacToeGameState::new(Difficulty::Hard, SessionRng::new(1));

        assert_eq!(state.turn(), 1);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.board().mark_count(), 0);
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_bot_move_advances_turn_by_one() {
        let mut state = state_from("XVV/VVV/VVV", Difficulty::Hard);

        let result = state.apply_move(Position::new(1, 1), MarkOwner::Bot);

        assert!(result.is_ok());
        assert_eq!(state.turn(), 3);
        assert_eq!(state.board().get(Position::new(1, 1)), Cell::BotMark);
        assert_eq!(state.last_move(), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_player_move_triggers_exactly_one_bot_reply() {
        let mut state = TicTacToeGameState::new(Difficulty::Easy, SessionRng::new(9));

        state.apply_move(Position::new(0, 0), MarkOwner::Player).unwrap();

        assert_eq!(state.turn(), 3);
        assert_eq!(state.board().mark_count(), 2);
        let moves = state.take_applied_moves();
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].owner, MarkOwner::Player);
        assert_eq!(moves[1].owner, MarkOwner::Bot);
        assert!(state.take_applied_moves().is_empty());
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_mutation() {
        let mut state = state_from("XVV/VOV/VVV", Difficulty::Hard);
        let before = *state.board();

        let result = state.apply_move(Position::new(1, 1), MarkOwner::Player);

        assert!(result.is_err());
        assert_eq!(*state.board(), before);
        assert_eq!(state.turn(), 3);
        assert!(state.take_applied_moves().is_empty());
    }

    #[test]
    fn test_terminal_game_rejects_moves() {
        let mut state = state_from("XXX/OOV/VVV", Difficulty::Hard);
        assert_eq!(state.status(), GameStatus::PlayerWon);
        let before = *state.board();

        let result = state.apply_move(Position::new(1, 2), MarkOwner::Bot);

        assert_eq!(result, Err("Game is already over".to_string()));
        assert_eq!(*state.board(), before);
        assert_eq!(state.turn(), 6);
    }

    #[test]
    fn test_bot_still_runs_after_player_wins_but_board_is_unchanged() {
        let mut state = state_from("XXV/OOV/VVV", Difficulty::Hard);

        state.apply_move(Position::new(0, 2), MarkOwner::Player).unwrap();

        assert_eq!(state.status(), GameStatus::PlayerWon);
        assert_eq!(state.board().to_notation(), "XXXOOVVVV");
        assert_eq!(state.turn(), 6);
        assert_eq!(state.take_applied_moves().len(), 1);
    }

    #[test]
    fn test_filling_last_cell_without_winner_is_draw() {
        let mut state = state_from("XOX/XOO/OXV", Difficulty::Hard);
        assert_eq!(state.turn(), 9);

        state.apply_move(Position::new(2, 2), MarkOwner::Player).unwrap();

        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.turn(), 10);
        assert_eq!(state.board().mark_count(), 9);
    }

    #[test]
    fn test_steps_can_be_run_separately() {
        let mut state = state_from("OOV/XXV/XVV", Difficulty::Hard);

        state.place_mark(Position::new(0, 2), MarkOwner::Bot).unwrap();
        assert_eq!(state.status(), GameStatus::InProgress);

        let status = state.evaluate_outcome();
        assert_eq!(status, GameStatus::BotWon);
        assert_eq!(state.turn(), 6);

        state.finish_move(Position::new(0, 2), MarkOwner::Bot, status);
        assert_eq!(state.status(), GameStatus::BotWon);
        assert_eq!(state.turn(), 7);
    }

    #[test]
    fn test_terminal_status_is_never_left() {
        let mut state = state_from("OOO/XXV/XVV", Difficulty::Hard);

        state.finish_move(Position::new(2, 2), MarkOwner::Player, GameStatus::PlayerWon);

        assert_eq!(state.status(), GameStatus::BotWon);
    }
}
