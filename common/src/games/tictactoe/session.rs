use crate::CellHandle;
use crate::games::GameRenderer;
use crate::log;
use super::game_state::TicTacToeGameState;
use super::settings::TicTacToeSessionSettings;
use super::types::{MarkOwner, Position};

/// A game bound to the renderer that displays it.
pub struct TicTacToeSession<R: GameRenderer> {
    settings: TicTacToeSessionSettings,
    state: TicTacToeGameState,
    renderer: R,
    games_started: u64,
}

impl<R: GameRenderer> TicTacToeSession<R> {
    pub fn new(settings: TicTacToeSessionSettings, renderer: R) -> Self {
        let state = TicTacToeGameState::new(settings.difficulty, settings.create_rng(0));
        log!(
            "New {} game, seed {}",
            settings.difficulty,
            state.seed()
        );
        Self {
            settings,
            state,
            renderer,
            games_started: 1,
        }
    }

    /// Entry point for the presentation layer. Returns whether the move was
    /// accepted; on success every applied mark (including the bot's reply)
    /// has already been rendered.
    pub fn request_move(
        &mut self,
        row: usize,
        col: usize,
        cell: CellHandle,
        owner: MarkOwner,
    ) -> bool {
        let pos = match Position::try_new(row, col) {
            Ok(pos) => pos,
            Err(e) => {
                log!("Rejected move: {}", e);
                return false;
            }
        };

        if let Err(e) = self.state.apply_move(pos, owner) {
            log!("Rejected move {} by {}: {}", pos, owner, e);
            return false;
        }

        let mut requested_cell = Some(cell);
        for applied in self.state.take_applied_moves() {
            let handle = match requested_cell.take() {
                Some(handle) if applied.position == pos => handle,
                _ => CellHandle::from_position(applied.position),
            };
            self.renderer.render_mark(&handle, applied.owner);
            self.renderer.render_status(applied.status);
        }

        true
    }

    /// Player move addressed by position only.
    pub fn play(&mut self, pos: Position) -> bool {
        self.request_move(pos.row, pos.col, CellHandle::from_position(pos), MarkOwner::Player)
    }

    /// Discards the current game and starts an empty one with the same settings.
    pub fn restart(&mut self) {
        self.state = TicTacToeGameState::new(
            self.settings.difficulty,
            self.settings.create_rng(self.games_started),
        );
        self.games_started += 1;
        log!("Game restarted, seed {}", self.state.seed());
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Difficulty, GameStatus};

    #[derive(Default)]
    struct RecordingRenderer {
        marks: Vec<(String, MarkOwner)>,
        statuses: Vec<GameStatus>,
    }

    impl GameRenderer for RecordingRenderer {
        fn render_mark(&mut self, cell: &CellHandle, owner: MarkOwner) {
            self.marks.push((cell.to_string(), owner));
        }

        fn render_status(&mut self, status: GameStatus) {
            self.statuses.push(status);
        }
    }

    fn hard_session(seed: u64) -> TicTacToeSession<RecordingRenderer> {
        TicTacToeSession::new(
            TicTacToeSessionSettings::new(Difficulty::Hard, Some(seed)),
            RecordingRenderer::default(),
        )
    }

    #[test]
    fn test_accepted_move_renders_player_then_bot() {
        let mut session = hard_session(1);

        let accepted = session.request_move(0, 0, CellHandle::new("btn-00".to_string()), MarkOwner::Player);

        assert!(accepted);
        assert_eq!(
            session.renderer().marks,
            vec![
                ("btn-00".to_string(), MarkOwner::Player),
                ("11".to_string(), MarkOwner::Bot),
            ]
        );
        assert_eq!(
            session.renderer().statuses,
            vec![GameStatus::InProgress, GameStatus::InProgress]
        );
    }

    #[test]
    fn test_rejected_move_renders_nothing() {
        let mut session = hard_session(1);
        session.play(Position::new(0, 0));
        let rendered = session.renderer().marks.len();

        assert!(!session.play(Position::new(1, 1)));
        assert!(!session.request_move(3, 0, CellHandle::new("30".to_string()), MarkOwner::Player));
        assert_eq!(session.renderer().marks.len(), rendered);
        assert_eq!(session.state().turn(), 3);
    }

    #[test]
    fn test_hard_bot_wins_when_player_ignores_threat() {
        let mut session = hard_session(1);

        // Bot takes the center and blocks at (0,2), which opens the ascending diagonal.
        assert!(session.play(Position::new(0, 0)));
        assert!(session.play(Position::new(0, 1)));
        assert!(session.play(Position::new(2, 2)));

        assert_eq!(session.state().status(), GameStatus::BotWon);
        assert_eq!(session.renderer().statuses.last(), Some(&GameStatus::BotWon));
        assert_eq!(GameStatus::BotWon.message(), Some("You lost!"));
        assert!(!session.play(Position::new(1, 0)));
    }

    #[test]
    fn test_restart_clears_board() {
        let mut session = hard_session(9);
        session.play(Position::new(0, 0));

        session.restart();

        assert_eq!(session.state().board().mark_count(), 0);
        assert_eq!(session.state().turn(), 1);
        assert_eq!(session.state().status(), GameStatus::InProgress);
        assert_eq!(session.state().seed(), 10);
    }

    #[test]
    fn test_turn_never_passes_ten() {
        for seed in 0..30 {
            let mut session = TicTacToeSession::new(
                TicTacToeSessionSettings::new(Difficulty::Easy, Some(seed)),
                RecordingRenderer::default(),
            );

            while !session.state().status().is_terminal() {
                let target = session.state().board().available_moves()[0];
                let turn_before = session.state().turn();
                assert!(session.play(target));
                let turn_after = session.state().turn();
                assert!(turn_after == turn_before + 1 || turn_after == turn_before + 2);
            }

            assert!(session.state().turn() <= 10);
            assert!(session.state().board().mark_count() <= 9);
        }
    }
}
