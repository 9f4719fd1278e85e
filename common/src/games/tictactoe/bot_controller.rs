use std::fmt;

use crate::log;
use super::board::{Board, LineKind};
use super::defense::{
    ASCENDING_PAIR_REPLY, CENTER_OPENING_REPLY, CROSS_REPLY, DESCENDING_PAIR_REPLY,
    DIAMOND_REPLIES, DefenseSignal, find_block_index, find_defensive_block,
};
use super::game_state::TicTacToeGameState;
use super::offense::find_offensive_completion;
use super::types::{Cell, MarkOwner, Position};

/// Turn on which the bot looks for the cross, diagonal pair and diamond setups.
const SECOND_BOT_TURN: u32 = 4;
/// Turn on which the bot answers a center opening.
const FIRST_BOT_TURN: u32 = 2;

/// The rule behind a heuristic candidate, kept for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotRule {
    ClaimCenter,
    Complete(LineKind),
    AnswerCenterOpening,
    BreakCross,
    BreakDiagonalPair(LineKind),
    CoverDiamond(usize),
    Block(LineKind),
}

impl fmt::Display for BotRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotRule::ClaimCenter => write!(f, "claim center"),
            BotRule::Complete(kind) => write!(f, "complete {}", kind),
            BotRule::AnswerCenterOpening => write!(f, "answer center opening"),
            BotRule::BreakCross => write!(f, "break cross"),
            BotRule::BreakDiagonalPair(kind) => write!(f, "break pair on {}", kind),
            BotRule::CoverDiamond(index) => write!(f, "cover diamond {}", index),
            BotRule::Block(kind) => write!(f, "block {}", kind),
        }
    }
}

/// Plays the bot's single move for this turn. Returns where it played, or
/// `None` when no move could be made (game over or board full).
pub fn take_bot_turn(state: &mut TicTacToeGameState) -> Option<Position> {
    if plays_by_rules(state) {
        for (pos, rule) in heuristic_candidates(state.board(), state.turn()) {
            if state.apply_move(pos, MarkOwner::Bot).is_ok() {
                log!("Bot played {} ({})", pos, rule);
                return Some(pos);
            }
        }
    }

    let pos = play_random(state)?;
    log!("Bot played {} (random)", pos);
    Some(pos)
}

/// Hard never consumes randomness here.
fn plays_by_rules(state: &mut TicTacToeGameState) -> bool {
    let chance = state.difficulty().random_move_chance();
    chance <= 0.0 || !state.rng_mut().chance(chance)
}

/// Every rule-based move for this position, highest priority first: offense
/// before defense, each scanned in the fixed line order.
pub fn heuristic_candidates(board: &Board, turn: u32) -> Vec<(Position, BotRule)> {
    let mut candidates = offensive_candidates(board);
    candidates.extend(defensive_candidates(board, turn));
    candidates
}

pub fn offensive_candidates(board: &Board) -> Vec<(Position, BotRule)> {
    let mut candidates = Vec::new();

    if board.is_empty_at(Position::CENTER) {
        candidates.push((Position::CENTER, BotRule::ClaimCenter));
    }

    for (kind, line) in board.winning_lines() {
        if let Some(index) = find_offensive_completion(&line) {
            candidates.push((kind.position_at(index), BotRule::Complete(kind)));
        }
    }

    candidates
}

pub fn defensive_candidates(board: &Board, turn: u32) -> Vec<(Position, BotRule)> {
    let mut candidates = Vec::new();

    if turn == FIRST_BOT_TURN && board.get(Position::CENTER) == Cell::PlayerMark {
        candidates.push((CENTER_OPENING_REPLY, BotRule::AnswerCenterOpening));
    }

    if turn == SECOND_BOT_TURN {
        candidates.extend(second_turn_candidates(board));
    }

    for (kind, line) in board.winning_lines() {
        if let Some(index) = find_block_index(&line) {
            candidates.push((kind.position_at(index), BotRule::Block(kind)));
        }
    }

    candidates
}

fn second_turn_candidates(board: &Board) -> Vec<(Position, BotRule)> {
    let mut candidates = Vec::new();

    if matches!(
        find_defensive_block(&board.all_cells()),
        Some(DefenseSignal::CrossDescending | DefenseSignal::CrossAscending)
    ) {
        candidates.push((CROSS_REPLY, BotRule::BreakCross));
    }

    let diagonals = [
        (LineKind::DescendingDiagonal, DESCENDING_PAIR_REPLY),
        (LineKind::AscendingDiagonal, ASCENDING_PAIR_REPLY),
    ];
    for (kind, reply) in diagonals {
        if find_defensive_block(&board.read_line(kind)) == Some(DefenseSignal::BotFirstPair) {
            candidates.push((reply, BotRule::BreakDiagonalPair(kind)));
        }
    }

    for (index, diamond) in board.diamonds().iter().enumerate() {
        if find_defensive_block(diamond) == Some(DefenseSignal::DiamondPair) {
            candidates.push((DIAMOND_REPLIES[index], BotRule::CoverDiamond(index)));
        }
    }

    candidates
}

/// Samples the whole grid until a cell is accepted. Only runs while the game
/// is in progress and a cell is free, so the loop ends with probability one.
fn play_random(state: &mut TicTacToeGameState) -> Option<Position> {
    if state.status().is_terminal() || !state.board().has_empty_cell() {
        return None;
    }

    loop {
        let pos = state.rng_mut().random_position();
        if state.apply_move(pos, MarkOwner::Bot).is_ok() {
            return Some(pos);
        }
    }
}
