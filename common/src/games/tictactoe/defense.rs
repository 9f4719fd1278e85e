use super::board::LineString;
use super::types::{Cell, Position};

const E: Cell = Cell::Empty;
const P: Cell = Cell::PlayerMark;
const B: Cell = Cell::BotMark;

/// What the defense table found in a line-string. Only [`DefenseSignal::Block`]
/// carries its own answer; the others are resolved against the place the
/// line was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefenseSignal {
    /// The player needs one more mark; block at this index of the line.
    Block(usize),
    /// Bot mark followed by two player marks.
    BotFirstPair,
    /// Player on two opposite corners of the descending diagonal, bot on the center.
    CrossDescending,
    /// Player on two opposite corners of the ascending diagonal, bot on the center.
    CrossAscending,
    /// Both cells of a diamond pair taken by the player.
    DiamondPair,
}

const THREE_CELL_SIGNALS: [([Cell; 3], DefenseSignal); 4] = [
    ([E, P, P], DefenseSignal::Block(0)),
    ([P, E, P], DefenseSignal::Block(1)),
    ([P, P, E], DefenseSignal::Block(2)),
    ([B, P, P], DefenseSignal::BotFirstPair),
];

const FULL_BOARD_SIGNALS: [([Cell; 9], DefenseSignal); 2] = [
    ([P, E, E, E, B, E, E, E, P], DefenseSignal::CrossDescending),
    ([E, E, P, E, B, E, P, E, E], DefenseSignal::CrossAscending),
];

const DIAMOND_SIGNAL: [Cell; 2] = [P, P];

/// Reply to a cross pattern on the full board.
pub const CROSS_REPLY: Position = Position::new(1, 0);
/// Reply to [`DefenseSignal::BotFirstPair`] on the descending diagonal.
pub const DESCENDING_PAIR_REPLY: Position = Position::new(0, 2);
/// Reply to [`DefenseSignal::BotFirstPair`] on the ascending diagonal.
pub const ASCENDING_PAIR_REPLY: Position = Position::new(0, 0);
/// Corner answering each diamond, indexed like `DIAMOND_CELLS`.
pub const DIAMOND_REPLIES: [Position; 4] = [
    Position::new(0, 0),
    Position::new(0, 2),
    Position::new(2, 2),
    Position::new(2, 0),
];
/// Reply when the player opens on the center.
pub const CENTER_OPENING_REPLY: Position = Position::new(0, 2);

pub fn find_defensive_block(line: &LineString) -> Option<DefenseSignal> {
    match line.len() {
        3 => THREE_CELL_SIGNALS
            .iter()
            .find(|(pattern, _)| line.matches(pattern))
            .map(|&(_, signal)| signal),
        9 => FULL_BOARD_SIGNALS
            .iter()
            .find(|(pattern, _)| line.matches(pattern))
            .map(|&(_, signal)| signal),
        2 if line.matches(&DIAMOND_SIGNAL) => Some(DefenseSignal::DiamondPair),
        _ => None,
    }
}

/// Block index for generic line scans, ignoring the composite signals.
pub fn find_block_index(line: &LineString) -> Option<usize> {
    match find_defensive_block(line) {
        Some(DefenseSignal::Block(index)) => Some(index),
        _ => None,
    }
}
