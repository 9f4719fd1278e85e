use super::board::LineString;
use super::types::Cell;

const E: Cell = Cell::Empty;
const B: Cell = Cell::BotMark;

/// Two bot marks and a gap, with the index of the gap. Only these exact
/// orderings count as a finishing move.
const COMPLETIONS: [([Cell; 3], usize); 3] = [
    ([E, B, B], 0),
    ([B, E, B], 1),
    ([B, B, E], 2),
];

/// Index within `line` where the bot completes three in a row, if any.
pub fn find_offensive_completion(line: &LineString) -> Option<usize> {
    COMPLETIONS
        .iter()
        .find(|(pattern, _)| line.matches(pattern))
        .map(|&(_, index)| index)
}
