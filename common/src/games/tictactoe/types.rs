use serde::{Deserialize, Serialize};
use std::fmt;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    PlayerMark,
    BotMark,
}

impl Cell {
    pub fn to_notation(self) -> char {
        match self {
            Cell::Empty => 'V',
            Cell::PlayerMark => 'X',
            Cell::BotMark => 'O',
        }
    }

    pub fn from_notation(c: char) -> Option<Cell> {
        match c {
            'V' => Some(Cell::Empty),
            'X' => Some(Cell::PlayerMark),
            'O' => Some(Cell::BotMark),
            _ => None,
        }
    }
}

/// Who a mark belongs to. The human always plays `X`, the bot `O`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkOwner {
    Player,
    Bot,
}

impl MarkOwner {
    pub fn mark(self) -> Cell {
        match self {
            MarkOwner::Player => Cell::PlayerMark,
            MarkOwner::Bot => Cell::BotMark,
        }
    }
}

impl fmt::Display for MarkOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark().to_notation())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const CENTER: Position = Position { row: 1, col: 1 };

    /// Coordinates must be below `BOARD_SIZE`; use [`Position::try_new`] for
    /// unchecked input.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn try_new(row: usize, col: usize) -> Result<Self, String> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(format!(
                "Position ({}, {}) is out of bounds, rows and columns go from 0 to {}",
                row,
                col,
                BOARD_SIZE - 1
            ));
        }
        Ok(Self { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    PlayerWon,
    BotWon,
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Fixed message shown to the human, `None` while the game goes on.
    pub fn message(self) -> Option<&'static str> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::PlayerWon => Some("You won!"),
            GameStatus::BotWon => Some("You lost!"),
            GameStatus::Draw => Some("Draw!"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    /// Probability that an easy bot ignores its rules for a turn.
    pub const EASY_RANDOM_CHANCE: f64 = 0.3;

    pub fn random_move_chance(self) -> f64 {
        match self {
            Difficulty::Easy => Self::EASY_RANDOM_CHANCE,
            Difficulty::Hard => 0.0,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}
