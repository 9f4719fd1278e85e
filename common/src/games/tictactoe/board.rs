use std::fmt;

use super::types::{BOARD_SIZE, CELL_COUNT, Cell, Position};

/// Edge cells read pairwise around the center, each pair touching one corner.
pub const DIAMOND_CELLS: [[Position; 2]; 4] = [
    [Position::new(1, 0), Position::new(0, 1)],
    [Position::new(0, 1), Position::new(1, 2)],
    [Position::new(1, 2), Position::new(2, 1)],
    [Position::new(2, 1), Position::new(1, 0)],
];

/// A flattened run of cells used as a lookup key against fixed patterns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineString(Vec<Cell>);

impl LineString {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self(cells)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, pattern: &[Cell]) -> bool {
        self.0.as_slice() == pattern
    }
}

impl fmt::Display for LineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.0 {
            write!(f, "{}", cell.to_notation())?;
        }
        Ok(())
    }
}

/// Which straight line of the board a [`LineString`] was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Row(usize),
    Column(usize),
    /// `(0,0)`, `(1,1)`, `(2,2)`
    DescendingDiagonal,
    /// `(0,2)`, `(1,1)`, `(2,0)`
    AscendingDiagonal,
}

impl LineKind {
    /// Board position of the `index`-th cell along this line.
    pub fn position_at(self, index: usize) -> Position {
        match self {
            LineKind::Row(row) => Position::new(row, index),
            LineKind::Column(col) => Position::new(index, col),
            LineKind::DescendingDiagonal => Position::new(index, index),
            LineKind::AscendingDiagonal => Position::new(index, BOARD_SIZE - 1 - index),
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineKind::Row(row) => write!(f, "row {}", row),
            LineKind::Column(col) => write!(f, "column {}", col),
            LineKind::DescendingDiagonal => write!(f, "descending diagonal"),
            LineKind::AscendingDiagonal => write!(f, "ascending diagonal"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses nine `V`/`X`/`O` characters in row-major order. Whitespace and
    /// `/` are ignored, so `"XXV/OOV/VVV"` is accepted.
    pub fn from_notation(notation: &str) -> Result<Self, String> {
        let symbols: Vec<char> = notation
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();

        if symbols.len() != CELL_COUNT {
            return Err(format!(
                "Board notation '{}' must contain {} cells, got {}",
                notation,
                CELL_COUNT,
                symbols.len()
            ));
        }

        let mut board = Board::new();
        for (index, symbol) in symbols.into_iter().enumerate() {
            let cell = Cell::from_notation(symbol).ok_or_else(|| {
                format!("Invalid cell '{}' in board notation '{}'", symbol, notation)
            })?;
            board.cells[index / BOARD_SIZE][index % BOARD_SIZE] = cell;
        }
        Ok(board)
    }

    pub fn to_notation(&self) -> String {
        self.all_cells().to_string()
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    pub(super) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    pub fn rows(&self) -> [LineString; BOARD_SIZE] {
        std::array::from_fn(|row| self.read_line(LineKind::Row(row)))
    }

    pub fn columns(&self) -> [LineString; BOARD_SIZE] {
        std::array::from_fn(|col| self.read_line(LineKind::Column(col)))
    }

    pub fn descending_diagonal(&self) -> LineString {
        self.read_line(LineKind::DescendingDiagonal)
    }

    pub fn ascending_diagonal(&self) -> LineString {
        self.read_line(LineKind::AscendingDiagonal)
    }

    pub fn read_line(&self, kind: LineKind) -> LineString {
        LineString::new(
            (0..BOARD_SIZE)
                .map(|index| self.get(kind.position_at(index)))
                .collect(),
        )
    }

    /// The whole board, row by row.
    pub fn all_cells(&self) -> LineString {
        LineString::new(self.cells.iter().flatten().copied().collect())
    }

    pub fn diamonds(&self) -> [LineString; 4] {
        DIAMOND_CELLS.map(|pair| LineString::new(vec![self.get(pair[0]), self.get(pair[1])]))
    }

    /// Rows, then columns, then the descending and ascending diagonals.
    /// Every scan over the board follows this order.
    pub fn winning_lines(&self) -> Vec<(LineKind, LineString)> {
        let kinds = (0..BOARD_SIZE)
            .map(LineKind::Row)
            .chain((0..BOARD_SIZE).map(LineKind::Column))
            .chain([LineKind::DescendingDiagonal, LineKind::AscendingDiagonal]);

        kinds.map(|kind| (kind, self.read_line(kind))).collect()
    }

    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Cell::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells
            .iter()
            .any(|row| row.iter().any(|&cell| cell == Cell::Empty))
    }

    pub fn mark_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let symbols: Vec<String> = cells
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => "   ".to_string(),
                    other => format!(" {} ", other.to_notation()),
                })
                .collect();
            writeln!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}
