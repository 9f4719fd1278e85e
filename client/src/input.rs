use common::games::tictactoe::{BOARD_SIZE, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Position),
    NewGame,
    Board,
    Help,
    Quit,
}

pub const HELP: &str = "Commands:
  <row> <col>   mark a cell, rows and columns from 0 to 2 (\"1 2\", \"1,2\" or \"12\")
  board         show the board
  new           start a new game
  help          show this help
  quit          leave";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => Err("Enter a move or 'help'".to_string()),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "n" | "new" | "restart" => Ok(Command::NewGame),
        "b" | "board" => Ok(Command::Board),
        "h" | "help" | "?" => Ok(Command::Help),
        _ => parse_position(trimmed).map(Command::Move),
    }
}

fn parse_position(text: &str) -> Result<Position, String> {
    let symbols: Vec<char> = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();

    let [row, col] = symbols.as_slice() else {
        return Err(format!("Cannot read '{}' as a move, try 'help'", text));
    };

    let to_index = |c: &char| {
        c.to_digit(10)
            .map(|d| d as usize)
            .filter(|&d| d < BOARD_SIZE)
            .ok_or_else(|| {
                format!("'{}' is not a row or column between 0 and {}", c, BOARD_SIZE - 1)
            })
    };

    Ok(Position::new(to_index(row)?, to_index(col)?))
}
