mod terminal_renderer;
mod tictactoe_runner;

pub use terminal_renderer::TerminalRenderer;
pub use tictactoe_runner::run_tictactoe_game;
