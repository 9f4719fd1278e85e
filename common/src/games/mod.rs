mod renderer;
mod session_rng;

pub mod tictactoe;

pub use renderer::GameRenderer;
pub use session_rng::SessionRng;
