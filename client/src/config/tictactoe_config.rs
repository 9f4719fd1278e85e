use common::games::tictactoe::{Difficulty, TicTacToeSessionSettings};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl From<&TicTacToeConfig> for TicTacToeSessionSettings {
    fn from(config: &TicTacToeConfig) -> Self {
        TicTacToeSessionSettings::new(config.difficulty, config.seed)
    }
}
