use crate::games::SessionRng;
use super::types::Difficulty;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub difficulty: Difficulty,
    /// Fixed seed for reproducible bot play; a fresh one is drawn when unset.
    pub seed: Option<u64>,
}

impl TicTacToeSessionSettings {
    pub fn new(difficulty: Difficulty, seed: Option<u64>) -> Self {
        Self { difficulty, seed }
    }

    /// Random source for the `game_index`-th game of a session. Seeded
    /// sessions give every game its own, still reproducible, sequence.
    pub fn create_rng(&self, game_index: u64) -> SessionRng {
        match self.seed {
            Some(seed) => SessionRng::new(seed.wrapping_add(game_index)),
            None => SessionRng::from_random(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_settings_offset_seed_per_game() {
        let settings = TicTacToeSessionSettings::new(Difficulty::Hard, Some(100));

        assert_eq!(settings.create_rng(0).seed(), 100);
        assert_eq!(settings.create_rng(3).seed(), 103);
    }

    #[test]
    fn test_default_settings_are_easy_and_unseeded() {
        let settings = TicTacToeSessionSettings::default();

        assert_eq!(settings.difficulty, Difficulty::Easy);
        assert_eq!(settings.seed, None);
    }
}
