use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::tictactoe::{BOARD_SIZE, Position};

/// Seeded random source owned by one game session.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// `true` with the given probability, clamped to `[0, 1]`.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability.clamp(0.0, 1.0))
    }

    /// Any cell of the board, occupied or not.
    pub fn random_position(&mut self) -> Position {
        Position::new(
            self.random_range(0..BOARD_SIZE),
            self.random_range(0..BOARD_SIZE),
        )
    }
}

impl std::fmt::Debug for SessionRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRng").field("seed", &self.seed).finish()
    }
}
