use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded randomness for session-level decisions. The seed is kept so a
/// session can be reproduced from its log.
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

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut first = SessionRng::new(42);
        let mut second = SessionRng::new(42);
        let a: Vec<bool> = (0..32).map(|_| first.random_bool()).collect();
        let b: Vec<bool> = (0..32).map(|_| second.random_bool()).collect();
        assert_eq!(a, b);
        assert_eq!(first.seed(), 42);
    }
}
