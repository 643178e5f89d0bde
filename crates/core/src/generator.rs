//! Random number bridge
//!
//! The same boundary that carries descriptions also carries a number
//! generator: a wrapper owns one generator and forwards every request to
//! it. Ranges are inclusive on both ends.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{LayerError, Result};
use crate::traits::NumberGenerator;

fn check_range(min: i64, max: i64) -> Result<()> {
    if min > max {
        return Err(LayerError::InvalidRange { min, max });
    }
    Ok(())
}

/// Generator backed by the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandomGenerator;

impl NumberGenerator for ThreadRandomGenerator {
    fn generate(&mut self, min: i64, max: i64) -> Result<i64> {
        check_range(min, max)?;
        Ok(rand::thread_rng().gen_range(min..=max))
    }
}

/// Deterministic generator seeded once at construction
#[derive(Debug, Clone)]
pub struct SeededGenerator {
    rng: StdRng,
}

impl SeededGenerator {
    /// Create a generator whose sequence is fixed by `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl NumberGenerator for SeededGenerator {
    fn generate(&mut self, min: i64, max: i64) -> Result<i64> {
        check_range(min, max)?;
        Ok(self.rng.gen_range(min..=max))
    }
}

/// Boundary-facing owner of a number generator
#[derive(Debug, Clone, Default)]
pub struct GeneratorWrapper<G = ThreadRandomGenerator> {
    generator: G,
}

impl<G: NumberGenerator> GeneratorWrapper<G> {
    /// Wrap an existing generator
    pub fn with_generator(generator: G) -> Self {
        Self { generator }
    }

    /// Draw a value in `min..=max` from the wrapped generator
    ///
    /// # Errors
    ///
    /// Returns the wrapped generator's error unchanged.
    pub fn generate(&mut self, min: i64, max: i64) -> Result<i64> {
        self.generator.generate(min, max)
    }
}

impl<G: NumberGenerator> NumberGenerator for GeneratorWrapper<G> {
    fn generate(&mut self, min: i64, max: i64) -> Result<i64> {
        GeneratorWrapper::generate(self, min, max)
    }
}
