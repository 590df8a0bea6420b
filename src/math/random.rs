use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform random values consumed by layer initialization and by
/// the per-epoch shuffle.
///
/// Every `rand::RngCore` implements this, so a seeded `ChaCha8Rng` gives
/// reproducible training runs.
pub trait UniformSource {
    /// A value in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// An index in `[0, bound)`. `bound` must be non-zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RngCore + ?Sized> UniformSource for R {
    fn next_uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Deterministic generator for a given seed.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Generator seeded from `seed` when present, from OS entropy otherwise.
pub fn from_seed_or_entropy(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => seeded(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
