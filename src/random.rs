//! Randomness injected into seeding and sampling.
//!
//! Every randomized routine takes `&mut R` where `R: RandomSource + ?Sized`.
//! Any [`rand::Rng`] qualifies, including `StdRng::seed_from_u64(..)` for
//! reproducible runs and `&mut dyn RngCore` for type-erased generators.
//! Identical generator state and an identical call sequence always produce
//! identical draws.
//!
//! There are no separate system-generator variants of the free functions;
//! pass `&mut rand::rng()` for an OS-seeded thread-local generator.

use rand::Rng;

/// A source of uniform draws.
pub trait RandomSource {
    /// A uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// A uniform index in `0..upper`. `upper` must be non-zero.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn next_index(&mut self, upper: usize) -> usize {
        debug_assert!(upper > 0);
        self.random_range(0..upper)
    }
}
