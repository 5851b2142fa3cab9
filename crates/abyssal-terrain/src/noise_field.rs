//! Seeded coherent-noise primitive.
//!
//! Wraps a simplex noise source behind a small owned type so that every
//! consumer receives an explicit, seed-parameterized instance instead of
//! reaching for hidden global state.

use noise::{NoiseFn, Simplex};

/// A seeded 2D/3D coherent-noise field.
///
/// Outputs are deterministic for a fixed seed, continuous in the inputs,
/// and lie in `[-1, 1]`. Sampling has no side effects and the same
/// instance can be queried millions of times.
pub struct NoiseField {
    simplex: Simplex,
    seed: u32,
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField").field("seed", &self.seed).finish()
    }
}

impl Clone for NoiseField {
    fn clone(&self) -> Self {
        Self::with_seed(self.seed)
    }
}

impl NoiseField {
    /// Creates a noise field from the given seed.
    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        Self {
            simplex: Simplex::new(seed),
            seed,
        }
    }

    /// Returns the seed this field was built from.
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Samples 2D noise at `(x, y)`. Returns a value in `[-1, 1]`.
    #[must_use]
    pub fn sample2(&self, x: f64, y: f64) -> f64 {
        self.simplex.get([x, y])
    }

    /// Samples 3D noise at `(x, y, z)`. Returns a value in `[-1, 1]`.
    #[must_use]
    pub fn sample3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.simplex.get([x, y, z])
    }
}
