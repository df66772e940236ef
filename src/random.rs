//! Random number helpers.
//!
//! The engine owns a single generator and threads it through every draw, so a
//! run is fully determined by its seed.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Default generator type used by the engine.
pub type TspRng = StdRng;

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> TspRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed, drawing a fresh seed when absent.
pub fn rng_from_seed(seed: Option<u64>) -> TspRng {
    create_rng(seed.unwrap_or_else(rand::random))
}

/// Uniform (Fisher–Yates) in-place shuffle.
pub fn shuffle<T, R: Rng + ?Sized>(values: &mut [T], rng: &mut R) {
    values.shuffle(rng);
}

/// Returns a uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    shuffle(&mut perm, rng);
    perm
}
