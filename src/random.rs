//! Seeded RNG construction.
//!
//! Every stochastic routine in the crate takes an explicit `&mut impl Rng`
//! handle owned by the caller; this module provides the single place where
//! such a handle is created from a seed, so repeated runs reseed the same
//! generator type and stay bit-for-bit reproducible.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a reproducible RNG from a 64-bit seed.
///
/// Two generators built from the same seed produce identical streams, which
/// is what the multi-run evaluation protocol relies on (`base_seed + i` per
/// repetition).
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
