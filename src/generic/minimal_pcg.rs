//! A simple pseudorandom number generator.
//!
//! Specifically, the minimal PCG32 generator (XSH RR output over a 64 bit linear congruential state) described at <https://www.pcg-random.org/>, implemented to satisfy the [RngCore] and [SeedableRng] traits.
//!
//! PCG(32) was chosen as the source of (pseudo)random numbers for [random layouts](crate::world::grid::GridWorld::random) as it is simple, fast, and the same seed gives the same layout on every platform.

use rand::SeedableRng;
use rand_core::{impls, RngCore};

/// Multiplier of the underlying linear congruential generator.
const MULTIPLIER: u64 = 6364136223846793005;

/// Increment of the underlying linear congruential generator, any odd value will do.
const INCREMENT: u64 = 1442695040888963407;

/// State and increment.
#[derive(Clone, Debug)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl MinimalPCG32 {
    fn step(&mut self) {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(self.inc);
    }
}

impl Default for MinimalPCG32 {
    fn default() -> Self {
        MinimalPCG32::seed_from_u64(0)
    }
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;
        self.step();

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut rng = Self {
            state: 0,
            inc: INCREMENT,
        };
        rng.step();
        rng.state = rng.state.wrapping_add(u64::from_le_bytes(seed));
        rng.step();
        rng
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    fn draws(seed: u64) -> Vec<u32> {
        let mut rng = MinimalPCG32::seed_from_u64(seed);
        (0..8).map(|_| rng.next_u32()).collect()
    }

    #[test]
    fn same_seed_same_draws() {
        assert_eq!(draws(2), draws(2));
        assert_eq!(draws(73), draws(73));
    }

    #[test]
    fn distinct_seeds_distinct_draws() {
        assert_ne!(draws(2), draws(73));
    }

    #[test]
    fn fill_bytes_is_deterministic() {
        let mut a = MinimalPCG32::seed_from_u64(11);
        let mut b = MinimalPCG32::seed_from_u64(11);
        let mut a_bytes = [0_u8; 13];
        let mut b_bytes = [0_u8; 13];
        a.fill_bytes(&mut a_bytes);
        b.fill_bytes(&mut b_bytes);
        assert_eq!(a_bytes, b_bytes);
    }
}
