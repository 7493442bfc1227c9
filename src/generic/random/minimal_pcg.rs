//! A simple pseudorandom number generator.
//!
//! Specifically, the *really* minimal C PCG32 implementation from <https://www.pcg-random.org/>, implemented to satisfy the [RngCore] and [SeedableRng] traits.[^note]
//!
//! PCG(32) was chosen as the default source of (pseudo)random numbers as it is simple, fast, and has some nice supporting documentation.
//!
//! Each [context](crate::context) owns its source of rng, seeded from the configuration of the context.
//! So, contexts with the same configuration make the same (random) choices, and no state is shared between contexts.
//!
//! [^note]: At the time of writing, the C implementation is at the top of the [download page](https://www.pcg-random.org/download.html).

use rand::SeedableRng;
use rand_core::{impls, RngCore};

/// State and increment
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

/// The multiplier of the underlying linear congruential generator.
const MULTIPLIER: u64 = 6364136223846793005;

/// The default stream of the generator, which must be odd.
const INCREMENT: u64 = 1442695040888963407;

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state.wrapping_mul(MULTIPLIER).wrapping_add(self.inc);

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
        let mut pcg = Self {
            state: 0,
            inc: INCREMENT,
        };
        pcg.next_u32();
        pcg.state = pcg.state.wrapping_add(u64::from_le_bytes(seed));
        pcg.next_u32();
        pcg
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::from_seed(state.to_le_bytes())
    }
}
