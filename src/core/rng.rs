//! Seeded randomness for shuffles and scenario synthesis.
//!
//! A game takes one `u64` seed. Each consumer gets its own named stream
//! (`"deck"` for dealing and reshuffling, `"scenario"` for state synthesis),
//! so drawing extra numbers in one never shifts the other.
//!
//! ```
//! use uno_engine::core::GameRng;
//!
//! let mut a = GameRng::new(42).for_context("deck");
//! let mut b = GameRng::new(42).for_context("deck");
//! assert_eq!(a.gen_range_usize(0..108), b.gen_range_usize(0..108));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream tagged with the seed that produced it.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive the stream for a named consumer.
    ///
    /// Stream seeds are mixed with FNV-1a and a splitmix finalizer rather
    /// than `std`'s hasher, whose output may change between releases.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hash = 0xcbf2_9ce4_8422_2325_u64 ^ self.seed;
        for byte in context.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x0100_0000_01b3);
        }
        Self::new(splitmix(hash))
    }

    /// Uniform index in `range`. Panics on an empty range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}

fn splitmix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
