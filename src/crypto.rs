// src/crypto.rs
use rand::rngs::OsRng;
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

/// Source of uniformly distributed 32-bit integers.
///
/// Production code uses [`OsRandom`]; tests and reproducible runs inject a
/// seeded or fixed-sequence source.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

// Operating system CSPRNG
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_u32(&mut self) -> u32 {
        OsRng.next_u32()
    }
}

/// Deterministic ChaCha20 stream, for reproducible output.
#[derive(Debug, Clone)]
pub struct SeededRandom(ChaCha20Rng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }
}

/// Uniform index in `0..n` using rejection sampling.
///
/// Draws landing in the top `2^32 mod n` values are discarded so every index
/// is equally likely. Panics if `n` is zero or larger than `2^32`.
pub fn uniform_index<R: RandomSource + ?Sized>(rng: &mut R, n: usize) -> usize {
    const SPAN: u64 = 1 << 32;

    let n = n as u64;
    assert!(n > 0 && n <= SPAN, "range must be within 1..=2^32");
    let limit = SPAN - SPAN % n;
    loop {
        let x = u64::from(rng.next_u32());
        if x < limit {
            return (x % n) as usize;
        }
    }
}

// Fisher-Yates, driven by the given source
pub fn shuffle<T, R: RandomSource + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = uniform_index(rng, i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;

    /// Replays a fixed sequence of values, wrapping around at the end.
    pub struct SequenceRandom {
        values: Vec<u32>,
        pos: usize,
    }

    impl SequenceRandom {
        pub fn new(values: Vec<u32>) -> Self {
            assert!(!values.is_empty());
            Self { values, pos: 0 }
        }

        pub fn draws(&self) -> usize {
            self.pos
        }
    }

    impl RandomSource for SequenceRandom {
        fn next_u32(&mut self) -> u32 {
            let value = self.values[self.pos % self.values.len()];
            self.pos += 1;
            value
        }
    }
}
