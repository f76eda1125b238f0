//! Seedable randomness with one independent stream per phase system.
//!
//! Each stream is derived from the master seed the first time a phase asks
//! for it, so reordering unrelated draws in one phase never perturbs
//! another phase's sequence.

use std::collections::HashMap;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub struct RngManager {
    seed: u64,
    master: ChaCha8Rng,
    streams: HashMap<&'static str, ChaCha8Rng>,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            master: ChaCha8Rng::seed_from_u64(seed),
            streams: HashMap::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Borrow the stream for a named phase, deriving it on first use.
    pub fn stream(&mut self, name: &'static str) -> SystemRng<'_> {
        let master = &mut self.master;
        let entry = self.streams.entry(name).or_insert_with(|| {
            let derived = master.gen::<u64>() ^ fold_name(name);
            ChaCha8Rng::seed_from_u64(derived)
        });
        SystemRng { inner: entry }
    }
}

fn fold_name(name: &str) -> u64 {
    name.bytes()
        .fold(0xcbf2_9ce4_8422_2325, |acc: u64, b| {
            (acc ^ b as u64).wrapping_mul(0x0000_0100_0000_01b3)
        })
}

/// Mutable handle onto one named stream.
pub struct SystemRng<'a> {
    inner: &'a mut ChaCha8Rng,
}

impl RngCore for SystemRng<'_> {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = RngManager::new(7);
        let mut b = RngManager::new(7);
        let xs: Vec<u32> = (0..4).map(|_| a.stream("growth").next_u32()).collect();
        let ys: Vec<u32> = (0..4).map(|_| b.stream("growth").next_u32()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn named_streams_are_independent() {
        let mut mgr = RngManager::new(7);
        let a = mgr.stream("growth").next_u64();
        let b = mgr.stream("predation").next_u64();
        assert_ne!(a, b);

        // draining one stream leaves the other's sequence untouched
        let mut fresh = RngManager::new(7);
        let _ = fresh.stream("growth").next_u64();
        for _ in 0..100 {
            let _ = fresh.stream("predation").next_u64();
        }
        let after = {
            let mut again = RngManager::new(7);
            let _ = again.stream("growth").next_u64();
            let _ = again.stream("predation").next_u64();
            again.stream("growth").next_u64()
        };
        assert_eq!(fresh.stream("growth").next_u64(), after);
    }
}
