//! Seedable random source, bounded draws, and in-place shuffling.
//!
//! There is no global generator: callers construct an [`Rng`] and pass it
//! where randomness is needed. Seeded generators replay the same sequence,
//! which keeps tests deterministic.

use std::sync::{Arc, Mutex, PoisonError};
use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng};
use crate::error::RangeError;

/// Seedable pseudo-random number generator.
#[derive(Debug, Clone)]
pub struct Rng {
    inner: StdRng,
}

impl Rng {
    /// Deterministic generator: the same seed yields the same sequence.
    pub fn new(seed: u64) -> Self {
        Rng {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Rng {
            inner: StdRng::from_entropy(),
        }
    }

    /// Uniform integer in [min, max).
    pub fn range_i32(&mut self, min: i32, max: i32) -> Result<i32, RangeError> {
        if min >= max {
            return Err(RangeError::Empty { min, max });
        }
        Ok(self.inner.gen_range(min..max))
    }

    /// Uniform index in [0, upper_bound]. `upper_bound` is inclusive.
    fn index_through(&mut self, upper_bound: usize) -> usize {
        self.inner.gen_range(0..=upper_bound)
    }

    /// Uniform float in [0, 1).
    pub fn unit_f32(&mut self) -> f32 {
        self.inner.gen::<f32>()
    }

    /// Float in [min, max), scaled from a [0, 1) draw.
    ///
    /// Plain `unit * (max - min) + min` can round up to `max`; the uniform
    /// sampler redraws in that case. A reversed or empty range falls back to
    /// the plain scaling, so `range_f32(5.0, 5.0)` is 5.0.
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        if min < max {
            self.inner.gen_range(min..max)
        } else {
            self.unit_f32() * (max - min) + min
        }
    }

    /// Shuffle in place; every permutation is equally likely.
    ///
    /// Walks from the last index down to 1, swapping each slot with a uniform
    /// pick from itself and everything before it.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        log::trace!("shuffling {} items", items.len());
        for i in (1..items.len()).rev() {
            let k = self.index_through(i);
            items.swap(i, k);
        }
    }
}

/// In-place shuffle as a method on slices (and anything that derefs to one).
pub trait Shuffle {
    fn shuffle_with(&mut self, rng: &mut Rng);
}

impl<T> Shuffle for [T] {
    fn shuffle_with(&mut self, rng: &mut Rng) {
        rng.shuffle(self);
    }
}

/// An [`Rng`] that can be shared across threads.
///
/// Each [`SharedRng::with`] call holds the lock for the closure's duration,
/// so a multi-draw sequence is not interleaved with other callers.
#[derive(Debug, Clone)]
pub struct SharedRng {
    inner: Arc<Mutex<Rng>>,
}

impl SharedRng {
    pub fn new(rng: Rng) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut Rng) -> R) -> R {
        // A panic elsewhere cannot leave the generator in a broken state.
        let mut rng = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn rng_deterministic() {
        let mut rng1 = Rng::new(42);
        let mut rng2 = Rng::new(42);
        for _ in 0..10 {
            assert_eq!(rng1.range_i32(0, 1000), rng2.range_i32(0, 1000));
        }
    }

    #[test]
    fn range_i32_stays_in_bounds() {
        let mut rng = Rng::new(7);
        for _ in 0..10_000 {
            let x = rng.range_i32(-5, 5).unwrap();
            assert!((-5..5).contains(&x), "{} out of range", x);
        }
    }

    #[test]
    fn range_i32_single_value() {
        let mut rng = Rng::new(1);
        assert_eq!(rng.range_i32(3, 4), Ok(3));
    }

    #[test]
    fn range_i32_rejects_empty() {
        let mut rng = Rng::new(1);
        assert_eq!(rng.range_i32(4, 4), Err(RangeError::Empty { min: 4, max: 4 }));
        assert_eq!(rng.range_i32(9, 2), Err(RangeError::Empty { min: 9, max: 2 }));
    }

    #[test]
    fn floats_stay_in_bounds() {
        let mut rng = Rng::new(3);
        for _ in 0..10_000 {
            let u = rng.unit_f32();
            assert!((0.0..1.0).contains(&u));
            let x = rng.range_f32(-2.0, 8.0);
            assert!((-2.0..8.0).contains(&x), "{} out of range", x);
        }
    }

    #[test]
    fn range_f32_never_returns_max() {
        // f32 spacing at 1e8 is 8, so scaling rounds to `max` about half the time.
        let mut rng = Rng::new(17);
        let (min, max) = (1.0e8_f32, 1.0e8 + 8.0);
        for _ in 0..1_000 {
            let x = rng.range_f32(min, max);
            assert!(x >= min && x < max, "{} out of range", x);
        }
    }

    #[test]
    fn range_f32_degenerate_range() {
        let mut rng = Rng::new(17);
        assert_eq!(rng.range_f32(5.0, 5.0), 5.0);
    }

    #[test]
    fn shuffle_keeps_elements() {
        let mut rng = Rng::new(99);
        let mut items: Vec<u32> = (0..50).collect();
        items.shuffle_with(&mut rng);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_handles_tiny_slices() {
        let mut rng = Rng::new(5);
        let mut empty: [u8; 0] = [];
        rng.shuffle(&mut empty);
        let mut one = [1];
        rng.shuffle(&mut one);
        assert_eq!(one, [1]);
    }

    #[test]
    fn shuffle_permutations_are_uniform() {
        // 3! = 6 orderings, 60_000 trials: expect ~10_000 each.
        let mut rng = Rng::new(2024);
        let mut counts: HashMap<[u8; 3], u32> = HashMap::new();
        for _ in 0..60_000 {
            let mut items = [0u8, 1, 2];
            rng.shuffle(&mut items);
            *counts.entry(items).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        for (perm, n) in counts {
            assert!((9_000..11_000).contains(&n), "{:?} seen {} times", perm, n);
        }
    }

    #[test]
    fn shared_rng_across_threads() {
        let shared = SharedRng::new(Rng::new(11));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    (0..100)
                        .map(|_| shared.with(|rng| rng.range_i32(0, 10)).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            for x in handle.join().unwrap() {
                assert!((0..10).contains(&x));
            }
        }
    }
}
