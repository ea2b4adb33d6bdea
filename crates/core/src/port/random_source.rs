// Random Source Port (for deterministic testing)

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Uniform integer source used to fabricate mock queue positions
pub trait RandomSource: Send + Sync {
    /// Uniform integer in `[low, high]`; returns `low` when the range is empty
    fn next_in_range(&self, low: u32, high: u32) -> u32;
}

/// Thread-local RNG (production)
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn next_in_range(&self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Seeded RNG, reproducible across runs with the same seed
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn next_in_range(&self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        // A poisoned lock still holds a usable RNG
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(low..=high)
    }
}

pub mod mocks {
    use super::*;
    use std::collections::VecDeque;

    /// Replays scripted values (clamped into the requested range unless
    /// built with `unclamped`), then falls back to `low` once exhausted
    pub struct ScriptedRandomSource {
        values: Mutex<VecDeque<u32>>,
        clamp: bool,
    }

    impl ScriptedRandomSource {
        pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
            Self {
                values: Mutex::new(values.into_iter().collect()),
                clamp: true,
            }
        }

        /// Returns the values verbatim, for draws a real source never makes
        pub fn unclamped(values: impl IntoIterator<Item = u32>) -> Self {
            Self {
                clamp: false,
                ..Self::new(values)
            }
        }
    }

    impl RandomSource for ScriptedRandomSource {
        fn next_in_range(&self, low: u32, high: u32) -> u32 {
            match self.values.lock().unwrap().pop_front() {
                Some(v) if self.clamp => v.clamp(low, high.max(low)),
                Some(v) => v,
                None => low,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::ScriptedRandomSource;
    use super::*;

    #[test]
    fn test_thread_source_stays_in_range() {
        let source = ThreadRandomSource;
        for _ in 0..500 {
            let v = source.next_in_range(1, 8);
            assert!((1..=8).contains(&v));
        }
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let a = SeededRandomSource::new(42);
        let b = SeededRandomSource::new(42);
        let xs: Vec<u32> = (0..10).map(|_| a.next_in_range(1, 50)).collect();
        let ys: Vec<u32> = (0..10).map(|_| b.next_in_range(1, 50)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|v| (1..=50).contains(v)));
    }

    #[test]
    fn test_degenerate_range_returns_low() {
        assert_eq!(ThreadRandomSource.next_in_range(3, 3), 3);
        assert_eq!(SeededRandomSource::new(1).next_in_range(9, 2), 9);
    }

    #[test]
    fn test_scripted_source_clamps_and_exhausts() {
        let source = ScriptedRandomSource::new([99, 0, 4]);
        assert_eq!(source.next_in_range(1, 50), 50);
        assert_eq!(source.next_in_range(1, 8), 1);
        assert_eq!(source.next_in_range(1, 8), 4);
        assert_eq!(source.next_in_range(1, 8), 1);
    }

    #[test]
    fn test_unclamped_source_returns_values_verbatim() {
        let source = ScriptedRandomSource::unclamped([0, 99]);
        assert_eq!(source.next_in_range(1, 8), 0);
        assert_eq!(source.next_in_range(1, 50), 99);
        assert_eq!(source.next_in_range(3, 8), 3);
    }
}
