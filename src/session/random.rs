use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of randomness for practice sessions.
///
/// Kept object safe so the app can hold a `Box<dyn Randomizer>` and tests can
/// substitute a scripted one.
pub trait Randomizer {
    /// Uniform in-place permutation.
    fn shuffle(&mut self, items: &mut [String]);

    /// Uniform integer in `low..=high`.
    fn uniform_int(&mut self, low: u32, high: u32) -> u32;
}

pub struct SeededRandomizer {
    rng: SmallRng,
}

impl SeededRandomizer {
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Randomizer for SeededRandomizer {
    fn shuffle(&mut self, items: &mut [String]) {
        items.shuffle(&mut self.rng);
    }

    fn uniform_int(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use super::Randomizer;

    /// Deterministic stand-in: shuffles into a given key order and replays a
    /// fixed integer script, falling back to `low` once it runs out.
    #[derive(Default)]
    pub struct ScriptedRandomizer {
        order: Vec<String>,
        ints: VecDeque<u32>,
        drawn: usize,
    }

    impl ScriptedRandomizer {
        pub fn new() -> Self {
            Self::default()
        }

        /// Listed keys come first in the given order; the rest keep their
        /// relative order.
        pub fn with_order(mut self, order: &[&str]) -> Self {
            self.order = order.iter().map(|s| s.to_string()).collect();
            self
        }

        pub fn with_ints(mut self, ints: &[u32]) -> Self {
            self.ints = ints.iter().copied().collect();
            self
        }

        pub fn ints_drawn(&self) -> usize {
            self.drawn
        }
    }

    impl Randomizer for ScriptedRandomizer {
        fn shuffle(&mut self, items: &mut [String]) {
            let order = &self.order;
            items.sort_by_key(|item| {
                order
                    .iter()
                    .position(|o| o == item)
                    .unwrap_or(usize::MAX)
            });
        }

        fn uniform_int(&mut self, low: u32, high: u32) -> u32 {
            self.drawn += 1;
            self.ints
                .pop_front()
                .map_or(low, |v| v.clamp(low, high))
        }
    }
}
