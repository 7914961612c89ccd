//! RNG module - seeded randomness for question generation
//!
//! A small LCG drives everything random in a session: the target draw
//! order, distractor sampling, and option shuffling. Seeding it makes
//! whole sessions reproducible.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates (uniform permutation)
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Session-long target order: every pool index once, pre-shuffled, consumed
/// without replacement. Refills with a fresh shuffle if a session ever
/// outlives the pool.
#[derive(Debug, Clone)]
pub struct TargetDeck {
    order: Vec<usize>,
    next: usize,
}

impl TargetDeck {
    /// Build and shuffle a deck over `pool_len` entries.
    pub fn new(pool_len: usize, rng: &mut SimpleRng) -> Self {
        let mut order: Vec<usize> = (0..pool_len).collect();
        rng.shuffle(&mut order);
        Self { order, next: 0 }
    }

    /// Draw the next target index.
    pub fn draw(&mut self, rng: &mut SimpleRng) -> usize {
        if self.next >= self.order.len() {
            rng.shuffle(&mut self.order);
            self.next = 0;
        }
        let index = self.order[self.next];
        self.next += 1;
        index
    }

    /// Indices left before a reshuffle.
    pub fn remaining(&self) -> usize {
        self.order.len() - self.next
    }
}
