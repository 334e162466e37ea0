//! Seeded pseudo-random stream for the permutation shuffle
//!
//! Marsaglia xorshift32 (shifts 13, 17, 5). The state is the seed's bit
//! pattern; xorshift never leaves the all-zero state, so seed 0 is remapped
//! to a fixed non-zero constant.

/// State used in place of a zero seed
const ZERO_SEED_STATE: u32 = 0x9E37_79B9;

#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: i32) -> Self {
        let state = seed as u32;
        Self {
            state: if state == 0 { ZERO_SEED_STATE } else { state },
        }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform draw in `[0, max]` inclusive.
    ///
    /// Draws below `2^32 mod (max + 1)` are rejected so every outcome is
    /// equally likely.
    pub fn next_inclusive(&mut self, max: u32) -> u32 {
        let Some(bound) = max.checked_add(1) else {
            return self.next_u32();
        };
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let r = self.next_u32();
            if r >= threshold {
                return r % bound;
            }
        }
    }
}
