//! Random number generation with hardware entropy.
//!
//! Casual-grade randomness: the state is reseeded with cycle-counter jitter on
//! every draw and passed through a SplitMix64 finalizer. It is not a CSPRNG.

mod hw;

use zeroize::Zeroize;

pub fn entropy_source() -> &'static str {
    hw::source_name()
}

/// A stream of 64-bit random values.
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    ///
    /// Draws above the largest multiple of `bound` are rejected so no index
    /// is favoured by the modulo.
    fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "below() needs a non-empty range");
        let bound = bound as u64;
        let limit = u64::MAX - (u64::MAX % bound);
        loop {
            let x = self.next_u64();
            if x < limit {
                return (x % bound) as usize;
            }
        }
    }
}

// =============================================================================
// RNG
// =============================================================================

/// Odd 64-bit multipliers; the entropy mix picks one per step.
const MULTIPLIERS: [u64; 5] = [
    0x5851_F42D_4C95_7F2D,
    0x9E37_79B9_7F4A_7C15,
    0xD134_2543_DE82_EF95,
    0xAF25_1AF3_B0F0_25B5,
    0xF135_7AEA_2E62_A9C5,
];

pub struct Rand {
    state: u64,
}

impl Rand {
    pub fn new() -> Self {
        Self {
            state: hw::entropy(),
        }
    }
}

impl Default for Rand {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for Rand {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let ent = hw::entropy();

        // Mix entropy into multiplier selection
        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % MULTIPLIERS.len() as u64) as usize;

        // State transition: rotate, multiply, XOR entropy
        self.state = self.state.rotate_left(17).wrapping_mul(MULTIPLIERS[idx]) ^ ent;

        // SplitMix64 output finalizer
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

impl Drop for Rand {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Replays a fixed sequence of raw draws, wrapping around.
    pub(crate) struct Scripted {
        values: Vec<u64>,
        pos: usize,
    }

    impl Scripted {
        pub(crate) fn new(values: &[u64]) -> Self {
            Self {
                values: values.to_vec(),
                pos: 0,
            }
        }
    }

    impl RandomSource for Scripted {
        fn next_u64(&mut self) -> u64 {
            let v = self.values[self.pos % self.values.len()];
            self.pos += 1;
            v
        }
    }

    #[test]
    fn below_rejects_biased_tail() {
        // u64::MAX falls in the rejected tail for bound 3, so the next draw is used.
        let mut rng = Scripted::new(&[u64::MAX, 7]);
        assert_eq!(rng.below(3), 1);
    }

    #[test]
    fn below_with_bound_one_is_zero() {
        let mut rng = Scripted::new(&[12345]);
        assert_eq!(rng.below(1), 0);
    }

    #[test]
    fn rand_stays_in_range() {
        let mut rng = Rand::new();
        for bound in 1..100 {
            assert!(rng.below(bound) < bound);
        }
    }

    #[test]
    fn rand_is_not_constant() {
        let mut rng = Rand::new();
        let first = rng.next_u64();
        assert!((0..64).any(|_| rng.next_u64() != first));
    }

    #[test]
    fn entropy_source_is_named() {
        assert!(!entropy_source().is_empty());
    }
}
