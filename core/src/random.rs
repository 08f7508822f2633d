//! Random-source seam for film selection.
//!
//! The client takes an injected `RandomSource` instead of reaching for
//! ambient randomness, so tests can pin the draw deterministically.

use rand::Rng;

/// Supplies uniform draws from `[0, 1)`.
pub trait RandomSource: Send + Sync {
    fn next(&self) -> f64;
}

/// Production source over the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next(&self) -> f64 {
        rand::rng().random()
    }
}

/// Always returns the same value. Test use only, but kept in the public API
/// so downstream crates can pin selection in their own tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_random_stays_in_unit_interval() {
        let source = ThreadRandom;
        for _ in 0..1000 {
            let draw = source.next();
            assert!((0.0..1.0).contains(&draw), "draw out of range: {draw}");
        }
    }

    #[test]
    fn fixed_random_returns_its_value() {
        assert_eq!(FixedRandom(0.25).next(), 0.25);
        assert_eq!(FixedRandom(0.0).next(), 0.0);
    }
}
