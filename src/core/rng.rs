// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector2f};

/// Uniform random generator for Monte Carlo sampling. One instance lives
/// on each rendering thread; the internal state mutates on every draw, so
/// a generator must never be shared between threads.
pub struct LcgRng {
    state: u64,
}

impl LcgRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    /// Uniform draw in [0, 1).
    pub fn next_f64(&mut self) -> Float {
        (self.next_u32() as Float) / ((u32::MAX as Float) + 1.0)
    }

    pub fn next_2d(&mut self) -> Vector2f {
        let x = self.next_f64();
        let y = self.next_f64();
        Vector2f::new(x, y)
    }
}

/* Tests for LcgRng */

#[cfg(test)]
mod tests {
    use super::LcgRng;

    #[test]
    fn test_samples_in_unit_interval() {
        let mut rng = LcgRng::new(42);
        for _ in 0..1024 {
            let u = rng.next_f64();
            assert!(u >= 0.0 && u < 1.0);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = LcgRng::new(1234);
        let mut b = LcgRng::new(1234);
        for _ in 0..64 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = LcgRng::new(1);
        let mut b = LcgRng::new(2);
        let collisions = (0..64).filter(|_| a.next_u32() == b.next_u32()).count();
        assert!(collisions < 8);
    }
}
