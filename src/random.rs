//! Explicitly owned, seedable random source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform draws used by the perturbation operator and the acceptance test.
///
/// Generic over the underlying generator so tests can plug in any
/// [`Rng`]; the default is a seeded [`StdRng`].
///
/// # Examples
///
/// ```
/// use u_anneal::random::RandomSource;
///
/// let mut rng = RandomSource::seeded(7);
/// let x = rng.next_below(8);
/// let y = rng.next_excluding(8, &[x]);
/// assert!(x < 8 && y < 8 && x != y);
/// ```
#[derive(Debug, Clone)]
pub struct RandomSource<R: Rng = StdRng> {
    rng: R,
}

impl RandomSource<StdRng> {
    /// Creates a deterministic source from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomSource<R> {
    /// Wraps an existing generator.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Returns an integer uniformly distributed in `[0, max)`.
    ///
    /// # Panics
    ///
    /// Panics if `max == 0`.
    pub fn next_below(&mut self, max: usize) -> usize {
        assert!(max > 0, "next_below: max must be positive");
        self.rng.random_range(0..max)
    }

    /// Returns an integer uniformly distributed in `[0, max)` that is not
    /// in `excluded`, by rejection sampling.
    ///
    /// # Panics
    ///
    /// Panics if `max == 0` or if `excluded` covers the whole range, since
    /// the sampling loop could never terminate.
    pub fn next_excluding(&mut self, max: usize, excluded: &[usize]) -> usize {
        assert!(max > 0, "next_excluding: max must be positive");
        // Duplicates or out-of-range values can push len() past max without
        // covering the range, so only then do the exact check.
        if excluded.len() >= max {
            assert!(
                (0..max).any(|v| !excluded.contains(&v)),
                "next_excluding: every value in [0, {max}) is excluded"
            );
        }
        loop {
            let v = self.rng.random_range(0..max);
            if !excluded.contains(&v) {
                return v;
            }
        }
    }

    /// Returns a real uniformly distributed in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_below_in_range() {
        let mut rng = RandomSource::seeded(42);
        for _ in 0..1000 {
            assert!(rng.next_below(5) < 5);
        }
    }

    #[test]
    fn test_next_below_covers_range() {
        let mut rng = RandomSource::seeded(42);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            seen[rng.next_below(4)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_next_excluding_never_returns_excluded() {
        let mut rng = RandomSource::seeded(1);
        for _ in 0..1000 {
            let v = rng.next_excluding(4, &[0, 2]);
            assert!(v == 1 || v == 3, "got {v}");
        }
    }

    #[test]
    fn test_next_excluding_single_free_value() {
        let mut rng = RandomSource::seeded(3);
        assert_eq!(rng.next_excluding(3, &[0, 2, 2, 0]), 1);
    }

    #[test]
    #[should_panic(expected = "every value")]
    fn test_next_excluding_full_range_panics() {
        let mut rng = RandomSource::seeded(3);
        rng.next_excluding(2, &[0, 1]);
    }

    #[test]
    #[should_panic(expected = "max must be positive")]
    fn test_next_below_zero_panics() {
        let mut rng = RandomSource::seeded(3);
        rng.next_below(0);
    }

    #[test]
    fn test_next_unit_in_range() {
        let mut rng = RandomSource::seeded(9);
        for _ in 0..1000 {
            let u = rng.next_unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = RandomSource::seeded(123);
        let mut b = RandomSource::seeded(123);
        let xs: Vec<usize> = (0..32).map(|_| a.next_below(1000)).collect();
        let ys: Vec<usize> = (0..32).map(|_| b.next_below(1000)).collect();
        assert_eq!(xs, ys);
    }
}
