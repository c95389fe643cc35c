use rand::distributions::Bernoulli;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

use crate::PercolationError;

/// Source of the random draws that drive a simulation.
pub trait RandomSource {
    /// An independent draw that is `true` with probability `p`. Fails unless
    /// `0 <= p <= 1`.
    fn bernoulli(&mut self, p: f64) -> Result<bool, PercolationError>;

    /// A uniform draw from `[low, high)`. Returns `low` when `low == high` and
    /// fails for non-finite bounds or `low > high`.
    fn uniform(&mut self, low: f64, high: f64) -> Result<f64, PercolationError>;
}

/// [`RandomSource`] backed by a [`SmallRng`].
#[derive(Clone, Debug)]
pub struct SeededSource {
    rng: SmallRng,
}

impl SeededSource {
    pub fn seed_from_u64(seed: u64) -> Self {
        SeededSource {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        SeededSource {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededSource {
    fn bernoulli(&mut self, p: f64) -> Result<bool, PercolationError> {
        let distribution =
            Bernoulli::new(p).map_err(|_| PercolationError::InvalidProbability(p))?;
        Ok(self.rng.sample(distribution))
    }

    fn uniform(&mut self, low: f64, high: f64) -> Result<f64, PercolationError> {
        if !low.is_finite() || !high.is_finite() || low > high || !(high - low).is_finite() {
            return Err(PercolationError::InvalidRange { low, high });
        }
        if low == high {
            return Ok(low);
        }
        Ok(self.rng.gen_range(low..high))
    }
}

#[cfg(test)]
mod tests {
    use super::{RandomSource, SeededSource};
    use crate::PercolationError;

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = SeededSource::seed_from_u64(42);
        let mut b = SeededSource::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(a.bernoulli(0.5).unwrap(), b.bernoulli(0.5).unwrap());
            assert_eq!(a.uniform(0.1, 0.99).unwrap(), b.uniform(0.1, 0.99).unwrap());
        }
    }

    #[test]
    fn test_degenerate_probabilities() {
        let mut source = SeededSource::seed_from_u64(7);
        assert!((0..100).all(|_| source.bernoulli(1.0).unwrap()));
        assert!((0..100).all(|_| !source.bernoulli(0.0).unwrap()));
    }

    #[test]
    fn test_bernoulli_rejects_bad_probability() {
        let mut source = SeededSource::seed_from_u64(1);
        assert!(matches!(
            source.bernoulli(f64::NAN),
            Err(PercolationError::InvalidProbability(p)) if p.is_nan()
        ));
        assert_eq!(
            source.bernoulli(1.5).unwrap_err(),
            PercolationError::InvalidProbability(1.5)
        );
        assert_eq!(
            source.bernoulli(-0.1).unwrap_err(),
            PercolationError::InvalidProbability(-0.1)
        );
    }

    #[test]
    fn test_uniform_stays_in_range() {
        let mut source = SeededSource::seed_from_u64(3);
        for _ in 0..1000 {
            let x = source.uniform(0.1, 0.99).unwrap();
            assert!((0.1..0.99).contains(&x));
        }
        assert_eq!(source.uniform(0.5, 0.5).unwrap(), 0.5);
    }

    #[test]
    fn test_uniform_rejects_bad_range() {
        let mut source = SeededSource::seed_from_u64(3);
        assert!(source.uniform(f64::NAN, 1.0).is_err());
        assert!(source.uniform(0.0, f64::INFINITY).is_err());
        assert!(source.uniform(f64::MIN, f64::MAX).is_err());
        assert_eq!(
            source.uniform(0.9, 0.1).unwrap_err(),
            PercolationError::InvalidRange { low: 0.9, high: 0.1 }
        );
    }
}
