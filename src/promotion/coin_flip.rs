//! Random promotion.

use rand::prelude::*;
use thiserror::Error;

use crate::promotion::Promotion;

#[derive(Error, Debug, PartialEq, Eq)]
/// Errors that can occur when creating a [`CoinFlip`].
#[non_exhaustive]
pub enum PromotionError {
    /// The probability `p` must be in the range `(0, 1)`.
    #[error("p must be in (0, 1).")]
    InvalidProbability,
}

/// A biased coin: each flip promotes with probability `p`.
///
/// Repeated flips give a truncated geometric distribution of tower heights,
/// so with `p = 1/2` a key reaches level `n` with probability `2^-n`.
#[derive(Debug, Clone)]
pub struct CoinFlip {
    /// Probability of promoting.
    p: f64,
    /// The random number generator.
    rng: SmallRng,
}

impl CoinFlip {
    /// A coin landing heads with probability `p`, seeded from the thread-local
    /// generator.
    ///
    /// # Errors
    ///
    /// `p` must lie strictly between 0 and 1.
    #[inline]
    pub fn new(p: f64) -> Result<Self, PromotionError> {
        Self::with_rng(p, SmallRng::from_rng(&mut rand::rng()))
    }

    /// A coin landing heads with probability `p` whose flips are fully
    /// determined by `seed`.
    ///
    /// # Errors
    ///
    /// `p` must lie strictly between 0 and 1.
    #[inline]
    pub fn seeded(p: f64, seed: u64) -> Result<Self, PromotionError> {
        Self::with_rng(p, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(p: f64, rng: SmallRng) -> Result<Self, PromotionError> {
        if !(0.0 < p && p < 1.0) {
            return Err(PromotionError::InvalidProbability);
        }
        Ok(CoinFlip { p, rng })
    }

    /// The probability of promoting.
    #[inline]
    #[must_use]
    pub const fn p(&self) -> f64 {
        self.p
    }
}

impl Default for CoinFlip {
    /// A fair coin.
    #[inline]
    fn default() -> Self {
        CoinFlip {
            p: 0.5,
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Promotion for CoinFlip {
    #[inline]
    fn promote(&mut self) -> bool {
        self.rng.random_bool(self.p)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{CoinFlip, PromotionError};
    use crate::promotion::Promotion;

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    #[case(-0.5)]
    #[case(1.5)]
    #[case(f64::NAN)]
    fn invalid_p(#[case] p: f64) {
        assert_eq!(CoinFlip::new(p).err(), Some(PromotionError::InvalidProbability));
        assert_eq!(
            CoinFlip::seeded(p, 0).err(),
            Some(PromotionError::InvalidProbability)
        );
    }

    #[test]
    fn error_message() {
        assert_eq!(
            PromotionError::InvalidProbability.to_string(),
            "p must be in (0, 1)."
        );
    }

    #[test]
    fn seeded_is_reproducible() -> Result<()> {
        let mut a = CoinFlip::seeded(0.5, 0x1234_abcd)?;
        let mut b = CoinFlip::seeded(0.5, 0x1234_abcd)?;
        let a: Vec<_> = (0..64).map(|_| a.promote()).collect();
        let b: Vec<_> = (0..64).map(|_| b.promote()).collect();
        assert_eq!(a, b);
        Ok(())
    }

    #[rstest]
    fn frequency(#[values(0.1, 0.5, 0.9)] p: f64) -> Result<()> {
        const FLIPS: u32 = 100_000;
        let mut coin = CoinFlip::seeded(p, 42)?;
        assert_eq!(coin.p(), p);
        let heads = (0..FLIPS).filter(|_| coin.promote()).count();
        let observed = f64::from(u32::try_from(heads)?) / f64::from(FLIPS);
        assert!(
            (observed - p).abs() < 0.02,
            "observed {observed} for p = {p}"
        );
        Ok(())
    }

    #[test]
    fn default_is_fair() {
        let coin = CoinFlip::default();
        assert_eq!(coin.p(), 0.5);
    }
}
