//! When a key is inserted it always lands on level 0, and is then copied to
//! each successive level for as long as a coin flip says so. The classic
//! choice is a fair coin, giving the familiar geometric falloff where roughly
//! half the keys of level `n` also appear on level `n + 1`.
//!
//! The coin is a [`Promotion`] owned by the list and supplied at construction.
//! Beyond the random [`CoinFlip`], deterministic sources ([`Scripted`],
//! [`Always`], [`Never`]) make the shape of a list fully predictable, which is
//! mostly useful for tests.

mod coin_flip;
mod scripted;

pub use coin_flip::{CoinFlip, PromotionError};
pub use scripted::Scripted;

// ////////////////////////////////////////////////////////////////////////////
// Promotion
// ////////////////////////////////////////////////////////////////////////////

/// Decides, one level at a time, whether a freshly inserted key is copied to
/// the level above.
///
/// The list only asks when there is a level above to promote to, so a source
/// is consulted at most `depth - 1` times per insertion and stops being
/// consulted after the first `false`.
pub trait Promotion {
    /// Whether to promote one more level.
    #[must_use]
    fn promote(&mut self) -> bool;
}

impl<F> Promotion for F
where
    F: FnMut() -> bool,
{
    #[inline]
    fn promote(&mut self) -> bool {
        self()
    }
}

/// Promote to every available level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Always;

impl Promotion for Always {
    #[inline]
    fn promote(&mut self) -> bool {
        true
    }
}

/// Never promote; every key stays on level 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Never;

impl Promotion for Never {
    #[inline]
    fn promote(&mut self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Always, Never, Promotion};

    #[test]
    fn constant() {
        let mut always = Always;
        let mut never = Never;
        for _ in 0..10 {
            assert!(always.promote());
            assert!(!never.promote());
        }
    }

    #[test]
    fn closure() {
        let mut calls = 0_u32;
        let mut every_other = || {
            calls += 1;
            calls % 2 == 0
        };
        let flips: Vec<_> = (0..4).map(|_| every_other.promote()).collect();
        assert_eq!(flips, [false, true, false, true]);
    }
}
