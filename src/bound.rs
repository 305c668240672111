//! Keys as stored inside the list.
//!
//! Caller keys are plain `i32`s, but the two extremes of that domain are
//! reserved for the sentinels bounding every level. Rather than comparing
//! against magic integers, each node carries a [`Bound`] which tags whether it
//! is a sentinel or a real key. A caller-supplied `i32::MIN` can therefore
//! never be mistaken for the low sentinel.

use std::fmt;

/// The smallest `i32`, reserved for the low sentinel of each level.
pub const MIN: i32 = i32::MIN;

/// The largest `i32`, reserved for the high sentinel of each level.
pub const MAX: i32 = i32::MAX;

/// Returns `true` if `key` is one of the two values reserved for sentinels.
#[inline]
#[must_use]
pub const fn is_reserved(key: i32) -> bool {
    key == MIN || key == MAX
}

/// A key as held by a node.
///
/// The derived ordering follows declaration order, so `NegInf` compares below
/// every `Value` and `PosInf` above every `Value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bound {
    /// Key of a low sentinel.
    NegInf,
    /// Key of a data node.
    Value(i32),
    /// Key of a high sentinel.
    PosInf,
}

impl Bound {
    /// Wrap a caller key, refusing the reserved extremes.
    #[inline]
    #[must_use]
    pub const fn from_key(key: i32) -> Option<Self> {
        if is_reserved(key) {
            None
        } else {
            Some(Self::Value(key))
        }
    }

    /// Returns `true` for either sentinel.
    #[cfg(test)]
    pub const fn is_sentinel(self) -> bool {
        !matches!(self, Self::Value(_))
    }

    /// The data key, or `None` for sentinels.
    #[inline]
    #[must_use]
    pub const fn value(self) -> Option<i32> {
        match self {
            Self::Value(key) => Some(key),
            Self::NegInf | Self::PosInf => None,
        }
    }
}

impl fmt::Display for Bound {
    /// Sentinels print as the reserved integer they stand for.
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NegInf => write!(f, "{MIN}"),
            Self::Value(key) => write!(f, "{key}"),
            Self::PosInf => write!(f, "{MAX}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{Bound, MAX, MIN, is_reserved};

    #[rstest]
    #[case(MIN, true)]
    #[case(MAX, true)]
    #[case(0, false)]
    #[case(MIN + 1, false)]
    #[case(MAX - 1, false)]
    fn reserved(#[case] key: i32, #[case] expected: bool) {
        assert_eq!(is_reserved(key), expected);
        assert_eq!(Bound::from_key(key).is_none(), expected);
    }

    #[test]
    fn ordering() {
        assert!(Bound::NegInf < Bound::Value(MIN + 1));
        assert!(Bound::Value(-5) < Bound::Value(5));
        assert!(Bound::Value(MAX - 1) < Bound::PosInf);
        assert!(Bound::NegInf < Bound::PosInf);
    }

    #[test]
    fn display() {
        assert_eq!(Bound::NegInf.to_string(), "-2147483648");
        assert_eq!(Bound::Value(42).to_string(), "42");
        assert_eq!(Bound::PosInf.to_string(), "2147483647");
    }

    #[test]
    fn accessors() {
        assert!(Bound::NegInf.is_sentinel());
        assert!(Bound::PosInf.is_sentinel());
        assert!(!Bound::Value(0).is_sentinel());
        assert_eq!(Bound::Value(7).value(), Some(7));
        assert_eq!(Bound::PosInf.value(), None);
    }
}
