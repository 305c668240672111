//! Replayed promotion decisions.

use crate::promotion::Promotion;

/// Replays a fixed sequence of decisions, starting over once exhausted.
///
/// Because the list stops flipping after the first `false` (or when it runs
/// out of levels), a script of `[true, false]` gives every key a tower of
/// exactly two levels on any list of depth 3 or more.
///
/// An empty script never promotes.
///
/// # Examples
///
/// ```
/// use sentinel_skiplist::{Promotion, Scripted};
///
/// let mut script = Scripted::new([true, false]);
/// assert!(script.promote());
/// assert!(!script.promote());
/// assert!(script.promote());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scripted {
    decisions: Vec<bool>,
    cursor: usize,
}

impl Scripted {
    /// Create a script from the given decisions.
    #[inline]
    pub fn new(decisions: impl IntoIterator<Item = bool>) -> Self {
        Scripted {
            decisions: decisions.into_iter().collect(),
            cursor: 0,
        }
    }
}

impl Promotion for Scripted {
    #[inline]
    fn promote(&mut self) -> bool {
        let Some(&decision) = self.decisions.get(self.cursor) else {
            return false;
        };
        self.cursor = (self.cursor + 1) % self.decisions.len();
        decision
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Scripted;
    use crate::promotion::Promotion;

    #[test]
    fn cycles() {
        let mut script = Scripted::new([true, true, false]);
        let flips: Vec<_> = (0..7).map(|_| script.promote()).collect();
        assert_eq!(flips, [true, true, false, true, true, false, true]);
    }

    #[test]
    fn empty() {
        let mut script = Scripted::default();
        assert!(!script.promote());
        assert!(!script.promote());
    }
}
