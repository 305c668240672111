//! The sentinel-bounded skiplist.

use std::{fmt, iter};

use thiserror::Error;

use crate::{
    arena::{Arena, Node, NodeId},
    bound::Bound,
    promotion::{CoinFlip, Promotion, PromotionError},
};

/// The largest supported depth.
///
/// With a fair coin, a key reaches level 64 with probability `2^-64`, so
/// deeper lists would only hold empty levels.
pub const MAX_DEPTH: usize = 64;

// ////////////////////////////////////////////////////////////////////////////
// Errors
// ////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, PartialEq, Eq)]
/// Errors that can occur when creating a [`SkipList`].
#[expect(
    clippy::module_name_repetitions,
    reason = "Using 'Error' would be too generic and may cause confusion."
)]
#[non_exhaustive]
pub enum SkipListError {
    /// A skiplist needs at least one level.
    #[error("depth must be non-zero.")]
    ZeroDepth,
    /// The depth must not exceed [`MAX_DEPTH`].
    #[error("depth must be at most {}.", MAX_DEPTH)]
    DepthTooLarge,
    /// The promotion source could not be created.
    #[error(transparent)]
    Promotion(#[from] PromotionError),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Reasons an insertion is rejected.
#[non_exhaustive]
pub enum InsertError {
    /// The key is one of the two values reserved for sentinels.
    #[error("{0} is reserved for sentinels.")]
    Reserved(i32),
    /// The key is already present.
    #[error("{0} is already present.")]
    Duplicate(i32),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Reasons a deletion is rejected.
#[non_exhaustive]
pub enum DeleteError {
    /// The key is one of the two values reserved for sentinels, which can never
    /// be removed. This indicates a caller mistake rather than absence.
    #[error("cannot remove sentinel value {0}.")]
    Reserved(i32),
    /// The key is not present.
    #[error("{0} is not present.")]
    NotFound(i32),
}

// ////////////////////////////////////////////////////////////////////////////
// SkipList
// ////////////////////////////////////////////////////////////////////////////

/// An ordered set of `i32` keys stored over a fixed number of levels.
///
/// Level 0 holds every key in ascending order. Each key is copied to the level
/// above with the probability given by the list's [`Promotion`] source, so
/// higher levels hold progressively sparser subsets. Every copy of a key (its
/// *tower*) is linked vertically to the copies directly above and below it.
///
/// Each level is bounded by a pair of permanent sentinels holding `i32::MIN`
/// and `i32::MAX`. Those two values are therefore reserved: they can be neither
/// inserted nor removed, and [`contains`](SkipList::contains) never reports
/// them.
///
/// With a depth of 1, the list degenerates into a plain doubly linked sorted
/// list.
///
/// # Examples
///
/// ```
/// use sentinel_skiplist::SkipList;
///
/// let mut sl = SkipList::new(1)?;
/// for key in [10, 30, 5, 25] {
///     assert!(sl.insert(key));
/// }
/// assert_eq!(
///     sl.render(),
///     "Level: 0 -- -2147483648, 5, 10, 25, 30, 2147483647, \n"
/// );
/// # Ok::<(), sentinel_skiplist::SkipListError>(())
/// ```
pub struct SkipList {
    arena: Arena,
    /// Low sentinel of each level, bottom first.
    heads: Vec<NodeId>,
    /// High sentinel of each level, bottom first.
    tails: Vec<NodeId>,
    len: usize,
    promotion: Box<dyn Promotion>,
}

// ///////////////////////////////////////////////
// Inherent methods
// ///////////////////////////////////////////////

impl SkipList {
    /// Create an empty skiplist with `depth` levels, promoting keys with a
    /// fair coin.
    ///
    /// # Errors
    ///
    /// Returns [`SkipListError::ZeroDepth`] if `depth` is zero, or
    /// [`SkipListError::DepthTooLarge`] if it exceeds [`MAX_DEPTH`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_skiplist::{SkipList, SkipListError};
    ///
    /// let sl = SkipList::new(4)?;
    /// assert_eq!(sl.depth(), 4);
    /// assert!(sl.is_empty());
    ///
    /// assert_eq!(SkipList::new(0).err(), Some(SkipListError::ZeroDepth));
    /// # Ok::<(), SkipListError>(())
    /// ```
    #[inline]
    pub fn new(depth: usize) -> Result<Self, SkipListError> {
        Self::with_promotion(depth, CoinFlip::default())
    }

    /// Create an empty skiplist with `depth` levels whose fair coin is seeded
    /// with `seed`, so that the resulting shape is reproducible.
    ///
    /// # Errors
    ///
    /// Returns [`SkipListError::ZeroDepth`] if `depth` is zero, or
    /// [`SkipListError::DepthTooLarge`] if it exceeds [`MAX_DEPTH`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_skiplist::SkipList;
    ///
    /// let mut a = SkipList::with_seed(5, 7)?;
    /// let mut b = SkipList::with_seed(5, 7)?;
    /// a.extend(0..100);
    /// b.extend(0..100);
    /// assert_eq!(a.render(), b.render());
    /// # Ok::<(), sentinel_skiplist::SkipListError>(())
    /// ```
    #[inline]
    pub fn with_seed(depth: usize, seed: u64) -> Result<Self, SkipListError> {
        Self::with_promotion(depth, CoinFlip::seeded(0.5, seed)?)
    }

    /// Create an empty skiplist with `depth` levels, promoting keys with
    /// probability `p`.
    ///
    /// Lower values of `p` give sparser upper levels.
    ///
    /// # Errors
    ///
    /// Returns [`SkipListError::Promotion`] if `p` is not strictly between 0
    /// and 1, and the same depth errors as [`new`](SkipList::new).
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_skiplist::{PromotionError, SkipList, SkipListError};
    ///
    /// let sl = SkipList::with_probability(4, 0.25)?;
    /// assert_eq!(sl.depth(), 4);
    ///
    /// assert_eq!(
    ///     SkipList::with_probability(4, 1.0).err(),
    ///     Some(SkipListError::Promotion(PromotionError::InvalidProbability))
    /// );
    /// # Ok::<(), SkipListError>(())
    /// ```
    #[inline]
    pub fn with_probability(depth: usize, p: f64) -> Result<Self, SkipListError> {
        Self::with_promotion(depth, CoinFlip::new(p)?)
    }

    /// Create an empty skiplist with `depth` levels using the given promotion
    /// source.
    ///
    /// # Errors
    ///
    /// Returns [`SkipListError::ZeroDepth`] if `depth` is zero, or
    /// [`SkipListError::DepthTooLarge`] if it exceeds [`MAX_DEPTH`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_skiplist::{Always, SkipList};
    ///
    /// let mut sl = SkipList::with_promotion(3, Always)?;
    /// sl.insert(1);
    /// assert_eq!(sl.height(1), Some(3));
    /// # Ok::<(), sentinel_skiplist::SkipListError>(())
    /// ```
    pub fn with_promotion(
        depth: usize,
        promotion: impl Promotion + 'static,
    ) -> Result<Self, SkipListError> {
        if depth == 0 {
            return Err(SkipListError::ZeroDepth);
        }
        if depth > MAX_DEPTH {
            return Err(SkipListError::DepthTooLarge);
        }
        let mut sl = SkipList {
            arena: Arena::new(),
            heads: Vec::with_capacity(depth),
            tails: Vec::with_capacity(depth),
            len: 0,
            promotion: Box::new(promotion),
        };
        sl.build_sentinels(depth);
        Ok(sl)
    }

    /// Allocate one sentinel pair per level, linked horizontally to each other
    /// and vertically to the pair on the adjacent levels.
    fn build_sentinels(&mut self, depth: usize) {
        for _ in 0..depth {
            let head = self.arena.alloc(Bound::NegInf);
            let tail = self.arena.alloc(Bound::PosInf);
            self.arena.get_mut(head).next = Some(tail);
            self.arena.get_mut(tail).prev = Some(head);

            if let (Some(&below_head), Some(&below_tail)) = (self.heads.last(), self.tails.last())
            {
                self.link_vertical(below_head, head);
                self.link_vertical(below_tail, tail);
            }
            self.heads.push(head);
            self.tails.push(tail);
        }
    }

    /// The number of levels, fixed at construction.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.heads.len()
    }

    /// Returns the number of keys in the skiplist.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_skiplist::SkipList;
    ///
    /// let mut sl = SkipList::new(3)?;
    /// sl.extend([4, 2, 4, 9]);
    /// assert_eq!(sl.len(), 3);
    /// # Ok::<(), sentinel_skiplist::SkipListError>(())
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the skiplist holds no keys.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every key, keeping the depth and the promotion source.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_skiplist::SkipList;
    ///
    /// let mut sl = SkipList::new(2)?;
    /// sl.extend(0..10);
    /// sl.clear();
    /// assert!(sl.is_empty());
    /// assert!(!sl.contains(3));
    /// # Ok::<(), sentinel_skiplist::SkipListError>(())
    /// ```
    pub fn clear(&mut self) {
        let depth = self.depth();
        self.arena.clear();
        self.heads.clear();
        self.tails.clear();
        self.len = 0;
        self.build_sentinels(depth);
    }

    /// Returns `true` if `key` is present.
    ///
    /// Each level, starting from the top, is scanned from both ends at once:
    /// one cursor walks forward from the low sentinel and another backward
    /// from the high sentinel, each stopping once it would step past `key`.
    ///
    /// The reserved values `i32::MIN` and `i32::MAX` are never reported as
    /// present.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_skiplist::SkipList;
    ///
    /// let mut sl = SkipList::new(3)?;
    /// sl.extend([10, 30, 5, 25]);
    /// assert!(sl.contains(10));
    /// assert!(sl.contains(30));
    /// assert!(!sl.contains(71));
    /// assert!(!sl.contains(i32::MIN));
    /// # Ok::<(), sentinel_skiplist::SkipListError>(())
    /// ```
    #[must_use]
    pub fn contains(&self, key: i32) -> bool {
        let Some(target) = Bound::from_key(key) else {
            return false;
        };
        (0..self.depth())
            .rev()
            .any(|level| self.scan_level(level, target))
    }

    /// Two-cursor scan of a single level for `target`.
    fn scan_level(&self, level: usize, target: Bound) -> bool {
        let mut front = self.successor(self.head(level));
        let mut back = self.predecessor(self.tail(level));
        loop {
            let (front_key, back_key) = (self.key(front), self.key(back));
            if front_key == target || back_key == target {
                return true;
            }
            // The high sentinel never compares below a data key, nor the low
            // sentinel above one, so neither cursor can leave the level.
            let front_short = front_key < target;
            let back_short = back_key > target;
            if !front_short && !back_short {
                return false;
            }
            if front_short {
                front = self.successor(front);
            }
            if back_short {
                back = self.predecessor(back);
            }
        }
    }

    /// Insert `key`, returning `true` if it was added.
    ///
    /// Duplicates and the reserved values `i32::MIN` / `i32::MAX` are rejected
    /// without modifying the list. Use [`try_insert`](SkipList::try_insert) to
    /// find out why.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_skiplist::SkipList;
    ///
    /// let mut sl = SkipList::new(3)?;
    /// assert!(sl.insert(10));
    /// assert!(!sl.insert(10));
    /// assert!(!sl.insert(i32::MAX));
    /// # Ok::<(), sentinel_skiplist::SkipListError>(())
    /// ```
    #[inline]
    pub fn insert(&mut self, key: i32) -> bool {
        self.try_insert(key).is_ok()
    }

    /// Insert `key`.
    ///
    /// The key is spliced into level 0, then copied one level up for as long
    /// as the promotion source agrees and levels remain.
    ///
    /// # Errors
    ///
    /// - [`InsertError::Reserved`] if `key` is `i32::MIN` or `i32::MAX`.
    /// - [`InsertError::Duplicate`] if `key` is already present.
    ///
    /// In both cases the list is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_skiplist::{InsertError, SkipList};
    ///
    /// let mut sl = SkipList::new(2)?;
    /// assert_eq!(sl.try_insert(1), Ok(()));
    /// assert_eq!(sl.try_insert(1), Err(InsertError::Duplicate(1)));
    /// assert_eq!(sl.try_insert(i32::MIN), Err(InsertError::Reserved(i32::MIN)));
    /// # Ok::<(), sentinel_skiplist::SkipListError>(())
    /// ```
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "Height is capped by depth and len by the number of live nodes"
    )]
    pub fn try_insert(&mut self, key: i32) -> Result<(), InsertError> {
        let Some(target) = Bound::from_key(key) else {
            tracing::debug!(key, "rejected insert of reserved key");
            return Err(InsertError::Reserved(key));
        };
        if self.contains(key) {
            tracing::debug!(key, "rejected duplicate insert");
            return Err(InsertError::Duplicate(key));
        }

        let mut below = self.insert_at(0, target);
        let mut height = 1;
        while height < self.depth() && self.promotion.promote() {
            let node = self.insert_at(height, target);
            self.link_vertical(below, node);
            below = node;
            height += 1;
        }
        self.len += 1;
        tracing::trace!(key, height, "inserted");
        Ok(())
    }

    /// Splice a new node holding `target` into `level`, returning it.
    fn insert_at(&mut self, level: usize, target: Bound) -> NodeId {
        let next = self.seek(level, target);
        let node = self.arena.alloc(target);
        self.splice_before(node, next);
        node
    }

    /// Remove `key`, returning `true` if it was present.
    ///
    /// Attempts to remove the reserved values `i32::MIN` / `i32::MAX` are
    /// rejected (and logged as a warning). Use
    /// [`try_delete`](SkipList::try_delete) to tell that apart from absence.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_skiplist::SkipList;
    ///
    /// let mut sl = SkipList::new(3)?;
    /// sl.extend([1, 2, 3]);
    /// assert!(sl.delete(2));
    /// assert!(!sl.delete(2));
    /// assert!(!sl.contains(2));
    /// # Ok::<(), sentinel_skiplist::SkipListError>(())
    /// ```
    #[inline]
    pub fn delete(&mut self, key: i32) -> bool {
        self.try_delete(key).is_ok()
    }

    /// Remove `key` from every level on which it appears.
    ///
    /// The bottom copy is located first, then the tower is unlinked from the
    /// bottom up by following the vertical links, so a key is either fully
    /// present or fully gone by the time this returns.
    ///
    /// # Errors
    ///
    /// - [`DeleteError::Reserved`] if `key` is `i32::MIN` or `i32::MAX`.
    /// - [`DeleteError::NotFound`] if `key` is not present.
    ///
    /// In both cases the list is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_skiplist::{DeleteError, SkipList};
    ///
    /// let mut sl = SkipList::new(2)?;
    /// sl.insert(1);
    /// assert_eq!(sl.try_delete(1), Ok(()));
    /// assert_eq!(sl.try_delete(1), Err(DeleteError::NotFound(1)));
    /// assert_eq!(sl.try_delete(i32::MAX), Err(DeleteError::Reserved(i32::MAX)));
    /// # Ok::<(), sentinel_skiplist::SkipListError>(())
    /// ```
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "Height is capped by depth and a present key means len > 0"
    )]
    pub fn try_delete(&mut self, key: i32) -> Result<(), DeleteError> {
        let Some(target) = Bound::from_key(key) else {
            tracing::warn!(key, "cannot remove sentinel");
            return Err(DeleteError::Reserved(key));
        };
        let bottom = self.seek(0, target);
        if self.key(bottom) != target {
            tracing::debug!(key, "rejected delete of absent key");
            return Err(DeleteError::NotFound(key));
        }

        let mut cursor = Some(bottom);
        let mut height = 0_usize;
        while let Some(id) = cursor {
            cursor = self.unlink(id).up;
            height += 1;
        }
        self.len -= 1;
        tracing::trace!(key, height, "deleted");
        Ok(())
    }

    /// The number of levels on which `key` appears, or `None` if absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_skiplist::{Never, SkipList};
    ///
    /// let mut sl = SkipList::with_promotion(4, Never)?;
    /// sl.insert(8);
    /// assert_eq!(sl.height(8), Some(1));
    /// assert_eq!(sl.height(9), None);
    /// # Ok::<(), sentinel_skiplist::SkipListError>(())
    /// ```
    #[must_use]
    pub fn height(&self, key: i32) -> Option<usize> {
        let target = Bound::from_key(key)?;
        let bottom = self.seek(0, target);
        if self.key(bottom) != target {
            return None;
        }
        let tower = iter::successors(Some(bottom), |&id| self.arena.get(id).up);
        Some(tower.count())
    }

    /// Iterate over every key in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_skiplist::SkipList;
    ///
    /// let mut sl = SkipList::new(3)?;
    /// sl.extend([3, 1, 2]);
    /// assert!(sl.iter().eq([1, 2, 3]));
    /// # Ok::<(), sentinel_skiplist::SkipListError>(())
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.arena, self.head(0))
    }

    /// Iterate over the keys present on `level`, in ascending order, or `None`
    /// if `level` is not below [`depth`](SkipList::depth).
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_skiplist::{Scripted, SkipList};
    ///
    /// // Every key reaches exactly level 1.
    /// let mut sl = SkipList::with_promotion(3, Scripted::new([true, false]))?;
    /// sl.extend([2, 1]);
    /// assert!(sl.level(1).unwrap().eq([1, 2]));
    /// assert_eq!(sl.level(2).unwrap().count(), 0);
    /// assert!(sl.level(3).is_none());
    /// # Ok::<(), sentinel_skiplist::SkipListError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn level(&self, level: usize) -> Option<Iter<'_>> {
        self.heads
            .get(level)
            .map(|&head| Iter::new(&self.arena, head))
    }

    /// Render every level, top first, as
    /// `Level: <i> -- <MIN>, <k1>, ..., <MAX>, ` followed by a newline.
    ///
    /// This is the [`Display`](fmt::Display) output.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_skiplist::SkipList;
    ///
    /// let sl = SkipList::new(2)?;
    /// assert_eq!(
    ///     sl.render(),
    ///     "Level: 1 -- -2147483648, 2147483647, \n\
    ///      Level: 0 -- -2147483648, 2147483647, \n"
    /// );
    /// # Ok::<(), sentinel_skiplist::SkipListError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    // /////////////////////////////
    // Link Manipulation
    // /////////////////////////////

    /// Low sentinel of `level`.
    #[inline]
    #[expect(clippy::indexing_slicing, reason = "Callers pass levels below depth")]
    fn head(&self, level: usize) -> NodeId {
        self.heads[level]
    }

    /// High sentinel of `level`.
    #[inline]
    #[expect(clippy::indexing_slicing, reason = "Callers pass levels below depth")]
    fn tail(&self, level: usize) -> NodeId {
        self.tails[level]
    }

    #[inline]
    fn key(&self, id: NodeId) -> Bound {
        self.arena.get(id).key
    }

    /// The node after `id`; only a high sentinel has none.
    #[inline]
    #[expect(
        clippy::expect_used,
        reason = "Callers never step right of a high sentinel"
    )]
    fn successor(&self, id: NodeId) -> NodeId {
        self.arena
            .get(id)
            .next
            .expect("high sentinel has no successor")
    }

    /// The node before `id`; only a low sentinel has none.
    #[inline]
    #[expect(
        clippy::expect_used,
        reason = "Callers never step left of a low sentinel"
    )]
    fn predecessor(&self, id: NodeId) -> NodeId {
        self.arena
            .get(id)
            .prev
            .expect("low sentinel has no predecessor")
    }

    /// The first node on `level` whose key is not less than `target`. The high
    /// sentinel bounds the walk.
    fn seek(&self, level: usize, target: Bound) -> NodeId {
        let mut cursor = self.successor(self.head(level));
        while self.key(cursor) < target {
            cursor = self.successor(cursor);
        }
        cursor
    }

    /// Splice the detached `node` in immediately before `next`.
    fn splice_before(&mut self, node: NodeId, next: NodeId) {
        let prev = self.predecessor(next);
        {
            let node = self.arena.get_mut(node);
            node.prev = Some(prev);
            node.next = Some(next);
        }
        self.arena.get_mut(prev).next = Some(node);
        self.arena.get_mut(next).prev = Some(node);
    }

    /// Unlink the data node `id` from its level and release it.
    fn unlink(&mut self, id: NodeId) -> Node {
        let prev = self.predecessor(id);
        let next = self.successor(id);
        self.arena.get_mut(prev).next = Some(next);
        self.arena.get_mut(next).prev = Some(prev);
        self.arena.free(id)
    }

    fn link_vertical(&mut self, below: NodeId, above: NodeId) {
        self.arena.get_mut(below).up = Some(above);
        self.arena.get_mut(above).down = Some(below);
    }

    /// Checks the integrity of the skiplist, panicking on the first broken
    /// invariant.
    #[cfg(test)]
    fn check(&self) {
        let depth = self.depth();
        assert_eq!(self.tails.len(), depth);
        let mut nodes = 0;

        for level in 0..depth {
            let head = self.heads[level];
            let tail = self.tails[level];
            assert_eq!(self.key(head), Bound::NegInf);
            assert_eq!(self.key(tail), Bound::PosInf);
            assert_eq!(self.arena.get(head).prev, None);
            assert_eq!(self.arena.get(tail).next, None);

            // Sentinels stack vertically.
            let (up, down) = (level + 1 < depth, level > 0);
            assert_eq!(self.arena.get(head).up, up.then(|| self.heads[level + 1]));
            assert_eq!(self.arena.get(tail).up, up.then(|| self.tails[level + 1]));
            assert_eq!(self.arena.get(head).down, down.then(|| self.heads[level - 1]));
            assert_eq!(self.arena.get(tail).down, down.then(|| self.tails[level - 1]));

            let mut prev = head;
            let mut current = self.successor(head);
            nodes += 2;
            while current != tail {
                let node = self.arena.get(current);
                assert!(!node.key.is_sentinel(), "sentinel inside level {level}");
                assert!(self.key(prev) < node.key, "level {level} out of order");
                assert_eq!(node.prev, Some(prev));

                if level == 0 {
                    assert_eq!(node.down, None);
                } else {
                    let down = node.down.expect("tower broken below");
                    assert_eq!(self.key(down), node.key);
                    assert_eq!(self.arena.get(down).up, Some(current));
                }
                if level + 1 == depth {
                    assert_eq!(node.up, None);
                }
                if let Some(up) = node.up {
                    assert_eq!(self.key(up), node.key);
                    assert_eq!(self.arena.get(up).down, Some(current));
                }

                nodes += 1;
                prev = current;
                current = self.successor(current);
            }
            assert_eq!(self.arena.get(tail).prev, Some(prev));
        }

        assert_eq!(self.arena.len(), nodes);
        assert_eq!(self.iter().count(), self.len);
    }
}

// ///////////////////////////////////////////////
// Trait implementation
// ///////////////////////////////////////////////

impl Extend<i32> for SkipList {
    /// Inserts every key, silently skipping rejected ones.
    #[inline]
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iterable: I) {
        for key in iterable {
            self.insert(key);
        }
    }
}

impl fmt::Display for SkipList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in (0..self.depth()).rev() {
            write!(f, "Level: {level} -- ")?;
            let mut cursor = Some(self.head(level));
            while let Some(id) = cursor {
                let node = self.arena.get(id);
                write!(f, "{}, ", node.key)?;
                cursor = node.next;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for SkipList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;

        for (i, key) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key:?}")?;
        }
        write!(f, "]")
    }
}

impl<'a> IntoIterator for &'a SkipList {
    type Item = i32;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

// ///////////////////////////////////////////////
// Iterators
// ///////////////////////////////////////////////

/// Ascending iterator over the keys of one level.
///
/// Created by [`SkipList::iter`] and [`SkipList::level`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    arena: &'a Arena,
    cursor: Option<NodeId>,
}

impl<'a> Iter<'a> {
    /// Start just after the low sentinel `head`.
    fn new(arena: &'a Arena, head: NodeId) -> Self {
        Iter {
            arena,
            cursor: arena.get(head).next,
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<i32> {
        let node = self.arena.get(self.cursor?);
        // The high sentinel ends the level.
        let key = node.key.value()?;
        self.cursor = node.next;
        Some(key)
    }
}

impl iter::FusedIterator for Iter<'_> {}
