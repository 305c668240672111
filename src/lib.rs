//! A skiplist is a way of storing ordered keys such that they can be searched
//! for, inserted and removed without any of the rebalancing machinery of a
//! tree.
//!
//! This crate provides a set of `i32` keys laid out over a fixed number of
//! levels, each one a doubly linked chain bounded by two permanent sentinels:
//!
//! ```text
//! Level 2:  [MIN] <----------------------------> [25] <----------> [MAX]
//!             |                                    |                 |
//! Level 1:  [MIN] <--> [5] <---------> [10] <--> [25] <----------> [MAX]
//!             |         |                |         |                 |
//! Level 0:  [MIN] <--> [5] <---------> [10] <--> [25] <--> [30] <--> [MAX]
//! ```
//!
//! Level 0 holds every key. Whenever a key is inserted, a [`Promotion`] source
//! decides level by level whether it is also copied to the level above, and
//! each copy is linked vertically to the copies directly above and below it.
//! With the default fair coin, about half the keys of a level reach the next
//! one.
//!
//! The sentinels hold `i32::MIN` and `i32::MAX` (exported as [`MIN`] and
//! [`MAX`]), so those two values are reserved and are rejected by
//! [`SkipList::insert`] and [`SkipList::delete`].
//!
//! ```
//! use sentinel_skiplist::{Scripted, SkipList};
//!
//! // Promote every key exactly once.
//! let mut sl = SkipList::with_promotion(3, Scripted::new([true, false]))?;
//! sl.extend([10, 30, 5, 25]);
//! assert!(sl.contains(25));
//! assert!(sl.delete(25));
//! print!("{sl}");
//! # Ok::<(), sentinel_skiplist::SkipListError>(())
//! ```

mod arena;
mod bound;
pub mod promotion;
mod skiplist;

pub use bound::{MAX, MIN};
pub use promotion::{Always, CoinFlip, Never, Promotion, PromotionError, Scripted};
pub use skiplist::{DeleteError, InsertError, Iter, MAX_DEPTH, SkipList, SkipListError};
