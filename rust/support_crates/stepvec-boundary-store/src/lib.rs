//! Ordered storage for run boundaries.
//!
//! A boundary store is an ordered associative container keyed by a signed
//! integer position. It is the physical storage behind a step vector: every
//! entry marks the position where a new run starts. The store itself knows
//! nothing about runs or canonical form; it only answers ordered point and
//! range queries and applies the mutations it is asked to perform.
//!
//! # Key Types
//!
//! - [`BoundaryStore`] - The contract every store implementation satisfies
//! - [`ArenaStore`] - Slot arena with an ordered index; entries keep a stable
//!   [`BoundaryId`] for their whole lifetime, including relocation
//! - `BTreeMap<i64, T>` - The standard ordered map, usable directly
//!
//! Point operations are `O(log n)`, range iteration is `O(log n + k)` for a
//! range touching `k` entries.

pub mod arena;
pub mod btree;

use std::ops::RangeBounds;

pub use arena::{ArenaEntries, ArenaStore, BoundaryId};
pub use btree::BTreeEntries;

/// An ordered container of `(position, value)` entries.
///
/// Positions are unique. Iteration is always in ascending position order.
///
/// Entries cannot be removed while they are being iterated (the borrow
/// checker forbids it), so callers that delete a range of entries collect
/// the positions first and delete them afterwards.
pub trait BoundaryStore<T> {
    /// Ascending iterator over `(position, &value)` entries.
    type Entries<'a>: Iterator<Item = (i64, &'a T)>
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of entries.
    fn count(&self) -> usize;

    /// Returns `true` if the store holds no entries.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Inserts `value` at `pos`.
    ///
    /// An existing entry at `pos` keeps its place and has its value replaced;
    /// the previous value is returned.
    fn put(&mut self, pos: i64, value: T) -> Option<T>;

    /// Removes the entry at `pos` and returns its value.
    fn take(&mut self, pos: i64) -> Option<T>;

    /// Returns the value stored exactly at `pos`.
    fn value(&self, pos: i64) -> Option<&T>;

    /// Returns a mutable reference to the value stored exactly at `pos`.
    fn value_mut(&mut self, pos: i64) -> Option<&mut T>;

    /// Returns `true` if an entry exists exactly at `pos`.
    fn contains(&self, pos: i64) -> bool {
        self.value(pos).is_some()
    }

    /// Returns the entry with the greatest position `<= pos`.
    fn floor(&self, pos: i64) -> Option<(i64, &T)>;

    /// Returns the entry with the smallest position `> pos`.
    fn successor(&self, pos: i64) -> Option<(i64, &T)>;

    /// Moves the entry at `from` to `to` without touching its value.
    ///
    /// Returns `false` if there is no entry at `from`. The caller must not
    /// move an entry past one of its neighbours or onto an occupied position.
    fn relocate(&mut self, from: i64, to: i64) -> bool;

    /// Returns the entries whose positions fall within `range`, ascending.
    fn entries_in<R: RangeBounds<i64>>(&self, range: R) -> Self::Entries<'_>;

    /// Returns all entries, ascending.
    fn entries(&self) -> Self::Entries<'_> {
        self.entries_in(..)
    }

    /// Calls `f` on every entry within `range`, ascending, with mutable
    /// access to the value.
    fn for_each_mut_in<R, F>(&mut self, range: R, f: F)
    where
        R: RangeBounds<i64>,
        F: FnMut(i64, &mut T);
}
