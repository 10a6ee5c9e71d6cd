//! [`BoundaryStore`] for the standard library's ordered map.

use std::collections::{BTreeMap, btree_map};
use std::ops::{Bound, RangeBounds};

use crate::BoundaryStore;

/// Ascending entries of a `BTreeMap<i64, T>` store.
pub struct BTreeEntries<'a, T>(btree_map::Range<'a, i64, T>);

impl<'a, T> Iterator for BTreeEntries<'a, T> {
    type Item = (i64, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(&pos, value)| (pos, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> BoundaryStore<T> for BTreeMap<i64, T> {
    type Entries<'a>
        = BTreeEntries<'a, T>
    where
        T: 'a;

    fn count(&self) -> usize {
        self.len()
    }

    fn put(&mut self, pos: i64, value: T) -> Option<T> {
        self.insert(pos, value)
    }

    fn take(&mut self, pos: i64) -> Option<T> {
        self.remove(&pos)
    }

    fn value(&self, pos: i64) -> Option<&T> {
        self.get(&pos)
    }

    fn value_mut(&mut self, pos: i64) -> Option<&mut T> {
        self.get_mut(&pos)
    }

    fn floor(&self, pos: i64) -> Option<(i64, &T)> {
        self.range(..=pos).next_back().map(|(&p, value)| (p, value))
    }

    fn successor(&self, pos: i64) -> Option<(i64, &T)> {
        self.range((Bound::Excluded(pos), Bound::Unbounded))
            .next()
            .map(|(&p, value)| (p, value))
    }

    fn relocate(&mut self, from: i64, to: i64) -> bool {
        if from == to {
            return self.contains_key(&from);
        }
        debug_assert!(!self.contains_key(&to));
        match self.remove(&from) {
            Some(value) => {
                self.insert(to, value);
                true
            }
            None => false,
        }
    }

    fn entries_in<R: RangeBounds<i64>>(&self, range: R) -> Self::Entries<'_> {
        BTreeEntries(self.range(range))
    }

    fn for_each_mut_in<R, F>(&mut self, range: R, mut f: F)
    where
        R: RangeBounds<i64>,
        F: FnMut(i64, &mut T),
    {
        for (&pos, value) in self.range_mut(range) {
            f(pos, value);
        }
    }
}
