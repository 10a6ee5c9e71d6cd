//! Value transforms over whole runs.

use std::ops::{Bound, RangeBounds};

use itertools::Itertools;
use stepvec_boundary_store::BoundaryStore;
use stepvec_common::Result;

use crate::StepVector;

impl<V, S> StepVector<V, S>
where
    V: PartialEq + Clone,
    S: BoundaryStore<Option<V>>,
{
    /// Replaces the value of every step with `f(value)`, in ascending order.
    ///
    /// `f` runs once per step rather than once per position. Steps that end
    /// up equal to their predecessor are merged into it.
    pub fn apply<F>(&mut self, mut f: F)
    where
        F: FnMut(&V) -> V,
    {
        let (start, end) = (self.start, self.end);
        self.store.for_each_mut_in(start..end, |_, slot| {
            if let Some(value) = slot {
                let next = f(value);
                *value = next;
            }
        });
        self.merge_equal_runs(start..end);
    }

    /// Replaces every value within `[from, to)` with `f(value)`.
    ///
    /// Steps crossing the range edges are split so that positions outside
    /// the range keep their value. The range is clipped to the extent; it
    /// fails with an inverted-range error if `to < from` and with an
    /// out-of-range error if it lies entirely outside the vector.
    pub fn apply_range<F>(&mut self, from: i64, to: i64, mut f: F) -> Result<()>
    where
        F: FnMut(&V) -> V,
    {
        let range = self.check_query_range(from, to)?;
        let (from, to) = (range.start, range.end);
        if from == to {
            return Ok(());
        }
        log::trace!("apply_range [{from}, {to})");

        let step = self.step_unchecked(from);
        if step.end() >= to {
            let value = f(step.value);
            self.fill(from, to, value);
            return Ok(());
        }

        // Pin the untransformed values on both sides of the range.
        if !self.store.contains(to) {
            let tail = self.value_before(to).clone();
            self.store.put(to, Some(tail));
        }
        if !self.store.contains(from) {
            let head = self.floor_entry(from).1.clone();
            self.store.put(from, Some(head));
        }

        self.store.for_each_mut_in(from..to, |_, slot| {
            if let Some(value) = slot {
                let next = f(value);
                *value = next;
            }
        });

        let lo = if from > self.start {
            self.floor_entry(from - 1).0
        } else {
            from
        };
        let hi = if to < self.end {
            Bound::Included(to)
        } else {
            Bound::Excluded(to)
        };
        self.merge_equal_runs((Bound::Included(lo), hi));
        Ok(())
    }

    /// Removes every boundary within `range` that holds the same value as the
    /// boundary before it.
    fn merge_equal_runs<R: RangeBounds<i64>>(&mut self, range: R) {
        let redundant = self
            .store
            .entries_in(range)
            .tuple_windows()
            .filter(|((_, a), (_, b))| a == b)
            .map(|(_, (pos, _))| pos)
            .collect::<Vec<_>>();
        for pos in redundant {
            self.store.take(pos);
        }
    }
}
