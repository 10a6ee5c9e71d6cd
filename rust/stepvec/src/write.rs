//! Point and range writes.
//!
//! Every write leaves the boundaries canonical: after the value is written a
//! boundary exists exactly where a run's value differs from the run before
//! it. The edge boundaries are edited or relocated in place and never
//! removed.

use stepvec_boundary_store::BoundaryStore;
use stepvec_common::{Result, error::Error};

use crate::StepVector;

impl<V, S> StepVector<V, S>
where
    V: PartialEq + Clone,
    S: BoundaryStore<Option<V>>,
{
    /// Sets the value at `pos`.
    ///
    /// See [`set_range`](Self::set_range) for the handling of positions
    /// outside the extent.
    pub fn set(&mut self, pos: i64, value: V) -> Result<()> {
        let Some(end) = pos.checked_add(1) else {
            return Err(Error::out_of_range(pos..pos, self.bounds()));
        };
        self.set_range(pos, end, value)
    }

    /// Sets every position in `[start, end)` to `value`.
    ///
    /// Fails with an inverted-range error if `end < start`; an empty range is
    /// a no-op. A range reaching outside the extent fails with an
    /// out-of-range error unless the vector is relaxed, in which case the
    /// extent grows to cover it and any gap between the old extent and the
    /// range is filled with the ground value. A failed call leaves the vector
    /// unchanged.
    pub fn set_range(&mut self, start: i64, end: i64, value: V) -> Result<()> {
        if end < start {
            return Err(Error::inverted_range(start, end));
        }
        if start == end {
            return Ok(());
        }

        let (lo, hi) = (self.start, self.end);
        if start < lo || end > hi {
            if !self.config.relaxed {
                return Err(Error::out_of_range(start..end, lo..hi));
            }
            log::debug!("growing step vector [{lo}, {hi}) to cover [{start}, {end})");
            if start < lo {
                self.grow_front(start, end.min(lo), &value);
            }
            if end > hi {
                self.grow_back(start.max(hi), end, &value);
            }
        }

        let (start, end) = (start.max(lo), end.min(hi));
        if start < end {
            log::trace!("set_range [{start}, {end})");
            self.fill(start, end, value);
        }
        Ok(())
    }

    /// Moves the start of the vector down to `start` and writes `value` over
    /// `[start, end)`, where `end <= self.start`.
    fn grow_front(&mut self, start: i64, end: i64, value: &V) {
        debug_assert!(start < end && end <= self.start);
        let old = self.start;
        if end < old {
            // The gap [end, old) takes the ground value.
            if self.floor_entry(old).1 == &self.zero {
                self.store.relocate(old, end);
            } else {
                self.store.put(end, Some(self.zero.clone()));
            }
            self.start = end;
        }

        let first = self.start;
        if self.floor_entry(first).1 == value {
            self.store.relocate(first, start);
        } else {
            self.store.put(start, Some(value.clone()));
        }
        self.start = start;
    }

    /// Moves the end of the vector up to `end` and writes `value` over
    /// `[start, end)`, where `start >= self.end`.
    fn grow_back(&mut self, start: i64, end: i64, value: &V) {
        debug_assert!(start < end && start >= self.end);
        let old = self.end;
        self.store.relocate(old, end);
        self.end = end;

        let value_matches = if start > old {
            // The gap [old, start) takes the ground value.
            if self.value_before(old) != &self.zero {
                self.store.put(old, Some(self.zero.clone()));
            }
            value == &self.zero
        } else {
            self.value_before(old) == value
        };
        if !value_matches {
            self.store.put(start, Some(value.clone()));
        }
    }

    /// Writes `value` over `[start, end)`, which lies within the extent.
    pub(crate) fn fill(&mut self, start: i64, end: i64, value: V) {
        debug_assert!(self.start <= start && start < end && end <= self.end);
        let step = self.step_unchecked(start);
        if step.value == &value && step.end() >= end {
            return;
        }

        let joins_previous = start > self.start && self.value_before(start) == &value;
        // What follows the range: an existing boundary, which survives unless
        // it starts a run of `value`, or the tail of the run crossing `end`,
        // which needs a boundary of its own unless it already holds `value`.
        let (joins_next, tail) = match self.store.value(end) {
            Some(next) => (next.as_ref() == Some(&value), None),
            None => {
                let tail = self.value_before(end);
                (false, (tail != &value).then(|| tail.clone()))
            }
        };

        let interior = self
            .store
            .entries_in(start + 1..end)
            .map(|(pos, _)| pos)
            .collect::<Vec<_>>();
        for pos in interior {
            self.store.take(pos);
        }
        if let Some(tail) = tail {
            self.store.put(end, Some(tail));
        }

        let has_start = self.store.contains(start);
        if joins_previous {
            if has_start {
                self.store.take(start);
            }
            if joins_next {
                self.store.take(end);
            }
        } else if has_start {
            self.store.put(start, Some(value));
            if joins_next {
                self.store.take(end);
            }
        } else if joins_next {
            self.store.relocate(end, start);
        } else {
            self.store.put(start, Some(value));
        }
    }
}
