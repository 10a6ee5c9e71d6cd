//! Enumeration of the steps of a vector.

use std::iter::FusedIterator;
use std::ops::Range;

use stepvec_boundary_store::BoundaryStore;
use stepvec_common::Result;

use crate::StepVector;

/// A maximal run of equal values: every position in `range` holds `value`.
///
/// Steps returned by range queries may be clipped to the query bounds, in
/// which case the run continues beyond `range`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<'a, V> {
    pub range: Range<i64>,
    pub value: &'a V,
}

impl<V> Step<'_, V> {
    #[inline]
    pub fn start(&self) -> i64 {
        self.range.start
    }

    #[inline]
    pub fn end(&self) -> i64 {
        self.range.end
    }

    /// Returns the number of positions covered by the step.
    #[inline]
    pub fn len(&self) -> u64 {
        self.range.end.abs_diff(self.range.start)
    }

    #[inline]
    pub fn contains(&self, pos: i64) -> bool {
        self.range.contains(&pos)
    }
}

/// Ascending iterator over the steps of a [`StepVector`].
///
/// Created by [`StepVector::steps`] and [`StepVector::steps_in`]. The reported
/// ranges are contiguous and together tile the requested span exactly.
pub struct Steps<'a, V, I> {
    entries: I,
    /// Boundary that starts the next step.
    current: Option<(i64, &'a Option<V>)>,
    /// Span the reported ranges are clipped to.
    clip: Range<i64>,
}

impl<'a, V, I> Steps<'a, V, I>
where
    I: Iterator<Item = (i64, &'a Option<V>)>,
{
    pub(crate) fn new(mut entries: I, clip: Range<i64>) -> Self {
        let current = entries.next();
        Steps {
            entries,
            current,
            clip,
        }
    }
}

impl<'a, V, I> Iterator for Steps<'a, V, I>
where
    I: Iterator<Item = (i64, &'a Option<V>)>,
{
    type Item = Step<'a, V>;

    fn next(&mut self) -> Option<Step<'a, V>> {
        let (start, value) = self.current.take()?;
        let value = value.as_ref()?;
        let next = self.entries.next()?;
        self.current = Some(next);
        Some(Step {
            range: start.max(self.clip.start)..next.0.min(self.clip.end),
            value,
        })
    }
}

impl<'a, V, I> FusedIterator for Steps<'a, V, I> where I: Iterator<Item = (i64, &'a Option<V>)> {}

impl<V, S> StepVector<V, S>
where
    S: BoundaryStore<Option<V>>,
{
    /// Returns the steps covering the whole extent, in ascending order.
    ///
    /// The iterator is lazy; calling `steps` again starts over.
    pub fn steps(&self) -> Steps<'_, V, S::Entries<'_>> {
        Steps::new(self.store.entries(), self.bounds())
    }

    /// Returns the steps covering `[from, to)`, in ascending order.
    ///
    /// The range is clipped to the extent of the vector, and the first and
    /// last steps are clipped to the range. Fails with an inverted-range error
    /// if `to < from`, and with an out-of-range error if the range lies
    /// entirely outside the vector.
    pub fn steps_in(&self, from: i64, to: i64) -> Result<Steps<'_, V, S::Entries<'_>>> {
        let range = self.check_query_range(from, to)?;
        if range.is_empty() {
            return Ok(Steps::new(self.store.entries_in(range.clone()), range));
        }
        let (first, _) = self.floor_entry(range.start);
        let last = if range.end == self.end {
            self.end
        } else {
            self.step_unchecked(range.end - 1).end()
        };
        Ok(Steps::new(self.store.entries_in(first..=last), range))
    }

    /// Calls `f(start, end, value)` for every step, in ascending order.
    pub fn for_each_step<F>(&self, mut f: F)
    where
        F: FnMut(i64, i64, &V),
    {
        for step in self.steps() {
            f(step.range.start, step.range.end, step.value);
        }
    }

    /// Calls `f(start, end, value)` for every step within `[from, to)`, with
    /// the edge steps clipped to the range. Validation is that of
    /// [`steps_in`](Self::steps_in).
    pub fn for_each_step_in<F>(&self, from: i64, to: i64, mut f: F) -> Result<()>
    where
        F: FnMut(i64, i64, &V),
    {
        for step in self.steps_in(from, to)? {
            f(step.range.start, step.range.end, step.value);
        }
        Ok(())
    }
}

impl<'a, V, S> IntoIterator for &'a StepVector<V, S>
where
    V: 'a,
    S: BoundaryStore<Option<V>> + 'a,
{
    type Item = Step<'a, V>;
    type IntoIter = Steps<'a, V, S::Entries<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps()
    }
}
