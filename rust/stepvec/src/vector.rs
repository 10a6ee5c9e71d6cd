//! The step vector type: construction, accessors and point reads.

use std::fmt;
use std::ops::Range;

use itertools::Itertools;
use stepvec_boundary_store::{ArenaStore, BoundaryStore};
use stepvec_common::{Result, error::Error, verify_arg};

use crate::{config::StepVectorConfig, steps::Step};

/// A dense sequence of values over `[start, end)`, stored as the positions
/// where the value changes.
///
/// Each stored boundary `(pos, value)` starts a run that extends to the next
/// boundary. The last boundary sits at [`end`](Self::end) and carries no
/// value. The representation is always canonical: two adjacent runs never
/// hold equal values, so the number of stored boundaries is the minimum needed
/// to describe the data.
///
/// Reads and writes cost `O(log n)` in the number of runs `n` plus the number
/// of runs a range operation touches; nothing depends on the length of the
/// domain.
///
/// The boundary store `S` defaults to [`ArenaStore`], which keeps the two
/// edge boundaries in place when the extent grows. Any other
/// [`BoundaryStore`] may be supplied through [`with_store`](Self::with_store).
///
/// # Examples
///
/// ```
/// use stepvec::StepVector;
///
/// let mut v = StepVector::new(1, 10, 0).unwrap();
/// v.set_range(3, 6, 7).unwrap();
/// v.set(6, 7).unwrap();
///
/// assert_eq!(v.to_string(), "[1:0 3:7 7:0 10:<nil>]");
/// assert_eq!(v.count(), 3);
/// assert_eq!(*v.at(5).unwrap(), 7);
/// assert!(v.at(10).is_err());
/// ```
#[derive(Clone)]
pub struct StepVector<V, S = ArenaStore<Option<V>>> {
    /// Ground value; fills the gap when the extent grows non-contiguously.
    pub(crate) zero: V,
    pub(crate) config: StepVectorConfig,
    /// Run boundaries. `None` marks the end sentinel.
    pub(crate) store: S,
    /// Position of the first boundary.
    pub(crate) start: i64,
    /// Position of the end sentinel.
    pub(crate) end: i64,
}

impl<V: Clone> StepVector<V> {
    /// Creates a strict vector over `[start, end)` holding `zero` everywhere.
    ///
    /// Fails with a zero-length error if `start >= end`.
    pub fn new(start: i64, end: i64, zero: V) -> Result<Self> {
        Self::with_config(start, end, zero, StepVectorConfig::default())
    }

    /// Creates a vector over `[start, end)` holding `zero` everywhere.
    pub fn with_config(start: i64, end: i64, zero: V, config: StepVectorConfig) -> Result<Self> {
        let store = ArenaStore::with_capacity(config.capacity.max(2));
        Self::with_store(store, start, end, zero, config)
    }
}

impl<V, S> StepVector<V, S>
where
    V: Clone,
    S: BoundaryStore<Option<V>>,
{
    /// Creates a vector over `[start, end)` that keeps its boundaries in
    /// `store`, which must be empty.
    pub fn with_store(
        mut store: S,
        start: i64,
        end: i64,
        zero: V,
        config: StepVectorConfig,
    ) -> Result<Self> {
        if start >= end {
            return Err(Error::zero_length(start, end));
        }
        verify_arg!(store, store.is_empty());
        store.put(start, Some(zero.clone()));
        store.put(end, None);
        Ok(StepVector {
            zero,
            config,
            store,
            start,
            end,
        })
    }
}

impl<V, S> StepVector<V, S>
where
    S: BoundaryStore<Option<V>>,
{
    /// Returns the first position of the vector.
    #[inline]
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Returns the position one past the last element of the vector.
    #[inline]
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Returns the extent of the vector as a range.
    #[inline]
    pub fn bounds(&self) -> Range<i64> {
        self.start..self.end
    }

    /// Returns the length of the represented data, `end - start`.
    #[inline]
    pub fn len(&self) -> u64 {
        self.end.abs_diff(self.start)
    }

    /// Returns the number of steps (maximal runs) in the vector.
    #[inline]
    pub fn count(&self) -> usize {
        self.store.count() - 1
    }

    /// Returns the ground value.
    pub fn zero(&self) -> &V {
        &self.zero
    }

    pub fn config(&self) -> &StepVectorConfig {
        &self.config
    }

    /// Returns `true` if writes outside the extent grow the vector.
    pub fn is_relaxed(&self) -> bool {
        self.config.relaxed
    }

    pub fn set_relaxed(&mut self, relaxed: bool) {
        self.config.relaxed = relaxed;
    }

    /// Returns the underlying boundary store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the value at `pos`.
    ///
    /// Fails with an out-of-range error if `pos` is outside the extent.
    pub fn at(&self, pos: i64) -> Result<&V> {
        self.check_position(pos)?;
        Ok(self.floor_entry(pos).1)
    }

    /// Returns the step containing `pos`.
    ///
    /// Fails with an out-of-range error if `pos` is outside the extent.
    pub fn step_at(&self, pos: i64) -> Result<Step<'_, V>> {
        self.check_position(pos)?;
        Ok(self.step_unchecked(pos))
    }

    pub(crate) fn check_position(&self, pos: i64) -> Result<()> {
        if pos < self.start || pos >= self.end {
            return Err(Error::out_of_range(
                pos..pos.saturating_add(1),
                self.bounds(),
            ));
        }
        Ok(())
    }

    /// Validates a query range and clips it to the extent.
    ///
    /// The range must not be inverted and must not lie entirely outside the
    /// vector.
    pub(crate) fn check_query_range(&self, from: i64, to: i64) -> Result<Range<i64>> {
        if to < from {
            return Err(Error::inverted_range(from, to));
        }
        if to <= self.start || from >= self.end {
            return Err(Error::out_of_range(from..to, self.bounds()));
        }
        Ok(from.max(self.start)..to.min(self.end))
    }

    /// Returns the boundary that starts the run containing `pos`.
    ///
    /// `pos` must be within the extent.
    pub(crate) fn floor_entry(&self, pos: i64) -> (i64, &V) {
        debug_assert!(self.bounds().contains(&pos));
        let (at, value) = self
            .store
            .floor(pos)
            .expect("a boundary exists at the vector start");
        (at, value.as_ref().expect("run boundary carries a value"))
    }

    /// Returns the value of the run that ends just before `pos`.
    ///
    /// `pos` must satisfy `start < pos <= end`.
    pub(crate) fn value_before(&self, pos: i64) -> &V {
        self.floor_entry(pos - 1).1
    }

    /// `pos` must be within the extent.
    pub(crate) fn step_unchecked(&self, pos: i64) -> Step<'_, V> {
        let (start, value) = self.floor_entry(pos);
        let (end, _) = self
            .store
            .successor(pos)
            .expect("the end sentinel follows every run");
        Step {
            range: start..end,
            value,
        }
    }
}

impl<V, S> StepVector<V, S>
where
    V: PartialEq,
    S: BoundaryStore<Option<V>>,
{
    /// Verifies that the boundaries are in canonical form.
    ///
    /// # Panics
    ///
    /// Panics if the first boundary is not at `start`, the last boundary is
    /// not a value-less sentinel at `end`, or two adjacent runs hold equal
    /// values.
    pub fn verify(&self) {
        assert!(self.start < self.end);
        let entries = self.store.entries().collect::<Vec<_>>();
        assert!(entries.len() >= 2, "vector has {} boundaries", entries.len());

        let (first, last) = (entries[0], entries[entries.len() - 1]);
        assert_eq!(first.0, self.start, "first boundary is not at the start");
        assert_eq!(last.0, self.end, "last boundary is not at the end");
        assert!(last.1.is_none(), "end sentinel carries a value");

        for (a, b) in entries.iter().tuple_windows() {
            assert!(a.0 < b.0, "boundaries {} and {} out of order", a.0, b.0);
            assert!(a.1.is_some(), "boundary {} carries no value", a.0);
            assert!(
                a.1 != b.1,
                "adjacent boundaries {} and {} hold equal values",
                a.0,
                b.0
            );
        }
    }
}

impl<V, S> fmt::Display for StepVector<V, S>
where
    V: fmt::Display,
    S: BoundaryStore<Option<V>>,
{
    /// Renders every boundary as `pos:value`, the end sentinel as `pos:<nil>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let boundaries = self
            .store
            .entries()
            .format_with(" ", |(pos, value), emit| match value {
                Some(value) => emit(&format_args!("{pos}:{value}")),
                None => emit(&format_args!("{pos}:<nil>")),
            });
        write!(f, "[{boundaries}]")
    }
}

impl<V, S> fmt::Debug for StepVector<V, S>
where
    V: fmt::Debug,
    S: BoundaryStore<Option<V>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepVector")
            .field("zero", &self.zero)
            .field("relaxed", &self.config.relaxed)
            .field(
                "steps",
                &self
                    .steps()
                    .map(|step| (step.range, step.value))
                    .collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}
