//! A slot arena indexed by position.

use std::collections::{BTreeMap, btree_map};
use std::ops::{Bound, RangeBounds};

use crate::BoundaryStore;

/// Stable handle of an entry in an [`ArenaStore`].
///
/// The handle stays valid while the entry is alive: relocating the entry or
/// replacing its value does not change it. Handles of removed entries may be
/// reused by later insertions.
///
/// An arena addresses at most `u32::MAX` slots; converting a larger index
/// panics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundaryId(u32);

impl From<usize> for BoundaryId {
    fn from(value: usize) -> Self {
        BoundaryId(u32::try_from(value).expect("boundary arena holds at most u32::MAX slots"))
    }
}

impl From<BoundaryId> for usize {
    fn from(value: BoundaryId) -> Self {
        value.0 as usize
    }
}

#[derive(Clone)]
struct Slot<T> {
    pos: i64,
    /// `None` for a free slot.
    value: Option<T>,
}

/// A boundary store that keeps entries in a `Vec` of slots and maps positions
/// to slots through an ordered index.
///
/// Every entry lives in one slot for its whole lifetime, so its
/// [`BoundaryId`] is stable across [`relocate`](BoundaryStore::relocate) and
/// [`put`](BoundaryStore::put) on an occupied position. Freed slots are
/// recycled.
///
/// # Examples
///
/// ```
/// use stepvec_boundary_store::{ArenaStore, BoundaryStore};
///
/// let mut store = ArenaStore::new();
/// store.put(1, "a");
/// store.put(10, "end");
/// let id = store.id_of(10).unwrap();
///
/// assert!(store.relocate(10, 12));
/// assert_eq!(store.id_of(12), Some(id));
/// assert_eq!(store.floor(11), Some((1, &"a")));
/// assert_eq!(store.successor(1), Some((12, &"end")));
/// ```
#[derive(Clone)]
pub struct ArenaStore<T> {
    /// Entry storage, addressed by `BoundaryId`.
    slots: Vec<Slot<T>>,
    /// Position to slot mapping, ordered by position.
    index: BTreeMap<i64, BoundaryId>,
    /// Free slots available for reuse.
    free: Vec<BoundaryId>,
}

impl<T> Default for ArenaStore<T> {
    fn default() -> Self {
        ArenaStore::new()
    }
}

impl<T> ArenaStore<T> {
    /// Creates a new empty `ArenaStore`.
    pub fn new() -> ArenaStore<T> {
        ArenaStore {
            slots: Vec::new(),
            index: BTreeMap::new(),
            free: Vec::new(),
        }
    }

    /// Creates a new empty `ArenaStore` with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> ArenaStore<T> {
        ArenaStore {
            slots: Vec::with_capacity(capacity),
            index: BTreeMap::new(),
            free: Vec::new(),
        }
    }

    /// Returns the handle of the entry at `pos`.
    pub fn id_of(&self, pos: i64) -> Option<BoundaryId> {
        self.index.get(&pos).copied()
    }

    /// Returns the current position of the entry with the given handle,
    /// or `None` if the handle refers to a free slot.
    pub fn position_of(&self, id: BoundaryId) -> Option<i64> {
        self.slots
            .get(usize::from(id))
            .filter(|slot| slot.value.is_some())
            .map(|slot| slot.pos)
    }

    /// Returns the position and value of the entry with the given handle.
    pub fn get(&self, id: BoundaryId) -> Option<(i64, &T)> {
        let slot = self.slots.get(usize::from(id))?;
        slot.value.as_ref().map(|value| (slot.pos, value))
    }

    /// Verifies the internal consistency of the `ArenaStore`.
    ///
    /// # Panics
    ///
    /// Panics if the index and the slots disagree.
    pub fn verify(&self) {
        assert_eq!(self.index.len() + self.free.len(), self.slots.len());
        for (&pos, &id) in &self.index {
            let slot = &self.slots[usize::from(id)];
            assert_eq!(slot.pos, pos);
            assert!(slot.value.is_some(), "indexed slot {id:?} is free");
        }
        for &id in &self.free {
            assert!(self.slots[usize::from(id)].value.is_none());
        }
    }

    fn live(&self, id: BoundaryId) -> &T {
        self.slots[usize::from(id)]
            .value
            .as_ref()
            .expect("indexed slot is live")
    }

    fn allocate(&mut self, pos: i64, value: T) -> BoundaryId {
        match self.free.pop() {
            Some(id) => {
                self.slots[usize::from(id)] = Slot {
                    pos,
                    value: Some(value),
                };
                id
            }
            None => {
                let id = BoundaryId::from(self.slots.len());
                self.slots.push(Slot {
                    pos,
                    value: Some(value),
                });
                id
            }
        }
    }
}

impl<T> std::fmt::Debug for ArenaStore<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

/// Ascending entries of an [`ArenaStore`].
pub struct ArenaEntries<'a, T> {
    index: btree_map::Range<'a, i64, BoundaryId>,
    slots: &'a [Slot<T>],
}

impl<'a, T> ArenaEntries<'a, T> {
    fn resolve(&self, pos: i64, id: BoundaryId) -> (i64, &'a T) {
        let slots: &'a [Slot<T>] = self.slots;
        let value = slots[usize::from(id)]
            .value
            .as_ref()
            .expect("indexed slot is live");
        (pos, value)
    }
}

impl<'a, T> Iterator for ArenaEntries<'a, T> {
    type Item = (i64, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let (&pos, &id) = self.index.next()?;
        Some(self.resolve(pos, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.index.size_hint()
    }
}

impl<T> BoundaryStore<T> for ArenaStore<T> {
    type Entries<'a>
        = ArenaEntries<'a, T>
    where
        T: 'a;

    fn count(&self) -> usize {
        self.index.len()
    }

    fn put(&mut self, pos: i64, value: T) -> Option<T> {
        if let Some(&id) = self.index.get(&pos) {
            return self.slots[usize::from(id)].value.replace(value);
        }
        let id = self.allocate(pos, value);
        self.index.insert(pos, id);
        None
    }

    fn take(&mut self, pos: i64) -> Option<T> {
        let id = self.index.remove(&pos)?;
        let value = self.slots[usize::from(id)].value.take();
        self.free.push(id);
        value
    }

    fn value(&self, pos: i64) -> Option<&T> {
        self.index.get(&pos).map(|&id| self.live(id))
    }

    fn value_mut(&mut self, pos: i64) -> Option<&mut T> {
        let id = *self.index.get(&pos)?;
        self.slots[usize::from(id)].value.as_mut()
    }

    fn floor(&self, pos: i64) -> Option<(i64, &T)> {
        self.index
            .range(..=pos)
            .next_back()
            .map(|(&p, &id)| (p, self.live(id)))
    }

    fn successor(&self, pos: i64) -> Option<(i64, &T)> {
        self.index
            .range((Bound::Excluded(pos), Bound::Unbounded))
            .next()
            .map(|(&p, &id)| (p, self.live(id)))
    }

    fn relocate(&mut self, from: i64, to: i64) -> bool {
        if from == to {
            return self.index.contains_key(&from);
        }
        debug_assert!(!self.index.contains_key(&to));
        let Some(id) = self.index.remove(&from) else {
            return false;
        };
        self.slots[usize::from(id)].pos = to;
        self.index.insert(to, id);
        true
    }

    fn entries_in<R: RangeBounds<i64>>(&self, range: R) -> Self::Entries<'_> {
        ArenaEntries {
            index: self.index.range(range),
            slots: &self.slots,
        }
    }

    fn for_each_mut_in<R, F>(&mut self, range: R, mut f: F)
    where
        R: RangeBounds<i64>,
        F: FnMut(i64, &mut T),
    {
        for (&pos, &id) in self.index.range(range) {
            if let Some(value) = self.slots[usize::from(id)].value.as_mut() {
                f(pos, value);
            }
        }
    }
}
