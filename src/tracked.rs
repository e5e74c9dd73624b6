//! Binary min-heap with a key-to-slot position map
//!
//! [`TrackedMinHeap`] keeps the same array layout and sift rules as
//! [`IndexedMinHeap`](crate::indexed::IndexedMinHeap) and additionally records
//! where every key currently lives. Every swap updates the map, which turns
//! key lookup into a hash probe and `decrease_key` into O(log n).
//!
//! Keys are unique: pushing an entry whose key is already present replaces
//! that entry's value (and re-sifts it) instead of adding a second entry.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity           |
//! |------------------|----------------------|
//! | `push`           | O(log n)             |
//! | `pop`            | O(log n)             |
//! | `peek`           | O(1)                 |
//! | `find_index`     | O(1) expected        |
//! | `update_value`   | O(log n)             |
//! | `decrease_key`   | O(log n)             |
//! | `remove`         | O(log n)             |
//!
//! # Example
//!
//! ```rust
//! use grid_frontier_heap::{Entry, GridKey, Heap, KeyedHeap, TrackedMinHeap};
//!
//! let mut heap = TrackedMinHeap::new();
//! heap.push(Entry::new(0, 0, 5));
//! heap.push(Entry::new(1, 0, 3));
//!
//! // Same key again: the value is replaced, no duplicate is created
//! assert_eq!(heap.insert(Entry::new(0, 0, 1)), Some(5));
//! assert_eq!(heap.len(), 2);
//!
//! heap.decrease_key(GridKey::new(1, 0), 0).unwrap();
//! assert_eq!(heap.pop(), Some(Entry::new(1, 0, 0)));
//! assert_eq!(heap.pop(), Some(Entry::new(0, 0, 1)));
//! ```

use crate::entry::{Entry, GridKey};
use crate::traits::{Heap, HeapError, KeyedHeap};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// A binary min-heap of grid entries that tracks the slot of every key
#[derive(Debug, Clone)]
pub struct TrackedMinHeap<P: Ord> {
    data: Vec<Entry<P>>,
    /// Current slot of each key in `data`
    positions: FxHashMap<GridKey, usize>,
}

impl<P: Ord> TrackedMinHeap<P> {
    /// Creates an empty heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Builds a heap by pushing every entry in order
    ///
    /// Later entries with an already seen key replace the earlier value.
    pub fn from_entries<I: IntoIterator<Item = Entry<P>>>(entries: I) -> Self {
        let mut heap = Self::new();
        heap.extend(entries);
        heap
    }

    /// Inserts `entry`, or replaces the value of the entry with the same key
    ///
    /// Returns the replaced value when the key was already present.
    pub fn insert(&mut self, entry: Entry<P>) -> Option<P> {
        let key = entry.key();
        if let Some(&index) = self.positions.get(&key) {
            tracing::trace!(x = key.x, y = key.y, index, "replacing value of existing key");
            let old = std::mem::replace(&mut self.data[index].value, entry.value);
            self.restore(index, &old);
            self.check_invariants();
            return Some(old);
        }

        let index = self.data.len();
        self.data.push(entry);
        self.positions.insert(key, index);
        self.sift_up(index);
        self.check_invariants();
        None
    }

    /// Removes the entry with `key`, wherever it sits in the heap
    pub fn remove(&mut self, key: GridKey) -> Option<Entry<P>> {
        let index = self.positions.remove(&key)?;
        let last_idx = self.data.len() - 1;
        self.swap_slots(index, last_idx);
        let removed = self.data.pop()?;
        // swap_slots re-registered the removed key at last_idx
        self.positions.remove(&key);

        if index < self.data.len() {
            self.sift_up(index);
            self.sift_down(index);
        }
        tracing::trace!(x = key.x, y = key.y, index, "removed entry");
        self.check_invariants();
        Some(removed)
    }

    /// Iterates over the entries in heap order
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<P>> {
        self.data.iter()
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.data.clear();
        self.positions.clear();
    }

    /// Drains the heap into a vector ordered by non-decreasing value
    pub fn into_sorted_vec(mut self) -> Vec<Entry<P>> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(entry) = self.pop() {
            sorted.push(entry);
        }
        sorted
    }

    /// Swap two slots and keep the position map in step
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.positions.insert(self.data[a].key(), a);
        self.positions.insert(self.data[b].key(), b);
    }

    /// Re-sift the entry at `index` after its value changed from `old`
    fn restore(&mut self, index: usize, old: &P) -> Ordering {
        let direction = self.data[index].value.cmp(old);
        match direction {
            Ordering::Less => self.sift_up(index),
            Ordering::Greater => self.sift_down(index),
            Ordering::Equal => {}
        }
        direction
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index].value < self.data[parent].value {
                self.swap_slots(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.data[left].value < self.data[smallest].value {
                smallest = left;
            }
            if right < len && self.data[right].value < self.data[smallest].value {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.swap_slots(index, smallest);
            index = smallest;
        }
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        assert_eq!(
            self.positions.len(),
            self.data.len(),
            "position map has {} keys but heap has {} entries",
            self.positions.len(),
            self.data.len()
        );
        for (index, entry) in self.data.iter().enumerate() {
            assert_eq!(
                self.positions.get(&entry.key()),
                Some(&index),
                "position map out of step for key {}",
                entry.key()
            );
        }
        assert!(
            crate::traits::is_min_heap(&self.data),
            "heap property violated"
        );
    }

    #[cfg(not(debug_assertions))]
    #[inline]
    fn check_invariants(&self) {}
}

impl<P: Ord> Heap<P> for TrackedMinHeap<P> {
    fn new() -> Self {
        Self {
            data: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, entry: Entry<P>) {
        self.insert(entry);
    }

    fn peek(&self) -> Option<&Entry<P>> {
        self.data.first()
    }

    fn pop(&mut self) -> Option<Entry<P>> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.swap_slots(0, last_idx);
        let result = self.data.pop()?;
        self.positions.remove(&result.key());

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        self.check_invariants();
        Some(result)
    }

    fn entries(&self) -> &[Entry<P>] {
        &self.data
    }
}

impl<P: Ord> KeyedHeap<P> for TrackedMinHeap<P> {
    fn find_index(&self, key: GridKey) -> Option<usize> {
        self.positions.get(&key).copied()
    }

    fn update_value(&mut self, index: usize, value: P) -> Result<(), HeapError> {
        let len = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(HeapError::InvalidIndex { index, len })?;
        let old = std::mem::replace(&mut slot.value, value);
        let direction = self.restore(index, &old);

        tracing::trace!(index, ?direction, "updated entry value");
        self.check_invariants();
        Ok(())
    }
}

impl<P: Ord> Default for TrackedMinHeap<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord> Extend<Entry<P>> for TrackedMinHeap<P> {
    fn extend<I: IntoIterator<Item = Entry<P>>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl<P: Ord> FromIterator<Entry<P>> for TrackedMinHeap<P> {
    fn from_iter<I: IntoIterator<Item = Entry<P>>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}
