//! Indexed binary min-heap with linear key lookup
//!
//! [`IndexedMinHeap`] is a plain array-backed binary min-heap of grid entries.
//! Entries can be located by their `(x, y)` key and have their value changed
//! in place, which is what a Dijkstra frontier needs to relax an edge.
//!
//! No key-to-slot map is kept: [`find_index`](KeyedHeap::find_index) scans
//! the live slots in order, and key uniqueness is left to the caller. When
//! two entries share a key the first one in slot order is the one found.
//! [`TrackedMinHeap`](crate::tracked::TrackedMinHeap) is the variant with a
//! position map.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity |
//! |------------------|------------|
//! | `push`           | O(log n)   |
//! | `pop`            | O(log n)   |
//! | `peek`           | O(1)       |
//! | `find_index`     | O(n)       |
//! | `update_value`   | O(log n)   |
//! | `decrease_key`   | O(n)       |
//! | `from_entries`   | O(n log n) |
//!
//! # Example
//!
//! ```rust
//! use grid_frontier_heap::{Entry, GridKey, Heap, KeyedHeap, IndexedMinHeap};
//!
//! let mut heap = IndexedMinHeap::from_entries([
//!     Entry::new(0, 0, 5),
//!     Entry::new(1, 0, 3),
//!     Entry::new(0, 1, 8),
//! ]);
//!
//! heap.decrease_key(GridKey::new(0, 1), 2).unwrap();
//!
//! assert_eq!(heap.pop(), Some(Entry::new(0, 1, 2)));
//! assert_eq!(heap.pop(), Some(Entry::new(1, 0, 3)));
//! assert_eq!(heap.pop(), Some(Entry::new(0, 0, 5)));
//! assert_eq!(heap.pop(), None);
//! ```

use crate::entry::{Entry, GridKey};
use crate::traits::{Heap, HeapError, KeyedHeap};
use std::cmp::Ordering;

/// A binary min-heap of grid entries with linear-scan key lookup
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<P: Ord> {
    /// Entries in heap order; slot 0 is the root
    data: Vec<Entry<P>>,
}

impl<P: Ord> IndexedMinHeap<P> {
    /// Creates an empty heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap by pushing every entry in order
    ///
    /// The heap property is established incrementally through the normal
    /// insertion path.
    pub fn from_entries<I: IntoIterator<Item = Entry<P>>>(entries: I) -> Self {
        let mut heap = Self::new();
        heap.extend(entries);
        heap
    }

    /// Iterates over the entries in heap order
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<P>> {
        self.data.iter()
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Drains the heap into a vector ordered by non-decreasing value
    pub fn into_sorted_vec(mut self) -> Vec<Entry<P>> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(entry) = self.pop() {
            sorted.push(entry);
        }
        sorted
    }

    /// Move entry at index up while it is smaller than its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index].value < self.data[parent].value {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move entry at index down while a child is strictly smaller
    ///
    /// The left child wins ties between equal children.
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
            self.data.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<P: Ord> Heap<P> for IndexedMinHeap<P> {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, entry: Entry<P>) {
        self.data.push(entry);
        self.sift_up(self.data.len() - 1);
    }

    fn peek(&self) -> Option<&Entry<P>> {
        self.data.first()
    }

    fn pop(&mut self) -> Option<Entry<P>> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        result
    }

    fn entries(&self) -> &[Entry<P>] {
        &self.data
    }
}

impl<P: Ord> KeyedHeap<P> for IndexedMinHeap<P> {
    fn find_index(&self, key: GridKey) -> Option<usize> {
        self.data.iter().position(|entry| entry.has_key(key))
    }

    fn update_value(&mut self, index: usize, value: P) -> Result<(), HeapError> {
        let len = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(HeapError::InvalidIndex { index, len })?;
        let old = std::mem::replace(&mut slot.value, value);
        let direction = slot.value.cmp(&old);

        tracing::trace!(index, ?direction, "updated entry value");
        match direction {
            Ordering::Less => self.sift_up(index),
            Ordering::Greater => self.sift_down(index),
            Ordering::Equal => {}
        }
        Ok(())
    }
}

impl<P: Ord> Default for IndexedMinHeap<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord> Extend<Entry<P>> for IndexedMinHeap<P> {
    fn extend<I: IntoIterator<Item = Entry<P>>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for entry in iter {
            self.push(entry);
        }
    }
}

impl<P: Ord> FromIterator<Entry<P>> for IndexedMinHeap<P> {
    fn from_iter<I: IntoIterator<Item = Entry<P>>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<'a, P: Ord> IntoIterator for &'a IndexedMinHeap<P> {
    type Item = &'a Entry<P>;
    type IntoIter = std::slice::Iter<'a, Entry<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
