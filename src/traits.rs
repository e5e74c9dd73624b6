//! Common traits for the frontier heaps
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`Heap`]: Base trait for a min-heap of grid [`Entry`] values
//! - [`KeyedHeap`]: Extended trait adding lookup by [`GridKey`] and in-place
//!   priority updates
//!
//! [`KeyedHeap`] carries the operations a shortest-path driver needs to relax
//! edges: find the slot holding a node, then lower its tentative distance.

use crate::entry::{Entry, GridKey};
use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// No entry in the heap carries the requested key
    #[error("no entry with key ({x}, {y}) in heap")]
    KeyNotFound { x: i32, y: i32 },
    /// The slot index does not refer to a live entry
    #[error("index {index} out of bounds for heap of length {len}")]
    InvalidIndex { index: usize, len: usize },
    /// The new priority is greater than the current priority
    #[error("new priority is greater than current priority")]
    PriorityNotDecreased,
}

impl HeapError {
    pub(crate) fn key_not_found(key: GridKey) -> Self {
        HeapError::KeyNotFound { x: key.x, y: key.y }
    }
}

/// Base trait for min-heaps of grid entries
///
/// # Example
///
/// ```rust
/// use grid_frontier_heap::{Entry, Heap, IndexedMinHeap};
///
/// let mut heap = IndexedMinHeap::new();
/// heap.push(Entry::new(0, 0, 5));
/// heap.push(Entry::new(1, 0, 3));
///
/// assert_eq!(heap.peek(), Some(&Entry::new(1, 0, 3)));
/// assert_eq!(heap.pop(), Some(Entry::new(1, 0, 3)));
/// assert_eq!(heap.pop(), Some(Entry::new(0, 0, 5)));
/// assert_eq!(heap.pop(), None);
/// ```
pub trait Heap<P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of entries in the heap
    fn len(&self) -> usize;

    /// Inserts an entry
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, entry: Entry<P>);

    /// Returns the entry with the minimum value without removing it
    fn peek(&self) -> Option<&Entry<P>>;

    /// Removes and returns the entry with the minimum value
    ///
    /// Returns `None` once the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<Entry<P>>;

    /// The entries in heap order, root first
    ///
    /// Intended for inspection and testing; slot `i` of the returned slice is
    /// the slot index used by [`KeyedHeap::find_index`].
    fn entries(&self) -> &[Entry<P>];
}

/// Extended heap trait with key lookup and priority updates
///
/// # Example
///
/// ```rust
/// use grid_frontier_heap::{Entry, GridKey, Heap, KeyedHeap, IndexedMinHeap};
///
/// let mut heap = IndexedMinHeap::from_entries([Entry::new(2, 2, 10), Entry::new(3, 3, 4)]);
/// let index = heap.find_index(GridKey::new(2, 2)).unwrap();
/// heap.decrease_value(index, 1).unwrap();
/// assert_eq!(heap.pop(), Some(Entry::new(2, 2, 1)));
/// ```
pub trait KeyedHeap<P: Ord>: Heap<P> {
    /// Returns the slot currently holding `key`, or `None` if absent
    fn find_index(&self, key: GridKey) -> Option<usize>;

    /// Replaces the value of the entry at `index`, keeping its key
    ///
    /// The entry moves toward the root if the value went down and toward the
    /// leaves if it went up, so the heap property holds either way.
    ///
    /// # Errors
    /// Returns `HeapError::InvalidIndex` if `index >= len()`.
    fn update_value(&mut self, index: usize, value: P) -> Result<(), HeapError>;

    /// Lowers the value of the entry at `index`
    ///
    /// # Errors
    /// Returns `HeapError::InvalidIndex` if `index >= len()`, and
    /// `HeapError::PriorityNotDecreased` if `value` is greater than the
    /// current value. The heap is unchanged on error.
    fn decrease_value(&mut self, index: usize, value: P) -> Result<(), HeapError> {
        let len = self.len();
        let current = match self.entries().get(index) {
            Some(entry) => &entry.value,
            None => return Err(HeapError::InvalidIndex { index, len }),
        };
        if value > *current {
            tracing::debug!(index, "rejected priority increase through decrease_value");
            return Err(HeapError::PriorityNotDecreased);
        }
        self.update_value(index, value)
    }

    /// Finds `key` and lowers its value: the edge relaxation step
    ///
    /// # Errors
    /// Returns `HeapError::KeyNotFound` if no entry has `key`, otherwise the
    /// errors of [`decrease_value`](KeyedHeap::decrease_value).
    fn decrease_key(&mut self, key: GridKey, value: P) -> Result<(), HeapError> {
        match self.find_index(key) {
            Some(index) => self.decrease_value(index, value),
            None => {
                tracing::debug!(x = key.x, y = key.y, "decrease_key on absent key");
                Err(HeapError::key_not_found(key))
            }
        }
    }

    /// Returns the current value stored for `key`
    fn value_of(&self, key: GridKey) -> Option<&P> {
        self.find_index(key).map(|index| &self.entries()[index].value)
    }

    /// Returns true if some entry carries `key`
    fn contains_key(&self, key: GridKey) -> bool {
        self.find_index(key).is_some()
    }
}

/// Checks the min-heap property over a zero-based slot layout
///
/// Every slot `i > 0` must hold a value no smaller than its parent at
/// `(i - 1) / 2`.
pub fn is_min_heap<P: Ord>(entries: &[Entry<P>]) -> bool {
    (1..entries.len()).all(|i| entries[i].value >= entries[(i - 1) / 2].value)
}
