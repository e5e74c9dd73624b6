//! Indexed min-heaps for grid shortest-path frontiers
//!
//! This crate provides binary min-heaps of grid entries `(x, y, value)` with
//! the operations a Dijkstra-style search needs from its frontier: insert,
//! extract-min, lookup of a node by coordinate, and in-place priority
//! decrease.
//!
//! # Heaps
//!
//! - **[`IndexedMinHeap`]**: array-backed heap with linear key lookup; O(log n)
//!   insert and extract-min, O(n) `find_index`
//! - **[`TrackedMinHeap`]**: same layout plus a key-to-slot map; O(1) expected
//!   `find_index` and O(log n) `decrease_key`, unique keys
//!
//! Both implement [`Heap`] and [`KeyedHeap`], so search code can be written
//! against the traits.
//!
//! # Example
//!
//! ```rust
//! use grid_frontier_heap::{Entry, GridKey, Heap, KeyedHeap, IndexedMinHeap};
//!
//! let mut frontier = IndexedMinHeap::from_entries([
//!     Entry::new(0, 0, 0u32),
//!     Entry::new(1, 0, u32::MAX),
//!     Entry::new(0, 1, u32::MAX),
//! ]);
//!
//! let source = frontier.pop().unwrap();
//! assert_eq!(source.key(), GridKey::new(0, 0));
//!
//! // relax the edge (0, 0) -> (0, 1) with weight 2
//! frontier.decrease_key(GridKey::new(0, 1), source.value + 2).unwrap();
//! assert_eq!(frontier.pop(), Some(Entry::new(0, 1, 2)));
//! ```

pub mod entry;
pub mod indexed;
pub mod tracked;
pub mod traits;

pub use entry::{Entry, GridKey};
pub use indexed::IndexedMinHeap;
pub use tracked::TrackedMinHeap;
pub use traits::{is_min_heap, Heap, HeapError, KeyedHeap};
