//! Entries stored in the frontier heaps
//!
//! An [`Entry`] is the `(x, y, value)` triple of a grid search: the coordinate
//! pair is the identity of the entry and `value` is its priority (typically
//! the tentative distance from the search source).

use std::fmt;

/// Identity of an entry: a 2-D grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridKey {
    pub x: i32,
    pub y: i32,
}

impl GridKey {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for GridKey {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A grid node together with its priority
///
/// Only `value` takes part in heap ordering. Two entries with the same
/// coordinates are the same node as far as key lookup is concerned, whatever
/// their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry<P> {
    pub x: i32,
    pub y: i32,
    pub value: P,
}

impl<P> Entry<P> {
    pub const fn new(x: i32, y: i32, value: P) -> Self {
        Self { x, y, value }
    }

    /// The coordinate key of this entry
    #[inline]
    pub fn key(&self) -> GridKey {
        GridKey::new(self.x, self.y)
    }

    #[inline]
    pub(crate) fn has_key(&self, key: GridKey) -> bool {
        self.x == key.x && self.y == key.y
    }
}

impl<P> From<(i32, i32, P)> for Entry<P> {
    fn from((x, y, value): (i32, i32, P)) -> Self {
        Self { x, y, value }
    }
}

impl<P> From<Entry<P>> for (i32, i32, P) {
    fn from(entry: Entry<P>) -> Self {
        (entry.x, entry.y, entry.value)
    }
}

impl<P: fmt::Display> fmt::Display for Entry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.value)
    }
}
