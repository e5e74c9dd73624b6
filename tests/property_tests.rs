//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify
//! that the heap invariants are always maintained.

use grid_frontier_heap::{
    is_min_heap, Entry, GridKey, HeapError, IndexedMinHeap, KeyedHeap, TrackedMinHeap,
};
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Op {
    Push(i32, i32, i32),
    Pop,
    Decrease(i32, i32, i32),
    Update(usize, i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0i32..8, 0i32..8, -100i32..100).prop_map(|(x, y, v)| Op::Push(x, y, v)),
        2 => Just(Op::Pop),
        2 => (0i32..8, 0i32..8, -100i32..100).prop_map(|(x, y, v)| Op::Decrease(x, y, v)),
        1 => (0usize..64, -100i32..100).prop_map(|(i, v)| Op::Update(i, v)),
    ]
}

/// Pushes of distinct keys, pops, updates: heap property and size hold throughout
fn test_operation_invariants<H: KeyedHeap<i32>>(ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut heap = H::new();
    // model of live key -> value; keys are kept unique so both heaps agree
    let mut model: HashMap<GridKey, i32> = HashMap::new();

    for op in ops {
        let len_before = heap.len();
        match op {
            Op::Push(x, y, value) => {
                let key = GridKey::new(x, y);
                if model.contains_key(&key) {
                    continue;
                }
                heap.push(Entry::new(x, y, value));
                model.insert(key, value);
                prop_assert_eq!(heap.len(), len_before + 1);
            }
            Op::Pop => {
                let popped = heap.pop();
                match popped {
                    Some(entry) => {
                        let expected_min = model.values().min().copied();
                        prop_assert_eq!(Some(entry.value), expected_min);
                        prop_assert_eq!(model.remove(&entry.key()), Some(entry.value));
                        prop_assert_eq!(heap.len(), len_before - 1);
                    }
                    None => prop_assert!(model.is_empty()),
                }
            }
            Op::Decrease(x, y, value) => {
                let key = GridKey::new(x, y);
                let result = heap.decrease_key(key, value);
                match model.get(&key).copied() {
                    None => prop_assert_eq!(result, Err(HeapError::KeyNotFound { x, y })),
                    Some(current) if value > current => {
                        prop_assert_eq!(result, Err(HeapError::PriorityNotDecreased));
                    }
                    Some(_) => {
                        prop_assert_eq!(result, Ok(()));
                        model.insert(key, value);
                    }
                }
                prop_assert_eq!(heap.len(), len_before);
            }
            Op::Update(index, value) => {
                let key = heap.entries().get(index).map(|e| e.key());
                let result = heap.update_value(index, value);
                match key {
                    Some(key) => {
                        prop_assert_eq!(result, Ok(()));
                        prop_assert_eq!(heap.value_of(key), Some(&value));
                        model.insert(key, value);
                    }
                    None => prop_assert_eq!(
                        result,
                        Err(HeapError::InvalidIndex { index, len: len_before })
                    ),
                }
                prop_assert_eq!(heap.len(), len_before);
            }
        }

        prop_assert!(is_min_heap(heap.entries()));
        prop_assert_eq!(heap.len(), model.len());
    }

    Ok(())
}

/// Extracting everything yields values in non-decreasing order
fn test_sorted_extraction<H: KeyedHeap<i32> + FromIterator<Entry<i32>>>(
    values: Vec<i32>,
) -> Result<(), TestCaseError> {
    let mut heap: H = values
        .iter()
        .enumerate()
        .map(|(i, &v)| Entry::new(i as i32, 0, v))
        .collect();
    prop_assert!(is_min_heap(heap.entries()));

    let mut extracted = Vec::with_capacity(values.len());
    while let Some(entry) = heap.pop() {
        extracted.push(entry.value);
    }

    let mut expected = values;
    expected.sort_unstable();
    prop_assert_eq!(extracted, expected);
    prop_assert!(heap.is_empty());
    prop_assert_eq!(heap.pop(), None);

    Ok(())
}

/// Every inserted key is found at a slot holding that key
fn test_lookup_correctness<H: KeyedHeap<i32>>(values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut heap = H::new();
    for (i, &v) in values.iter().enumerate() {
        let key = GridKey::new(i as i32 % 16, i as i32 / 16);
        heap.push(Entry::new(key.x, key.y, v));

        let index = heap.find_index(key);
        prop_assert!(index.is_some());
        prop_assert_eq!(heap.entries()[index.unwrap()].key(), key);
    }

    prop_assert_eq!(heap.find_index(GridKey::new(-1, -1)), None);
    Ok(())
}

/// A decreased entry is extracted at the rank of its new value
fn test_decrease_rank<H: KeyedHeap<i32>>(
    values: Vec<i32>,
    target: usize,
    new_value: i32,
) -> Result<(), TestCaseError> {
    let mut heap = H::new();
    for (i, &v) in values.iter().enumerate() {
        heap.push(Entry::new(i as i32, 1, v));
    }

    let target = target % values.len();
    let key = GridKey::new(target as i32, 1);
    let new_value = new_value.min(values[target]);
    heap.decrease_key(key, new_value)
        .map_err(|e| TestCaseError::fail(e.to_string()))?;
    prop_assert!(is_min_heap(heap.entries()));

    let mut expected = values.clone();
    expected[target] = new_value;
    expected.sort_unstable();

    let mut extracted = Vec::new();
    let mut seen_target = false;
    while let Some(entry) = heap.pop() {
        if entry.key() == key {
            prop_assert_eq!(entry.value, new_value);
            seen_target = true;
        }
        extracted.push(entry.value);
    }
    prop_assert!(seen_target);
    prop_assert_eq!(extracted, expected);

    Ok(())
}

proptest! {
    #[test]
    fn test_indexed_operation_invariants(ops in prop::collection::vec(op_strategy(), 0..200)) {
        test_operation_invariants::<IndexedMinHeap<i32>>(ops)?;
    }

    #[test]
    fn test_tracked_operation_invariants(ops in prop::collection::vec(op_strategy(), 0..200)) {
        test_operation_invariants::<TrackedMinHeap<i32>>(ops)?;
    }

    #[test]
    fn test_indexed_sorted_extraction(values in prop::collection::vec(-1000i32..1000, 0..200)) {
        test_sorted_extraction::<IndexedMinHeap<i32>>(values)?;
    }

    #[test]
    fn test_tracked_sorted_extraction(values in prop::collection::vec(-1000i32..1000, 0..200)) {
        test_sorted_extraction::<TrackedMinHeap<i32>>(values)?;
    }

    #[test]
    fn test_indexed_lookup_correctness(values in prop::collection::vec(-100i32..100, 0..100)) {
        test_lookup_correctness::<IndexedMinHeap<i32>>(values)?;
    }

    #[test]
    fn test_tracked_lookup_correctness(values in prop::collection::vec(-100i32..100, 0..100)) {
        test_lookup_correctness::<TrackedMinHeap<i32>>(values)?;
    }

    #[test]
    fn test_indexed_decrease_rank(
        values in prop::collection::vec(-100i32..100, 1..100),
        target in 0usize..100,
        new_value in -200i32..100
    ) {
        test_decrease_rank::<IndexedMinHeap<i32>>(values, target, new_value)?;
    }

    #[test]
    fn test_tracked_decrease_rank(
        values in prop::collection::vec(-100i32..100, 1..100),
        target in 0usize..100,
        new_value in -200i32..100
    ) {
        test_decrease_rank::<TrackedMinHeap<i32>>(values, target, new_value)?;
    }

    #[test]
    fn test_both_heaps_extract_same_values(
        entries in prop::collection::vec((0i32..10, 0i32..10, -50i32..50), 0..80)
    ) {
        // de-duplicate keys so both heaps hold the same set
        let mut seen = std::collections::HashSet::new();
        let entries: Vec<_> = entries
            .into_iter()
            .filter(|&(x, y, _)| seen.insert((x, y)))
            .map(Entry::from)
            .collect();

        let indexed = IndexedMinHeap::from_entries(entries.iter().copied());
        let tracked = TrackedMinHeap::from_entries(entries.iter().copied());

        let a: Vec<_> = indexed.into_sorted_vec().into_iter().map(|e| e.value).collect();
        let b: Vec<_> = tracked.into_sorted_vec().into_iter().map(|e| e.value).collect();
        prop_assert_eq!(a, b);
    }
}
