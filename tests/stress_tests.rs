//! Stress tests that push the heaps through long operation sequences
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use heapkit::engine;
use heapkit::{IntHeap, Natural, Reversed, StringHeap, TopNHeap, TypedHeap};

/// Linear congruential generator for reproducible random numbers
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.0 >> 33
    }
}

/// Test massive numbers of pushes and pops
#[test]
fn test_massive_operations() {
    let mut heap = IntHeap::new();
    for i in (0..10_000).rev() {
        heap.push(i);
    }
    assert_eq!(heap.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(heap.pop(), Ok(i));
    }
    assert!(heap.is_empty());
}

/// Test alternating push and pop
#[test]
fn test_alternating_ops() {
    let mut heap = IntHeap::new();
    let mut rng = Lcg(99);
    let mut last_popped = i64::MIN;

    for _ in 0..2_000 {
        // Values never drop below the last pop, so pops must be monotone.
        heap.push(last_popped + (rng.next() % 1000) as i64);
        heap.push(last_popped + (rng.next() % 1000) as i64);

        let popped = heap.pop().unwrap();
        assert!(popped >= last_popped);
        last_popped = popped;
        assert!(engine::is_heap(heap.as_slice()));
    }
    assert_eq!(heap.len(), 2_000);
}

/// Test many duplicate values
#[test]
fn test_many_duplicates() {
    let mut heap: IntHeap<Reversed> = TypedHeap::with_less(Reversed, 0);
    for i in 0..3_000 {
        heap.push(i % 3);
    }

    let drained = heap.pop_all();
    assert_eq!(drained.len(), 3_000);
    assert!(drained.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(drained[0], 0);
    assert_eq!(drained[2_999], 2);
}

/// Test heapify against sorting on a large random input
#[test]
fn test_large_from_vec() {
    let mut rng = Lcg(7);
    let data: Vec<i64> = (0..50_000).map(|_| rng.next() as i64).collect();

    let mut expected = data.clone();
    expected.sort_unstable_by(|a, b| b.cmp(a));

    let mut heap = IntHeap::from_vec(data);
    assert!(engine::is_heap(heap.as_slice()));
    assert_eq!(heap.pop_all(), expected);
}

/// Test a long stream through a bounded heap
#[test]
fn test_top_n_long_stream() {
    let mut rng = Lcg(2024);
    let data: Vec<i64> = (0..200_000).map(|_| rng.next() as i64).collect();

    let mut top = TopNHeap::new(100, Natural).unwrap();
    for &x in &data {
        top.admit(x);
    }
    assert_eq!(top.len(), 100);

    let mut expected = data;
    expected.sort_unstable_by(|a, b| b.cmp(a));
    expected.truncate(100);
    assert_eq!(top.drain(), expected);
}

/// Test removing from the middle until empty
#[test]
fn test_remove_everything() {
    let mut rng = Lcg(5);
    let mut heap = StringHeap::new();
    for i in 0..500 {
        heap.push(format!("key-{:04}", (i * 37) % 500));
    }

    while !heap.is_empty() {
        let index = rng.next() as usize % heap.len();
        heap.remove(index).unwrap();
        assert!(engine::is_heap(heap.as_slice()));
    }
}
