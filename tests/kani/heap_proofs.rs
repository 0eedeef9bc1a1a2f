//! Proofs for the typed and bounded heaps

#[cfg(kani)]
use heapkit::{HeapError, IntHeap, Natural, TopNHeap};

/// peek and pop on an empty heap report Empty instead of panicking
#[cfg(kani)]
#[kani::proof]
fn verify_empty_heap_errors() {
    let mut heap = IntHeap::new();
    assert!(heap.peek() == Err(HeapError::Empty));
    assert!(heap.pop() == Err(HeapError::Empty));
}

/// pop returns the minimum of the pushed values
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_pop_returns_min() {
    let values: [i64; 4] = kani::any();
    let mut heap = IntHeap::new();
    for v in values {
        heap.push(v);
    }
    let min = *values.iter().min().unwrap();
    assert!(heap.pop() == Ok(min));
    assert!(heap.len() == 3);
}

/// admit never grows the heap past its capacity
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_top_n_capacity() {
    let values: [i32; 5] = kani::any();
    let mut top = TopNHeap::new(2, Natural).unwrap();
    for v in values {
        top.admit(v);
        assert!(top.len() <= 2);
    }
    let worst = *top.peek().unwrap();
    let mut beaten = 0;
    for v in values {
        if v > worst {
            beaten += 1;
        }
    }
    assert!(beaten <= 1);
}
