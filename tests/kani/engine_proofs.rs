//! Engine proofs over fixed-size arrays
//!
//! Arrays of symbolic values are small enough for Kani to cover every
//! ordering, so these proofs check the index arithmetic exhaustively.

#[cfg(kani)]
use heapkit::engine;

/// heapify establishes the invariant for any 6 values
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_heapify() {
    let mut data: [u8; 6] = kani::any();
    engine::heapify(&mut data[..]);
    assert!(engine::is_heap(&data[..]));
}

/// pop_to_last leaves the minimum in the last slot and a heap in front of it
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_pop_to_last() {
    let mut data: [u8; 5] = kani::any();
    engine::heapify(&mut data[..]);
    let min = data[0];
    engine::pop_to_last(&mut data[..]);
    assert!(data[4] == min);
    assert!(engine::is_heap(&data[..4]));
    for x in &data[..4] {
        assert!(*x >= min);
    }
}

/// push_last repairs a heap with one appended element
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_push_last() {
    let mut data: [u8; 5] = kani::any();
    engine::heapify(&mut data[..4]);
    engine::push_last(&mut data[..]);
    assert!(engine::is_heap(&data[..]));
}

/// fix and remove_to_last keep the invariant for any index
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_fix_and_remove() {
    let mut data: [u8; 5] = kani::any();
    engine::heapify(&mut data[..]);

    let index: usize = kani::any();
    kani::assume(index < 5);
    data[index] = kani::any();
    engine::fix(&mut data[..], index);
    assert!(engine::is_heap(&data[..]));

    let victim = data[index];
    engine::remove_to_last(&mut data[..], index);
    assert!(data[4] == victim);
    assert!(engine::is_heap(&data[..4]));
}
