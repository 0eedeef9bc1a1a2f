//! Binary heap algorithms over an [`Orderable`] collection
//!
//! The engine owns no storage. It only compares and exchanges slots of a
//! collection through the [`Orderable`] capability, so the same code serves
//! fixed-size arrays, growable vectors and storage owned by someone else.
//!
//! Insertion and removal use the last slot as the in/out place:
//!
//! - to push, append the new element and call [`push_last`]
//! - to pop, call [`pop_to_last`] and then truncate the last slot
//! - to remove an arbitrary element, call [`remove_to_last`] and truncate
//!
//! The engine never grows or shrinks the collection itself.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity |
//! |------------------|------------|
//! | `heapify`        | O(n)       |
//! | `push_last`      | O(log n)   |
//! | `pop_to_last`    | O(log n)   |
//! | `fix`            | O(log n)   |
//! | `remove_to_last` | O(log n)   |
//!
//! # Example
//!
//! ```rust
//! use heapkit::engine;
//!
//! let mut v = vec![5, 2, 1];
//! engine::heapify(v.as_mut_slice());
//! v.push(3);
//! engine::push_last(v.as_mut_slice());
//!
//! engine::pop_to_last(v.as_mut_slice());
//! assert_eq!(v.pop(), Some(1));
//! ```

use crate::traits::{Comparator, Orderable};

/// Establishes the heap invariant over the whole collection
///
/// Sifts down every internal node, from the last parent `n/2 - 1` back to the
/// root.
pub fn heapify<H: Orderable + ?Sized>(h: &mut H) {
    let n = h.len();
    for i in (0..n / 2).rev() {
        sift_down(h, i, n);
    }
}

/// Moves the last element, which was not yet part of the heap, into place
///
/// All elements except the last must already satisfy the invariant. Append
/// the new element before calling this.
pub fn push_last<H: Orderable + ?Sized>(h: &mut H) {
    let n = h.len();
    if n > 1 {
        sift_up(h, n - 1);
    }
}

/// Moves the root to the last slot and re-establishes the invariant over the
/// remaining `n - 1` elements
///
/// Same as `remove_to_last(h, 0)`. The caller removes the last element
/// afterwards. Calling this on an empty collection is a caller error; it is a
/// no-op here.
pub fn pop_to_last<H: Orderable + ?Sized>(h: &mut H) {
    let n = h.len();
    debug_assert!(n > 0, "pop_to_last on an empty heap");
    if n == 0 {
        return;
    }
    let last = n - 1;
    h.swap(0, last);
    sift_down(h, 0, last);
}

/// Re-establishes the invariant after the element at `index` changed in place
///
/// Equivalent to, but cheaper than, `remove_to_last(h, index)` followed by
/// `push_last`.
pub fn fix<H: Orderable + ?Sized>(h: &mut H, index: usize) {
    let n = h.len();
    debug_assert!(index < n, "fix index {index} out of bounds for length {n}");
    if index >= n {
        return;
    }
    sift_down(h, index, n);
    sift_up(h, index);
}

/// Moves the element at `index` to the last slot and re-establishes the
/// invariant over the remaining `n - 1` elements
///
/// The caller removes the last element afterwards.
pub fn remove_to_last<H: Orderable + ?Sized>(h: &mut H, index: usize) {
    let n = h.len();
    debug_assert!(index < n, "remove index {index} out of bounds for length {n}");
    if index >= n {
        return;
    }
    let last = n - 1;
    if index != last {
        h.swap(index, last);
        sift_down(h, index, last);
        sift_up(h, index);
    }
}

/// Returns true if every node ranks no worse than its children
pub fn is_heap<H: Orderable + ?Sized>(h: &H) -> bool {
    let n = h.len();
    (1..n).all(|child| !h.less(child, (child - 1) / 2))
}

/// Walk from `i` toward the root while the element ranks before its parent
fn sift_up<H: Orderable + ?Sized>(h: &mut H, mut i: usize) {
    while i > 0 {
        let parent = (i - 1) / 2;
        if !h.less(i, parent) {
            break;
        }
        h.swap(i, parent);
        i = parent;
    }
}

/// Walk from `i` toward the leaves of the first `n` elements
///
/// The right child is only preferred when it strictly ranks before the left
/// one, so equal children always promote the left.
fn sift_down<H: Orderable + ?Sized>(h: &mut H, mut i: usize, n: usize) {
    loop {
        let left = 2 * i + 1;
        if left >= n {
            break;
        }
        let mut child = left;
        let right = left + 1;
        if right < n && h.less(right, left) {
            child = right;
        }
        if !h.less(child, i) {
            break;
        }
        h.swap(i, child);
        i = child;
    }
}

/// A slice ordered by a value [`Comparator`]
///
/// This is the glue between a comparator over element values and the
/// index-level [`Orderable`] capability. Wrapping a prefix `&mut v[..k]`
/// runs the engine over the first `k` elements only.
pub struct LessBy<'a, T, C: ?Sized> {
    items: &'a mut [T],
    less: &'a C,
}

impl<'a, T, C: Comparator<T> + ?Sized> LessBy<'a, T, C> {
    /// Pairs `items` with the comparator `less`
    pub fn new(items: &'a mut [T], less: &'a C) -> Self {
        Self { items, less }
    }
}

impl<T, C: Comparator<T> + ?Sized> Orderable for LessBy<'_, T, C> {
    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self.less.less(&self.items[i], &self.items[j])
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j)
    }
}
