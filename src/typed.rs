//! Typed heaps backed by a growable vector
//!
//! [`TypedHeap`] owns a `Vec<T>` and a value [`Comparator`], and drives the
//! [`engine`](crate::engine) through a [`LessBy`] view of its storage. One
//! generic type covers every element kind:
//!
//! - [`IntHeap`], [`StringHeap`] and [`FloatHeap`] are the common aliases
//! - any other `T` works the same way, with [`TypedHeap::with_less`] supplying
//!   the ordering when `T` has no [`NaturalOrder`]
//!
//! A default-constructed heap uses the natural ascending order, so the root is
//! the smallest element.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity         |
//! |------------|--------------------|
//! | `push`     | O(log n) amortized |
//! | `pop`      | O(log n)           |
//! | `peek`     | O(1)               |
//! | `pop_all`  | O(n log n)         |
//! | `from_vec` | O(n)               |
//!
//! # Example
//!
//! ```rust
//! use heapkit::typed::{IntHeap, TypedHeap};
//!
//! let mut heap = IntHeap::new();
//! heap.push(5);
//! heap.push(2);
//! heap.push(1);
//! assert_eq!(heap.peek(), Ok(&1));
//! assert_eq!(heap.pop(), Ok(1));
//!
//! let mut max = TypedHeap::with_less(|x: &i64, y: &i64| x > y, 4);
//! max.push(5);
//! max.push(7);
//! assert_eq!(max.pop(), Ok(7));
//! ```

use std::fmt;

use tracing::trace;

use crate::engine::{self, LessBy};
use crate::traits::{Comparator, HeapError, Natural, NaturalOrder};

/// A binary heap over `Vec<T>` ordered by `C`
///
/// The element at index 0 is the root: no other element ranks before it under
/// `C`. Removed elements are moved out of the vector immediately, so the heap
/// never holds on to anything it has handed back.
#[derive(Clone)]
pub struct TypedHeap<T, C = Natural> {
    list: Vec<T>,
    less: C,
}

/// Heap of `i64` values
pub type IntHeap<C = Natural> = TypedHeap<i64, C>;

/// Heap of owned strings
pub type StringHeap<C = Natural> = TypedHeap<String, C>;

/// Heap of `f64` values, compared with the host `<`
pub type FloatHeap<C = Natural> = TypedHeap<f64, C>;

impl<T: NaturalOrder> TypedHeap<T, Natural> {
    /// Creates an empty heap ordered ascending
    pub fn new() -> Self {
        Self {
            list: Vec::new(),
            less: Natural,
        }
    }

    /// Creates an empty heap ordered ascending with room for `capacity`
    /// elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_less(Natural, capacity)
    }

    /// Builds a heap from arbitrary data in O(n)
    pub fn from_vec(list: Vec<T>) -> Self {
        Self::from_vec_with_less(list, Natural)
    }
}

impl<T, C: Comparator<T>> TypedHeap<T, C> {
    /// Creates an empty heap ordered by `less`
    ///
    /// Unlike [`Orderable::less`](crate::traits::Orderable::less), the
    /// comparator receives the values to compare, not their indexes.
    /// `capacity` is only a reservation hint; the heap still grows past it.
    pub fn with_less(less: C, capacity: usize) -> Self {
        Self {
            list: Vec::with_capacity(capacity),
            less,
        }
    }

    /// Builds a heap ordered by `less` from arbitrary data in O(n)
    pub fn from_vec_with_less(mut list: Vec<T>, less: C) -> Self {
        engine::heapify(&mut LessBy::new(list.as_mut_slice(), &less));
        Self { list, less }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Inserts an element
    pub fn push(&mut self, value: T) {
        self.list.push(value);
        engine::push_last(&mut self.view());
    }

    /// Returns the root without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.list.first().ok_or(HeapError::Empty)
    }

    /// Removes and returns the root
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements. The heap is
    /// left untouched in that case.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.list.is_empty() {
            return Err(HeapError::Empty);
        }
        engine::pop_to_last(&mut self.view());
        self.list.pop().ok_or(HeapError::Empty)
    }

    /// Removes and returns the element at `index` of [`as_slice`](Self::as_slice)
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements, and
    /// [`HeapError::IndexOutOfBounds`] if `index >= len()` otherwise.
    pub fn remove(&mut self, index: usize) -> Result<T, HeapError> {
        self.check_index(index)?;
        engine::remove_to_last(&mut self.view(), index);
        self.list.pop().ok_or(HeapError::Empty)
    }

    /// Changes the element at `index` in place and restores the heap order
    ///
    /// Cheaper than removing the element and pushing it back.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements, and
    /// [`HeapError::IndexOutOfBounds`] if `index >= len()` otherwise. `f` is
    /// not called in either case.
    pub fn update<F>(&mut self, index: usize, f: F) -> Result<(), HeapError>
    where
        F: FnOnce(&mut T),
    {
        self.check_index(index)?;
        f(&mut self.list[index]);
        engine::fix(&mut self.view(), index);
        Ok(())
    }

    /// Removes every element and returns them in the reverse of pop order
    ///
    /// The root ends up last. Each round moves the current root to the end of
    /// a shrinking prefix, so no element is removed individually. The heap
    /// gives up its storage and is left empty.
    pub fn pop_all(&mut self) -> Vec<T> {
        let n = self.list.len();
        for k in (2..=n).rev() {
            engine::pop_to_last(&mut LessBy::new(&mut self.list[..k], &self.less));
        }
        trace!(count = n, "drained typed heap");
        std::mem::take(&mut self.list)
    }

    /// Removes every element, keeping the allocated storage
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// The backing storage in heap order; index 0 is the root
    pub fn as_slice(&self) -> &[T] {
        &self.list
    }

    /// Consumes the heap, returning the backing storage in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.list
    }

    /// Returns the comparator ordering this heap
    pub fn comparator(&self) -> &C {
        &self.less
    }

    fn view(&mut self) -> LessBy<'_, T, C> {
        LessBy::new(self.list.as_mut_slice(), &self.less)
    }

    fn check_index(&self, index: usize) -> Result<(), HeapError> {
        let len = self.list.len();
        if len == 0 {
            return Err(HeapError::Empty);
        }
        if index >= len {
            return Err(HeapError::IndexOutOfBounds { index, len });
        }
        Ok(())
    }
}

impl<T: NaturalOrder> Default for TypedHeap<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for TypedHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedHeap").field("list", &self.list).finish_non_exhaustive()
    }
}

impl<T, C: Comparator<T>> Extend<T> for TypedHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.list.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: NaturalOrder> FromIterator<T> for TypedHeap<T, Natural> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
