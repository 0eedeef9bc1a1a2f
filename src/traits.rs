//! Common traits for the heap algorithms
//!
//! This module provides the capability the engine works against and the value
//! comparators the typed heaps are parameterized by:
//!
//! - [`Orderable`]: index-level view of a collection (`len`, `less(i, j)`, `swap(i, j)`)
//! - [`Comparator`]: value-level "must rank before" predicate
//! - [`NaturalOrder`]: the built-in ascending order of an element kind
//!
//! The engine in [`crate::engine`] never looks at element values. Anything that
//! can answer `less(i, j)` and perform `swap(i, j)` can be heapified.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `peek`, `pop`, `remove` or `update` was called on an empty heap
    #[error("heap is empty")]
    Empty,
    /// The index does not refer to an element of the heap
    #[error("index {index} is out of bounds for heap of length {len}")]
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// The heap length at the time of the call
        len: usize,
    },
    /// A bounded heap was constructed with a capacity of zero
    #[error("bounded heap capacity must be greater than zero")]
    ZeroCapacity,
}

/// Index-level ordering capability consumed by the heap engine
///
/// `less(i, j)` must be a strict weak order: it returns true iff the element at
/// `i` must rank before the element at `j`. The engine keeps the element that
/// ranks first at index 0.
///
/// This mirrors the classic "sort interface" triple, so a collection only has
/// to describe how to compare and exchange two slots to become a heap.
pub trait Orderable {
    /// Number of elements in the collection
    fn len(&self) -> usize;

    /// Returns true if the collection holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true iff the element at `i` must rank before the element at `j`
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchanges the elements at `i` and `j`
    fn swap(&mut self, i: usize, j: usize);
}

impl<T: NaturalOrder> Orderable for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self[i].natural_less(&self[j])
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j)
    }
}

/// The built-in ascending order of an element kind
///
/// Floats compare with the host `<`, so NaN is never less than anything. No
/// total order is imposed on them.
pub trait NaturalOrder {
    /// Returns true iff `self` sorts before `other` in ascending order
    fn natural_less(&self, other: &Self) -> bool;
}

macro_rules! natural_order_by_lt {
    ($($t:ty),* $(,)?) => {
        $(
            impl NaturalOrder for $t {
                #[inline]
                fn natural_less(&self, other: &Self) -> bool {
                    self < other
                }
            }
        )*
    };
}

natural_order_by_lt!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

impl<T: NaturalOrder + ?Sized> NaturalOrder for &T {
    #[inline]
    fn natural_less(&self, other: &Self) -> bool {
        (**self).natural_less(*other)
    }
}

impl<T: NaturalOrder + ?Sized> NaturalOrder for Box<T> {
    #[inline]
    fn natural_less(&self, other: &Self) -> bool {
        (**self).natural_less(&**other)
    }
}

/// Value-level ordering used by the typed heaps
///
/// Unlike [`Orderable::less`], the parameters are the values being compared,
/// not their indexes. Every closure `Fn(&T, &T) -> bool` is a comparator.
pub trait Comparator<T: ?Sized> {
    /// Returns true iff `a` must rank before `b`
    fn less(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Comparator using the element kind's [`NaturalOrder`] (ascending)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: NaturalOrder + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a.natural_less(b)
    }
}

/// Comparator using the reverse of the element kind's [`NaturalOrder`]
///
/// A heap ordered by `Reversed` keeps its largest element at the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed;

impl<T: NaturalOrder + ?Sized> Comparator<T> for Reversed {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        b.natural_less(a)
    }
}
