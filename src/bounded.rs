//! Bounded "top N" heap
//!
//! [`TopNHeap`] retains the N best elements seen in a stream of any length.
//! The comparator puts the *worst* retained element at the root, so each
//! candidate is judged against a single element:
//!
//! 1. Below capacity, the candidate is pushed like any heap insert
//! 2. At capacity, the candidate replaces the root if the root ranks before it
//! 3. Otherwise the candidate is handed straight back
//!
//! To keep the N largest values, order ascending (root = smallest retained).
//! To keep the N smallest, order descending.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | `admit` (accepted) | O(log N)   |
//! | `admit` (rejected) | O(1)       |
//! | `drain`            | O(N log N) |
//!
//! Memory stays at N elements regardless of the stream length.
//!
//! # Example
//!
//! ```rust
//! use heapkit::bounded::TopNHeap;
//!
//! let mut top = TopNHeap::new(2, |a: &i32, b: &i32| a < b).unwrap();
//! for x in [5, 2, 1, 3, 4] {
//!     top.admit(x);
//! }
//! assert_eq!(top.drain(), vec![5, 4]);
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::engine::{self, LessBy};
use crate::traits::{Comparator, HeapError};

/// What [`TopNHeap::admit`] does with a candidate that ties the worst
/// retained element
///
/// A tie means neither the candidate nor the root ranks before the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TiePolicy {
    /// Discard the candidate; the earliest of equally ranked elements stays
    #[default]
    KeepExisting,
    /// Evict the root in favor of the candidate
    PreferNewer,
}

/// Settings for a [`TopNHeap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TopNConfig {
    /// Maximum number of retained elements; must be non-zero
    pub capacity: usize,
    /// Handling of candidates tying the worst retained element
    #[cfg_attr(feature = "serde", serde(default))]
    pub ties: TiePolicy,
}

impl TopNConfig {
    /// Config retaining `capacity` elements with the default tie policy
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ties: TiePolicy::default(),
        }
    }

    /// Sets the tie policy
    pub fn ties(mut self, ties: TiePolicy) -> Self {
        self.ties = ties;
        self
    }
}

/// A heap holding at most `capacity` elements, keeping the best ones
///
/// The comparator defines "must rank before"; the root is the element that
/// would be evicted next. Evicted and rejected elements are returned to the
/// caller by [`admit`](Self::admit) rather than kept around.
#[derive(Clone)]
pub struct TopNHeap<T, C> {
    list: Vec<T>,
    capacity: usize,
    less: C,
    ties: TiePolicy,
}

impl<T, C: Comparator<T>> TopNHeap<T, C> {
    /// Creates a heap retaining at most `capacity` elements ordered by `less`
    ///
    /// # Errors
    /// Returns [`HeapError::ZeroCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize, less: C) -> Result<Self, HeapError> {
        Self::from_config(TopNConfig::new(capacity), less)
    }

    /// Creates a heap from a [`TopNConfig`]
    ///
    /// # Errors
    /// Returns [`HeapError::ZeroCapacity`] if `config.capacity` is zero.
    pub fn from_config(config: TopNConfig, less: C) -> Result<Self, HeapError> {
        if config.capacity == 0 {
            debug!("rejected top-n heap with zero capacity");
            return Err(HeapError::ZeroCapacity);
        }
        debug!(capacity = config.capacity, ties = ?config.ties, "created top-n heap");
        Ok(Self {
            list: Vec::with_capacity(config.capacity),
            capacity: config.capacity,
            less,
            ties: config.ties,
        })
    }

    /// Offers `value` to the heap
    ///
    /// Returns `None` if `value` was retained without evicting anything,
    /// `Some(evicted)` if it replaced the worst retained element, or
    /// `Some(value)` if it was rejected.
    pub fn admit(&mut self, value: T) -> Option<T> {
        if self.list.len() < self.capacity {
            self.list.push(value);
            engine::push_last(&mut self.view());
            return None;
        }

        let Some(worst) = self.list.first() else {
            return Some(value);
        };
        let replace = match self.ties {
            TiePolicy::KeepExisting => self.less.less(worst, &value),
            TiePolicy::PreferNewer => !self.less.less(&value, worst),
        };
        if !replace {
            return Some(value);
        }

        let evicted = std::mem::replace(&mut self.list[0], value);
        engine::fix(&mut self.view(), 0);
        Some(evicted)
    }

    /// Returns the worst retained element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if nothing has been admitted.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.list.first().ok_or(HeapError::Empty)
    }

    /// Removes and returns the worst retained element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.list.is_empty() {
            return Err(HeapError::Empty);
        }
        engine::pop_to_last(&mut self.view());
        self.list.pop().ok_or(HeapError::Empty)
    }

    /// Removes every element, best first, keeping the reserved capacity
    ///
    /// The order is the reverse of repeated [`pop`](Self::pop). The heap can
    /// be reused afterwards without reallocating.
    pub fn drain(&mut self) -> Vec<T> {
        self.sort_in_place();
        trace!(count = self.list.len(), "drained top-n heap");
        self.list.drain(..).collect()
    }

    /// Consumes the heap, returning its elements best first
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.sort_in_place();
        self.list
    }

    /// Removes every element, keeping the reserved capacity
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns the number of retained elements
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if nothing is retained
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns true once `len() == capacity()`
    pub fn is_full(&self) -> bool {
        self.list.len() >= self.capacity
    }

    /// Returns the maximum number of retained elements
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the tie policy in effect
    pub fn tie_policy(&self) -> TiePolicy {
        self.ties
    }

    /// The retained elements in heap order; index 0 is the worst
    pub fn as_slice(&self) -> &[T] {
        &self.list
    }

    fn sort_in_place(&mut self) {
        for k in (2..=self.list.len()).rev() {
            engine::pop_to_last(&mut LessBy::new(&mut self.list[..k], &self.less));
        }
    }

    fn view(&mut self) -> LessBy<'_, T, C> {
        LessBy::new(self.list.as_mut_slice(), &self.less)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for TopNHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TopNHeap")
            .field("list", &self.list)
            .field("capacity", &self.capacity)
            .field("ties", &self.ties)
            .finish_non_exhaustive()
    }
}
