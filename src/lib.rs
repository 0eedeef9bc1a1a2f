//! Binary heap algorithms for any container
//!
//! This crate writes the classic binary heap algorithms once, against an
//! abstract [`Orderable`] capability (`len`, `less(i, j)`, `swap(i, j)`), and
//! builds typed heaps on top of them.
//!
//! # Modules
//!
//! - **[`engine`]**: `heapify`, `push_last`, `pop_to_last`, `fix` and
//!   `remove_to_last` over any [`Orderable`]; the engine owns no storage and
//!   uses the last slot as the in/out place
//! - **[`typed`]**: [`TypedHeap`] over a `Vec<T>` with natural or custom
//!   ordering, plus the [`IntHeap`], [`StringHeap`] and [`FloatHeap`] aliases
//! - **[`bounded`]**: [`TopNHeap`], which retains the N best elements of a
//!   stream
//! - **[`counters`]**: mergeable string-keyed counters
//!
//! # Example
//!
//! ```rust
//! use heapkit::{StringHeap, TopNHeap, Natural};
//!
//! let mut heap = StringHeap::new();
//! for name in ["Elmo", "Big Bird", "Abby", "Count"] {
//!     heap.push(name.to_string());
//! }
//! assert_eq!(heap.pop().as_deref(), Ok("Abby"));
//!
//! let mut top = TopNHeap::new(2, Natural).unwrap();
//! for x in [5, 2, 1, 3, 4] {
//!     top.admit(x);
//! }
//! assert_eq!(top.drain(), vec![5, 4]);
//! ```
//!
//! None of the types synchronize internally. Guard a shared heap with a lock.

pub mod bounded;
pub mod counters;
pub mod engine;
pub mod traits;
pub mod typed;

// Re-export the main types for convenience
pub use bounded::{TiePolicy, TopNConfig, TopNHeap};
pub use traits::{Comparator, HeapError, Natural, NaturalOrder, Orderable, Reversed};
pub use typed::{FloatHeap, IntHeap, StringHeap, TypedHeap};
