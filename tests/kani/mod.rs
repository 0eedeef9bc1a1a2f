//! Kani proof harnesses
//!
//! - `engine_proofs.rs`: the engine keeps the invariant on small arrays
//! - `heap_proofs.rs`: typed and top-N heaps against symbolic inputs

#[cfg(kani)]
#[path = "engine_proofs.rs"]
mod engine_proofs;
#[cfg(kani)]
#[path = "heap_proofs.rs"]
mod heap_proofs;
