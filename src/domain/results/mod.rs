//! Incremental search results.
//!
//! 1. Accumulation order is the canonical order
//! 2. An id appears at most once
//! 3. A new term resets the list, the cursor and per-source exhaustion
//! 4. Pages fetched for an older term are never merged

pub mod store;

pub use store::{PageCommit, PageRequest, PaginationState, ResultStore};
