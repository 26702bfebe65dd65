//! In-place quicksort over the Vessel sequence capability.
//!
//! The sorter consumes a container only through the minimal
//! [`IndexedSeq`](vessel_core::IndexedSeq) surface: positional
//! `get`/`set` and a length query. Anything implementing that trait can
//! be sorted, with a caller-supplied comparator or with the elements'
//! natural ordering.
//!
//! The sort is unstable and runs in place: average O(n log n),
//! worst-case O(n²) against the middle-biased pivot choice. Recursion
//! uses the call stack, so adversarial inputs also drive recursion
//! depth from O(log n) towards O(n).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod quicksort;

// Public re-exports for the primary API surface.
pub use quicksort::{sort, sort_with};
