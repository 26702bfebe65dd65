//! Vessel: a resizable sequence container and an in-place quicksort
//! over a capability interface.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Vessel sub-crates. For most users, adding `vessel` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use vessel::prelude::*;
//!
//! let mut letters: DynamicArray<&str> = DynamicArray::new();
//! letters.append_all(vec!["C", "D", "A", "B", "E"]).unwrap();
//!
//! // Natural total order.
//! assert!(sort(&mut letters));
//! let sorted: Vec<&str> = letters.iter().copied().collect();
//! assert_eq!(sorted, ["A", "B", "C", "D", "E"]);
//!
//! // Caller-supplied comparator: descending.
//! assert!(sort_with(&mut letters, |a, b| b.cmp(a)));
//! assert_eq!(letters.get(0), Ok(&"E"));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `vessel-array` | `DynamicArray`, `ElementBuf` |
//! | [`types`] | `vessel-core` | capability traits, `SequenceError` |
//! | [`sorting`] | `vessel-sort` | `sort`, `sort_with` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use vessel_array as array;
pub use vessel_core as types;
pub use vessel_sort as sorting;

/// Commonly used types and entry points.
pub mod prelude {
    // Container
    pub use vessel_array::DynamicArray;

    // Capability traits and errors
    pub use vessel_core::{IndexedSeq, Sequence, SequenceError};

    // Sort entry points
    pub use vessel_sort::{sort, sort_with};
}
