//! Capability traits and error types for the Vessel sequence library.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Vessel workspace:
//! the indexed-access capability consumed by the sorter, the full
//! sequence container contract, and the shared error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Public re-exports for the primary API surface.
pub use error::SequenceError;
pub use traits::{IndexedSeq, Sequence};
