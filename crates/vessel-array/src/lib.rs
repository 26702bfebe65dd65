//! Growable array-backed sequence container.
//!
//! Implements the [`Sequence`](vessel_core::Sequence) contract from
//! `vessel-core` on top of a two-level design:
//!
//! ```text
//! DynamicArray (growth policy, index validation, shifting)
//! └── ElementBuf (fixed-capacity slot storage, replaced wholesale on growth)
//! ```
//!
//! The buffer holds `Option<E>` slots allocated to full capacity; slots
//! at and beyond the live length are `None`, so releasing an element
//! drops its ownership immediately. All storage is plain `Vec` slots.
//! No `MaybeUninit`, no `unsafe`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod buf;

// Public re-exports for the primary API surface.
pub use array::DynamicArray;
pub use buf::ElementBuf;
