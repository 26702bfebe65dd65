//! Error types shared across the Vessel workspace.

use std::error::Error;
use std::fmt;

/// Errors that can occur during sequence operations.
///
/// All variants are deterministic input-validation failures. Validation
/// happens before any mutation for the triggering call, and no failure
/// is retried or recovered internally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// An index fell outside the currently valid range of the sequence.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The sequence length at the time of the call.
        len: usize,
    },
    /// The growth routine could not represent or allocate the requested
    /// minimum capacity.
    CapacityOverflow {
        /// The sequence length at the time of the call.
        len: usize,
        /// The number of additional slots the call required.
        additional: usize,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::CapacityOverflow { len, additional } => {
                write!(
                    f,
                    "required capacity {len} + {additional} exceeds the maximum sequence size"
                )
            }
        }
    }
}

impl Error for SequenceError {}
