//! List-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during list operations.
///
/// Every failure is reported by return value; no operation panics on
/// caller-reachable paths, and a failed operation leaves the list
/// unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// A positional operation addressed an index outside `[0, len)`.
    ///
    /// Returned by removal, replacement, and retrieval. Insertion is the
    /// one positional operation exempt from the upper bound: an
    /// out-of-range-high index appends instead.
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// Live element count at the time of the call.
        len: usize,
    },
    /// A keyed lookup completed without any element satisfying the matcher.
    ///
    /// A normal "absent" result, distinct from a bounds violation: the
    /// scan ran to the tail and found nothing.
    NoMatch,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for list of length {len}")
            }
            Self::NoMatch => write!(f, "no element matched the key"),
        }
    }
}

impl Error for ListError {}
