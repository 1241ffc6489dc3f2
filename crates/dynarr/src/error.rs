//! Container and cursor error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during array operations and cursor access.
///
/// Every violation is signalled at the call that detects it; no operation
/// leaves a partial effect behind when it returns an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// `pop` on an array with no live elements.
    Empty,
    /// Index outside the live range `[0, len)`.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// Cursor offset outside the valid bound for the operation
    /// (`[0, len]` for insert, `[0, len)` for erase).
    CursorOutOfBounds {
        /// Signed distance of the cursor from the start of the array.
        offset: isize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// Dereference of a cursor sitting at its end sentinel.
    DereferenceAtEnd {
        /// The cursor's offset, which equals its captured sentinel.
        pos: usize,
    },
    /// A cursor issued before a structural mutation of the array.
    StaleCursor {
        /// The generation encoded in the cursor.
        cursor_generation: u64,
        /// The array's current generation.
        array_generation: u64,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => {
                write!(f, "array is already empty")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::CursorOutOfBounds { offset, len } => {
                write!(f, "cursor offset {offset} out of bounds for length {len}")
            }
            Self::DereferenceAtEnd { pos } => {
                write!(f, "dereference not possible: cursor at end position {pos}")
            }
            Self::StaleCursor {
                cursor_generation,
                array_generation,
            } => {
                write!(
                    f,
                    "stale cursor: generation {cursor_generation}, array at generation {array_generation}"
                )
            }
        }
    }
}

impl Error for ArrayError {}
