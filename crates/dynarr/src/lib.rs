//! Growable contiguous-storage container with generation-checked cursors.
//!
//! [`DynArray`] owns a single heap allocation and tracks a logical
//! capacity and length with `len() <= capacity()` at all times. Growth on
//! overflow follows the amortized doubling rule `2 * capacity + 1`.
//!
//! # Architecture
//!
//! ```text
//! DynArray<T> (owner)
//! ├── items: Vec<T>        (live elements, contiguous)
//! ├── cap: usize           (committed capacity, grows by 2c + 1)
//! └── generation: u64      (bumped on every structural mutation)
//!
//! Cursor / CursorMut (detached Copy handles)
//! └── offset + end sentinel + generation, captured at creation
//! ```
//!
//! Cursors own nothing: dereference goes through the array and is
//! generation-checked, so a cursor issued before a structural mutation
//! is rejected as stale rather than reading shifted data. The end
//! sentinel is frozen at cursor creation and does not track later
//! length changes; see the [`cursor`] module docs for the traversal
//! contract.
//!
//! # Errors
//!
//! All fallible operations return [`ArrayError`] at the call that
//! detects the violation and leave the array untouched on failure.
//! Errors are the only observable failure signal — nothing is logged
//! and nothing is deferred.
//!
//! # Example
//!
//! ```
//! use dynarr::DynArray;
//!
//! let mut array = DynArray::from([1, 2, 3]);
//! let pos = array.begin().advanced();
//! array.erase(pos)?;
//! assert_eq!(array.to_string(), "[1, 3]");
//!
//! let begin = array.begin();
//! array.insert(begin, 0)?;
//! assert_eq!(array.to_string(), "[0, 1, 3]");
//! # Ok::<(), dynarr::ArrayError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod cursor;
pub mod error;
pub mod render;

// Public re-exports for the primary API surface.
pub use array::DynArray;
pub use cursor::{Cursor, CursorMut};
pub use error::ArrayError;
pub use render::Lines;
