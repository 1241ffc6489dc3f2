//! Text renderings of a [`DynArray`].
//!
//! Two distinct forms with the same element order:
//!
//! - the compact inline form via [`fmt::Display`], e.g. `[1, 2, 3]`
//! - the itemized form via [`DynArray::lines`], one element per line
//!
//! Both are available from a shared reference.

use std::fmt;

use crate::array::DynArray;

impl<T: fmt::Display> fmt::Display for DynArray<T> {
    /// Bracketed, comma-separated value list: `[a, b, c]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut first = true;
        for value in self {
            if first {
                first = false;
            } else {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

impl<T> DynArray<T> {
    /// Itemized rendering adapter: one element per line, each terminated
    /// by a newline. An empty array renders as the empty string.
    pub fn lines(&self) -> Lines<'_, T> {
        Lines {
            items: self.as_slice(),
        }
    }
}

/// Display adapter produced by [`DynArray::lines`].
pub struct Lines<'a, T> {
    items: &'a [T],
}

impl<T: fmt::Display> fmt::Display for Lines<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.items {
            writeln!(f, "{value}")?;
        }
        Ok(())
    }
}
