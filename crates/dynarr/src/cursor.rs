//! Generation-scoped cursors over a [`DynArray`].
//!
//! A cursor is a detached `Copy` handle: an element offset plus the end
//! sentinel and array generation captured when it was issued. Cursors own
//! nothing and borrow nothing — dereference goes through the array and is
//! generation-checked, so a cursor issued before a structural mutation is
//! rejected with [`ArrayError::StaleCursor`] instead of reading shifted data.
//!
//! # Sentinel capture
//!
//! The end sentinel is frozen at creation and does NOT track later length
//! changes. Equality against a freshly issued end cursor is a valid loop
//! termination test only as long as the array is not mutated; after any
//! structural mutation, dereference fails the generation check and the
//! stale cursor must be reissued.

use std::ops::Sub;

use crate::array::DynArray;
use crate::error::ArrayError;

/// Read-only cursor into a [`DynArray`].
///
/// Issued by [`DynArray::begin`] and [`DynArray::end`]. Equality compares
/// only the current offset — two cursors from different arrays or from
/// different generations of the same array compare equal when their offsets
/// coincide. Avoiding that confusion is a caller obligation; the enforced
/// protection is the generation check on dereference.
#[derive(Clone, Copy, Debug)]
#[must_use]
pub struct Cursor {
    /// Current element offset.
    pos: usize,
    /// One-past-the-last-live-element offset, captured at creation.
    end: usize,
    /// Array generation when this cursor was issued.
    generation: u64,
}

impl Cursor {
    pub(crate) fn new(pos: usize, end: usize, generation: u64) -> Self {
        Self {
            pos,
            end,
            generation,
        }
    }

    /// Current offset from the start of the array.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Whether the cursor sits at its captured end sentinel.
    pub fn at_end(&self) -> bool {
        self.pos == self.end
    }

    /// The array generation this cursor was issued at.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one position. A no-op once the cursor reaches its sentinel:
    /// advancing at end is safe and idempotent, never a fault.
    pub fn advance(&mut self) {
        if self.pos < self.end {
            self.pos += 1;
        }
    }

    /// Consume and return the cursor advanced one position.
    pub fn advanced(mut self) -> Self {
        self.advance();
        self
    }

    /// Read the element under the cursor.
    ///
    /// Fails with [`ArrayError::StaleCursor`] when the array has been
    /// structurally mutated since the cursor was issued, and with
    /// [`ArrayError::DereferenceAtEnd`] when the cursor sits at its sentinel.
    pub fn get<'a, T>(&self, array: &'a DynArray<T>) -> Result<&'a T, ArrayError> {
        check_generation(self.generation, array.generation())?;
        if self.pos == self.end {
            return Err(ArrayError::DereferenceAtEnd { pos: self.pos });
        }
        array.get(self.pos)
    }
}

impl PartialEq for Cursor {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cursor {}

impl PartialEq<CursorMut> for Cursor {
    fn eq(&self, other: &CursorMut) -> bool {
        self.pos == other.pos
    }
}

impl Sub for Cursor {
    type Output = isize;

    /// Signed offset distance between two cursors of the same traversal.
    fn sub(self, rhs: Self) -> isize {
        self.pos as isize - rhs.pos as isize
    }
}

/// Mutable cursor into a [`DynArray`].
///
/// Issued by [`DynArray::begin_mut`], [`DynArray::end_mut`], and returned
/// by [`DynArray::insert`] / [`DynArray::erase`]. Shares the traversal and
/// comparison contract of [`Cursor`] and additionally grants checked mutable
/// access via [`CursorMut::get_mut`]. Converts one-way into [`Cursor`];
/// there is no conversion back.
#[derive(Clone, Copy, Debug)]
pub struct CursorMut {
    pos: usize,
    end: usize,
    generation: u64,
}

impl CursorMut {
    pub(crate) fn new(pos: usize, end: usize, generation: u64) -> Self {
        Self {
            pos,
            end,
            generation,
        }
    }

    /// Current offset from the start of the array.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Whether the cursor sits at its captured end sentinel.
    pub fn at_end(&self) -> bool {
        self.pos == self.end
    }

    /// The array generation this cursor was issued at.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one position. A no-op once the cursor reaches its sentinel.
    pub fn advance(&mut self) {
        if self.pos < self.end {
            self.pos += 1;
        }
    }

    /// Consume and return the cursor advanced one position.
    pub fn advanced(mut self) -> Self {
        self.advance();
        self
    }

    /// Read the element under the cursor.
    ///
    /// Same checks as [`Cursor::get`].
    pub fn get<'a, T>(&self, array: &'a DynArray<T>) -> Result<&'a T, ArrayError> {
        check_generation(self.generation, array.generation())?;
        if self.pos == self.end {
            return Err(ArrayError::DereferenceAtEnd { pos: self.pos });
        }
        array.get(self.pos)
    }

    /// Mutably access the element under the cursor.
    ///
    /// Same checks as [`Cursor::get`]. Only `CursorMut` grants this;
    /// demoting to [`Cursor`] loses it permanently.
    pub fn get_mut<'a, T>(&self, array: &'a mut DynArray<T>) -> Result<&'a mut T, ArrayError> {
        check_generation(self.generation, array.generation())?;
        if self.pos == self.end {
            return Err(ArrayError::DereferenceAtEnd { pos: self.pos });
        }
        array.get_mut(self.pos)
    }
}

impl PartialEq for CursorMut {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for CursorMut {}

impl PartialEq<Cursor> for CursorMut {
    fn eq(&self, other: &Cursor) -> bool {
        self.pos == other.pos
    }
}

impl From<CursorMut> for Cursor {
    /// One-way demotion to a read-only cursor.
    fn from(cursor: CursorMut) -> Self {
        Self {
            pos: cursor.pos,
            end: cursor.end,
            generation: cursor.generation,
        }
    }
}

fn check_generation(cursor_generation: u64, array_generation: u64) -> Result<(), ArrayError> {
    if cursor_generation != array_generation {
        return Err(ArrayError::StaleCursor {
            cursor_generation,
            array_generation,
        });
    }
    Ok(())
}
