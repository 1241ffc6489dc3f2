//! The growable contiguous-storage container.
//!
//! [`DynArray`] owns a contiguous buffer committed to a logical capacity
//! and holding `len` live elements. Capacity is monotonically
//! non-decreasing except through the explicit, opt-in
//! [`DynArray::shrink_to_fit`]. Growth on overflow follows the amortized
//! doubling rule `2 * cap + 1`, which strictly increases capacity even
//! from zero and bounds total copy work across N pushes to O(N).
//!
//! Structural mutations (push, pop, insert, erase, clear, growth, shrink)
//! bump a generation counter. Cursors issued by [`DynArray::begin`] /
//! [`DynArray::end`] carry the generation they were issued at, so access
//! through a cursor that predates a mutation is rejected rather than
//! reading shifted data.

use std::slice;

use crate::cursor::{Cursor, CursorMut};
use crate::error::ArrayError;

/// A generic, resizable, contiguous-storage container.
///
/// Elements live in a single heap allocation; `len() <= capacity()` always
/// holds. Fallible operations return [`ArrayError`] and leave the array
/// untouched on failure — there is no partial-effect state.
pub struct DynArray<T> {
    /// Live elements, in order. `items.len()` is the array's length.
    items: Vec<T>,
    /// Logical capacity committed to callers. The backing allocation is
    /// kept at least this large via `reserve_exact`.
    cap: usize,
    /// Bumped by every structural mutation; cursors carry a copy.
    generation: u64,
}

impl<T> DynArray<T> {
    /// Create an empty array with zero capacity. Does not allocate.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            cap: 0,
            generation: 0,
        }
    }

    /// Create an empty array committed to `cap` slots.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            items: Vec::with_capacity(cap),
            cap,
            generation: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the array holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of committed slots, live or not.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Current structural-mutation generation. Cursors issued at an older
    /// generation are rejected on dereference.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Drop all live elements. Capacity is unchanged; previously issued
    /// cursors become stale.
    pub fn clear(&mut self) {
        self.items.clear();
        self.generation += 1;
    }

    /// Commit at least `n` slots, preserving content order.
    ///
    /// A no-op when `n <= capacity()` — reserve never shrinks. On growth
    /// the committed capacity becomes exactly `n`.
    pub fn reserve(&mut self, n: usize) {
        if n > self.cap {
            self.items.reserve_exact(n - self.items.len());
            self.cap = n;
            self.generation += 1;
        }
    }

    /// Release excess capacity so that `capacity() == len()`.
    ///
    /// A no-op when the array is already at its length.
    pub fn shrink_to_fit(&mut self) {
        if self.items.len() < self.cap {
            self.cap = self.items.len();
            self.items.shrink_to_fit();
            self.generation += 1;
        }
    }

    /// Append an element, growing capacity to `2 * capacity() + 1` first
    /// when the array is full. Amortized O(1).
    pub fn push(&mut self, value: T) {
        if self.items.len() >= self.cap {
            self.reserve(2 * self.cap + 1);
        }
        self.items.push(value);
        self.generation += 1;
    }

    /// Remove and return the last element.
    ///
    /// Fails with [`ArrayError::Empty`] on a zero-length array. Capacity
    /// is unchanged.
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        let value = self.items.pop().ok_or(ArrayError::Empty)?;
        self.generation += 1;
        Ok(value)
    }

    /// Borrow the live element at `index`.
    ///
    /// Fails with [`ArrayError::IndexOutOfBounds`] unless `index < len()`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        self.items.get(index).ok_or(ArrayError::IndexOutOfBounds {
            index,
            len: self.items.len(),
        })
    }

    /// Mutably borrow the live element at `index`.
    ///
    /// Fails with [`ArrayError::IndexOutOfBounds`] unless `index < len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfBounds { index, len })
    }

    /// Insert `value` at the position of `pos`, shifting the elements at
    /// and after it one slot toward higher offsets.
    ///
    /// `pos` must have been issued by this array at its current generation,
    /// with an offset in `[0, len()]` — an offset equal to the length
    /// appends. Grows by the push rule when full. Returns a fresh mutable
    /// cursor positioned at the inserted element.
    ///
    /// Fails with [`ArrayError::StaleCursor`] or
    /// [`ArrayError::CursorOutOfBounds`]; on failure nothing is shifted or
    /// written.
    pub fn insert(&mut self, pos: Cursor, value: T) -> Result<CursorMut, ArrayError> {
        let offset = self.cursor_offset(pos, true)?;
        if self.items.len() >= self.cap {
            self.reserve(2 * self.cap + 1);
        }
        self.items.insert(offset, value);
        self.generation += 1;
        Ok(CursorMut::new(offset, self.items.len(), self.generation))
    }

    /// Remove the element at the position of `pos`, shifting the elements
    /// after it one slot toward lower offsets.
    ///
    /// `pos` must have been issued by this array at its current generation,
    /// with an offset in `[0, len())` — erasing at the length is invalid,
    /// unlike insert. Returns a fresh mutable cursor at the slot that now
    /// holds the erased element's successor, or at the end when the last
    /// element was erased.
    ///
    /// Fails with [`ArrayError::StaleCursor`] or
    /// [`ArrayError::CursorOutOfBounds`]; on failure nothing is shifted.
    pub fn erase(&mut self, pos: Cursor) -> Result<CursorMut, ArrayError> {
        let offset = self.cursor_offset(pos, false)?;
        let _ = self.items.remove(offset);
        self.generation += 1;
        Ok(CursorMut::new(offset, self.items.len(), self.generation))
    }

    /// Read-only cursor at the first live element, or at the end when the
    /// array is empty.
    pub fn begin(&self) -> Cursor {
        Cursor::new(0, self.items.len(), self.generation)
    }

    /// Read-only cursor at the one-past-the-end sentinel.
    pub fn end(&self) -> Cursor {
        Cursor::new(self.items.len(), self.items.len(), self.generation)
    }

    /// Mutable cursor at the first live element, or at the end when the
    /// array is empty.
    pub fn begin_mut(&mut self) -> CursorMut {
        CursorMut::new(0, self.items.len(), self.generation)
    }

    /// Mutable cursor at the one-past-the-end sentinel.
    pub fn end_mut(&mut self) -> CursorMut {
        CursorMut::new(self.items.len(), self.items.len(), self.generation)
    }

    /// View the live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// View the live elements as a mutable slice.
    ///
    /// Element writes through the slice are not structural mutations:
    /// they do not bump the generation and do not invalidate cursors.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Iterate over the live elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// O(1) exchange of contents and capacity with another array.
    ///
    /// Both arrays' generations are bumped, so cursors issued into either
    /// one before the swap go stale.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.items, &mut other.items);
        std::mem::swap(&mut self.cap, &mut other.cap);
        self.generation += 1;
        other.generation += 1;
    }

    /// Validate a cursor target against this array's generation and the
    /// operation's offset bound. Insert accepts the end offset, erase
    /// does not.
    fn cursor_offset(&self, pos: Cursor, allow_end: bool) -> Result<usize, ArrayError> {
        if pos.generation() != self.generation {
            return Err(ArrayError::StaleCursor {
                cursor_generation: pos.generation(),
                array_generation: self.generation,
            });
        }
        let offset = pos - self.begin();
        let len = self.items.len();
        let bound = if allow_end { len as isize } else { len as isize - 1 };
        if offset < 0 || offset > bound {
            return Err(ArrayError::CursorOutOfBounds { offset, len });
        }
        Ok(offset as usize)
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynArray<T> {
    /// Independent buffer of equal capacity and length with element-wise
    /// clones. The clone starts at generation zero; cursors into the
    /// source do not transfer.
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.cap);
        items.extend(self.items.iter().cloned());
        Self {
            items,
            cap: self.cap,
            generation: 0,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    /// Element-wise equality. Capacity and generation are excluded.
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T> From<Vec<T>> for DynArray<T> {
    /// Build from an ordered sequence; `len() == capacity()` afterwards.
    fn from(items: Vec<T>) -> Self {
        let cap = items.len();
        Self {
            items,
            cap,
            generation: 0,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    /// Build from a literal sequence; `len() == capacity() == N`.
    fn from(items: [T; N]) -> Self {
        Vec::from(items).into()
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vec::from_iter(iter).into()
    }
}

impl<T> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
