//! Forward traversal cursors.
//!
//! A cursor is an opaque, non-owning position in a sequence. The
//! [`ForwardCursor`] trait captures the minimal capability set the search
//! algorithms need: advance by one, read the current element, and compare
//! two positions of the same sequence for equality. [`SliceCursor`] is the
//! canonical concrete cursor, a `(slice, offset)` view into borrowed
//! storage.

use std::fmt;

/// A position in a forward-traversable sequence.
///
/// Cursors are cheap, non-owning handles: their validity is bounded by the
/// lifetime of the underlying storage and by that storage not being mutated
/// while they are in use. `Clone` models multi-pass forward traversal (a
/// copied cursor resumes from the copied position independently), and
/// `PartialEq` is *position* equality, defined only between cursors of the
/// same underlying sequence.
pub trait ForwardCursor: Clone + PartialEq {
    /// The element type this cursor reads.
    type Item;

    /// Steps the cursor to the next position.
    ///
    /// Advancing a cursor that already sits at its sequence's end position
    /// violates the caller contract; concrete cursors may panic or
    /// debug-assert, and the search algorithms never do it.
    fn advance(&mut self);

    /// Reads the element at the current position.
    ///
    /// Must not be called on an end position, which is a boundary only and
    /// never refers to an element.
    fn item(&self) -> &Self::Item;

    /// Returns a copy of this cursor stepped one position forward.
    fn next_position(&self) -> Self {
        let mut next = self.clone();
        next.advance();
        next
    }
}

/// A cursor over a borrowed slice.
///
/// The position is the pair of the slice identity and a zero-based offset;
/// `offset == slice.len()` is the end position. Two `SliceCursor`s compare
/// equal when they view the same slice (same pointer and length) at the
/// same offset, so positions into distinct slices are never equal even if
/// the slices hold identical elements.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    offset: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Creates a cursor positioned at `offset` within `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `offset > slice.len()`. An offset equal to `slice.len()`
    /// is allowed and denotes the end position.
    pub fn new(slice: &'a [T], offset: usize) -> Self {
        assert!(
            offset <= slice.len(),
            "cursor offset {offset} out of bounds for slice of length {}",
            slice.len()
        );
        SliceCursor { slice, offset }
    }

    /// The position of the first element of `slice` (equal to the end
    /// position when the slice is empty).
    pub fn begin(slice: &'a [T]) -> Self {
        SliceCursor { slice, offset: 0 }
    }

    /// The one-past-the-last boundary position of `slice`.
    pub fn end(slice: &'a [T]) -> Self {
        SliceCursor {
            slice,
            offset: slice.len(),
        }
    }

    /// The zero-based offset of this position within its slice.
    pub fn index(&self) -> usize {
        self.offset
    }

    /// Whether this cursor sits at the end position.
    pub fn at_end(&self) -> bool {
        self.offset == self.slice.len()
    }
}

// Manual impls: the cursor is copyable and comparable regardless of what
// `T` supports, so the derives (which would add `T: Clone` / `T: PartialEq`
// bounds and compare slice contents) are not suitable.

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.slice, other.slice) && self.offset == other.offset
    }
}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("offset", &self.offset)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> ForwardCursor for SliceCursor<'_, T> {
    type Item = T;

    #[inline]
    fn advance(&mut self) {
        debug_assert!(
            self.offset < self.slice.len(),
            "advanced a cursor past the end position"
        );
        self.offset += 1;
    }

    #[inline]
    fn item(&self) -> &T {
        &self.slice[self.offset]
    }
}

#[cfg(test)]
mod tests {
    use super::{ForwardCursor, SliceCursor};

    #[test]
    fn test_slice_cursor_positions() {
        let values = [10, 20, 30];

        let begin = SliceCursor::begin(&values);
        assert_eq!(begin.index(), 0);
        assert!(!begin.at_end());
        assert_eq!(*begin.item(), 10);

        let end = SliceCursor::end(&values);
        assert_eq!(end.index(), 3);
        assert!(end.at_end());

        let mid = SliceCursor::new(&values, 1);
        assert_eq!(*mid.item(), 20);
        assert_eq!(begin.next_position(), mid);

        let mut walk = begin;
        walk.advance();
        walk.advance();
        walk.advance();
        assert_eq!(walk, end);
    }

    #[test]
    fn test_empty_slice_begin_equals_end() {
        let values: [u32; 0] = [];
        assert_eq!(SliceCursor::begin(&values), SliceCursor::end(&values));
        assert!(SliceCursor::begin(&values).at_end());
    }

    #[test]
    fn test_equality_is_per_sequence() {
        let a = [1, 2, 3];
        let b = [1, 2, 3];
        // Same offsets, same contents, different storage: not the same
        // position.
        assert_ne!(SliceCursor::begin(&a[..]), SliceCursor::begin(&b[..]));
        assert_eq!(SliceCursor::begin(&a[..]), SliceCursor::new(&a[..], 0));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_new_rejects_offset_beyond_end() {
        let values = [1, 2];
        let _ = SliceCursor::new(&values, 3);
    }
}
