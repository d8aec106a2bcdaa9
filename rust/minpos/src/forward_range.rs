//! Whole-range objects: a begin/end cursor pair behind a single value.
//!
//! [`ForwardRange`] lets a caller pass one sequence-like object instead of
//! two cursors. The trait is implemented on reference types (`&[T]`,
//! `&Vec<T>`, `&[T; N]`) so the cursors it hands out can borrow the
//! underlying storage, mirroring the `IntoIterator`-on-references
//! convention.

use crate::cursor::{ForwardCursor, SliceCursor};

/// A sequence that can hand out its begin and end positions.
///
/// The pair `(begin, end)` denotes the half-open interval `[begin, end)`;
/// `end` is a boundary only and is never dereferenced.
pub trait ForwardRange {
    /// Element type of the underlying sequence.
    type Item;

    /// Cursor type handed out by this range.
    type Cursor: ForwardCursor<Item = Self::Item>;

    /// The position of the first element (equal to `end` when the range is
    /// empty).
    fn begin(&self) -> Self::Cursor;

    /// The one-past-the-last boundary position.
    fn end(&self) -> Self::Cursor;
}

impl<'a, T> ForwardRange for &'a [T] {
    type Item = T;
    type Cursor = SliceCursor<'a, T>;

    fn begin(&self) -> SliceCursor<'a, T> {
        SliceCursor::begin(*self)
    }

    fn end(&self) -> SliceCursor<'a, T> {
        SliceCursor::end(*self)
    }
}

impl<'a, T> ForwardRange for &'a Vec<T> {
    type Item = T;
    type Cursor = SliceCursor<'a, T>;

    fn begin(&self) -> SliceCursor<'a, T> {
        SliceCursor::begin(self.as_slice())
    }

    fn end(&self) -> SliceCursor<'a, T> {
        SliceCursor::end(self.as_slice())
    }
}

impl<'a, T, const N: usize> ForwardRange for &'a [T; N] {
    type Item = T;
    type Cursor = SliceCursor<'a, T>;

    fn begin(&self) -> SliceCursor<'a, T> {
        SliceCursor::begin(*self)
    }

    fn end(&self) -> SliceCursor<'a, T> {
        SliceCursor::end(*self)
    }
}
