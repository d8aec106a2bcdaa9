//! Minimum-position search.
//!
//! One algorithm in several call shapes: scan a half-open cursor range once
//! and return the position of its smallest element under a strict ordering
//! relation, optionally composed with a projection that extracts the
//! comparison key from each element. All entry points funnel into a single
//! core loop, so the tie-break rule (earliest minimum wins) exists exactly
//! once.
//!
//! The free functions take an explicit `(start, end)` cursor pair; the
//! [`MinElementExt`] extension trait offers the same operations on any
//! [`ForwardRange`] value.

use crate::cursor::ForwardCursor;
use crate::forward_range::ForwardRange;

/// The default strict ordering relation: plain `<` over `Ord` values.
///
/// Exposed as a named `fn` so callers can pass it wherever an explicit
/// relation is expected, interchangeably with a closure.
#[inline]
pub fn ordered_less<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

/// The core scan. Sole owner of the candidate-replacement rule.
///
/// Replacement requires the relation to prove the element under test
/// *strictly* smaller than the running candidate, so among equal-key
/// elements the earliest one in traversal order is kept.
fn scan_min<C, F>(start: C, end: C, mut is_less: F) -> C
where
    C: ForwardCursor,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let mut candidate = start;
    if candidate == end {
        return candidate;
    }
    let mut cursor = candidate.next_position();
    while cursor != end {
        if is_less(cursor.item(), candidate.item()) {
            candidate = cursor.clone();
        }
        cursor.advance();
    }
    candidate
}

/// Returns the position of the smallest element in `[start, end)` under the
/// natural ordering.
///
/// For an empty range (`start == end`) the result is `start` unchanged;
/// callers detect emptiness by comparing the result against `end`. When
/// several elements are equally minimal, the position of the first one in
/// traversal order is returned.
///
/// The scan is a single forward pass: for a range of `n` elements it
/// performs exactly `n - 1` comparisons and keeps O(1) auxiliary state. It
/// never mutates the sequence and never allocates.
///
/// Reachability of `end` from `start` is the caller's contract; the scan
/// performs no validation.
pub fn min_position<C>(start: C, end: C) -> C
where
    C: ForwardCursor,
    C::Item: Ord,
{
    scan_min(start, end, ordered_less)
}

/// Like [`min_position`], but with a caller-supplied strict ordering
/// relation over the elements.
///
/// `is_less` must encode a strict weak ordering for the minimality
/// guarantee to hold; the scan does not verify this. The relation is
/// invoked exactly `n - 1` times for an `n`-element range, and any panic it
/// raises propagates unmodified.
///
/// The relation is taken by value, so stateful and non-`Clone` callables
/// are accepted.
pub fn min_position_by<C, F>(start: C, end: C, is_less: F) -> C
where
    C: ForwardCursor,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    scan_min(start, end, is_less)
}

/// Like [`min_position`], but compares elements by the keys `proj` extracts
/// from them.
///
/// `proj` is applied per comparison, on both sides, and its results are
/// never memoized across the scan: for an `n`-element range it is invoked
/// exactly `2 * (n - 1)` times. A projection with observable side effects
/// therefore fires once per comparison operand, not once per element
/// globally.
pub fn min_position_by_key<C, K, P>(start: C, end: C, mut proj: P) -> C
where
    C: ForwardCursor,
    K: Ord,
    P: FnMut(&C::Item) -> K,
{
    scan_min(start, end, move |a, b| proj(a) < proj(b))
}

/// The fully general form: a caller-supplied relation over caller-projected
/// keys.
///
/// Equivalent to [`min_position_by_key`] with `is_less` in place of the
/// natural key ordering; the invocation counts and the earliest-tie rule
/// are identical. Both callables are taken by value.
pub fn min_position_with<C, K, F, P>(start: C, end: C, mut is_less: F, mut proj: P) -> C
where
    C: ForwardCursor,
    F: FnMut(&K, &K) -> bool,
    P: FnMut(&C::Item) -> K,
{
    scan_min(start, end, move |a, b| is_less(&proj(a), &proj(b)))
}

/// Minimum-position search over a whole [`ForwardRange`] value.
///
/// Each method delegates to the corresponding two-cursor free function with
/// this range's `begin()`/`end()`, forwarding the relation and projection
/// unchanged. Blanket-implemented for every `ForwardRange`.
pub trait MinElementExt: ForwardRange + Sized {
    /// Position of the smallest element under the natural ordering; equals
    /// `self.end()` when the range is empty.
    fn min_position(self) -> Self::Cursor
    where
        Self::Item: Ord,
    {
        min_position(self.begin(), self.end())
    }

    /// Position of the smallest element under `is_less`.
    fn min_position_by<F>(self, is_less: F) -> Self::Cursor
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        min_position_by(self.begin(), self.end(), is_less)
    }

    /// Position of the element with the smallest projected key.
    fn min_position_by_key<K, P>(self, proj: P) -> Self::Cursor
    where
        K: Ord,
        P: FnMut(&Self::Item) -> K,
    {
        min_position_by_key(self.begin(), self.end(), proj)
    }

    /// Position of the smallest element under `is_less` over projected
    /// keys.
    fn min_position_with<K, F, P>(self, is_less: F, proj: P) -> Self::Cursor
    where
        F: FnMut(&K, &K) -> bool,
        P: FnMut(&Self::Item) -> K,
    {
        min_position_with(self.begin(), self.end(), is_less, proj)
    }
}

impl<R: ForwardRange> MinElementExt for R {}
