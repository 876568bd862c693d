//! The [`SequenceCursor`] type and its operations.

#[cfg(feature = "alloc")]
mod combine;
mod search;
#[cfg(feature = "alloc")]
mod transform;

use std::fmt::Debug;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// A cursor over a borrowed slice.
///
/// The cursor remembers how many elements of the slice have been consumed.
/// It never owns, copies or mutates the slice itself, so the slice has to
/// outlive the cursor (enforced by `'a`).
///
/// Every operation only looks at the *remaining* elements, and the position
/// only ever moves forward. Once the cursor is exhausted it stays exhausted.
///
/// Copying a cursor gives an independent cursor at the same position,
/// much like saving a position while parsing. Advancing the copy never
/// affects the original.
///
/// # Examples
///
/// ```
/// use slice_cursor::SequenceCursor;
///
/// let nums = [1, 2, 3];
/// let mut cursor = SequenceCursor::new(&nums);
///
/// assert_eq!(cursor.remaining_count(), 3);
/// assert_eq!(cursor.peek(), Some(&1));
/// assert_eq!(cursor.next(), Some(&1));
/// assert_eq!(cursor.next(), Some(&2));
/// assert_eq!(cursor.remaining_count(), 1);
/// assert_eq!(cursor.next(), Some(&3));
///
/// assert_eq!(cursor.next(), None);
/// assert_eq!(cursor.next(), None);
/// ```
pub struct SequenceCursor<'a, T> {
    items: &'a [T],
    // Invariant: `position <= items.len()`.
    position: usize,
}

impl<'a, T> SequenceCursor<'a, T> {
    /// Creates a cursor at the start of `items`.
    ///
    /// An empty slice is valid and gives an already exhausted cursor.
    #[inline]
    pub const fn new(items: &'a [T]) -> Self {
        Self { items, position: 0 }
    }

    /// Returns the element at the current position and advances past it.
    ///
    /// Returns `None` once the cursor is exhausted, without any side effect.
    // Not `Iterator`: its by-value adaptors would take precedence over
    // the eager methods in method resolution.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn next(&mut self) -> Option<&'a T> {
        let item = self.items.get(self.position)?;
        self.position += 1;
        Some(item)
    }

    /// Returns the element at the current position without advancing.
    #[inline]
    pub fn peek(&self) -> Option<&'a T> {
        self.items.get(self.position)
    }

    /// Returns how many elements have not been consumed yet.
    #[inline]
    pub const fn remaining_count(&self) -> usize {
        self.items.len() - self.position
    }

    /// Skips up to `n` elements.
    ///
    /// Skipping past the end is not an error: the cursor simply becomes exhausted.
    ///
    /// ```
    /// use slice_cursor::SequenceCursor;
    ///
    /// let mut cursor = SequenceCursor::new(&[1, 2, 3]);
    ///
    /// cursor.advance_by(2);
    /// assert_eq!(cursor.peek(), Some(&3));
    ///
    /// cursor.advance_by(100);
    /// assert!(cursor.is_exhausted());
    /// ```
    #[inline]
    pub fn advance_by(&mut self, n: usize) {
        self.position = self.position.saturating_add(n).min(self.items.len());
    }

    /// Returns the index of the next element to be consumed.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` if no element remains.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining_count() == 0
    }

    /// Returns the elements that have not been consumed yet, without consuming them.
    ///
    /// ```
    /// use slice_cursor::SequenceCursor;
    ///
    /// let mut cursor = SequenceCursor::new(&[1, 2, 3]);
    /// cursor.next();
    ///
    /// assert_eq!(cursor.as_slice(), [2, 3]);
    /// assert_eq!(cursor.remaining_count(), 2);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        &self.items[self.position..]
    }

    /// Returns the whole backing slice, including consumed elements.
    ///
    /// Its length is the total length, not what remains; see
    /// [`remaining_count()`](SequenceCursor::remaining_count) for that.
    #[inline]
    pub const fn source(&self) -> &'a [T] {
        self.items
    }

    /// Consumes up to `n` elements and returns them as a slice.
    #[cfg(feature = "alloc")]
    #[inline]
    fn consume(&mut self, n: usize) -> &'a [T] {
        let rest = self.as_slice();
        let n = n.min(rest.len());
        self.position += n;
        &rest[..n]
    }

    /// Consumes every remaining element and returns them as a slice.
    #[inline]
    fn consume_rest(&mut self) -> &'a [T] {
        let rest = self.as_slice();
        self.position = self.items.len();
        rest
    }
}

impl<T> Clone for SequenceCursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SequenceCursor<'_, T> {}

impl<T> Default for SequenceCursor<'_, T> {
    #[inline]
    fn default() -> Self {
        Self::new(&[])
    }
}

impl<T: Debug> Debug for SequenceCursor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequenceCursor")
            .field("position", &self.position)
            .field("remaining", &self.as_slice())
            .finish()
    }
}

impl<'a, T> From<&'a [T]> for SequenceCursor<'a, T> {
    #[inline]
    fn from(items: &'a [T]) -> Self {
        Self::new(items)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for SequenceCursor<'a, T> {
    #[inline]
    fn from(items: &'a [T; N]) -> Self {
        Self::new(items)
    }
}

#[cfg(feature = "alloc")]
impl<'a, T> From<&'a Vec<T>> for SequenceCursor<'a, T> {
    #[inline]
    fn from(items: &'a Vec<T>) -> Self {
        Self::new(items)
    }
}

/// Yields the remaining elements, for use with `for` loops and [`Iterator`] adaptors.
///
/// ```
/// use slice_cursor::SequenceCursor;
///
/// let mut cursor = SequenceCursor::new(&[1, 2, 3, 4]);
/// cursor.advance_by(1);
///
/// let rest: Vec<_> = cursor.into_iter().rev().collect();
/// assert_eq!(rest, [&4, &3, &2]);
/// ```
impl<'a, T> IntoIterator for SequenceCursor<'a, T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
