/// Two elements taken at the same position from two cursors.
///
/// This is the element type produced by [`SequenceCursor::zip()`](crate::SequenceCursor::zip).
/// It converts to and from a tuple, and compares equal to the tuple with the same fields.
///
/// # Examples
///
/// ```
/// use slice_cursor::Pair;
///
/// let pair = Pair::new(1, 'a');
///
/// assert_eq!(pair, (1, 'a'));
/// assert_eq!(pair.into_tuple(), (1, 'a'));
/// assert_eq!(Pair::from((2, 'b')).second, 'b');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pair<T, U> {
    /// The element taken from the cursor `zip()` was called on.
    pub first: T,
    /// The element taken from the other cursor.
    pub second: U,
}

impl<T, U> Pair<T, U> {
    #[inline]
    pub const fn new(first: T, second: U) -> Self {
        Self { first, second }
    }

    #[inline]
    pub fn into_tuple(self) -> (T, U) {
        (self.first, self.second)
    }

    /// Swaps the two elements.
    #[inline]
    pub fn swap(self) -> Pair<U, T> {
        Pair::new(self.second, self.first)
    }
}

impl<T, U> From<(T, U)> for Pair<T, U> {
    #[inline]
    fn from((first, second): (T, U)) -> Self {
        Self::new(first, second)
    }
}

impl<T, U> From<Pair<T, U>> for (T, U) {
    #[inline]
    fn from(pair: Pair<T, U>) -> Self {
        pair.into_tuple()
    }
}

impl<T, U, T2, U2> PartialEq<(T2, U2)> for Pair<T, U>
where
    T: PartialEq<T2>,
    U: PartialEq<U2>,
{
    #[inline]
    fn eq(&self, (first, second): &(T2, U2)) -> bool {
        self.first == *first && self.second == *second
    }
}
