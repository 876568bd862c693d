use super::SequenceCursor;
use crate::CursorError;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

impl<'a, T> SequenceCursor<'a, T> {
    /// Applies `transform` to every remaining element and collects the results.
    ///
    /// The output has exactly [`remaining_count()`](SequenceCursor::remaining_count)
    /// elements, in order. The cursor is exhausted afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use slice_cursor::SequenceCursor;
    ///
    /// let mut cursor = SequenceCursor::new(&[1, 2, 3]);
    ///
    /// assert_eq!(cursor.map(|&num| num * 2), [2, 4, 6]);
    /// assert!(cursor.is_exhausted());
    /// ```
    ///
    /// The transform may borrow from the backing slice.
    ///
    /// ```
    /// use slice_cursor::SequenceCursor;
    ///
    /// let words = [String::from("ab"), String::from("cde")];
    /// let mut cursor = SequenceCursor::new(&words);
    ///
    /// let views: Vec<&str> = cursor.map(|word| &word[1..]);
    /// assert_eq!(views, ["b", "de"]);
    /// ```
    pub fn map<R, F>(&mut self, transform: F) -> Vec<R>
    where
        F: FnMut(&'a T) -> R,
    {
        self.consume_rest().iter().map(transform).collect()
    }

    /// Applies a fallible `transform` to every remaining element, stopping at the
    /// first error.
    ///
    /// This is all-or-nothing: on error, the results so far are dropped and the
    /// error is returned as [`CursorError::Transform`]. Elements up to and
    /// including the failing one stay consumed.
    ///
    /// The output is reserved up front. If that fails, [`CursorError::Alloc`] is
    /// returned and nothing is consumed.
    ///
    /// # Examples
    ///
    /// ```
    /// use slice_cursor::{CursorError, SequenceCursor};
    ///
    /// let inputs = ["1", "2", "x", "4"];
    /// let mut cursor = SequenceCursor::new(&inputs);
    ///
    /// let result = cursor.map_fallible(|s| s.parse::<i32>());
    /// assert!(matches!(result, Err(CursorError::Transform(_))));
    ///
    /// // "x" and everything before it is gone.
    /// assert_eq!(cursor.as_slice(), ["4"]);
    ///
    /// assert_eq!(cursor.map_fallible(|s| s.parse::<i32>()), Ok(vec![4]));
    /// ```
    pub fn map_fallible<R, E, F>(&mut self, mut transform: F) -> Result<Vec<R>, CursorError<E>>
    where
        F: FnMut(&'a T) -> Result<R, E>,
    {
        let mut output = Vec::new();
        output.try_reserve_exact(self.remaining_count())?;

        while let Some(item) = self.next() {
            output.push(transform(item).map_err(CursorError::Transform)?);
        }

        Ok(output)
    }

    /// Collects clones of the remaining elements satisfying `pred`, in order.
    ///
    /// The cursor is exhausted afterwards.
    ///
    /// ```
    /// use slice_cursor::SequenceCursor;
    ///
    /// let mut cursor = SequenceCursor::new(&[1, 2, 3, 4, 5]);
    ///
    /// assert_eq!(cursor.filter(|&num| num % 2 == 0), [2, 4]);
    /// assert!(cursor.is_exhausted());
    /// ```
    pub fn filter<P>(&mut self, mut pred: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        self.consume_rest()
            .iter()
            .filter(|&item| pred(item))
            .cloned()
            .collect()
    }

    /// Collects clones of up to `n` remaining elements.
    ///
    /// Consumes exactly `min(n, remaining_count())` elements.
    ///
    /// ```
    /// use slice_cursor::SequenceCursor;
    ///
    /// let mut cursor = SequenceCursor::new(&[1, 2, 3]);
    ///
    /// assert_eq!(cursor.take(2), [1, 2]);
    /// assert_eq!(cursor.take(5), [3]);
    /// assert!(cursor.take(1).is_empty());
    /// ```
    #[inline]
    pub fn take(&mut self, n: usize) -> Vec<T>
    where
        T: Clone,
    {
        self.consume(n).to_vec()
    }

    /// Collects clones of every remaining element.
    ///
    /// Same as [`take()`](SequenceCursor::take) with `n` set to
    /// [`remaining_count()`](SequenceCursor::remaining_count).
    ///
    /// ```
    /// use slice_cursor::SequenceCursor;
    ///
    /// let mut cursor = SequenceCursor::new(&[1, 2, 3]);
    /// cursor.next();
    ///
    /// assert_eq!(cursor.collect(), [2, 3]);
    /// assert!(cursor.is_exhausted());
    /// ```
    #[inline]
    pub fn collect(&mut self) -> Vec<T>
    where
        T: Clone,
    {
        self.consume_rest().to_vec()
    }
}
