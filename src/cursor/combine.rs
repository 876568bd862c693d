use super::SequenceCursor;
use crate::Pair;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

impl<'a, T> SequenceCursor<'a, T> {
    /// Collects clones of the remaining elements of this cursor, followed by
    /// those of `other`.
    ///
    /// Both cursors are exhausted afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use slice_cursor::SequenceCursor;
    ///
    /// let (front, back) = ([1, 2], [3, 4]);
    /// let mut front = SequenceCursor::new(&front);
    /// let mut back = SequenceCursor::new(&back);
    ///
    /// assert_eq!(front.chain(&mut back), [1, 2, 3, 4]);
    /// assert!(front.is_exhausted());
    /// assert!(back.is_exhausted());
    /// ```
    pub fn chain(&mut self, other: &mut SequenceCursor<'_, T>) -> Vec<T>
    where
        T: Clone,
    {
        let head = self.consume_rest();
        let tail = other.consume_rest();

        let mut output = Vec::with_capacity(head.len() + tail.len());
        output.extend_from_slice(head);
        output.extend_from_slice(tail);
        output
    }

    /// Pairs up the remaining elements of this cursor and `other`, position by position.
    ///
    /// Stops as soon as either side runs out, so the output is as long as the
    /// shorter remainder. Both cursors advance by exactly the number of pairs
    /// produced: the longer one keeps its extra elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use slice_cursor::SequenceCursor;
    ///
    /// let (nums, chars) = ([1, 2, 3], ['a', 'b']);
    /// let mut nums = SequenceCursor::new(&nums);
    /// let mut chars = SequenceCursor::new(&chars);
    ///
    /// assert_eq!(nums.zip(&mut chars), [(1, 'a'), (2, 'b')]);
    /// assert_eq!(nums.as_slice(), [3]);
    /// assert!(chars.is_exhausted());
    /// ```
    pub fn zip<U>(&mut self, other: &mut SequenceCursor<'_, U>) -> Vec<Pair<T, U>>
    where
        T: Clone,
        U: Clone,
    {
        let n = self.remaining_count().min(other.remaining_count());
        let firsts = self.consume(n);
        let seconds = other.consume(n);

        firsts
            .iter()
            .zip(seconds)
            .map(|(first, second)| Pair::new(first.clone(), second.clone()))
            .collect()
    }
}
