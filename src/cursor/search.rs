use super::SequenceCursor;

impl<'a, T> SequenceCursor<'a, T> {
    /// Folds every remaining element into an accumulator, from left to right.
    ///
    /// Returns `initial` unchanged if nothing remains. The cursor is exhausted afterwards.
    ///
    /// This corresponds to [`Iterator::fold()`].
    ///
    /// # Examples
    ///
    /// ```
    /// use slice_cursor::SequenceCursor;
    ///
    /// let mut cursor = SequenceCursor::new(&[1, 2, 3, 4, 5]);
    /// assert_eq!(cursor.reduce(0, |sum, &num| sum + num), 15);
    /// assert!(cursor.is_exhausted());
    ///
    /// let mut cursor = SequenceCursor::<i32>::new(&[]);
    /// assert_eq!(cursor.reduce(0, |sum, &num| sum + num), 0);
    /// ```
    pub fn reduce<A, F>(&mut self, initial: A, combine: F) -> A
    where
        F: FnMut(A, &'a T) -> A,
    {
        self.consume_rest().iter().fold(initial, combine)
    }

    /// Searches for the first remaining element satisfying `pred`.
    ///
    /// Everything scanned is consumed: on a match the cursor stops right after
    /// the matched element, otherwise it ends up exhausted. Elements skipped
    /// over are not recoverable.
    ///
    /// This corresponds to [`Iterator::find()`].
    ///
    /// # Examples
    ///
    /// ```
    /// use slice_cursor::SequenceCursor;
    ///
    /// let mut cursor = SequenceCursor::new(&[1, 3, 4, 5, 6]);
    ///
    /// assert_eq!(cursor.find(|&num| num % 2 == 0), Some(&4));
    /// assert_eq!(cursor.as_slice(), [5, 6]);
    ///
    /// assert_eq!(cursor.find(|&num| num > 10), None);
    /// assert!(cursor.is_exhausted());
    /// ```
    pub fn find<P>(&mut self, mut pred: P) -> Option<&'a T>
    where
        P: FnMut(&T) -> bool,
    {
        while let Some(item) = self.next() {
            if pred(item) {
                return Some(item);
            }
        }

        None
    }

    /// Tests whether any remaining element satisfies `pred`.
    ///
    /// Consumes exactly what [`find()`](SequenceCursor::find) would.
    ///
    /// ```
    /// use slice_cursor::SequenceCursor;
    ///
    /// let mut cursor = SequenceCursor::new(&[1, 3, 5]);
    ///
    /// assert!(!cursor.any(|&num| num % 2 == 0));
    /// assert!(cursor.is_exhausted());
    /// ```
    #[inline]
    pub fn any<P>(&mut self, pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.find(pred).is_some()
    }

    /// Tests whether every remaining element satisfies `pred`.
    ///
    /// Stops right after the first element failing `pred`, leaving the rest
    /// unconsumed. Vacuously `true` if nothing remains.
    ///
    /// This corresponds to [`Iterator::all()`].
    ///
    /// # Examples
    ///
    /// ```
    /// use slice_cursor::SequenceCursor;
    ///
    /// let mut cursor = SequenceCursor::new(&[1, 2, 3]);
    ///
    /// assert!(!cursor.all(|&num| num % 2 == 0));
    /// assert_eq!(cursor.remaining_count(), 2);
    ///
    /// assert!(cursor.all(|&num| num > 1));
    /// assert!(cursor.all(|_| false));
    /// ```
    pub fn all<P>(&mut self, mut pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        while let Some(item) = self.next() {
            if !pred(item) {
                return false;
            }
        }

        true
    }

    /// Tests whether no remaining element satisfies `pred`.
    ///
    /// The negation of [`any()`](SequenceCursor::any), with the same consumption.
    #[inline]
    pub fn none<P>(&mut self, pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.any(pred)
    }
}


#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::test_utils::CursorTester;

    proptest! {
        #[test]
        fn reduce(
            nums in propvec(any::<i32>(), ..=9),
            skip in 0..4_usize,
        ) {
            reduce_impl(nums, skip)?;
        }

        #[test]
        fn find(
            nums in propvec(any::<i32>(), ..=9),
            skip in 0..4_usize,
        ) {
            find_impl(nums, skip)?;
        }

        #[test]
        fn any_none(
            nums in propvec(any::<i32>(), ..=9),
            skip in 0..4_usize,
        ) {
            any_none_impl(nums, skip)?;
        }

        #[test]
        fn all(
            nums in propvec(any::<i32>(), ..=9),
            skip in 0..4_usize,
        ) {
            all_impl(nums, skip)?;
        }
    }

    fn reduce_impl(nums: Vec<i32>, skip: usize) -> TestCaseResult {
        CursorTester::new(&nums, skip).test_operation(
            "reduce",
            |cursor| cursor.reduce(0_i32, |accum, &num| accum ^ num),
            |iter| iter.fold(0_i32, |accum, &num| accum ^ num),
        )
    }

    fn find_impl(nums: Vec<i32>, skip: usize) -> TestCaseResult {
        CursorTester::new(&nums, skip).test_operation(
            "find",
            |cursor| cursor.find(|&num| num > 0),
            |iter| iter.find(|&&num| num > 0),
        )
    }

    fn any_none_impl(nums: Vec<i32>, skip: usize) -> TestCaseResult {
        let tester = CursorTester::new(&nums, skip);

        tester.test_operation(
            "any",
            |cursor| cursor.any(|&num| num % 3 == 0),
            |iter| iter.any(|&num| num % 3 == 0),
        )?;
        tester.test_operation(
            "none",
            |cursor| cursor.none(|&num| num % 3 == 0),
            |iter| !iter.any(|&num| num % 3 == 0),
        )
    }

    fn all_impl(nums: Vec<i32>, skip: usize) -> TestCaseResult {
        CursorTester::new(&nums, skip).test_operation(
            "all",
            |cursor| cursor.all(|&num| num > 0),
            |iter| iter.all(|&num| num > 0),
        )
    }
}
