use std::fmt::Debug;

use proptest::{prelude::*, test_runner::TestCaseResult};

use crate::SequenceCursor;

/// Checks a cursor operation against the equivalent [`Iterator`] pipeline
/// run over the same slice.
///
/// Both sides start after the first `skip` elements, so operations are also
/// exercised on partially consumed cursors.
pub struct CursorTester<'a, T> {
    items: &'a [T],
    skip: usize,
}

/// An error returned when a cursor operation disagrees with its iterator counterpart.
#[derive(Debug)]
pub enum PredError {
    /// The operation produced a different output.
    IncorrectOutput,
    /// The operation left a different number of elements unconsumed.
    IncorrectCursorConsumption,
}

impl PredError {
    fn of_operation(self, name: &'static str) -> OfOperation {
        OfOperation {
            name,
            pred_error: self,
        }
    }
}

/// Helper to convert [`PredError`] into [`TestCaseError`].
struct OfOperation {
    name: &'static str,
    pred_error: PredError,
}

impl From<OfOperation> for TestCaseError {
    fn from(OfOperation { name, pred_error }: OfOperation) -> Self {
        Self::Fail(format!("`{name}()` is implemented incorrectly: {pred_error:?}").into())
    }
}

impl<'a, T> CursorTester<'a, T>
where
    T: PartialEq + Debug,
{
    pub fn new(items: &'a [T], skip: usize) -> Self {
        Self { items, skip }
    }

    /// Returns a cursor and an iterator, both past the skipped prefix.
    pub fn parts(&self) -> (SequenceCursor<'a, T>, std::slice::Iter<'a, T>) {
        let mut cursor = SequenceCursor::new(self.items);
        cursor.advance_by(self.skip);

        let iter = self.items[self.skip.min(self.items.len())..].iter();
        (cursor, iter)
    }

    pub fn test_operation<O>(
        &self,
        name: &'static str,
        cursor_way: impl FnOnce(&mut SequenceCursor<'a, T>) -> O,
        iter_way: impl FnOnce(&mut std::slice::Iter<'a, T>) -> O,
    ) -> TestCaseResult
    where
        O: PartialEq + Debug,
    {
        let (mut cursor, mut iter) = self.parts();
        let position_before = cursor.position();

        let output = cursor_way(&mut cursor);
        let expected = iter_way(&mut iter);

        prop_assert!(
            cursor.position() >= position_before,
            "`{}()` moved the cursor backwards",
            name
        );

        check(&output, &expected, &cursor, &iter).map_err(|e| e.of_operation(name))?;
        Ok(())
    }
}

fn check<T, O>(
    output: &O,
    expected: &O,
    cursor: &SequenceCursor<'_, T>,
    iter: &std::slice::Iter<'_, T>,
) -> Result<(), PredError>
where
    T: PartialEq,
    O: PartialEq,
{
    if output != expected {
        Err(PredError::IncorrectOutput)
    } else if cursor.as_slice() != iter.as_slice() {
        Err(PredError::IncorrectCursorConsumption)
    } else {
        Ok(())
    }
}
