//! A borrowing cursor over a slice, with eager transformation, filtering,
//! reduction, search and combination operations.
//!
//! [`SequenceCursor`] is a position marker over caller-owned storage. It never
//! copies or owns the backing slice; it only remembers how much of it has been
//! consumed. Every operation works on the *remaining* elements, and every
//! operation that reads elements consumes them.
//!
//! # Motivation
//!
//! [`Iterator`] adaptors are lazy: nothing happens until the pipeline is driven,
//! and a partially driven pipeline is hard to inspect afterwards. A cursor makes
//! the consumption explicit. After any operation we can ask how many elements
//! are left, peek at the next one, or hand the rest to another operation.
//!
//! ```
//! use slice_cursor::prelude::*;
//!
//! let tokens = [1, 2, 3, 10, 11, 12];
//! let mut cursor = SequenceCursor::new(&tokens);
//!
//! // Everything before the first large number is the "header".
//! let header = cursor.take(3);
//! assert_eq!(header, [1, 2, 3]);
//!
//! // The rest is the "body".
//! assert_eq!(cursor.peek(), Some(&10));
//! let body_sum = cursor.reduce(0, |sum, &num| sum + num);
//! assert_eq!(body_sum, 33);
//!
//! assert!(cursor.is_exhausted());
//! ```
//!
//! # Consumption
//!
//! Search operations consume what they scan. [`find`](SequenceCursor::find)
//! consumes up to and including the match, [`all`](SequenceCursor::all) stops
//! right after the first failing element, and [`any`](SequenceCursor::any) /
//! [`none`](SequenceCursor::none) behave like `find`. No operation ever moves
//! the cursor backwards.
//!
//! ```
//! use slice_cursor::SequenceCursor;
//!
//! let nums = [1, 2, 3];
//! let mut cursor = SequenceCursor::new(&nums);
//!
//! assert!(!cursor.all(|&num| num % 2 == 0));
//! // `1` failed the predicate and is gone.
//! assert_eq!(cursor.remaining_count(), 2);
//! ```
//!
//! # Allocation failure
//!
//! [`map_fallible`](SequenceCursor::map_fallible) reserves its output up front
//! and reports a failed reservation as [`CursorError::Alloc`], leaving the
//! cursor untouched. The other operations returning a [`Vec`] (`map`, `filter`,
//! `take`, `collect`, `chain`, `zip`) follow the usual [`Vec`] contract: running
//! out of memory aborts through the global allocator instead of returning an error.
//!
//! # Features
//!
//! - `std` (default): enables `alloc` and implements `std::error::Error`.
//! - `alloc`: operations returning a [`Vec`] and [`CursorError`].
//!
//! Without `alloc` the crate is `no_std` and still offers construction,
//! primitive access and the `reduce` / `find` / `any` / `all` / `none` family.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate core as std;

mod cursor;
#[cfg(feature = "alloc")]
pub mod error;
mod pair;
pub mod prelude;
#[cfg(all(test, feature = "std"))]
mod test_utils;

pub use cursor::*;
#[cfg(feature = "alloc")]
pub use error::CursorError;
pub use pair::*;

#[cfg(test)]
mod tests {
    use crate::SequenceCursor;

    #[cfg(feature = "alloc")]
    #[test]
    fn take_then_reduce() {
        let nums = [4, 5, 6, 7];
        let mut cursor = SequenceCursor::new(&nums);

        let head = cursor.take(2);
        assert_eq!(head, [4, 5]);
        assert_eq!(cursor.reduce(0, |sum, &num| sum + num), 13);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn primitives_without_alloc() {
        let nums = [1, 3, 4, 5];
        let mut cursor = SequenceCursor::new(&nums);

        assert_eq!(cursor.find(|&num| num % 2 == 0), Some(&4));
        assert!(cursor.all(|&num| num % 2 != 0));
        assert!(cursor.is_exhausted());
    }
}
