//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the most frequently used types.
//!
//! # Example
//!
//! ```
//! use slice_cursor::prelude::*;
//!
//! let mut cursor = SequenceCursor::new(&[1, 2]);
//! assert_eq!(cursor.next(), Some(&1));
//! ```

#[cfg(feature = "alloc")]
pub use crate::error::CursorError;
pub use crate::{Pair, SequenceCursor};
