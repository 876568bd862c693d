//! Error type for the fallible cursor operations.

use thiserror::Error;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::collections::TryReserveError;
#[cfg(feature = "std")]
use std::collections::TryReserveError;

/// Errors returned by [`SequenceCursor::map_fallible()`](crate::SequenceCursor::map_fallible).
///
/// The two variants keep "the output buffer could not be allocated" apart from
/// "the caller's transform failed", so callers can react to each differently.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CursorError<E> {
    /// The output sequence could not be allocated.
    #[error("failed to allocate the output sequence: {0}")]
    Alloc(#[from] TryReserveError),

    /// The transform failed. Holds the exact error it returned.
    #[error("transform failed: {0}")]
    Transform(E),
}

impl<E> CursorError<E> {
    /// Returns `true` if this is an [`Alloc`](CursorError::Alloc) error.
    #[inline]
    pub const fn is_alloc(&self) -> bool {
        matches!(self, Self::Alloc(_))
    }

    /// Returns `true` if this is a [`Transform`](CursorError::Transform) error.
    #[inline]
    pub const fn is_transform(&self) -> bool {
        matches!(self, Self::Transform(_))
    }

    /// Returns the transform's error, if that is what failed.
    #[inline]
    pub fn into_transform(self) -> Option<E> {
        if let Self::Transform(err) = self {
            Some(err)
        } else {
            None
        }
    }
}
