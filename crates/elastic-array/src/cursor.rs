// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::dynamic_array::DynamicArray;
use crate::error::DynamicArrayError;

/// Detached, restartable cursor over a [`DynamicArray`].
///
/// The cursor stores the array's version at creation and a position. Each
/// step compares the stored version with the array's current one before
/// yielding anything, so a mutation between two steps is reported as
/// [`DynamicArrayError::CollectionModified`] instead of being observed.
///
/// A cursor must only be stepped with the array that created it (or the
/// array it was last [`reset`](Self::reset) against).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ArrayCursor {
    version: u64,
    position: usize,
}

impl ArrayCursor {
    pub(crate) fn new(version: u64) -> Self {
        Self {
            version,
            position: 0,
        }
    }

    /// Index of the element the next step yields.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` if `array` was mutated since the snapshot.
    #[inline]
    pub fn is_stale<T>(&self, array: &DynamicArray<T>) -> bool {
        self.version != array.version()
    }

    /// Yields the next element in index order.
    ///
    /// Returns `None` once every element has been yielded and
    /// `Some(Err(CollectionModified))` on every step after a mutation.
    pub fn next<'a, T>(
        &mut self,
        array: &'a DynamicArray<T>,
    ) -> Option<Result<&'a T, DynamicArrayError>> {
        if self.is_stale(array) {
            return Some(Err(DynamicArrayError::CollectionModified));
        }

        let item = array.as_slice().get(self.position)?;
        self.position += 1;

        Some(Ok(item))
    }

    /// Restarts at index 0 with a fresh snapshot of `array`'s version.
    pub fn reset<T>(&mut self, array: &DynamicArray<T>) {
        self.version = array.version();
        self.position = 0;
    }
}
