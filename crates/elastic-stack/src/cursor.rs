// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use elastic_array::ArrayCursor;

use crate::array_stack::ArrayStack;
use crate::error::ArrayStackError;

/// Detached cursor over an [`ArrayStack`], from the bottom up to and
/// including the top element.
///
/// Any push, pop or clear made after the cursor was created makes the next
/// step fail with `ArrayStackError::Array(CollectionModified)`.
///
/// # Example
///
/// ```rust
/// use elastic_array::DynamicArrayError;
/// use elastic_stack::{ArrayStack, ArrayStackError};
///
/// let mut stack: ArrayStack<u8> = [1, 2, 3].into_iter().collect();
/// let mut cursor = stack.cursor();
///
/// assert_eq!(cursor.next(&stack), Some(Ok(&1)));
///
/// stack.pop().expect("Failed to pop()");
/// assert_eq!(
///     cursor.next(&stack),
///     Some(Err(ArrayStackError::Array(DynamicArrayError::CollectionModified)))
/// );
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct StackCursor {
    inner: ArrayCursor,
}

impl StackCursor {
    pub(crate) fn new(inner: ArrayCursor) -> Self {
        Self { inner }
    }

    /// Index (from the bottom) of the element the next step yields.
    #[inline]
    pub fn position(&self) -> usize {
        self.inner.position()
    }

    /// Returns `true` if `stack` was mutated since the snapshot.
    #[inline]
    pub fn is_stale<T>(&self, stack: &ArrayStack<T>) -> bool {
        self.inner.is_stale(stack.as_array())
    }

    /// Yields the next element, bottom first.
    pub fn next<'a, T>(
        &mut self,
        stack: &'a ArrayStack<T>,
    ) -> Option<Result<&'a T, ArrayStackError>> {
        self.inner
            .next(stack.as_array())
            .map(|step| step.map_err(ArrayStackError::from))
    }

    /// Restarts at the bottom with a fresh snapshot of `stack`.
    pub fn reset<T>(&mut self, stack: &ArrayStack<T>) {
        self.inner.reset(stack.as_array());
    }
}
