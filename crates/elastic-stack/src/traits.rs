// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Last-in-first-out access to a collection.
pub trait Stack<T> {
    /// Error returned by fallible operations.
    type Error;

    /// Places `item` on top of the stack.
    fn push(&mut self, item: T) -> Result<(), Self::Error>;

    /// Removes and returns the top element.
    fn pop(&mut self) -> Result<T, Self::Error>;

    /// Returns the top element without removing it.
    fn peek(&self) -> Result<&T, Self::Error>;

    /// Returns `true` if the stack holds no elements.
    fn is_empty(&self) -> bool;
}
