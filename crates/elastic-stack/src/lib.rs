// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! LIFO stack over a `DynamicArray`.
//!
//! `ArrayStack<T>` keeps its elements in an [`elastic_array::DynamicArray`]
//! and tracks the index of the top element. Push appends, pop removes the
//! last live element, so both are amortised O(1).
//!
//! Popping or peeking an empty stack returns [`ArrayStackError::Empty`];
//! errors from the backing array are carried in [`ArrayStackError::Array`].
//!
//! # Example
//!
//! ```rust
//! use elastic_stack::{ArrayStack, ArrayStackError, Stack};
//!
//! fn drain<S: Stack<u32, Error = ArrayStackError>>(stack: &mut S) -> Vec<u32> {
//!     let mut out = Vec::new();
//!     while !stack.is_empty() {
//!         out.push(stack.pop().expect("Failed to pop()"));
//!     }
//!     out
//! }
//!
//! let mut stack = ArrayStack::new();
//! for i in 1..=3 {
//!     stack.push(i).expect("Failed to push(..)");
//! }
//!
//! // Iteration runs bottom to top and includes the top element
//! assert_eq!(stack.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! assert_eq!(drain(&mut stack), [3, 2, 1]);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

mod array_stack;
mod cursor;
mod error;
mod traits;

#[cfg(test)]
mod tests;

pub use array_stack::ArrayStack;
pub use cursor::StackCursor;
pub use error::ArrayStackError;
pub use traits::Stack;
