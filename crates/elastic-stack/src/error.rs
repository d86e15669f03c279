// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for elastic-stack.
use elastic_array::{DynamicArrayError, ErrorKind};
use thiserror::Error;

/// Error type for `ArrayStack` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ArrayStackError {
    /// `pop()` or `peek()` on a stack with no elements.
    #[error("stack was empty")]
    Empty,

    /// Index above the top of the stack.
    #[error("index {index} is out of range for stack of depth {depth}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of elements on the stack.
        depth: usize,
    },

    /// An error from the backing `DynamicArray`.
    #[error("DynamicArrayError: {0}")]
    Array(#[from] DynamicArrayError),
}

impl ArrayStackError {
    /// Returns the broad classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Empty => ErrorKind::InvalidOperation,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::Array(error) => error.kind(),
        }
    }
}
