// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for elastic-array.
use thiserror::Error;

/// Broad classification shared by every error in the elastic crates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// A constructor argument was rejected.
    InvalidArgument,
    /// A required source was absent.
    NullReference,
    /// An index fell outside the bound valid for the operation.
    IndexOutOfRange,
    /// The maximum representable capacity has been reached.
    CapacityExceeded,
    /// The operation is not valid in the current state.
    InvalidOperation,
}

/// Error type for `DynamicArray` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum DynamicArrayError {
    /// Attempted to create an array with zero capacity.
    #[error("cannot create dynamic array with zero capacity")]
    InvalidCapacity,

    /// Attempted to build an array from an absent source sequence.
    #[error("source sequence was absent")]
    MissingSource,

    /// Index outside `[0, bound)`.
    ///
    /// `bound` is `len` for reads, writes and removals, `len + 1` for insertion.
    #[error("index {index} is out of range (bound is {bound})")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Exclusive upper bound that was in force.
        bound: usize,
    },

    /// The array already holds the maximum number of elements.
    #[error("max capacity of {max} elements reached")]
    CapacityExceeded {
        /// The ceiling that was hit.
        max: usize,
    },

    /// The allocator could not provide a buffer of the requested size.
    #[error("failed to allocate a buffer of {requested} elements")]
    AllocationFailed {
        /// Capacity that was requested.
        requested: usize,
    },

    /// `ensure_capacity` was asked for less than the current capacity.
    #[error("cannot reduce capacity from {current} to {requested}")]
    CapacityReduction {
        /// Capacity held at the time of the request.
        current: usize,
        /// Capacity that was requested.
        requested: usize,
    },

    /// A cursor observed a mutation made after it was created.
    #[error("collection changed during enumeration")]
    CollectionModified,
}

impl DynamicArrayError {
    /// Returns the broad classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCapacity => ErrorKind::InvalidArgument,
            Self::MissingSource => ErrorKind::NullReference,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::CapacityExceeded { .. } | Self::AllocationFailed { .. } => {
                ErrorKind::CapacityExceeded
            }
            Self::CapacityReduction { .. } | Self::CollectionModified => {
                ErrorKind::InvalidOperation
            }
        }
    }
}
