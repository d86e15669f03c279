// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous array with explicit capacity control.
//!
//! `DynamicArray<T>` owns a buffer of `capacity` slots and tracks how many of
//! them (`len`) hold live elements. It grows by doubling when full and never
//! shrinks.
//!
//! # Core Guarantees
//!
//! - **Checked operations**: every index, capacity and construction error is
//!   returned as a [`DynamicArrayError`], nothing panics on bad input
//! - **Overflow-safe growth**: capacity doubles up to half of the ceiling,
//!   then clamps to the ceiling ([`grown_capacity`], [`max_capacity`])
//! - **Monotonic capacity**: [`DynamicArray::ensure_capacity`] rejects any
//!   request below the current capacity
//! - **Fail-fast cursors**: every mutation bumps a version counter and
//!   [`ArrayCursor`] refuses to continue once it changes
//!
//! # Example
//!
//! ```rust
//! use elastic_array::{DynamicArray, DynamicArrayError, ErrorKind};
//!
//! fn example() -> Result<(), DynamicArrayError> {
//!     let mut array = DynamicArray::with_capacity(2)?;
//!     array.add("a")?;
//!     array.add("b")?;
//!     assert_eq!(array.capacity(), 2);
//!
//!     // Full: the next add doubles the buffer
//!     array.add("c")?;
//!     assert_eq!(array.capacity(), 4);
//!
//!     let err = array.get(3).unwrap_err();
//!     assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to lower the capacity ceiling in tests:
//!
//! ```toml
//! [dev-dependencies]
//! elastic-array = { version = "*", features = ["test_utils"] }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod cursor;
mod dynamic_array;
mod error;
mod growth;

#[cfg(test)]
mod tests;

pub use cursor::ArrayCursor;
pub use dynamic_array::{DEFAULT_CAPACITY, DynamicArray};
pub use error::{DynamicArrayError, ErrorKind};
pub use growth::{grown_capacity, max_capacity};

#[cfg(any(test, feature = "test_utils"))]
pub use dynamic_array::DynamicArrayBehaviour;
