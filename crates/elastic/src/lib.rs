// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Growable array and array-backed stack with checked, fallible operations.</em></p>
//!
//! ---
//!
//! Elastic provides two `no_std` containers:
//!
//! - [`DynamicArray<T>`](array::DynamicArray): contiguous buffer that doubles when full,
//!   with bounds-checked reads, writes, insertion and removal
//! - [`ArrayStack<T>`](stack::ArrayStack): LIFO adapter over a `DynamicArray`
//!
//! # Features
//!
//! - **No panics on bad input**: every index, capacity and emptiness error is a `Result`
//! - **Overflow-safe growth**: capacity doubles, then clamps at the ceiling for `T`
//! - **Monotonic capacity**: buffers never shrink, `clear()` keeps the allocation
//! - **Fail-fast cursors**: detached cursors detect mutation made between steps
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! elastic = "0.1.0"
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use elastic::array::DynamicArray;
//! use elastic::stack::ArrayStack;
//! use elastic::ErrorKind;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut array = DynamicArray::new();
//!     array.add(1)?;
//!     array.add(2)?;
//!     array.add(3)?;
//!
//!     array.insert_at(1, 9)?;
//!     assert_eq!(array.as_slice(), &[1, 9, 2, 3]);
//!     assert_eq!(array.remove(0)?, 1);
//!
//!     let mut stack = ArrayStack::new();
//!     stack.push(1)?;
//!     stack.push(2)?;
//!     assert_eq!(stack.peek()?, &2);
//!     assert_eq!(stack.pop()?, 2);
//!     assert_eq!(stack.pop()?, 1);
//!
//!     let err = stack.pop().unwrap_err();
//!     assert_eq!(err.kind(), ErrorKind::InvalidOperation);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Both error types map onto one [`ErrorKind`] taxonomy:
//!
//! | Kind | Raised by |
//! |------|-----------|
//! | `InvalidArgument` | `DynamicArray::with_capacity(0)` |
//! | `NullReference` | `DynamicArray::from_source(None)` |
//! | `IndexOutOfRange` | `get`, `set`, `remove` past `len`; `insert_at` past `len + 1`; stack `get` above the top |
//! | `CapacityExceeded` | `add`, `insert_at`, `push` at the maximum capacity; any growth the allocator refuses |
//! | `InvalidOperation` | `pop`/`peek` on an empty stack, `ensure_capacity` below the current capacity, a stale cursor |
//!
//! # Iteration
//!
//! `iter()` borrows the container, so mutation during iteration is ruled
//! out at compile time. When a traversal has to interleave with mutation,
//! use a cursor: it holds no borrow and fails fast instead.
//!
//! ```rust
//! use elastic::array::{DynamicArray, DynamicArrayError};
//!
//! let mut array = DynamicArray::from(vec!['a', 'b']);
//! let mut cursor = array.cursor();
//!
//! assert_eq!(cursor.next(&array), Some(Ok(&'a')));
//! array.clear();
//! assert_eq!(cursor.next(&array), Some(Err(DynamicArrayError::CollectionModified)));
//! ```
//!
//! ## License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub use elastic_array as array;
pub use elastic_stack as stack;

pub use elastic_array::ErrorKind;
