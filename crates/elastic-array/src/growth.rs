// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Capacity growth policy.

/// Largest capacity a `DynamicArray<T>` may hold.
///
/// Allocations are limited to `isize::MAX` bytes, so the ceiling for sized
/// elements is `isize::MAX / size_of::<T>()`. Zero-sized elements never
/// allocate and are bounded only by `usize::MAX`.
#[inline]
pub const fn max_capacity<T>() -> usize {
    let size = core::mem::size_of::<T>();

    if size == 0 {
        usize::MAX
    } else {
        isize::MAX as usize / size
    }
}

/// Capacity to grow to when an array of `capacity` elements is full.
///
/// Doubles while doubling cannot pass `ceiling`, otherwise clamps to it:
///
/// ```rust
/// use elastic_array::grown_capacity;
///
/// assert_eq!(grown_capacity(4, 100), 8);
/// assert_eq!(grown_capacity(50, 100), 100);
/// assert_eq!(grown_capacity(51, 100), 100);
/// assert_eq!(grown_capacity(usize::MAX / 2 + 1, usize::MAX), usize::MAX);
/// ```
#[inline]
pub const fn grown_capacity(capacity: usize, ceiling: usize) -> usize {
    // ceiling / 2 rounds down, so capacity * 2 <= ceiling cannot overflow.
    if capacity <= ceiling / 2 {
        capacity * 2
    } else {
        ceiling
    }
}
