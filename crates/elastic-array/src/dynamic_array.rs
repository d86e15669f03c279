// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::mem::{self, MaybeUninit};
use core::ops::Deref;
use core::ptr;

use crate::cursor::ArrayCursor;
use crate::error::DynamicArrayError;
use crate::growth::{grown_capacity, max_capacity};

/// Capacity of arrays created with [`DynamicArray::new`] or from an empty source.
pub const DEFAULT_CAPACITY: usize = 1;

/// Test behaviour for injecting limits into `DynamicArray` operations.
///
/// This is only available with the `test_utils` feature. It lets callers
/// exercise the capacity ceiling without allocating `isize::MAX` bytes.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// #[cfg(test)]
/// mod tests {
///     use elastic_array::{DynamicArray, DynamicArrayBehaviour, DynamicArrayError};
///
///     #[test]
///     fn test_handles_capacity_exceeded() {
///         let mut array = DynamicArray::new();
///         array.change_behaviour(DynamicArrayBehaviour::CapacityCeiling(1));
///
///         array.add(1u8).expect("Failed to add(1)");
///         assert!(matches!(
///             array.add(2u8),
///             Err(DynamicArrayError::CapacityExceeded { max: 1 })
///         ));
///     }
/// }
/// ```
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DynamicArrayBehaviour {
    /// Normal behaviour - the ceiling is `max_capacity::<T>()`.
    #[default]
    None,
    /// Replaces the maximum capacity with the given value.
    CapacityCeiling(usize),
}

/// Growable contiguous array with checked indexing.
///
/// `DynamicArray<T>` owns a buffer of `capacity` slots, of which the first
/// `len` hold live elements. Appending to a full array reallocates to twice
/// the capacity (clamped to [`max_capacity`]), moving the live elements into
/// the new buffer. Capacity never shrinks.
///
/// Every operation that can fail returns a [`DynamicArrayError`] instead of
/// panicking, and leaves the array untouched when it does.
///
/// Every mutation bumps a version counter. [`ArrayCursor`]s snapshot that
/// counter and fail with [`DynamicArrayError::CollectionModified`] once the
/// array changes underneath them.
///
/// # Example
///
/// ```rust
/// use elastic_array::{DynamicArray, DynamicArrayError};
///
/// fn example() -> Result<(), DynamicArrayError> {
///     let mut array = DynamicArray::new();
///     array.add(1)?;
///     array.add(2)?;
///     array.add(3)?;
///
///     array.insert_at(1, 9)?;
///     assert_eq!(array.as_slice(), &[1, 9, 2, 3]);
///
///     assert_eq!(array.remove(0)?, 1);
///     assert_eq!(array.as_slice(), &[9, 2, 3]);
///     assert_eq!(array.capacity(), 4);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct DynamicArray<T> {
    buffer: Box<[MaybeUninit<T>]>,
    len: usize,
    version: u64,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: DynamicArrayBehaviour,
}

/// Infallible allocation, for sizes bounded by a live allocation or `DEFAULT_CAPACITY`.
#[inline]
fn allocate<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    Box::<[T]>::new_uninit_slice(capacity)
}

/// Allocates a buffer of a caller-chosen size, reporting allocator refusal.
fn try_allocate<T>(capacity: usize) -> Result<Box<[MaybeUninit<T>]>, DynamicArrayError> {
    let mut slots = Vec::<MaybeUninit<T>>::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| DynamicArrayError::AllocationFailed {
            requested: capacity,
        })?;

    unsafe {
        // SAFETY (PRECONDITIONS ARE MET): capacity slots were reserved above and
        // MaybeUninit<T> needs no initialization.
        slots.set_len(capacity);
    }

    Ok(slots.into_boxed_slice())
}

impl<T> DynamicArray<T> {
    fn from_parts(buffer: Box<[MaybeUninit<T>]>, len: usize) -> Self {
        debug_assert!(len <= buffer.len());

        Self {
            buffer,
            len,
            version: 0,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: DynamicArrayBehaviour::default(),
        }
    }

    /// Creates an empty array with a capacity of one element.
    pub fn new() -> Self {
        Self::from_parts(allocate(DEFAULT_CAPACITY), 0)
    }

    /// Creates an empty array able to hold `capacity` elements without growing.
    ///
    /// # Errors
    ///
    /// - [`DynamicArrayError::InvalidCapacity`] if `capacity` is zero.
    /// - [`DynamicArrayError::CapacityExceeded`] if `capacity` is above
    ///   [`max_capacity`] for `T`.
    /// - [`DynamicArrayError::AllocationFailed`] if the allocator refuses the
    ///   buffer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elastic_array::{DynamicArray, DynamicArrayError};
    ///
    /// let array = DynamicArray::<u32>::with_capacity(16).expect("Failed to with_capacity(16)");
    /// assert_eq!(array.capacity(), 16);
    /// assert!(array.is_empty());
    ///
    /// assert!(matches!(
    ///     DynamicArray::<u32>::with_capacity(0),
    ///     Err(DynamicArrayError::InvalidCapacity)
    /// ));
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, DynamicArrayError> {
        if capacity == 0 {
            return Err(DynamicArrayError::InvalidCapacity);
        }

        let max = max_capacity::<T>();
        if capacity > max {
            return Err(DynamicArrayError::CapacityExceeded { max });
        }

        Ok(Self::from_parts(try_allocate(capacity)?, 0))
    }

    /// Creates an array holding every element of `source`, in order.
    ///
    /// The capacity equals the number of elements, or one for an empty source.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::MissingSource`] if `source` is `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elastic_array::{DynamicArray, DynamicArrayError};
    ///
    /// let array = DynamicArray::from_source(Some([1, 2, 3])).expect("Failed to from_source(..)");
    /// assert_eq!(array.as_slice(), &[1, 2, 3]);
    /// assert_eq!(array.capacity(), 3);
    ///
    /// let empty = DynamicArray::<u8>::from_source(Some([])).expect("Failed to from_source(..)");
    /// assert_eq!(empty.capacity(), 1);
    ///
    /// assert!(matches!(
    ///     DynamicArray::<u8>::from_source(None::<[u8; 0]>),
    ///     Err(DynamicArrayError::MissingSource)
    /// ));
    /// ```
    pub fn from_source<I>(source: Option<I>) -> Result<Self, DynamicArrayError>
    where
        I: IntoIterator<Item = T>,
    {
        let source = source.ok_or(DynamicArrayError::MissingSource)?;
        Ok(source.into_iter().collect())
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the array can hold without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the mutation counter.
    ///
    /// The counter increases on every mutation and never decreases.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): slots [0, len) are initialized.
            core::slice::from_raw_parts(self.buffer.as_ptr().cast::<T>(), self.len)
        }
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): slots [0, len) are initialized.
            core::slice::from_raw_parts_mut(self.buffer.as_mut_ptr().cast::<T>(), self.len)
        }
    }

    /// Returns an iterator over the live elements in index order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a cursor positioned before the first element.
    ///
    /// Unlike [`iter()`](Self::iter), the cursor does not borrow the array,
    /// so the array may be mutated between steps. The next step after such a
    /// mutation fails with [`DynamicArrayError::CollectionModified`].
    ///
    /// Staleness is judged by version alone. A clone carries its source's
    /// version, so a cursor stepped against the wrong one of the two is not
    /// caught until either is mutated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elastic_array::{DynamicArray, DynamicArrayError};
    ///
    /// let mut array = DynamicArray::from(vec![1, 2, 3]);
    /// let mut cursor = array.cursor();
    ///
    /// assert_eq!(cursor.next(&array), Some(Ok(&1)));
    ///
    /// array.add(4).expect("Failed to add(4)");
    /// assert_eq!(cursor.next(&array), Some(Err(DynamicArrayError::CollectionModified)));
    /// ```
    pub fn cursor(&self) -> ArrayCursor {
        ArrayCursor::new(self.version)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::IndexOutOfRange`] unless `index < len`.
    pub fn get(&self, index: usize) -> Result<&T, DynamicArrayError> {
        self.check_index(index)?;
        Ok(&self.as_slice()[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// Counts as a mutation: outstanding cursors become stale.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::IndexOutOfRange`] unless `index < len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, DynamicArrayError> {
        self.check_index(index)?;
        self.bump_version();
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::IndexOutOfRange`] unless `index < len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, DynamicArrayError> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    /// Appends `item`, growing the buffer if it is full.
    ///
    /// # Errors
    ///
    /// - [`DynamicArrayError::CapacityExceeded`] if the array already holds
    ///   [`max_capacity`] elements.
    /// - [`DynamicArrayError::AllocationFailed`] if growing was refused by the
    ///   allocator. The array is unchanged.
    pub fn add(&mut self, item: T) -> Result<(), DynamicArrayError> {
        self.ensure_room()?;
        self.reserve_one()?;

        self.buffer[self.len].write(item);
        self.len += 1;
        self.bump_version();

        Ok(())
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len` is accepted and behaves like [`add`](Self::add).
    ///
    /// # Errors
    ///
    /// - [`DynamicArrayError::IndexOutOfRange`] unless `index <= len`.
    /// - [`DynamicArrayError::CapacityExceeded`] if the array already holds
    ///   [`max_capacity`] elements.
    /// - [`DynamicArrayError::AllocationFailed`] if growing was refused by the
    ///   allocator.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), DynamicArrayError> {
        if index > self.len {
            return Err(DynamicArrayError::IndexOutOfRange {
                index,
                bound: self.len.saturating_add(1),
            });
        }

        self.ensure_room()?;
        self.reserve_one()?;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): reserve_one guarantees capacity > len,
            // so [index, len] is in bounds. ptr::copy handles the overlapping
            // move of the initialized tail [index, len) to [index + 1, len + 1).
            let slot = self.buffer.as_mut_ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
        }

        // The slot now holds a bitwise duplicate of the shifted element;
        // overwriting it without dropping is correct.
        self.buffer[index].write(value);
        self.len += 1;
        self.bump_version();

        Ok(())
    }

    /// Removes and returns the element at `index`, shifting `(index, len)` one slot left.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::IndexOutOfRange`] unless `index < len`.
    pub fn remove(&mut self, index: usize) -> Result<T, DynamicArrayError> {
        self.check_index(index)?;

        let value = unsafe {
            // SAFETY (PRECONDITIONS ARE MET): index < len, so the slot is initialized.
            // Reading moves the value out, then the initialized tail (index, len)
            // is moved over it. Slot len - 1 ends up logically uninitialized.
            let slot = self.buffer.as_mut_ptr().add(index);
            let value = slot.read().assume_init();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            value
        };

        self.len -= 1;
        self.bump_version();

        Ok(value)
    }

    /// Drops every element. The capacity is kept for reuse.
    pub fn clear(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.buffer.as_mut_ptr().cast::<T>(), self.len);

        // Reset first so a panicking destructor cannot lead to a double drop.
        self.len = 0;
        self.bump_version();

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): `live` covers the slots that were
            // initialized, and len = 0 means nothing else will drop them.
            ptr::drop_in_place(live);
        }
    }

    /// Grows the buffer so it can hold at least `target` elements.
    ///
    /// Requesting the current capacity is a no-op.
    ///
    /// # Errors
    ///
    /// - [`DynamicArrayError::CapacityReduction`] if `target < capacity`.
    /// - [`DynamicArrayError::CapacityExceeded`] if `target` is above
    ///   [`max_capacity`].
    /// - [`DynamicArrayError::AllocationFailed`] if the allocator refuses the
    ///   buffer. The array is unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elastic_array::{DynamicArray, DynamicArrayError};
    ///
    /// fn example() -> Result<(), DynamicArrayError> {
    ///     let mut array = DynamicArray::<u8>::with_capacity(4)?;
    ///     array.ensure_capacity(32)?;
    ///     assert_eq!(array.capacity(), 32);
    ///
    ///     assert!(matches!(
    ///         array.ensure_capacity(8),
    ///         Err(DynamicArrayError::CapacityReduction { current: 32, requested: 8 })
    ///     ));
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn ensure_capacity(&mut self, target: usize) -> Result<(), DynamicArrayError> {
        let current = self.capacity();

        if target < current {
            return Err(DynamicArrayError::CapacityReduction {
                current,
                requested: target,
            });
        }

        if target == current {
            return Ok(());
        }

        let max = self.ceiling();
        if target > max {
            return Err(DynamicArrayError::CapacityExceeded { max });
        }

        self.reallocate(target)?;
        self.bump_version();

        Ok(())
    }

    /// Returns `true` if any element equals `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(item)
    }

    /// Returns the index of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == item)
    }

    /// Moves the elements into a `Vec`, releasing the buffer.
    pub fn into_vec(mut self) -> Vec<T> {
        let len = self.len;
        let mut items = Vec::with_capacity(len);

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): [0, len) is initialized, `items` has
            // room for `len` elements and the two allocations do not overlap.
            ptr::copy_nonoverlapping(self.buffer.as_ptr().cast::<T>(), items.as_mut_ptr(), len);
            items.set_len(len);
        }

        // The elements are owned by `items` now; Drop must only free the buffer.
        self.len = 0;

        items
    }

    /// Changes the injected behaviour (test utilities).
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: DynamicArrayBehaviour) {
        self.behaviour = behaviour;
    }

    fn ceiling(&self) -> usize {
        #[cfg(any(test, feature = "test_utils"))]
        if let DynamicArrayBehaviour::CapacityCeiling(ceiling) = self.behaviour {
            return ceiling;
        }

        max_capacity::<T>()
    }

    #[inline(always)]
    fn bump_version(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    #[inline(always)]
    fn check_index(&self, index: usize) -> Result<(), DynamicArrayError> {
        if index >= self.len {
            return Err(DynamicArrayError::IndexOutOfRange {
                index,
                bound: self.len,
            });
        }

        Ok(())
    }

    #[inline(always)]
    fn ensure_room(&self) -> Result<(), DynamicArrayError> {
        let max = self.ceiling();

        if self.len >= max {
            return Err(DynamicArrayError::CapacityExceeded { max });
        }

        Ok(())
    }

    /// Grows by the doubling policy if no slot is free.
    ///
    /// Callers run `ensure_room` first, so `len < ceiling` and the grown
    /// capacity is strictly larger than the current one.
    #[inline(always)]
    fn reserve_one(&mut self) -> Result<(), DynamicArrayError> {
        if self.len < self.capacity() {
            return Ok(());
        }

        let new_capacity = grown_capacity(self.capacity(), self.ceiling());
        debug_assert!(new_capacity > self.len);

        self.reallocate(new_capacity)
    }

    /// Moves the live elements into a fresh buffer of exactly `capacity` slots.
    #[cold]
    #[inline(never)]
    fn reallocate(&mut self, capacity: usize) -> Result<(), DynamicArrayError> {
        debug_assert!(capacity >= self.len);

        let mut buffer = try_allocate::<T>(capacity)?;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): both buffers hold at least `len`
            // slots, [0, len) of the old buffer is initialized and the two
            // allocations do not overlap.
            ptr::copy_nonoverlapping(self.buffer.as_ptr(), buffer.as_mut_ptr(), self.len);
        }

        // Old slots are MaybeUninit, so freeing them does not drop the moved elements.
        self.buffer = buffer;

        Ok(())
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): exactly the slots [0, len) are initialized.
            ptr::drop_in_place(self.as_mut_slice());
        }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut buffer = allocate::<T>(self.capacity());

        for (slot, item) in buffer.iter_mut().zip(self.iter()) {
            slot.write(item.clone());
        }

        Self {
            buffer,
            len: self.len,
            version: self.version,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: self.behaviour,
        }
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("items", &self.as_slice())
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("version", &self.version)
            .finish()
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(mut items: Vec<T>) -> Self {
        let len = items.len();
        let mut buffer = allocate::<T>(len.max(DEFAULT_CAPACITY));

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): `buffer` has at least `len` slots and
            // does not overlap `items`. set_len(0) hands ownership of the moved
            // elements to `buffer`, so `items` only frees its allocation.
            ptr::copy_nonoverlapping(items.as_ptr(), buffer.as_mut_ptr().cast::<T>(), len);
            items.set_len(0);
        }

        Self::from_parts(buffer, len)
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(source: &[T]) -> Self {
        Self::from(source.to_vec())
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
