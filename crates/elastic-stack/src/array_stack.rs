// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use elastic_array::DynamicArray;

#[cfg(any(test, feature = "test_utils"))]
use elastic_array::DynamicArrayBehaviour;

use crate::cursor::StackCursor;
use crate::error::ArrayStackError;
use crate::traits::Stack;

/// LIFO stack backed by a [`DynamicArray`].
///
/// The bottom of the stack is index 0 of the backing array and the top is
/// its last live index, so pushing appends and popping removes the last
/// element without shifting anything.
///
/// # Example
///
/// ```rust
/// use elastic_stack::{ArrayStack, ArrayStackError};
///
/// fn example() -> Result<(), ArrayStackError> {
///     let mut stack = ArrayStack::new();
///     stack.push(1)?;
///     stack.push(2)?;
///
///     assert!(!stack.is_empty());
///     assert_eq!(stack.peek()?, &2);
///
///     assert_eq!(stack.pop()?, 2);
///     assert_eq!(stack.pop()?, 1);
///     assert!(matches!(stack.pop(), Err(ArrayStackError::Empty)));
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct ArrayStack<T> {
    store: DynamicArray<T>,
    top: Option<usize>,
}

impl<T> ArrayStack<T> {
    fn from_store(store: DynamicArray<T>) -> Self {
        let top = store.len().checked_sub(1);

        Self { store, top }
    }

    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::from_store(DynamicArray::new())
    }

    /// Creates an empty stack able to hold `capacity` elements without growing.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayStackError::Array`] if the backing array rejects
    /// `capacity` (zero, or above the maximum for `T`).
    pub fn with_capacity(capacity: usize) -> Result<Self, ArrayStackError> {
        Ok(Self::from_store(DynamicArray::with_capacity(capacity)?))
    }

    /// Places `item` on top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayStackError::Array`] wrapping `CapacityExceeded` if the
    /// backing array is at its maximum capacity. The stack is unchanged.
    pub fn push(&mut self, item: T) -> Result<(), ArrayStackError> {
        self.store.add(item)?;
        self.top = Some(self.store.len() - 1);

        Ok(())
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayStackError::Empty`] if the stack has no elements.
    pub fn pop(&mut self) -> Result<T, ArrayStackError> {
        let top = self.top.ok_or(ArrayStackError::Empty)?;

        // Last live index: nothing to shift
        let item = self.store.remove(top)?;
        self.top = top.checked_sub(1);

        Ok(item)
    }

    /// Returns the top element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayStackError::Empty`] if the stack has no elements.
    pub fn peek(&self) -> Result<&T, ArrayStackError> {
        let top = self.top.ok_or(ArrayStackError::Empty)?;

        Ok(self.store.get(top)?)
    }

    /// Returns `true` if the stack has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns the capacity of the backing array.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Returns the index of the top element, or `None` when empty.
    #[inline]
    pub fn top_index(&self) -> Option<usize> {
        self.top
    }

    /// Returns the element at `index`, counted from the bottom of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayStackError::IndexOutOfRange`] unless `index <= top`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayStackError> {
        match self.top {
            Some(top) if index <= top => Ok(self.store.get(index)?),
            _ => Err(ArrayStackError::IndexOutOfRange {
                index,
                depth: self.len(),
            }),
        }
    }

    /// Removes every element. The backing capacity is kept.
    pub fn clear(&mut self) {
        self.store.clear();
        self.top = None;
    }

    /// Returns `true` if any element equals `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.store.contains(item)
    }

    /// Iterates from the bottom of the stack up to and including the top.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.store.iter()
    }

    /// Returns a detached cursor over the stack, bottom to top.
    ///
    /// See [`StackCursor`].
    pub fn cursor(&self) -> StackCursor {
        StackCursor::new(self.store.cursor())
    }

    /// Returns the backing array.
    #[inline]
    pub fn as_array(&self) -> &DynamicArray<T> {
        &self.store
    }

    /// Consumes the stack, returning the backing array (bottom at index 0).
    pub fn into_array(self) -> DynamicArray<T> {
        self.store
    }

    /// Changes the injected behaviour of the backing array (test utilities).
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: DynamicArrayBehaviour) {
        self.store.change_behaviour(behaviour);
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    type Error = ArrayStackError;

    fn push(&mut self, item: T) -> Result<(), Self::Error> {
        ArrayStack::push(self, item)
    }

    fn pop(&mut self) -> Result<T, Self::Error> {
        ArrayStack::pop(self)
    }

    fn peek(&self) -> Result<&T, Self::Error> {
        ArrayStack::peek(self)
    }

    fn is_empty(&self) -> bool {
        ArrayStack::is_empty(self)
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayStack<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            top: self.top,
        }
    }
}

impl<T: PartialEq> PartialEq for ArrayStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
    }
}

impl<T: Eq> Eq for ArrayStack<T> {}

impl<T: fmt::Debug> fmt::Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStack")
            .field("items", &self.store.as_slice())
            .field("top", &self.top)
            .field("capacity", &self.store.capacity())
            .finish()
    }
}

impl<T> From<DynamicArray<T>> for ArrayStack<T> {
    /// Index 0 of `array` becomes the bottom of the stack.
    fn from(array: DynamicArray<T>) -> Self {
        Self::from_store(array)
    }
}

impl<T> FromIterator<T> for ArrayStack<T> {
    /// Pushes the items in order, so the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_store(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a ArrayStack<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
