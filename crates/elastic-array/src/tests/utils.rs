// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;
use std::rc::Rc;

use crate::DynamicArray;

/// Element that counts how many times it has been dropped.
#[derive(Debug, Clone)]
pub(crate) struct DropCounter {
    pub(crate) id: usize,
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    pub(crate) fn new(id: usize, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            id,
            drops: Rc::clone(drops),
        }
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Builds an array by adding `items` one by one to a default array.
pub(crate) fn array_of<T: Clone>(items: &[T]) -> DynamicArray<T> {
    let mut array = DynamicArray::new();

    for item in items {
        array.add(item.clone()).expect("Failed to add(..)");
    }

    array
}
