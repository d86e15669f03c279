// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::{DynamicArray, DynamicArrayError};

#[derive(Debug, Clone)]
enum Op {
    Add(u16),
    InsertAt(usize, u16),
    Remove(usize),
    Set(usize, u16),
    Clear,
    EnsureCapacity(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u16>().prop_map(Op::Add),
        2 => (0..40usize, any::<u16>()).prop_map(|(i, v)| Op::InsertAt(i, v)),
        2 => (0..40usize).prop_map(Op::Remove),
        1 => (0..40usize, any::<u16>()).prop_map(|(i, v)| Op::Set(i, v)),
        1 => Just(Op::Clear),
        1 => (0..128usize).prop_map(Op::EnsureCapacity),
    ]
}

proptest! {
    #[test]
    fn adds_are_readable_in_order(values in prop::collection::vec(any::<u32>(), 0..200)) {
        let mut array = DynamicArray::new();

        for value in &values {
            array.add(*value).expect("Failed to add(..)");
        }

        prop_assert_eq!(array.len(), values.len());
        for (index, value) in values.iter().enumerate() {
            prop_assert_eq!(array.get(index), Ok(value));
        }
        prop_assert!(array.get(values.len()).is_err());
    }

    #[test]
    fn insert_at_shifts_tail(
        values in prop::collection::vec(any::<u8>(), 0..50),
        index_seed in any::<usize>(),
        value in any::<u8>()
    ) {
        let index = index_seed % (values.len() + 1);
        let mut array = DynamicArray::from(values.clone());

        array.insert_at(index, value).expect("Failed to insert_at(..)");

        prop_assert_eq!(array.get(index), Ok(&value));
        prop_assert_eq!(&array[..index], &values[..index]);
        prop_assert_eq!(&array[index + 1..], &values[index..]);
    }

    #[test]
    fn remove_returns_value_and_shifts_left(
        values in prop::collection::vec(any::<u8>(), 1..50),
        index_seed in any::<usize>()
    ) {
        let index = index_seed % values.len();
        let mut array = DynamicArray::from(values.clone());

        prop_assert_eq!(array.remove(index), Ok(values[index]));
        prop_assert_eq!(array.len(), values.len() - 1);
        prop_assert_eq!(&array[..index], &values[..index]);
        prop_assert_eq!(&array[index..], &values[index + 1..]);
    }

    #[test]
    fn growth_preserves_elements(
        values in prop::collection::vec(any::<u64>(), 0..64),
        extra in 0..256usize
    ) {
        let mut array = DynamicArray::from(values.clone());
        let target = array.capacity() + extra;

        array.ensure_capacity(target).expect("Failed to ensure_capacity(..)");

        prop_assert_eq!(array.capacity(), target);
        prop_assert_eq!(array.as_slice(), values.as_slice());
    }

    #[test]
    fn behaves_like_vec(ops in prop::collection::vec(op(), 0..300)) {
        let mut array = DynamicArray::new();
        let mut model: Vec<u16> = Vec::new();

        for op in ops {
            let capacity = array.capacity();
            let version = array.version();

            match op {
                Op::Add(value) => {
                    array.add(value).expect("Failed to add(..)");
                    model.push(value);
                }
                Op::InsertAt(index, value) => {
                    let result = array.insert_at(index, value);
                    if index <= model.len() {
                        prop_assert!(result.is_ok());
                        model.insert(index, value);
                    } else {
                        prop_assert_eq!(
                            result,
                            Err(DynamicArrayError::IndexOutOfRange { index, bound: model.len() + 1 })
                        );
                    }
                }
                Op::Remove(index) => {
                    let result = array.remove(index);
                    if index < model.len() {
                        prop_assert_eq!(result, Ok(model.remove(index)));
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                Op::Set(index, value) => {
                    let result = array.set(index, value);
                    if index < model.len() {
                        prop_assert_eq!(result, Ok(core::mem::replace(&mut model[index], value)));
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                Op::Clear => {
                    array.clear();
                    model.clear();
                }
                Op::EnsureCapacity(target) => {
                    let result = array.ensure_capacity(target);
                    if target < capacity {
                        let reduced = matches!(result, Err(DynamicArrayError::CapacityReduction { .. }));
                        prop_assert!(reduced);
                    } else {
                        prop_assert!(result.is_ok());
                        prop_assert_eq!(array.capacity(), target);
                    }
                }
            }

            prop_assert_eq!(array.as_slice(), model.as_slice());
            prop_assert!(array.len() <= array.capacity());
            prop_assert!(array.capacity() >= capacity);
            prop_assert!(array.version() >= version);
        }
    }
}
