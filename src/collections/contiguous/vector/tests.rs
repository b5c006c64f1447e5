#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use super::*;
use crate::alloc::{CapacityOverflow, Limited};
use crate::util::alloc::{DropCounter, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_growth_doubles() {
    let mut vec = Vector::new();
    assert_eq!(vec.capacity(), 0, "A new Vector shouldn't allocate.");

    for n in 1..=100_usize {
        vec.push_back(n);
        assert_eq!(
            vec.capacity(),
            n.next_power_of_two(),
            "Capacity should be the smallest power of two holding every element."
        );
    }

    for i in 0..100 {
        assert_eq!(*vec.get(i), i + 1, "Every element should stay retrievable by index.");
        assert_eq!(vec[i], i + 1);
    }
}

#[test]
fn test_growth_reallocates() {
    let mut vec = Vector::new_in(Limited::default());
    for i in 0..16 {
        vec.push_back(i);
    }

    // Blocks of 1, 2, 4, 8 and 16 elements.
    assert_eq!(vec.allocator().total(), 5, "Growing should reallocate at every power of two.");
    assert_eq!(vec.allocator().live(), 1, "Old blocks should be released after moving.");

    vec.push_back(16);
    assert_eq!(vec.allocator().total(), 6);
    assert_eq!(vec.allocator().live(), 1);
}

#[test]
fn test_reserve() {
    let mut vec = Vector::new_in(Limited::default());
    vec.extend([1, 2, 3]);

    vec.reserve(10);
    assert_eq!(vec.capacity(), 10, "Reserving should allocate exactly the requested capacity.");
    assert_eq!(&*vec, &[1, 2, 3], "Reserving should keep every element.");

    let total = vec.allocator().total();
    vec.reserve(10);
    vec.reserve(2);
    assert_eq!(vec.capacity(), 10, "Reserving less than the capacity should be a no-op.");
    assert_eq!(vec.allocator().total(), total);

    for i in 4..=10 {
        vec.push_back(i);
    }
    assert_eq!(vec.allocator().total(), total, "Reserved capacity should be used before growing.");
    vec.push_back(11);
    assert_eq!(vec.capacity(), 20);
}

#[test]
fn test_alloc_failure() {
    let mut vec = Vector::new_in(Limited::new(1));
    vec.push_back(1_u64);

    let error = vec.try_push_back(2).unwrap_err();
    assert!(error.is_out_of_memory());
    assert_eq!(&*vec, &[1], "A failed push should leave the Vector unchanged.");
    assert_eq!(vec.capacity(), 1);

    assert!(vec.try_reserve(usize::MAX).unwrap_err().is_capacity_overflow());
    assert!(vec.try_reserve(4).is_err());
    assert_eq!(vec.capacity(), 1, "A failed reserve should leave the Vector unchanged.");

    assert_panics!({ vec.push_back(3); });
    assert_panics!({ Vector::<u64>::with_capacity(usize::MAX); });
}

#[test]
fn test_pop() {
    let mut vec: Vector<_> = (0..3).collect();
    assert_eq!(vec.pop_back(), 2);
    assert_eq!(vec.try_pop_back(), Ok(1));
    assert_eq!(vec.pop_back(), 0);
    assert_eq!(vec.try_pop_back(), Err(EmptyCollection));
    assert_panics!({ vec.pop_back(); });
    assert_eq!(vec.capacity(), 4, "Popping shouldn't release capacity.");
}

#[test]
fn test_index_access() {
    let mut vec: Vector<_> = ['a', 'b', 'c'].into_iter().collect();

    *vec.get_mut(1) = 'B';
    assert_eq!(vec.try_get(1), Ok(&'B'));
    assert_eq!(vec.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert!(vec.try_get_mut(7).is_err());
    assert_panics!({ vec.get(3); });

    assert_eq!(
        IndexOutOfBounds { index: 3, len: 3 }.to_string(),
        "Index 3 out of bounds for collection with 3 elements!"
    );
    assert_eq!(CapacityOverflow.to_string(), "Capacity overflow!");
}

#[test]
fn test_erase() {
    let counter = DropCounter::new();
    let mut vec: Vector<_> = (0..8).map(|i| counter.token(i)).collect();

    assert_eq!(vec.erase(2..5), 2, "Erasing should return the start of the range.");
    assert_eq!(counter.dropped(), 3, "Erasing should drop the removed elements.");
    assert_eq!(vec.iter().map(|c| c.id).collect::<Vec<_>>(), [0, 1, 5, 6, 7]);

    assert_eq!(vec.erase(3..3), 3, "Erasing an empty range should be a no-op.");
    assert_eq!(vec.len(), 5);

    assert_eq!(vec.erase(3..5), 3);
    assert_eq!(vec.iter().map(|c| c.id).collect::<Vec<_>>(), [0, 1, 5]);
    assert_eq!(counter.dropped(), 5);

    assert_eq!(vec.try_erase(2..4), Err(IndexOutOfBounds { index: 4, len: 3 }));
    #[allow(clippy::reversed_empty_ranges)]
    let reversed = 2..1;
    assert_eq!(
        vec.try_erase(reversed),
        Err(IndexOutOfBounds { index: 2, len: 3 }),
        "A reversed range should report the Vector's length."
    );
    assert_eq!(vec.len(), 3, "A failed erase should leave the Vector unchanged.");

    vec.erase(0..3);
    assert!(vec.is_empty());
    assert_eq!(counter.dropped(), 8);
}

#[test]
fn test_clear() {
    let counter = DropCounter::new();
    let mut vec: Vector<_> = (0..5).map(|i| counter.token(i)).collect();

    vec.clear();
    assert!(vec.is_empty());
    assert_eq!(vec.size(), 0);
    assert_eq!(vec.capacity(), 8, "Clearing should keep the capacity.");
    assert_eq!(counter.dropped(), 5);

    vec.push_back(counter.token(5));
    assert_eq!(vec[0].id, 5);
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let mut vec = Vector::new_in(Limited::default());
    for i in 0..10 {
        vec.push_back(counter.token(i));
    }
    assert_eq!(counter.dropped(), 0, "Growing should move elements, not drop them.");

    let clone = vec.clone();
    drop(vec);
    assert_eq!(counter.dropped(), 10, "Dropping the Vector should drop all elements.");
    assert_eq!(clone.allocator().live(), 1);
    drop(clone);
    assert_eq!(counter.dropped(), 20);
}

#[test]
fn test_into_iter() {
    let vec: Vector<_> = (0..5).collect();

    let mut iter = vec.clone().into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.as_slice(), &[1, 2, 3]);
    assert_eq!(iter.collect::<Vec<_>>(), [1, 2, 3]);

    assert_eq!((&vec).into_iter().sum::<i32>(), 10);

    let counter = DropCounter::new();
    let mut vec = Vector::new_in(Limited::default());
    vec.extend((0..6).map(|i| counter.token(i)));
    let mut iter = vec.into_iter();
    iter.next();
    iter.next_back();
    assert_eq!(counter.dropped(), 2);
    drop(iter);
    assert_eq!(counter.dropped(), 6, "Dropping an owned iterator should drop the rest.");
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new_in(Limited::default());
    for _ in 0..10 {
        vec.push_back(ZeroSizedType);
    }

    assert_eq!(vec.len(), 10);
    assert_eq!(vec.capacity(), 16);
    assert_eq!(vec[9], ZeroSizedType);
    assert_eq!(vec.allocator().total(), 0, "Zero-sized elements shouldn't need storage.");
    assert_eq!(vec.max_size(), usize::MAX);

    vec.erase(0..5);
    assert_eq!(vec.pop_back(), ZeroSizedType);
    assert_eq!(vec.into_iter().count(), 4);
}

#[test]
fn test_equality_and_hash() {
    let vec: Vector<_> = [1, 2, 3].into_iter().collect();
    let mut other = Vector::new_in(Limited::default());
    other.extend(&[1, 2, 3]);

    assert!(vec == other, "Vectors with different allocators should compare by elements.");
    assert!(vec != (1..3).collect::<Vector<_>>());

    let state = RandomState::new();
    assert_eq!(state.hash_one(&vec), state.hash_one(vec.clone()));
}

#[test]
fn test_formatting() {
    let mut vec = Vector::new();
    vec.extend([1, 2, 3]);
    assert_eq!(format!("{vec}"), "![1, 2, 3]");
    assert_eq!(format!("{vec:?}"), "Vector { contents: [1, 2, 3], len: 3, cap: 4 }");
}
