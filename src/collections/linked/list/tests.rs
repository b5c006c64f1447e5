#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use super::*;
use crate::alloc::{Allocator, Global, Limited};
use crate::util::alloc::DropCounter;
use crate::util::panic::assert_panics;

fn collect<T: Copy, A: Allocator>(list: &LinkedList<T, A>) -> Vec<T> {
    list.iter().copied().collect()
}

fn collect_rev<T: Copy, A: Allocator>(list: &LinkedList<T, A>) -> Vec<T> {
    list.iter().rev().copied().collect()
}

#[test]
fn test_push_pop_scenario() {
    let mut list = LinkedList::new();
    list.push_back(1);
    list.push_back(2);
    list.push_front(0);
    assert_eq!(collect(&list), [0, 1, 2]);
    assert_eq!(list.verify_links(), 3);

    assert_eq!(list.pop_back(), 2);
    assert_eq!(collect(&list), [0, 1]);

    list.begin_mut().erase();
    assert_eq!(collect(&list), [1]);

    assert_eq!(list.pop_front(), 1);
    assert!(list.is_empty(), "Popping the last element should empty the list.");
    assert_eq!(list.verify_links(), 0);
}

#[test]
fn test_push_order() {
    let mut list = LinkedList::new();
    for i in 0..5 {
        list.push_back(i);
    }
    for i in (-5..0).rev() {
        list.push_front(i);
    }

    let expected: Vec<i32> = (-5..5).collect();
    assert_eq!(collect(&list), expected, "Forward iteration should follow push order.");
    assert_eq!(
        collect_rev(&list),
        expected.iter().rev().copied().collect::<Vec<_>>(),
        "Backward iteration should yield the reverse order."
    );
    assert_eq!(list.verify_links(), 10);
    assert_eq!(*list.front(), -5);
    assert_eq!(*list.back(), 4);
}

#[test]
fn test_size_and_empty() {
    let mut list = LinkedList::new();
    assert_eq!(list.size(), 0);
    assert!(list.is_empty());
    assert!(list.begin() == list.end(), "An empty list should begin at the end sentinel.");

    for i in 1..=4 {
        list.push_back(i);
        assert_eq!(list.size(), i);
        assert_eq!(list.len(), i);
        assert!(!list.is_empty());
    }

    while list.try_pop_front().is_ok() {
        assert_eq!(list.size(), list.verify_links());
    }
    assert!(list.is_empty());
}

#[test]
fn test_push_pop_cycles_release_nodes() {
    let mut list = LinkedList::new_in(Limited::default());

    for round in 0..3 {
        for i in 0..round * 4 {
            list.push_back(i);
        }
        assert_eq!(list.allocator().live(), round * 4, "Every element should own one node.");
        for _ in 0..round * 4 {
            list.pop_back();
        }
        assert!(list.is_empty());
        assert_eq!(list.allocator().live(), 0, "Popping should release every node.");
    }

    list.clear();
    assert!(list.is_empty(), "Clearing an empty list should be a no-op.");
    assert_eq!(list.allocator().live(), 0);
}

#[test]
fn test_clear() {
    let mut list = LinkedList::new_in(Limited::default());
    list.extend([3, 1, 4, 1, 5]);

    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.size(), 0);
    assert_eq!(list.allocator().live(), 0, "Clearing should release every node.");
    assert!(list.try_front().is_err());

    list.push_back(9);
    assert_eq!(collect(&list), [9], "A cleared list should behave like a fresh one.");
    assert_eq!(*list.front(), 9);
    assert_eq!(*list.back(), 9);
    assert_eq!(list.verify_links(), 1);
}

#[test]
fn test_front_back_mut() {
    let mut list: LinkedList<_> = [1, 2, 3].into_iter().collect();
    *list.front_mut() *= 10;
    *list.back_mut() *= 100;
    *list.try_back_mut().unwrap() += 1;
    assert_eq!(collect(&list), [10, 2, 301]);
}

#[test]
fn test_empty_preconditions() {
    let mut list = LinkedList::<u8>::new();

    assert_eq!(list.try_front(), Err(EmptyCollection));
    assert_eq!(list.try_back(), Err(EmptyCollection));
    assert_eq!(list.try_front_mut(), Err(EmptyCollection));
    assert_eq!(list.try_pop_back(), Err(EmptyCollection));
    assert_eq!(list.try_pop_front(), Err(EmptyCollection));

    assert_panics!({ list.front(); });
    assert_panics!({ list.back(); });
    assert_panics!({ list.pop_back(); });
    assert_panics!({ list.pop_front(); });

    assert!(list.is_empty(), "Failed operations shouldn't modify the list.");
}

#[test]
fn test_alloc_failure() {
    let mut list = LinkedList::new_in(Limited::new(3));
    list.extend([1, 2, 3]);

    let error = list.try_push_back(4).unwrap_err();
    assert!(error.is_out_of_memory());
    assert!(list.try_push_front(0).is_err());
    assert!(list.begin_mut().try_insert(0).is_err());
    assert_eq!(collect(&list), [1, 2, 3], "Failed insertions should leave the list unchanged.");
    assert_eq!(list.verify_links(), 3);

    assert_panics!({ list.push_back(4); });
    assert_eq!(list.verify_links(), 3);

    list.pop_front();
    list.push_back(4);
    assert_eq!(collect(&list), [2, 3, 4], "Freed nodes should make room for new ones.");
}

#[test]
fn test_emplace() {
    let mut list = LinkedList::new();
    list.emplace_back(|| String::from("b"));
    list.emplace_front(|| String::from("a")).push('!');
    list.emplace_back(String::new).push_str("c");

    assert_eq!(
        list.iter().map(String::as_str).collect::<Vec<_>>(),
        ["a!", "b", "c"]
    );

    let mut full = LinkedList::new_in(Limited::new(0));
    let mut invoked = false;
    assert!(full.try_emplace_back(|| invoked = true).is_err());
    assert!(full.try_emplace_front(|| invoked = true).is_err());
    assert!(!invoked, "The value shouldn't be built if no storage could be obtained.");
}

#[test]
fn test_emplace_panic_releases_node() {
    let mut list = LinkedList::<u8, _>::new_in(Limited::default());
    list.push_back(1);

    assert_panics!({ list.emplace_back(|| panic!("constructor failed")); });
    assert_eq!(list.allocator().live(), 1, "The node block should be returned on unwind.");
    assert_eq!(collect(&list), [1]);
}

#[test]
fn test_nodes_never_move() {
    let mut list = LinkedList::new_in(Limited::default());
    for i in 0..16 {
        list.push_back(i);
    }
    assert_eq!(
        list.allocator().total(),
        16,
        "Growing the list should allocate exactly one node per element."
    );

    let first = list.front() as *const i32;
    for i in 16..64 {
        list.push_back(i);
    }
    assert_eq!(list.front() as *const i32, first, "Existing nodes shouldn't be moved.");
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let mut list = LinkedList::new();
    for i in 0..10 {
        list.push_back(counter.token(i));
    }

    let popped = list.pop_front();
    assert_eq!(counter.dropped(), 0, "Popping should move the value out, not drop it.");
    drop(popped);
    assert_eq!(counter.dropped(), 1);

    list.begin_mut().erase();
    assert_eq!(counter.dropped(), 2, "Erasing should drop the element.");

    drop(list);
    assert_eq!(counter.dropped(), 10, "Dropping the list should drop all elements.");
}

#[test]
fn test_iterators() {
    let mut list: LinkedList<_> = (0..5).collect();

    for value in list.iter_mut() {
        *value *= 2;
    }
    assert_eq!(collect(&list), [0, 2, 4, 6, 8]);

    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next_back(), Some(&8));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&6));
    assert_eq!(iter.next(), Some(&4));
    assert_eq!(iter.next_back(), None, "Both ends should meet in the middle.");
    assert_eq!(iter.next(), None);

    let mut iter = list.clone().into_iter();
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.collect::<Vec<_>>(), [2, 4, 6]);

    let counter = DropCounter::new();
    let list: LinkedList<_> = (0..6).map(|i| counter.token(i)).collect();
    let mut iter = list.into_iter();
    iter.next();
    drop(iter);
    assert_eq!(counter.dropped(), 6, "Dropping an owned iterator should drop the rest.");
}

#[test]
fn test_equality_and_hash() {
    let list: LinkedList<_> = [1, 2, 3].into_iter().collect();
    let mut other = LinkedList::new_in(Limited::default());
    other.extend(&[1, 2, 3]);

    assert!(list == other, "Lists with different allocators should compare by elements.");
    assert!(list != [1, 2].into_iter().collect::<LinkedList<_>>());
    assert!(list.contains(&2));
    assert!(!list.contains(&7));

    let clone = list.clone();
    assert_eq!(clone, list);
    assert_eq!(clone.verify_links(), 3);

    let state = RandomState::new();
    assert_eq!(state.hash_one(&list), state.hash_one(&clone));
    assert_ne!(
        state.hash_one(&list),
        state.hash_one([1, 2, 3, 4].into_iter().collect::<LinkedList<_>>()),
    );
}

#[test]
fn test_clone_allocator() {
    let mut list = LinkedList::new_in(Limited::new(4));
    list.extend([1, 2, 3]);

    let clone = list.clone();
    assert_eq!(clone.allocator().live(), 3, "The clone should allocate its own nodes.");
    assert_eq!(clone.allocator().limit(), 4);
    assert_eq!(list.allocator().live(), 3);
}

#[test]
fn test_formatting() {
    let list: LinkedList<_> = ["a", "b"].into_iter().collect();
    assert_eq!(format!("{list}"), r#"("a") -> ("b")"#);
    assert_eq!(format!("{list:?}"), r#"LinkedList ["a", "b"]"#);
    assert_eq!(format!("{}", LinkedList::<u8>::new()), "()");
}

#[test]
fn test_max_size() {
    let list = LinkedList::<u64>::new();
    assert!(list.max_size() > 0);
    assert!(list.max_size() <= isize::MAX as usize);
    assert_eq!(list.max_size(), Global.max_size::<Node<u64>>());
}

#[test]
fn test_swap() {
    let mut a: LinkedList<_> = [1, 2].into_iter().collect();
    let mut b: LinkedList<_> = [3].into_iter().collect();
    a.swap(&mut b);
    assert_eq!(collect(&a), [3]);
    assert_eq!(collect(&b), [1, 2]);
    assert_eq!(a.verify_links(), 1);
    assert_eq!(b.verify_links(), 2);
}
