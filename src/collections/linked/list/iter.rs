use std::iter::FusedIterator;
use std::marker::PhantomData;

use ListState::*;

use super::{LinkedList, ListContents, ListState};
use crate::alloc::Allocator;
use crate::util::option::OptionExtension;

impl<T, A: Allocator> IntoIterator for LinkedList<T, A> {
    type Item = T;

    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

pub struct IntoIter<T, A: Allocator> {
    // Popping from the list already releases each node as it is yielded, and dropping the list
    // cleans up whatever remains.
    pub(crate) list: LinkedList<T, A>,
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.try_pop_front().ok()
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.try_pop_back().ok()
    }
}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}

impl<'a, T, A: Allocator> IntoIterator for &'a mut LinkedList<T, A> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            remaining: self.state,
            _phantom: PhantomData,
        }
    }
}

/// Iterates over the mutable elements of a list, from both ends.
pub struct IterMut<'a, T> {
    // The nodes between front and back (inclusive) which haven't been yielded yet. The nodes
    // themselves are never modified.
    pub(crate) remaining: ListState<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.remaining {
            Empty => None,
            Full(ListContents { front, back }) => {
                let value = front.value_mut();

                if front == back {
                    self.remaining = Empty;
                } else {
                    // SAFETY: The front and back of the remaining range differ, so the front node
                    // is followed by at least one more.
                    *front = unsafe { front.next().unreachable() };
                }

                Some(value)
            },
        }
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.remaining {
            Empty => None,
            Full(ListContents { front, back }) => {
                let value = back.value_mut();

                if front == back {
                    self.remaining = Empty;
                } else {
                    // SAFETY: The front and back of the remaining range differ, so the back node
                    // is preceded by at least one more.
                    *back = unsafe { back.prev().unreachable() };
                }

                Some(value)
            },
        }
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T, A: Allocator> IntoIterator for &'a LinkedList<T, A> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            remaining: self.state,
            _phantom: PhantomData,
        }
    }
}

/// Iterates over the elements of a list, from both ends.
pub struct Iter<'a, T> {
    pub(crate) remaining: ListState<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.remaining {
            Empty => None,
            Full(ListContents { front, back }) => {
                let value = front.value();

                if front == back {
                    self.remaining = Empty;
                } else {
                    // SAFETY: The front and back of the remaining range differ, so the front node
                    // is followed by at least one more.
                    *front = unsafe { front.next().unreachable() };
                }

                Some(value)
            },
        }
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.remaining {
            Empty => None,
            Full(ListContents { front, back }) => {
                let value = back.value();

                if front == back {
                    self.remaining = Empty;
                } else {
                    // SAFETY: The front and back of the remaining range differ, so the back node
                    // is preceded by at least one more.
                    *back = unsafe { back.prev().unreachable() };
                }

                Some(value)
            },
        }
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            remaining: self.remaining,
            _phantom: PhantomData,
        }
    }
}
