//! Random-access sequences: slices and ring buffers

use std::collections::VecDeque;
use std::ptr;

use super::{RandomAccess, RandomAccessSequence, Sequence};

impl<'a, T> Sequence for &'a [T] {
    type Item = &'a T;
    type Category = RandomAccess;
    type Position = usize;

    #[inline]
    fn same_storage(&self, other: &Self) -> bool {
        ptr::eq(*self, *other)
    }

    #[inline]
    fn first(&self) -> usize {
        0
    }

    #[inline]
    fn is_last(&self, pos: &usize) -> bool {
        *pos == <[T]>::len(self)
    }

    #[inline]
    fn advance(&self, pos: &mut usize) {
        *pos += 1;
    }

    #[inline]
    fn read(&self, pos: &usize) -> &'a T {
        self.at(*pos)
    }

    #[inline]
    fn seek(&self, n: usize) -> usize {
        n.min(<[T]>::len(self))
    }

    #[inline]
    fn count(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<'a, T> RandomAccessSequence for &'a [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &'a T {
        let items: &'a [T] = *self;
        &items[index]
    }
}

impl<'a, T> Sequence for &'a VecDeque<T> {
    type Item = &'a T;
    type Category = RandomAccess;
    type Position = usize;

    #[inline]
    fn same_storage(&self, other: &Self) -> bool {
        ptr::eq(*self, *other)
    }

    #[inline]
    fn first(&self) -> usize {
        0
    }

    #[inline]
    fn is_last(&self, pos: &usize) -> bool {
        *pos == VecDeque::len(self)
    }

    #[inline]
    fn advance(&self, pos: &mut usize) {
        *pos += 1;
    }

    #[inline]
    fn read(&self, pos: &usize) -> &'a T {
        self.at(*pos)
    }

    #[inline]
    fn seek(&self, n: usize) -> usize {
        n.min(VecDeque::len(self))
    }

    #[inline]
    fn count(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<'a, T> RandomAccessSequence for &'a VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &'a T {
        let items: &'a VecDeque<T> = *self;
        &items[index]
    }
}
