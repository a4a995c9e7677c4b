//! Rotated traversal
//!
//! Starts at logical position `o`, steps +1 and wraps from the last slot back
//! to the first, producing exactly one lap of N elements.
//!
//! The iterator counts the elements still owed instead of comparing positions:
//! the start state and the "lapped back to `o`" state sit on the same slot,
//! and only `remaining` tells them apart.

use std::iter::FusedIterator;

use crate::sequence::Sequence;

/// View that visits a sequence once, starting from an offset
#[derive(Debug, Clone)]
pub struct Offset<S: Sequence> {
    seq: S,
    start: S::Position,
    offset: usize,
    len: usize,
}

impl<S: Sequence> Offset<S> {
    /// Caller has checked `offset < len` (or `offset == 0` when empty)
    pub(crate) fn new(seq: S, offset: usize, len: usize) -> Self {
        let start = seq.seek(offset);
        Self {
            seq,
            start,
            offset,
            len,
        }
    }

    /// Logical position of the first element produced
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of elements one pass produces
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether a pass produces nothing
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Start a pass
    pub fn iter(&self) -> OffsetIter<S> {
        OffsetIter {
            seq: self.seq.clone(),
            pos: self.start.clone(),
            remaining: self.len,
        }
    }

    /// State of an iterator after a complete pass
    pub fn end(&self) -> OffsetIter<S> {
        OffsetIter {
            seq: self.seq.clone(),
            pos: self.start.clone(),
            remaining: 0,
        }
    }
}

impl<'v, S: Sequence> IntoIterator for &'v Offset<S> {
    type Item = S::Item;
    type IntoIter = OffsetIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Sequence> IntoIterator for Offset<S> {
    type Item = S::Item;
    type IntoIter = OffsetIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        OffsetIter {
            seq: self.seq,
            pos: self.start,
            remaining: self.len,
        }
    }
}

/// Iterator produced by [`Offset`]
#[derive(Debug, Clone)]
pub struct OffsetIter<S: Sequence> {
    seq: S,
    pos: S::Position,
    remaining: usize,
}

impl<S: Sequence> OffsetIter<S> {
    /// Current slot in the backing sequence
    pub fn position(&self) -> &S::Position {
        &self.pos
    }
}

impl<S: Sequence> PartialEq for OffsetIter<S> {
    fn eq(&self, other: &Self) -> bool {
        self.seq.same_storage(&other.seq)
            && self.pos == other.pos
            && self.remaining == other.remaining
    }
}

impl<S: Sequence> Iterator for OffsetIter<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let item = self.seq.read(&self.pos);
        self.seq.advance(&mut self.pos);
        if self.seq.is_last(&self.pos) {
            self.pos = self.seq.first();
        }
        self.remaining -= 1;

        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S: Sequence> ExactSizeIterator for OffsetIter<S> {}

impl<S: Sequence> FusedIterator for OffsetIter<S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::ForwardSeq;
    use std::collections::LinkedList;

    #[test]
    fn test_rotates_slice() {
        let data = [0, 1, 2, 3, 4];
        let view = Offset::new(&data[..], 2, data.len());
        let seen: Vec<i32> = view.iter().copied().collect();
        assert_eq!(seen, vec![2, 3, 4, 0, 1]);
    }

    #[test]
    fn test_rotates_forward_sequence() {
        let list: LinkedList<char> = "abcd".chars().collect();
        let view = Offset::new(ForwardSeq::from(&list), 3, list.len());
        let seen: String = view.iter().copied().collect();
        assert_eq!(seen, "dabc");
    }

    #[test]
    fn test_exhausted_iterator_equals_end() {
        let data = [5, 6, 7];
        let view = Offset::new(&data[..], 1, data.len());

        let mut it = view.iter();
        assert_ne!(it, view.end());
        assert_eq!(it.len(), 3);
        it.next();
        it.next();
        assert_ne!(it, view.end());
        it.next();
        assert_eq!(it, view.end());
        assert_eq!(it.next(), None);
        assert_eq!(*it.position(), 1);
    }

    #[test]
    fn test_iterators_over_other_storage_differ() {
        let a = [1, 2, 3];
        let b = [7, 8, 9];
        let va = Offset::new(&a[..], 1, 3);
        let vb = Offset::new(&b[..], 1, 3);
        assert_ne!(va.iter(), vb.iter());

        let mut it = va.iter();
        it.by_ref().for_each(drop);
        assert_eq!(it, va.end());
        assert_ne!(it, vb.end());

        let la: LinkedList<i32> = a.iter().copied().collect();
        let lb = la.clone();
        let fa = Offset::new(ForwardSeq::from(&la), 0, 3);
        let fb = Offset::new(ForwardSeq::from(&lb), 0, 3);
        assert_eq!(fa.iter(), fa.iter());
        assert_ne!(fa.iter(), fb.iter());
    }

    #[test]
    fn test_single_element() {
        let data = [42];
        let view = Offset::new(&data[..], 0, 1);
        let seen: Vec<&i32> = view.iter().collect();
        assert_eq!(seen, vec![&42]);
    }

    #[test]
    fn test_restart_after_full_pass() {
        let data = [1, 2, 3];
        let view = Offset::new(&data[..], 2, 3);
        let first: Vec<i32> = view.iter().copied().collect();
        let second: Vec<i32> = (&view).into_iter().copied().collect();
        assert_eq!(first, second);
    }
}
