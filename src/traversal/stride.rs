//! Fixed-stride ("pseudo-random") traversal
//!
//! Positions follow `pos(k + 1) = (pos(k) + stride) mod N` from `pos(0) = offset`.
//! The walk stops when it would return to the start, which happens after
//! `N / gcd(stride, N)` elements. Only a stride coprime with N reaches every
//! element; any other stride silently covers a single cycle.

use std::iter::FusedIterator;

use crate::sequence::RandomAccessSequence;
use crate::util;

/// View that walks a random-access sequence with a fixed stride
#[derive(Debug, Clone)]
pub struct PseudoRandom<S: RandomAccessSequence> {
    seq: S,
    len: usize,
    offset: usize,
    stride: usize,
    // stride mod len: same positions, no overflow on huge strides
    step: usize,
    cycle: usize,
}

impl<S: RandomAccessSequence> PseudoRandom<S> {
    /// Caller has checked `offset < len` (or `offset == 0` when empty)
    pub(crate) fn new(seq: S, offset: usize, stride: usize) -> Self {
        let len = seq.len();
        let step = if len == 0 { 0 } else { stride % len };
        Self {
            seq,
            len,
            offset,
            stride,
            step,
            cycle: util::cycle_length(len, stride),
        }
    }

    /// Logical position of the first element produced
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Stride as supplied by the caller
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Number of elements one pass produces: `N / gcd(stride, N)`
    pub fn len(&self) -> usize {
        self.cycle
    }

    /// Whether a pass produces nothing
    pub fn is_empty(&self) -> bool {
        self.cycle == 0
    }

    /// Whether a pass visits every element of the backing sequence
    pub fn is_full_coverage(&self) -> bool {
        self.cycle == self.len
    }

    /// Start a pass
    pub fn iter(&self) -> PseudoRandomIter<S> {
        PseudoRandomIter {
            seq: self.seq.clone(),
            len: self.len,
            cursor: self.offset,
            step: self.step,
            remaining: self.cycle,
        }
    }

    /// State of an iterator after a complete pass
    pub fn end(&self) -> PseudoRandomIter<S> {
        PseudoRandomIter {
            remaining: 0,
            ..self.iter()
        }
    }
}

impl<'v, S: RandomAccessSequence> IntoIterator for &'v PseudoRandom<S> {
    type Item = S::Item;
    type IntoIter = PseudoRandomIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator produced by [`PseudoRandom`]
#[derive(Debug, Clone)]
pub struct PseudoRandomIter<S: RandomAccessSequence> {
    seq: S,
    len: usize,
    cursor: usize,
    step: usize,
    remaining: usize,
}

impl<S: RandomAccessSequence> PseudoRandomIter<S> {
    /// Index of the element the next call to `next` yields
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl<S: RandomAccessSequence> PartialEq for PseudoRandomIter<S> {
    fn eq(&self, other: &Self) -> bool {
        self.seq.same_storage(&other.seq)
            && self.cursor == other.cursor
            && self.len == other.len
            && self.step == other.step
            && self.remaining == other.remaining
    }
}

impl<S: RandomAccessSequence> Iterator for PseudoRandomIter<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let item = self.seq.at(self.cursor);
        // (cursor + step) mod len without forming the sum
        let gap = self.len - self.step;
        self.cursor = if self.cursor >= gap {
            self.cursor - gap
        } else {
            self.cursor + self.step
        };
        self.remaining -= 1;

        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S: RandomAccessSequence> ExactSizeIterator for PseudoRandomIter<S> {}

impl<S: RandomAccessSequence> FusedIterator for PseudoRandomIter<S> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coprime_stride_visits_everything() {
        let data = [0, 1, 2, 3, 4];
        let view = PseudoRandom::new(&data[..], 2, 3);
        let seen: Vec<i32> = view.iter().copied().collect();
        assert_eq!(seen, vec![2, 0, 3, 1, 4]);
        assert!(view.is_full_coverage());
    }

    #[test]
    fn test_shared_factor_covers_one_cycle() {
        let data = [0, 1, 2, 3];
        let view = PseudoRandom::new(&data[..], 0, 2);
        let seen: Vec<i32> = view.iter().copied().collect();
        assert_eq!(seen, vec![0, 2]);
        assert_eq!(view.len(), 2);
        assert!(!view.is_full_coverage());
    }

    #[test]
    fn test_huge_stride_matches_reduced_stride() {
        let data: Vec<u32> = (0..97).collect();
        let huge = PseudoRandom::new(&data[..], 5, usize::MAX);
        let reduced = PseudoRandom::new(&data[..], 5, usize::MAX % 97);
        assert!(huge.iter().eq(reduced.iter()));
        assert_eq!(huge.stride(), usize::MAX);
    }

    #[test]
    fn test_exhausted_iterator_returns_to_start() {
        let data = [0u8; 7];
        let view = PseudoRandom::new(&data[..], 3, 4);
        let mut it = view.iter();
        for _ in 0..7 {
            assert_ne!(it, view.end());
            it.next();
        }
        assert_eq!(it, view.end());
        assert_eq!(it.position(), 3);
    }

    #[test]
    fn test_iterators_over_other_storage_differ() {
        let a = [1, 2, 3];
        let b = [7, 8, 9];
        let va = PseudoRandom::new(&a[..], 0, 1);
        let vb = PseudoRandom::new(&b[..], 0, 1);
        assert_eq!(va.iter(), va.iter());
        assert_ne!(va.iter(), vb.iter());

        let mut it = va.iter();
        it.by_ref().for_each(drop);
        assert_eq!(it, va.end());
        assert_ne!(it, vb.end());
    }

    #[test]
    fn test_zero_stride_yields_start_only() {
        let data = [9, 8, 7];
        let view = PseudoRandom::new(&data[..], 1, 0);
        let seen: Vec<&i32> = view.iter().collect();
        assert_eq!(seen, vec![&8]);
    }
}
