//! Fully shuffled traversal
//!
//! The view owns one permutation of `0..N`, drawn with Fisher-Yates when the
//! view is built. Iterators borrow it, so they cannot outlive the view.

use std::iter::FusedIterator;
use std::ptr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::sequence::RandomAccessSequence;

/// View that visits a random-access sequence in a uniformly random order
#[derive(Debug, Clone)]
pub struct Shuffled<S: RandomAccessSequence> {
    seq: S,
    permutation: Box<[usize]>,
}

impl<S: RandomAccessSequence> Shuffled<S> {
    pub(crate) fn new<R: Rng + ?Sized>(seq: S, rng: &mut R) -> Self {
        let mut indices: Vec<usize> = (0..seq.len()).collect();
        indices.shuffle(rng);
        Self {
            seq,
            permutation: indices.into_boxed_slice(),
        }
    }

    /// Visiting order as indices into the backing sequence
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Number of elements one pass produces
    pub fn len(&self) -> usize {
        self.permutation.len()
    }

    /// Whether a pass produces nothing
    pub fn is_empty(&self) -> bool {
        self.permutation.is_empty()
    }

    /// Start a pass
    pub fn iter(&self) -> ShuffledIter<'_, S> {
        ShuffledIter {
            seq: self.seq.clone(),
            indices: &self.permutation,
            slot: 0,
        }
    }

    /// State of an iterator after a complete pass
    pub fn end(&self) -> ShuffledIter<'_, S> {
        ShuffledIter {
            seq: self.seq.clone(),
            indices: &self.permutation,
            slot: self.permutation.len(),
        }
    }
}

impl<'v, S: RandomAccessSequence> IntoIterator for &'v Shuffled<S> {
    type Item = S::Item;
    type IntoIter = ShuffledIter<'v, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator produced by [`Shuffled`]
#[derive(Debug, Clone)]
pub struct ShuffledIter<'v, S: RandomAccessSequence> {
    seq: S,
    indices: &'v [usize],
    slot: usize,
}

impl<S: RandomAccessSequence> ShuffledIter<'_, S> {
    /// Index of the element the next call to `next` yields, if any
    pub fn position(&self) -> Option<usize> {
        self.indices.get(self.slot).copied()
    }
}

// Iterators from different views never compare equal, even when their
// permutations happen to match.
impl<S: RandomAccessSequence> PartialEq for ShuffledIter<'_, S> {
    fn eq(&self, other: &Self) -> bool {
        self.seq.same_storage(&other.seq)
            && ptr::eq(self.indices, other.indices)
            && self.slot == other.slot
    }
}

impl<S: RandomAccessSequence> Iterator for ShuffledIter<'_, S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let index = *self.indices.get(self.slot)?;
        self.slot += 1;
        Some(self.seq.at(index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.indices.len() - self.slot;
        (remaining, Some(remaining))
    }
}

impl<S: RandomAccessSequence> ExactSizeIterator for ShuffledIter<'_, S> {}

impl<S: RandomAccessSequence> FusedIterator for ShuffledIter<'_, S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_permutation_is_bijection() {
        let data: Vec<u16> = (0..256).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let view = Shuffled::new(&data[..], &mut rng);

        let seen: HashSet<u16> = view.iter().copied().collect();
        assert_eq!(view.len(), 256);
        assert_eq!(seen.len(), 256);
        assert!(seen.iter().all(|&x| x < 256));
    }

    #[test]
    fn test_iterator_follows_permutation() {
        let data = ['a', 'b', 'c', 'd', 'e'];
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let view = Shuffled::new(&data[..], &mut rng);

        let expected: Vec<char> = view.permutation().iter().map(|&i| data[i]).collect();
        let seen: Vec<char> = view.iter().copied().collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_end_and_identity() {
        let data = [1, 2, 3];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let view = Shuffled::new(&data[..], &mut rng);
        let twin = view.clone();

        let mut it = view.iter();
        assert_eq!(it, view.iter());
        assert_ne!(it, twin.iter());
        it.by_ref().for_each(drop);
        assert_eq!(it, view.end());
        assert_eq!(it.position(), None);
    }

    #[test]
    fn test_empty_sequence() {
        let data: [u8; 0] = [];
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let view = Shuffled::new(&data[..], &mut rng);
        assert!(view.is_empty());
        assert_eq!(view.iter(), view.end());
        assert_eq!(view.iter().next(), None);
    }
}
