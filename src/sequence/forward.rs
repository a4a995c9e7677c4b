//! Forward-only sequences
//!
//! Any cloneable iterator is a multi-pass forward sequence: cloning it
//! restarts the walk from the same place. A position keeps the element it
//! points at alongside the rest of the iterator, so `read` is O(1) and never
//! re-walks the prefix.
//!
//! A plain iterator says nothing about the storage behind it, so a sequence
//! can be anchored to its container with [`ForwardSeq::over`]. Two sequences
//! read the same storage when their anchors match; unanchored sequences are
//! only the same as each other.

use std::collections::linked_list::{self, LinkedList};
use std::fmt;

use super::{Forward, Sequence};

/// Forward sequence over a cloneable iterator
///
/// The iterator must yield `Copy` handles (e.g. `&T`, or small values from a
/// range) so that reading a position does not consume it.
#[derive(Debug, Clone)]
pub struct ForwardSeq<I> {
    iter: I,
    // address of the container the iterator walks, when known
    anchor: Option<usize>,
}

impl<I> ForwardSeq<I>
where
    I: Iterator + Clone,
    I::Item: Copy,
{
    /// Wrap an iterator positioned at the first element
    pub fn new(iter: I) -> Self {
        Self { iter, anchor: None }
    }

    /// Wrap an iterator that walks `storage`, anchoring the sequence to it
    pub fn over<C: ?Sized>(storage: &C, iter: I) -> Self {
        Self {
            iter,
            anchor: Some(storage as *const C as *const () as usize),
        }
    }
}

impl<'a, T> From<&'a LinkedList<T>> for ForwardSeq<linked_list::Iter<'a, T>> {
    fn from(list: &'a LinkedList<T>) -> Self {
        Self {
            iter: list.iter(),
            anchor: Some(list as *const LinkedList<T> as usize),
        }
    }
}

/// Slot within a [`ForwardSeq`]
pub struct ForwardPosition<I: Iterator> {
    index: usize,
    current: Option<I::Item>,
    rest: I,
}

impl<I: Iterator> ForwardPosition<I> {
    /// Number of slots between the first element and this position
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<I> Clone for ForwardPosition<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            current: self.current.clone(),
            rest: self.rest.clone(),
        }
    }
}

// Positions of one sequence that sit at the same slot hold the same element
// and the same tail, so the slot index decides equality.
impl<I: Iterator> PartialEq for ForwardPosition<I> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.current.is_some() == other.current.is_some()
    }
}

impl<I: Iterator> fmt::Debug for ForwardPosition<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardPosition")
            .field("index", &self.index)
            .field("at_last", &self.current.is_none())
            .finish()
    }
}

impl<I> Sequence for ForwardSeq<I>
where
    I: Iterator + Clone,
    I::Item: Copy,
{
    type Item = I::Item;
    type Category = Forward;
    type Position = ForwardPosition<I>;

    fn same_storage(&self, other: &Self) -> bool {
        self.anchor == other.anchor
    }

    fn first(&self) -> Self::Position {
        let mut rest = self.iter.clone();
        let current = rest.next();
        ForwardPosition {
            index: 0,
            current,
            rest,
        }
    }

    #[inline]
    fn is_last(&self, pos: &Self::Position) -> bool {
        pos.current.is_none()
    }

    #[inline]
    fn advance(&self, pos: &mut Self::Position) {
        if pos.current.is_some() {
            pos.current = pos.rest.next();
            pos.index += 1;
        }
    }

    fn read(&self, pos: &Self::Position) -> Self::Item {
        match pos.current {
            Some(item) => item,
            None => panic!(
                "read at the last boundary of a forward sequence (slot {})",
                pos.index
            ),
        }
    }
}
