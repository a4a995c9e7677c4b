//! Backing sequences and their access capabilities
//!
//! A [`Sequence`] is a cheap, non-owning handle onto storage that somebody
//! else owns. Traversals only ever read through it:
//! - positions move forward one slot at a time (`advance`)
//! - `is_last` recognises the one-past-last boundary
//! - `read` hands back an element handle tied to the storage, not the view
//!
//! Random-access sequences additionally expose direct indexing, which the
//! stride and shuffle traversals require at compile time.

mod forward;
mod slice;

pub use forward::{ForwardPosition, ForwardSeq};

use std::fmt;

/// Runtime view of an access capability, used for logging and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    /// Positions can only move forward one slot at a time
    Forward,

    /// Any position can be reached in O(1)
    RandomAccess,
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessKind::Forward => f.write_str("forward"),
            AccessKind::RandomAccess => f.write_str("random-access"),
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Compile-time capability tag attached to every [`Sequence`]
pub trait AccessCategory: sealed::Sealed + fmt::Debug {
    /// Runtime mirror of the tag
    const KIND: AccessKind;
}

/// Tag for forward-only sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forward;

/// Tag for sequences with O(1) indexing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomAccess;

impl sealed::Sealed for Forward {}
impl sealed::Sealed for RandomAccess {}

impl AccessCategory for Forward {
    const KIND: AccessKind = AccessKind::Forward;
}

impl AccessCategory for RandomAccess {
    const KIND: AccessKind = AccessKind::RandomAccess;
}

/// Non-owning, multi-pass handle onto a backing sequence
///
/// Handles are read-only: elements come back as shared handles, and several
/// iterators may read the same slot at once. A mutable slice is not a
/// sequence.
///
/// ```compile_fail
/// let mut data = [1, 2, 3];
/// let view = traversals::offset(&mut data[..], 1);
/// ```
pub trait Sequence: Clone {
    /// Element handle produced by `read`, normally `&'a T`
    type Item: Copy;

    /// Capability tag
    type Category: AccessCategory;

    /// A slot in the sequence, from `first()` up to the one-past-last boundary
    type Position: Clone + PartialEq + fmt::Debug;

    /// Whether `self` and `other` read the same storage
    fn same_storage(&self, other: &Self) -> bool;

    /// Position of the first element (equals the last boundary when empty)
    fn first(&self) -> Self::Position;

    /// Whether `pos` is the one-past-last boundary
    fn is_last(&self, pos: &Self::Position) -> bool;

    /// Move `pos` forward by one slot
    fn advance(&self, pos: &mut Self::Position);

    /// Read the element at `pos`
    ///
    /// # Panics
    /// When `pos` is the one-past-last boundary.
    fn read(&self, pos: &Self::Position) -> Self::Item;

    /// Position `n` slots after `first()`, stopping at the last boundary
    fn seek(&self, n: usize) -> Self::Position {
        let mut pos = self.first();
        for _ in 0..n {
            if self.is_last(&pos) {
                break;
            }
            self.advance(&mut pos);
        }
        pos
    }

    /// Number of elements between `first()` and the last boundary
    fn count(&self) -> usize {
        let mut pos = self.first();
        let mut n = 0;
        while !self.is_last(&pos) {
            self.advance(&mut pos);
            n += 1;
        }
        n
    }

    /// Runtime capability of this sequence
    fn access_kind(&self) -> AccessKind {
        <Self::Category as AccessCategory>::KIND
    }
}

/// Sequence whose elements can be addressed directly by index
pub trait RandomAccessSequence: Sequence<Category = RandomAccess> {
    /// Number of elements
    fn len(&self) -> usize;

    /// Whether the sequence holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`
    ///
    /// # Panics
    /// When `index >= len()`.
    fn at(&self, index: usize) -> Self::Item;
}
