//! # Traversal views over borrowed sequences
//!
//! Iterate an existing sequence in a different order without copying or
//! reordering its storage.
//!
//! ## Traversals
//!
//! 1. **Offset**: one lap starting at position `o`, wrapping past the end
//! 2. **Pseudo-random**: fixed stride `p` modulo the length, starting at `o`
//! 3. **Shuffled**: a uniformly random permutation drawn once per view
//!
//! Each factory returns a view; each view hands out cheap, independently
//! advanceable iterators that yield references into the backing sequence.
//!
//! ## Usage Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use traversals::{offset, pseudo_shuffled, shuffled};
//!
//! let data = [0, 1, 2, 3, 4];
//!
//! let rotated: Vec<i32> = offset(&data[..], 2).iter().copied().collect();
//! assert_eq!(rotated, [2, 3, 4, 0, 1]);
//!
//! let strided: Vec<i32> = pseudo_shuffled(&data[..], 2, 3).iter().copied().collect();
//! assert_eq!(strided, [2, 0, 3, 1, 4]);
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let view = shuffled(&data[..], &mut rng);
//! let mut seen: Vec<i32> = view.iter().copied().collect();
//! seen.sort();
//! assert_eq!(seen, data);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod driver;     // Benchmark driver
pub mod sequence;   // Backing sequences and access capabilities
pub mod traversal;  // Offset, stride and shuffle views
pub mod util;       // Modular arithmetic helpers

// Re-exports for convenience
pub use sequence::{AccessKind, ForwardSeq, RandomAccessSequence, Sequence};
pub use traversal::{
    offset, pseudo_shuffled, shuffled, try_offset, try_pseudo_shuffled, Offset, OffsetIter,
    PseudoRandom, PseudoRandomIter, Shuffled, ShuffledIter,
};

use thiserror::Error;

/// Precondition violations reported by the checked constructors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraversalError {
    /// Offset does not name an element of the sequence
    #[error("Offset {offset} out of range for sequence of length {len}")]
    InvalidOffset {
        /// Requested start position
        offset: usize,
        /// Sequence length
        len: usize,
    },

    /// Stride shares a factor with the length, so the walk cycles early
    #[error(
        "Stride {stride} shares factor {gcd} with length {len}: only {visited} of {len} elements would be visited"
    )]
    NonCoprimeStride {
        /// Requested stride
        stride: usize,
        /// Sequence length
        len: usize,
        /// gcd(stride, len)
        gcd: usize,
        /// Elements a pass would produce
        visited: usize,
    },

    /// An empty sequence only admits offset 0
    #[error("Offset {offset} given for an empty sequence")]
    EmptySequenceWithNonZeroOffset {
        /// Requested start position
        offset: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TraversalError::InvalidOffset { offset: 7, len: 5 };
        assert_eq!(err.to_string(), "Offset 7 out of range for sequence of length 5");

        let err = TraversalError::NonCoprimeStride {
            stride: 2,
            len: 4,
            gcd: 2,
            visited: 2,
        };
        assert!(err.to_string().contains("only 2 of 4"));
    }
}
