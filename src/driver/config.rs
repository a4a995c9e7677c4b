//! Benchmark driver configuration

use std::fmt;

use crate::traversal;
use crate::TraversalError;

/// Which traversal to time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalKind {
    /// Rotated traversal
    Offset,

    /// Fixed-stride traversal
    PseudoRandom,

    /// Fully shuffled traversal
    Shuffled,
}

impl TraversalKind {
    /// Every kind, in report order
    pub const ALL: [TraversalKind; 3] = [
        TraversalKind::Offset,
        TraversalKind::PseudoRandom,
        TraversalKind::Shuffled,
    ];

    /// Heading printed above the measurement
    pub fn label(&self) -> &'static str {
        match self {
            TraversalKind::Offset => "Offset",
            TraversalKind::PseudoRandom => "Pseudo random",
            TraversalKind::Shuffled => "Random",
        }
    }
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parameters of one benchmark run
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Length of the backing sequence `0..len`
    pub len: usize,

    /// Start offset for the offset and stride traversals
    pub offset: usize,

    /// Stride for the pseudo-random traversal
    pub stride: usize,

    /// Seed for the shuffle; drawn at random when absent
    pub seed: Option<u64>,

    /// Reject strides that would not cover the whole sequence
    pub strict: bool,

    /// Traversals to time, in order
    pub kinds: Vec<TraversalKind>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            len: 1_000_000,
            offset: 2,
            stride: 2_147_483_647,
            seed: None,
            strict: false,
            kinds: TraversalKind::ALL.to_vec(),
        }
    }
}

impl DriverConfig {
    /// Default parameters over a sequence of `len` elements
    pub fn with_len(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    /// Check the offset against the sequence length
    pub fn validate(&self) -> Result<(), TraversalError> {
        traversal::check_offset(self.offset, self.len)
    }
}
