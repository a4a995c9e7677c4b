//! Benchmark driver
//!
//! Builds the sequence `0..len`, requests each configured traversal, drains
//! it once with a running sum and records the wall-clock time. The sum
//! doubles as a coverage check: a full pass over `0..len` always adds up to
//! `len * (len - 1) / 2`.

mod config;

pub use config::{DriverConfig, TraversalKind};

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, instrument};

use crate::traversal;
use crate::TraversalError;

/// Result of draining one traversal
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Traversal that was timed
    pub kind: TraversalKind,

    /// Wrapping sum of every element produced
    pub sum: i64,

    /// Number of elements produced
    pub visited: usize,

    /// Time spent draining the view
    pub elapsed: Duration,
}

impl Measurement {
    /// Whether the pass produced every element of `0..len` exactly as often
    /// as a full traversal would
    pub fn is_complete(&self, len: usize) -> bool {
        self.visited == len && self.sum == expected_sum(len)
    }
}

/// Sum of `0..len`, wrapping like the drain loop does
pub fn expected_sum(len: usize) -> i64 {
    (0..len as i64).fold(0i64, |acc, x| acc.wrapping_add(x))
}

fn drain<'a>(iter: impl Iterator<Item = &'a i64>) -> (i64, usize) {
    iter.fold((0i64, 0usize), |(sum, n), &x| (sum.wrapping_add(x), n + 1))
}

/// Time every traversal named in `config`
#[instrument(skip(config), fields(len = config.len))]
pub fn run(config: &DriverConfig) -> Result<Vec<Measurement>, TraversalError> {
    config.validate()?;

    let data: Vec<i64> = (0..config.len as i64).collect();
    let seq = data.as_slice();

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, "shuffle seed");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut measurements = Vec::with_capacity(config.kinds.len());
    for &kind in &config.kinds {
        let start = Instant::now();
        let (sum, visited) = match kind {
            TraversalKind::Offset => drain(traversal::try_offset(seq, config.offset)?.iter()),
            TraversalKind::PseudoRandom => {
                let view = if config.strict {
                    traversal::try_pseudo_shuffled(seq, config.offset, config.stride)?
                } else {
                    traversal::pseudo_shuffled(seq, config.offset, config.stride)
                };
                drain(view.iter())
            }
            TraversalKind::Shuffled => drain(traversal::shuffled(seq, &mut rng).iter()),
        };
        let elapsed = start.elapsed();

        info!(%kind, sum, visited, ?elapsed, "traversal drained");
        measurements.push(Measurement {
            kind,
            sum,
            visited,
            elapsed,
        });
    }

    Ok(measurements)
}
