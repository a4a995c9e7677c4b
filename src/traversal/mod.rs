//! Traversal views and their construction helpers
//!
//! Three orders over a borrowed sequence, none of which copies or reorders
//! the storage:
//! - [`offset`]: one lap starting at an offset, wrapping at the end
//! - [`pseudo_shuffled`]: fixed-stride walk modulo the length
//! - [`shuffled`]: a uniformly random permutation drawn up front
//!
//! The unchecked helpers follow the classic contract. An out-of-range offset
//! panics, and a stride that shares a factor with the length is honoured
//! as given: the walk covers a single cycle, which is logged but not
//! corrected. The `try_` helpers reject both cases with a [`TraversalError`].

mod rotation;
mod shuffle;
mod stride;

pub use rotation::{Offset, OffsetIter};
pub use shuffle::{Shuffled, ShuffledIter};
pub use stride::{PseudoRandom, PseudoRandomIter};

use rand::Rng;
use tracing::{debug, warn};

use crate::sequence::{RandomAccessSequence, Sequence};
use crate::util;
use crate::TraversalError;

pub(crate) fn check_offset(offset: usize, len: usize) -> Result<(), TraversalError> {
    if len == 0 {
        if offset != 0 {
            return Err(TraversalError::EmptySequenceWithNonZeroOffset { offset });
        }
    } else if offset >= len {
        return Err(TraversalError::InvalidOffset { offset, len });
    }
    Ok(())
}

fn check_stride(stride: usize, len: usize) -> Result<(), TraversalError> {
    if util::is_coprime(stride, len) {
        return Ok(());
    }
    let gcd = util::gcd(stride % len, len);
    Err(TraversalError::NonCoprimeStride {
        stride,
        len,
        gcd,
        visited: len / gcd,
    })
}

/// Rotated view: every element once, starting at `offset`
///
/// Works on forward and random-access sequences alike. Finding the start
/// costs O(1) on random-access sequences and O(offset) on forward ones, and
/// a forward sequence is walked once up front to learn its length.
///
/// # Panics
/// When `offset` is not a valid position (see [`try_offset`]).
pub fn offset<S: Sequence>(seq: S, offset: usize) -> Offset<S> {
    match try_offset(seq, offset) {
        Ok(view) => view,
        Err(err) => panic!("{err}"),
    }
}

/// Checked form of [`offset`]
pub fn try_offset<S: Sequence>(seq: S, offset: usize) -> Result<Offset<S>, TraversalError> {
    let len = seq.count();
    check_offset(offset, len)?;

    debug!(
        len,
        offset,
        access = %seq.access_kind(),
        "building offset traversal"
    );
    Ok(Offset::new(seq, offset, len))
}

/// Fixed-stride view: `pos(k + 1) = (pos(k) + stride) mod N`, from `offset`
///
/// Visits every element exactly once only when `gcd(stride, N) == 1`.
/// Otherwise the pass ends after `N / gcd(stride, N)` elements, when the
/// walk returns to `offset`; this is reported through `tracing` and left
/// as is.
///
/// # Panics
/// When `offset` is not a valid position.
pub fn pseudo_shuffled<S: RandomAccessSequence>(
    seq: S,
    offset: usize,
    stride: usize,
) -> PseudoRandom<S> {
    let len = seq.len();
    if let Err(err) = check_offset(offset, len) {
        panic!("{err}");
    }
    if let Err(err) = check_stride(stride, len) {
        warn!(%err, "stride traversal will not cover the whole sequence");
    }

    debug!(len, offset, stride, "building pseudo-random traversal");
    PseudoRandom::new(seq, offset, stride)
}

/// Checked form of [`pseudo_shuffled`]; also rejects non-coprime strides
pub fn try_pseudo_shuffled<S: RandomAccessSequence>(
    seq: S,
    offset: usize,
    stride: usize,
) -> Result<PseudoRandom<S>, TraversalError> {
    let len = seq.len();
    check_offset(offset, len)?;
    check_stride(stride, len)?;

    debug!(len, offset, stride, "building pseudo-random traversal");
    Ok(PseudoRandom::new(seq, offset, stride))
}

/// Shuffled view: a uniformly random permutation drawn from `rng`
pub fn shuffled<S, R>(seq: S, rng: &mut R) -> Shuffled<S>
where
    S: RandomAccessSequence,
    R: Rng + ?Sized,
{
    debug!(len = seq.len(), "building shuffled traversal");
    Shuffled::new(seq, rng)
}
