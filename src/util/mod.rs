//! Modular arithmetic helpers for stride traversals

/// Greatest common divisor (Euclid)
///
/// `gcd(0, n) == n`, so a zero stride is treated as sharing every factor
/// with the sequence length.
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Number of distinct positions visited by stepping `stride` modulo `len`
///
/// Equals `len / gcd(stride, len)`: the length of the cycle through the
/// starting position. Zero for an empty sequence.
pub fn cycle_length(len: usize, stride: usize) -> usize {
    if len == 0 {
        return 0;
    }
    len / gcd(stride % len, len)
}

/// Whether a stride reaches every position of a sequence of length `len`
pub fn is_coprime(stride: usize, len: usize) -> bool {
    len == 0 || gcd(stride % len, len) == 1
}
