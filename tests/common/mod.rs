//! Shared helpers for traversal tests

#![allow(dead_code)]

use std::collections::HashSet;

/// Backing sequence `0..len` so that each element is its own index
pub fn indices(len: usize) -> Vec<usize> {
    (0..len).collect()
}

/// Whether `visited` names every index of `0..len` exactly once
pub fn is_bijection(visited: &[usize], len: usize) -> bool {
    let distinct: HashSet<usize> = visited.iter().copied().collect();
    visited.len() == len && distinct.len() == len && distinct.iter().all(|&i| i < len)
}

/// Independent gcd oracle, kept apart from `traversals::util::gcd` so the
/// cycle-length properties do not check the crate against itself
pub fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}
