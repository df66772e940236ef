//! Permutation crossover and mutation operators.
//!
//! These operate on `&[usize]` location orders and always return valid
//! permutations when given valid permutations.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: prefix from one parent, remainder in the
//!   other parent's order: O(n)
//! - [`order_crossover`] (OX): Davis (1985), preserves a segment of one
//!   parent and the relative order of the other: O(n)
//!
//! # Mutation Operators
//!
//! - [`swap_mutation`]: exchange two distinct random positions: O(1)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Oliver, Smith & Holland (1987), "A Study of Permutation Crossover
//!   Operators on the Traveling Salesman Problem"

use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover with order repair.
///
/// Positions `[0, cut)` are copied from `head`. Positions `[cut, n)` take the
/// values of `tail` that are not already placed, in the order they occur in
/// `tail`. Where `tail[cut..]` holds exactly the values missing from the
/// prefix, this equals the plain positional copy `tail[cut..]`.
///
/// # Panics
/// Panics if the parents have different lengths or `cut > n`.
pub fn single_point_crossover(head: &[usize], tail: &[usize], cut: usize) -> Vec<usize> {
    let n = head.len();
    assert_eq!(n, tail.len(), "parents must have equal length");
    assert!(cut <= n, "cut point {cut} beyond length {n}");

    let mut child = Vec::with_capacity(n);
    let mut placed = vec![false; n];

    for &val in &head[..cut] {
        child.push(val);
        placed[val] = true;
    }
    for &val in tail {
        if !placed[val] {
            child.push(val);
            placed[val] = true;
        }
    }

    child
}

/// Order Crossover (OX) producing a single child.
///
/// 1. Select a random segment `[start, end]` from `template`
/// 2. Copy the segment to the child at the same positions
/// 3. Fill the remaining positions with elements from `donor`, starting after
///    the segment end and wrapping around, skipping elements already present
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn order_crossover<R: Rng + ?Sized>(
    template: &[usize],
    donor: &[usize],
    rng: &mut R,
) -> Vec<usize> {
    let n = template.len();
    assert_eq!(n, donor.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return template.to_vec();
    }

    let (start, end) = random_segment(n, rng);

    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    for i in start..=end {
        child[i] = template[i];
        in_segment[template[i]] = true;
    }

    let mut pos = (end + 1) % n;
    for offset in 0..n {
        let val = donor[(end + 1 + offset) % n];
        if !in_segment[val] {
            child[pos] = val;
            pos = (pos + 1) % n;
        }
    }

    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: exchange two distinct random positions.
///
/// The second position is redrawn until it differs from the first, so every
/// call on a slice of length ≥ 2 changes exactly two positions.
/// Returns the swapped positions, or `None` for slices shorter than 2.
pub fn swap_mutation<R: Rng + ?Sized>(perm: &mut [usize], rng: &mut R) -> Option<(usize, usize)> {
    let n = perm.len();
    if n < 2 {
        return None;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n);
    while j == i {
        j = rng.random_range(0..n);
    }
    perm.swap(i, j);
    Some((i, j))
}

// ============================================================================
// Helpers
// ============================================================================

/// Returns `true` if `perm` is a permutation of `0..n`.
pub fn is_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    perm.iter()
        .all(|&v| v < n && !std::mem::replace(&mut seen[v], true))
}

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng + ?Sized>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
