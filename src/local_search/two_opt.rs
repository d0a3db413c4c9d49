//! Open-tour 2-opt improvement.
//!
//! # Algorithm
//!
//! The tour starts at a fixed depot (position 0) and does not return. For
//! each `i` in `1..n-2` and `j` in `i+2..=n`, reverse the half-open segment
//! `tour[i..j]` and keep the reversal if the total tour distance drops.
//! `j = i + 1` would reverse a single stop and is skipped. Passes repeat
//! until one completes without an improvement (first improvement; a local
//! optimum, not a global one).
//!
//! # Complexity
//!
//! O(n²) per pass. Each move is priced from its two boundary edges plus the
//! forward and backward lengths of the segment, which are extended by one
//! edge as `j` grows. Pricing both directions keeps the search exact for
//! asymmetric matrices.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;

const IMPROVEMENT_EPS: f64 = 1e-10;

/// Applies 2-opt improvement to an open tour.
///
/// Returns the improved tour and its distance. Tours with fewer than four
/// locations are returned unchanged.
///
/// # Examples
///
/// ```
/// use wildebeest_routing::distance::DistanceMatrix;
/// use wildebeest_routing::local_search::{tour_distance, two_opt_improve};
///
/// // Points at 0, 1, 2, 3 on a line.
/// let pos = [0.0_f64, 1.0, 2.0, 3.0];
/// let dm = DistanceMatrix::from_fn(4, |i, j| (pos[i] - pos[j]).abs());
/// let bad = [0, 3, 2, 1];
/// let (improved, dist) = two_opt_improve(&bad, &dm);
/// assert_eq!(improved, vec![0, 1, 2, 3]);
/// assert!(dist < tour_distance(&bad, &dm));
/// ```
pub fn two_opt_improve(tour: &[usize], distances: &DistanceMatrix) -> (Vec<usize>, f64) {
    let mut current = tour.to_vec();
    let n = current.len();
    if n < 4 {
        let dist = tour_distance(&current, distances);
        return (current, dist);
    }

    let d = |a: usize, b: usize| distances.get(a, b);
    let mut improved = true;
    while improved {
        improved = false;
        for i in 1..n - 2 {
            // Lengths of current[i..j] walked forward and backward.
            let mut forward = 0.0;
            let mut backward = 0.0;
            for j in i + 1..=n {
                if j > i + 1 {
                    forward += d(current[j - 2], current[j - 1]);
                    backward += d(current[j - 1], current[j - 2]);
                }
                if j < i + 2 {
                    continue;
                }

                let (before, first, last) = (current[i - 1], current[i], current[j - 1]);
                let mut old = d(before, first) + forward;
                let mut new = d(before, last) + backward;
                if j < n {
                    let after = current[j];
                    old += d(last, after);
                    new += d(first, after);
                }

                if new - old < -IMPROVEMENT_EPS {
                    current[i..j].reverse();
                    std::mem::swap(&mut forward, &mut backward);
                    improved = true;
                }
            }
        }
    }

    let dist = tour_distance(&current, distances);
    (current, dist)
}

/// Total distance of an open tour: `tour[0] → tour[1] → ... → tour[n-1]`.
pub fn tour_distance(tour: &[usize], distances: &DistanceMatrix) -> f64 {
    tour.windows(2).map(|w| distances.get(w[0], w[1])).sum()
}
