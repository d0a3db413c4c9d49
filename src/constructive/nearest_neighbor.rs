//! Nearest-neighbor tour construction.
//!
//! Starting from the depot, always move to the nearest unvisited location.
//!
//! # Complexity
//!
//! O(n²) where n = number of locations.
//!
//! # Reference
//!
//! The simplest constructive heuristic for the TSP. Tours are typically
//! 15-25% above optimal, which [`two_opt_improve`](crate::local_search::two_opt_improve)
//! then tightens.

use crate::distance::DistanceMatrix;

/// Builds an open tour over every location of the matrix, beginning at
/// `start`.
///
/// Ties are broken in favor of the lowest index.
///
/// # Examples
///
/// ```
/// use wildebeest_routing::distance::DistanceMatrix;
/// use wildebeest_routing::constructive::nearest_neighbor_tour;
///
/// // 0 -- 1 -- 2 -- 3 on a line, listed out of order.
/// let dm = DistanceMatrix::from_data(4, vec![
///     0.0, 3.0, 1.0, 2.0,
///     3.0, 0.0, 2.0, 1.0,
///     1.0, 2.0, 0.0, 1.0,
///     2.0, 1.0, 1.0, 0.0,
/// ]).unwrap();
/// assert_eq!(nearest_neighbor_tour(&dm, 0), vec![0, 2, 3, 1]);
/// ```
pub fn nearest_neighbor_tour(distances: &DistanceMatrix, start: usize) -> Vec<usize> {
    let n = distances.size();
    if n == 0 {
        return Vec::new();
    }

    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != start).collect();
    let mut tour = Vec::with_capacity(n);
    tour.push(start);
    let mut current = start;

    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        // `unvisited` stays sorted, so the first minimum is the lowest index.
        unvisited.retain(|&i| i != next);
        tour.push(next);
        current = next;
    }

    tour
}
