//! Square distance matrices over a route's stops.

use crate::models::Coordinate;

/// Row-major n×n matrix of travel distances in kilometers.
///
/// Cell `(i, j)` is the cost of driving from stop `i` to stop `j`. The
/// matrix need not be symmetric: condition adjustments such as night-time
/// security depend on direction.
///
/// # Examples
///
/// ```
/// use wildebeest_routing::distance::DistanceMatrix;
/// use wildebeest_routing::models::Coordinate;
///
/// let stops = [
///     Coordinate::new(-1.28, 36.82),
///     Coordinate::new(-1.28, 36.83),
///     Coordinate::new(-1.28, 36.85),
/// ];
/// let dm = DistanceMatrix::from_points(&stops);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(2, 2), 0.0);
/// assert!(dm.get(0, 2) > dm.get(0, 1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    /// An all-zero matrix over `n` stops.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![0.0; n * n],
        }
    }

    /// Fills every cell from `cost(i, j)`.
    pub fn from_fn<F>(n: usize, mut cost: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let cells = (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| cost(i, j))
            .collect();
        Self { n, cells }
    }

    /// Plain great-circle distances between `points`.
    pub fn from_points(points: &[Coordinate]) -> Self {
        Self::from_points_with(points, |a, b| a.distance_to(&b))
    }

    /// Distances between `points` under an arbitrary, possibly directional,
    /// metric. The diagonal is zero whatever the metric returns.
    pub fn from_points_with<F>(points: &[Coordinate], mut metric: F) -> Self
    where
        F: FnMut(Coordinate, Coordinate) -> f64,
    {
        Self::from_fn(points.len(), |i, j| {
            if i == j {
                0.0
            } else {
                metric(points[i], points[j])
            }
        })
    }

    /// Wraps explicit row-major data, or `None` if it is not `n * n` long.
    pub fn from_data(n: usize, cells: Vec<f64>) -> Option<Self> {
        (cells.len() == n * n).then_some(Self { n, cells })
    }

    /// Cost from stop `from` to stop `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= size()`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.cells[from * self.n + to]
    }

    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.cells[from * self.n + to] = cost;
    }

    /// Number of stops.
    pub fn size(&self) -> usize {
        self.n
    }

    /// The cheapest stop to reach from `from` among `candidates`, preferring
    /// the earliest listed on ties.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}
