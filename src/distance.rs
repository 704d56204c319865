use crate::point::{Point, Points};

/// Euclidean distance between two points.
///
/// Uses `hypot` rather than `sqrt(dx² + dy²)` so that very large or very
/// small coordinate differences neither overflow nor underflow.
pub fn euclidean(point1: &Point, point2: &Point) -> f64 {
    (point1.x() - point2.x()).hypot(point1.y() - point2.y())
}

/// Length of the path visiting `indices` (store indices) in order.
///
/// The path is summed as given; a closed tour repeats its start at the end.
pub fn path_length(points: &Points, indices: &[usize]) -> f64 {
    indices
        .iter()
        .zip(indices.iter().skip(1))
        .map(|(&current, &next)| euclidean(&points[current], &points[next]))
        .sum()
}
