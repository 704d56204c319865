//! Nearest-neighbor tour construction.
//!
//! Starting from one point, always travel to the closest point that has not
//! been visited yet, then return to the start. Every step scans the whole
//! store, so a run is O(n²) time and O(n) extra space.

use ordered_float::OrderedFloat;
use std::time::Instant;
use tracing::{debug, trace};

use crate::distance::euclidean;
use crate::point::Points;
use crate::solution::Tour;

/// Builds the nearest-neighbor tour that starts at the first point.
///
/// Returns `None` for an empty store.
///
/// ```
/// use nn_tsp::greedy::nearest_neighbor;
/// use nn_tsp::point::{Point, Points};
///
/// let points = Points::new(vec![
///     Point::new(1, 0.0, 0.0),
///     Point::new(2, 3.0, 0.0),
///     Point::new(3, 3.0, 4.0),
/// ]);
/// let tour = nearest_neighbor(&points).unwrap();
/// assert_eq!(tour.route(), &[1, 2, 3, 1]);
/// assert_eq!(tour.distance(), 12.0);
/// ```
pub fn nearest_neighbor(points: &Points) -> Option<Tour> {
    nearest_neighbor_from(points, 0)
}

/// Builds the nearest-neighbor tour that starts at store index `start`.
///
/// Returns `None` when the store is empty or `start` is out of range.
pub fn nearest_neighbor_from(points: &Points, start: usize) -> Option<Tour> {
    let first = points.get(start)?;
    let n = points.len();

    let mut seen = vec![false; n];
    let mut route = Vec::with_capacity(n + 1);
    let mut order = Vec::with_capacity(n + 1);
    let mut total = 0.0;

    let mut current = start;
    seen[current] = true;
    route.push(first.id());
    order.push(current);

    let timer = Instant::now();

    for _ in 1..n {
        let mut nearest: Option<(usize, f64)> = None;

        for (index, candidate) in points.iter().enumerate() {
            if seen[index] {
                continue;
            }
            let distance = euclidean(&points[current], candidate);
            // Strictly smaller only: on ties the earliest index stays. The
            // first candidate is always taken, even at infinite distance.
            if nearest.map_or(true, |(_, min_distance)| distance < min_distance) {
                nearest = Some((index, distance));
            }
        }

        // Each pass has at least one unvisited point left.
        let Some((next, min_distance)) = nearest else {
            unreachable!("no unvisited point on pass over {} points", n)
        };

        seen[next] = true;
        total += min_distance;
        route.push(points[next].id());
        order.push(next);
        current = next;
    }

    total += euclidean(&points[current], first);
    route.push(first.id());
    order.push(start);

    let elapsed = timer.elapsed();
    trace!("Tour from index {} has length {}", start, total);

    Some(Tour::new(route, order, total, elapsed))
}

/// Builds a tour from every start point and keeps the shortest.
///
/// On equal lengths the earliest start wins. This costs O(n³), and the
/// returned tour's elapsed time covers the whole search.
pub fn best_of_starts(points: &Points) -> Option<Tour> {
    let timer = Instant::now();
    let best = (0..points.len())
        .filter_map(|start| nearest_neighbor_from(points, start))
        .min_by_key(|tour| OrderedFloat(tour.distance()))?;

    debug!(
        "Best start is point {:?} with length {}",
        best.start(),
        best.distance()
    );
    Some(best.with_elapsed(timer.elapsed()))
}
