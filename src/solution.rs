use serde::Serialize;
use std::time::Duration;

use crate::distance;
use crate::point::Points;

/// A closed visiting order and its length.
///
/// `route` starts and ends with the same identifier. `order` holds the
/// matching store indices, so lengths can be recomputed even when two
/// points share an identifier.
#[derive(Clone, Debug, Serialize)]
pub struct Tour {
    route: Vec<i32>,
    distance: f64,
    #[serde(skip)]
    order: Vec<usize>,
    #[serde(skip)]
    elapsed: Duration,
}

impl Tour {
    pub(crate) fn new(route: Vec<i32>, order: Vec<usize>, distance: f64, elapsed: Duration) -> Tour {
        Tour { route, distance, order, elapsed }
    }

    /// Replaces the elapsed time, for drivers that run several builds.
    pub(crate) fn with_elapsed(mut self, elapsed: Duration) -> Tour {
        self.elapsed = elapsed;
        self
    }

    pub fn route(&self) -> &[i32] {
        &self.route
    }

    /// Store indices of the route, in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Wall-clock time spent in the selection loop.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn len(&self) -> usize {
        self.route.len()
    }

    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }

    /// Identifier the tour starts and ends at.
    pub fn start(&self) -> Option<i32> {
        self.route.first().copied()
    }

    /// Sums the segment lengths again from the points the tour was built on.
    pub fn recompute_distance(&self, points: &Points) -> f64 {
        distance::path_length(points, &self.order)
    }
}
