//! Nearest-neighbor heuristic for the 2D Traveling Salesman Problem.
//!
//! Points are read with [`input_parsers::load_points`], a tour is built with
//! [`greedy::nearest_neighbor`] and printed with [`report::write_text`].

pub mod distance;
pub mod error;
pub mod greedy;
pub mod input_parsers;
pub mod point;
pub mod query;
pub mod random_tsp;
pub mod report;
pub mod solution;

pub use error::{Error, Result};
pub use point::{Point, Points};
pub use solution::Tour;
