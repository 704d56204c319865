use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::input_parsers::is_json;
use crate::point::{Point, Points};

pub const MAX_POINTS: u32 = 1000000000;

/// Draws uniformly distributed problems inside `[0, max_x) × [0, max_y)`.
pub struct RandomTSPGenerator {
    max_x_coord: f64,
    max_y_coord: f64,
    rng: StdRng,
}

impl RandomTSPGenerator {
    pub fn new(max_x: f64, max_y: f64) -> RandomTSPGenerator {
        RandomTSPGenerator {
            max_x_coord: max_x,
            max_y_coord: max_y,
            rng: StdRng::from_entropy(),
        }
    }

    /// Same as [`RandomTSPGenerator::new`] but reproducible.
    pub fn with_seed(max_x: f64, max_y: f64, seed: u64) -> RandomTSPGenerator {
        RandomTSPGenerator {
            max_x_coord: max_x,
            max_y_coord: max_y,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `count` points with ids `0..count`, coordinates rounded to hundredths.
    pub fn generate(&mut self, count: u32) -> Result<Points> {
        if count == 0 || count >= MAX_POINTS {
            return Err(Error::InvalidPointCount(count));
        }
        if !valid_bound(self.max_x_coord) || !valid_bound(self.max_y_coord) {
            return Err(Error::InvalidBounds {
                max_x: self.max_x_coord,
                max_y: self.max_y_coord,
            });
        }

        let mut points = Vec::with_capacity(count as usize);
        for i in 0..count {
            let x = round(self.rng.gen_range(0.0..self.max_x_coord));
            let y = round(self.rng.gen_range(0.0..self.max_y_coord));
            points.push(Point::new(i as i32, x, y));
        }

        Ok(Points::new(points))
    }

    /// Writes `points` as JSON when `path` ends in `.json`, as
    /// `<id> <x> <y>` lines otherwise.
    pub fn write_to_file<P: AsRef<Path>>(points: &Points, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::write(path, e))?;
        let mut writer = BufWriter::new(file);

        if is_json(path) {
            serde_json::to_writer_pretty(&mut writer, points).map_err(|e| Error::json(path, e))?;
        } else {
            for point in points.iter() {
                writeln!(writer, "{} {} {}", point.id(), point.x(), point.y())
                    .map_err(|e| Error::write(path, e))?;
            }
        }
        writer.flush().map_err(|e| Error::write(path, e))?;

        info!("Successfully wrote {} points to {}", points.len(), path.display());
        Ok(())
    }
}

fn valid_bound(max: f64) -> bool {
    max.is_finite() && max > 0.0
}

fn round(number: f64) -> f64 {
    (number * 100.0).round() / 100.0
}
