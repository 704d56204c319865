use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::point::{Point, Points};

/// Reads the points stored at `path`.
///
/// Files ending in `.json` hold `{"points": [...]}`; anything else is read
/// as text with one `<id> <x> <y>` point per line.
pub fn load_points<P: AsRef<Path>>(path: P) -> Result<Points> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let reader = BufReader::new(file);

    let points = if is_json(path) {
        serde_json::from_reader::<_, Points>(reader).map_err(|e| Error::json(path, e))?
    } else {
        parse_points(reader).map_err(|e| Error::read(path, e))?
    };

    debug!("Loaded {} points from {}", points.len(), path.display());
    Ok(points)
}

/// Parses text points, skipping every line that is not exactly
/// `int real real`. Lines that are not valid UTF-8 are skipped as well.
pub fn parse_points<R: BufRead>(reader: R) -> std::io::Result<Points> {
    let mut points = Vec::new();
    for line in reader.split(b'\n') {
        let line = line?;
        if let Some(point) = std::str::from_utf8(&line).ok().and_then(parse_line) {
            points.push(point);
        }
    }
    Ok(Points::new(points))
}

/// One `<id> <x> <y>` line, or `None` when the line has another shape.
pub fn parse_line(line: &str) -> Option<Point> {
    let mut words = line.split_whitespace();

    let id = words.next()?.parse::<i32>().ok()?;
    let x = parse_coordinate(words.next()?)?;
    let y = parse_coordinate(words.next()?)?;

    if words.next().is_some() {
        return None;
    }

    Some(Point::new(id, x, y))
}

fn parse_coordinate(word: &str) -> Option<f64> {
    word.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub(crate) fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
