use serde::Serialize;
use std::io::Write;

use crate::solution::Tour;

#[derive(Serialize)]
struct TourReport<'a> {
    route: &'a [i32],
    distance: f64,
    time_ms: u128,
}

/// Writes the route, its length and the build time as three lines of text.
pub fn write_text<W: Write>(tour: &Tour, mut out: W) -> std::io::Result<()> {
    for id in tour.route() {
        write!(out, "{} ", id)?;
    }
    writeln!(out)?;
    writeln!(out, "Total Distance: {}", tour.distance())?;
    writeln!(out, "Time in ms: {}", tour.elapsed().as_millis())?;
    out.flush()
}

/// Writes the same report as a JSON object.
pub fn write_json<W: Write>(tour: &Tour, mut out: W) -> std::io::Result<()> {
    let report = TourReport {
        route: tour.route(),
        distance: tour.distance(),
        time_ms: tour.elapsed().as_millis(),
    };
    serde_json::to_writer_pretty(&mut out, &report)?;
    writeln!(out)?;
    out.flush()
}
