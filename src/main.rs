use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, trace};

use nn_tsp::greedy::{best_of_starts, nearest_neighbor};
use nn_tsp::input_parsers::load_points;
use nn_tsp::query::{UserQuery, Usage};
use nn_tsp::random_tsp::RandomTSPGenerator;
use nn_tsp::report;

fn solve(filename: &Path, best_start: bool, json: bool) -> nn_tsp::Result<()> {
    let points = load_points(filename)?;

    let tour = if best_start {
        best_of_starts(&points)
    } else {
        nearest_neighbor(&points)
    };

    // No points, no tour, nothing to print.
    let Some(tour) = tour else {
        debug!("No points in {}", filename.display());
        return Ok(());
    };

    info!("Tour over {} points has length {}", points.len(), tour.distance());

    let stdout = io::stdout().lock();
    if json {
        report::write_json(&tour, stdout)?;
    } else {
        report::write_text(&tour, stdout)?;
    }
    Ok(())
}

fn generate(
    count: u32,
    filename: &Path,
    max_x: f64,
    max_y: f64,
    seed: Option<u64>,
) -> nn_tsp::Result<()> {
    let mut generator = match seed {
        Some(seed) => RandomTSPGenerator::with_seed(max_x, max_y, seed),
        None => RandomTSPGenerator::new(max_x, max_y),
    };
    let points = generator.generate(count)?;
    RandomTSPGenerator::write_to_file(&points, filename)
}

fn main() -> ExitCode {
    let query = UserQuery::parse();

    tracing_subscriber::fmt()
        .with_max_level(query.tracing_level())
        .with_writer(io::stderr)
        .init();
    debug!("Verbose level: {}", query.verbose);
    trace!("User query: {:?}", query);

    let result = match &query.usage {
        Usage::Solve {
            filename,
            best_start,
            json,
        } => solve(filename, *best_start, *json),
        Usage::Generate {
            points,
            filename,
            max_x,
            max_y,
            seed,
        } => generate(*points, filename, *max_x, *max_y, *seed),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
