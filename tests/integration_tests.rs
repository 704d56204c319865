use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

use nn_tsp::greedy::nearest_neighbor;
use nn_tsp::input_parsers::load_points;
use nn_tsp::random_tsp::RandomTSPGenerator;
use nn_tsp::{Error, Point};

const BIN: &str = env!("CARGO_BIN_EXE_nn-tsp");

fn write_points(dir: &Path, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn worked_example_from_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_points(dir.path(), "triangle.txt", "1 0 0\n2 3 0\n3 3 4\n");

    let points = load_points(&path).unwrap();
    let tour = nearest_neighbor(&points).unwrap();
    assert_eq!(tour.route(), &[1, 2, 3, 1]);
    assert_eq!(tour.distance(), 12.0);
}

#[test]
fn partially_malformed_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_points(
        dir.path(),
        "mixed.txt",
        "NAME: sample\n5 1.0 1.0\n6 2.0\n7 4.0 5.0 extra\n8 1.0 2.0\n",
    );

    let points = load_points(&path).unwrap();
    let ids: Vec<i32> = points.iter().map(Point::id).collect();
    assert_eq!(ids, vec![5, 8]);
    assert_eq!(nearest_neighbor(&points).unwrap().route(), &[5, 8, 5]);
}

#[test]
fn unreadable_file_builds_nothing() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");
    let err = load_points(&missing).unwrap_err();
    assert!(matches!(err, Error::Io { ref path, .. } if path == &missing));
}

#[test]
fn generated_problem_tour_length_matches_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("random.txt");
    let points = RandomTSPGenerator::with_seed(1000.0, 1000.0, 42)
        .generate(300)
        .unwrap();
    RandomTSPGenerator::write_to_file(&points, &path).unwrap();

    let loaded = load_points(&path).unwrap();
    let tour = nearest_neighbor(&loaded).unwrap();
    assert_eq!(tour.len(), 301);

    // Recompute from ids; generated ids are unique.
    let by_id: HashMap<i32, Point> = loaded.iter().map(|p| (p.id(), *p)).collect();
    let length: f64 = tour
        .route()
        .windows(2)
        .map(|w| {
            let (a, b) = (by_id[&w[0]], by_id[&w[1]]);
            (a.x() - b.x()).hypot(a.y() - b.y())
        })
        .sum();
    assert!((length - tour.distance()).abs() < 1e-6);
}

#[test]
fn cli_solve_prints_report() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_points(dir.path(), "triangle.txt", "1 0 0\n2 3 0\n3 3 4\n");

    let output = Command::new(BIN).arg("solve").arg(&path).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "1 2 3 1 ");
    assert_eq!(lines[1], "Total Distance: 12");
    assert!(lines[2].strip_prefix("Time in ms: ").unwrap().parse::<u128>().is_ok());
}

#[test]
fn cli_solve_json() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_points(dir.path(), "triangle.txt", "1 0 0\n2 3 0\n3 3 4\n");

    let output = Command::new(BIN)
        .args(["solve", "--json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["route"], serde_json::json!([1, 2, 3, 1]));
    assert_eq!(value["distance"], serde_json::json!(12.0));
}

#[test]
fn cli_missing_file_reports_to_stderr() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("nope.txt");

    let output = Command::new(BIN).arg("solve").arg(&missing).output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to open file"));
    assert!(stderr.contains("nope.txt"));
}

#[test]
fn cli_empty_input_is_silent() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_points(dir.path(), "empty.txt", "not a point\n\n");

    let output = Command::new(BIN).arg("solve").arg(&path).output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn cli_generate_then_solve() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("points.json");

    let output = Command::new(BIN)
        .args(["generate", "25"])
        .arg(&path)
        .args(["--seed", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(load_points(&path).unwrap().len(), 25);

    let output = Command::new(BIN)
        .args(["solve", "--best-start"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().next().unwrap().split_whitespace().count(), 26);
}
