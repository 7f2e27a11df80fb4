//! Tests for lattice materialization and writing

extern crate std;

use std::fs;

use crate::coordinate::Point2D;
use crate::grid::errors::GridError;
use crate::grid::lattice::generate;
use crate::grid::spacing::GridSpacing;
use crate::grid::table::{format_row, materialize, GridTable, CSV_HEADER};
use crate::grid::writer::write_rows;

fn sample_table() -> (GridTable, Vec<String>) {
    let lattice = generate(
        Point2D::new(694_743.123_456_789, 3_210_987.5),
        Point2D::new(850_000.0, 3_450_000.0),
        GridSpacing::new(100_000).unwrap(),
    );
    materialize(&lattice)
}

#[test]
fn test_format_row_uses_six_decimals() {
    std::assert_eq!(format_row(694_743.123_456_789, 3.0), "694743.123457,3.000000");
    std::assert_eq!(format_row(-1.5, 0.0), "-1.500000,0.000000");
}

#[test]
fn test_materialize_keeps_generator_order() {
    let (table, rows) = sample_table();

    std::assert_eq!(table.shape(), (6, 2));
    std::assert_eq!(rows.len(), 7);
    std::assert_eq!(rows[0], CSV_HEADER);
    std::assert_eq!(table.row(0), Some([694_743.123_456_789, 3_210_987.5]));
    std::assert_eq!(table.row(1), Some([694_743.123_456_789, 3_310_987.5]));
    std::assert_eq!(rows[1], "694743.123457,3210987.500000");
    std::assert_eq!(rows[4], "794743.123457,3210987.500000");
}

#[test]
fn test_columns() {
    let (table, _) = sample_table();

    let xs = table.column(0).unwrap();
    let ys = table.column(1).unwrap();
    std::assert_eq!(xs.len(), table.len());
    std::assert_eq!(ys[2], 3_410_987.5);
    std::assert!(table.column(2).is_none());
}

#[test]
fn test_text_parses_back_to_table() {
    let (table, _) = sample_table();

    let text = table.to_csv_string();
    let mut lines = text.lines();
    std::assert_eq!(lines.next(), Some(CSV_HEADER));

    let parsed: Vec<[f64; 2]> = lines
        .map(|line| {
            let (x, y) = line.split_once(',').unwrap();
            [x.parse().unwrap(), y.parse().unwrap()]
        })
        .collect();

    std::assert_eq!(parsed.len(), table.len());
    for (row, back) in table.rows().iter().zip(&parsed) {
        std::assert!((row[0] - back[0]).abs() <= 5e-7);
        std::assert!((row[1] - back[1]).abs() <= 5e-7);
    }
}

#[test]
fn test_empty_lattice_materializes_to_header_only() {
    let corner = Point2D::new(1.0, 1.0);
    let (table, rows) = materialize(&generate(corner, corner, GridSpacing::new(1).unwrap()));

    std::assert!(table.is_empty());
    std::assert_eq!(rows, vec![CSV_HEADER.to_string()]);
    std::assert_eq!(table.to_csv_string(), "easting,northing\n");
}

#[test]
fn test_write_rows_terminates_every_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.csv");
    let (table, rows) = sample_table();

    write_rows(&path, &rows, false).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    std::assert!(written.ends_with('\n'));
    std::assert_eq!(written, table.to_csv_string());
}

#[test]
fn test_write_rows_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("grid.csv");
    let (_, rows) = sample_table();

    let result = write_rows(&path, &rows, false);

    std::assert!(matches!(result, Err(GridError::Io(_))));
}

#[test]
fn test_hidden_progress_still_counts() {
    let tracker = crate::utils::progress::ProgressTracker::hidden(10);

    tracker.increment(4);
    tracker.increment(6);

    std::assert_eq!(tracker.position(), 10);
    tracker.finish();
}
