//! In-memory numeric table and text serialization of a lattice

use crate::coordinate::Point2D;
use super::lattice::Lattice;

/// Header line of the text serialization
pub const CSV_HEADER: &str = "easting,northing";

/// Column names of the numeric table, in order
pub const COLUMNS: [&str; 2] = ["x", "y"];

/// Two-column numeric table, one `[x, y]` row per lattice point
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridTable {
    rows: Vec<[f64; 2]>,
}

impl GridTable {
    /// Build a table from lattice points, keeping generator order
    pub fn from_lattice(lattice: &Lattice) -> Self {
        GridTable {
            rows: lattice.iter().map(|p| [p.x, p.y]).collect(),
        }
    }

    /// (number of rows, number of columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), COLUMNS.len())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<[f64; 2]> {
        self.rows.get(index).copied()
    }

    pub fn rows(&self) -> &[[f64; 2]] {
        &self.rows
    }

    /// All values of one column (0 = x, 1 = y)
    pub fn column(&self, index: usize) -> Option<Vec<f64>> {
        if index >= COLUMNS.len() {
            return None;
        }
        Some(self.rows.iter().map(|row| row[index]).collect())
    }

    /// Iterate the rows as points
    pub fn points(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.rows.iter().map(|row| Point2D::new(row[0], row[1]))
    }

    /// Render the table as the text serialization, header included
    pub fn to_csv_string(&self) -> String {
        let mut out = String::with_capacity(CSV_HEADER.len() + 1 + self.rows.len() * 32);
        out.push_str(CSV_HEADER);
        out.push('\n');
        for row in &self.rows {
            out.push_str(&format_row(row[0], row[1]));
            out.push('\n');
        }
        out
    }
}

/// Format one point as a text row (six decimal places, comma separated)
pub fn format_row(x: f64, y: f64) -> String {
    format!("{:.6},{:.6}", x, y)
}

/// Package a lattice as a numeric table and its text rows
///
/// The first text row is the header; every other row matches the table row
/// at the same position. Rows carry no line terminator.
pub fn materialize(lattice: &Lattice) -> (GridTable, Vec<String>) {
    let table = GridTable::from_lattice(lattice);

    let mut rows = Vec::with_capacity(table.len() + 1);
    rows.push(CSV_HEADER.to_string());
    rows.extend(table.rows().iter().map(|row| format_row(row[0], row[1])));

    (table, rows)
}
