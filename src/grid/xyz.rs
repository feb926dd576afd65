//! Plain-text XYZ grid I/O
//!
//! One node per line as `x y z` (whitespace or comma separated). Lines that
//! start with `#` and a non-numeric header line are skipped. Missing nodes
//! are filled with NaN.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use log::{debug, info, warn};

use super::info::Registration;
use super::raster::Grid;
use crate::errors::{GeoError, GeoResult};
use crate::table::PointTable;

impl Grid {
    /// Build a grid from scattered-but-regular `x`, `y` and value columns
    ///
    /// The axes are the distinct sorted coordinates found in the table. When
    /// several rows hit the same node, the last one wins.
    pub fn from_table(table: &PointTable, value_column: &str, registration: Registration) -> GeoResult<Grid> {
        let xs = table.require_column("x")?;
        let ys = table.require_column("y")?;
        let zs = table.require_column(value_column)?;

        let x = distinct_sorted(xs);
        let y = distinct_sorted(ys);
        if x.len() < 2 || y.len() < 2 {
            return Err(GeoError::InvalidGrid(format!(
                "'{}' needs at least 2 distinct x and y coordinates", value_column)));
        }

        let nx = x.len();
        let mut values = vec![f64::NAN; nx * y.len()];
        for ((px, py), z) in xs.iter().zip(ys).zip(zs) {
            let (Some(col), Some(row)) = (nearest_index(&x, *px), nearest_index(&y, *py)) else {
                continue;
            };
            values[row * nx + col] = *z;
        }

        let missing = values.iter().filter(|v| v.is_nan()).count();
        if missing > 0 {
            warn!("Grid '{}' has {} empty or NaN nodes", value_column, missing);
        }

        Grid::new(value_column, x, y, values, registration)
    }

    /// Parse XYZ text into a grid
    pub fn from_xyz_reader<R: Read>(reader: R, name: &str, registration: Registration) -> GeoResult<Grid> {
        let (mut x, mut y, mut z) = (Vec::new(), Vec::new(), Vec::new());

        for (line_no, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = trimmed
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|f| !f.is_empty())
                .collect();
            if fields.len() < 3 {
                return Err(GeoError::ParseError(format!("line {}: expected 'x y z'", line_no + 1)));
            }

            let parsed: Result<Vec<f64>, _> = fields[..3].iter().map(|f| f.parse::<f64>()).collect();
            match parsed {
                Ok(v) => {
                    x.push(v[0]);
                    y.push(v[1]);
                    z.push(v[2]);
                },
                // A leading non-numeric line is a header
                Err(_) if x.is_empty() => debug!("Skipping XYZ header: {}", trimmed),
                Err(_) => return Err(GeoError::ParseError(format!("line {}: invalid number in '{}'", line_no + 1, trimmed))),
            }
        }

        let table = PointTable::from_columns(vec![("x", x), ("y", y), (name, z)])?;
        Grid::from_table(&table, name, registration)
    }

    /// Read an XYZ file; the grid is named after the file stem
    pub fn read_xyz<P: AsRef<Path>>(path: P, registration: Registration) -> GeoResult<Grid> {
        let path = path.as_ref();
        let name = path.file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "grid".to_string());

        info!("Reading XYZ grid from {}", path.display());
        let file = File::open(path)?;
        Self::from_xyz_reader(file, &name, registration)
    }

    /// Write the grid as XYZ text, one node per line
    pub fn write_xyz<W: Write>(&self, writer: W) -> GeoResult<()> {
        let mut writer = BufWriter::new(writer);
        let (nx, _) = self.shape();

        for (row, y) in self.y().iter().enumerate() {
            for (col, x) in self.x().iter().enumerate() {
                writeln!(writer, "{} {} {}", x, y, self.values()[row * nx + col])?;
            }
        }

        writer.flush()?;
        Ok(())
    }

    /// Save the grid as an XYZ file
    pub fn save_xyz<P: AsRef<Path>>(&self, path: P) -> GeoResult<()> {
        let file = File::create(path.as_ref())?;
        self.write_xyz(file)
    }
}

fn distinct_sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup_by(|a, b| (*a - *b).abs() <= f64::EPSILON * a.abs().max(b.abs()).max(1.0));
    sorted
}

fn nearest_index(axis: &[f64], value: f64) -> Option<usize> {
    if !value.is_finite() {
        return None;
    }
    let index = axis.partition_point(|v| *v < value);
    match index {
        0 => Some(0),
        i if i == axis.len() => Some(axis.len() - 1),
        i if value - axis[i - 1] <= axis[i] - value => Some(i - 1),
        i => Some(i),
    }
}
