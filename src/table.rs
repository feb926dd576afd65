//! Column table of point coordinates
//!
//! `PointTable` holds named `f64` columns of equal length. The conversion and
//! profile functions read the conventional `x`, `y`, `lat` and `lon` columns
//! and append new ones (`dist`, sampled layer names) as they go.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use log::debug;
use serde_json::{Map, Number, Value};

use crate::coordinate::Point;
use crate::errors::{GeoError, GeoResult};

/// A single named column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

/// A table of named numeric columns with equal length
#[derive(Debug, Clone, PartialEq)]
pub struct PointTable {
    columns: Vec<Column>,
}

impl Default for PointTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PointTable {
    /// Create an empty table
    pub fn new() -> Self {
        PointTable { columns: Vec::new() }
    }

    /// Build a table from (name, values) pairs
    pub fn from_columns<S: Into<String>>(columns: Vec<(S, Vec<f64>)>) -> GeoResult<Self> {
        let mut table = PointTable::new();
        for (name, values) in columns {
            table.set_column(name, values)?;
        }
        Ok(table)
    }

    /// Build an `x`/`y` table from points
    pub fn from_points(points: &[Point]) -> Self {
        PointTable {
            columns: vec![
                Column { name: "x".to_string(), values: points.iter().map(|p| p.x).collect() },
                Column { name: "y".to_string(), values: points.iter().map(|p| p.y).collect() },
            ],
        }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Get a column by name, failing if it is absent
    pub fn require_column(&self, name: &str) -> GeoResult<&[f64]> {
        self.column(name)
            .ok_or_else(|| GeoError::MissingColumn(name.to_string()))
    }

    /// Insert a column, replacing any existing column with the same name
    pub fn set_column<S: Into<String>>(&mut self, name: S, values: Vec<f64>) -> GeoResult<()> {
        let name = name.into();
        if !self.columns.is_empty() && values.len() != self.len() {
            return Err(GeoError::LengthMismatch { expected: self.len(), found: values.len() });
        }

        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.values = values,
            None => self.columns.push(Column { name, values }),
        }
        Ok(())
    }

    /// Keep only the rows where `mask` is true
    pub fn filter(&self, mask: &[bool]) -> GeoResult<PointTable> {
        if mask.len() != self.len() {
            return Err(GeoError::LengthMismatch { expected: self.len(), found: mask.len() });
        }

        let columns = self.columns.iter()
            .map(|c| Column {
                name: c.name.clone(),
                values: c.values.iter()
                    .zip(mask)
                    .filter(|(_, keep)| **keep)
                    .map(|(v, _)| *v)
                    .collect(),
            })
            .collect();

        Ok(PointTable { columns })
    }

    /// New table with only the named columns, in the given order
    pub fn select(&self, names: &[&str]) -> GeoResult<PointTable> {
        let mut table = PointTable::new();
        for name in names {
            table.set_column(*name, self.require_column(name)?.to_vec())?;
        }
        Ok(table)
    }

    /// Values of one row, in column order
    pub fn row(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.len() {
            return None;
        }
        Some(self.columns.iter().map(|c| c.values[index]).collect())
    }

    /// Parse CSV text with a header row
    ///
    /// Lines starting with `#` are skipped, fields are trimmed and may be
    /// quoted, and empty cells become NaN.
    pub fn from_csv_reader<R: Read>(reader: R) -> GeoResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_reader(reader);

        let names: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if names.is_empty() {
            return Ok(PointTable::new());
        }
        let mut data: Vec<Vec<f64>> = vec![Vec::new(); names.len()];

        for record in reader.records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line());

            for (column, cell) in data.iter_mut().zip(record.iter()) {
                let value = if cell.is_empty() {
                    f64::NAN
                } else {
                    cell.parse::<f64>()
                        .map_err(|_| GeoError::ParseError(format!("line {}: invalid number '{}'", line, cell)))?
                };
                column.push(value);
            }
        }

        debug!("Parsed CSV table with columns {:?} and {} rows", names, data.first().map_or(0, Vec::len));
        PointTable::from_columns(names.into_iter().zip(data).collect())
    }

    /// Read a CSV file with a header row
    pub fn read_csv<P: AsRef<Path>>(path: P) -> GeoResult<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_csv_reader(file)
    }

    /// Write the table as CSV, NaN as empty cells
    pub fn write_csv<W: Write>(&self, writer: W) -> GeoResult<()> {
        let mut writer = BufWriter::new(writer);
        writeln!(writer, "{}", self.column_names().join(","))?;

        for i in 0..self.len() {
            let cells: Vec<String> = self.columns.iter()
                .map(|c| if c.values[i].is_nan() { String::new() } else { c.values[i].to_string() })
                .collect();
            writeln!(writer, "{}", cells.join(","))?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Convert to a JSON array of row objects, NaN as null
    pub fn to_json(&self) -> Value {
        let rows = (0..self.len())
            .map(|i| {
                let mut record = Map::new();
                for c in &self.columns {
                    let value = Number::from_f64(c.values[i]).map_or(Value::Null, Value::Number);
                    record.insert(c.name.clone(), value);
                }
                Value::Object(record)
            })
            .collect();
        Value::Array(rows)
    }

    /// Write the table in the given format ("csv" or "json")
    pub fn write_format<W: Write>(&self, mut writer: W, format: &str) -> GeoResult<()> {
        match format.to_lowercase().as_str() {
            "csv" => self.write_csv(writer),
            "json" => {
                serde_json::to_writer_pretty(&mut writer, &self.to_json())?;
                writeln!(writer)?;
                Ok(())
            },
            _ => Err(GeoError::GenericError(format!("Unsupported table format: {}", format))),
        }
    }

    /// Save the table to a file in the given format ("csv" or "json")
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P, format: &str) -> GeoResult<()> {
        let file = File::create(path.as_ref())?;
        self.write_format(file, format)
    }
}
