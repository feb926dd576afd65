//! Grid metadata

use std::fmt;
use serde::Serialize;

use super::raster::Grid;
use crate::coordinate::Region;
use crate::errors::{GeoError, GeoResult};
use crate::stats;

/// Whether grid values sit on nodes or at cell centres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Registration {
    /// Values at grid-line intersections (GMT `g`)
    Gridline,
    /// Values at cell centres (GMT `p`)
    Pixel,
}

impl Registration {
    /// Single-letter GMT registration code
    pub fn code(&self) -> &'static str {
        match self {
            Registration::Gridline => "g",
            Registration::Pixel => "p",
        }
    }

    /// Parse "g"/"gridline" or "p"/"pixel"
    pub fn from_string(s: &str) -> GeoResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "g" | "gridline" => Ok(Registration::Gridline),
            "p" | "pixel" => Ok(Registration::Pixel),
            other => Err(GeoError::ParseError(format!("Unknown registration: {}", other))),
        }
    }
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Summary of a grid: spacing, region, value range and registration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridInfo {
    pub spacing: f64,
    pub region: Region,
    pub min: f64,
    pub max: f64,
    pub registration: Registration,
}

impl fmt::Display for GridInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Spacing: {}", self.spacing)?;
        writeln!(f, "Region: {}", self.region)?;
        writeln!(f, "Min: {}", self.min)?;
        writeln!(f, "Max: {}", self.max)?;
        write!(f, "Registration: {}", self.registration)
    }
}

/// Spacing, region, value range and registration of a grid
///
/// The value range ignores NaN nodes; an all-NaN grid reports NaN for both.
pub fn get_grid_info(grid: &Grid) -> GridInfo {
    GridInfo {
        spacing: grid.spacing_x(),
        region: grid.region(),
        min: stats::nan_min(grid.values()),
        max: stats::nan_max(grid.values()),
        registration: grid.registration(),
    }
}
