//! In-memory grid type

use log::{debug, info};

use super::info::Registration;
use crate::coordinate::Region;
use crate::errors::{GeoError, GeoResult};

/// Relative tolerance when comparing node spacing and coordinates
const SPACING_TOLERANCE: f64 = 1e-6;

/// A regular grid with ascending easting/northing axes
///
/// Values are stored row-major with rows along `y`:
/// `values[row * nx + col]` is the node at `(x[col], y[row])`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    name: String,
    x: Vec<f64>,
    y: Vec<f64>,
    values: Vec<f64>,
    registration: Registration,
}

impl Grid {
    /// Create a grid, checking the axes and value count
    ///
    /// Both axes need at least two strictly ascending, evenly spaced nodes.
    pub fn new(name: &str, x: Vec<f64>, y: Vec<f64>, values: Vec<f64>, registration: Registration) -> GeoResult<Self> {
        check_axis("x", &x)?;
        check_axis("y", &y)?;
        if values.len() != x.len() * y.len() {
            return Err(GeoError::InvalidGrid(format!(
                "expected {} values for a {}x{} grid, found {}",
                x.len() * y.len(), x.len(), y.len(), values.len())));
        }

        Ok(Grid { name: name.to_string(), x, y, values, registration })
    }

    /// Create a constant-valued grid covering a region
    ///
    /// With gridline registration the outermost nodes sit on the region
    /// bounds; with pixel registration they sit half a cell inside.
    pub fn from_region(name: &str, region: &Region, spacing: f64, registration: Registration, fill: f64) -> GeoResult<Self> {
        if !(spacing > 0.0) {
            return Err(GeoError::InvalidGrid(format!("spacing must be positive, got {}", spacing)));
        }
        region.validate()?;

        let x = axis_nodes(region.xmin, region.xmax, spacing, registration)?;
        let y = axis_nodes(region.ymin, region.ymax, spacing, registration)?;
        let values = vec![fill; x.len() * y.len()];

        debug!("Created {}x{} grid '{}' over {}", x.len(), y.len(), name, region);
        Grid::new(name, x, y, values, registration)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn registration(&self) -> Registration {
        self.registration
    }

    /// Number of columns and rows
    pub fn shape(&self) -> (usize, usize) {
        (self.x.len(), self.y.len())
    }

    pub fn spacing_x(&self) -> f64 {
        axis_spacing(&self.x)
    }

    pub fn spacing_y(&self) -> f64 {
        axis_spacing(&self.y)
    }

    /// Value at a column/row index
    pub fn get(&self, col: usize, row: usize) -> Option<f64> {
        if col >= self.x.len() || row >= self.y.len() {
            return None;
        }
        self.values.get(row * self.x.len() + col).copied()
    }

    /// Region covered by the grid
    ///
    /// Gridline-registered grids span their node coordinates, pixel-registered
    /// grids extend half a cell beyond the outermost nodes.
    pub fn region(&self) -> Region {
        let (x0, x1) = (self.x[0], self.x[self.x.len() - 1]);
        let (y0, y1) = (self.y[0], self.y[self.y.len() - 1]);

        match self.registration {
            Registration::Gridline => Region::from_bounds(x0, x1, y0, y1),
            Registration::Pixel => {
                let (hx, hy) = (self.spacing_x() / 2.0, self.spacing_y() / 2.0);
                Region::from_bounds(x0 - hx, x1 + hx, y0 - hy, y1 + hy)
            },
        }
    }

    /// Switch between gridline and pixel registration, keeping node values
    pub fn toggle_registration(&mut self) {
        self.registration = match self.registration {
            Registration::Gridline => Registration::Pixel,
            Registration::Pixel => Registration::Gridline,
        };
    }

    /// Bilinear sample at a coordinate
    ///
    /// Returns NaN outside [`Grid::region`] or when a contributing node is
    /// NaN. Between the outermost nodes and the edge of a pixel-registered
    /// grid the edge nodes are used.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        if !self.region().contains(x, y) {
            return f64::NAN;
        }

        let x = x.clamp(self.x[0], self.x[self.x.len() - 1]);
        let y = y.clamp(self.y[0], self.y[self.y.len() - 1]);
        let (Some((col, tx)), Some((row, ty))) = (cell_position(&self.x, x), cell_position(&self.y, y)) else {
            return f64::NAN;
        };

        let nx = self.x.len();
        let v00 = self.values[row * nx + col];
        let v10 = self.values[row * nx + col + 1];
        let v01 = self.values[(row + 1) * nx + col];
        let v11 = self.values[(row + 1) * nx + col + 1];

        let bottom = v00 + (v10 - v00) * tx;
        let top = v01 + (v11 - v01) * tx;
        bottom + (top - bottom) * ty
    }

    /// Node-by-node difference `self - other`
    ///
    /// Both grids must share the same axes.
    pub fn compare(&self, other: &Grid) -> GeoResult<Grid> {
        if !same_axis(&self.x, &other.x) || !same_axis(&self.y, &other.y) {
            return Err(GeoError::InvalidGrid(format!(
                "cannot compare '{}' and '{}': axes differ", self.name, other.name)));
        }

        let values = self.values.iter()
            .zip(&other.values)
            .map(|(a, b)| a - b)
            .collect();

        info!("Compared grids '{}' and '{}'", self.name, other.name);
        Grid::new(&format!("{}-{}", self.name, other.name),
                  self.x.clone(), self.y.clone(), values, self.registration)
    }

    /// Nodes that fall inside a region
    pub fn subset(&self, region: &Region) -> GeoResult<Grid> {
        let cols: Vec<usize> = (0..self.x.len()).filter(|&i| self.x[i] >= region.xmin && self.x[i] <= region.xmax).collect();
        let rows: Vec<usize> = (0..self.y.len()).filter(|&j| self.y[j] >= region.ymin && self.y[j] <= region.ymax).collect();

        let x = cols.iter().map(|&i| self.x[i]).collect();
        let y = rows.iter().map(|&j| self.y[j]).collect();
        let values = rows.iter()
            .flat_map(|&j| cols.iter().map(move |&i| (i, j)))
            .map(|(i, j)| self.values[j * self.x.len() + i])
            .collect();

        Grid::new(&self.name, x, y, values, self.registration)
    }

    /// Fit and remove a first-order trend surface
    ///
    /// A plane `z = a + b·x + c·y` is fitted by least squares over the
    /// non-NaN nodes.
    ///
    /// # Returns
    /// A tuple of (trend grid, residual grid)
    pub fn detrend(&self) -> GeoResult<(Grid, Grid)> {
        let nodes: Vec<(f64, f64, f64)> = self.y.iter()
            .enumerate()
            .flat_map(|(j, &y)| self.x.iter().enumerate().map(move |(i, &x)| (i, j, x, y)))
            .map(|(i, j, x, y)| (x, y, self.values[j * self.x.len() + i]))
            .filter(|(_, _, z)| !z.is_nan())
            .collect();

        // Centre the coordinates to keep the normal equations well conditioned
        let n = nodes.len() as f64;
        let (mx, my) = nodes.iter().fold((0.0, 0.0), |(sx, sy), (x, y, _)| (sx + x, sy + y));
        let (mx, my) = (mx / n, my / n);

        let (mut sxx, mut sxy, mut syy, mut sz, mut sxz, mut syz) = (0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        for (x, y, z) in &nodes {
            let (dx, dy) = (x - mx, y - my);
            sxx += dx * dx;
            sxy += dx * dy;
            syy += dy * dy;
            sz += z;
            sxz += dx * z;
            syz += dy * z;
        }

        let det = sxx * syy - sxy * sxy;
        if nodes.len() < 3 || det.abs() < f64::EPSILON * (sxx * syy).max(1.0) {
            return Err(GeoError::InvalidGrid(format!(
                "not enough non-NaN nodes in '{}' to fit a trend", self.name)));
        }

        let a = sz / n;
        let b = (sxz * syy - syz * sxy) / det;
        let c = (syz * sxx - sxz * sxy) / det;
        debug!("Trend of '{}': z = {} + {}*(x - {}) + {}*(y - {})", self.name, a, b, mx, c, my);

        let trend: Vec<f64> = self.y.iter()
            .flat_map(|&y| self.x.iter().map(move |&x| a + b * (x - mx) + c * (y - my)))
            .collect();
        let residual = self.values.iter().zip(&trend).map(|(z, t)| z - t).collect();

        Ok((
            Grid::new(&format!("{}_trend", self.name), self.x.clone(), self.y.clone(), trend, self.registration)?,
            Grid::new(&format!("{}_detrended", self.name), self.x.clone(), self.y.clone(), residual, self.registration)?,
        ))
    }
}

fn axis_spacing(axis: &[f64]) -> f64 {
    (axis[axis.len() - 1] - axis[0]) / (axis.len() - 1) as f64
}

fn check_axis(label: &str, axis: &[f64]) -> GeoResult<()> {
    if axis.len() < 2 {
        return Err(GeoError::InvalidGrid(format!("{} axis needs at least 2 nodes", label)));
    }
    if axis.iter().any(|v| !v.is_finite()) || axis.windows(2).any(|w| w[1] <= w[0]) {
        return Err(GeoError::InvalidGrid(format!("{} axis must be finite and strictly ascending", label)));
    }

    let spacing = axis_spacing(axis);
    if axis.windows(2).any(|w| ((w[1] - w[0]) - spacing).abs() > spacing * SPACING_TOLERANCE) {
        return Err(GeoError::InvalidGrid(format!("{} axis is not evenly spaced", label)));
    }
    Ok(())
}

fn same_axis(a: &[f64], b: &[f64]) -> bool {
    let tolerance = axis_spacing(a) * SPACING_TOLERANCE;
    a.len() == b.len() && a.iter().zip(b).all(|(p, q)| (p - q).abs() <= tolerance)
}

/// Node coordinates along one axis of a region
fn axis_nodes(min: f64, max: f64, spacing: f64, registration: Registration) -> GeoResult<Vec<f64>> {
    let cells = (max - min) / spacing;
    let whole = cells.round();
    if (cells - whole).abs() > SPACING_TOLERANCE * whole.max(1.0) {
        return Err(GeoError::InvalidGrid(format!(
            "range {}..{} is not a multiple of spacing {}", min, max, spacing)));
    }

    let nodes = match registration {
        Registration::Gridline => (0..=whole as usize).map(|i| min + i as f64 * spacing).collect(),
        Registration::Pixel => (0..whole as usize).map(|i| min + (i as f64 + 0.5) * spacing).collect(),
    };
    Ok(nodes)
}

/// Lower cell index and fractional offset of a coordinate along an axis
fn cell_position(axis: &[f64], value: f64) -> Option<(usize, f64)> {
    let (first, last) = (axis[0], axis[axis.len() - 1]);
    if !(value >= first && value <= last) {
        return None;
    }

    let position = (value - first) / axis_spacing(axis);
    let index = (position.floor() as usize).min(axis.len() - 2);
    Some((index, position - index as f64))
}
