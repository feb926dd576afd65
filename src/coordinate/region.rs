//! Region structure for bounding-box arithmetic
//!
//! Regions follow the GMT ordering `(xmin, xmax, ymin, ymax)` used across the
//! Antarctic mapping toolchain, not the `(minx, miny, maxx, maxy)` ordering of
//! a GIS bounding box. [`Region::to_bounding_box`] converts between the two.

use std::fmt;
use serde::Serialize;

use super::point::Point;
use crate::errors::{GeoError, GeoResult};

/// A rectangular region in a projected or geographic coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Region {
    /// Minimum X coordinate
    pub xmin: f64,
    /// Maximum X coordinate
    pub xmax: f64,
    /// Minimum Y coordinate
    pub ymin: f64,
    /// Maximum Y coordinate
    pub ymax: f64,
}

impl Region {
    /// Create a new region, rejecting out-of-order or non-finite bounds
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> GeoResult<Self> {
        let region = Region { xmin, xmax, ymin, ymax };
        region.validate()?;
        Ok(region)
    }

    /// Create a region without validation, for compile-time constants
    pub const fn from_bounds(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Region { xmin, xmax, ymin, ymax }
    }

    /// Parse a region from a string (format: "xmin,xmax,ymin,ymax")
    pub fn from_string(region_str: &str) -> GeoResult<Self> {
        let parts: Vec<&str> = region_str.split(',').collect();
        if parts.len() != 4 {
            return Err(GeoError::ParseError(
                "Region must have 4 comma-separated values (xmin,xmax,ymin,ymax)".to_string()));
        }

        let mut bounds = [0.0; 4];
        for (i, (part, label)) in parts.iter().zip(["xmin", "xmax", "ymin", "ymax"]).enumerate() {
            bounds[i] = part.trim().parse::<f64>()
                .map_err(|_| GeoError::ParseError(format!("Invalid {} value: {}", label, part.trim())))?;
        }

        Region::new(bounds[0], bounds[1], bounds[2], bounds[3])
    }

    /// Check that the bounds are finite and ordered
    pub fn validate(&self) -> GeoResult<()> {
        let bounds = [self.xmin, self.xmax, self.ymin, self.ymax];
        if bounds.iter().any(|v| !v.is_finite()) {
            return Err(GeoError::InvalidRegion(format!("non-finite bounds in {}", self)));
        }
        if self.xmin > self.xmax {
            return Err(GeoError::InvalidRegion(format!("xmin {} > xmax {}", self.xmin, self.xmax)));
        }
        if self.ymin > self.ymax {
            return Err(GeoError::InvalidRegion(format!("ymin {} > ymax {}", self.ymin, self.ymax)));
        }
        Ok(())
    }

    /// Bounds as `[xmin, xmax, ymin, ymax]`
    pub fn to_array(&self) -> [f64; 4] {
        [self.xmin, self.xmax, self.ymin, self.ymax]
    }

    /// Bounds as a GIS bounding box `[xmin, ymin, xmax, ymax]`
    pub fn to_bounding_box(&self) -> [f64; 4] {
        [self.xmin, self.ymin, self.xmax, self.ymax]
    }

    /// Get the width of the region
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Get the height of the region
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Get the center point of the region
    pub fn center(&self) -> Point {
        Point::new(
            self.xmin + self.width() / 2.0,
            self.ymin + self.height() / 2.0,
        )
    }

    /// Check if a coordinate lies inside the region (bounds inclusive)
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.xmin && x <= self.xmax &&
            y >= self.ymin && y <= self.ymax
    }

    /// Corners in the order (xmin,ymin), (xmax,ymin), (xmin,ymax), (xmax,ymax)
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.xmin, self.ymin),
            Point::new(self.xmax, self.ymin),
            Point::new(self.xmin, self.ymax),
            Point::new(self.xmax, self.ymax),
        ]
    }

    /// Smallest region spanning a set of points
    pub fn from_points(points: &[Point]) -> GeoResult<Self> {
        if points.is_empty() {
            return Err(GeoError::InvalidRegion("cannot span an empty point set".to_string()));
        }

        let mut region = Region::from_bounds(f64::INFINITY, f64::NEG_INFINITY,
                                             f64::INFINITY, f64::NEG_INFINITY);
        for p in points.iter().filter(|p| p.x.is_finite() && p.y.is_finite()) {
            region.xmin = region.xmin.min(p.x);
            region.xmax = region.xmax.max(p.x);
            region.ymin = region.ymin.min(p.y);
            region.ymax = region.ymax.max(p.y);
        }

        region.validate()?;
        Ok(region)
    }

    /// Expand (or shrink, for negative distances) the region on all sides
    pub fn buffer(&self, distance: f64) -> GeoResult<Self> {
        Region::new(
            self.xmin - distance,
            self.xmax + distance,
            self.ymin - distance,
            self.ymax + distance,
        )
    }

    /// Zoom, shift and buffer the region
    ///
    /// `zoom` shrinks the x bounds by that many units on each side and the y
    /// bounds proportionally, so the aspect ratio is kept. `n_shift` is added
    /// to both y bounds and `w_shift` to both x bounds.
    ///
    /// # Returns
    /// A tuple of (altered region, altered region expanded by `buffer`)
    pub fn alter(&self, zoom: f64, n_shift: f64, w_shift: f64, buffer: f64) -> GeoResult<(Self, Self)> {
        let ratio = if self.width() > 0.0 { self.height() / self.width() } else { 1.0 };

        let region = Region::new(
            self.xmin + zoom + w_shift,
            self.xmax - zoom + w_shift,
            self.ymin + zoom * ratio + n_shift,
            self.ymax - zoom * ratio + n_shift,
        )?;
        let buffered = region.buffer(buffer)?;

        Ok((region, buffered))
    }

    /// Smallest region containing both regions
    pub fn union(&self, other: &Region) -> Region {
        Region::from_bounds(
            self.xmin.min(other.xmin),
            self.xmax.max(other.xmax),
            self.ymin.min(other.ymin),
            self.ymax.max(other.ymax),
        )
    }

    /// Overlapping part of two regions, or None if they are disjoint
    pub fn intersection(&self, other: &Region) -> Option<Region> {
        let candidate = Region::from_bounds(
            self.xmin.max(other.xmin),
            self.xmax.min(other.xmax),
            self.ymin.max(other.ymin),
            self.ymax.min(other.ymax),
        );
        candidate.validate().ok().map(|_| candidate)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}/{}", self.xmin, self.xmax, self.ymin, self.ymax)
    }
}
