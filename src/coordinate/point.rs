//! Point structure for representing coordinates

/// A point in a coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate (easting in EPSG:3031, longitude in geographic systems)
    pub x: f64,
    /// Y coordinate (northing in EPSG:3031, latitude in geographic systems)
    pub y: f64,
}

impl Point {
    /// Create a new 2D point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Parse a point from "x,y"
    pub fn from_string(point_str: &str) -> Result<Self, String> {
        let parts: Vec<&str> = point_str.split(',').collect();
        if parts.len() != 2 {
            return Err(format!("Point must be in format 'x,y', got '{}'", point_str));
        }

        let x = parts[0].trim().parse::<f64>()
            .map_err(|_| format!("Invalid x value: {}", parts[0].trim()))?;
        let y = parts[1].trim().parse::<f64>()
            .map_err(|_| format!("Invalid y value: {}", parts[1].trim()))?;

        Ok(Point::new(x, y))
    }

    /// Euclidean distance to another point in the same planar system
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}
