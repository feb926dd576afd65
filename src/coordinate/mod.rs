//! Coordinate handling for Antarctic geospatial data
//!
//! This module provides points, regions, coordinate systems and the
//! EPSG:3031 ⇄ WGS84 transformation.

mod point;
mod region;
mod transform;
mod crs;
mod dms;

#[cfg(test)]
mod tests;

// Re-export key types
pub use self::point::Point;
pub use self::region::Region;
pub use self::transform::CoordinateTransformer;
pub use self::crs::{CoordinateSystem, CoordinateSystemFactory};
pub use self::dms::{dd2dms, dms2dd};
