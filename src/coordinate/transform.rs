//! Coordinate transformation functionality
//!
//! Converts between geographic WGS84 coordinates and the Antarctic Polar
//! Stereographic projection (EPSG:3031): WGS84 ellipsoid, latitude of true
//! scale 71°S, central meridian 0°, no false easting or northing.

use std::f64::consts::FRAC_PI_2;
use std::f64::consts::FRAC_PI_4;
use log::debug;

use super::point::Point;
use super::region::Region;
use super::crs::CoordinateSystem;
use crate::errors::{GeoError, GeoResult};

/// Transformer for converting between coordinate systems
pub struct CoordinateTransformer;

impl CoordinateTransformer {
    /// WGS84 semi-major axis in meters
    const SEMI_MAJOR_AXIS: f64 = 6378137.0;
    /// WGS84 inverse flattening
    const INVERSE_FLATTENING: f64 = 298.257223563;
    /// Latitude of true scale for EPSG:3031, in degrees
    const STANDARD_PARALLEL: f64 = -71.0;

    const MAX_ITERATIONS: usize = 15;
    const CONVERGENCE: f64 = 1e-12;

    fn eccentricity() -> f64 {
        let f = 1.0 / Self::INVERSE_FLATTENING;
        (f * (2.0 - f)).sqrt()
    }

    /// Isometric-latitude term `t` for a southern latitude in radians
    fn t_south(phi: f64, e: f64) -> f64 {
        let es = e * phi.sin();
        (FRAC_PI_4 + phi / 2.0).tan() / ((1.0 + es) / (1.0 - es)).powf(e / 2.0)
    }

    /// Scale factor `a * m_c / t_c` at the standard parallel
    fn scale(e: f64) -> f64 {
        let phi_c = Self::STANDARD_PARALLEL.to_radians();
        let sin_c = phi_c.sin();
        let m_c = phi_c.cos() / (1.0 - e * e * sin_c * sin_c).sqrt();
        Self::SEMI_MAJOR_AXIS * m_c / Self::t_south(phi_c, e)
    }

    /// Convert WGS84 latitude/longitude in degrees to EPSG:3031 meters
    pub fn latlon_to_epsg3031(&self, lat: f64, lon: f64) -> Point {
        let e = Self::eccentricity();
        let phi = lat.to_radians();
        let lambda = lon.to_radians();

        let rho = Self::scale(e) * Self::t_south(phi, e);
        let point = Point::new(rho * lambda.sin(), rho * lambda.cos());

        debug!("Transformed WGS84 ({}, {}) to EPSG:3031 ({}, {})", lat, lon, point.x, point.y);
        point
    }

    /// Convert EPSG:3031 meters to WGS84 latitude/longitude in degrees
    ///
    /// # Returns
    /// A tuple of (latitude, longitude); the pole maps to (-90, 0)
    pub fn epsg3031_to_latlon(&self, x: f64, y: f64) -> (f64, f64) {
        let rho = x.hypot(y);
        if rho == 0.0 {
            return (-90.0, 0.0);
        }

        let e = Self::eccentricity();
        let t = rho / Self::scale(e);

        // Fixed-point iteration for the conformal latitude inverse
        let mut phi = FRAC_PI_2 - 2.0 * t.atan();
        for _ in 0..Self::MAX_ITERATIONS {
            let es = e * phi.sin();
            let next = FRAC_PI_2 - 2.0 * (t * ((1.0 - es) / (1.0 + es)).powf(e / 2.0)).atan();
            let converged = (next - phi).abs() < Self::CONVERGENCE;
            phi = next;
            if converged {
                break;
            }
        }

        let lat = -phi.to_degrees();
        let lon = x.atan2(y).to_degrees();

        debug!("Transformed EPSG:3031 ({}, {}) to WGS84 ({}, {})", x, y, lat, lon);
        (lat, lon)
    }

    /// Transform a point between coordinate systems
    ///
    /// Geographic points carry longitude in `x` and latitude in `y`.
    pub fn transform_point(&self, point: &Point, from_crs: &CoordinateSystem, to_crs: &CoordinateSystem) -> GeoResult<Point> {
        if from_crs == to_crs {
            return Ok(*point);
        }

        match (from_crs, to_crs) {
            (CoordinateSystem::WGS84, CoordinateSystem::AntarcticPolarStereographic) => {
                Ok(self.latlon_to_epsg3031(point.y, point.x))
            },
            (CoordinateSystem::AntarcticPolarStereographic, CoordinateSystem::WGS84) => {
                let (lat, lon) = self.epsg3031_to_latlon(point.x, point.y);
                Ok(Point::new(lon, lat))
            },
            _ => Err(GeoError::UnsupportedTransform(from_crs.epsg_code(), to_crs.epsg_code())),
        }
    }

    /// Transform a region between coordinate systems
    ///
    /// All four corners are transformed and the result spans them, since a
    /// rectangle in one system is not a rectangle in the other.
    pub fn transform_region(&self, region: &Region, from_crs: &CoordinateSystem, to_crs: &CoordinateSystem) -> GeoResult<Region> {
        if from_crs == to_crs {
            return Ok(*region);
        }

        let corners = region.corners()
            .iter()
            .map(|corner| self.transform_point(corner, from_crs, to_crs))
            .collect::<GeoResult<Vec<Point>>>()?;

        Region::from_points(&corners)
    }
}
