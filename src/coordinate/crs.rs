//! Coordinate Reference System handling

use crate::errors::{GeoError, GeoResult};

/// Identifier for the coordinate systems the crate knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSystem {
    /// WGS 84 geographic (EPSG:4326)
    WGS84,
    /// Antarctic Polar Stereographic (EPSG:3031)
    AntarcticPolarStereographic,
    /// Other EPSG code
    Other(u32),
}

impl CoordinateSystem {
    /// Get the EPSG code for this coordinate system
    pub fn epsg_code(&self) -> u32 {
        match self {
            CoordinateSystem::WGS84 => 4326,
            CoordinateSystem::AntarcticPolarStereographic => 3031,
            CoordinateSystem::Other(code) => *code,
        }
    }

    /// Get a description of this coordinate system
    pub fn description(&self) -> String {
        match self {
            CoordinateSystem::WGS84 => "WGS 84 (EPSG:4326)".to_string(),
            CoordinateSystem::AntarcticPolarStereographic => {
                "WGS 84 / Antarctic Polar Stereographic (EPSG:3031)".to_string()
            },
            CoordinateSystem::Other(code) => format!("EPSG:{}", code),
        }
    }

    /// Whether coordinates are angular (degrees) rather than metres
    pub fn is_geographic(&self) -> bool {
        matches!(self, CoordinateSystem::WGS84)
    }
}

/// Factory for creating coordinate systems
pub struct CoordinateSystemFactory;

impl CoordinateSystemFactory {
    /// Create a coordinate system from an EPSG code
    pub fn from_epsg(epsg: u32) -> CoordinateSystem {
        match epsg {
            4326 => CoordinateSystem::WGS84,
            3031 => CoordinateSystem::AntarcticPolarStereographic,
            _ => CoordinateSystem::Other(epsg),
        }
    }

    /// Parse a coordinate system from a string (e.g. "EPSG:3031" or "3031")
    pub fn from_string(crs_str: &str) -> GeoResult<CoordinateSystem> {
        let crs_str = crs_str.trim().to_uppercase();
        let code = crs_str.strip_prefix("EPSG:").unwrap_or(&crs_str);

        code.parse::<u32>()
            .map(Self::from_epsg)
            .map_err(|_| GeoError::ParseError(format!("Unsupported CRS format: {}", crs_str)))
    }
}
