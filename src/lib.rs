pub mod errors;
pub mod coordinate;
pub mod regions;
pub mod stats;
pub mod table;
pub mod convert;
pub mod grid;
pub mod profile;
pub mod fetch;
pub mod utils;
pub mod commands;

pub use errors::{GeoError, GeoResult};
pub use coordinate::{Point, Region, CoordinateTransformer, CoordinateSystem, dd2dms, dms2dd};
pub use table::PointTable;
pub use grid::{Grid, GridInfo, Registration, get_grid_info};
pub use profile::{create_profile, sample_grids, ProfileMethod};
pub use fetch::Fetcher;
