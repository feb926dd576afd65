//! Grids with coordinate axes
//!
//! This module provides the in-memory raster type used for grid metadata,
//! profile sampling and simple grid arithmetic, plus plain-text XYZ I/O and
//! block reduction of scattered points.

mod raster;
mod info;
mod xyz;
mod block;

#[cfg(test)]
mod tests;

pub use self::raster::Grid;
pub use self::info::{get_grid_info, GridInfo, Registration};
pub use self::block::{block_reduce, Reduction};
