//! Profile sampling helpers
//!
//! Builds cross-section lines in EPSG:3031 and samples grids along them. The
//! resulting tables carry `x`, `y`, `dist` and one column per sampled layer,
//! ready for an external plotting tool.

mod line;
mod sample;

pub use self::line::{create_profile, vertices_from_table, ProfileMethod, DEFAULT_NUM_POINTS};
pub use self::sample::{clip_distance, sample_grids, sample_layers};
