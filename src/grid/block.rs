//! Block reduction of scattered points

use std::collections::BTreeMap;
use log::info;

use crate::coordinate::Region;
use crate::errors::{GeoError, GeoResult};
use crate::stats;
use crate::table::PointTable;

/// How the values inside one block are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    Median,
    Mean,
}

impl Reduction {
    fn apply(&self, values: &[f64]) -> f64 {
        match self {
            Reduction::Median => stats::nan_median(values),
            Reduction::Mean => stats::nan_mean(values),
        }
    }
}

/// Reduce scattered points to one value per block
///
/// The region is split into square blocks of `spacing`; points outside the
/// region are dropped and points on the upper bounds fall into the last
/// block. Each non-empty block yields one row at the block centre.
///
/// # Returns
/// A table with `x`, `y` and the reduced `value_column`
pub fn block_reduce(table: &PointTable, value_column: &str, spacing: f64, region: &Region, reduction: Reduction) -> GeoResult<PointTable> {
    if !(spacing > 0.0) {
        return Err(GeoError::GenericError(format!("block spacing must be positive, got {}", spacing)));
    }
    region.validate()?;

    let xs = table.require_column("x")?;
    let ys = table.require_column("y")?;
    let zs = table.require_column(value_column)?;

    let ncols = ((region.width() / spacing).ceil() as usize).max(1);
    let nrows = ((region.height() / spacing).ceil() as usize).max(1);

    let mut blocks: BTreeMap<(usize, usize), Vec<f64>> = BTreeMap::new();
    for ((x, y), z) in xs.iter().zip(ys).zip(zs) {
        if !region.contains(*x, *y) || z.is_nan() {
            continue;
        }
        let col = (((x - region.xmin) / spacing) as usize).min(ncols - 1);
        let row = (((y - region.ymin) / spacing) as usize).min(nrows - 1);
        blocks.entry((row, col)).or_default().push(*z);
    }

    let mut out_x = Vec::with_capacity(blocks.len());
    let mut out_y = Vec::with_capacity(blocks.len());
    let mut out_z = Vec::with_capacity(blocks.len());
    for ((row, col), values) in &blocks {
        out_x.push(region.xmin + (*col as f64 + 0.5) * spacing);
        out_y.push(region.ymin + (*row as f64 + 0.5) * spacing);
        out_z.push(reduction.apply(values));
    }

    info!("Reduced {} points to {} blocks of {}", table.len(), blocks.len(), spacing);
    PointTable::from_columns(vec![("x", out_x), ("y", out_y), (value_column, out_z)])
}
