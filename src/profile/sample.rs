//! Sampling grids along a profile

use log::{debug, info};

use crate::errors::{GeoError, GeoResult};
use crate::grid::Grid;
use crate::table::PointTable;

/// Add a column named `name` holding the grid sampled at each `x`/`y`
///
/// Samples outside the grid are NaN.
pub fn sample_grids(table: &PointTable, grid: &Grid, name: &str) -> GeoResult<PointTable> {
    let values = sample_column(table, grid)?;
    let missing = values.iter().filter(|v| v.is_nan()).count();
    if missing > 0 {
        debug!("{} of {} samples of '{}' are NaN", missing, values.len(), name);
    }

    let mut out = table.clone();
    out.set_column(name, values)?;
    Ok(out)
}

/// Sample an ordered stack of layers, top to bottom
///
/// Each layer becomes a column named after its grid. With `fill_gaps` set, a
/// NaN sample takes the value of the layer above it, so that for example a
/// missing ice base collapses onto the surface.
pub fn sample_layers(table: &PointTable, layers: &[Grid], fill_gaps: bool) -> GeoResult<PointTable> {
    let mut out = table.clone();
    let mut above: Option<Vec<f64>> = None;

    for layer in layers {
        if table.has_column(layer.name()) {
            return Err(GeoError::GenericError(format!(
                "layer name '{}' clashes with an existing column", layer.name())));
        }

        let mut values = sample_column(table, layer)?;
        if let (true, Some(previous)) = (fill_gaps, above.as_ref()) {
            for (v, p) in values.iter_mut().zip(previous) {
                if v.is_nan() {
                    *v = *p;
                }
            }
        }

        out.set_column(layer.name(), values.clone())?;
        above = Some(values);
    }

    info!("Sampled {} layers along {} profile points", layers.len(), table.len());
    Ok(out)
}

/// Keep rows whose `dist` lies within `[min_dist, max_dist]`
///
/// Either bound may be omitted.
pub fn clip_distance(table: &PointTable, min_dist: Option<f64>, max_dist: Option<f64>) -> GeoResult<PointTable> {
    let dist = table.require_column("dist")?;
    let min = min_dist.unwrap_or(f64::NEG_INFINITY);
    let max = max_dist.unwrap_or(f64::INFINITY);
    if min > max {
        return Err(GeoError::GenericError(format!("min_dist {} exceeds max_dist {}", min, max)));
    }

    let mask: Vec<bool> = dist.iter().map(|d| *d >= min && *d <= max).collect();
    table.filter(&mask)
}

fn sample_column(table: &PointTable, grid: &Grid) -> GeoResult<Vec<f64>> {
    let x = table.require_column("x")?;
    let y = table.require_column("y")?;
    Ok(x.iter().zip(y).map(|(x, y)| grid.sample(*x, *y)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::{Point, Region};
    use crate::grid::Registration;
    use crate::profile::{create_profile, ProfileMethod};

    fn profile() -> PointTable {
        create_profile(&ProfileMethod::Points {
            start: Point::new(0.0, 50.0),
            stop: Point::new(300.0, 50.0),
            num: 4,
        }).unwrap()
    }

    fn layer(name: &str, fill: f64, region: Region) -> Grid {
        Grid::from_region(name, &region, 100.0, Registration::Gridline, fill).unwrap()
    }

    #[test]
    fn test_sample_grids_adds_column() {
        let grid = layer("surface", 250.0, Region::from_bounds(0.0, 300.0, 0.0, 100.0));
        let sampled = sample_grids(&profile(), &grid, "surface").unwrap();

        assert_eq!(sampled.column_names(), vec!["x", "y", "dist", "surface"]);
        assert_eq!(sampled.column("surface").unwrap(), &[250.0; 4]);
    }

    #[test]
    fn test_sample_layers_fills_gaps_from_above() {
        let surface = layer("surface", 100.0, Region::from_bounds(0.0, 300.0, 0.0, 100.0));
        // Ice base only covers the first two samples
        let icebase = layer("icebase", -200.0, Region::from_bounds(0.0, 100.0, 0.0, 100.0));
        let bed = layer("bed", -800.0, Region::from_bounds(0.0, 300.0, 0.0, 100.0));
        let layers = vec![surface, icebase, bed];

        let raw = sample_layers(&profile(), &layers, false).unwrap();
        let icebase_raw = raw.column("icebase").unwrap();
        assert_eq!(&icebase_raw[..2], &[-200.0, -200.0]);
        assert!(icebase_raw[2].is_nan() && icebase_raw[3].is_nan());

        let filled = sample_layers(&profile(), &layers, true).unwrap();
        assert_eq!(filled.column("icebase").unwrap(), &[-200.0, -200.0, 100.0, 100.0]);
        assert_eq!(filled.column("bed").unwrap(), &[-800.0; 4]);
    }

    #[test]
    fn test_clip_distance() {
        let clipped = clip_distance(&profile(), Some(50.0), Some(200.0)).unwrap();
        assert_eq!(clipped.column("dist").unwrap(), &[100.0, 200.0]);

        let open = clip_distance(&profile(), None, Some(100.0)).unwrap();
        assert_eq!(open.len(), 2);

        assert!(clip_distance(&profile(), Some(10.0), Some(5.0)).is_err());
    }
}
