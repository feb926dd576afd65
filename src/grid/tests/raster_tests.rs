//! Tests for the grid type and grid info

use super::dummy_grid;
use crate::coordinate::Region;
use crate::errors::GeoError;
use crate::grid::{get_grid_info, Grid, Registration};

#[test]
fn test_get_grid_info() {
    let info = get_grid_info(&dummy_grid());

    assert_eq!(info.spacing, 100.0);
    assert_eq!(info.region.to_array(), [-100.0, 100.0, 200.0, 400.0]);
    assert_eq!(info.min, 40000.0);
    assert_eq!(info.max, 160000.0);
    assert_eq!(info.registration.code(), "g");
}

#[test]
fn test_pixel_registration_region_extends_half_cell() {
    let mut grid = dummy_grid();
    grid.toggle_registration();

    let info = get_grid_info(&grid);
    assert_eq!(info.registration, Registration::Pixel);
    assert_eq!(info.region.to_array(), [-150.0, 150.0, 150.0, 450.0]);
}

#[test]
fn test_new_rejects_bad_axes() {
    let bad_count = Grid::new("g", vec![0.0, 1.0], vec![0.0, 1.0], vec![1.0; 3], Registration::Gridline);
    assert!(matches!(bad_count, Err(GeoError::InvalidGrid(_))));

    let descending = Grid::new("g", vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0; 4], Registration::Gridline);
    assert!(descending.is_err());

    let uneven = Grid::new("g", vec![0.0, 1.0, 3.0], vec![0.0, 1.0], vec![1.0; 6], Registration::Gridline);
    assert!(uneven.is_err());
}

#[test]
fn test_from_region_node_layout() {
    let region = Region::from_bounds(0.0, 1000.0, -500.0, 0.0);

    let gridline = Grid::from_region("zero", &region, 250.0, Registration::Gridline, 0.0).unwrap();
    assert_eq!(gridline.shape(), (5, 3));
    assert_eq!(gridline.region(), region);

    let pixel = Grid::from_region("zero", &region, 250.0, Registration::Pixel, 1.0).unwrap();
    assert_eq!(pixel.shape(), (4, 2));
    assert_eq!(pixel.x()[0], 125.0);
    assert_eq!(pixel.region(), region);

    assert!(Grid::from_region("bad", &region, 300.0, Registration::Gridline, 0.0).is_err());
    assert!(Grid::from_region("bad", &region, 0.0, Registration::Gridline, 0.0).is_err());
}

#[test]
fn test_bilinear_sample() {
    let grid = dummy_grid();

    assert_eq!(grid.sample(0.0, 300.0), 90000.0);
    assert_eq!(grid.sample(100.0, 400.0), 160000.0);
    // Halfway between rows 200 and 300: (40000 + 90000) / 2
    assert_eq!(grid.sample(-50.0, 250.0), 65000.0);
    assert!(grid.sample(101.0, 300.0).is_nan());
    assert!(grid.sample(0.0, f64::NAN).is_nan());
}

#[test]
fn test_pixel_sample_covers_edge_cells() {
    let region = Region::from_bounds(0.0, 1000.0, 0.0, 1000.0);
    let flat = Grid::from_region("p", &region, 250.0, Registration::Pixel, 5.0).unwrap();
    assert_eq!(flat.region(), region);

    assert_eq!(flat.sample(50.0, 500.0), 5.0);
    assert_eq!(flat.sample(0.0, 0.0), 5.0);
    assert_eq!(flat.sample(1000.0, 1000.0), 5.0);
    assert!(flat.sample(1000.5, 500.0).is_nan());
    assert!(flat.sample(-0.5, 500.0).is_nan());

    // Beyond the outer nodes the edge values are held
    let mut grid = dummy_grid();
    grid.toggle_registration();
    assert_eq!(grid.sample(-150.0, 450.0), 160000.0);
    assert_eq!(grid.sample(0.0, 150.0), 40000.0);
    assert_eq!(grid.sample(0.0, 300.0), 90000.0);
}

#[test]
fn test_compare_requires_matching_axes() {
    let a = dummy_grid();
    let b = Grid::from_region("flat", &a.region(), 100.0, Registration::Gridline, 40000.0).unwrap();

    let diff = a.compare(&b).unwrap();
    assert_eq!(diff.name(), "misfit-flat");
    assert_eq!(diff.get(0, 0), Some(0.0));
    assert_eq!(diff.get(2, 2), Some(120000.0));

    let other = Grid::from_region("wide", &Region::from_bounds(0.0, 400.0, 0.0, 400.0), 100.0, Registration::Gridline, 0.0).unwrap();
    assert!(a.compare(&other).is_err());
}

#[test]
fn test_subset() {
    let grid = dummy_grid();
    let sub = grid.subset(&Region::from_bounds(-10.0, 100.0, 250.0, 400.0)).unwrap();

    assert_eq!(sub.x(), &[0.0, 100.0]);
    assert_eq!(sub.y(), &[300.0, 400.0]);
    assert_eq!(sub.get(1, 1), Some(160000.0));

    assert!(grid.subset(&Region::from_bounds(-10.0, 10.0, 200.0, 400.0)).is_err());
}

#[test]
fn test_detrend_removes_plane() {
    let x = vec![0.0, 10.0, 20.0, 30.0];
    let y = vec![0.0, 5.0, 10.0];
    let values: Vec<f64> = y.iter()
        .flat_map(|yv| x.iter().map(move |xv| 3.0 + 2.0 * xv - 0.5 * yv))
        .collect();
    let grid = Grid::new("plane", x, y, values, Registration::Gridline).unwrap();

    let (trend, residual) = grid.detrend().unwrap();
    assert_eq!(trend.name(), "plane_trend");
    for (t, v) in trend.values().iter().zip(grid.values()) {
        assert!((t - v).abs() < 1e-9);
    }
    assert!(residual.values().iter().all(|r| r.abs() < 1e-9));
}

#[test]
fn test_detrend_needs_data() {
    let grid = Grid::new("empty", vec![0.0, 1.0], vec![0.0, 1.0], vec![f64::NAN; 4], Registration::Gridline).unwrap();
    assert!(grid.detrend().is_err());
}
