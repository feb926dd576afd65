mod raster_tests;
mod xyz_tests;

use crate::grid::{Grid, Registration};

/// 3x3 grid over x in {-100, 0, 100}, y in {200, 300, 400} with values y²
pub fn dummy_grid() -> Grid {
    let x = vec![-100.0, 0.0, 100.0];
    let y = vec![200.0, 300.0, 400.0];
    let values = y.iter()
        .flat_map(|yv: &f64| x.iter().map(move |_| yv * yv))
        .collect();
    Grid::new("misfit", x.clone(), y.clone(), values, Registration::Gridline).unwrap()
}
