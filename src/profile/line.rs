//! Profile line construction

use log::{debug, info};

use crate::coordinate::Point;
use crate::errors::{GeoError, GeoResult};
use crate::table::PointTable;

/// Number of samples along a straight profile when none is given
pub const DEFAULT_NUM_POINTS: usize = 100;

/// How the profile path is defined
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileMethod {
    /// Straight line from `start` to `stop` with `num` evenly spaced samples
    Points { start: Point, stop: Point, num: usize },
    /// Path through `vertices`, optionally resampled to `num_points`
    /// evenly spaced samples
    Polyline { vertices: Vec<Point>, num_points: Option<usize> },
}

/// Build the sample points of a profile
///
/// # Returns
/// A table with `x`, `y` and `dist` (cumulative distance from the first
/// sample, in the same units as the coordinates)
pub fn create_profile(method: &ProfileMethod) -> GeoResult<PointTable> {
    let points = match method {
        ProfileMethod::Points { start, stop, num } => {
            if *num < 2 {
                return Err(GeoError::GenericError(format!("a profile needs at least 2 samples, got {}", num)));
            }
            debug!("Straight profile from ({}, {}) to ({}, {}) with {} samples",
                   start.x, start.y, stop.x, stop.y, num);
            linspace(start, stop, *num)
        },
        ProfileMethod::Polyline { vertices, num_points } => {
            if vertices.len() < 2 {
                return Err(GeoError::GenericError("a polyline profile needs at least 2 vertices".to_string()));
            }
            match num_points {
                Some(n) if *n < 2 => {
                    return Err(GeoError::GenericError(format!("a profile needs at least 2 samples, got {}", n)));
                },
                Some(n) => resample(vertices, *n),
                None => vertices.clone(),
            }
        },
    };

    let dist = cumulative_distance(&points);
    let mut table = PointTable::from_points(&points);
    table.set_column("dist", dist)?;

    info!("Created profile with {} samples", table.len());
    Ok(table)
}

/// Read polyline vertices from the `x`/`y` columns of a table
pub fn vertices_from_table(table: &PointTable) -> GeoResult<Vec<Point>> {
    let x = table.require_column("x")?;
    let y = table.require_column("y")?;
    Ok(x.iter().zip(y).map(|(x, y)| Point::new(*x, *y)).collect())
}

fn linspace(start: &Point, stop: &Point, num: usize) -> Vec<Point> {
    let last = (num - 1) as f64;
    (0..num)
        .map(|i| {
            let t = i as f64 / last;
            Point::new(start.x + (stop.x - start.x) * t, start.y + (stop.y - start.y) * t)
        })
        .collect()
}

fn cumulative_distance(points: &[Point]) -> Vec<f64> {
    let mut total = 0.0;
    let mut dist = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            total += points[i - 1].distance_to(p);
        }
        dist.push(total);
    }
    dist
}

/// Evenly spaced samples along a polyline, by distance
fn resample(vertices: &[Point], num: usize) -> Vec<Point> {
    let along = cumulative_distance(vertices);
    let total = along[along.len() - 1];

    let mut segment = 0;
    (0..num)
        .map(|i| {
            let target = total * i as f64 / (num - 1) as f64;
            while segment < vertices.len() - 2 && along[segment + 1] < target {
                segment += 1;
            }

            let length = along[segment + 1] - along[segment];
            let t = if length > 0.0 { (target - along[segment]) / length } else { 0.0 };
            let (a, b) = (&vertices[segment], &vertices[segment + 1]);
            Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_profile() {
        let method = ProfileMethod::Points {
            start: Point::new(-1200e3, -1400e3),
            stop: Point::new(1000e3, 1400e3),
            num: 5,
        };
        let profile = create_profile(&method).unwrap();

        assert_eq!(profile.column_names(), vec!["x", "y", "dist"]);
        assert_eq!(profile.column("x").unwrap(), &[-1200e3, -650e3, -100e3, 450e3, 1000e3]);

        let dist = profile.column("dist").unwrap();
        assert_eq!(dist[0], 0.0);
        let total = (2200e3f64).hypot(2800e3);
        assert!((dist[4] - total).abs() < 1e-6);
    }

    #[test]
    fn test_points_profile_needs_two_samples() {
        let method = ProfileMethod::Points { start: Point::new(0.0, 0.0), stop: Point::new(1.0, 1.0), num: 1 };
        assert!(create_profile(&method).is_err());
    }

    #[test]
    fn test_polyline_keeps_vertices() {
        let vertices = vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(3.0, 10.0)];
        let profile = create_profile(&ProfileMethod::Polyline { vertices, num_points: None }).unwrap();
        assert_eq!(profile.column("dist").unwrap(), &[0.0, 5.0, 11.0]);
    }

    #[test]
    fn test_polyline_resampling_is_even() {
        let vertices = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)];
        let profile = create_profile(&ProfileMethod::Polyline { vertices, num_points: Some(5) }).unwrap();

        assert_eq!(profile.column("x").unwrap(), &[0.0, 5.0, 10.0, 10.0, 10.0]);
        assert_eq!(profile.column("y").unwrap(), &[0.0, 0.0, 0.0, 5.0, 10.0]);
        assert_eq!(profile.column("dist").unwrap(), &[0.0, 5.0, 10.0, 15.0, 20.0]);
    }

    #[test]
    fn test_vertices_from_table() {
        let table = PointTable::from_columns(vec![("x", vec![1.0, 2.0]), ("y", vec![3.0, 4.0])]).unwrap();
        assert_eq!(vertices_from_table(&table).unwrap(), vec![Point::new(1.0, 3.0), Point::new(2.0, 4.0)]);
    }
}
