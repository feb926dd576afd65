//! Table-level coordinate conversions and region helpers
//!
//! These functions work on [`PointTable`]s using the column names `x`/`y` for
//! EPSG:3031 meters and `lat`/`lon` for WGS84 degrees.

use log::{debug, info};

use crate::coordinate::{dd2dms, CoordinateTransformer, Point, Region};
use crate::errors::GeoResult;
use crate::table::PointTable;

/// Corners of a region as a table with `x` and `y` columns
///
/// Row order is (xmin,ymin), (xmax,ymin), (xmin,ymax), (xmax,ymax).
pub fn region_to_table(region: &Region) -> PointTable {
    PointTable::from_points(&region.corners())
}

/// Region spanning the `x` and `y` columns of a table
pub fn table_to_region(table: &PointTable) -> GeoResult<Region> {
    let points = table_points(table, "x", "y")?;
    Region::from_points(&points)
}

/// Region as a GIS bounding box `[xmin, ymin, xmax, ymax]`
pub fn region_to_bounding_box(region: &Region) -> [f64; 4] {
    region.to_bounding_box()
}

/// Geographic extent of an EPSG:3031 region
///
/// # Returns
/// `[lon_min, lon_max, lat_min, lat_max]` over the four projected corners
pub fn region_xy_to_ll(region: &Region) -> GeoResult<[f64; 4]> {
    epsg3031_to_latlon_region(&region_to_table(region))
}

/// Geographic extent of an EPSG:3031 region as "D:M:S" strings
pub fn region_xy_to_ll_dms(region: &Region) -> GeoResult<[String; 4]> {
    let ll = region_xy_to_ll(region)?;
    Ok(ll.map(dd2dms))
}

/// Add EPSG:3031 `x` and `y` columns computed from `lat` and `lon`
pub fn latlon_to_epsg3031(table: &PointTable) -> GeoResult<PointTable> {
    let transformer = CoordinateTransformer;
    let lat = table.require_column("lat")?;
    let lon = table.require_column("lon")?;

    let projected: Vec<Point> = lat.iter()
        .zip(lon)
        .map(|(lat, lon)| transformer.latlon_to_epsg3031(*lat, *lon))
        .collect();

    let mut out = table.clone();
    out.set_column("x", projected.iter().map(|p| p.x).collect())?;
    out.set_column("y", projected.iter().map(|p| p.y).collect())?;

    info!("Projected {} points to EPSG:3031", out.len());
    Ok(out)
}

/// Region spanning the projected positions of the `lat`/`lon` columns
pub fn latlon_to_epsg3031_region(table: &PointTable) -> GeoResult<Region> {
    let projected = latlon_to_epsg3031(table)?;
    table_to_region(&projected)
}

/// Add WGS84 `lat` and `lon` columns computed from `x` and `y`
pub fn epsg3031_to_latlon(table: &PointTable) -> GeoResult<PointTable> {
    let transformer = CoordinateTransformer;
    let (lat, lon): (Vec<f64>, Vec<f64>) = table_points(table, "x", "y")?
        .iter()
        .map(|p| transformer.epsg3031_to_latlon(p.x, p.y))
        .unzip();

    let mut out = table.clone();
    out.set_column("lat", lat)?;
    out.set_column("lon", lon)?;

    info!("Converted {} EPSG:3031 points to latitude/longitude", out.len());
    Ok(out)
}

/// Geographic extent of the `x`/`y` columns
///
/// # Returns
/// `[lon_min, lon_max, lat_min, lat_max]`
pub fn epsg3031_to_latlon_region(table: &PointTable) -> GeoResult<[f64; 4]> {
    let geographic = epsg3031_to_latlon(table)?;
    let region = Region::from_points(&table_points(&geographic, "lon", "lat")?)?;

    debug!("Geographic extent: {}", region);
    Ok(region.to_array())
}

/// Rows of the table whose `x`/`y` fall inside the region
///
/// With `reverse` set, the rows outside the region are returned instead.
/// Region bounds are inclusive.
pub fn points_inside_region(table: &PointTable, region: &Region, reverse: bool) -> GeoResult<PointTable> {
    let mask: Vec<bool> = table_points(table, "x", "y")?
        .iter()
        .map(|p| region.contains(p.x, p.y) != reverse)
        .collect();

    let kept = table.filter(&mask)?;
    debug!("{} of {} points {} region {}", kept.len(), table.len(),
           if reverse { "outside" } else { "inside" }, region);
    Ok(kept)
}

fn table_points(table: &PointTable, x_name: &str, y_name: &str) -> GeoResult<Vec<Point>> {
    let x = table.require_column(x_name)?;
    let y = table.require_column(y_name)?;
    Ok(x.iter().zip(y).map(|(x, y)| Point::new(*x, *y)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GeoError;
    use crate::regions::ROSS_ICE_SHELF;

    fn ross_latlon() -> PointTable {
        PointTable::from_columns(vec![
            ("lat", vec![-75.583047, -76.296586, -83.129754, -84.82147]),
            ("lon", vec![-154.411487, 161.686184, -114.507405, 123.407825]),
        ]).unwrap()
    }

    #[test]
    fn test_region_to_table_corner_order() {
        let table = region_to_table(&ROSS_ICE_SHELF);
        assert_eq!(table.column("x").unwrap(), &[-680000.0, 470000.0, -680000.0, 470000.0]);
        assert_eq!(table.column("y").unwrap(), &[-1420000.0, -1420000.0, -310000.0, -310000.0]);
        assert_eq!(table_to_region(&table).unwrap(), ROSS_ICE_SHELF);
    }

    #[test]
    fn test_region_to_bounding_box() {
        assert_eq!(region_to_bounding_box(&ROSS_ICE_SHELF), [-680000.0, -1420000.0, 470000.0, -310000.0]);
    }

    #[test]
    fn test_region_xy_to_ll() {
        let ll = region_xy_to_ll(&ROSS_ICE_SHELF).unwrap();
        let expected = [-154.41148685868356, 161.6861837228464, -84.8214723538547, -75.58304705929056];
        for (got, want) in ll.iter().zip(expected) {
            assert!((got - want).abs() < 1e-8, "{} vs {}", got, want);
        }

        let dms = region_xy_to_ll_dms(&ROSS_ICE_SHELF).unwrap();
        assert!(dms[0].starts_with("-154:24:41.35"));
        assert!(dms[1].starts_with("161:41:10.26"));
        assert!(dms[2].starts_with("-84:49:17.30"));
        assert!(dms[3].starts_with("-75:34:58.96"));
    }

    #[test]
    fn test_latlon_to_epsg3031() {
        let projected = latlon_to_epsg3031(&ross_latlon()).unwrap();
        let corners = region_to_table(&ROSS_ICE_SHELF);

        for (got, want) in projected.column("x").unwrap().iter().zip(corners.column("x").unwrap()) {
            assert!((got - want).abs() < 1.0, "x {} vs {}", got, want);
        }
        for (got, want) in projected.column("y").unwrap().iter().zip(corners.column("y").unwrap()) {
            assert!((got - want).abs() < 1.0, "y {} vs {}", got, want);
        }
        assert_eq!(projected.column_names(), vec!["lat", "lon", "x", "y"]);
    }

    #[test]
    fn test_latlon_to_epsg3031_region() {
        let region = latlon_to_epsg3031_region(&ross_latlon()).unwrap();
        for (got, want) in region.to_array().iter().zip(ROSS_ICE_SHELF.to_array()) {
            assert!((got - want).abs() < 10.0);
        }
    }

    #[test]
    fn test_epsg3031_to_latlon() {
        let geographic = epsg3031_to_latlon(&region_to_table(&ROSS_ICE_SHELF)).unwrap();
        let expected = ross_latlon();

        assert_eq!(geographic.column_names(), vec!["x", "y", "lat", "lon"]);
        for name in ["lat", "lon"] {
            for (got, want) in geographic.column(name).unwrap().iter().zip(expected.column(name).unwrap()) {
                assert!((got - want).abs() < 1e-5, "{} {} vs {}", name, got, want);
            }
        }
    }

    #[test]
    fn test_epsg3031_to_latlon_region() {
        let reg = epsg3031_to_latlon_region(&region_to_table(&ROSS_ICE_SHELF)).unwrap();
        for (got, want) in reg.iter().zip([-154.41, 161.69, -84.82, -75.58]) {
            assert!((got - want).abs() < 0.01);
        }
    }

    #[test]
    fn test_points_inside_region() {
        let table = PointTable::from_columns(vec![
            ("x", vec![-50e3, 0.0]),
            ("y", vec![-1000e3, 0.0]),
        ]).unwrap();

        let inside = points_inside_region(&table, &ROSS_ICE_SHELF, false).unwrap();
        assert_eq!(inside.len(), 1);
        assert_eq!(inside.column("x").unwrap()[0], -50e3);

        let outside = points_inside_region(&table, &ROSS_ICE_SHELF, true).unwrap();
        assert_eq!(outside.len(), 1);
        assert_eq!(outside.column("x").unwrap()[0], 0.0);
    }

    #[test]
    fn test_missing_columns_are_errors() {
        let table = PointTable::from_columns(vec![("easting", vec![1.0])]).unwrap();
        assert!(matches!(epsg3031_to_latlon(&table), Err(GeoError::MissingColumn(_))));
        assert!(matches!(latlon_to_epsg3031(&table), Err(GeoError::MissingColumn(_))));
    }
}
