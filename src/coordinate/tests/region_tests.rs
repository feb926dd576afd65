//! Tests for region arithmetic

use crate::coordinate::{Point, Region};
use crate::errors::GeoError;

#[test]
fn test_region_rejects_inverted_bounds() {
    assert!(matches!(Region::new(10.0, -10.0, 0.0, 1.0), Err(GeoError::InvalidRegion(_))));
    assert!(matches!(Region::new(0.0, 1.0, 5.0, 4.0), Err(GeoError::InvalidRegion(_))));
    assert!(Region::new(0.0, 0.0, 0.0, 0.0).is_ok());
}

#[test]
fn test_region_from_string() {
    let region = Region::from_string("-680000, 470000, -1420000, -310000").unwrap();
    assert_eq!(region.to_array(), [-680000.0, 470000.0, -1420000.0, -310000.0]);

    assert!(Region::from_string("1,2,3").is_err());
    assert!(Region::from_string("1,2,x,4").is_err());
}

#[test]
fn test_bounding_box_order() {
    let region = Region::from_bounds(-680000.0, 470000.0, -1420000.0, -310000.0);
    assert_eq!(region.to_bounding_box(), [-680000.0, -1420000.0, 470000.0, -310000.0]);
}

#[test]
fn test_contains_is_inclusive() {
    let region = Region::from_bounds(0.0, 10.0, 0.0, 5.0);
    assert!(region.contains(0.0, 0.0));
    assert!(region.contains(10.0, 5.0));
    assert!(region.contains(3.0, 2.0));
    assert!(!region.contains(10.1, 2.0));
    assert!(!region.contains(f64::NAN, 2.0));
}

#[test]
fn test_from_points_spans_all_points() {
    let points = [Point::new(3.0, -1.0), Point::new(-2.0, 4.0), Point::new(1.0, 1.0)];
    let region = Region::from_points(&points).unwrap();
    assert_eq!(region, Region::from_bounds(-2.0, 3.0, -1.0, 4.0));
    assert!(Region::from_points(&[]).is_err());
}

#[test]
fn test_alter_keeps_aspect_ratio() {
    let region = Region::from_bounds(0.0, 100.0, 0.0, 50.0);
    let (zoomed, buffered) = region.alter(10.0, 5.0, -20.0, 2.0).unwrap();

    assert_eq!(zoomed, Region::from_bounds(-10.0, 70.0, 10.0, 50.0));
    assert_eq!(buffered, Region::from_bounds(-12.0, 72.0, 8.0, 52.0));
    assert!((zoomed.height() / zoomed.width() - 0.5).abs() < 1e-12);
}

#[test]
fn test_alter_rejects_over_zoom() {
    let region = Region::from_bounds(0.0, 100.0, 0.0, 100.0);
    assert!(region.alter(60.0, 0.0, 0.0, 0.0).is_err());
}

#[test]
fn test_union_and_intersection() {
    let a = Region::from_bounds(0.0, 10.0, 0.0, 10.0);
    let b = Region::from_bounds(5.0, 15.0, -5.0, 5.0);
    let c = Region::from_bounds(20.0, 30.0, 20.0, 30.0);

    assert_eq!(a.union(&b), Region::from_bounds(0.0, 15.0, -5.0, 10.0));
    assert_eq!(a.intersection(&b), Some(Region::from_bounds(5.0, 10.0, 0.0, 5.0)));
    assert_eq!(a.intersection(&c), None);
}
