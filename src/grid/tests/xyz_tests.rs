//! Tests for XYZ grid I/O

use super::dummy_grid;
use crate::grid::{Grid, Registration};
use crate::table::PointTable;

#[test]
fn test_xyz_round_trip() {
    let grid = dummy_grid();
    let mut buffer = Vec::new();
    grid.write_xyz(&mut buffer).unwrap();

    let text = String::from_utf8(buffer.clone()).unwrap();
    assert_eq!(text.lines().next(), Some("-100 200 40000"));
    assert_eq!(text.lines().count(), 9);

    let parsed = Grid::from_xyz_reader(buffer.as_slice(), "misfit", Registration::Gridline).unwrap();
    assert_eq!(parsed, grid);
}

#[test]
fn test_xyz_header_comments_and_gaps() {
    let text = "# bed elevation\nx,y,bed\n0,0,1\n10,0,2\n0,10,3\n";
    let grid = Grid::from_xyz_reader(text.as_bytes(), "bed", Registration::Gridline).unwrap();

    assert_eq!(grid.shape(), (2, 2));
    assert_eq!(grid.get(1, 0), Some(2.0));
    assert!(grid.get(1, 1).unwrap().is_nan());
}

#[test]
fn test_xyz_rejects_garbage_after_data() {
    let text = "0 0 1\n1 0 2\nfoo bar baz\n";
    assert!(Grid::from_xyz_reader(text.as_bytes(), "g", Registration::Gridline).is_err());
    assert!(Grid::from_xyz_reader("0 0\n".as_bytes(), "g", Registration::Gridline).is_err());
}

#[test]
fn test_from_table_unordered_rows() {
    let table = PointTable::from_columns(vec![
        ("x", vec![5.0, 0.0, 5.0, 0.0]),
        ("y", vec![5.0, 5.0, 0.0, 0.0]),
        ("z", vec![4.0, 3.0, 2.0, 1.0]),
    ]).unwrap();

    let grid = Grid::from_table(&table, "z", Registration::Pixel).unwrap();
    assert_eq!(grid.values(), &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(grid.registration(), Registration::Pixel);
}

#[test]
fn test_read_xyz_names_grid_after_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("surface.xyz");
    dummy_grid().save_xyz(&path).unwrap();

    let grid = Grid::read_xyz(&path, Registration::Gridline).unwrap();
    assert_eq!(grid.name(), "surface");
    assert_eq!(grid.values(), dummy_grid().values());
}
