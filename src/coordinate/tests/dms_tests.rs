//! Tests for DMS formatting

use crate::coordinate::{dd2dms, dms2dd};

#[test]
fn test_dd2dms() {
    assert_eq!(dd2dms(130.25), "130:15:0.0");
    assert_eq!(dd2dms(0.0), "0:0:0.0");
    assert_eq!(dd2dms(-0.5), "-0:30:0.0");
    assert!(dd2dms(-154.41148685868356).starts_with("-154:24:41.352691"));
}

#[test]
fn test_dms2dd() {
    assert_eq!(dms2dd("130:15:0.0").unwrap(), 130.25);
    assert_eq!(dms2dd("-0:30").unwrap(), -0.5);
    assert_eq!(dms2dd(" 12 ").unwrap(), 12.0);

    let dd = dms2dd(&dd2dms(-75.58304705929056)).unwrap();
    assert!((dd + 75.58304705929056).abs() < 1e-12);
}

#[test]
fn test_dms2dd_rejects_malformed() {
    assert!(dms2dd("12:xx:3").is_err());
    assert!(dms2dd("12:75:0").is_err());
    assert!(dms2dd("").is_err());
}
