//! Degree-minute-second formatting and parsing

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{GeoError, GeoResult};

lazy_static! {
    static ref DMS_PATTERN: Regex = Regex::new(
        r"^\s*(-)?(\d+(?:\.\d*)?)(?::(\d+(?:\.\d*)?))?(?::(\d+(?:\.\d*)?))?\s*$"
    ).expect("DMS pattern is a valid regex");
}

/// Format decimal degrees as a "D:M:S" string
///
/// Degrees and minutes are whole numbers, seconds keep full precision and
/// always show a fractional part, e.g. `130.25` becomes `"130:15:0.0"`.
/// Negative values get a single leading minus sign.
pub fn dd2dms(dd: f64) -> String {
    let sign = if dd < 0.0 { "-" } else { "" };

    let total_seconds = dd.abs() * 3600.0;
    let seconds = total_seconds % 60.0;
    let total_minutes = ((total_seconds - seconds) / 60.0).round();
    let minutes = total_minutes % 60.0;
    let degrees = ((total_minutes - minutes) / 60.0).round();

    format!("{}{}:{}:{:?}", sign, degrees as i64, minutes as i64, seconds)
}

/// Parse a "D:M:S", "D:M" or "D" string into decimal degrees
pub fn dms2dd(dms: &str) -> GeoResult<f64> {
    let caps = DMS_PATTERN.captures(dms)
        .ok_or_else(|| GeoError::ParseError(format!("Invalid DMS string: '{}'", dms)))?;

    let part = |i: usize| -> GeoResult<f64> {
        match caps.get(i) {
            Some(m) => m.as_str().parse::<f64>()
                .map_err(|_| GeoError::ParseError(format!("Invalid DMS component: '{}'", m.as_str()))),
            None => Ok(0.0),
        }
    };

    let (degrees, minutes, seconds) = (part(2)?, part(3)?, part(4)?);
    if minutes >= 60.0 || seconds >= 60.0 {
        return Err(GeoError::ParseError(format!("Minutes and seconds must be below 60: '{}'", dms)));
    }

    let dd = degrees + minutes / 60.0 + seconds / 3600.0;
    Ok(if caps.get(1).is_some() { -dd } else { dd })
}
