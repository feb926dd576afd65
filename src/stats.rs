//! NaN-aware statistics helpers

use crate::errors::{GeoError, GeoResult};

fn finite(data: &[f64]) -> impl Iterator<Item = f64> + '_ {
    data.iter().copied().filter(|v| !v.is_nan())
}

/// Root mean square of the values, ignoring NaN
///
/// Returns NaN when there are no values to average.
pub fn rmse(data: &[f64]) -> f64 {
    let (sum, count) = finite(data).fold((0.0, 0usize), |(s, n), v| (s + v * v, n + 1));
    if count == 0 {
        return f64::NAN;
    }
    (sum / count as f64).sqrt()
}

/// Mean of the values, ignoring NaN
pub fn nan_mean(data: &[f64]) -> f64 {
    let (sum, count) = finite(data).fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        return f64::NAN;
    }
    sum / count as f64
}

/// Minimum of the values, ignoring NaN
pub fn nan_min(data: &[f64]) -> f64 {
    finite(data).fold(f64::NAN, f64::min)
}

/// Maximum of the values, ignoring NaN
pub fn nan_max(data: &[f64]) -> f64 {
    finite(data).fold(f64::NAN, f64::max)
}

/// Median of the values, ignoring NaN
pub fn nan_median(data: &[f64]) -> f64 {
    let mut values: Vec<f64> = finite(data).collect();
    if values.is_empty() {
        return f64::NAN;
    }
    values.sort_by(f64::total_cmp);

    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

/// Minimum and maximum of the values, ignoring NaN
pub fn get_min_max(data: &[f64]) -> GeoResult<(f64, f64)> {
    let (min, max) = (nan_min(data), nan_max(data));
    if min.is_nan() || max.is_nan() {
        return Err(GeoError::GenericError("no non-NaN values to take the range of".to_string()));
    }
    Ok((min, max))
}
