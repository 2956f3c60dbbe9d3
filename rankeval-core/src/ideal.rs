//! Area under the best achievable recall curve.

use crate::error::MetricError;

/// Area under the ideal recall curve up to `k`.
///
/// The ideal curve rises linearly from `(0, 0)` to `(when_reaches_max, height)` and stays
/// flat at `height` afterwards: a ranking with every positive ahead of every negative
/// reaches full recall once `k` equals the positive count.
///
/// Up to the corner the area is a triangle similar to the full one, scaled by
/// `k / when_reaches_max`. Past the corner it is the full triangle plus a rectangle.
pub fn ideal_area(k: f64, when_reaches_max: f64, height: f64) -> Result<f64, MetricError> {
    if !when_reaches_max.is_finite() || when_reaches_max <= 0.0 {
        return Err(MetricError::invalid_parameter(format!(
            "when_reaches_max must be positive and finite, got {when_reaches_max}"
        )));
    }
    if !height.is_finite() || height < 0.0 {
        return Err(MetricError::invalid_parameter(format!(
            "height must be non-negative and finite, got {height}"
        )));
    }
    if !k.is_finite() || k < 0.0 {
        return Err(MetricError::invalid_parameter(format!(
            "k must be non-negative and finite, got {k}"
        )));
    }

    let triangle = when_reaches_max * height / 2.0;
    if k <= when_reaches_max {
        return Ok(triangle * (k / when_reaches_max).powi(2));
    }
    Ok(triangle + (k - when_reaches_max) * height)
}
