//! Trapezoidal-rule integration over sampled curves.

use crate::error::MetricError;

/// Area under the piecewise-linear curve through `(x[i], y[i])`.
///
/// `x` must be monotonic. A decreasing `x` yields the same positive area as the
/// reversed curve.
pub fn trapezoid(x: &[f64], y: &[f64]) -> Result<f64, MetricError> {
    if x.len() != y.len() {
        return Err(MetricError::shape_mismatch(x.len(), y.len()));
    }
    if x.len() < 2 {
        return Err(MetricError::InsufficientPoints { points: x.len() });
    }

    let steps: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let direction = if steps.iter().all(|&dx| dx >= 0.0) {
        1.0
    } else if steps.iter().all(|&dx| dx <= 0.0) {
        -1.0
    } else {
        return Err(MetricError::invalid_parameter(
            "x must be monotonic to integrate",
        ));
    };

    let area: f64 = steps
        .iter()
        .zip(y.windows(2))
        .map(|(dx, w)| dx * (w[0] + w[1]) / 2.0)
        .sum();
    Ok(direction * area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_curve() {
        let area = trapezoid(&[0.0, 1.0, 2.0, 3.0], &[1.0, 1.0, 1.0, 1.0]).unwrap();
        assert!((area - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_recall_curve() {
        let area = trapezoid(&[0.0, 1.0, 2.0, 3.0], &[0.5, 0.5, 1.0, 1.0]).unwrap();
        assert!((area - 2.25).abs() < 1e-12);
    }

    #[test]
    fn test_uneven_spacing() {
        let area = trapezoid(&[0.0, 0.5, 2.0], &[0.0, 1.0, 1.0]).unwrap();
        assert!((area - 1.75).abs() < 1e-12);
    }

    #[test]
    fn test_decreasing_x_gives_positive_area() {
        let area = trapezoid(&[3.0, 2.0, 1.0, 0.0], &[1.0, 1.0, 0.5, 0.5]).unwrap();
        assert!((area - 2.25).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_non_monotonic_x() {
        assert!(matches!(
            trapezoid(&[0.0, 2.0, 1.0], &[0.0, 1.0, 1.0]),
            Err(MetricError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_single_point() {
        assert_eq!(
            trapezoid(&[0.0], &[1.0]).unwrap_err(),
            MetricError::InsufficientPoints { points: 1 }
        );
    }

    #[test]
    fn test_rejects_mismatched_lengths() {
        assert_eq!(
            trapezoid(&[0.0, 1.0], &[1.0]).unwrap_err(),
            MetricError::shape_mismatch(2, 1)
        );
    }
}
