//! Discretization of parametric curves into point chains.
//!
//! Angles are degrees at this interface. Sample counts for angle-driven
//! curves are `round(|stop - start| / resolution) + 1`, so both endpoints are
//! always hit exactly. A zero-length range still yields two (coincident)
//! endpoints; whether that is acceptable is up to the caller.

use crate::error::{Result, ShapeError};
use crate::geometry::PointChain;

use super::Point2;

const SAMPLER: &str = "curve sampler";

/// Largest number of samples a single curve may request.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Number of samples covering an angular or linear range at the given resolution.
///
/// Ties round to even, so `2.5` steps give 3 samples and `3.5` give 5.
///
/// # Errors
///
/// Returns `ShapeError::InvalidParameter` if `resolution` is not a positive
/// finite number, `range` is not finite, or the count would exceed
/// [`MAX_SAMPLES`].
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn sample_count(range: f64, resolution: f64) -> Result<usize> {
    if !(resolution.is_finite() && resolution > 0.0) {
        return Err(ShapeError::InvalidParameter {
            shape: SAMPLER,
            parameter: "resolution",
            value: resolution,
            requirement: "must be > 0",
        }
        .into());
    }
    if !range.is_finite() {
        return Err(ShapeError::InvalidParameter {
            shape: SAMPLER,
            parameter: "range",
            value: range,
            requirement: "must be finite",
        }
        .into());
    }
    let steps = (range.abs() / resolution).round_ties_even();
    if steps >= MAX_SAMPLES as f64 {
        return Err(ShapeError::InvalidParameter {
            shape: SAMPLER,
            parameter: "resolution",
            value: resolution,
            requirement: "is too fine for the sampled range",
        }
        .into());
    }
    Ok((steps as usize + 1).max(2))
}

/// `n` evenly spaced values from `start` to `stop` inclusive.
///
/// The last value is exactly `stop`. `n` below 2 is treated as 2.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    let n = n.max(2);
    let step = (stop - start) / (n - 1) as f64;
    (0..n)
        .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
        .collect()
}

/// Angles in radians from `theta_start` to `theta_stop` (degrees) at the given resolution.
///
/// # Errors
///
/// Same as [`sample_count`].
pub fn sample_angles(theta_start: f64, theta_stop: f64, resolution: f64) -> Result<Vec<f64>> {
    let n = sample_count(theta_stop - theta_start, resolution)?;
    Ok(linspace(theta_start.to_radians(), theta_stop.to_radians(), n))
}

/// Samples an origin-centered circular arc.
///
/// A zero radius is accepted and yields coincident points at the origin.
///
/// # Errors
///
/// Returns an error if the resolution is invalid.
pub fn sample_arc(
    radius: f64,
    theta_start: f64,
    theta_stop: f64,
    resolution: f64,
) -> Result<PointChain> {
    sample_ellipse_arc(radius, radius, theta_start, theta_stop, resolution)
}

/// Samples an origin-centered, axis-aligned elliptical arc `(a cos t, b sin t)`.
///
/// # Errors
///
/// Returns an error if the resolution is invalid.
pub fn sample_ellipse_arc(
    a: f64,
    b: f64,
    theta_start: f64,
    theta_stop: f64,
    resolution: f64,
) -> Result<PointChain> {
    let points = sample_angles(theta_start, theta_stop, resolution)?
        .into_iter()
        .map(|t| Point2::new(a * t.cos(), b * t.sin()))
        .collect();
    PointChain::new(points)
}

/// Width of the power-law taper profile at position `x`.
///
/// `w(x) = alpha * (length - x)^m + w2` with `alpha = (w1 - w2) / length^m`,
/// so `w(0) = w1` and `w(length) = w2`.
#[must_use]
pub fn power_taper_width(w1: f64, w2: f64, length: f64, m: f64, x: f64) -> f64 {
    let alpha = (w1 - w2) / length.powf(m);
    alpha * (length - x).powf(m) + w2
}

/// Samples the upper and lower edges of a power-law taper lying along +x.
///
/// Both chains run from `x = 0` to `x = length` and are symmetric about the
/// x axis; the i-th points of each share the same `x`.
///
/// # Errors
///
/// Returns `ShapeError::InvalidParameter` if `length` is not positive or
/// `n_points` is below 2.
#[allow(clippy::cast_precision_loss)]
pub fn sample_power_taper(
    w1: f64,
    w2: f64,
    length: f64,
    m: f64,
    n_points: usize,
) -> Result<(PointChain, PointChain)> {
    if length.is_nan() || length <= 0.0 {
        return Err(ShapeError::InvalidParameter {
            shape: SAMPLER,
            parameter: "length",
            value: length,
            requirement: "must be > 0",
        }
        .into());
    }
    if n_points < 2 {
        return Err(ShapeError::InvalidParameter {
            shape: SAMPLER,
            parameter: "n_points",
            value: n_points as f64,
            requirement: "must be >= 2",
        }
        .into());
    }

    let (upper, lower): (Vec<_>, Vec<_>) = linspace(0.0, length, n_points)
        .into_iter()
        .map(|x| {
            let half = power_taper_width(w1, w2, length, m, x) / 2.0;
            (Point2::new(x, half), Point2::new(x, -half))
        })
        .unzip();
    Ok((PointChain::new(upper)?, PointChain::new(lower)?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::PointSet;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sample_count_includes_both_endpoints() {
        assert_eq!(sample_count(90.0, 2.5).unwrap(), 37);
        assert_eq!(sample_count(-90.0, 2.5).unwrap(), 37);
        assert_eq!(sample_count(1.0, 1.0).unwrap(), 2);
    }

    #[test]
    fn sample_count_rounds_half_to_even() {
        assert_eq!(sample_count(2.5, 1.0).unwrap(), 3);
        assert_eq!(sample_count(3.5, 1.0).unwrap(), 5);
    }

    #[test]
    fn zero_range_still_has_two_points() {
        assert_eq!(sample_count(0.0, 1.0).unwrap(), 2);
        let chain = sample_arc(5.0, 30.0, 30.0, 1.0).unwrap();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.first(), chain.last());
    }

    #[test]
    fn invalid_resolution_is_rejected() {
        assert!(sample_count(90.0, 0.0).is_err());
        assert!(sample_count(90.0, -1.0).is_err());
        assert!(sample_count(90.0, f64::NAN).is_err());
        assert!(sample_arc(1.0, 0.0, 90.0, 0.0).is_err());
    }

    #[test]
    fn excessive_sample_count_is_rejected() {
        assert!(sample_count(90.0, 1e-300).is_err());
        assert!(sample_arc(10.0, 0.0, 90.0, 1e-300).is_err());
        assert_eq!(sample_count(360.0, 0.001).unwrap(), 360_001);
    }

    #[test]
    fn linspace_hits_stop_exactly() {
        let v = linspace(0.0, 0.3, 4);
        assert_eq!(v.len(), 4);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[3], 0.3);
        assert_abs_diff_eq!(v[1], 0.1, epsilon = 1e-15);
    }

    #[test]
    fn arc_points_lie_on_circle() {
        let chain = sample_arc(10.0, 0.0, 90.0, 2.5).unwrap();
        assert_eq!(chain.len(), 37);
        for p in chain.points() {
            assert_abs_diff_eq!(p.coords.norm(), 10.0, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(chain.first().x, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(chain.last().y, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(chain.last().x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn descending_arc_runs_backwards() {
        let chain = sample_arc(1.0, 90.0, 0.0, 45.0).unwrap();
        assert_eq!(chain.len(), 3);
        assert_abs_diff_eq!(chain.first().y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(chain.last().x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn ellipse_arc_axes() {
        let chain = sample_ellipse_arc(3.0, 2.0, 0.0, 180.0, 90.0).unwrap();
        let pts = chain.points();
        assert_eq!(pts.len(), 3);
        assert_abs_diff_eq!(pts[0].x, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[1].y, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[2].x, -3.0, epsilon = 1e-12);
    }

    #[test]
    fn power_taper_endpoints() {
        let (upper, lower) = sample_power_taper(1.0, 2.0, 10.0, 2.0, 50).unwrap();
        assert_eq!(upper.len(), 50);
        assert_eq!(lower.len(), 50);
        assert_abs_diff_eq!(upper.first().y, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(upper.last().y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(lower.last().y, -1.0, epsilon = 1e-12);
        for (u, l) in upper.points().iter().zip(lower.points()) {
            assert_eq!(u.x, l.x);
            assert_abs_diff_eq!(u.y, -l.y, epsilon = 1e-15);
        }
    }

    #[test]
    fn power_taper_with_unit_exponent_is_linear() {
        let (w1, w2, length) = (1.5, 4.0, 12.0);
        let (upper, _) = sample_power_taper(w1, w2, length, 1.0, 31).unwrap();
        for p in upper.points() {
            let linear = w1 + (w2 - w1) * p.x / length;
            assert_abs_diff_eq!(2.0 * p.y, linear, epsilon = 1e-12);
        }
    }

    #[test]
    fn power_taper_rejects_bad_inputs() {
        assert!(sample_power_taper(1.0, 2.0, 0.0, 2.0, 10).is_err());
        assert!(sample_power_taper(1.0, 2.0, 10.0, 2.0, 1).is_err());
    }
}
