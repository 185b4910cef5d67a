//! Uniform sampling of closed curves into rings and polylines.

use std::f64::consts::TAU;

use knot_core::{KnotError, Result};
use knot_math::Point3;

use crate::curve::Curve;

/// Parameters `t_i = 2π·i/resolution` for `i` in `0..=resolution`.
///
/// The last parameter repeats the first point of the closed curve.
pub fn ring_parameters(resolution: u32) -> Result<Vec<f64>> {
    if resolution == 0 {
        return Err(KnotError::InvalidResolution {
            resolution,
            radial_segments: 1,
        });
    }
    let n = f64::from(resolution);
    Ok((0..=resolution).map(|i| TAU * f64::from(i) / n).collect())
}

/// Sample a curve at `segments + 1` evenly spaced parameters across its domain.
pub fn curve_to_polyline(curve: &dyn Curve, segments: u32) -> Result<Vec<Point3>> {
    if segments == 0 {
        return Err(KnotError::InvalidResolution {
            resolution: segments,
            radial_segments: 1,
        });
    }
    let (t_min, t_max) = curve.domain();
    let n = f64::from(segments);
    Ok((0..=segments)
        .map(|i| curve.point_at(t_min + (t_max - t_min) * f64::from(i) / n))
        .collect())
}

/// Total length of a polyline.
pub fn polyline_length(points: &[Point3]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
