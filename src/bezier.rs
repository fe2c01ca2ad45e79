//! Bezier curves over control points of any dimension.
//!
//! Control points are `nalgebra` column vectors, so the same functions serve
//! `Vector2<f64>` and `Vector3<f64>` alike.

use nalgebra::SVector;

use crate::error::{CurveError, Result};

/// Quadratic Bezier curve at parameter `t`.
pub fn quadratic<const D: usize>(
    t: f64,
    p0: &SVector<f64, D>,
    p1: &SVector<f64, D>,
    p2: &SVector<f64, D>,
) -> SVector<f64, D> {
    let u = 1.0 - t;
    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

/// Cubic Bezier curve at parameter `t`.
pub fn cubic<const D: usize>(
    t: f64,
    p0: &SVector<f64, D>,
    p1: &SVector<f64, D>,
    p2: &SVector<f64, D>,
    p3: &SVector<f64, D>,
) -> SVector<f64, D> {
    let u = 1.0 - t;
    let uu = u * u;
    let tt = t * t;
    p0 * (uu * u) + p1 * (3.0 * uu * t) + p2 * (3.0 * u * tt) + p3 * (tt * t)
}

/// Bezier curve of arbitrary degree at parameter `t`.
///
/// Three and four control points use the closed forms, any other count is reduced by
/// repeated linear interpolation (de Casteljau).
///
/// # Example
/// ```
/// use curve_kit::bezier;
/// use nalgebra::Vector2;
///
/// let points = vec![Vector2::new(0.0, 0.0), Vector2::new(1.0, 2.0), Vector2::new(2.0, 0.0)];
/// let middle = bezier::point(0.5, &points).unwrap();
///
/// assert!((middle - Vector2::new(1.0, 1.0)).norm() < 1e-12);
/// ```
pub fn point<const D: usize>(t: f64, points: &[SVector<f64, D>]) -> Result<SVector<f64, D>> {
    match points {
        [] => Err(CurveError::InsufficientPoints { got: 0, need: 1 }),
        [p0, p1, p2] => Ok(quadratic(t, p0, p1, p2)),
        [p0, p1, p2, p3] => Ok(cubic(t, p0, p1, p2, p3)),
        _ => Ok(de_casteljau(t, points)),
    }
}

fn de_casteljau<const D: usize>(t: f64, points: &[SVector<f64, D>]) -> SVector<f64, D> {
    let mut level = points.to_vec();
    while level.len() > 1 {
        level = level.windows(2).map(|pair| pair[0].lerp(&pair[1], t)).collect();
    }
    level[0]
}

/// Samples the curve at `t = i / split_count` for `i` in `0..=split_count`.
///
/// # Errors
/// [CurveError::InvalidArgument] when `split_count` is zero, [CurveError::InsufficientPoints]
/// when there are no control points.
pub fn line_points<const D: usize>(
    points: &[SVector<f64, D>],
    split_count: usize,
) -> Result<Vec<SVector<f64, D>>> {
    if split_count == 0 {
        return Err(CurveError::InvalidArgument("split_count must be positive".to_string()));
    }

    (0..=split_count)
        .map(|i| point(i as f64 / split_count as f64, points))
        .collect()
}
