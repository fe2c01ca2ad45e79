//! Evenly spaced slots centred on zero, e.g. for laying out items in a row.

use nalgebra::Vector3;

use crate::error::{CurveError, Result};

fn first_position(count: usize, interval: f64) -> f64 {
    -interval * (count as f64 - 1.0) / 2.0
}

/// `count` positions `interval` apart, symmetric around zero.
///
/// # Example
/// ```
/// use curve_kit::layout::layout_positions;
///
/// assert_eq!(vec![-1.0, 0.0, 1.0], layout_positions(3, 1.0));
/// assert_eq!(vec![-1.5, -0.5, 0.5, 1.5], layout_positions(4, 1.0));
/// ```
pub fn layout_positions(count: usize, interval: f64) -> Vec<f64> {
    let mut positions = vec![0.0; count];
    fill_layout_positions(&mut positions, interval);
    positions
}

/// Same as [layout_positions], writing one position per element of `positions`.
pub fn fill_layout_positions(positions: &mut [f64], interval: f64) {
    let mut position = first_position(positions.len(), interval);
    for slot in positions.iter_mut() {
        *slot = position;
        position += interval;
    }
}

/// Index of the slot containing `coord` in a layout of `layout_count` slots.
/// Coordinates outside of the layout give indices below zero or past the last slot.
/// A zero or non-finite `interval` and a non-finite `coord` are rejected.
pub fn layout_index(coord: f64, layout_count: usize, interval: f64) -> Result<i64> {
    if interval == 0.0 || !interval.is_finite() {
        return Err(CurveError::InvalidArgument(format!(
            "interval must be finite and nonzero, got {interval}"
        )));
    }
    if !coord.is_finite() {
        return Err(CurveError::InvalidArgument(format!("coord must be finite, got {coord}")));
    }

    let start = first_position(layout_count, interval);
    Ok(((coord - start) / interval).floor() as i64)
}

/// Distance between two points projected onto the XZ plane.
pub fn distance_xz(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    let mut difference = a - b;
    difference.y = 0.0;
    difference.norm()
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn odd_count() {
        assert_eq!(vec![-4.0, -2.0, 0.0, 2.0, 4.0], layout_positions(5, 2.0));
    }

    #[test]
    fn even_count() {
        assert_eq!(vec![-0.25, 0.25], layout_positions(2, 0.5));
    }

    #[test]
    fn empty_and_single() {
        assert!(layout_positions(0, 1.0).is_empty());
        assert_eq!(vec![0.0], layout_positions(1, 3.0));
    }

    #[test]
    fn positions_are_symmetric() {
        for count in 1..10 {
            let positions = layout_positions(count, 1.3);
            for i in 0..count {
                assert_approx_eq!(positions[i], -positions[count - 1 - i], 1e-12);
            }
        }
    }

    #[test]
    fn fill_slice() {
        let mut positions = [9.0; 3];
        fill_layout_positions(&mut positions, 1.5);

        assert_eq!([-1.5, 0.0, 1.5], positions);
    }

    #[test]
    fn index_of_positions() {
        let interval = 2.0;
        let positions = layout_positions(4, interval);

        for (i, position) in positions.iter().enumerate() {
            assert_eq!(i as i64, layout_index(*position, 4, interval).unwrap());
            assert_eq!(i as i64, layout_index(*position + 0.5 * interval, 4, interval).unwrap());
        }
        assert_eq!(-1, layout_index(positions[0] - 0.5, 4, interval).unwrap());
        assert_eq!(4, layout_index(positions[3] + interval, 4, interval).unwrap());
    }

    #[test]
    fn index_rejects_zero_interval() {
        assert!(matches!(layout_index(1.0, 3, 0.0), Err(CurveError::InvalidArgument(_))));
        assert!(layout_index(1.0, 3, f64::NAN).is_err());
    }

    #[test]
    fn index_rejects_non_finite_coord() {
        assert!(matches!(layout_index(f64::NAN, 3, 1.0), Err(CurveError::InvalidArgument(_))));
        assert!(matches!(layout_index(f64::INFINITY, 3, 1.0), Err(CurveError::InvalidArgument(_))));
        assert!(matches!(
            layout_index(f64::NEG_INFINITY, 3, 1.0),
            Err(CurveError::InvalidArgument(_))
        ));
    }

    #[test]
    fn planar_distance() {
        let a = Vector3::new(0.0, 10.0, 0.0);
        let b = Vector3::new(3.0, -5.0, 4.0);

        assert_approx_eq!(distance_xz(&a, &b), 5.0, 1e-12);
    }
}
