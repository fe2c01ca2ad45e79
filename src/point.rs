use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Point represents a knot of the curve: a plain `(x, y)` pair.
/// When a sequence of points is fitted with [crate::CubicSpline] the x values
/// have to be strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// # Example
    /// ```
    /// use curve_kit::Point;
    ///
    /// let point = Point::new(1.0, 2.5);
    /// assert_eq!(1.0, point.get_x());
    /// assert_eq!(2.5, point.get_y());
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn get_x(&self) -> f64 {
        self.x
    }

    pub fn get_y(&self) -> f64 {
        self.y
    }

    /// Componentwise difference `other - self`, i.e. the `(dx, dy)` span of a segment.
    pub(crate) fn span_to(&self, other: &Point) -> (f64, f64) {
        (other.x - self.x, other.y - self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(vector: Vector2<f64>) -> Self {
        Point { x: vector.x, y: vector.y }
    }
}

impl From<Point> for Vector2<f64> {
    fn from(point: Point) -> Self {
        Vector2::new(point.x, point.y)
    }
}

/// Builds a point vector from `(x, y)` tuples.
///
/// # Example
/// ```
/// use curve_kit::points_from_pairs;
///
/// let points = points_from_pairs(&[(0.0, 0.0), (1.0, 1.0)]);
/// assert_eq!(2, points.len());
/// ```
pub fn points_from_pairs(pairs: &[(f64, f64)]) -> Vec<Point> {
    pairs.iter().copied().map(Point::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let point = Point::new(1.0, -2.5);

        assert_eq!(1.0, point.x);
        assert_eq!(-2.5, point.y);
    }

    #[test]
    fn test_span_to() {
        let p0 = Point::new(1.0, 2.0);
        let p1 = Point::new(3.5, 1.0);

        assert_eq!((2.5, -1.0), p0.span_to(&p1));
    }

    #[test]
    fn test_vector_conversion() {
        let vector = Vector2::new(0.5, 4.0);
        let point = Point::from(vector);

        assert_eq!(0.5, point.get_x());
        assert_eq!(4.0, point.get_y());
        assert_eq!(vector, Vector2::from(point));
    }

    #[test]
    fn test_tuple_conversion() {
        let point: Point = (2.0, 3.0).into();
        let pair: (f64, f64) = point.into();

        assert_eq!((2.0, 3.0), pair);
    }

    #[test]
    fn test_points_from_pairs() {
        let points = points_from_pairs(&[(0.0, 1.0), (2.0, 3.0)]);

        assert_eq!(vec![Point::new(0.0, 1.0), Point::new(2.0, 3.0)], points);
    }
}
