use tracing::debug;

use crate::config::{SamplingConfig, SegmentLookup};
use crate::error::{CurveError, Result};
use crate::point::Point;
use crate::segment::HermiteSegment;
use crate::tridiagonal::TridiagonalMatrix;

const MIN_POINTS: usize = 2;

#[derive(Debug, Clone, Copy, Default)]
struct SegmentCursor {
    index: usize,
    last_x: Option<f64>,
}

/// Cubic spline through a borrowed sequence of points.
///
/// The slope at every knot comes out of a tridiagonal system; each segment keeps two
/// Hermite coefficients `a` and `b`. Boundaries are natural unless a slope is given.
#[derive(Debug, Clone)]
pub struct CubicSpline<'a> {
    points: &'a [Point],
    a: Vec<f64>,
    b: Vec<f64>,
    cursor: SegmentCursor,
}

impl<'a> CubicSpline<'a> {
    /// Fits a spline through `points`, whose x values must be strictly increasing.
    /// `start_slope` and `end_slope` clamp the first derivative at the boundaries,
    /// `None` leaves the boundary natural.
    ///
    /// # Example
    /// ```
    /// use curve_kit::{CubicSpline, points_from_pairs};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let points = points_from_pairs(&[(0.0, 3.0), (1.0, 1.0), (2.0, 4.0)]);
    /// let spline = CubicSpline::fit(&points, Some(-3.0), Some(-2.0)).unwrap();
    ///
    /// assert_approx_eq!(2.344, spline.interpolate(0.2).unwrap(), 1e-9);
    /// assert_approx_eq!(-3.0, spline.derivative(0.0).unwrap(), 1e-9);
    /// ```
    /// # Errors
    /// - [CurveError::InvalidArgument] when a slope is not finite or x values are not strictly increasing,
    /// - [CurveError::InsufficientPoints] when there are fewer than 2 points.
    pub fn fit(points: &'a [Point], start_slope: Option<f64>, end_slope: Option<f64>) -> Result<Self> {
        let (a, b) = fit_coefficients(points, start_slope, end_slope)?;
        Ok(CubicSpline { points, a, b, cursor: SegmentCursor::default() })
    }

    /// Fit with both boundaries natural.
    pub fn natural(points: &'a [Point]) -> Result<Self> {
        Self::fit(points, None, None)
    }

    /// Replaces the fitted points, recomputing every coefficient and resetting the cursor.
    /// On error the previous fit is kept.
    pub fn refit(
        &mut self,
        points: &'a [Point],
        start_slope: Option<f64>,
        end_slope: Option<f64>,
    ) -> Result<()> {
        let (a, b) = fit_coefficients(points, start_slope, end_slope)?;
        self.points = points;
        self.a = a;
        self.b = b;
        self.reset_cursor();
        Ok(())
    }

    /// Samples `sample_count` evenly spaced points over the whole domain,
    /// from the first to the last knot inclusive.
    pub fn eval(&mut self, sample_count: usize) -> Result<Vec<Point>> {
        self.eval_with(&SamplingConfig::new(sample_count))
    }

    /// Same as [CubicSpline::eval], locating segments with the lookup chosen in `config`.
    pub fn eval_with(&mut self, config: &SamplingConfig) -> Result<Vec<Point>> {
        let sample_count = config.sample_count;
        debug!(sample_count, lookup = ?config.lookup, "evaluating cubic spline");

        self.reset_cursor();
        let (min_x, max_x) = self.domain();
        let mut samples = Vec::with_capacity(sample_count);
        if sample_count == 0 {
            return Ok(samples);
        }

        let step = if sample_count > 1 {
            (max_x - min_x) / (sample_count - 1) as f64
        } else {
            0.0
        };

        for i in 0..sample_count {
            let x = if sample_count > 1 && i == sample_count - 1 {
                max_x
            } else {
                min_x + step * i as f64
            };
            let y = match config.lookup {
                SegmentLookup::Bisect => self.interpolate(x)?,
                SegmentLookup::Sequential => self.sequential_interpolate(x)?,
            };
            samples.push(Point::new(x, y));
        }
        Ok(samples)
    }

    /// Value at `x`, located by binary search. Queries may come in any order.
    pub fn interpolate(&self, x: f64) -> Result<f64> {
        self.check_range(x)?;
        let index = self.find_segment_bisect(x);
        Ok(self.segment(index).evaluate(x))
    }

    /// Value at `x`, located by the advancing cursor. Within one pass queries must be
    /// non-decreasing; call [CubicSpline::reset_cursor] to start a new pass.
    pub fn sequential_interpolate(&mut self, x: f64) -> Result<f64> {
        self.check_range(x)?;
        let index = self.find_segment_sequential(x)?;
        Ok(self.segment(index).evaluate(x))
    }

    /// Values at every x of `xs`, in any order. Nothing is evaluated if one x is out of range.
    pub fn batch_interpolate(&self, xs: &[f64]) -> Result<Vec<f64>> {
        for x in xs {
            self.check_range(*x)?;
        }

        let mut results = Vec::with_capacity(xs.len());
        let mut index = 0;
        for x in xs {
            index = self.find_segment_with_hint(index, *x);
            results.push(self.segment(index).evaluate(*x));
        }
        Ok(results)
    }

    /// First derivative `dy/dx` at `x`. Adjacent segments share the slope at their common knot.
    pub fn derivative(&self, x: f64) -> Result<f64> {
        self.check_range(x)?;
        let index = self.find_segment_bisect(x);
        Ok(self.segment(index).derivative(x))
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = SegmentCursor::default();
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.points[0].get_x(), self.points[self.points.len() - 1].get_x())
    }

    pub fn points(&self) -> &'a [Point] {
        self.points
    }

    /// Per segment `(a, b)` coefficients, `points().len() - 1` of each.
    pub fn coefficients(&self) -> (&[f64], &[f64]) {
        (&self.a, &self.b)
    }

    fn segment(&self, index: usize) -> HermiteSegment<'_> {
        HermiteSegment::new(&self.points[index], &self.points[index + 1], self.a[index], self.b[index])
    }

    fn check_range(&self, x: f64) -> Result<()> {
        let (min, max) = self.domain();
        if min <= x && x <= max {
            Ok(())
        } else {
            Err(CurveError::OutOfRange { x, min, max })
        }
    }

    fn find_segment_bisect(&self, x: f64) -> usize {
        let mut min = 0;
        let mut max = self.points.len() - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if x < self.points[mid].get_x() {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    fn find_segment_sequential(&mut self, x: f64) -> Result<usize> {
        if let Some(previous) = self.cursor.last_x {
            if x < previous {
                return Err(CurveError::OutOfOrderQuery { x, previous });
            }
        }

        let last_segment = self.points.len() - 2;
        while self.cursor.index < last_segment && x > self.points[self.cursor.index + 1].get_x() {
            self.cursor.index += 1;
        }
        self.cursor.last_x = Some(x);
        Ok(self.cursor.index)
    }

    fn find_segment_with_hint(&self, index_hint: usize, x: f64) -> usize {
        if self.is_in_segment(index_hint, x) {
            index_hint
        } else if index_hint + 2 < self.points.len() && self.is_in_segment(index_hint + 1, x) {
            index_hint + 1
        } else {
            self.find_segment_bisect(x)
        }
    }

    fn is_in_segment(&self, index: usize, x: f64) -> bool {
        self.points[index].get_x() <= x && x <= self.points[index + 1].get_x()
    }
}

/// Fits a spline and samples it in one go.
///
/// # Example
/// ```
/// use curve_kit::{fit_and_eval, points_from_pairs};
///
/// let points = points_from_pairs(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
/// let curve = fit_and_eval(&points, 5, None, None).unwrap();
///
/// assert_eq!(5, curve.len());
/// assert_eq!(2.0, curve[4].get_x());
/// ```
pub fn fit_and_eval(
    points: &[Point],
    sample_count: usize,
    start_slope: Option<f64>,
    end_slope: Option<f64>,
) -> Result<Vec<Point>> {
    CubicSpline::fit(points, start_slope, end_slope)?.eval(sample_count)
}

/// Natural spline through `points`, sampled `sample_count` times.
pub fn calculate_spline(points: &[Point], sample_count: usize) -> Result<Vec<Point>> {
    fit_and_eval(points, sample_count, None, None)
}

fn fit_coefficients(
    points: &[Point],
    start_slope: Option<f64>,
    end_slope: Option<f64>,
) -> Result<(Vec<f64>, Vec<f64>)> {
    check_slope("start_slope", start_slope)?;
    check_slope("end_slope", end_slope)?;
    check_points(points)?;
    debug!(
        points = points.len(),
        clamped_start = start_slope.is_some(),
        clamped_end = end_slope.is_some(),
        "fitting cubic spline"
    );

    let (matrix, rhs) = build_slope_system(points, start_slope, end_slope)?;
    let slopes = matrix.solve(&rhs)?;

    let coefficients = points
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let (dx, dy) = pair[0].span_to(&pair[1]);
            (slopes[i] * dx - dy, -slopes[i + 1] * dx + dy)
        })
        .unzip();
    Ok(coefficients)
}

/// Tridiagonal system whose solution is the slope at every knot.
///
/// Interior rows make the second derivative continuous, each term weighted by the
/// reciprocal of its segment width. Boundary rows either pin the slope or make the
/// second derivative vanish.
fn build_slope_system(
    points: &[Point],
    start_slope: Option<f64>,
    end_slope: Option<f64>,
) -> Result<(TridiagonalMatrix, Vec<f64>)> {
    let n = points.len();
    let mut matrix = TridiagonalMatrix::new(n);
    let mut rhs = vec![0.0; n];

    match start_slope {
        Some(slope) => {
            matrix.set(0, 0, 1.0)?;
            rhs[0] = slope;
        }
        None => {
            let (dx, dy) = points[0].span_to(&points[1]);
            let sup = 1.0 / dx;
            matrix.set(0, 1, sup)?;
            matrix.set(0, 0, 2.0 * sup)?;
            rhs[0] = 3.0 * dy / (dx * dx);
        }
    }

    for i in 1..n - 1 {
        let (dx0, dy0) = points[i - 1].span_to(&points[i]);
        let (dx1, dy1) = points[i].span_to(&points[i + 1]);
        let sub = 1.0 / dx0;
        let sup = 1.0 / dx1;

        matrix.set(i, i - 1, sub)?;
        matrix.set(i, i + 1, sup)?;
        matrix.set(i, i, 2.0 * (sub + sup))?;
        rhs[i] = 3.0 * (dy0 / (dx0 * dx0) + dy1 / (dx1 * dx1));
    }

    match end_slope {
        Some(slope) => {
            matrix.set(n - 1, n - 1, 1.0)?;
            rhs[n - 1] = slope;
        }
        None => {
            let (dx, dy) = points[n - 2].span_to(&points[n - 1]);
            let sub = 1.0 / dx;
            matrix.set(n - 1, n - 2, sub)?;
            matrix.set(n - 1, n - 1, 2.0 * sub)?;
            rhs[n - 1] = 3.0 * dy / (dx * dx);
        }
    }

    Ok((matrix, rhs))
}

fn check_slope(name: &str, slope: Option<f64>) -> Result<()> {
    match slope {
        Some(value) if !value.is_finite() => Err(CurveError::InvalidArgument(format!(
            "{name} must be finite, got {value}"
        ))),
        _ => Ok(()),
    }
}

fn check_points(points: &[Point]) -> Result<()> {
    if points.len() < MIN_POINTS {
        return Err(CurveError::InsufficientPoints { got: points.len(), need: MIN_POINTS });
    }

    if let Some(index) = points
        .iter()
        .position(|p| !p.get_x().is_finite() || !p.get_y().is_finite())
    {
        return Err(CurveError::InvalidArgument(format!("point {index} is not finite")));
    }

    // negated comparison so that NaN spacing is rejected as well
    if let Some(index) = points.windows(2).position(|w| !(w[1].get_x() > w[0].get_x())) {
        return Err(CurveError::InvalidArgument(format!(
            "x values must be strictly increasing, violated at index {}",
            index + 1
        )));
    }
    Ok(())
}
