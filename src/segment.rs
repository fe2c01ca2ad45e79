use crate::point::Point;

/// One piece of a fitted spline in Hermite form, spanning `start..=end`.
///
/// `a` and `b` are derived from the knot slopes `k0`, `k1`:
/// `a = k0 * dx - dy`, `b = -k1 * dx + dy`.
pub(crate) struct HermiteSegment<'a> {
    start: &'a Point,
    end: &'a Point,
    a: f64,
    b: f64,
}

impl<'a> HermiteSegment<'a> {
    pub fn new(start: &'a Point, end: &'a Point, a: f64, b: f64) -> Self {
        HermiteSegment { start, end, a, b }
    }

    fn local_parameter(&self, x: f64) -> (f64, f64) {
        let dx = self.end.get_x() - self.start.get_x();
        ((x - self.start.get_x()) / dx, dx)
    }

    /// `y = (1 - t) y0 + t y1 + t (1 - t) (a (1 - t) + b t)`
    pub fn evaluate(&self, x: f64) -> f64 {
        let (t, _) = self.local_parameter(x);
        let u = 1.0 - t;
        u * self.start.get_y() + t * self.end.get_y() + t * u * (self.a * u + self.b * t)
    }

    pub fn derivative(&self, x: f64) -> f64 {
        let (t, dx) = self.local_parameter(x);
        let u = 1.0 - t;
        let dy = self.end.get_y() - self.start.get_y();
        let dy_dt = dy + (u - t) * (self.a * u + self.b * t) + t * u * (self.b - self.a);
        dy_dt / dx
    }
}
