extern crate curve_kit;

use curve_kit::{points_from_pairs, CubicSpline};

fn main() {

    let points = points_from_pairs(&[
        (0.0, 1.0),
        (1.0, -1.0),
        (2.0, 0.0),
        (4.0, 3.0),
        (5.0, 1.0),
        (6.0, 1.0),
    ]);

    let mut spline = CubicSpline::fit(&points, Some(0.0), Some(-1.0)).unwrap();
    let curve = spline.eval(61).unwrap();

    println!("x;y;dy");
    for point in curve {
        let slope = spline.derivative(point.get_x()).unwrap();
        println!("{:.2};{:.2};{:.2}", point.get_x(), point.get_y(), slope);
    }
}
