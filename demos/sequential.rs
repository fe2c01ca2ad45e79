extern crate curve_kit;

use curve_kit::{points_from_pairs, CubicSpline};

fn main() {

    let points = points_from_pairs(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 2.0)]);
    let mut spline = CubicSpline::natural(&points).unwrap();

    let (x_min, x_max) = spline.domain();
    let number_of_steps = 30;

    println!("x;y");
    for i in 0..=number_of_steps {
        let x = x_min + (x_max - x_min) * i as f64 / number_of_steps as f64;
        println!("{:.2};{:.2}", x, spline.sequential_interpolate(x).unwrap());
    }

    // going back requires a new pass
    if let Err(error) = spline.sequential_interpolate(1.0) {
        eprintln!("{error}");
    }
    spline.reset_cursor();
    println!("{:.2};{:.2}", 1.0, spline.sequential_interpolate(1.0).unwrap());
}
