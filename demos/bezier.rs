extern crate curve_kit;

use curve_kit::bezier;
use nalgebra::Vector2;

fn main() {

    let control_points = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 3.0),
        Vector2::new(3.0, -2.0),
        Vector2::new(4.0, 2.0),
        Vector2::new(6.0, 0.0),
    ];

    let line = bezier::line_points(&control_points, 50).unwrap();

    println!("x;y");
    for point in line {
        println!("{:.2};{:.2}", point.x, point.y);
    }
}
