extern crate curve_kit;

use curve_kit::{fit_and_eval, points_from_pairs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let points = points_from_pairs(&[
        (0.0, 1.0),
        (1.0, -1.0),
        (2.0, 0.0),
        (4.0, 3.0),
        (5.0, 1.0),
        (6.0, 1.0),
    ]);

    let curve = fit_and_eval(&points, 61, None, None).unwrap();

    println!("x;y");
    for point in curve {
        println!("{:.2};{:.2}", point.get_x(), point.get_y());
    }
}
