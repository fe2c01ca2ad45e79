//! Curve utilities independent of any engine or rendering context.
//!
//! The core is a cubic spline whose knot slopes are obtained from a tridiagonal
//! system solved with the Thomas algorithm. Boundaries are natural by default or
//! clamped to a given slope. Next to it live Bezier curves, symmetric layout
//! spacing and a small JSON array wrapper.
//!
//! # Example
//! ```
//! use curve_kit::{CubicSpline, Point};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)];
//! let mut spline = CubicSpline::natural(&points).unwrap();
//!
//! assert_approx_eq!(1.0, spline.interpolate(1.0).unwrap(), 1e-12);
//! assert_approx_eq!(0.6875, spline.interpolate(0.5).unwrap(), 1e-12);
//!
//! let curve = spline.eval(11).unwrap();
//! assert_eq!(11, curve.len());
//! ```

mod config;
mod error;
mod point;
mod segment;
mod spline;
mod tridiagonal;

pub mod bezier;
pub mod json;
pub mod layout;

pub use config::{SamplingConfig, SegmentLookup, DEFAULT_SAMPLE_COUNT};
pub use error::{CurveError, Result};
pub use point::{points_from_pairs, Point};
pub use spline::{calculate_spline, fit_and_eval, CubicSpline};
pub use tridiagonal::TridiagonalMatrix;
