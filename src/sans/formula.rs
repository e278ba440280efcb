//! Great-circle distance between two points on a sphere.

use core::f64::consts::PI;

/// Mean radius of the Earth in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Compute the haversine distance between `(x0, y0)` and `(x1, y1)`, given in
/// degrees of longitude (`x`) and latitude (`y`), on a sphere of `radius`.
///
/// The result is in the unit of `radius`. The order of operations is fixed so
/// that results reproduce bit-for-bit against the reference formulation.
pub fn distance(x0: f64, y0: f64, x1: f64, y1: f64, radius: f64) -> f64 {
    let d_lat = radians(y1 - y0);
    let d_lon = radians(x1 - x0);
    let lat0 = radians(y0);
    let lat1 = radians(y1);

    let a = square((d_lat / 2.0).sin()) + lat0.cos() * lat1.cos() * square((d_lon / 2.0).sin());

    2.0 * radius * a.sqrt().asin()
}

fn radians(degrees: f64) -> f64 {
    const DEG_TO_RAD: f64 = PI / 180.0;
    degrees * DEG_TO_RAD
}

fn square(x: f64) -> f64 {
    x * x
}
