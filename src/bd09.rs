//! Conversion between GCJ-02 and BD-09.
//!
//! Baidu applies a small polar warp on top of GCJ-02, treating longitude and
//! latitude as if they were cartesian coordinates.

use std::f64::consts::PI;

use crate::gate::is_in_china;
use crate::point::{Bd09Point, Gcj02Point};

const X_PI: f64 = PI * 3000.0 / 180.0;

const LNG_SHIFT: f64 = 0.0065;
const LAT_SHIFT: f64 = 0.006;

pub(crate) fn gcj02_to_bd09_raw(lng: f64, lat: f64) -> (f64, f64) {
    if !is_in_china(lng, lat) {
        return (lng, lat);
    }

    let z = (lng * lng + lat * lat).sqrt() + 0.00002 * (lat * X_PI).sin();
    let theta = lat.atan2(lng) + 0.000003 * (lng * X_PI).cos();
    (z * theta.cos() + LNG_SHIFT, z * theta.sin() + LAT_SHIFT)
}

pub(crate) fn bd09_to_gcj02_raw(lng: f64, lat: f64) -> (f64, f64) {
    if !is_in_china(lng, lat) {
        return (lng, lat);
    }

    let x = lng - LNG_SHIFT;
    let y = lat - LAT_SHIFT;
    let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();
    (z * theta.cos(), z * theta.sin())
}

pub fn gcj02_to_bd09(point: Gcj02Point) -> Bd09Point {
    let (lng, lat) = gcj02_to_bd09_raw(point.longitude(), point.latitude());
    Bd09Point::new(lng, lat)
}

/// Inverts [`gcj02_to_bd09`].
///
/// The correction terms are evaluated at the shifted BD-09 position, so a
/// round trip is off by up to about `2e-6` degrees.
///
/// [`gcj02_to_bd09`] adds about `0.0065` degrees of longitude and `0.006`
/// degrees of latitude. GCJ-02 points closer than that to the eastern or
/// northern edge of the [`is_in_china`] box become BD-09 points outside of
/// it, which this function returns unchanged.
pub fn bd09_to_gcj02(point: Bd09Point) -> Gcj02Point {
    let (lng, lat) = bd09_to_gcj02_raw(point.longitude(), point.latitude());
    Gcj02Point::new(lng, lat)
}
