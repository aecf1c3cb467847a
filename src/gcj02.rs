//! Conversion between WGS-84 and GCJ-02.

use log::trace;

use crate::gate::is_in_china;
use crate::point::{Gcj02Point, Wgs84Point};
use crate::warp::offset;

/// Number of correction rounds after which [`gcj02_to_wgs84_refined`]
/// reproduces the original WGS-84 position to within `1e-8` degrees
pub const REFINE_ITERATIONS: usize = 2;

pub(crate) fn wgs84_to_gcj02_raw(lng: f64, lat: f64) -> (f64, f64) {
    if !is_in_china(lng, lat) {
        return (lng, lat);
    }

    let (d_lng, d_lat) = offset(lng, lat);
    (lng + d_lng, lat + d_lat)
}

pub(crate) fn gcj02_to_wgs84_raw(lng: f64, lat: f64) -> (f64, f64) {
    if !is_in_china(lng, lat) {
        return (lng, lat);
    }

    // the offset should be evaluated at the (unknown) WGS-84 position,
    // using the GCJ-02 position instead leaves a residual of a few meters
    let (d_lng, d_lat) = offset(lng, lat);
    (lng - d_lng, lat - d_lat)
}

/// Obfuscates a GPS position. Positions outside of China are returned unchanged.
pub fn wgs84_to_gcj02(point: Wgs84Point) -> Gcj02Point {
    let (lng, lat) = wgs84_to_gcj02_raw(point.longitude(), point.latitude());
    Gcj02Point::new(lng, lat)
}

/// Approximately recovers the GPS position of a GCJ-02 coordinate.
///
/// This is a single-step, first-order inverse: the result is off by up to
/// about `6e-5` degrees. Use [`gcj02_to_wgs84_refined`] if that is not good
/// enough.
///
/// The bound only holds away from the edge of the [`is_in_china`] box.
/// Obfuscation moves points by up to about `0.0105` degrees, so a WGS-84
/// position within that distance of the eastern or northern edge can end up
/// outside the box in GCJ-02. This function then returns it unchanged.
pub fn gcj02_to_wgs84(point: Gcj02Point) -> Wgs84Point {
    let (lng, lat) = gcj02_to_wgs84_raw(point.longitude(), point.latitude());
    Wgs84Point::new(lng, lat)
}

/// Like [`gcj02_to_wgs84`], followed by `iterations` rounds that run the
/// forward transform on the current estimate and subtract the residual.
///
/// `iterations == 0` returns the single-step result.
pub fn gcj02_to_wgs84_refined(point: Gcj02Point, iterations: usize) -> Wgs84Point {
    let (gcj_lng, gcj_lat) = point.into_lng_lat();
    if !is_in_china(gcj_lng, gcj_lat) {
        return Wgs84Point::new(gcj_lng, gcj_lat);
    }

    let (mut lng, mut lat) = gcj02_to_wgs84_raw(gcj_lng, gcj_lat);
    for i in 0..iterations {
        let (est_lng, est_lat) = wgs84_to_gcj02_raw(lng, lat);
        let (res_lng, res_lat) = (est_lng - gcj_lng, est_lat - gcj_lat);
        trace!("refinement round {}: residual ({:e}, {:e})", i + 1, res_lng, res_lat);

        lng -= res_lng;
        lat -= res_lat;
    }

    Wgs84Point::new(lng, lat)
}
