use crate::bd09::{bd09_to_gcj02_raw, gcj02_to_bd09_raw};
use crate::gcj02::{gcj02_to_wgs84_raw, wgs84_to_gcj02_raw};
use crate::point::{Bd09Point, Wgs84Point};
use crate::system::CoordSystem;

pub fn wgs84_to_bd09(point: Wgs84Point) -> Bd09Point {
    point.transform()
}

pub fn bd09_to_wgs84(point: Bd09Point) -> Wgs84Point {
    point.transform()
}

/// Converts a `(longitude, latitude)` pair between two coordinate systems
/// that are only known at runtime.
///
/// WGS-84 <-> BD-09 goes through GCJ-02. Converting into the same system
/// returns the input unchanged.
pub fn convert(lng: f64, lat: f64, from: CoordSystem, to: CoordSystem) -> (f64, f64) {
    use crate::system::CoordSystem::*;

    match (from, to) {
        (Wgs84, Gcj02) => wgs84_to_gcj02_raw(lng, lat),
        (Gcj02, Wgs84) => gcj02_to_wgs84_raw(lng, lat),
        (Gcj02, Bd09) => gcj02_to_bd09_raw(lng, lat),
        (Bd09, Gcj02) => bd09_to_gcj02_raw(lng, lat),
        (Wgs84, Bd09) => {
            let (lng, lat) = wgs84_to_gcj02_raw(lng, lat);
            gcj02_to_bd09_raw(lng, lat)
        }
        (Bd09, Wgs84) => {
            let (lng, lat) = bd09_to_gcj02_raw(lng, lat);
            gcj02_to_wgs84_raw(lng, lat)
        }
        (Wgs84, Wgs84) | (Gcj02, Gcj02) | (Bd09, Bd09) => (lng, lat),
    }
}
