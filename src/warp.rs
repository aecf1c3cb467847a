use std::f64::consts::PI;

/// Semi-major axis of the Krassovsky ellipsoid used by GCJ-02, in meters
const AXIS: f64 = 6_378_245.0;

/// Eccentricity squared
const EE: f64 = 0.006_693_421_622_965_943_23;

/// Reference meridian and parallel the warp polynomials are centered on
const ORIGIN_LNG: f64 = 105.0;
const ORIGIN_LAT: f64 = 35.0;

fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

fn transform_lng(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// Calculates the GCJ-02 obfuscation offset `(d_lng, d_lat)` in degrees
/// at the given position.
///
/// The raw polynomial values are scaled from meters to degrees using the
/// meridional and prime vertical radii of curvature at `lat`.
pub fn offset(lng: f64, lat: f64) -> (f64, f64) {
    let x = lng - ORIGIN_LNG;
    let y = lat - ORIGIN_LAT;

    let d_lat = transform_lat(x, y);
    let d_lng = transform_lng(x, y);

    let rad_lat = lat / 180.0 * PI;
    let magic = rad_lat.sin();
    let magic = 1.0 - EE * magic * magic;
    let sqrt_magic = magic.sqrt();

    let d_lng = (d_lng * 180.0) / (AXIS / sqrt_magic * rad_lat.cos() * PI);
    let d_lat = (d_lat * 180.0) / ((AXIS * (1.0 - EE)) / (magic * sqrt_magic) * PI);

    (d_lng, d_lat)
}
