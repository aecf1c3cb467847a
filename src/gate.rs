//! Bounding box inside which GCJ-02 obfuscation applies.

pub const MIN_LNG: f64 = 72.004;
pub const MAX_LNG: f64 = 137.8347;
pub const MIN_LAT: f64 = 0.8293;
pub const MAX_LAT: f64 = 55.8271;

/// Returns `true` if the coordinate lies inside the (inclusive) box covering
/// mainland China plus margin.
///
/// Every transform touching GCJ-02 is the identity outside of this box.
/// `NaN` components are never inside.
pub fn is_in_china(lng: f64, lat: f64) -> bool {
    (MIN_LNG..=MAX_LNG).contains(&lng) && (MIN_LAT..=MAX_LAT).contains(&lat)
}
