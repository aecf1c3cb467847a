//! Converting many points at once.
//!
//! With the default `rayon` feature the points are converted on the rayon
//! thread pool. The output is always in input order.

use log::debug;

use crate::convert::convert;
use crate::parallel::*;
use crate::point::{Point, Position};
use crate::system::{CoordSystem, System};

/// Converts all `points` from `from` into `to`, returning `(longitude, latitude)` pairs.
pub fn convert_all<P: Position>(points: &[P], from: CoordSystem, to: CoordSystem) -> Vec<(f64, f64)> {
    debug!("Converting {} points from {} to {}", points.len(), from, to);

    opt_par_iter(points)
        .map(|p| convert(p.longitude(), p.latitude(), from, to))
        .collect()
}

/// Converts all `points`, which are known to be in system `S`, into system `T`.
///
/// ```
/// use chinacoord::{batch, Gcj02, Wgs84};
///
/// // AMap POI locations
/// let pois = vec![(116.403963, 39.915119), (121.473701, 31.230416)];
/// let gps = batch::transform_all::<Gcj02, Wgs84, _>(&pois);
/// assert_eq!(gps.len(), 2);
/// ```
pub fn transform_all<S: System, T: System, P: Position>(points: &[P]) -> Vec<Point<T>> {
    convert_all(points, S::KIND, T::KIND)
        .into_iter()
        .map(|(lng, lat)| Point::new(lng, lat))
        .collect()
}
