use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::convert::convert;
use crate::error::ParseError;
use crate::gate;
use crate::system::{Bd09, Gcj02, System, Wgs84};

/// Anything that has a longitude and latitude in degrees
///
/// Implement this for your own records to feed them into
/// [`batch`](crate::batch) conversions without copying them into
/// [`Point`]s first.
pub trait Position: Sync {
    fn longitude(&self) -> f64;
    fn latitude(&self) -> f64;
}

/// `(longitude, latitude)`
impl Position for (f64, f64) {
    fn longitude(&self) -> f64 {
        self.0
    }
    fn latitude(&self) -> f64 {
        self.1
    }
}

/// A position in degrees, tagged with the coordinate system it belongs to.
///
/// The tag is zero-sized and only exists at compile time, so a
/// `Point<Gcj02>` can not be passed where a `Point<Wgs84>` is expected:
///
/// ```compile_fail
/// use chinacoord::{Gcj02Point, wgs84_to_gcj02};
///
/// let amap = Gcj02Point::new(116.403, 39.918);
/// wgs84_to_gcj02(amap);
/// ```
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = ""))]
pub struct Point<S> {
    longitude: f64,
    latitude: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    system: PhantomData<S>,
}

pub type Wgs84Point = Point<Wgs84>;
pub type Gcj02Point = Point<Gcj02>;
pub type Bd09Point = Point<Bd09>;

impl<S: System> Point<S> {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Point { longitude, latitude, system: PhantomData }
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns `(longitude, latitude)` and drops the system tag.
    pub fn into_lng_lat(self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }

    pub fn is_in_china(&self) -> bool {
        gate::is_in_china(self.longitude, self.latitude)
    }

    /// Converts this point into any other coordinate system.
    ///
    /// Uses the same single-step transforms as the free functions, so
    /// `p.transform::<Gcj02>()` equals `wgs84_to_gcj02(p)` for a `Wgs84Point`.
    pub fn transform<T: System>(self) -> Point<T> {
        let (lng, lat) = convert(self.longitude, self.latitude, S::KIND, T::KIND);
        Point::new(lng, lat)
    }
}

impl<S: System> Position for Point<S> {
    fn longitude(&self) -> f64 {
        self.longitude
    }
    fn latitude(&self) -> f64 {
        self.latitude
    }
}

impl<S: System> fmt::Debug for Point<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("system", &S::KIND)
            .field("longitude", &self.longitude)
            .field("latitude", &self.latitude)
            .finish()
    }
}

impl<S: System> fmt::Display for Point<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.longitude, self.latitude)
    }
}

/// Parses the `"<longitude>,<latitude>"` notation used in provider responses,
/// e.g. the `location` field of AMap POIs.
impl<S: System> FromStr for Point<S> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (longitude, latitude) = parse_lng_lat(s)?;
        Ok(Point::new(longitude, latitude))
    }
}

/// Parses `"<longitude>,<latitude>"` into an untagged pair.
pub fn parse_lng_lat(s: &str) -> Result<(f64, f64), ParseError> {
    let mut parts = s.trim().split(',');

    let longitude = parse_component(parts.next())?;
    let latitude = parse_component(parts.next())?;
    if parts.next().is_some() {
        return Err(ParseError::TooManyComponents);
    }

    Ok((longitude, latitude))
}

fn parse_component(part: Option<&str>) -> Result<f64, ParseError> {
    let part = part.map(str::trim).filter(|it| !it.is_empty()).ok_or(ParseError::MissingComponent)?;
    part.parse().map_err(|_| ParseError::InvalidNumber(part.to_string()))
}
