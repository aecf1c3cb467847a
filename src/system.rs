use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Coordinate reference systems used by Chinese map providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CoordSystem {
    /// Raw GPS coordinates, used by OpenStreetMap, Google (outside China) and Tianditu
    Wgs84,
    /// "Mars coordinates", used by AMap and Tencent
    Gcj02,
    /// Baidu coordinates
    Bd09,
}

impl CoordSystem {
    pub const ALL: [CoordSystem; 3] = [CoordSystem::Wgs84, CoordSystem::Gcj02, CoordSystem::Bd09];

    pub fn name(self) -> &'static str {
        match self {
            CoordSystem::Wgs84 => "WGS-84",
            CoordSystem::Gcj02 => "GCJ-02",
            CoordSystem::Bd09 => "BD-09",
        }
    }
}

impl fmt::Display for CoordSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CoordSystem {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wgs84" | "wgs-84" | "gps" => Ok(CoordSystem::Wgs84),
            "gcj02" | "gcj-02" | "mars" | "amap" | "tencent" => Ok(CoordSystem::Gcj02),
            "bd09" | "bd-09" | "baidu" => Ok(CoordSystem::Bd09),
            _ => Err(ParseError::UnknownSystem(s.to_string())),
        }
    }
}

/// Compile-time tag naming the coordinate system of a [`Point`](crate::Point)
pub trait System: Copy + fmt::Debug + PartialEq + Send + Sync + 'static {
    const KIND: CoordSystem;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wgs84 {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gcj02 {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bd09 {}

impl System for Wgs84 {
    const KIND: CoordSystem = CoordSystem::Wgs84;
}

impl System for Gcj02 {
    const KIND: CoordSystem = CoordSystem::Gcj02;
}

impl System for Bd09 {
    const KIND: CoordSystem = CoordSystem::Bd09;
}
