extern crate cfg_if;

extern crate failure;
extern crate log;

#[cfg(feature = "rayon")]
extern crate rayon;

#[cfg(feature = "serde")]
extern crate serde;

pub mod batch;
pub mod bd09;
pub mod convert;
pub mod error;
pub mod gate;
pub mod gcj02;
mod parallel;
pub mod point;
pub mod system;
mod warp;

pub use crate::bd09::{bd09_to_gcj02, gcj02_to_bd09};
pub use crate::convert::{bd09_to_wgs84, convert, wgs84_to_bd09};
pub use crate::error::ParseError;
pub use crate::gate::is_in_china;
pub use crate::gcj02::{gcj02_to_wgs84, gcj02_to_wgs84_refined, wgs84_to_gcj02, REFINE_ITERATIONS};
pub use crate::point::{Bd09Point, Gcj02Point, Point, Position, Wgs84Point};
pub use crate::system::{Bd09, CoordSystem, Gcj02, System, Wgs84};
