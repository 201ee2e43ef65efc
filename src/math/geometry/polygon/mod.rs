// src/math/geometry/polygon/mod.rs

// Polygon-Operationen auf einfachen Eckpunkt-Listen (`&[Point]`)
pub mod clipping;
pub mod ordering;
pub mod resampling;

pub use self::clipping::PolygonClipper;
pub use self::ordering::{ClockwiseOrdering, sort_clockwise};
pub use self::resampling::{ResampleConfig, ShapeResampler};
