// src/math/types/mod.rs
pub mod bounds;
pub mod point;

pub use bounds::*;
pub use point::*;

// Re-export des externen Punkt-Typs der Triangulation
pub use spade::Point2 as SpadePoint;
