// src/math/point_distribution/mod.rs

// Punktverteilungen für die Sites des Graphen
pub mod patterns;
pub mod random;

pub use self::patterns::PointPattern;
pub use self::random::{generate_points, generate_points_in};
