// src/math/geometry/mod.rs

// Deklaration der Haupt-Geometriemodule
pub mod polygon;
pub mod voronoi;

// Re-Exporte für einen schnellen Zugriff auf die Kern-Geometrietypen
pub use self::polygon::{
    ClockwiseOrdering, PolygonClipper, ResampleConfig, ShapeResampler, sort_clockwise,
};

pub use self::voronoi::{
    Cell, CellBuilder, CentroidRelaxer, Edge, RelaxationConfig, RelaxationMode, RelaxationStats,
    SpadeTriangulator, Triangle, Triangulation, Triangulator, VoronoiEdgeExtractor,
};
