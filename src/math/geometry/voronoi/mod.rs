// src/math/geometry/voronoi/mod.rs

pub mod cell;
pub mod edges;
pub mod lloyd;
pub mod triangulation;

pub use cell::{Cell, CellBuilder};
pub use edges::{Edge, VoronoiEdgeExtractor};
pub use lloyd::{CentroidRelaxer, RelaxationConfig, RelaxationMode, RelaxationStats};
pub use triangulation::{SpadeTriangulator, Triangle, Triangulation, Triangulator};
