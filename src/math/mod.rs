pub mod error;
pub mod geometry;
pub mod point_distribution;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{MathError, MathResult},
        geometry::{
            polygon::{ClockwiseOrdering, PolygonClipper, ResampleConfig, ShapeResampler},
            voronoi::{
                Cell, CellBuilder, CentroidRelaxer, Edge, RelaxationConfig, RelaxationMode,
                SpadeTriangulator, Triangle, Triangulation, Triangulator,
            },
        },
        point_distribution::{PointPattern, generate_points},
        types::*,
    };
}
