// src/math/point_distribution/random.rs

use crate::math::{error::*, types::*, utils::random::random_point};
use rand::Rng;

/// Gleichverteilte Punkte in `[0, max_x) x [0, max_y)`.
///
/// Beide Ausdehnungen müssen positiv und endlich sein.
pub fn generate_points<R: Rng + ?Sized>(
    count: usize,
    max_x: f64,
    max_y: f64,
    rng: &mut R,
) -> MathResult<Vec<Point>> {
    for extent in [max_x, max_y] {
        if !extent.is_finite() || extent <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!("Point range must be positive and finite, got {extent}"),
            });
        }
    }

    Ok((0..count)
        .map(|_| random_point(rng, max_x, max_y))
        .collect())
}

/// Gleichverteilte Punkte innerhalb von `bounds`
pub fn generate_points_in<R: Rng + ?Sized>(
    count: usize,
    bounds: &Bounds2D,
    rng: &mut R,
) -> MathResult<Vec<Point>> {
    Ok(generate_points(count, bounds.width(), bounds.height(), rng)?
        .into_iter()
        .map(|offset| bounds.min + offset)
        .collect())
}
