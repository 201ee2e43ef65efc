// src/math/geometry/polygon/clipping.rs

//! # Polygon Clipping Module
//!
//! Clips a subject polygon against a convex clip polygon using the
//! Sutherland-Hodgman algorithm. The subject may be concave or convex; the clip
//! polygon must be convex.
//!
//! Winding is judged in screen coordinates (y down). Both inputs may be given in
//! either winding; the result is always clockwise.

use crate::math::{
    error::{MathError, MathResult},
    types::{Bounds2D, Point},
    utils::constants,
};
use tracing::trace;

/// A directed edge of the clip polygon.
#[derive(Debug, Clone, Copy)]
struct ClipEdge {
    from: Point,
    to: Point,
}

/// Performs Sutherland-Hodgman polygon clipping.
#[derive(Debug, Clone, Copy)]
pub struct PolygonClipper {
    /// Threshold for the direction cross product below which two lines count as parallel.
    parallel_tolerance: f64,
}

impl Default for PolygonClipper {
    /// Default values:
    /// - `parallel_tolerance`: `constants::NEAR_ZERO` (1e-9)
    fn default() -> Self {
        Self {
            parallel_tolerance: constants::NEAR_ZERO,
        }
    }
}

impl PolygonClipper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the near-parallel threshold. Negative values are treated as zero.
    pub fn with_parallel_tolerance(mut self, tolerance: f64) -> Self {
        self.parallel_tolerance = tolerance.max(0.0);
        self
    }

    /// Clips `subject` against the convex `clip` polygon and returns the clockwise
    /// intersection polygon.
    ///
    /// # Returns
    /// - `Ok(vertices)`, possibly empty when the polygons do not overlap.
    /// - `Err(MathError::InsufficientPoints)` if either polygon has fewer than 3 vertices.
    /// - `Err(MathError::DegeneratePolygon)` if all vertices of a polygon are collinear.
    pub fn clip(&self, subject: &[Point], clip: &[Point]) -> MathResult<Vec<Point>> {
        if subject.len() < 3 || clip.len() < 3 {
            return Err(MathError::InsufficientPoints {
                expected: 3,
                actual: subject.len().min(clip.len()),
            });
        }

        let mut output = subject.to_vec();

        // Make sure it's clockwise
        if !Self::is_clockwise(subject)? {
            output.reverse();
        }

        for edge in Self::edges_clockwise(clip)? {
            if output.is_empty() {
                // The polygons do not intersect; nothing left to clip against the remaining edges.
                break;
            }

            let input = std::mem::take(&mut output);
            let mut s = input[input.len() - 1];

            for &e in &input {
                if Self::is_inside(edge, e) {
                    if !Self::is_inside(edge, s) {
                        self.push_intersection(&mut output, s, e, edge);
                    }
                    output.push(e);
                } else if Self::is_inside(edge, s) {
                    self.push_intersection(&mut output, s, e, edge);
                }
                s = e;
            }
        }

        Ok(output)
    }

    /// Clips `subject` against `bounds` shrunk by `margin` on every side.
    pub fn clip_to_bounds(
        &self,
        subject: &[Point],
        bounds: &Bounds2D,
        margin: f64,
    ) -> MathResult<Vec<Point>> {
        let clip = bounds.clip_polygon(margin)?;
        self.clip(subject, &clip)
    }

    fn push_intersection(&self, output: &mut Vec<Point>, s: Point, e: Point, edge: ClipEdge) {
        match self.line_intersection(s, e, edge.from, edge.to) {
            Some(point) => output.push(point),
            None => trace!(
                "Clip edge {:?} -> {:?} is parallel to segment {:?} -> {:?}; skipping intersection",
                edge.from,
                edge.to,
                s,
                e
            ),
        }
    }

    /// Iterates the edges of `polygon`, always clockwise.
    fn edges_clockwise(polygon: &[Point]) -> MathResult<Vec<ClipEdge>> {
        let n = polygon.len();
        let edges = if Self::is_clockwise(polygon)? {
            (0..n)
                .map(|i| ClipEdge {
                    from: polygon[i],
                    to: polygon[(i + 1) % n],
                })
                .collect()
        } else {
            (0..n)
                .rev()
                .map(|i| ClipEdge {
                    from: polygon[i],
                    to: polygon[(i + n - 1) % n],
                })
                .collect()
        };
        Ok(edges)
    }

    /// Winding at the first vertex triple that is not collinear with the first edge.
    fn is_clockwise(polygon: &[Point]) -> MathResult<bool> {
        let first_edge = ClipEdge {
            from: polygon[0],
            to: polygon[1],
        };

        polygon[2..]
            .iter()
            .find_map(|&p| Self::is_left_of(first_edge, p))
            .map(|is_left| !is_left)
            .ok_or_else(|| MathError::DegeneratePolygon {
                reason: format!("all {} vertices are collinear", polygon.len()),
            })
    }

    /// Collinear points count as inside.
    #[inline]
    fn is_inside(edge: ClipEdge, test: Point) -> bool {
        Self::is_left_of(edge, test) != Some(true)
    }

    /// `Some(true)` if `test` lies strictly left of the edge line, `None` if collinear.
    #[inline]
    fn is_left_of(edge: ClipEdge, test: Point) -> Option<bool> {
        let cross = (edge.to - edge.from).cross(test - edge.to);

        if cross > 0.0 {
            Some(true)
        } else if cross < 0.0 {
            Some(false)
        } else {
            None
        }
    }

    /// Intersection of the infinite lines through (p1, p2) and (p3, p4).
    fn line_intersection(&self, p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Point> {
        let direction1 = p2 - p1;
        let direction2 = p4 - p3;
        let dot_perp = direction1.cross(direction2);

        if dot_perp.abs() <= self.parallel_tolerance {
            return None;
        }

        let c = p3 - p1;
        let t = c.cross(direction2) / dot_perp;
        Some(p1 + direction1 * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::collections::HashSet;

    fn square(min: f64, max: f64) -> Vec<Point> {
        vec![
            Point::new(min, min),
            Point::new(max, min),
            Point::new(max, max),
            Point::new(min, max),
        ]
    }

    #[test]
    fn test_rejects_polygons_with_fewer_than_three_vertices() {
        let clipper = PolygonClipper::new();
        let result = clipper.clip(&[Point::ZERO, Point::new(1.0, 0.0)], &square(0.0, 10.0));
        assert_eq!(
            result,
            Err(MathError::InsufficientPoints {
                expected: 3,
                actual: 2
            })
        );

        let result = clipper.clip(&square(0.0, 10.0), &[]);
        assert!(matches!(
            result,
            Err(MathError::InsufficientPoints { actual: 0, .. })
        ));
    }

    #[test]
    fn test_collinear_polygon_is_degenerate() {
        let line = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        ];
        let result = PolygonClipper::new().clip(&line, &square(0.0, 10.0));
        assert!(matches!(result, Err(MathError::DegeneratePolygon { .. })));
    }

    #[test]
    fn test_clip_against_itself_returns_same_vertices() {
        let polygon = square(0.0, 10.0);
        let clipped = PolygonClipper::new().clip(&polygon, &polygon).unwrap();

        let expected: HashSet<Point> = polygon.iter().copied().collect();
        let actual: HashSet<Point> = clipped.iter().copied().collect();
        assert_eq!(clipped.len(), 4);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_clip_against_reversed_copy() {
        let polygon = vec![
            Point::new(0.0, 0.0),
            Point::new(8.0, 1.0),
            Point::new(6.0, 7.0),
        ];
        let mut reversed = polygon.clone();
        reversed.reverse();

        let clipped = PolygonClipper::new().clip(&polygon, &reversed).unwrap();
        let expected: HashSet<Point> = polygon.iter().copied().collect();
        let actual: HashSet<Point> = clipped.iter().copied().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_disjoint_polygons_yield_empty_result() {
        let clipped = PolygonClipper::new()
            .clip(&square(20.0, 30.0), &square(0.0, 10.0))
            .unwrap();
        assert!(clipped.is_empty());
    }

    #[test]
    fn test_partial_overlap() {
        let clipped = PolygonClipper::new()
            .clip(&square(5.0, 15.0), &square(0.0, 10.0))
            .unwrap();

        assert_eq!(clipped.len(), 4);
        for vertex in &clipped {
            assert!((5.0..=10.0).contains(&vertex.x));
            assert!((5.0..=10.0).contains(&vertex.y));
        }
        assert!(clipped.contains(&Point::new(10.0, 10.0)));
        assert!(clipped.contains(&Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_triangle_clipped_by_square() {
        // Spitze ragt über den rechten Rand hinaus
        let triangle = vec![
            Point::new(2.0, 2.0),
            Point::new(14.0, 5.0),
            Point::new(2.0, 8.0),
        ];
        let clipped = PolygonClipper::new()
            .clip(&triangle, &square(0.0, 10.0))
            .unwrap();

        assert_eq!(clipped.len(), 4);
        let on_border: Vec<&Point> = clipped
            .iter()
            .filter(|p| (p.x - 10.0).abs() < 1e-9)
            .collect();
        assert_eq!(on_border.len(), 2);
        for point in on_border {
            assert!(point.y > 2.0 && point.y < 8.0);
        }
    }

    #[test]
    fn test_result_is_clockwise() {
        let clipped = PolygonClipper::new()
            .clip(&square(5.0, 15.0), &square(0.0, 10.0))
            .unwrap();
        assert!(PolygonClipper::is_clockwise(&clipped).unwrap());
    }

    #[test]
    fn test_clip_to_bounds_with_margin() {
        let bounds = Bounds2D::from_size(10.0, 10.0);
        let clipped = PolygonClipper::new()
            .clip_to_bounds(&square(0.0, 10.0), &bounds, 1.0)
            .unwrap();
        assert_eq!(clipped.len(), 4);
        for vertex in &clipped {
            assert_abs_diff_eq!(vertex.x.clamp(1.0, 9.0), vertex.x, epsilon = 1e-9);
            assert_abs_diff_eq!(vertex.y.clamp(1.0, 9.0), vertex.y, epsilon = 1e-9);
        }
    }
}
