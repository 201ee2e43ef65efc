// src/math/point_distribution/patterns.rs

use crate::math::types::Point;
use serde::{Deserialize, Serialize};

/// Feste Demo-Anordnungen von Sites in Bildschirmkoordinaten.
///
/// Kreis und Ellipse werden auf ganze Pixel abgeschnitten (Richtung Null).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointPattern {
    Diagonal,
    Horizontal,
    Vertical,
    Cross,
    Circle,
    Ellipse,
}

impl PointPattern {
    pub const ALL: [PointPattern; 6] = [
        PointPattern::Diagonal,
        PointPattern::Horizontal,
        PointPattern::Vertical,
        PointPattern::Cross,
        PointPattern::Circle,
        PointPattern::Ellipse,
    ];

    const LINE_COUNT: usize = 20;
    const LINE_SPACING: f64 = 30.0;

    pub fn points(&self) -> Vec<Point> {
        match self {
            PointPattern::Diagonal => Self::line(|offset| Point::new(100.0 + offset, 100.0 + offset)),
            PointPattern::Horizontal => Self::line(|offset| Point::new(100.0 + offset, 100.0)),
            PointPattern::Vertical => Self::line(|offset| Point::new(100.0, 100.0 + offset)),
            PointPattern::Cross => vec![
                Point::new(200.0, 100.0),
                Point::new(200.0, 200.0),
                Point::new(200.0, 300.0),
                Point::new(100.0, 200.0),
                Point::new(300.0, 200.0),
            ],
            PointPattern::Circle => Self::ring(30, 120.0, 120.0, Point::new(400.0, 150.0)),
            PointPattern::Ellipse => Self::ring(20, 180.0, 100.0, Point::new(400.0, 200.0)),
        }
    }

    fn line(position: impl Fn(f64) -> Point) -> Vec<Point> {
        (0..Self::LINE_COUNT)
            .map(|i| position(i as f64 * Self::LINE_SPACING))
            .collect()
    }

    fn ring(step_degrees: usize, radius_x: f64, radius_y: f64, center: Point) -> Vec<Point> {
        (0..360)
            .step_by(step_degrees)
            .map(|degrees| {
                let angle = (degrees as f64).to_radians();
                let x = (angle.cos() * radius_x).trunc();
                let y = (angle.sin() * radius_y).trunc();
                center + Point::new(x, y)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_sizes() {
        assert_eq!(PointPattern::Diagonal.points().len(), 20);
        assert_eq!(PointPattern::Horizontal.points().len(), 20);
        assert_eq!(PointPattern::Vertical.points().len(), 20);
        assert_eq!(PointPattern::Cross.points().len(), 5);
        assert_eq!(PointPattern::Circle.points().len(), 12);
        assert_eq!(PointPattern::Ellipse.points().len(), 18);
    }

    #[test]
    fn test_line_patterns() {
        let horizontal = PointPattern::Horizontal.points();
        assert_eq!(horizontal[0], Point::new(100.0, 100.0));
        assert_eq!(horizontal[19], Point::new(670.0, 100.0));

        let diagonal = PointPattern::Diagonal.points();
        assert_eq!(diagonal[2], Point::new(160.0, 160.0));
    }

    #[test]
    fn test_ring_coordinates_are_truncated() {
        let circle = PointPattern::Circle.points();
        assert_eq!(circle[0], Point::new(520.0, 150.0));
        // cos(30°) * 120 = 103.92...
        assert_eq!(circle[1].x, 503.0);
        for point in circle.iter().chain(PointPattern::Ellipse.points().iter()) {
            assert_eq!(point.x, point.x.trunc());
            assert_eq!(point.y, point.y.trunc());
        }
    }
}
