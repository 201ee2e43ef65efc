// src/math/geometry/polygon/ordering.rs

//! Clockwise ordering of points around an origin.
//!
//! Angles are measured as `atan2(dx, dy)` (note the swapped arguments), so that
//! increasing angle corresponds to clockwise order in a y-down screen system.

use crate::math::{types::Point, utils::simple_geometry::mean_point};
use std::cmp::Ordering;

/// Comparator which orders points clockwise around a fixed origin.
///
/// The origin is bound at construction; the comparator is immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockwiseOrdering {
    origin: Point,
}

impl ClockwiseOrdering {
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }

    /// Uses the arithmetic mean of `points` as origin (zero vector for an empty slice).
    pub fn around_mean(points: &[Point]) -> Self {
        Self::new(mean_point(points))
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Screen angle of `point` relative to the origin, in `(-π, π]`.
    pub fn angle(&self, point: Point) -> f64 {
        let offset = point - self.origin;
        offset.x.atan2(offset.y)
    }

    /// Orders by ascending angle, then by ascending distance from the origin.
    ///
    /// `Equal` is returned only for exactly equal coordinates. Points that tie on both
    /// angle and distance fall back to a coordinate comparison so that the ordering
    /// stays total.
    pub fn compare(&self, a: &Point, b: &Point) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }

        let angle_order = self.angle(*a).total_cmp(&self.angle(*b));
        if angle_order != Ordering::Equal {
            return angle_order;
        }

        let distance_a = a.distance(self.origin);
        let distance_b = b.distance(self.origin);
        distance_a
            .total_cmp(&distance_b)
            .then_with(|| a.x.total_cmp(&b.x))
            .then_with(|| a.y.total_cmp(&b.y))
    }

    /// Sorts `points` in place using this comparator.
    pub fn sort(&self, points: &mut [Point]) {
        points.sort_by(|a, b| self.compare(a, b));
    }
}

/// Sorts a polygon clockwise around its own mean.
pub fn sort_clockwise(points: &mut [Point]) {
    ClockwiseOrdering::around_mean(points).sort(points);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn test_equal_only_for_identical_points() {
        let ordering = ClockwiseOrdering::new(Point::ZERO);
        let p = Point::new(1.0, 2.0);
        assert_eq!(ordering.compare(&p, &p), Ordering::Equal);
        assert_ne!(
            ordering.compare(&p, &Point::new(2.0, 4.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_angle_tie_orders_by_distance() {
        let ordering = ClockwiseOrdering::new(Point::ZERO);
        let near = Point::new(1.0, 1.0);
        let far = Point::new(3.0, 3.0);
        assert_eq!(ordering.compare(&near, &far), Ordering::Less);
        assert_eq!(ordering.compare(&far, &near), Ordering::Greater);
    }

    #[test]
    fn test_uses_swapped_atan2_arguments() {
        let ordering = ClockwiseOrdering::new(Point::ZERO);
        // atan2(dx, dy): straight "down" (positive y) is angle 0, positive x is π/2
        assert_eq!(ordering.angle(Point::new(0.0, 1.0)), 0.0);
        assert!((ordering.angle(Point::new(1.0, 0.0)) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_equal_angular_increments_sort_monotonically() {
        let origin = Point::new(50.0, 50.0);
        let ordering = ClockwiseOrdering::new(origin);

        // Eingabe absichtlich in verdrehter Reihenfolge
        let mut points: Vec<Point> = (0..12)
            .rev()
            .map(|i| {
                let angle = i as f64 * TAU / 12.0;
                origin + Point::new(angle.cos(), angle.sin()) * 10.0
            })
            .collect();
        points.swap(2, 7);

        ordering.sort(&mut points);

        let angles: Vec<f64> = points.iter().map(|p| ordering.angle(*p)).collect();
        assert!(angles.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(points.len(), 12);
    }

    #[test]
    fn test_around_mean_of_square() {
        let mut square = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ];
        sort_clockwise(&mut square);

        // Mittelpunkt (5, 5): atan2(dx, dy) aufsteigend
        assert_eq!(
            square,
            vec![
                Point::new(0.0, 0.0),   // atan2(-5, -5) = -3π/4
                Point::new(0.0, 10.0),  // atan2(-5, 5)  = -π/4
                Point::new(10.0, 10.0), // atan2(5, 5)   = π/4
                Point::new(10.0, 0.0),  // atan2(5, -5)  = 3π/4
            ]
        );
    }
}
