// src/math/types/bounds.rs

use crate::math::{error::*, types::Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 2D Bounding Box (Axis-Aligned Bounding Box) in Bildschirmkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2D {
    pub min: Point,
    pub max: Point,
}

impl Bounds2D {
    /// Erstellt eine neue Bounding Box
    pub fn new(min: Point, max: Point) -> MathResult<Self> {
        if min.x > max.x || min.y > max.y {
            return Err(MathError::InvalidConfiguration {
                message: format!("Invalid bounds: min {:?} > max {:?}", min, max),
            });
        }

        Ok(Self { min, max })
    }

    /// Erstellt eine Bounding Box aus zwei beliebigen Punkten
    pub fn from_points(p1: Point, p2: Point) -> Self {
        Self {
            min: Point::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            max: Point::new(p1.x.max(p2.x), p1.y.max(p2.y)),
        }
    }

    /// Canvas-Bereich `[0, width] x [0, height]`
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::from_points(Point::ZERO, Point::new(width, height))
    }

    /// Erstellt eine Bounding Box die alle Punkte umschließt
    pub fn from_points_iter<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points_iter = points.into_iter();
        let first_point = points_iter.next()?;

        let mut min = first_point;
        let mut max = first_point;

        for point in points_iter {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        Some(Self { min, max })
    }

    /// Prüft ob die Bounding Box gültig ist
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x
            && self.min.y <= self.max.y
            && self.min.is_finite()
            && self.max.is_finite()
    }

    /// Breite der Bounding Box
    pub fn width(&self) -> f64 {
        (self.max.x - self.min.x).max(0.0)
    }

    /// Höhe der Bounding Box
    pub fn height(&self) -> f64 {
        (self.max.y - self.min.y).max(0.0)
    }

    /// Zentrum der Bounding Box
    pub fn center(&self) -> Point {
        (self.min + self.max) * 0.5
    }

    /// Prüft ob ein Punkt in der Bounding Box liegt (Rand eingeschlossen)
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Verkleinert die Box auf allen Seiten um `margin` (negativ vergrößert sie).
    pub fn shrink(&self, margin: f64) -> Self {
        Self {
            min: Point::new(self.min.x + margin, self.min.y + margin),
            max: Point::new(self.max.x - margin, self.max.y - margin),
        }
    }

    /// Clip-Polygon der Box abzüglich `margin`:
    /// (links, oben), (rechts, oben), (rechts, unten), (links, unten).
    ///
    /// Gibt einen Fehler zurück, wenn der Margin die Box vollständig aufzehrt.
    pub fn clip_polygon(&self, margin: f64) -> MathResult<Vec<Point>> {
        let inner = self.shrink(margin);
        if !inner.is_valid() {
            return Err(MathError::InvalidConfiguration {
                message: format!("Clip margin {margin} exceeds bounds {self}"),
            });
        }

        Ok(inner.corners().to_vec())
    }

    /// Erzeugt die vier Eckpunkte der Bounding Box (y nach unten)
    pub fn corners(&self) -> [Point; 4] {
        [
            self.min,                           // oben links
            Point::new(self.max.x, self.min.y), // oben rechts
            self.max,                           // unten rechts
            Point::new(self.min.x, self.max.y), // unten links
        ]
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bounds2D(({}, {}) to ({}, {}))",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bounds_rejected() {
        let result = Bounds2D::new(Point::new(10.0, 0.0), Point::new(0.0, 10.0));
        assert!(matches!(
            result,
            Err(MathError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_clip_polygon_with_margin() {
        let bounds = Bounds2D::from_size(100.0, 50.0);
        let clip = bounds.clip_polygon(10.0).unwrap();

        assert_eq!(
            clip,
            vec![
                Point::new(10.0, 10.0),
                Point::new(90.0, 10.0),
                Point::new(90.0, 40.0),
                Point::new(10.0, 40.0),
            ]
        );
    }

    #[test]
    fn test_margin_too_large() {
        let bounds = Bounds2D::from_size(10.0, 10.0);
        assert!(bounds.clip_polygon(6.0).is_err());
    }

    #[test]
    fn test_from_points_iter() {
        let bounds = Bounds2D::from_points_iter(vec![
            Point::new(3.0, -1.0),
            Point::new(-2.0, 4.0),
            Point::new(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(bounds.min, Point::new(-2.0, -1.0));
        assert_eq!(bounds.max, Point::new(3.0, 4.0));
        assert!(bounds.contains_point(Point::new(0.0, 0.0)));
        assert!(Bounds2D::from_points_iter(Vec::new()).is_none());
    }
}
