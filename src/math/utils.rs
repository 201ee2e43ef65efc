// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    /// Schwelle, unter der ein Kreuzprodukt als "parallel" gilt (Clipping).
    pub const NEAR_ZERO: f64 = 1e-9;
    /// Relative Kollinearitäts-Schwelle für Umkreisberechnungen.
    pub const EPSILON_F64: f64 = 1e-10;
    pub const TAU: f64 = std::f64::consts::TAU;
}

/// Geometrische Hilfsfunktionen (einfach, ohne komplexe Strukturen)
pub mod simple_geometry {
    use crate::math::types::Point;

    /// Arithmetisches Mittel der Punkte; Nullvektor für eine leere Liste.
    pub fn mean_point(points: &[Point]) -> Point {
        if points.is_empty() {
            return Point::ZERO;
        }

        let mut sum = Point::ZERO;
        for &point in points {
            sum += point;
        }
        sum / points.len() as f64
    }

    /// Schnittpunkt der Strecken [p1, p2] und [p3, p4].
    ///
    /// Parallele Strecken (exakte Null im Nenner) schneiden sich nie.
    pub fn segment_intersection(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Point> {
        let d = (p2.x - p1.x) * (p4.y - p3.y) - (p2.y - p1.y) * (p4.x - p3.x);

        if d == 0.0 {
            return None;
        }

        let u = ((p3.x - p1.x) * (p4.y - p3.y) - (p3.y - p1.y) * (p4.x - p3.x)) / d;
        let v = ((p3.x - p1.x) * (p2.y - p1.y) - (p3.y - p1.y) * (p2.x - p1.x)) / d;

        if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
            return None;
        }

        Some(Point::new(p1.x + u * (p2.x - p1.x), p1.y + u * (p2.y - p1.y)))
    }

    /// Umkreismittelpunkt und quadrierter Umkreisradius eines Dreiecks.
    /// `None` für (nahezu) kollineare Eckpunkte.
    ///
    /// Die Schwelle skaliert mit der quadrierten Kantenlänge, das Ergebnis hängt also
    /// nicht vom Maßstab der Koordinaten ab.
    pub fn circumcircle(a: Point, b: Point, c: Point) -> Option<(Point, f64)> {
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        let scale = a.distance_squared(b).max(a.distance_squared(c));

        if d.abs() <= super::constants::EPSILON_F64 * scale {
            return None; // Kollineare Punkte
        }

        let a_sq = a.length_squared();
        let b_sq = b.length_squared();
        let c_sq = c.length_squared();

        let ux = (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y)) / d;
        let uy = (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x)) / d;

        let center = Point::new(ux, uy);
        Some((center, center.distance_squared(a)))
    }
}

/// Random utilities (erweitert vorhandene rand-Funktionalität)
pub mod random {
    use crate::math::types::Point;
    use rand::Rng;

    /// Generiert zufälligen Punkt in `[0, max_x) x [0, max_y)`
    ///
    /// # Panics
    /// Wenn `max_x` oder `max_y` nicht positiv und endlich ist.
    pub fn random_point<R: Rng + ?Sized>(rng: &mut R, max_x: f64, max_y: f64) -> Point {
        Point::new(rng.random_range(0.0..max_x), rng.random_range(0.0..max_y))
    }
}

#[cfg(test)]
mod tests {
    use super::simple_geometry::*;
    use super::*;
    use crate::math::types::Point;
    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_mean_point() {
        assert_eq!(mean_point(&[]), Point::ZERO);
        let mean = mean_point(&[Point::new(0.0, 0.0), Point::new(4.0, 2.0)]);
        assert_eq!(mean, Point::new(2.0, 1.0));
    }

    #[test]
    fn test_segment_intersection() {
        let hit = segment_intersection(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 0.0),
        )
        .unwrap();
        assert_relative_eq!(hit.x, 5.0);
        assert_relative_eq!(hit.y, 5.0);

        // Schnitt der Geraden liegt außerhalb der zweiten Strecke
        assert!(
            segment_intersection(
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(5.0, 1.0),
                Point::new(5.0, 2.0),
            )
            .is_none()
        );

        // Parallel
        assert!(
            segment_intersection(
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(10.0, 1.0),
            )
            .is_none()
        );
    }

    #[test]
    fn test_circumcircle() {
        let (center, radius_squared) = circumcircle(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 5.0),
        )
        .unwrap();
        assert_relative_eq!(center.x, 5.0);
        assert_relative_eq!(center.y, 0.0);
        assert_relative_eq!(radius_squared, 25.0);

        assert!(
            circumcircle(
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 2.0)
            )
            .is_none()
        );

        // Doppelter Eckpunkt
        assert!(
            circumcircle(
                Point::new(1.0, 1.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 3.0)
            )
            .is_none()
        );
    }

    #[test]
    fn test_circumcircle_is_scale_independent() {
        // Determinante 1e-12, liegt unter einer festen Schwelle von 1e-10
        let scale = 1e-7;
        let (center, radius_squared) = circumcircle(
            Point::new(0.0, 0.0),
            Point::new(10.0 * scale, 0.0),
            Point::new(5.0 * scale, 5.0 * scale),
        )
        .unwrap();
        assert_relative_eq!(center.x, 5.0 * scale, max_relative = 1e-9);
        assert_relative_eq!(center.y, 0.0, epsilon = 1e-15);
        assert_relative_eq!(radius_squared, 25.0 * scale * scale, max_relative = 1e-9);

        // Große, flache Dreiecke bleiben kollinear
        assert!(
            circumcircle(
                Point::new(0.0, 0.0),
                Point::new(1e6, 0.0),
                Point::new(2e6, 1e-9)
            )
            .is_none()
        );
    }

    #[test]
    fn test_random_point_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let point = random::random_point(&mut rng, 2.0, 0.5);
            assert!((0.0..2.0).contains(&point.x));
            assert!((0.0..0.5).contains(&point.y));
        }
    }
}
