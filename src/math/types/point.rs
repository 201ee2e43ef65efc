// src/math/types/point.rs

use serde::{Deserialize, Serialize};
use spade::Point2;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// 2D-Punkt bzw. -Vektor mit `f64`-Koordinaten (Bildschirmkoordinaten, y zeigt nach unten).
///
/// Gleichheit und Hashing sind exakt, ohne Toleranz: zwei Punkte sind nur dann gleich,
/// wenn beide Koordinaten bitgenau übereinstimmen (mit `-0.0 == 0.0`). Darauf bauen
/// die Duplikat-Erkennung der Sites und die Nachbarschaftssuche der Zellen auf.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn distance(&self, other: Point) -> f64 {
        (*self - other).length()
    }

    pub fn distance_squared(&self, other: Point) -> f64 {
        (*self - other).length_squared()
    }

    /// Einheitsvektor; der Nullvektor bleibt der Nullvektor.
    pub fn normalize_or_zero(&self) -> Point {
        let length = self.length();
        if length > 0.0 && length.is_finite() {
            *self / length
        } else {
            Point::ZERO
        }
    }

    /// 2D-Kreuzprodukt `self.x * other.y - self.y * other.x`.
    pub fn cross(&self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    fn hash_bits(value: f64) -> u64 {
        // -0.0 und 0.0 sind gleich, also muss auch der Hash gleich sein
        if value == 0.0 { 0 } else { value.to_bits() }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Self::hash_bits(self.x).hash(state);
        Self::hash_bits(self.y).hash(state);
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;
    fn mul(self, rhs: Point) -> Point {
        rhs * self
    }
}

impl Div<f64> for Point {
    type Output = Point;
    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

// Conversion traits
impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point2<f64>> for Point {
    fn from(p: Point2<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Point> for Point2<f64> {
    fn from(p: Point) -> Self {
        Point2::new(p.x, p.y)
    }
}
