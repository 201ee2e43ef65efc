// src/math/geometry/voronoi/edges.rs

use super::triangulation::Triangle;
use crate::math::types::Point;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Ungerichtete Kante zwischen zwei Punkten.
///
/// `point1`/`point2` behalten die Reihenfolge für das Rendering, Gleichheit und Hash
/// ignorieren sie.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    pub point1: Point,
    pub point2: Point,
}

impl Edge {
    pub fn new(point1: Point, point2: Point) -> Self {
        Self { point1, point2 }
    }

    pub fn length(&self) -> f64 {
        self.point1.distance(self.point2)
    }

    pub fn midpoint(&self) -> Point {
        (self.point1 + self.point2) * 0.5
    }

    /// Endpunkte in kanonischer Reihenfolge (x, dann y)
    fn ordered(&self) -> (Point, Point) {
        // + 0.0 macht aus -0.0 eine 0.0, damit gleiche Punkte gleich sortiert werden
        let key = |p: Point| (p.x + 0.0, p.y + 0.0);
        let (a, b) = (key(self.point1), key(self.point2));

        match a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)) {
            Ordering::Greater => (self.point2, self.point1),
            _ => (self.point1, self.point2),
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.point1 == other.point1 && self.point2 == other.point2)
            || (self.point1 == other.point2 && self.point2 == other.point1)
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (first, second) = self.ordered();
        first.hash(state);
        second.hash(state);
    }
}

impl From<[Point; 2]> for Edge {
    fn from([point1, point2]: [Point; 2]) -> Self {
        Self { point1, point2 }
    }
}

/// Leitet die Voronoi-Kanten aus den Delaunay-Dreiecken ab.
pub struct VoronoiEdgeExtractor;

impl VoronoiEdgeExtractor {
    /// Eine Kante pro Dreieckspaar mit gemeinsamer Dreieckskante, jeweils zwischen
    /// den beiden Umkreismittelpunkten.
    ///
    /// Die Ausgabe folgt der Reihenfolge, in der die gemeinsamen Kanten zuerst
    /// auftauchen, und ist damit für gleiche Eingaben deterministisch.
    pub fn edges_from(triangles: &[Triangle]) -> Vec<Edge> {
        let mut owners: HashMap<Edge, Vec<usize>> = HashMap::new();
        let mut first_seen = Vec::new();

        for (triangle_index, triangle) in triangles.iter().enumerate() {
            for edge in Self::triangle_edges(triangle) {
                let entry = owners.entry(edge).or_default();
                if entry.is_empty() {
                    first_seen.push(edge);
                }
                entry.push(triangle_index);
            }
        }

        let mut voronoi_edges = Vec::new();
        for edge in &first_seen {
            let Some(sharing) = owners.get(edge) else {
                continue;
            };

            for (i, &first) in sharing.iter().enumerate() {
                for &second in &sharing[i + 1..] {
                    voronoi_edges.push(Edge::new(
                        triangles[first].circumcenter,
                        triangles[second].circumcenter,
                    ));
                }
            }
        }

        voronoi_edges
    }

    fn triangle_edges(triangle: &Triangle) -> [Edge; 3] {
        let [a, b, c] = triangle.vertices;
        [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)]
    }
}
