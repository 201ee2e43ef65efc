// src/math/geometry/voronoi/triangulation.rs

use crate::math::{error::*, types::*, utils::simple_geometry::circumcircle};
use serde::{Deserialize, Serialize};
use spade::{DelaunayTriangulation, Triangulation as _};
use std::collections::HashMap;
use tracing::trace;

/// Delaunay-Dreieck mit Umkreis.
///
/// Wird vom Triangulator erzeugt und ist für den Rest der Pipeline schreibgeschützt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// Eckpunkte als Wertkopien, Reihenfolge wie vom Triangulator geliefert
    pub vertices: [Point; 3],
    pub circumcenter: Point,
    pub radius_squared: f64,
}

impl Triangle {
    /// Erstellt ein Dreieck und berechnet seinen Umkreis.
    /// `None` für (nahezu) kollineare Eckpunkte.
    pub fn new(a: Point, b: Point, c: Point) -> Option<Self> {
        let (circumcenter, radius_squared) = circumcircle(a, b, c)?;
        Some(Self {
            vertices: [a, b, c],
            circumcenter,
            radius_squared,
        })
    }

    /// Prüft ob `point` strikt innerhalb des Umkreises liegt
    pub fn circumcircle_contains(&self, point: Point) -> bool {
        point.distance_squared(self.circumcenter) < self.radius_squared
    }

    pub fn has_vertex(&self, point: Point) -> bool {
        self.vertices.contains(&point)
    }
}

/// Ergebnis einer Triangulation: Dreiecks-Arena plus Inzidenz-Index je Site.
///
/// `adjacency[i]` enthält die Indizes aller Dreiecke, die Site `i` als Eckpunkt haben.
/// Die Struktur wird bei jedem Rebuild komplett neu erzeugt und nie inkrementell verändert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Triangulation {
    triangles: Vec<Triangle>,
    adjacency: Vec<Vec<usize>>,
}

impl Triangulation {
    /// Triangulation ohne Dreiecke für `site_count` Sites
    pub fn empty(site_count: usize) -> Self {
        Self {
            triangles: Vec::new(),
            adjacency: vec![Vec::new(); site_count],
        }
    }

    /// Baut die Triangulation aus Site-Index-Tripeln auf.
    ///
    /// Dreiecke mit kollinearen Eckpunkten werden übersprungen.
    pub fn from_indexed(sites: &[Point], faces: &[[usize; 3]]) -> MathResult<Self> {
        let mut triangulation = Self::empty(sites.len());

        for face in faces {
            if let Some(&index) = face.iter().find(|&&index| index >= sites.len()) {
                return Err(MathError::IndexOutOfRange {
                    index,
                    len: sites.len(),
                });
            }

            let [a, b, c] = face.map(|index| sites[index]);
            match Triangle::new(a, b, c) {
                Some(triangle) => triangulation.push(triangle, face),
                None => trace!("Skipping degenerate face {:?}", face),
            }
        }

        Ok(triangulation)
    }

    /// Fügt ein Dreieck hinzu und registriert es bei allen `incident_sites`.
    fn push<'a>(&mut self, triangle: Triangle, incident_sites: impl IntoIterator<Item = &'a usize>) {
        let triangle_index = self.triangles.len();
        self.triangles.push(triangle);

        for &site in incident_sites {
            let incident = &mut self.adjacency[site];
            if !incident.contains(&triangle_index) {
                incident.push(triangle_index);
            }
        }
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Anzahl der Sites, für die trianguliert wurde
    pub fn site_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Indizes der an `site` angrenzenden Dreiecke (leer für unbekannte Sites)
    pub fn incident_indices(&self, site: usize) -> &[usize] {
        self.adjacency.get(site).map(Vec::as_slice).unwrap_or(&[])
    }

    /// An `site` angrenzende Dreiecke
    pub fn incident_triangles(&self, site: usize) -> impl Iterator<Item = &Triangle> + '_ {
        self.incident_indices(site)
            .iter()
            .map(move |&index| &self.triangles[index])
    }

    /// Umkreismittelpunkte aller Dreiecke (mit Duplikaten, in Dreiecksreihenfolge)
    pub fn circumcenters(&self) -> Vec<Point> {
        self.triangles.iter().map(|t| t.circumcenter).collect()
    }
}

/// Schnittstelle zum externen Triangulations-Algorithmus.
///
/// Implementierungen müssen für identische Eingaben deterministisch sein und jedes
/// Dreieck bei allen drei Eckpunkt-Sites registrieren.
pub trait Triangulator {
    fn triangulate(&self, sites: &[Point]) -> MathResult<Triangulation>;
}

/// Delaunay-Triangulation über `spade`.
///
/// Sites mit identischen Koordinaten teilen sich einen Spade-Vertex; jede dieser Sites
/// erhält dieselben angrenzenden Dreiecke.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpadeTriangulator;

impl SpadeTriangulator {
    pub fn new() -> Self {
        Self
    }
}

impl Triangulator for SpadeTriangulator {
    fn triangulate(&self, sites: &[Point]) -> MathResult<Triangulation> {
        let mut delaunay = DelaunayTriangulation::<SpadePoint<f64>>::new();
        let mut sites_by_vertex = HashMap::new();

        for (index, &site) in sites.iter().enumerate() {
            let handle = delaunay
                .insert(site.into())
                .map_err(|error| MathError::TriangulationFailed {
                    reason: format!("site {index} at {site:?} rejected: {error:?}"),
                })?;
            sites_by_vertex
                .entry(handle)
                .or_insert_with(Vec::new)
                .push(index);
        }

        let mut triangulation = Triangulation::empty(sites.len());

        for face in delaunay.inner_faces() {
            let [a, b, c] = face.vertices();
            let Some(triangle) = Triangle::new(
                a.position().into(),
                b.position().into(),
                c.position().into(),
            ) else {
                trace!("Skipping numerically degenerate face {:?}", face.fix());
                continue;
            };

            let incident_sites = [a.fix(), b.fix(), c.fix()]
                .iter()
                .filter_map(|handle| sites_by_vertex.get(handle))
                .flatten()
                .collect::<Vec<_>>();

            triangulation.push(triangle, incident_sites);
        }

        Ok(triangulation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square_with_center() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(5.0, 5.0),
        ]
    }

    #[test]
    fn test_triangle_circumcircle() {
        let triangle = Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        )
        .unwrap();
        assert_relative_eq!(triangle.circumcenter.x, 5.0);
        assert_relative_eq!(triangle.circumcenter.y, 5.0);
        assert_relative_eq!(triangle.radius_squared, 50.0);
        assert!(triangle.circumcircle_contains(Point::new(5.0, 5.0)));
        assert!(!triangle.circumcircle_contains(Point::new(20.0, 20.0)));
        assert!(triangle.has_vertex(Point::new(10.0, 0.0)));
    }

    #[test]
    fn test_spade_fan_around_center() {
        let sites = square_with_center();
        let triangulation = SpadeTriangulator.triangulate(&sites).unwrap();

        assert_eq!(triangulation.triangle_count(), 4);
        assert_eq!(triangulation.site_count(), 5);
        assert_eq!(triangulation.incident_indices(4).len(), 4);
        for corner in 0..4 {
            assert_eq!(triangulation.incident_indices(corner).len(), 2);
        }
        for triangle in triangulation.incident_triangles(4) {
            assert!(triangle.has_vertex(Point::new(5.0, 5.0)));
        }
    }

    #[test]
    fn test_small_scale_sites_keep_all_triangles() {
        let sites: Vec<Point> = square_with_center().into_iter().map(|p| p * 1e-7).collect();
        let triangulation = SpadeTriangulator.triangulate(&sites).unwrap();

        assert_eq!(triangulation.triangle_count(), 4);
        assert_eq!(triangulation.incident_indices(4).len(), 4);
    }

    #[test]
    fn test_spade_is_deterministic() {
        let sites = square_with_center();
        let first = SpadeTriangulator.triangulate(&sites).unwrap();
        let second = SpadeTriangulator.triangulate(&sites).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_too_few_sites_give_no_triangles() {
        let sites = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let triangulation = SpadeTriangulator.triangulate(&sites).unwrap();
        assert_eq!(triangulation.triangle_count(), 0);
        assert_eq!(triangulation.site_count(), 2);
        assert!(triangulation.incident_indices(0).is_empty());
    }

    #[test]
    fn test_duplicate_sites_share_adjacency() {
        let mut sites = square_with_center();
        sites.push(Point::new(5.0, 5.0));
        let triangulation = SpadeTriangulator.triangulate(&sites).unwrap();

        assert_eq!(triangulation.triangle_count(), 4);
        assert_eq!(
            triangulation.incident_indices(4),
            triangulation.incident_indices(5)
        );
    }

    #[test]
    fn test_non_finite_site_fails() {
        let sites = vec![Point::new(f64::NAN, 0.0)];
        let result = SpadeTriangulator.triangulate(&sites);
        assert!(matches!(result, Err(MathError::TriangulationFailed { .. })));
    }

    #[test]
    fn test_from_indexed() {
        let sites = square_with_center();
        let triangulation =
            Triangulation::from_indexed(&sites, &[[0, 1, 4], [1, 2, 4], [0, 1, 2]]).unwrap();
        assert_eq!(triangulation.triangle_count(), 3);
        assert_eq!(triangulation.incident_indices(1), &[0, 1, 2]);
        assert_eq!(triangulation.incident_indices(3), &[] as &[usize]);

        let error = Triangulation::from_indexed(&sites, &[[0, 1, 9]]).unwrap_err();
        assert_eq!(error, MathError::IndexOutOfRange { index: 9, len: 5 });
    }

    #[test]
    fn test_from_indexed_skips_collinear_faces() {
        let sites = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        ];
        let triangulation = Triangulation::from_indexed(&sites, &[[0, 1, 2]]).unwrap();
        assert_eq!(triangulation.triangle_count(), 0);
    }
}
