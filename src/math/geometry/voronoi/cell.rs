// src/math/geometry/voronoi/cell.rs

use super::triangulation::Triangulation;
use crate::math::{
    error::*,
    geometry::polygon::{ClockwiseOrdering, PolygonClipper},
    types::Point,
    utils::simple_geometry::mean_point,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::trace;

/// Voronoi-Zelle einer Site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Eckpunkte im Uhrzeigersinn
    pub vertices: Vec<Point>,
    /// Mittelwert der Eckpunkte, Nullvektor wenn leer
    pub centroid: Point,
    pub site: Point,
}

impl Cell {
    pub fn new(vertices: Vec<Point>, site: Point) -> Self {
        let centroid = mean_point(&vertices);
        Self {
            vertices,
            centroid,
            site,
        }
    }

    /// Zellen mit weniger als 3 Eckpunkten (ungeclippte Hüllen-Sites oder leeres Clipping)
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Fläche nach der Gaußschen Trapezformel
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }

        let doubled: f64 = (0..n)
            .map(|i| self.vertices[i].cross(self.vertices[(i + 1) % n]))
            .sum();
        doubled.abs() * 0.5
    }

    /// Anzahl gemeinsamer Eckpunkte (exakter Vergleich, paarweise gezählt)
    pub fn shared_vertex_count(&self, other: &Cell) -> usize {
        self.vertices
            .iter()
            .map(|v| other.vertices.iter().filter(|&w| w == v).count())
            .sum()
    }

    /// Nachbarn teilen mindestens eine Voronoi-Kante, also zwei Eckpunkte
    pub fn is_neighbour_of(&self, other: &Cell) -> bool {
        self.shared_vertex_count(other) >= 2
    }
}

/// Baut Voronoi-Zellen aus einer Triangulation.
///
/// Die Zelle einer Site ist das Polygon aus den Umkreismittelpunkten ihrer
/// angrenzenden Dreiecke, optional gegen ein konvexes Clip-Polygon beschnitten.
pub struct CellBuilder<'a> {
    sites: &'a [Point],
    triangulation: &'a Triangulation,
}

impl<'a> CellBuilder<'a> {
    /// Fehler, wenn die Triangulation nicht zu den Sites passt
    pub fn new(sites: &'a [Point], triangulation: &'a Triangulation) -> MathResult<Self> {
        if sites.len() != triangulation.site_count() {
            return Err(MathError::StaleTriangulation {
                sites: sites.len(),
                triangulated: triangulation.site_count(),
            });
        }

        Ok(Self {
            sites,
            triangulation,
        })
    }

    /// Umkreismittelpunkte der an `index` angrenzenden Dreiecke, ohne Duplikate
    /// und im Uhrzeigersinn um ihren eigenen Mittelwert sortiert. Ungeclippt.
    pub fn circumcenters_for(&self, index: usize) -> Vec<Point> {
        let mut seen = HashSet::new();
        let mut circumcenters: Vec<Point> = self
            .triangulation
            .incident_triangles(index)
            .map(|triangle| triangle.circumcenter)
            .filter(|&center| seen.insert(center))
            .collect();

        ClockwiseOrdering::around_mean(&circumcenters).sort(&mut circumcenters);
        circumcenters
    }

    /// Ungeclippte Polygone aller Sites, indexgleich zur Site-Liste
    pub fn all_polygons(&self) -> Vec<Vec<Point>> {
        (0..self.sites.len())
            .map(|index| self.circumcenters_for(index))
            .collect()
    }

    /// Zelle der Site `index`; `None`, wenn die Site kein angrenzendes Dreieck hat.
    ///
    /// Mit Clip-Polygon liefert eine Site mit weniger als 3 (oder nur kollinearen)
    /// Umkreismittelpunkten den Fehler des Clippers.
    pub fn cell_for(&self, index: usize, clip: Option<&[Point]>) -> MathResult<Option<Cell>> {
        let Some(&site) = self.sites.get(index) else {
            return Err(MathError::IndexOutOfRange {
                index,
                len: self.sites.len(),
            });
        };

        let cell = Self::cell_for_site(site, &self.circumcenters_for(index), clip)?;
        if cell.is_none() {
            trace!("No cell for site index {}", index);
        }
        Ok(cell)
    }

    /// Funktionale Form: baut die Zelle aus bereits gesammelten Umkreismittelpunkten.
    ///
    /// Die Punkte werden dedupliziert und sortiert; die Eingabereihenfolge spielt keine Rolle.
    pub fn cell_for_site(
        site: Point,
        circumcenters: &[Point],
        clip: Option<&[Point]>,
    ) -> MathResult<Option<Cell>> {
        Self::check_clip(clip)?;

        let mut seen = HashSet::new();
        let mut boundary: Vec<Point> = circumcenters
            .iter()
            .copied()
            .filter(|&center| seen.insert(center))
            .collect();

        if boundary.is_empty() {
            return Ok(None);
        }

        ClockwiseOrdering::around_mean(&boundary).sort(&mut boundary);

        // Hüllen-Sites mit weniger als 3 Umkreismittelpunkten scheitern im Clipper
        let vertices = match clip {
            Some(clip) => PolygonClipper::new().clip(&boundary, clip)?,
            None => boundary,
        };

        Ok(Some(Cell::new(vertices, site)))
    }

    /// Alle vorhandenen Zellen; Sites ohne Zelle fehlen, die Indizes verschieben sich.
    pub fn all_cells(&self, clip: Option<&[Point]>) -> MathResult<Vec<Cell>> {
        Ok(self.cells_by_index(clip)?.into_iter().flatten().collect())
    }

    /// Zellen indexgleich zur Site-Liste, `None` für Sites ohne Zelle.
    pub fn cells_by_index(&self, clip: Option<&[Point]>) -> MathResult<Vec<Option<Cell>>> {
        Self::check_clip(clip)?;
        (0..self.sites.len())
            .map(|index| self.cell_for(index, clip))
            .collect()
    }

    /// Nachbarzellen je Site (indexgleich). Paarweiser Vergleich, quadratisch in der
    /// Anzahl der Sites.
    pub fn neighbours(&self, clip: Option<&[Point]>) -> MathResult<Vec<Vec<Cell>>> {
        let cells = self.cells_by_index(clip)?;

        let neighbours: Vec<Vec<Cell>> = cells
            .iter()
            .enumerate()
            .map(|(i, current)| {
                let Some(current) = current else {
                    return Vec::new();
                };

                cells
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| i != j)
                    .filter_map(|(_, other)| other.as_ref())
                    .filter(|other| current.is_neighbour_of(other))
                    .cloned()
                    .collect()
            })
            .collect();

        Ok(neighbours)
    }

    fn check_clip(clip: Option<&[Point]>) -> MathResult<()> {
        match clip {
            Some(clip) if clip.len() < 3 => Err(MathError::InsufficientPoints {
                expected: 3,
                actual: clip.len(),
            }),
            _ => Ok(()),
        }
    }
}
