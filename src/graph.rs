// src/graph.rs

//! Delaunay/Voronoi-Graph über einer editierbaren Site-Liste.
//!
//! Jede Änderung an den Sites macht den Graphen veraltet. Erst `rebuild()` erzeugt
//! Triangulation und Voronoi-Kanten komplett neu; Zell-, Nachbar- und Relaxations-
//! abfragen auf einem veralteten Graphen liefern `MathError::StaleTriangulation`.

use crate::math::{
    error::*,
    geometry::voronoi::{
        Cell, CellBuilder, CentroidRelaxer, Edge, RelaxationConfig, RelaxationStats,
        SpadeTriangulator, Triangle, Triangulation, Triangulator, VoronoiEdgeExtractor,
    },
    point_distribution::{PointPattern, generate_points, generate_points_in},
    types::*,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, trace};

/// Konfiguration des Graphen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Sites mit bereits vorhandenen Koordinaten werden nicht erneut eingefügt
    pub ignore_duplicates: bool,
    /// Abstand des Clip-Rechtecks zum Rand der Zeichenfläche
    pub clip_margin: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            ignore_duplicates: true,
            clip_margin: 0.0,
        }
    }
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignore_duplicates(mut self, ignore: bool) -> Self {
        self.ignore_duplicates = ignore;
        self
    }

    pub fn with_clip_margin(mut self, margin: f64) -> Self {
        self.clip_margin = margin;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if !self.clip_margin.is_finite() || self.clip_margin < 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Clip margin must be non-negative and finite, got {}",
                    self.clip_margin
                ),
            });
        }

        Ok(())
    }
}

/// Besitzt die Sites und den zuletzt berechneten Delaunay/Voronoi-Zustand.
pub struct DelaunayVoronoiGraph<T: Triangulator = SpadeTriangulator> {
    config: GraphConfig,
    triangulator: T,
    sites: Vec<Point>,
    triangulation: Triangulation,
    voronoi_edges: Vec<Edge>,
    stale: bool,
}

impl DelaunayVoronoiGraph<SpadeTriangulator> {
    pub fn new() -> Self {
        Self::from_parts(GraphConfig::default(), SpadeTriangulator)
    }

    pub fn with_config(config: GraphConfig) -> MathResult<Self> {
        Self::with_triangulator(config, SpadeTriangulator)
    }
}

impl Default for DelaunayVoronoiGraph<SpadeTriangulator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Triangulator> DelaunayVoronoiGraph<T> {
    pub fn with_triangulator(config: GraphConfig, triangulator: T) -> MathResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, triangulator))
    }

    fn from_parts(config: GraphConfig, triangulator: T) -> Self {
        Self {
            config,
            triangulator,
            sites: Vec::new(),
            triangulation: Triangulation::empty(0),
            voronoi_edges: Vec::new(),
            stale: false,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // --- Sites ---

    /// Fügt eine Site hinzu. Gibt `false` zurück, wenn sie als Duplikat ignoriert wurde.
    pub fn add_point(&mut self, point: Point) -> bool {
        self.add_point_with(point, self.config.ignore_duplicates)
    }

    pub fn add_point_with(&mut self, point: Point, ignore_duplicates: bool) -> bool {
        if ignore_duplicates && self.sites.contains(&point) {
            trace!("Ignoring duplicate site {:?}", point);
            return false;
        }

        self.sites.push(point);
        self.stale = true;
        true
    }

    /// Überschreibt die letzte Site, aber erst ab drei Sites. So bleiben die ersten
    /// Punkte beim Ziehen mit der Maus erhalten.
    pub fn replace_last_point(&mut self, point: Point) -> bool {
        if self.sites.len() <= 2 {
            return false;
        }

        if let Some(last) = self.sites.last_mut() {
            *last = point;
            self.stale = true;
        }
        true
    }

    pub fn last_point_index(&self) -> Option<usize> {
        self.sites.len().checked_sub(1)
    }

    pub fn sites(&self) -> &[Point] {
        &self.sites
    }

    pub fn site(&self, index: usize) -> Option<Point> {
        self.sites.get(index).copied()
    }

    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Index der Site, zu der `cell` gehört (exakter Vergleich)
    pub fn point_index(&self, cell: &Cell) -> Option<usize> {
        self.sites.iter().position(|&site| site == cell.site)
    }

    /// Entfernt alle Sites
    pub fn clear(&mut self) {
        self.sites.clear();
        self.stale = true;
    }

    /// Ersetzt die Sites durch `count` gleichverteilte Punkte in `[0, max_x) x [0, max_y)`.
    /// Bei ungültigem Bereich bleiben die Sites unverändert.
    pub fn generate_points<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        max_x: f64,
        max_y: f64,
        rng: &mut R,
    ) -> MathResult<()> {
        self.sites = generate_points(count, max_x, max_y, rng)?;
        self.stale = true;
        Ok(())
    }

    /// Fügt zufällige Punkte innerhalb von `bounds` hinzu; gibt die Anzahl eingefügter Sites zurück.
    pub fn add_random_points<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        bounds: &Bounds2D,
        rng: &mut R,
    ) -> MathResult<usize> {
        Ok(generate_points_in(count, bounds, rng)?
            .into_iter()
            .filter(|&point| self.add_point(point))
            .count())
    }

    pub fn add_pattern(&mut self, pattern: PointPattern) -> usize {
        pattern
            .points()
            .into_iter()
            .filter(|&point| self.add_point(point))
            .count()
    }

    // --- Rebuild ---

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Trianguliert alle Sites neu und leitet die Voronoi-Kanten ab.
    ///
    /// Schlägt die Triangulation fehl, bleibt der vorherige Zustand erhalten und der
    /// Graph veraltet.
    pub fn rebuild(&mut self) -> MathResult<()> {
        let started = Instant::now();
        let triangulation = self.triangulator.triangulate(&self.sites)?;
        debug!(
            "Triangulated {} sites into {} triangles in {:?}",
            self.sites.len(),
            triangulation.triangle_count(),
            started.elapsed()
        );

        let started = Instant::now();
        let voronoi_edges = VoronoiEdgeExtractor::edges_from(triangulation.triangles());
        debug!(
            "Derived {} Voronoi edges in {:?}",
            voronoi_edges.len(),
            started.elapsed()
        );

        self.triangulation = triangulation;
        self.voronoi_edges = voronoi_edges;
        self.stale = false;
        Ok(())
    }

    // --- Snapshot ---

    /// Dreiecke des letzten Rebuilds
    pub fn triangles(&self) -> &[Triangle] {
        self.triangulation.triangles()
    }

    /// Voronoi-Kanten des letzten Rebuilds
    pub fn voronoi_edges(&self) -> &[Edge] {
        &self.voronoi_edges
    }

    pub fn triangulation(&self) -> &Triangulation {
        &self.triangulation
    }

    /// Umkreismittelpunkte aller Dreiecke des letzten Rebuilds
    pub fn circumcenters(&self) -> Vec<Point> {
        self.triangulation.circumcenters()
    }

    // --- Zellen ---

    fn ensure_fresh(&self) -> MathResult<()> {
        if self.stale {
            return Err(MathError::StaleTriangulation {
                sites: self.sites.len(),
                triangulated: self.triangulation.site_count(),
            });
        }
        Ok(())
    }

    fn cell_builder(&self) -> MathResult<CellBuilder<'_>> {
        self.ensure_fresh()?;
        CellBuilder::new(&self.sites, &self.triangulation)
    }

    /// Clip-Rechteck für eine Zeichenfläche, verkleinert um `clip_margin`
    pub fn clip_polygon(&self, bounds: &Bounds2D) -> MathResult<Vec<Point>> {
        bounds.clip_polygon(self.config.clip_margin)
    }

    /// Ungeclippte, sortierte Umkreismittelpunkte rund um Site `index`
    pub fn circumcenter_points(&self, index: usize) -> MathResult<Vec<Point>> {
        let builder = self.cell_builder()?;
        if index >= self.sites.len() {
            return Err(MathError::IndexOutOfRange {
                index,
                len: self.sites.len(),
            });
        }
        Ok(builder.circumcenters_for(index))
    }

    pub fn all_polygons(&self) -> MathResult<Vec<Vec<Point>>> {
        Ok(self.cell_builder()?.all_polygons())
    }

    pub fn cell(&self, index: usize, clip: Option<&[Point]>) -> MathResult<Option<Cell>> {
        self.cell_builder()?.cell_for(index, clip)
    }

    pub fn all_cells(&self, clip: Option<&[Point]>) -> MathResult<Vec<Cell>> {
        self.cell_builder()?.all_cells(clip)
    }

    pub fn cells_by_index(&self, clip: Option<&[Point]>) -> MathResult<Vec<Option<Cell>>> {
        self.cell_builder()?.cells_by_index(clip)
    }

    pub fn neighbours(&self, clip: Option<&[Point]>) -> MathResult<Vec<Vec<Cell>>> {
        self.cell_builder()?.neighbours(clip)
    }

    // --- Relaxation ---

    /// Setzt jede Site auf den Schwerpunkt ihrer Zelle. Danach ist ein Rebuild nötig.
    pub fn relax(&mut self, clip: Option<&[Point]>) -> MathResult<RelaxationStats> {
        self.relax_with(RelaxationConfig::snap(), clip)
    }

    /// Bewegt jede Site um `step` in Richtung ihres Zellschwerpunkts, außer sie liegt
    /// näher als `stop_distance` daran.
    pub fn relax_towards_centroid(
        &mut self,
        step: f64,
        clip: Option<&[Point]>,
        stop_distance: f64,
    ) -> MathResult<RelaxationStats> {
        self.relax_with(RelaxationConfig::bounded_step(step, stop_distance), clip)
    }

    fn relax_with(
        &mut self,
        config: RelaxationConfig,
        clip: Option<&[Point]>,
    ) -> MathResult<RelaxationStats> {
        let relaxer = CentroidRelaxer::new(config)?;
        self.ensure_fresh()?;

        let stats = relaxer.relax(&mut self.sites, &self.triangulation, clip)?;
        self.stale = true;
        Ok(stats)
    }
}
