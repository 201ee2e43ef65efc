// src/lib.rs

//! Delaunay-Triangulation und Voronoi-Zellen für editierbare 2D-Punktmengen.
//!
//! - [`graph::DelaunayVoronoiGraph`] verwaltet die Sites und baut Dreiecke, Voronoi-Kanten
//!   und Zellen bei jedem `rebuild()` komplett neu auf.
//! - [`math::geometry::polygon`] enthält Sortierung im Uhrzeigersinn, Sutherland-Hodgman
//!   Clipping und das zufällige Neuabtasten von Formen.
//! - [`math::geometry::voronoi`] enthält Zellaufbau und Lloyd-Relaxation.
//!
//! Koordinaten sind Bildschirmkoordinaten (y zeigt nach unten).

pub mod graph;
pub mod math;

pub use graph::{DelaunayVoronoiGraph, GraphConfig};
pub use math::{MathError, MathResult, Point};
