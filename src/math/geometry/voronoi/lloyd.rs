// src/math/geometry/voronoi/lloyd.rs

use super::{cell::CellBuilder, triangulation::Triangulation};
use crate::math::{error::*, types::Point};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Art der Bewegung einer Site in Richtung ihres Zellschwerpunkts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RelaxationMode {
    /// Site springt direkt auf den Schwerpunkt
    Snap,
    /// Site bewegt sich mit fester Schrittweite; unterhalb von `stop_distance` bleibt sie stehen.
    /// Ist `stop_distance` kleiner als `step`, kann die Site über den Schwerpunkt hinausschießen.
    BoundedStep { step: f64, stop_distance: f64 },
}

/// Lloyd-Relaxation Konfiguration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelaxationConfig {
    pub mode: RelaxationMode,
}

impl Default for RelaxationConfig {
    fn default() -> Self {
        Self {
            mode: RelaxationMode::Snap,
        }
    }
}

impl RelaxationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snap() -> Self {
        Self {
            mode: RelaxationMode::Snap,
        }
    }

    pub fn bounded_step(step: f64, stop_distance: f64) -> Self {
        Self {
            mode: RelaxationMode::BoundedStep {
                step,
                stop_distance,
            },
        }
    }

    pub fn with_mode(mut self, mode: RelaxationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if let RelaxationMode::BoundedStep {
            step,
            stop_distance,
        } = self.mode
        {
            if !step.is_finite() || step <= 0.0 {
                return Err(MathError::InvalidConfiguration {
                    message: format!("Relaxation step must be positive and finite, got {step}"),
                });
            }

            if !stop_distance.is_finite() || stop_distance < 0.0 {
                return Err(MathError::InvalidConfiguration {
                    message: format!(
                        "Stop distance must be non-negative and finite, got {stop_distance}"
                    ),
                });
            }
        }

        Ok(())
    }
}

/// Ergebnis eines Relaxationsschritts
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RelaxationStats {
    /// Sites, die bewegt wurden
    pub moved: usize,
    /// Sites ohne Zelle (kein angrenzendes Dreieck)
    pub skipped_absent: usize,
    /// Sites näher als `stop_distance` am Schwerpunkt
    pub at_rest: usize,
    pub max_displacement: f64,
}

/// Lloyd-Relaxation Engine.
///
/// Ein Aufruf von [`CentroidRelaxer::relax`] ist genau ein Schritt. Danach ist die
/// Triangulation veraltet und muss neu aufgebaut werden.
pub struct CentroidRelaxer {
    config: RelaxationConfig,
}

impl CentroidRelaxer {
    pub fn new(config: RelaxationConfig) -> MathResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RelaxationConfig {
        &self.config
    }

    /// Bewegt jede Site in Richtung des Schwerpunkts ihrer Zelle.
    ///
    /// Alle Zellen werden vorab aus `triangulation` berechnet; Bewegungen innerhalb
    /// dieses Schritts beeinflussen sich also nicht gegenseitig. Schlägt das Clipping
    /// einer Zelle fehl, bleiben alle Sites unverändert.
    pub fn relax(
        &self,
        sites: &mut [Point],
        triangulation: &Triangulation,
        clip: Option<&[Point]>,
    ) -> MathResult<RelaxationStats> {
        let cells = CellBuilder::new(sites, triangulation)?.cells_by_index(clip)?;
        let mut stats = RelaxationStats::default();

        for (site, cell) in sites.iter_mut().zip(cells) {
            // Komplett weggeclippte Zellen sind vorhanden, ihr Schwerpunkt ist der Nullvektor
            let Some(cell) = cell else {
                stats.skipped_absent += 1;
                continue;
            };

            let target = match self.config.mode {
                RelaxationMode::Snap => cell.centroid,
                RelaxationMode::BoundedStep {
                    step,
                    stop_distance,
                } => {
                    let offset = cell.centroid - *site;
                    if offset.length() < stop_distance {
                        stats.at_rest += 1;
                        continue;
                    }
                    *site + offset.normalize_or_zero() * step
                }
            };

            let displacement = target.distance(*site);
            stats.max_displacement = stats.max_displacement.max(displacement);
            stats.moved += 1;
            *site = target;
        }

        debug!(
            "Relaxation ({:?}): {} moved, {} at rest, {} without cell, max displacement {:.4}",
            self.config.mode,
            stats.moved,
            stats.at_rest,
            stats.skipped_absent,
            stats.max_displacement
        );

        Ok(stats)
    }
}
