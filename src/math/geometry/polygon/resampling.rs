// src/math/geometry/polygon/resampling.rs

use super::ordering::sort_clockwise;
use crate::math::{
    error::{MathError, MathResult},
    types::Point,
    utils::{
        constants::TAU,
        simple_geometry::{mean_point, segment_intersection},
    },
};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Konfiguration für die zufällige Formerzeugung aus einem Zellpolygon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResampleConfig {
    /// Untere Grenze der radialen Verschiebung relativ zur Originaldistanz, in (0, 1].
    /// 1.0 bedeutet keine Verschiebung.
    pub relax_factor: f64,
    /// Anzahl der Strahlen, mit denen das Polygon neu abgetastet wird
    pub angle_step_count: usize,
    /// Zufällige statt gleichmäßig verteilte Strahlwinkel
    pub random_angle_movement: bool,
    /// Originale Eckpunkte zusätzlich zu den Schnittpunkten behalten
    pub keep_original_shape: bool,
    /// Gleichmäßige Winkel mit zufälligem Startwinkel statt 0
    pub random_start_angle: bool,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            relax_factor: 0.9,
            angle_step_count: 36,
            random_angle_movement: false,
            keep_original_shape: false,
            random_start_angle: false,
        }
    }
}

impl ResampleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_relax_factor(mut self, relax_factor: f64) -> Self {
        self.relax_factor = relax_factor;
        self
    }

    pub fn with_angle_steps(mut self, count: usize) -> Self {
        self.angle_step_count = count;
        self
    }

    pub fn with_random_angles(mut self, enabled: bool) -> Self {
        self.random_angle_movement = enabled;
        self
    }

    pub fn with_original_shape(mut self, keep: bool) -> Self {
        self.keep_original_shape = keep;
        self
    }

    pub fn with_random_start_angle(mut self, enabled: bool) -> Self {
        self.random_start_angle = enabled;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if !(self.relax_factor > 0.0 && self.relax_factor <= 1.0) {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Relax factor must be in (0.0, 1.0], got {}",
                    self.relax_factor
                ),
            });
        }

        Ok(())
    }
}

/// Erzeugt zufällige Varianten eines Polygons.
///
/// Ablauf:
/// 1. Strahlen vom Mittelpunkt C in `angle_step_count` Richtungen
/// 2. je Strahl der Schnittpunkt mit der *ersten* getroffenen Polygonkante (in Eckpunkt-Reihenfolge)
/// 3. jeden Punkt radial zufällig in Richtung C verschieben
///
/// Fehlende Schnittpunkte reduzieren nur die Eckpunktzahl, bis hin zu einem leeren Polygon.
#[derive(Debug, Clone)]
pub struct ShapeResampler {
    config: ResampleConfig,
}

impl ShapeResampler {
    pub fn new(config: ResampleConfig) -> MathResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ResampleConfig {
        &self.config
    }

    /// Erzeugt eine zufällige Form aus `polygon`.
    pub fn resample<R: Rng + ?Sized>(&self, polygon: &[Point], rng: &mut R) -> Vec<Point> {
        let center = mean_point(polygon);

        let angles = self.angle_list(rng);
        let resampled = self.resample_polygon(polygon, center, &angles);

        self.jitter(&resampled, center, rng)
    }

    /// Aufsteigend sortierte Strahlwinkel in Radiant.
    ///
    /// Bei zufälligen Winkeln werden Duplikate übersprungen (nicht ersetzt), die Liste
    /// kann also kürzer als `angle_step_count` sein.
    pub fn angle_list<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        let count = self.config.angle_step_count;
        let mut angles = Vec::with_capacity(count);

        if self.config.random_angle_movement {
            for _ in 0..count {
                let angle = rng.random_range(0.0..TAU);
                if angles.contains(&angle) {
                    continue;
                }
                angles.push(angle);
            }
        } else if count > 0 {
            let start_angle = if self.config.random_start_angle {
                rng.random_range(0.0..TAU)
            } else {
                0.0
            };
            let spacing = TAU / count as f64;
            angles.extend((0..count).map(|i| start_angle + i as f64 * spacing));
        }

        angles.sort_by(f64::total_cmp);
        angles
    }

    /// Tastet `polygon` entlang von Strahlen ab, die von `center` ausgehen.
    ///
    /// Die Strahllänge ist `2 * |center|` (Betrag vom Koordinatenursprung aus).
    /// Das Ergebnis ist im Uhrzeigersinn um seinen eigenen Mittelwert sortiert.
    pub fn resample_polygon(&self, polygon: &[Point], center: Point, angles: &[f64]) -> Vec<Point> {
        let length = center.length() * 2.0;
        let n = polygon.len();

        let mut resampled = Vec::with_capacity(angles.len() + n);

        if self.config.keep_original_shape {
            resampled.extend_from_slice(polygon);
        }

        for &angle in angles {
            let ray_end = center + Point::new(angle.cos(), angle.sin()) * length;

            // Erste Kante in Eckpunkt-Reihenfolge, nicht die nächstgelegene
            let hit = (0..n).find_map(|j| {
                segment_intersection(center, ray_end, polygon[j], polygon[(j + 1) % n])
            });

            if let Some(intersection) = hit {
                resampled.push(intersection);
            }
        }

        sort_clockwise(&mut resampled);
        resampled
    }

    /// Verschiebt jeden Punkt radial auf eine zufällige Distanz in
    /// `[distance * relax_factor, distance]` zu `center`.
    pub fn jitter<R: Rng + ?Sized>(&self, points: &[Point], center: Point, rng: &mut R) -> Vec<Point> {
        let mut shape: Vec<Point> = points
            .iter()
            .map(|&point| {
                let offset = point - center;
                let distance = offset.length();

                let max = distance;
                let min = (distance * self.config.relax_factor).min(max);
                let new_distance = rng.random_range(min..=max);

                if new_distance == distance {
                    point
                } else {
                    center + offset.normalize_or_zero() * new_distance
                }
            })
            .collect();

        sort_clockwise(&mut shape);
        shape
    }
}
