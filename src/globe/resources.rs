// src/globe/resources.rs
use crate::globe::error::GlobeResult;
use crate::math::geometry::sphere::CameraProjector;
use crate::render::palette::GlobeStyle;
use bevy::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

/// Alle einstellbaren Konstanten des Globus.
///
/// Geschwindigkeiten sind in Radiant pro Frame angegeben, Zeiten in Sekunden.
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct GlobeSettings {
    // --- Geometrie ---
    pub canvas_size: f32,
    pub sphere_radius: f32,
    pub focal_length: f32,
    /// Abstand der Marker über der Kugeloberfläche
    pub marker_altitude: f32,

    // --- Sichtbarkeit (Schwellen auf depth_scale) ---
    pub land_visibility_threshold: f32,
    pub marker_threshold: f32,
    pub label_threshold: f32,
    pub pulse_threshold: f32,

    // --- Marker ---
    pub marker_size: f32,
    pub hit_radius_factor: f32,
    pub pulse_period_secs: f32,

    // --- Interaktion ---
    pub ambient_speed: f32,
    pub hover_speed: f32,
    pub drag_sensitivity: f32,
    pub drag_quiet_secs: f32,
    pub leave_quiet_secs: f32,

    // --- Darstellung ---
    pub style: GlobeStyle,
    pub show_grid: bool,
    pub show_land: bool,
    pub show_marker_ids: bool,
    pub show_ocean_labels: bool,
    pub snapshot_path: String,
}

impl Default for GlobeSettings {
    fn default() -> Self {
        Self {
            // Geometrie
            canvas_size: 600.0,
            sphere_radius: 240.0,
            focal_length: 960.0,
            marker_altitude: 5.0,

            // Sichtbarkeit
            land_visibility_threshold: 0.5,
            marker_threshold: 0.55,
            label_threshold: 0.6,
            pulse_threshold: 0.85,

            // Marker
            marker_size: 6.0,
            hit_radius_factor: 2.0,
            pulse_period_secs: 2.0,

            // Interaktion
            ambient_speed: 0.003,
            hover_speed: 0.001,
            drag_sensitivity: 0.005,
            drag_quiet_secs: 2.0,
            leave_quiet_secs: 1.0,

            // Darstellung
            style: GlobeStyle::Hologram,
            show_grid: true,
            show_land: true,
            show_marker_ids: true,
            show_ocean_labels: true,
            snapshot_path: "globe_snapshot.svg".to_string(),
        }
    }
}

impl GlobeSettings {
    pub fn projector(&self) -> GlobeResult<CameraProjector> {
        Ok(CameraProjector::new(self.sphere_radius, self.focal_length)?)
    }

    pub fn marker_radius(&self) -> f32 {
        self.sphere_radius + self.marker_altitude
    }

    pub fn center(&self) -> Vec2 {
        Vec2::splat(self.canvas_size * 0.5)
    }

    pub fn interaction_tuning(&self) -> InteractionTuning {
        InteractionTuning {
            ambient_speed: self.ambient_speed,
            hover_speed: self.hover_speed,
            drag_sensitivity: self.drag_sensitivity,
            drag_quiet: quiet_period(self.drag_quiet_secs),
            leave_quiet: quiet_period(self.leave_quiet_secs),
        }
    }

    pub fn snapshot_path(&self) -> PathBuf {
        PathBuf::from(&self.snapshot_path)
    }
}

/// Negative Werte werden zu null, unendliche und zu große zu `Duration::MAX`
fn quiet_period(secs: f32) -> Duration {
    Duration::try_from_secs_f32(secs.max(0.0)).unwrap_or(Duration::MAX)
}

/// Der Teil der Einstellungen, den die Interaktions-Zustandsmaschine braucht
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionTuning {
    pub ambient_speed: f32,
    pub hover_speed: f32,
    pub drag_sensitivity: f32,
    pub drag_quiet: Duration,
    pub leave_quiet: Duration,
}

impl Default for InteractionTuning {
    fn default() -> Self {
        GlobeSettings::default().interaction_tuning()
    }
}

/// Pfad der Bojen-Datei aus der Kommandozeile
#[derive(Resource, Debug, Clone, Default)]
pub struct MarkerSource(pub Option<PathBuf>);

impl MarkerSource {
    pub fn from_args() -> Self {
        Self(std::env::args().nth(1).map(PathBuf::from))
    }
}
