// src/globe/view.rs
use crate::globe::data::FloatMarker;
use crate::globe::error::GlobeResult;
use crate::globe::resources::GlobeSettings;
use crate::math::geometry::sphere::{CameraProjector, GeoPoint, ProjectedPoint};
use crate::math::types::Vec2;

/// Momentaufnahme der Projektion für einen Frame.
///
/// Renderer und Hit-Test bekommen dieselbe Instanz, damit beide exakt dieselben
/// Bildschirmpositionen sehen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobeView {
    pub projector: CameraProjector,
    pub rotation: f32,
    pub center: Vec2,
    pub marker_radius: f32,
    pub marker_size: f32,
    pub marker_threshold: f32,
    pub hit_radius_factor: f32,
}

impl GlobeView {
    pub fn new(settings: &GlobeSettings, rotation: f32) -> GlobeResult<Self> {
        Ok(Self {
            projector: settings.projector()?,
            rotation,
            center: settings.center(),
            marker_radius: settings.marker_radius(),
            marker_size: settings.marker_size,
            marker_threshold: settings.marker_threshold,
            hit_radius_factor: settings.hit_radius_factor,
        })
    }

    pub fn sphere_radius(&self) -> f32 {
        self.projector.sphere_radius()
    }

    /// Punkt auf der Kugeloberfläche
    pub fn project_surface(&self, point: GeoPoint) -> Option<ProjectedPoint> {
        self.projector
            .project_geo(point, self.projector.sphere_radius(), self.rotation, self.center)
    }

    /// Marker-Position knapp über der Oberfläche. `None` für nicht darstellbare Marker.
    pub fn project_marker(&self, marker: &FloatMarker) -> Option<ProjectedPoint> {
        self.projector
            .project_geo(marker.position, self.marker_radius, self.rotation, self.center)
    }

    pub fn marker_screen_size(&self, projected: &ProjectedPoint) -> f32 {
        self.marker_size * projected.depth_scale
    }

    pub fn hit_radius(&self, projected: &ProjectedPoint) -> f32 {
        self.hit_radius_factor * self.marker_screen_size(projected)
    }

    pub fn front_meridian_deg(&self) -> f32 {
        self.projector.front_meridian_deg(self.rotation)
    }
}
