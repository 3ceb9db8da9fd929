// src/math/geometry/sphere/projection.rs

use crate::math::{
    error::*,
    geometry::sphere::coordinates::{GeoPoint, to_cartesian},
    types::*,
    utils::*,
};

/// Ergebnis einer Projektion auf die Zeichenfläche. Wird jeden Frame neu berechnet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    /// Position in logischen Pixeln (y wächst nach unten)
    pub screen: Vec2,
    /// Perspektivischer Faktor F / (F + d), mit dem die Position skaliert wurde
    pub perspective: f32,
    /// Auf [0, 1] normierter Tiefenfaktor: 1 = vorderster Kugelpunkt, 0 = hinterster
    pub depth_scale: f32,
    /// Rotierte z-Koordinate (negativ = zum Betrachter hin)
    pub depth: f32,
}

impl ProjectedPoint {
    /// `true`, wenn der Tiefenfaktor die Schwelle überschreitet
    pub fn is_visible(&self, threshold: f32) -> bool {
        self.depth_scale > threshold
    }
}

/// Der eine Projektor, den Renderer und Interaktion gemeinsam nutzen.
///
/// Rotation um die y-Achse, danach perspektivische Division. Die Tiefe `d` wird ab der
/// vorderen Tangentialebene der Kugel gemessen (`d = rz + R`), dadurch ist der
/// perspektivische Faktor für alle Punkte auf der Kugel höchstens 1 und nichts verlässt
/// die Kugelscheibe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraProjector {
    sphere_radius: f32,
    focal_length: f32,
}

impl CameraProjector {
    pub fn new(sphere_radius: f32, focal_length: f32) -> MathResult<Self> {
        if !(sphere_radius.is_finite() && sphere_radius > 0.0) {
            return Err(MathError::InvalidConfiguration {
                message: "Sphere radius must be positive for projection.".to_string(),
            });
        }
        if !(focal_length.is_finite() && focal_length > 0.0) {
            return Err(MathError::InvalidConfiguration {
                message: "Focal length must be positive for projection.".to_string(),
            });
        }
        Ok(Self {
            sphere_radius,
            focal_length,
        })
    }

    pub fn sphere_radius(&self) -> f32 {
        self.sphere_radius
    }

    pub fn focal_length(&self) -> f32 {
        self.focal_length
    }

    /// Perspektivischer Faktor des hintersten Kugelpunkts
    pub fn back_perspective(&self) -> f32 {
        self.focal_length / (self.focal_length + 2.0 * self.sphere_radius)
    }

    /// Radius der sichtbaren Kugelsilhouette auf der Zeichenfläche
    pub fn silhouette_radius(&self) -> f32 {
        let f = self.focal_length;
        let r = self.sphere_radius;
        f * r / (f * (f + 2.0 * r)).sqrt()
    }

    /// Tiefenfaktor am Horizont, also dort, wo Sehstrahlen die Kugel tangieren
    pub fn horizon_depth_scale(&self) -> f32 {
        let r = self.sphere_radius;
        let camera_distance = self.focal_length + r;
        let rz = -r * r / camera_distance;
        self.depth_scale_for(self.perspective_for(rz))
    }

    fn perspective_for(&self, rotated_z: f32) -> f32 {
        let d = rotated_z + self.sphere_radius;
        self.focal_length / (self.focal_length + d).max(constants::EPSILON)
    }

    fn depth_scale_for(&self, perspective: f32) -> f32 {
        let back = self.back_perspective();
        comparison::inverse_lerp(back, 1.0, perspective).clamp(0.0, 1.0)
    }

    /// Rotiert `point` um die y-Achse und projiziert ihn relativ zu `center`
    pub fn project(&self, point: Point3D, rotation: f32, center: Vec2) -> ProjectedPoint {
        let (sin_r, cos_r) = rotation.sin_cos();
        let rotated_x = point.x * cos_r + point.z * sin_r;
        let rotated_z = -point.x * sin_r + point.z * cos_r;

        let perspective = self.perspective_for(rotated_z);

        ProjectedPoint {
            screen: Vec2::new(
                center.x + rotated_x * perspective,
                center.y - point.y * perspective,
            ),
            perspective,
            depth_scale: self.depth_scale_for(perspective),
            depth: rotated_z,
        }
    }

    /// Abkürzung für geografische Punkte auf einer Kugel mit `radius`
    ///
    /// Gibt `None` zurück, wenn der Punkt nicht endlich ist.
    pub fn project_geo(
        &self,
        point: GeoPoint,
        radius: f32,
        rotation: f32,
        center: Vec2,
    ) -> Option<ProjectedPoint> {
        if !point.is_finite() {
            return None;
        }
        Some(self.project(to_cartesian(point, radius), rotation, center))
    }

    /// Längengrad, der bei `rotation` dem Betrachter am nächsten liegt
    pub fn front_meridian_deg(&self, rotation: f32) -> f32 {
        angles::wrap_longitude_deg(angles::rad_to_deg(rotation) - 90.0)
    }
}
