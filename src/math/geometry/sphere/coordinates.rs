// src/math/geometry/sphere/coordinates.rs

use crate::math::{types::*, utils::*};
use serde::{Deserialize, Serialize};

/// Geografische Koordinaten in Grad
///
/// Breitengrad in [-90, 90], Längengrad in [-180, 180]. Die Werte werden nicht geklemmt,
/// damit fehlerhafte Eingaben über [`GeoPoint::is_finite`] erkannt und übersprungen werden können.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(alias = "lat")]
    pub latitude: f32,
    #[serde(alias = "lng", alias = "lon")]
    pub longitude: f32,
}

impl GeoPoint {
    pub const fn new(latitude: f32, longitude: f32) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// `true`, wenn beide Komponenten endlich sind
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Konvertiert zu kartesischen Koordinaten auf einer Kugel mit `radius`
    pub fn to_cartesian(&self, radius: f32) -> Point3D {
        to_cartesian(*self, radius)
    }

    /// Planarer Abstand im (lat, lon)-Raum, wie er für die grobe Regionszuordnung genutzt wird
    pub fn planar_distance(&self, other: &GeoPoint) -> f32 {
        let dlat = self.latitude - other.latitude;
        let dlon = self.longitude - other.longitude;
        (dlat * dlat + dlon * dlon).sqrt()
    }
}

/// Geo-zu-Kartesisch für alle Aufrufer (Rendering, Hit-Test, Labels)
///
/// x = r·cos(lat)·cos(lon), y = r·sin(lat), z = r·cos(lat)·sin(lon).
/// Y ist die Polachse.
pub fn to_cartesian(point: GeoPoint, radius: f32) -> Point3D {
    let lat = angles::deg_to_rad(point.latitude);
    let lon = angles::deg_to_rad(point.longitude);
    let cos_lat = lat.cos();

    Point3D::new(
        radius * cos_lat * lon.cos(),
        radius * lat.sin(),
        radius * cos_lat * lon.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_equator_prime_meridian_lies_on_x_axis() {
        let p = to_cartesian(GeoPoint::new(0.0, 0.0), 2.0);
        assert_abs_diff_eq!(p.x, 2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(p.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_north_pole_lies_on_y_axis() {
        let p = to_cartesian(GeoPoint::new(90.0, 123.0), 1.0);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(p.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_east_longitude_has_positive_z() {
        let p = to_cartesian(GeoPoint::new(0.0, 90.0), 1.0);
        assert_abs_diff_eq!(p.z, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_result_stays_on_sphere() {
        for lat in (-90..=90).step_by(15) {
            for lon in (-180..=180).step_by(30) {
                let p = to_cartesian(GeoPoint::new(lat as f32, lon as f32), 200.0);
                assert!(p.is_finite());
                assert_abs_diff_eq!(p.length(), 200.0, epsilon = 1e-2);
            }
        }
    }

    #[test]
    fn test_non_finite_is_detected() {
        assert!(!GeoPoint::new(f32::NAN, 0.0).is_finite());
        assert!(!GeoPoint::new(0.0, f32::INFINITY).is_finite());
        assert!(GeoPoint::new(-33.8, 151.2).is_finite());
    }

    #[test]
    fn test_deserialize_accepts_short_field_names() {
        let p: GeoPoint = serde_json::from_str(r#"{"lat": 10.5, "lng": -20.0}"#).unwrap();
        assert_eq!(p, GeoPoint::new(10.5, -20.0));
    }
}
