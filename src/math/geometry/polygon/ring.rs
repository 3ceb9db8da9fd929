// src/math/geometry/polygon/ring.rs

use crate::math::{error::*, geometry::sphere::GeoPoint, utils::*};
use geo::Centroid;

/// Geschlossener Ring im (Längengrad, Breitengrad)-Raum
///
/// Intern wird der Ring offen gespeichert: ein doppelter Schlusspunkt wird beim Erstellen entfernt.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRing {
    vertices: Vec<GeoPoint>,
}

impl GeoRing {
    /// Erstellt einen Ring mit Validierung
    pub fn new(mut vertices: Vec<GeoPoint>) -> MathResult<Self> {
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(MathError::NonFiniteCoordinate { index });
        }

        // Schlusspunkt entfernen, falls der Ring explizit geschlossen wurde
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }

        if vertices.len() < 3 {
            return Err(MathError::InsufficientPoints {
                expected: 3,
                actual: vertices.len(),
            });
        }

        Ok(Self { vertices })
    }

    /// Zugriff auf Vertices (ohne Schlusspunkt)
    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    /// Anzahl der Vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Ist der Ring leer? Nach erfolgreicher Konstruktion nie der Fall.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Prüft ob ein Punkt innerhalb des Rings liegt (Ray-Casting, Odd-Crossing-Regel)
    ///
    /// Auf den Nenner wird ein kleines Epsilon addiert, damit horizontale Kanten nicht durch
    /// Null teilen. Solche Kanten werden durch die Vorzeichenprüfung ohnehin nie gezählt.
    pub fn contains(&self, point: GeoPoint) -> bool {
        if !point.is_finite() {
            return false;
        }

        let lat = point.latitude;
        let lon = point.longitude;
        let n = self.vertices.len();

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = (self.vertices[i].longitude, self.vertices[i].latitude);
            let (xj, yj) = (self.vertices[j].longitude, self.vertices[j].latitude);

            let crosses = (yi > lat) != (yj > lat)
                && lon < (xj - xi) * (lat - yi) / (yj - yi + constants::RAY_CAST_EPSILON) + xi;
            if crosses {
                inside = !inside;
            }
            j = i;
        }

        inside
    }

    /// Arithmetisches Mittel aller Vertices
    pub fn vertex_centroid(&self) -> GeoPoint {
        let n = self.vertices.len() as f32;
        let (sum_lat, sum_lon) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(lat, lon), v| (lat + v.latitude, lon + v.longitude));
        GeoPoint::new(sum_lat / n, sum_lon / n)
    }

    /// Flächenschwerpunkt über `geo`, fällt bei degenerierten Ringen auf das Vertex-Mittel zurück
    pub fn area_centroid(&self) -> GeoPoint {
        let exterior: Vec<(f64, f64)> = self
            .vertices
            .iter()
            .map(|v| (v.longitude as f64, v.latitude as f64))
            .collect();
        let polygon = geo::Polygon::new(geo::LineString::from(exterior), vec![]);

        match polygon.centroid() {
            Some(c) if c.x().is_finite() && c.y().is_finite() => {
                GeoPoint::new(c.y() as f32, c.x() as f32)
            }
            _ => self.vertex_centroid(),
        }
    }

    /// Derselbe Ring, beginnend bei Vertex `start`
    pub fn rotated(&self, start: usize) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.rotate_left(start % self.vertices.len());
        Self { vertices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use geo::Contains;

    fn ring(points: &[(f32, f32)]) -> GeoRing {
        GeoRing::new(
            points
                .iter()
                .map(|&(lat, lon)| GeoPoint::new(lat, lon))
                .collect(),
        )
        .unwrap()
    }

    fn square() -> GeoRing {
        ring(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)])
    }

    /// L-förmiger, nicht konvexer Ring
    fn l_shape() -> GeoRing {
        ring(&[
            (0.0, 0.0),
            (0.0, 20.0),
            (10.0, 20.0),
            (10.0, 10.0),
            (20.0, 10.0),
            (20.0, 0.0),
        ])
    }

    #[test]
    fn test_rejects_too_few_points() {
        let err = GeoRing::new(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)]);
        assert_eq!(
            err,
            Err(MathError::InsufficientPoints {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_closing_vertex_is_dropped() {
        let closed = ring(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (0.0, 0.0)]);
        assert_eq!(closed.len(), 3);
    }

    #[test]
    fn test_rejects_non_finite_vertices() {
        let err = GeoRing::new(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(f32::NAN, 1.0),
            GeoPoint::new(1.0, 1.0),
        ]);
        assert_eq!(err, Err(MathError::NonFiniteCoordinate { index: 1 }));
    }

    #[test]
    fn test_convex_centroid_is_inside() {
        let square = square();
        let centroid = square.vertex_centroid();
        assert_abs_diff_eq!(centroid.latitude, 5.0, epsilon = 1e-5);
        assert_abs_diff_eq!(centroid.longitude, 5.0, epsilon = 1e-5);
        assert!(square.contains(centroid));

        let triangle = ring(&[(-10.0, -10.0), (30.0, 0.0), (-10.0, 10.0)]);
        assert!(triangle.contains(triangle.vertex_centroid()));
    }

    #[test]
    fn test_outside_points() {
        let square = square();
        assert!(!square.contains(GeoPoint::new(15.0, 5.0)));
        assert!(!square.contains(GeoPoint::new(5.0, -1.0)));
        assert!(!square.contains(GeoPoint::new(f32::NAN, 5.0)));
        // Einbuchtung des L
        assert!(!l_shape().contains(GeoPoint::new(15.0, 15.0)));
        assert!(l_shape().contains(GeoPoint::new(5.0, 15.0)));
    }

    #[test]
    fn test_classification_is_invariant_under_ring_rotation() {
        let shape = l_shape();
        let queries = [
            GeoPoint::new(5.0, 5.0),
            GeoPoint::new(15.0, 15.0),
            GeoPoint::new(5.0, 15.0),
            GeoPoint::new(15.0, 5.0),
            GeoPoint::new(-1.0, 3.0),
            GeoPoint::new(10.0, 5.0),
        ];
        for query in queries {
            let expected = shape.contains(query);
            for start in 0..shape.len() {
                assert_eq!(
                    shape.rotated(start).contains(query),
                    expected,
                    "start {start}, query {query:?}"
                );
            }
        }
    }

    #[test]
    fn test_horizontal_edges_do_not_divide_by_zero() {
        // Abfrage exakt auf Höhe der unteren Kante
        let square = square();
        let on_edge_height = GeoPoint::new(0.0, 5.0);
        let _ = square.contains(on_edge_height);
        assert!(square.contains(GeoPoint::new(1e-3, 5.0)));
    }

    #[test]
    fn test_agrees_with_geo_contains_away_from_edges() {
        let shape = l_shape();
        let polygon = geo::Polygon::new(
            geo::LineString::from(
                shape
                    .vertices()
                    .iter()
                    .map(|v| (v.longitude as f64, v.latitude as f64))
                    .collect::<Vec<_>>(),
            ),
            vec![],
        );
        for lat in [-2.5, 2.5, 7.5, 12.5, 17.5, 22.5] {
            for lon in [-2.5, 2.5, 7.5, 12.5, 17.5, 22.5] {
                let ours = shape.contains(GeoPoint::new(lat, lon));
                let theirs = polygon.contains(&geo::Point::new(lon as f64, lat as f64));
                assert_eq!(ours, theirs, "({lat}, {lon})");
            }
        }
    }

    #[test]
    fn test_area_centroid_of_square() {
        let c = square().area_centroid();
        assert_abs_diff_eq!(c.latitude, 5.0, epsilon = 1e-4);
        assert_abs_diff_eq!(c.longitude, 5.0, epsilon = 1e-4);
    }
}
