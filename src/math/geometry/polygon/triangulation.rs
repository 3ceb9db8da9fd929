// src/math/geometry/polygon/triangulation.rs

use super::ring::GeoRing;
use crate::math::{error::*, geometry::sphere::GeoPoint};
use spade::{ConstrainedDelaunayTriangulation, Point2, Triangulation};
use std::collections::HashMap;

/// Dreiecks-Indizes in die Vertices eines [`GeoRing`]
///
/// Wird einmal im geografischen Raum berechnet. Beim Zeichnen werden nur die Vertices
/// projiziert, die Indizes bleiben gültig.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RingTriangulation {
    pub triangles: Vec<[u32; 3]>,
}

impl RingTriangulation {
    /// Constrained Delaunay über die Ringkanten, danach werden Dreiecke außerhalb des Rings verworfen
    pub fn of(ring: &GeoRing) -> MathResult<Self> {
        let mut cdt: ConstrainedDelaunayTriangulation<Point2<f64>> =
            ConstrainedDelaunayTriangulation::new();

        let mut handles = Vec::with_capacity(ring.len());
        // Spade liefert bei doppelten Punkten denselben Handle, daher zählt der erste Ring-Index
        let mut ring_index_of: HashMap<usize, u32> = HashMap::new();

        for (i, v) in ring.vertices().iter().enumerate() {
            let handle = cdt
                .insert(Point2::new(v.longitude as f64, v.latitude as f64))
                .map_err(|e| MathError::TriangulationFailed {
                    reason: format!("vertex {i} rejected: {e:?}"),
                })?;
            ring_index_of.entry(handle.index()).or_insert(i as u32);
            handles.push(handle);
        }

        let n = handles.len();
        for i in 0..n {
            let from = handles[i];
            let to = handles[(i + 1) % n];
            if from == to {
                continue;
            }
            // Selbstschneidende Ringe: Kante überspringen statt zu paniken
            if cdt.can_add_constraint(from, to) {
                cdt.add_constraint(from, to);
            }
        }

        let mut triangles = Vec::new();
        for face in cdt.inner_faces() {
            let vertices = face.vertices();
            let positions = vertices.map(|v| v.position());
            let centroid = GeoPoint::new(
                ((positions[0].y + positions[1].y + positions[2].y) / 3.0) as f32,
                ((positions[0].x + positions[1].x + positions[2].x) / 3.0) as f32,
            );
            if !ring.contains(centroid) {
                continue;
            }

            let mut indices = [0u32; 3];
            for (slot, vertex) in indices.iter_mut().zip(vertices.iter()) {
                match ring_index_of.get(&vertex.fix().index()) {
                    Some(&index) => *slot = index,
                    None => {
                        return Err(MathError::TriangulationFailed {
                            reason: "face references an unknown vertex".to_string(),
                        });
                    }
                }
            }
            triangles.push(indices);
        }

        Ok(Self { triangles })
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(points: &[(f32, f32)]) -> GeoRing {
        GeoRing::new(
            points
                .iter()
                .map(|&(lat, lon)| GeoPoint::new(lat, lon))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_square_gives_two_triangles() {
        let square = ring(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
        let tri = RingTriangulation::of(&square).unwrap();
        assert_eq!(tri.len(), 2);
        for t in &tri.triangles {
            assert!(t.iter().all(|&i| (i as usize) < square.len()));
        }
    }

    #[test]
    fn test_concave_ring_excludes_notch() {
        let l_shape = ring(&[
            (0.0, 0.0),
            (0.0, 20.0),
            (10.0, 20.0),
            (10.0, 10.0),
            (20.0, 10.0),
            (20.0, 0.0),
        ]);
        let tri = RingTriangulation::of(&l_shape).unwrap();
        // Ein einfaches Polygon mit n Ecken zerfällt in n - 2 Dreiecke
        assert_eq!(tri.len(), l_shape.len() - 2);

        for t in &tri.triangles {
            let v = t.map(|i| l_shape.vertices()[i as usize]);
            let centroid = GeoPoint::new(
                (v[0].latitude + v[1].latitude + v[2].latitude) / 3.0,
                (v[0].longitude + v[1].longitude + v[2].longitude) / 3.0,
            );
            assert!(l_shape.contains(centroid));
        }
    }
}
