// src/globe/data/land.rs

use crate::globe::error::{GlobeError, GlobeResult};
use crate::math::geometry::{
    polygon::{GeoRing, RingTriangulation},
    sphere::GeoPoint,
};
use bevy::log::{debug, info, warn};
use serde::Deserialize;

const BUNDLED_LAND: &str = include_str!("../../../assets/land_polygons.json");

/// Eine Landmasse mit vorberechneter Triangulierung und Label-Position
#[derive(Debug, Clone)]
pub struct LandPolygon {
    pub name: String,
    pub ring: GeoRing,
    /// Einmal im geografischen Raum berechnet, beim Zeichnen nur noch indiziert
    pub triangulation: RingTriangulation,
    pub label_anchor: GeoPoint,
}

impl LandPolygon {
    pub fn new(name: impl Into<String>, vertices: Vec<GeoPoint>) -> GlobeResult<Self> {
        let name = name.into();
        let ring = GeoRing::new(vertices).map_err(|source| GlobeError::InvalidGeometry {
            name: name.clone(),
            source,
        })?;

        let triangulation = RingTriangulation::of(&ring).unwrap_or_else(|err| {
            warn!("Land polygon '{}' is drawn without fill: {}", name, err);
            RingTriangulation::default()
        });
        let label_anchor = ring.area_centroid();

        Ok(Self {
            name,
            ring,
            triangulation,
            label_anchor,
        })
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        self.ring.contains(point)
    }
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: FeatureProperties,
    geometry: Geometry,
}

#[derive(Debug, Default, Deserialize)]
struct FeatureProperties {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: serde_json::Value,
}

impl Geometry {
    /// Äußerer Ring eines `Polygon` als (lat, lon)-Punkte
    fn exterior_ring(&self) -> Option<Vec<GeoPoint>> {
        if self.kind != "Polygon" {
            return None;
        }
        let rings: Vec<Vec<Vec<f32>>> = serde_json::from_value(self.coordinates.clone()).ok()?;
        let exterior = rings.into_iter().next()?;
        exterior
            .into_iter()
            .map(|pair| match pair.as_slice() {
                [lng, lat, ..] => Some(GeoPoint::new(*lat, *lng)),
                _ => None,
            })
            .collect()
    }
}

/// Alle Landmassen, schreibgeschützt nach dem Laden
#[derive(Debug, Clone, Default)]
pub struct LandSet {
    polygons: Vec<LandPolygon>,
}

impl LandSet {
    pub fn new(polygons: Vec<LandPolygon>) -> Self {
        Self { polygons }
    }

    /// Der mitgelieferte Datensatz. Fällt bei einem Fehler auf eine leere Menge zurück.
    pub fn bundled() -> Self {
        Self::from_geojson(BUNDLED_LAND).unwrap_or_else(|err| {
            warn!("Bundled land dataset could not be loaded: {}", err);
            Self::default()
        })
    }

    /// Parst eine GeoJSON-artige FeatureCollection mit [lng, lat]-Paaren.
    ///
    /// Nur ein unlesbares Dokument ist ein Fehler. Einzelne fehlerhafte Features werden
    /// übersprungen.
    pub fn from_geojson(json: &str) -> GlobeResult<Self> {
        let collection: FeatureCollection = serde_json::from_str(json)?;

        let mut polygons = Vec::with_capacity(collection.features.len());
        for (index, feature) in collection.features.into_iter().enumerate() {
            let name = feature
                .properties
                .name
                .unwrap_or_else(|| format!("feature-{index}"));

            let Some(vertices) = feature.geometry.exterior_ring() else {
                warn!(
                    "Skipping land feature '{}': unsupported geometry '{}'.",
                    name, feature.geometry.kind
                );
                continue;
            };

            match LandPolygon::new(name, vertices) {
                Ok(polygon) => {
                    debug!(
                        "Land polygon '{}': {} vertices, {} triangles.",
                        polygon.name,
                        polygon.ring.len(),
                        polygon.triangulation.len()
                    );
                    polygons.push(polygon);
                }
                Err(err) => warn!("Skipping land feature: {}", err),
            }
        }

        info!("Loaded {} land polygons.", polygons.len());
        Ok(Self { polygons })
    }

    pub fn polygons(&self) -> &[LandPolygon] {
        &self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Liegt der Punkt in irgendeiner Landmasse?
    pub fn is_land(&self, point: GeoPoint) -> bool {
        self.land_at(point).is_some()
    }

    pub fn land_at(&self, point: GeoPoint) -> Option<&LandPolygon> {
        self.polygons.iter().find(|p| p.contains(point))
    }
}
