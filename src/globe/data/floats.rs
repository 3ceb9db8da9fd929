// src/globe/data/floats.rs

use crate::globe::error::{GlobeError, GlobeResult};
use crate::math::geometry::sphere::GeoPoint;
use bevy::log::{info, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloatStatus {
    Active,
    Transmitting,
}

impl FloatStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FloatStatus::Active => "active",
            FloatStatus::Transmitting => "transmitting",
        }
    }
}

/// Eine ARGO-Boje. Wird beim Mounten erzeugt und danach nie verändert.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatMarker {
    pub id: String,
    pub position: GeoPoint,
    pub status: FloatStatus,
    /// Tauchtiefe in Metern
    pub depth: f32,
}

impl FloatMarker {
    pub fn new(id: impl Into<String>, lat: f32, lng: f32, status: FloatStatus, depth: f32) -> Self {
        Self {
            id: id.into(),
            position: GeoPoint::new(lat, lng),
            status,
            depth,
        }
    }

    /// Marker mit nicht-endlichen Koordinaten werden beim Zeichnen und Hit-Test übersprungen
    pub fn is_renderable(&self) -> bool {
        self.position.is_finite()
    }
}

/// Eintrag im JSON-Format (`lat`/`lng` wie in der Web-Vorlage)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FloatRecord {
    id: String,
    lat: f32,
    lng: f32,
    status: FloatStatus,
    depth: f32,
}

impl From<FloatRecord> for FloatMarker {
    fn from(record: FloatRecord) -> Self {
        FloatMarker::new(record.id, record.lat, record.lng, record.status, record.depth)
    }
}

/// Die eingebauten zehn Beispiel-Bojen
pub fn sample_floats() -> Vec<FloatMarker> {
    use FloatStatus::*;
    vec![
        FloatMarker::new("ARG001", 45.2642, -75.7035, Active, 1500.0),
        FloatMarker::new("ARG002", 40.7589, -73.9851, Transmitting, 2000.0),
        FloatMarker::new("ARG003", 34.0522, -118.2437, Active, 1200.0),
        FloatMarker::new("ARG004", 51.5074, -0.1278, Active, 1800.0),
        FloatMarker::new("ARG005", 35.6762, 139.6503, Transmitting, 2200.0),
        FloatMarker::new("ARG006", -33.8688, 151.2093, Active, 1600.0),
        FloatMarker::new("ARG007", 37.7749, -122.4194, Active, 1400.0),
        FloatMarker::new("ARG008", 55.7558, 37.6173, Transmitting, 1900.0),
        FloatMarker::new("ARG009", -22.9068, -43.1729, Active, 1700.0),
        FloatMarker::new("ARG010", 19.4326, -99.1332, Transmitting, 2100.0),
    ]
}

/// Parst eine JSON-Liste von Bojen. Doppelte IDs sind ein Fehler.
pub fn parse_floats(json: &str) -> GlobeResult<Vec<FloatMarker>> {
    let records: Vec<FloatRecord> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    let mut markers = Vec::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.clone()) {
            return Err(GlobeError::DuplicateFloatId(record.id));
        }
        markers.push(FloatMarker::from(record));
    }
    Ok(markers)
}

pub fn load_floats_from_path(path: &Path) -> GlobeResult<Vec<FloatMarker>> {
    let json = std::fs::read_to_string(path)?;
    let markers = parse_floats(&json)?;
    info!("Loaded {} floats from '{}'.", markers.len(), path.display());
    Ok(markers)
}

/// Bojen aus `path`, sonst die Beispiel-Bojen
pub fn floats_or_sample(path: Option<&Path>) -> Vec<FloatMarker> {
    match path {
        Some(path) => load_floats_from_path(path).unwrap_or_else(|err| {
            warn!("Falling back to sample floats: {}", err);
            sample_floats()
        }),
        None => sample_floats(),
    }
}

/// Legende: Anzahl pro Status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub active: usize,
    pub transmitting: usize,
}

impl StatusCounts {
    pub fn of(markers: &[FloatMarker]) -> Self {
        markers
            .iter()
            .fold(Self::default(), |mut counts, m| {
                match m.status {
                    FloatStatus::Active => counts.active += 1,
                    FloatStatus::Transmitting => counts.transmitting += 1,
                }
                counts
            })
    }

    pub fn total(&self) -> usize {
        self.active + self.transmitting
    }
}

/// Simulierte Messwerte für das Detail-Panel
///
/// Deterministisch aus der Boje abgeleitet, damit wiederholtes Auswählen dieselben Werte zeigt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatReadings {
    pub temperature_c: f32,
    pub salinity_psu: f32,
    pub pressure_dbar: u32,
    pub cycles: u32,
    pub days_since_deployment: u32,
}

impl FloatReadings {
    pub fn for_marker(marker: &FloatMarker) -> Self {
        let mut rng = StdRng::seed_from_u64(seed_from_id(&marker.id));
        Self {
            temperature_c: rng.random_range(5.0..25.0),
            salinity_psu: rng.random_range(34.0..36.0),
            pressure_dbar: (marker.depth.max(0.0) * 0.1).round() as u32,
            cycles: rng.random_range(50..250),
            days_since_deployment: rng.random_range(0..365),
        }
    }
}

// FNV-1a, stabil über Programmläufe hinweg
fn seed_from_id(id: &str) -> u64 {
    id.bytes().fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
        (hash ^ byte as u64).wrapping_mul(0x0000_0100_0000_01b3)
    })
}
