// src/globe/events.rs
use crate::globe::data::{FloatMarker, FloatReadings, OceanRegion};
use crate::globe::hit_test::RegionHit;
use bevy::prelude::*;

/// Ein Marker wurde angeklickt
#[derive(Event, Debug, Clone)]
pub struct FloatSelected {
    pub marker: FloatMarker,
    pub readings: FloatReadings,
}

impl FloatSelected {
    pub fn of(marker: &FloatMarker) -> Self {
        Self {
            marker: marker.clone(),
            readings: FloatReadings::for_marker(marker),
        }
    }
}

/// Ein Punkt auf der Kugel ohne Marker wurde angeklickt
#[derive(Event, Debug, Clone)]
pub struct RegionSelected {
    pub hit: RegionHit,
}

/// Der aktuelle Frame soll als SVG gespeichert werden
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct SnapshotRequested;

/// Was die Detailansicht gerade zeigt
#[derive(Resource, Debug, Clone, Default)]
pub enum Selection {
    #[default]
    None,
    Float {
        marker: FloatMarker,
        readings: FloatReadings,
    },
    Region(RegionHit),
}

impl Selection {
    pub fn float_id(&self) -> Option<&str> {
        match self {
            Selection::Float { marker, .. } => Some(marker.id.as_str()),
            _ => None,
        }
    }

    pub fn region(&self) -> Option<OceanRegion> {
        match self {
            Selection::Region(hit) => Some(hit.region),
            _ => None,
        }
    }
}

/// Übernimmt die Auswahl-Events; das letzte Event eines Frames gewinnt
pub fn apply_selection_events(
    mut floats: EventReader<FloatSelected>,
    mut regions: EventReader<RegionSelected>,
    mut selection: ResMut<Selection>,
) {
    for event in floats.read() {
        info!(
            "Float {} selected ({}, depth {} m).",
            event.marker.id,
            event.marker.status.label(),
            event.marker.depth
        );
        *selection = Selection::Float {
            marker: event.marker.clone(),
            readings: event.readings,
        };
    }
    for event in regions.read() {
        info!(
            "Region {} selected at ({:.1}, {:.1}).",
            event.hit.region.name(),
            event.hit.point.latitude,
            event.hit.point.longitude
        );
        *selection = Selection::Region(event.hit.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::globe::data::floats::sample_floats;
    use crate::math::geometry::sphere::GeoPoint;

    fn app() -> App {
        let mut app = App::new();
        app.add_event::<FloatSelected>()
            .add_event::<RegionSelected>()
            .init_resource::<Selection>()
            .add_systems(Update, apply_selection_events);
        app
    }

    #[test]
    fn test_float_event_updates_selection() {
        let mut app = app();
        let marker = sample_floats().remove(0);
        app.world.send_event(FloatSelected::of(&marker));
        app.update();
        assert_eq!(app.world.resource::<Selection>().float_id(), Some("ARG001"));
    }

    #[test]
    fn test_region_event_replaces_float_selection() {
        let mut app = app();
        let marker = sample_floats().remove(0);
        app.world.send_event(FloatSelected::of(&marker));
        app.update();

        let point = GeoPoint::new(-30.0, 10.0);
        app.world.send_event(RegionSelected {
            hit: RegionHit {
                point,
                region: OceanRegion::nearest(point),
                classified: OceanRegion::classify(point),
                land: None,
            },
        });
        app.update();
        let selection = app.world.resource::<Selection>();
        assert_eq!(selection.float_id(), None);
        assert_eq!(selection.region(), Some(OceanRegion::nearest(point)));
    }
}
