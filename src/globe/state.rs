// src/globe/state.rs
use crate::math::utils::angles;
use bevy::prelude::*;
use std::time::Duration;

/// Ob der Globus gerade eingebunden ist. Nur im Zustand `Mounted` existiert eine `GlobeSession`.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GlobeViewState {
    Hidden,
    #[default]
    Mounted,
}

/// Rotations- und Interaktionszustand einer Sitzung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Immer in [0, 2π)
    rotation_angle: f32,
    pub is_dragging: bool,
    pub is_hovering: bool,
    pub rotation_speed: f32,
    pub last_interaction: Duration,
}

impl CameraState {
    pub fn new(ambient_speed: f32) -> Self {
        Self {
            rotation_angle: 0.0,
            is_dragging: false,
            is_hovering: false,
            rotation_speed: ambient_speed,
            last_interaction: Duration::ZERO,
        }
    }

    pub fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }

    pub fn set_rotation_angle(&mut self, angle: f32) {
        self.rotation_angle = angles::normalize_angle(angle);
    }

    /// Addiert `delta` und normalisiert
    pub fn rotate_by(&mut self, delta: f32) {
        self.set_rotation_angle(self.rotation_angle + delta);
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Gewünschte Mauszeiger-Form über der Zeichenfläche
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorAffordance {
    #[default]
    Default,
    Grab,
    Grabbing,
    Pointer,
}

impl CursorAffordance {
    /// Ziehen hat Vorrang, dann Marker unter dem Zeiger, dann Hover
    pub fn resolve(camera: &CameraState, over_marker: bool) -> Self {
        if camera.is_dragging {
            CursorAffordance::Grabbing
        } else if over_marker {
            CursorAffordance::Pointer
        } else if camera.is_hovering {
            CursorAffordance::Grab
        } else {
            CursorAffordance::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::constants::TAU;

    #[test]
    fn test_rotation_is_normalized() {
        let mut camera = CameraState::new(0.003);
        camera.rotate_by(-0.5);
        assert!(camera.rotation_angle() >= 0.0 && camera.rotation_angle() < TAU);
        camera.rotate_by(100.0);
        assert!(camera.rotation_angle() >= 0.0 && camera.rotation_angle() < TAU);
        camera.set_rotation_angle(f32::NAN);
        assert_eq!(camera.rotation_angle(), 0.0);
    }

    #[test]
    fn test_cursor_priority() {
        let mut camera = CameraState::default();
        assert_eq!(CursorAffordance::resolve(&camera, false), CursorAffordance::Default);
        camera.is_hovering = true;
        assert_eq!(CursorAffordance::resolve(&camera, false), CursorAffordance::Grab);
        assert_eq!(CursorAffordance::resolve(&camera, true), CursorAffordance::Pointer);
        camera.is_dragging = true;
        assert_eq!(CursorAffordance::resolve(&camera, true), CursorAffordance::Grabbing);
    }
}
