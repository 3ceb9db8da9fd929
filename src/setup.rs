// ./src/setup.rs
use bevy::prelude::*;

/// Der Globus wird komplett über egui gezeichnet, die Kamera liefert nur das Fenster-Target
pub fn setup_scene(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}
