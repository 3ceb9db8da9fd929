// ./src/main.rs
use bevy::input::common_conditions::input_toggle_active;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

// Eigene Module deklarieren
pub mod debug;
pub mod globe;
pub mod math;
pub mod render;
pub mod setup;

use debug::ui::{globe_settings_window_system, globe_side_panel_system};
use globe::events::*;
use globe::resources::{GlobeSettings, MarkerSource};
use globe::state::GlobeViewState;
use globe::systems::*;
use render::palette::GlobeStyle;
use setup::setup_scene;

fn main() {
    let settings = GlobeSettings::default();
    let background = settings.style.palette().background;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "ARGO Float Globe".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .add_plugins(
            ResourceInspectorPlugin::<GlobeSettings>::default()
                .run_if(input_toggle_active(false, KeyCode::F1)),
        )
        .register_type::<GlobeSettings>()
        .register_type::<GlobeStyle>()
        .insert_resource(settings)
        .insert_resource(MarkerSource::from_args())
        .insert_resource(ClearColor(background))
        .init_resource::<Selection>()
        .add_event::<FloatSelected>()
        .add_event::<RegionSelected>()
        .add_event::<SnapshotRequested>()
        .init_state::<GlobeViewState>()
        .add_systems(Startup, setup_scene)
        // --- Lebenszyklus ---
        .add_systems(OnEnter(GlobeViewState::Mounted), mount_globe)
        .add_systems(OnExit(GlobeViewState::Mounted), unmount_globe)
        .add_systems(
            Update,
            (
                // Seitenpanel vor dem zentralen Panel, sonst überdeckt egui es
                globe_side_panel_system,
                globe_settings_window_system,
                globe_panel_system,
                apply_selection_events,
            )
                .chain(),
        )
        .add_systems(
            Update,
            (
                snapshot_hotkey_system.run_if(in_state(GlobeViewState::Mounted)),
                handle_snapshot_requests,
                log_window_resized,
            )
                .chain(),
        )
        .run();
}
