// ./src/debug/ui.rs
use crate::globe::data::{FloatStatus, RegionProfile, StatusCounts};
use crate::globe::events::{Selection, SnapshotRequested};
use crate::globe::resources::GlobeSettings;
use crate::globe::session::GlobeSession;
use crate::globe::state::GlobeViewState;
use crate::math::utils::angles;
use crate::render::palette::GlobeStyle;
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts,
    egui::{self, Color32, RichText, ScrollArea, SidePanel, Slider, Window},
};

fn color32(color: Color) -> Color32 {
    let [r, g, b, a] = color.as_rgba_u8();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

fn bullet_list(ui: &mut egui::Ui, heading: &str, items: &[&str]) {
    ui.label(RichText::new(heading).strong());
    for item in items {
        ui.label(format!("• {item}"));
    }
}

fn region_profile_ui(ui: &mut egui::Ui, profile: &RegionProfile) {
    ui.heading(profile.display_name);
    ui.label(RichText::new(profile.authority).italics());
    ui.separator();

    ui.collapsing("Umweltbedingungen", |ui| {
        egui::Grid::new("region_conditions").num_columns(2).show(ui, |ui| {
            ui.label("Depth");
            ui.label(profile.conditions.depth);
            ui.end_row();
            ui.label("Temperature");
            ui.label(profile.conditions.temperature);
            ui.end_row();
            ui.label("Salinity");
            ui.label(profile.conditions.salinity);
            ui.end_row();
            ui.label("Currents");
            ui.label(profile.conditions.currents);
            ui.end_row();
        });
    });
    ui.collapsing("Lebewesen", |ui| {
        bullet_list(ui, "Marine Animals", profile.animals);
        bullet_list(ui, "Commercial Species", profile.species);
        bullet_list(ui, "Marine Plants", profile.plants);
    });
    ui.collapsing("Menschen & Wirtschaft", |ui| {
        bullet_list(ui, "Coastal Communities", profile.communities);
        ui.label(RichText::new("Economic Importance").strong());
        ui.label(profile.economic_importance);
        ui.label(RichText::new("Conservation").strong());
        ui.label(profile.conservation);
    });
}

/// Linkes Panel: Legende, Auswahl-Details, Schnappschuss, Ein-/Ausblenden
pub fn globe_side_panel_system(
    mut contexts: EguiContexts,
    mut settings: ResMut<GlobeSettings>,
    selection: Res<Selection>,
    session: Option<Res<GlobeSession>>,
    mut snapshots: EventWriter<SnapshotRequested>,
    mut next_state: ResMut<NextState<GlobeViewState>>,
    current_state: Res<State<GlobeViewState>>,
) {
    let palette = settings.style.palette();

    SidePanel::left("globe_side_panel")
        .default_width(300.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("ARGO Floats");

            // --- Legende ---
            let counts = session
                .as_ref()
                .map(|s| StatusCounts::of(s.markers()))
                .unwrap_or_default();
            for (status, count) in [
                (FloatStatus::Active, counts.active),
                (FloatStatus::Transmitting, counts.transmitting),
            ] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("●").color(color32(palette.marker(status))));
                    ui.label(format!("{}: {count}", status.label()));
                });
            }
            ui.label(format!("Total: {}", counts.total()));

            ui.separator();
            ui.horizontal(|ui| {
                ui.label("Stil:");
                for style in GlobeStyle::ALL {
                    ui.selectable_value(&mut settings.style, style, style.label());
                }
            });

            ui.horizontal(|ui| {
                let mounted = *current_state.get() == GlobeViewState::Mounted;
                let caption = if mounted {
                    "Globus ausblenden"
                } else {
                    "Globus einblenden"
                };
                if ui.button(caption).clicked() {
                    next_state.set(if mounted {
                        GlobeViewState::Hidden
                    } else {
                        GlobeViewState::Mounted
                    });
                    info!("Globe visibility toggled, mounted = {}.", !mounted);
                }
                if ui
                    .add_enabled(mounted, egui::Button::new("📷 Schnappschuss"))
                    .clicked()
                {
                    snapshots.send(SnapshotRequested);
                }
            });

            ui.separator();
            ScrollArea::vertical().show(ui, |ui| match &*selection {
                Selection::None => {
                    ui.label("Click a float or an ocean region for details.");
                }
                Selection::Float { marker, readings } => {
                    ui.heading(format!("Float {}", marker.id));
                    egui::Grid::new("float_details").num_columns(2).show(ui, |ui| {
                        ui.label("Status");
                        ui.colored_label(
                            color32(palette.marker(marker.status)),
                            marker.status.label(),
                        );
                        ui.end_row();
                        ui.label("Position");
                        ui.label(format!(
                            "{:.2}°, {:.2}°",
                            marker.position.latitude, marker.position.longitude
                        ));
                        ui.end_row();
                        ui.label("Depth");
                        ui.label(format!("{:.0} m", marker.depth));
                        ui.end_row();
                        ui.label("Temperature");
                        ui.label(format!("{:.1} °C", readings.temperature_c));
                        ui.end_row();
                        ui.label("Salinity");
                        ui.label(format!("{:.2} PSU", readings.salinity_psu));
                        ui.end_row();
                        ui.label("Pressure");
                        ui.label(format!("{} dbar", readings.pressure_dbar));
                        ui.end_row();
                        ui.label("Cycles");
                        ui.label(readings.cycles.to_string());
                        ui.end_row();
                        ui.label("Days deployed");
                        ui.label(readings.days_since_deployment.to_string());
                        ui.end_row();
                    });
                }
                Selection::Region(hit) => {
                    ui.label(format!(
                        "Clicked at {:.1}°, {:.1}°",
                        hit.point.latitude, hit.point.longitude
                    ));
                    if let Some(land) = &hit.land {
                        ui.label(format!("Over land: {land}"));
                    }
                    if hit.classified != hit.region {
                        let text = format!("Rule-based match: {}", hit.classified.name());
                        ui.label(RichText::new(text).weak());
                    }
                    region_profile_ui(ui, hit.region.profile());
                }
            });

            ui.separator();
            ui.collapsing("Steuerung", |ui| {
                ui.label("Linke Maustaste + Ziehen: Drehen");
                ui.label("Klick auf Boje: Details");
                ui.label("Klick auf Ozean: Regionsprofil");
                ui.label("S: Schnappschuss als SVG");
                ui.label("F1: Inspector für alle Einstellungen");
            });
        });
}

/// Fenster mit den wichtigsten Reglern
pub fn globe_settings_window_system(
    mut contexts: EguiContexts,
    mut settings: ResMut<GlobeSettings>,
    session: Option<Res<GlobeSession>>,
) {
    Window::new("Globus-Einstellungen")
        .default_width(320.0)
        .default_open(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.collapsing("Rotation", |ui| {
                ui.add(
                    Slider::new(&mut settings.ambient_speed, 0.0..=0.02)
                        .text("Eigenrotation (rad/Frame)"),
                );
                ui.add(
                    Slider::new(&mut settings.hover_speed, 0.0..=0.01).text("Hover (rad/Frame)"),
                );
                ui.add(
                    Slider::new(&mut settings.drag_sensitivity, 0.001..=0.02)
                        .logarithmic(true)
                        .text("Zieh-Empfindlichkeit"),
                );
                ui.add(
                    Slider::new(&mut settings.drag_quiet_secs, 0.0..=5.0)
                        .text("Pause nach Ziehen (s)"),
                );
                ui.add(
                    Slider::new(&mut settings.leave_quiet_secs, 0.0..=5.0)
                        .text("Pause nach Verlassen (s)"),
                );
            });

            ui.collapsing("Sichtbarkeit", |ui| {
                ui.add(
                    Slider::new(&mut settings.land_visibility_threshold, 0.0..=1.0).text("Land"),
                );
                ui.add(Slider::new(&mut settings.marker_threshold, 0.0..=1.0).text("Marker"));
                ui.add(Slider::new(&mut settings.label_threshold, 0.0..=1.0).text("Beschriftung"));
                ui.add(Slider::new(&mut settings.pulse_threshold, 0.0..=1.0).text("Puls"));
                ui.checkbox(&mut settings.show_grid, "Gitter");
                ui.checkbox(&mut settings.show_land, "Land");
                ui.checkbox(&mut settings.show_marker_ids, "Bojen-IDs");
                ui.checkbox(&mut settings.show_ocean_labels, "Ozean-Namen");
            });

            ui.collapsing("Marker", |ui| {
                ui.add(Slider::new(&mut settings.marker_size, 2.0..=16.0).text("Größe"));
                ui.add(
                    Slider::new(&mut settings.hit_radius_factor, 1.0..=4.0)
                        .text("Trefferradius-Faktor"),
                );
                ui.add(
                    Slider::new(&mut settings.pulse_period_secs, 0.5..=5.0)
                        .text("Puls-Periode (s)"),
                );
            });

            if let Some(session) = session {
                ui.collapsing("Frame", |ui| {
                    ui.label(format!(
                        "Rotation: {:.1}°",
                        angles::rad_to_deg(session.camera.rotation_angle())
                    ));
                    ui.label(format!("Geschwindigkeit: {:.4}", session.camera.rotation_speed));
                    let stats = session.last_stats();
                    ui.label(format!(
                        "Marker: {} gezeichnet, {} verdeckt, {} ungültig",
                        stats.markers_drawn, stats.markers_culled, stats.markers_skipped
                    ));
                    ui.label(format!(
                        "Land: {} gezeichnet, {} verdeckt, {} Dreiecke",
                        stats.land_drawn, stats.land_culled, stats.land_triangles
                    ));
                    ui.label(format!("Gitter-Segmente: {}", stats.grid_segments));
                });
            }
        });
}
