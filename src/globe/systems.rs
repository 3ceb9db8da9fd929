// src/globe/systems.rs
use crate::globe::data::{LandSet, floats::floats_or_sample};
use crate::globe::events::{FloatSelected, RegionSelected, Selection, SnapshotRequested};
use crate::globe::hit_test::ClickTarget;
use crate::globe::interaction::PointerEvent;
use crate::globe::resources::{GlobeSettings, MarkerSource};
use crate::globe::session::GlobeSession;
use crate::globe::state::CursorAffordance;
use crate::globe::view::GlobeView;
use crate::render::egui_surface::EguiSurface;
use crate::render::scene::{SceneContext, SceneRenderer};
use crate::render::snapshot::save_snapshot;
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts,
    egui::{self, CentralPanel, CursorIcon, Frame, Sense},
};
use bevy_window::WindowResized;

fn to_vec2(v: egui::Vec2) -> Vec2 {
    Vec2::new(v.x, v.y)
}

fn pos_to_vec2(p: egui::Pos2) -> Vec2 {
    Vec2::new(p.x, p.y)
}

/// Baut den Zeichenkontext eines Frames aus Sitzung, Einstellungen und Auswahl
pub fn scene_context<'a>(
    settings: &GlobeSettings,
    view: &'a GlobeView,
    session: &'a GlobeSession,
    selection: &'a Selection,
    pulse_phase: f32,
) -> SceneContext<'a> {
    SceneContext {
        view,
        markers: session.markers(),
        land: session.land(),
        palette: settings.style.palette(),
        land_visibility_threshold: settings.land_visibility_threshold,
        label_threshold: settings.label_threshold,
        pulse_threshold: settings.pulse_threshold,
        pulse_phase,
        show_grid: settings.show_grid,
        show_land: settings.show_land,
        show_marker_ids: settings.show_marker_ids,
        show_ocean_labels: settings.show_ocean_labels,
        hovered: session.hovered().map(|m| m.id.as_str()),
        selected: selection.float_id(),
    }
}

/// Phase in [0, 1) für die Puls-Animation
pub fn pulse_phase(elapsed_secs: f32, period_secs: f32) -> f32 {
    if period_secs <= f32::EPSILON || !elapsed_secs.is_finite() {
        return 0.0;
    }
    (elapsed_secs / period_secs).fract()
}

/// Sicht des aktuellen Frames; ungültige Einstellungen lassen den Frame leer
pub fn frame_view(session: &GlobeSession, settings: &GlobeSettings) -> Option<GlobeView> {
    match session.view(settings) {
        Ok(view) => Some(view),
        Err(err) => {
            warn!("Globe frame skipped, invalid settings: {err}");
            None
        }
    }
}

// --- Lebenszyklus ---

pub fn mount_globe(
    mut commands: Commands,
    settings: Res<GlobeSettings>,
    source: Res<MarkerSource>,
) {
    let markers = floats_or_sample(source.0.as_deref());
    match GlobeSession::mount(&settings, markers, LandSet::bundled()) {
        Ok(session) => commands.insert_resource(session),
        Err(err) => error!("Globe could not be mounted: {err}"),
    }
}

pub fn unmount_globe(
    mut commands: Commands,
    session: Option<ResMut<GlobeSession>>,
    mut selection: ResMut<Selection>,
) {
    if let Some(mut session) = session {
        session.unmount();
    }
    commands.remove_resource::<GlobeSession>();
    *selection = Selection::None;
}

// --- Frame ---

/// Zeichenfläche im zentralen egui-Panel: Eingaben, Animation, Zeichnen
pub fn globe_panel_system(
    mut contexts: EguiContexts,
    session: Option<ResMut<GlobeSession>>,
    settings: Res<GlobeSettings>,
    selection: Res<Selection>,
    time: Res<Time>,
    mut float_events: EventWriter<FloatSelected>,
    mut region_events: EventWriter<RegionSelected>,
) {
    let palette = settings.style.palette();
    let [r, g, b, a] = palette.background.as_rgba_u8();
    let frame = Frame::none().fill(egui::Color32::from_rgba_unmultiplied(r, g, b, a));

    CentralPanel::default().frame(frame).show(contexts.ctx_mut(), |ui| {
        let Some(mut session) = session else {
            ui.centered_and_justified(|ui| ui.label("Globus ausgeblendet"));
            return;
        };

        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        session.resize(
            settings.canvas_size,
            pos_to_vec2(response.rect.min),
            to_vec2(response.rect.size()),
        );

        let now = time.elapsed();
        let tuning = settings.interaction_tuning();
        let Some(view) = frame_view(&session, &settings) else {
            return;
        };

        // --- Zeiger-Ereignisse ---
        let inside = response.contains_pointer();
        if inside && !session.camera.is_hovering {
            session.handle_pointer(PointerEvent::Enter, now, &tuning);
        } else if !inside && session.camera.is_hovering {
            session.handle_pointer(PointerEvent::Leave, now, &tuning);
        }

        let primary_down = ui.input(|i| i.pointer.primary_down());
        let pressed = response.is_pointer_button_down_on() && primary_down;
        if inside && pressed && !session.camera.is_dragging {
            session.handle_pointer(PointerEvent::Down, now, &tuning);
        }
        if session.camera.is_dragging {
            let delta = ui.input(|i| i.pointer.delta());
            let dx = session.layout().logical_length(delta.x);
            if dx != 0.0 {
                session.handle_pointer(PointerEvent::Move { dx }, now, &tuning);
            }
            if !primary_down {
                session.handle_pointer(PointerEvent::Up, now, &tuning);
            }
        }

        let hover_logical = response
            .hover_pos()
            .and_then(|p| session.layout().to_logical(pos_to_vec2(p)));
        session.update_hover(&view, hover_logical);

        if response.clicked() {
            if let Some(logical) = response
                .interact_pointer_pos()
                .and_then(|p| session.layout().to_logical(pos_to_vec2(p)))
            {
                match session.click(&view, logical) {
                    ClickTarget::Float(marker) => {
                        float_events.send(FloatSelected::of(marker));
                    }
                    ClickTarget::Region(hit) => {
                        region_events.send(RegionSelected { hit });
                    }
                    ClickTarget::Nothing => {}
                }
            }
        }

        // --- Animation ---
        session.tick(now, &tuning);

        // --- Zeichnen ---
        let view = session.view(&settings).unwrap_or(view);
        let phase = pulse_phase(time.elapsed_seconds(), settings.pulse_period_secs);
        let stats = {
            let ctx = scene_context(&settings, &view, &session, &selection, phase);
            let mut surface = EguiSurface::new(&painter, *session.layout());
            SceneRenderer::render(Some(&mut surface), &ctx)
        };
        session.record_stats(stats);

        if let Some(marker) = session.hovered() {
            let id = marker.id.clone();
            let status = marker.status.label();
            let depth = marker.depth;
            egui::show_tooltip_at_pointer(ui.ctx(), egui::Id::new("float_tooltip"), |ui| {
                ui.strong(id);
                ui.label(format!("Status: {status}"));
                ui.label(format!("Depth: {depth:.0} m"));
            });
        }

        ui.ctx().set_cursor_icon(match session.cursor() {
            CursorAffordance::Default => CursorIcon::Default,
            CursorAffordance::Grab => CursorIcon::Grab,
            CursorAffordance::Grabbing => CursorIcon::Grabbing,
            CursorAffordance::Pointer => CursorIcon::PointingHand,
        });
    });
}

// --- Schnappschuss ---

pub fn snapshot_hotkey_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut requests: EventWriter<SnapshotRequested>,
) {
    // Tastatureingaben in Textfeldern gehören egui
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    if keyboard.just_pressed(KeyCode::KeyS) {
        requests.send(SnapshotRequested);
    }
}

pub fn handle_snapshot_requests(
    mut requests: EventReader<SnapshotRequested>,
    session: Option<Res<GlobeSession>>,
    settings: Res<GlobeSettings>,
    selection: Res<Selection>,
) {
    if requests.read().count() == 0 {
        return;
    }
    let Some(session) = session else {
        warn!("Snapshot requested while the globe is not mounted.");
        return;
    };
    let Some(view) = frame_view(&session, &settings) else {
        return;
    };
    let ctx = scene_context(&settings, &view, &session, &selection, 0.0);
    let path = settings.snapshot_path();
    if let Err(err) = save_snapshot(&path, &ctx, Vec2::splat(settings.canvas_size)) {
        error!("Snapshot to {} failed: {err}", path.display());
    }
}

pub fn log_window_resized(mut events: EventReader<WindowResized>) {
    for event in events.read() {
        debug!("Window resized to {}x{}.", event.width, event.height);
    }
}
