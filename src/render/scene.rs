// src/render/scene.rs
use crate::globe::data::{FloatMarker, FloatStatus, LandPolygon, LandSet, OCEAN_LABELS};
use crate::globe::view::GlobeView;
use crate::math::{
    geometry::sphere::{GeoPoint, ProjectedPoint},
    types::Vec2,
    utils::easing,
};
use crate::render::palette::{Palette, fade};
use crate::render::surface::{DrawSurface, FrameStats, TextAnchor};
use bevy::log::debug;
use bevy::prelude::Color;

const LATITUDE_STEP_DEG: i32 = 15;
const LONGITUDE_STEP_DEG: i32 = 30;
const SAMPLE_STEP_DEG: i32 = 5;

/// Alles, was ein Frame zum Zeichnen braucht
#[derive(Debug, Clone, Copy)]
pub struct SceneContext<'a> {
    pub view: &'a GlobeView,
    pub markers: &'a [FloatMarker],
    pub land: &'a LandSet,
    pub palette: Palette,
    pub land_visibility_threshold: f32,
    pub label_threshold: f32,
    pub pulse_threshold: f32,
    /// Phase der Puls-Animation in [0, 1)
    pub pulse_phase: f32,
    pub show_grid: bool,
    pub show_land: bool,
    pub show_marker_ids: bool,
    pub show_ocean_labels: bool,
    pub hovered: Option<&'a str>,
    pub selected: Option<&'a str>,
}

/// Zeichnet einen kompletten Frame in fester Reihenfolge:
/// Umriss, gestrichelter Umriss, Gitter, Land, Marker, Ozean-Beschriftungen.
pub struct SceneRenderer;

impl SceneRenderer {
    /// Ohne Zeichenfläche passiert nichts
    pub fn render<S: DrawSurface>(surface: Option<&mut S>, ctx: &SceneContext) -> FrameStats {
        let Some(surface) = surface else {
            debug!("No drawing surface, frame skipped.");
            return FrameStats::default();
        };

        let mut stats = FrameStats::default();
        draw_outline(surface, ctx);
        if ctx.show_grid {
            stats.grid_segments = draw_grid(surface, ctx);
        }
        if ctx.show_land {
            draw_land(surface, ctx, &mut stats);
        }
        draw_markers(surface, ctx, &mut stats);
        if ctx.show_ocean_labels {
            stats.labels_drawn += draw_ocean_labels(surface, ctx);
        }
        stats
    }
}

fn draw_outline<S: DrawSurface>(surface: &mut S, ctx: &SceneContext) {
    let center = ctx.view.center;
    let radius = ctx.view.projector.silhouette_radius();

    surface.fill_circle(center, radius, ctx.palette.sphere_fill);
    surface.stroke_circle(center, radius + 3.0, 6.0, fade(ctx.palette.sphere_stroke, 0.2));
    surface.stroke_circle(center, radius, 2.0, ctx.palette.sphere_stroke);
    surface.dashed_circle(center, radius + 10.0, 1.0, 6.0, 6.0, ctx.palette.dashed_outline);
}

/// Breitenkreise alle 15°, Längenkreise alle 30°. Rückseite gedimmt.
fn draw_grid<S: DrawSurface>(surface: &mut S, ctx: &SceneContext) -> usize {
    let horizon = ctx.view.projector.horizon_depth_scale();
    let mut segments = 0;

    let mut latitude = -90 + LATITUDE_STEP_DEG;
    while latitude < 90 {
        let ring: Vec<GeoPoint> = (-180..=180)
            .step_by(SAMPLE_STEP_DEG as usize)
            .map(|lon| GeoPoint::new(latitude as f32, lon as f32))
            .collect();
        segments += draw_grid_line(surface, ctx, &ring, horizon);
        latitude += LATITUDE_STEP_DEG;
    }

    let mut longitude = -180;
    while longitude < 180 {
        let meridian: Vec<GeoPoint> = (-90..=90)
            .step_by(SAMPLE_STEP_DEG as usize)
            .map(|lat| GeoPoint::new(lat as f32, longitude as f32))
            .collect();
        segments += draw_grid_line(surface, ctx, &meridian, horizon);
        longitude += LONGITUDE_STEP_DEG;
    }

    segments
}

/// Teilt eine Gitterlinie in Vorder- und Rückseiten-Stücke und zeichnet sie einzeln
fn draw_grid_line<S: DrawSurface>(
    surface: &mut S,
    ctx: &SceneContext,
    samples: &[GeoPoint],
    horizon: f32,
) -> usize {
    let projected: Vec<ProjectedPoint> = samples
        .iter()
        .filter_map(|p| ctx.view.project_surface(*p))
        .collect();
    if projected.len() < 2 {
        return 0;
    }

    let front_color = ctx.palette.grid;
    let back_color = fade(ctx.palette.grid, 0.25);

    let mut segments = 0;
    let mut run: Vec<Vec2> = vec![projected[0].screen];
    let mut run_is_front = projected[0].depth_scale >= horizon;

    for pair in projected.windows(2) {
        let is_front = pair[1].depth_scale >= horizon;
        if is_front != run_is_front {
            // Übergangspunkt gehört zu beiden Stücken, damit keine Lücke entsteht
            run.push(pair[1].screen);
            flush_run(surface, &mut run, run_is_front, front_color, back_color, &mut segments);
            run.push(pair[1].screen);
            run_is_front = is_front;
        } else {
            run.push(pair[1].screen);
        }
    }
    flush_run(surface, &mut run, run_is_front, front_color, back_color, &mut segments);
    segments
}

fn flush_run<S: DrawSurface>(
    surface: &mut S,
    run: &mut Vec<Vec2>,
    is_front: bool,
    front: Color,
    back: Color,
    segments: &mut usize,
) {
    if run.len() >= 2 {
        let (color, width) = if is_front { (front, 1.0) } else { (back, 0.5) };
        surface.polyline(run, false, width, color);
        *segments += 1;
    }
    run.clear();
}

fn draw_land<S: DrawSurface>(surface: &mut S, ctx: &SceneContext, stats: &mut FrameStats) {
    for polygon in ctx.land.polygons() {
        if draw_land_polygon(surface, ctx, polygon, stats) {
            stats.land_drawn += 1;
        } else {
            stats.land_culled += 1;
        }
    }
}

/// Füllt nur Dreiecke, deren Ecken alle sichtbar sind; Umriss als sichtbare Teilstücke
fn draw_land_polygon<S: DrawSurface>(
    surface: &mut S,
    ctx: &SceneContext,
    polygon: &LandPolygon,
    stats: &mut FrameStats,
) -> bool {
    let threshold = ctx.land_visibility_threshold;
    let projected: Option<Vec<ProjectedPoint>> = polygon
        .ring
        .vertices()
        .iter()
        .map(|v| ctx.view.project_surface(*v))
        .collect();
    let Some(projected) = projected else {
        debug!("Land polygon '{}' has non-projectable vertices.", polygon.name);
        return false;
    };

    let visible: Vec<bool> = projected.iter().map(|p| p.is_visible(threshold)).collect();
    if !visible.iter().any(|v| *v) {
        return false;
    }

    let screen: Vec<Vec2> = projected.iter().map(|p| p.screen).collect();
    let triangles: Vec<[u32; 3]> = polygon
        .triangulation
        .triangles
        .iter()
        .copied()
        .filter(|t| t.iter().all(|&i| visible.get(i as usize).copied().unwrap_or(false)))
        .collect();
    if !triangles.is_empty() {
        surface.fill_triangles(&screen, &triangles, ctx.palette.land_fill);
        stats.land_triangles += triangles.len();
    }

    for (indices, closed) in visible_runs(&visible) {
        let points: Vec<Vec2> = indices.iter().map(|&i| screen[i]).collect();
        surface.polyline(&points, closed, 1.5, ctx.palette.land_stroke);
    }

    if let Some(anchor) = ctx.view.project_surface(polygon.label_anchor) {
        if anchor.is_visible(threshold) {
            let size = 11.0 * anchor.depth_scale;
            surface.text(
                anchor.screen,
                &polygon.name,
                size,
                fade(ctx.palette.land_label, anchor.depth_scale),
                TextAnchor::Center,
            );
            stats.labels_drawn += 1;
        }
    }
    true
}

/// Zusammenhängende sichtbare Abschnitte eines geschlossenen Rings.
/// Sind alle Vertices sichtbar, entsteht ein einziger geschlossener Abschnitt.
fn visible_runs(visible: &[bool]) -> Vec<(Vec<usize>, bool)> {
    let n = visible.len();
    if n == 0 {
        return Vec::new();
    }
    if visible.iter().all(|v| *v) {
        return vec![((0..n).collect(), true)];
    }

    // Beim ersten unsichtbaren Vertex beginnen, damit kein Abschnitt über das Ring-Ende reißt
    let Some(start) = visible.iter().position(|v| !*v) else {
        return Vec::new();
    };

    let mut runs = Vec::new();
    let mut current = Vec::new();
    for offset in 1..=n {
        let i = (start + offset) % n;
        if visible[i] {
            current.push(i);
        } else if !current.is_empty() {
            runs.push((std::mem::take(&mut current), false));
        }
    }
    if !current.is_empty() {
        runs.push((current, false));
    }
    runs.retain(|(run, _)| run.len() >= 2);
    runs
}

fn draw_markers<S: DrawSurface>(surface: &mut S, ctx: &SceneContext, stats: &mut FrameStats) {
    let mut visible: Vec<(&FloatMarker, ProjectedPoint)> = Vec::with_capacity(ctx.markers.len());

    for marker in ctx.markers {
        let Some(projected) = ctx.view.project_marker(marker) else {
            debug!("Skipping float '{}' with non-finite position.", marker.id);
            stats.markers_skipped += 1;
            continue;
        };
        if projected.is_visible(ctx.view.marker_threshold) {
            visible.push((marker, projected));
        } else {
            stats.markers_culled += 1;
        }
    }

    // Von hinten nach vorne
    visible.sort_by(|a, b| a.1.depth_scale.total_cmp(&b.1.depth_scale));

    let pulse = easing::ease_in_out_quad(ctx.pulse_phase.rem_euclid(1.0));

    for (marker, projected) in visible {
        let size = ctx.view.marker_screen_size(&projected);
        let position = projected.screen;
        let color = ctx.palette.marker(marker.status);

        surface.radial_glow(position, size * 2.0, fade(color, 0.6), fade(color, 0.0));
        surface.fill_circle(position, size, color);

        if marker.status == FloatStatus::Active && projected.depth_scale > ctx.pulse_threshold {
            let radius = size * (1.8 + 0.8 * pulse);
            let color = fade(ctx.palette.pulse, 1.0 - pulse * 0.7);
            surface.stroke_circle(position, radius, 1.5, color);
        }

        let highlighted = ctx.hovered == Some(marker.id.as_str())
            || ctx.selected == Some(marker.id.as_str());
        if highlighted {
            surface.stroke_circle(position, size * 2.6, 2.0, ctx.palette.highlight);
        }

        if ctx.show_marker_ids && projected.depth_scale > ctx.label_threshold {
            surface.text(
                position - Vec2::new(0.0, size + 4.0),
                &marker.id,
                10.0 * projected.depth_scale,
                fade(ctx.palette.marker_label, projected.depth_scale),
                TextAnchor::Above,
            );
            stats.labels_drawn += 1;
        }

        stats.markers_drawn += 1;
    }
}

fn draw_ocean_labels<S: DrawSurface>(surface: &mut S, ctx: &SceneContext) -> usize {
    let mut drawn = 0;
    for label in OCEAN_LABELS {
        let Some(projected) = ctx.view.project_surface(label.anchor) else {
            continue;
        };
        if !projected.is_visible(ctx.label_threshold) {
            continue;
        }
        surface.text(
            projected.screen,
            label.name,
            16.0 * label.scale * projected.depth_scale,
            fade(ctx.palette.ocean_label, projected.depth_scale),
            TextAnchor::Center,
        );
        drawn += 1;
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::globe::data::floats::sample_floats;
    use crate::globe::resources::GlobeSettings;
    use crate::render::palette::GlobeStyle;
    use crate::render::surface::recording::{DrawCommand, RecordingSurface};

    fn context<'a>(
        view: &'a GlobeView,
        markers: &'a [FloatMarker],
        land: &'a LandSet,
    ) -> SceneContext<'a> {
        let settings = GlobeSettings::default();
        SceneContext {
            view,
            markers,
            land,
            palette: GlobeStyle::Hologram.palette(),
            land_visibility_threshold: settings.land_visibility_threshold,
            label_threshold: settings.label_threshold,
            pulse_threshold: settings.pulse_threshold,
            pulse_phase: 0.25,
            show_grid: true,
            show_land: true,
            show_marker_ids: true,
            show_ocean_labels: true,
            hovered: None,
            selected: None,
        }
    }

    fn view() -> GlobeView {
        GlobeView::new(&GlobeSettings::default(), 0.0).unwrap()
    }

    #[test]
    fn test_missing_surface_is_a_noop() {
        let view = view();
        let land = LandSet::default();
        let stats = SceneRenderer::render::<RecordingSurface>(None, &context(&view, &[], &land));
        assert_eq!(stats, FrameStats::default());
    }

    #[test]
    fn test_empty_collections_draw_bare_sphere_and_grid() {
        let view = view();
        let land = LandSet::default();
        let mut surface = RecordingSurface::default();
        let stats = SceneRenderer::render(Some(&mut surface), &context(&view, &[], &land));

        assert_eq!(stats.markers_drawn, 0);
        assert_eq!(stats.land_drawn, 0);
        assert!(stats.grid_segments > 0);
        assert!(matches!(surface.commands[0], DrawCommand::FillCircle { .. }));
        assert!(surface.commands.iter().any(|c| matches!(c, DrawCommand::DashedCircle { .. })));
    }

    #[test]
    fn test_markers_are_drawn_back_to_front() {
        let view = view();
        let markers = sample_floats();
        let land = LandSet::default();
        let mut ctx = context(&view, &markers, &land);
        ctx.show_grid = false;
        ctx.show_ocean_labels = false;
        let mut surface = RecordingSurface::default();
        let stats = SceneRenderer::render(Some(&mut surface), &ctx);

        assert_eq!(stats.markers_drawn + stats.markers_culled, markers.len());
        assert!(stats.markers_drawn > 0);

        // Kerne in Zeichenreihenfolge: Radius wächst mit depth_scale
        let core_radii: Vec<f32> = surface
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillCircle { radius, color, .. }
                    if *color == ctx.palette.marker_active
                        || *color == ctx.palette.marker_transmitting =>
                {
                    Some(*radius)
                }
                _ => None,
            })
            .collect();
        assert_eq!(core_radii.len(), stats.markers_drawn);
        assert!(core_radii.windows(2).all(|w| w[0] <= w[1]));

        // Der vorderste Marker trägt seine ID
        assert!(surface.texts().contains(&"ARG010"));
        // Tokio liegt hinten
        assert!(!surface.texts().contains(&"ARG005"));
    }

    #[test]
    fn test_non_finite_marker_is_skipped_without_aborting() {
        let view = view();
        let mut markers = sample_floats();
        markers.insert(0, FloatMarker::new("BAD", f32::NAN, 10.0, FloatStatus::Active, 1.0));
        let land = LandSet::default();
        let mut surface = RecordingSurface::default();
        let stats = SceneRenderer::render(Some(&mut surface), &context(&view, &markers, &land));
        assert_eq!(stats.markers_skipped, 1);
        assert!(stats.markers_drawn > 0);
    }

    #[test]
    fn test_highlight_ring_for_selected_marker() {
        let view = view();
        let markers = sample_floats();
        let land = LandSet::default();
        let mut ctx = context(&view, &markers, &land);
        let palette = ctx.palette;
        let count = |ctx: &SceneContext| {
            let mut surface = RecordingSurface::default();
            SceneRenderer::render(Some(&mut surface), ctx);
            surface
                .commands
                .iter()
                .filter(|c| match c {
                    DrawCommand::StrokeCircle { color, .. } => *color == palette.highlight,
                    _ => false,
                })
                .count()
        };
        assert_eq!(count(&ctx), 0);
        ctx.selected = Some("ARG010");
        assert_eq!(count(&ctx), 1);
    }

    #[test]
    fn test_bundled_land_is_drawn_with_triangles() {
        let view = view();
        let land = LandSet::bundled();
        let mut surface = RecordingSurface::default();
        let stats = SceneRenderer::render(Some(&mut surface), &context(&view, &[], &land));
        // Bei Rotation 0 schaut der Betrachter auf Amerika
        assert!(stats.land_drawn >= 1);
        assert!(stats.land_triangles > 0);
        assert_eq!(stats.land_drawn + stats.land_culled, land.len());
        assert!(surface.texts().contains(&"North America"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let view = view();
        let markers = sample_floats();
        let land = LandSet::bundled();
        let ctx = context(&view, &markers, &land);
        let mut a = RecordingSurface::default();
        let mut b = RecordingSurface::default();
        SceneRenderer::render(Some(&mut a), &ctx);
        SceneRenderer::render(Some(&mut b), &ctx);
        assert_eq!(a.commands, b.commands);
    }

    #[test]
    fn test_visible_runs_wrap_around_ring_end() {
        let runs = visible_runs(&[true, true, false, true, true]);
        assert_eq!(runs, vec![(vec![3, 4, 0, 1], false)]);

        let all = visible_runs(&[true, true, true]);
        assert_eq!(all, vec![(vec![0, 1, 2], true)]);

        assert!(visible_runs(&[false, true, false]).is_empty());
    }
}
