// src/render/snapshot.rs
use crate::globe::error::GlobeResult;
use crate::render::scene::{SceneContext, SceneRenderer};
use crate::render::surface::{DrawSurface, FrameStats, TextAnchor};
use bevy::log::info;
use bevy::prelude::{Color, Vec2};
use std::path::Path;
use svg::Document;
use svg::Node;
use svg::node::element::{
    Circle, Definitions, Element, Path as SvgPath, Polygon, Polyline, RadialGradient, Rectangle,
    Stop, path::Data,
};

// ===================================================================================
// Farb-Hilfen
// ===================================================================================
fn rgb(color: Color) -> String {
    let [r, g, b, _] = color.as_rgba_u8();
    format!("rgb({r},{g},{b})")
}

fn opacity(color: Color) -> f32 {
    color.a().clamp(0.0, 1.0)
}

fn points_attr(points: &[Vec2]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

// ===================================================================================
// SVG-Zeichenfläche
// ===================================================================================
/// Schreibt jeden Zeichenbefehl als SVG-Element in ein Dokument
pub struct SvgSurface {
    document: Document,
    size: Vec2,
    gradient_count: usize,
}

impl SvgSurface {
    pub fn new(size: Vec2, background: Color) -> Self {
        let mut document = Document::new()
            .set("width", size.x)
            .set("height", size.y)
            .set("viewBox", format!("0 0 {} {}", size.x, size.y));
        document.append(
            Rectangle::new()
                .set("x", 0.0)
                .set("y", 0.0)
                .set("width", size.x)
                .set("height", size.y)
                .set("fill", rgb(background)),
        );
        Self {
            document,
            size,
            gradient_count: 0,
        }
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

impl DrawSurface for SvgSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.document.append(
            Circle::new()
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", radius)
                .set("fill", rgb(color))
                .set("fill-opacity", opacity(color)),
        );
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        self.document.append(
            Circle::new()
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", radius)
                .set("fill", "none")
                .set("stroke", rgb(color))
                .set("stroke-opacity", opacity(color))
                .set("stroke-width", width),
        );
    }

    fn dashed_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        width: f32,
        dash: f32,
        gap: f32,
        color: Color,
    ) {
        self.document.append(
            Circle::new()
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", radius)
                .set("fill", "none")
                .set("stroke", rgb(color))
                .set("stroke-opacity", opacity(color))
                .set("stroke-width", width)
                .set("stroke-dasharray", format!("{dash},{gap}")),
        );
    }

    fn polyline(&mut self, points: &[Vec2], closed: bool, width: f32, color: Color) {
        if points.len() < 2 {
            return;
        }
        if closed {
            self.document.append(
                Polygon::new()
                    .set("points", points_attr(points))
                    .set("fill", "none")
                    .set("stroke", rgb(color))
                    .set("stroke-opacity", opacity(color))
                    .set("stroke-width", width),
            );
        } else {
            self.document.append(
                Polyline::new()
                    .set("points", points_attr(points))
                    .set("fill", "none")
                    .set("stroke", rgb(color))
                    .set("stroke-opacity", opacity(color))
                    .set("stroke-width", width),
            );
        }
    }

    fn fill_triangles(&mut self, points: &[Vec2], triangles: &[[u32; 3]], color: Color) {
        let mut data = Data::new();
        for triangle in triangles.iter().copied() {
            let [a, b, c] = triangle.map(|i| points.get(i as usize).copied());
            let (Some(a), Some(b), Some(c)) = (a, b, c) else {
                continue;
            };
            data = data
                .move_to((a.x, a.y))
                .line_to((b.x, b.y))
                .line_to((c.x, c.y))
                .close();
        }
        self.document.append(
            SvgPath::new()
                .set("d", data)
                .set("fill", rgb(color))
                .set("fill-opacity", opacity(color))
                .set("stroke", "none"),
        );
    }

    fn radial_glow(&mut self, center: Vec2, radius: f32, inner: Color, outer: Color) {
        self.gradient_count += 1;
        let id = format!("glow{}", self.gradient_count);
        let gradient = RadialGradient::new()
            .set("id", id.as_str())
            .add(
                Stop::new()
                    .set("offset", "0%")
                    .set("stop-color", rgb(inner))
                    .set("stop-opacity", opacity(inner)),
            )
            .add(
                Stop::new()
                    .set("offset", "100%")
                    .set("stop-color", rgb(outer))
                    .set("stop-opacity", opacity(outer)),
            );
        self.document.append(Definitions::new().add(gradient));
        self.document.append(
            Circle::new()
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", radius)
                .set("fill", format!("url(#{id})")),
        );
    }

    fn text(&mut self, position: Vec2, text: &str, size: f32, color: Color, anchor: TextAnchor) {
        let baseline = match anchor {
            TextAnchor::Center => "middle",
            TextAnchor::Above => "auto",
        };
        let mut element = Element::new("text");
        element.assign("x", position.x);
        element.assign("y", position.y);
        element.assign("font-family", "sans-serif");
        element.assign("font-size", size);
        element.assign("text-anchor", "middle");
        element.assign("dominant-baseline", baseline);
        element.assign("fill", rgb(color));
        element.assign("fill-opacity", opacity(color));
        element.append(svg::node::Text::new(text));
        self.document.append(element);
    }
}

// ===================================================================================
// Schnappschuss
// ===================================================================================
/// Rendert den Frame in ein SVG-Dokument
pub fn render_snapshot(ctx: &SceneContext, size: Vec2) -> (Document, FrameStats) {
    let mut surface = SvgSurface::new(size, ctx.palette.background);
    let stats = SceneRenderer::render(Some(&mut surface), ctx);
    (surface.into_document(), stats)
}

/// Rendert den Frame und speichert ihn unter `path`
pub fn save_snapshot(path: &Path, ctx: &SceneContext, size: Vec2) -> GlobeResult<FrameStats> {
    let (document, stats) = render_snapshot(ctx, size);
    svg::save(path, &document)?;
    info!(
        "Snapshot '{}' written ({} floats, {} land polygons).",
        path.display(),
        stats.markers_drawn,
        stats.land_drawn
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::globe::data::{LandSet, floats::sample_floats};
    use crate::globe::resources::GlobeSettings;
    use crate::globe::view::GlobeView;
    use crate::render::palette::GlobeStyle;

    #[test]
    fn test_snapshot_contains_frame_elements() {
        let settings = GlobeSettings::default();
        let view = GlobeView::new(&settings, 0.0).unwrap();
        let markers = sample_floats();
        let land = LandSet::bundled();
        let ctx = SceneContext {
            view: &view,
            markers: &markers,
            land: &land,
            palette: GlobeStyle::Solid.palette(),
            land_visibility_threshold: settings.land_visibility_threshold,
            label_threshold: settings.label_threshold,
            pulse_threshold: settings.pulse_threshold,
            pulse_phase: 0.0,
            show_grid: true,
            show_land: true,
            show_marker_ids: true,
            show_ocean_labels: true,
            hovered: None,
            selected: Some("ARG010"),
        };

        let (document, stats) = render_snapshot(&ctx, Vec2::splat(settings.canvas_size));
        let text = document.to_string();
        assert!(text.starts_with("<svg"));
        assert!(text.contains("ARG010"));
        assert!(text.contains("stroke-dasharray"));
        assert!(text.contains("radialGradient"));
        assert!(stats.markers_drawn > 0);
    }
}
