// src/render/egui_surface.rs
use crate::render::surface::{DrawSurface, SurfaceLayout, TextAnchor};
use bevy::prelude::{Color, Vec2};
use egui::{Align2, Color32, FontId, Mesh, Pos2, Shape, Stroke};

const CIRCLE_SEGMENTS: usize = 64;
const GLOW_SEGMENTS: usize = 24;

fn to_color32(color: Color) -> Color32 {
    let [r, g, b, a] = color.as_rgba_u8();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Zeichnet über einen egui-Painter. Logische Koordinaten werden über das Layout skaliert.
pub struct EguiSurface<'p> {
    painter: &'p egui::Painter,
    layout: SurfaceLayout,
}

impl<'p> EguiSurface<'p> {
    pub fn new(painter: &'p egui::Painter, layout: SurfaceLayout) -> Self {
        Self { painter, layout }
    }

    fn pos(&self, logical: Vec2) -> Pos2 {
        let display = self.layout.to_display(logical);
        Pos2::new(display.x, display.y)
    }

    fn len(&self, logical: f32) -> f32 {
        logical * self.layout.scale()
    }

    fn circle_points(&self, center: Vec2, radius: f32) -> Vec<Pos2> {
        (0..=CIRCLE_SEGMENTS)
            .map(|i| {
                let angle = i as f32 / CIRCLE_SEGMENTS as f32 * std::f32::consts::TAU;
                self.pos(center + Vec2::new(angle.cos(), angle.sin()) * radius)
            })
            .collect()
    }
}

impl DrawSurface for EguiSurface<'_> {
    fn size(&self) -> Vec2 {
        self.layout.logical_size()
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.painter
            .circle_filled(self.pos(center), self.len(radius), to_color32(color));
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        self.painter.circle_stroke(
            self.pos(center),
            self.len(radius),
            Stroke::new(self.len(width), to_color32(color)),
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
        let points = self.circle_points(center, radius);
        let stroke = Stroke::new(self.len(width), to_color32(color));
        self.painter.extend(Shape::dashed_line(
            &points,
            stroke,
            self.len(dash),
            self.len(gap),
        ));
    }

    fn polyline(&mut self, points: &[Vec2], closed: bool, width: f32, color: Color) {
        if points.len() < 2 {
            return;
        }
        let points: Vec<Pos2> = points.iter().map(|p| self.pos(*p)).collect();
        let stroke = Stroke::new(self.len(width), to_color32(color));
        let shape = if closed {
            Shape::closed_line(points, stroke)
        } else {
            Shape::line(points, stroke)
        };
        self.painter.add(shape);
    }

    fn fill_triangles(&mut self, points: &[Vec2], triangles: &[[u32; 3]], color: Color) {
        let color = to_color32(color);
        let mut mesh = Mesh::default();
        for p in points {
            mesh.colored_vertex(self.pos(*p), color);
        }
        let count = points.len() as u32;
        for [a, b, c] in triangles.iter().copied() {
            if a < count && b < count && c < count {
                mesh.add_triangle(a, b, c);
            }
        }
        self.painter.add(Shape::mesh(mesh));
    }

    /// Dreiecksfächer mit Farbverlauf von der Mitte zum Rand
    fn radial_glow(&mut self, center: Vec2, radius: f32, inner: Color, outer: Color) {
        let mut mesh = Mesh::default();
        mesh.colored_vertex(self.pos(center), to_color32(inner));
        let outer = to_color32(outer);
        for i in 0..GLOW_SEGMENTS {
            let angle = i as f32 / GLOW_SEGMENTS as f32 * std::f32::consts::TAU;
            let rim = center + Vec2::new(angle.cos(), angle.sin()) * radius;
            mesh.colored_vertex(self.pos(rim), outer);
        }
        for i in 0..GLOW_SEGMENTS as u32 {
            let next = (i + 1) % GLOW_SEGMENTS as u32;
            mesh.add_triangle(0, i + 1, next + 1);
        }
        self.painter.add(Shape::mesh(mesh));
    }

    fn text(&mut self, position: Vec2, text: &str, size: f32, color: Color, anchor: TextAnchor) {
        let size = self.len(size);
        if size < 1.0 {
            return;
        }
        let align = match anchor {
            TextAnchor::Center => Align2::CENTER_CENTER,
            TextAnchor::Above => Align2::CENTER_BOTTOM,
        };
        self.painter.text(
            self.pos(position),
            align,
            text,
            FontId::proportional(size),
            to_color32(color),
        );
    }
}
