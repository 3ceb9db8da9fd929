// src/render/surface.rs
use bevy::prelude::Vec2;
use bevy_render::color::Color;

/// Wo ein Text relativ zu seinem Ankerpunkt steht
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Center,
    /// Text steht über dem Punkt
    Above,
}

/// Zeichenfläche in logischen Pixeln, (0, 0) oben links.
///
/// Der Szenen-Renderer kennt nur diese Primitive. Implementiert für egui (Bildschirm)
/// und SVG (Schnappschuss).
pub trait DrawSurface {
    fn size(&self) -> Vec2;

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color);

    fn dashed_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        width: f32,
        dash: f32,
        gap: f32,
        color: Color,
    );

    fn polyline(&mut self, points: &[Vec2], closed: bool, width: f32, color: Color);

    /// Gefüllte Dreiecke mit Indizes in `points`
    fn fill_triangles(&mut self, points: &[Vec2], triangles: &[[u32; 3]], color: Color);

    /// Radialer Verlauf von `inner` in der Mitte nach `outer` am Rand
    fn radial_glow(&mut self, center: Vec2, radius: f32, inner: Color, outer: Color);

    fn text(&mut self, position: Vec2, text: &str, size: f32, color: Color, anchor: TextAnchor);
}

/// Zähler eines Frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub markers_drawn: usize,
    pub markers_culled: usize,
    pub markers_skipped: usize,
    pub land_drawn: usize,
    pub land_culled: usize,
    pub land_triangles: usize,
    pub grid_segments: usize,
    pub labels_drawn: usize,
}

/// Lage der logischen Zeichenfläche im Anzeigebereich (egui-Punkte).
///
/// Die Fläche wird mit gleichem Seitenverhältnis eingepasst und zentriert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceLayout {
    logical_size: Vec2,
    origin: Vec2,
    scale: f32,
    /// Zählt echte Größenänderungen
    generation: u64,
}

impl SurfaceLayout {
    pub fn new(logical_size: Vec2) -> Self {
        Self {
            logical_size,
            origin: Vec2::ZERO,
            scale: 1.0,
            generation: 0,
        }
    }

    pub fn logical_size(&self) -> Vec2 {
        self.logical_size
    }

    /// Neue logische Größe; Skalierung und Ursprung gelten erst nach dem nächsten `resize`
    pub fn set_logical_size(&mut self, logical_size: Vec2) -> bool {
        let valid = logical_size.is_finite() && logical_size.min_element() > 0.0;
        if !valid || logical_size == self.logical_size {
            return false;
        }
        self.logical_size = logical_size;
        self.scale = 0.0;
        self.generation += 1;
        true
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Passt die Fläche in den Bereich ab `area_min` mit Größe `area_size` ein.
    /// Gibt `false` zurück, wenn sich nichts geändert hat.
    pub fn resize(&mut self, area_min: Vec2, area_size: Vec2) -> bool {
        if !area_min.is_finite() || !area_size.is_finite() {
            return false;
        }
        let fit = area_size / self.logical_size;
        let scale = fit.x.min(fit.y).max(0.0);
        let origin = area_min + (area_size - self.logical_size * scale) * 0.5;

        if scale == self.scale && origin == self.origin {
            return false;
        }
        self.scale = scale;
        self.origin = origin;
        self.generation += 1;
        true
    }

    pub fn to_display(&self, logical: Vec2) -> Vec2 {
        self.origin + logical * self.scale
    }

    /// Umkehrung von [`SurfaceLayout::to_display`]; `None`, solange die Fläche keine Größe hat
    pub fn to_logical(&self, display: Vec2) -> Option<Vec2> {
        if self.scale <= f32::EPSILON {
            return None;
        }
        Some((display - self.origin) / self.scale)
    }

    /// Anzeige-Strecke in logische Strecke
    pub fn logical_length(&self, display_length: f32) -> f32 {
        if self.scale <= f32::EPSILON {
            0.0
        } else {
            display_length / self.scale
        }
    }
}


#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// Ein aufgezeichneter Zeichenbefehl
    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCommand {
        FillCircle { center: Vec2, radius: f32, color: Color },
        StrokeCircle { center: Vec2, radius: f32, color: Color },
        DashedCircle { center: Vec2, radius: f32 },
        Polyline { points: Vec<Vec2>, closed: bool, color: Color },
        FillTriangles { points: Vec<Vec2>, triangles: Vec<[u32; 3]> },
        Glow { center: Vec2, radius: f32 },
        Text { position: Vec2, text: String, size: f32 },
    }

    /// Zeichnet nichts, merkt sich nur die Befehle
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub commands: Vec<DrawCommand>,
    }

    impl RecordingSurface {
        pub fn texts(&self) -> Vec<&str> {
            self.commands
                .iter()
                .filter_map(|c| match c {
                    DrawCommand::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl DrawSurface for RecordingSurface {
        fn size(&self) -> Vec2 {
            Vec2::splat(600.0)
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.commands.push(DrawCommand::FillCircle { center, radius, color });
        }

        fn stroke_circle(&mut self, center: Vec2, radius: f32, _width: f32, color: Color) {
            self.commands.push(DrawCommand::StrokeCircle { center, radius, color });
        }

        fn dashed_circle(
            &mut self,
            center: Vec2,
            radius: f32,
            _width: f32,
            _dash: f32,
            _gap: f32,
            _color: Color,
        ) {
            self.commands.push(DrawCommand::DashedCircle { center, radius });
        }

        fn polyline(&mut self, points: &[Vec2], closed: bool, _width: f32, color: Color) {
            self.commands.push(DrawCommand::Polyline {
                points: points.to_vec(),
                closed,
                color,
            });
        }

        fn fill_triangles(&mut self, points: &[Vec2], triangles: &[[u32; 3]], _color: Color) {
            self.commands.push(DrawCommand::FillTriangles {
                points: points.to_vec(),
                triangles: triangles.to_vec(),
            });
        }

        fn radial_glow(&mut self, center: Vec2, radius: f32, _inner: Color, _outer: Color) {
            self.commands.push(DrawCommand::Glow { center, radius });
        }

        fn text(
            &mut self,
            position: Vec2,
            text: &str,
            size: f32,
            _color: Color,
            _anchor: TextAnchor,
        ) {
            self.commands.push(DrawCommand::Text {
                position,
                text: text.to_string(),
                size,
            });
        }
    }
}
