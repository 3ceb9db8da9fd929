// src/render/palette.rs
use crate::globe::data::FloatStatus;
use bevy::prelude::*;

/// Farbschema des Globus
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlobeStyle {
    /// Cyan-Umriss, halbtransparente Füllung
    #[default]
    Hologram,
    /// Deckende Meeresfläche, erdfarbenes Land
    Solid,
}

impl GlobeStyle {
    pub const ALL: [GlobeStyle; 2] = [GlobeStyle::Hologram, GlobeStyle::Solid];

    pub fn label(&self) -> &'static str {
        match self {
            GlobeStyle::Hologram => "Hologram",
            GlobeStyle::Solid => "Solid",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            GlobeStyle::Hologram => Palette {
                background: Color::rgb_u8(2, 6, 23),
                sphere_fill: Color::rgba_u8(8, 145, 178, 26),
                sphere_stroke: Color::rgb_u8(0, 212, 255),
                dashed_outline: Color::rgba_u8(0, 212, 255, 77),
                grid: Color::rgba_u8(0, 212, 255, 102),
                land_fill: Color::rgba_u8(34, 139, 34, 89),
                land_stroke: Color::rgba_u8(34, 139, 34, 179),
                land_label: Color::rgba_u8(144, 238, 144, 230),
                marker_active: Color::rgb_u8(0, 212, 255),
                marker_transmitting: Color::rgb_u8(14, 165, 233),
                pulse: Color::rgba_u8(0, 212, 255, 51),
                highlight: Color::rgb_u8(255, 255, 255),
                marker_label: Color::rgba_u8(224, 242, 254, 230),
                ocean_label: Color::rgb_u8(125, 211, 252),
            },
            GlobeStyle::Solid => Palette {
                background: Color::rgb_u8(15, 23, 42),
                sphere_fill: Color::rgb_u8(14, 64, 120),
                sphere_stroke: Color::rgb_u8(90, 160, 220),
                dashed_outline: Color::rgba_u8(90, 160, 220, 77),
                grid: Color::rgba_u8(255, 255, 255, 40),
                land_fill: Color::rgb_u8(96, 140, 70),
                land_stroke: Color::rgb_u8(60, 100, 40),
                land_label: Color::rgba_u8(240, 240, 220, 230),
                marker_active: Color::rgb_u8(255, 200, 40),
                marker_transmitting: Color::rgb_u8(255, 120, 60),
                pulse: Color::rgba_u8(255, 200, 40, 60),
                highlight: Color::rgb_u8(255, 255, 255),
                marker_label: Color::rgba_u8(255, 255, 255, 230),
                ocean_label: Color::rgba_u8(200, 225, 255, 200),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub sphere_fill: Color,
    pub sphere_stroke: Color,
    pub dashed_outline: Color,
    pub grid: Color,
    pub land_fill: Color,
    pub land_stroke: Color,
    pub land_label: Color,
    pub marker_active: Color,
    pub marker_transmitting: Color,
    pub pulse: Color,
    pub highlight: Color,
    pub marker_label: Color,
    pub ocean_label: Color,
}

impl Palette {
    pub fn marker(&self, status: FloatStatus) -> Color {
        match status {
            FloatStatus::Active => self.marker_active,
            FloatStatus::Transmitting => self.marker_transmitting,
        }
    }
}

/// Skaliert die Deckkraft von `color` mit `factor` (geklemmt auf [0, 1])
pub fn fade(color: Color, factor: f32) -> Color {
    color.with_a(color.a() * factor.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_scales_alpha() {
        let c = Color::rgba(1.0, 0.0, 0.0, 0.8);
        assert!((fade(c, 0.5).a() - 0.4).abs() < 1e-6);
        assert_eq!(fade(c, 2.0).a(), c.a());
        assert_eq!(fade(c, -1.0).a(), 0.0);
    }

    #[test]
    fn test_statuses_have_distinct_colors() {
        for style in GlobeStyle::ALL {
            let palette = style.palette();
            assert_ne!(
                palette.marker(FloatStatus::Active),
                palette.marker(FloatStatus::Transmitting)
            );
        }
    }
}
