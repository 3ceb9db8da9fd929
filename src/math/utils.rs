// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f32 = 1e-6;
    pub const TAU: f32 = std::f32::consts::TAU; // Explizit TAU von std verwenden
    pub const PI: f32 = std::f32::consts::PI;

    /// Wird beim Ray-Casting auf den Nenner addiert, damit horizontale Kanten nicht durch Null teilen
    pub const RAY_CAST_EPSILON: f32 = 1e-5;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Inverse lineare Interpolation
    pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
        if nearly_equal(a, b) {
            0.0
        } else {
            (value - a) / (b - a)
        }
    }
}

/// Winkel-Hilfsfunktionen
pub mod angles {
    use super::constants::{PI, TAU};

    /// Konvertiert Grad zu Radiant
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * PI / 180.0
    }

    /// Konvertiert Radiant zu Grad
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * 180.0 / PI
    }

    /// Normalisiert einen Winkel auf [0, 2π)
    ///
    /// `angle % TAU + TAU` kann bei winzigen negativen Werten in f32 auf genau TAU runden,
    /// deshalb wird das obere Ende zusätzlich abgefangen.
    pub fn normalize_angle(angle: f32) -> f32 {
        if !angle.is_finite() {
            return 0.0;
        }
        let mut result = angle % TAU;
        if result < 0.0 {
            result += TAU;
        }
        if result >= TAU {
            result -= TAU;
        }
        result
    }

    /// Normalisiert einen Längengrad in Grad auf [-180, 180)
    pub fn wrap_longitude_deg(lon: f32) -> f32 {
        let mut result = (lon + 180.0) % 360.0;
        if result < 0.0 {
            result += 360.0;
        }
        if result >= 360.0 {
            result -= 360.0;
        }
        result - 180.0
    }
}

/// Easing-Funktionen für Animationen
pub mod easing {
    /// Quadratic ease-in-out
    pub fn ease_in_out_quad(t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t < 0.5 {
            2.0 * t * t
        } else {
            1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
        }
    }
}
