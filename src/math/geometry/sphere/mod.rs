// src/math/geometry/sphere/mod.rs

// Deklaration der Untermodule für Kugel-spezifische Funktionalität
pub mod coordinates;
pub mod projection;

// Re-Exporte für den einfachen Zugriff auf die wichtigsten Kugel-Elemente
pub use self::coordinates::{GeoPoint, to_cartesian};
pub use self::projection::{CameraProjector, ProjectedPoint};
