// src/math/geometry/polygon/mod.rs

// Deklaration der Untermodule für Polygon-spezifische Funktionalität
pub mod ring; // Geschlossene Ringe im Lat/Lon-Raum samt Punkt-in-Polygon
pub mod triangulation; // Füll-Dreiecke über spade

// Re-Exporte für den einfachen Zugriff auf die wichtigsten Polygon-Elemente
pub use self::ring::GeoRing;
pub use self::triangulation::RingTriangulation;
