// src/math/types/mod.rs

// Re-export häufig verwendete externe Typen
pub use bevy::math::{Vec2, Vec3};

// Einheitliche Typen für das gesamte Modul
pub type Point2D = Vec2;
pub type Point3D = Vec3;
