// src/math/geometry/mod.rs
pub mod polygon;
pub mod sphere;
