// src/debug/mod.rs
pub mod ui;
