// src/render/mod.rs
pub mod egui_surface;
pub mod palette;
pub mod scene;
pub mod surface;
pub mod snapshot;

pub use palette::{GlobeStyle, Palette};
pub use scene::{SceneContext, SceneRenderer};
pub use surface::{DrawSurface, FrameStats, SurfaceLayout};
