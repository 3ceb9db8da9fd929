// src/globe/mod.rs
pub mod animation;
pub mod data;
pub mod error;
pub mod events;
pub mod interaction;
pub mod resources;
pub mod session;
pub mod state;
pub mod systems;
pub mod view;

pub use error::{GlobeError, GlobeResult};
pub use resources::{GlobeSettings, MarkerSource};
pub use session::GlobeSession;
pub use state::GlobeViewState;
