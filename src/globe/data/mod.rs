// src/globe/data/mod.rs
pub mod floats;
pub mod land;
pub mod regions;

pub use floats::{FloatMarker, FloatReadings, FloatStatus, StatusCounts};
pub use land::{LandPolygon, LandSet};
pub use regions::{OCEAN_LABELS, OceanLabel, OceanRegion, RegionProfile};
