// src/globe/error.rs
use crate::math::MathError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlobeError {
    #[error("Failed to parse dataset: {0}")]
    DatasetParse(#[from] serde_json::Error),

    #[error("Invalid geometry in '{name}': {source}")]
    InvalidGeometry { name: String, source: MathError },

    #[error("Duplicate float id: {0}")]
    DuplicateFloatId(String),

    #[error("Invalid globe configuration: {0}")]
    Configuration(#[from] MathError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GlobeResult<T> = Result<T, GlobeError>;
