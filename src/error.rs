use crate::models::GridCoordinate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] ::config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("wrong delta: cannot step from {from} to {to} in raster order")]
    TraversalOrder {
        from: GridCoordinate,
        to: GridCoordinate,
    },

    #[error("wrong next: expected {expected}, cursor is at {actual}")]
    CursorMismatch {
        expected: GridCoordinate,
        actual: GridCoordinate,
    },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}
