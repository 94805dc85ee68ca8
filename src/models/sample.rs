use serde::{Deserialize, Serialize};

use crate::error::{ProcessingError, Result};
use crate::models::{GridCoordinate, GridGeometry};

/// One `lat lon value` observation from the sample stream
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSample {
    pub coordinate: GridCoordinate,
    pub value: f64,
}

impl GridSample {
    pub fn new(coordinate: GridCoordinate, value: f64) -> Self {
        Self { coordinate, value }
    }

    /// Build a sample from degrees, requiring an in-grid lattice point
    pub fn from_degrees(latitude: f64, longitude: f64, value: f64) -> Result<Self> {
        let coordinate = GridCoordinate::from_degrees(latitude, longitude)?;
        if !GridGeometry::contains(&coordinate) {
            return Err(ProcessingError::InvalidCoordinate(format!(
                "{} is outside the grid",
                coordinate
            )));
        }

        Ok(Self { coordinate, value })
    }
}
