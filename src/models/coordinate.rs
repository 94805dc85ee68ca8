use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::utils::coordinates::{degrees_to_half_units, half_units_to_degrees};

/// A point on the half-degree lattice, stored as whole half-degree units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoordinate {
    lat_half: i32,
    lon_half: i32,
}

impl GridCoordinate {
    pub const fn from_half_units(lat_half: i32, lon_half: i32) -> Self {
        Self { lat_half, lon_half }
    }

    /// Build a coordinate from degrees, rejecting values off the lattice.
    /// Bounds are not checked here, see `GridGeometry::contains`.
    pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Self> {
        Ok(Self {
            lat_half: degrees_to_half_units(latitude)?,
            lon_half: degrees_to_half_units(longitude)?,
        })
    }

    pub fn is_on_lattice(latitude: f64, longitude: f64) -> bool {
        Self::from_degrees(latitude, longitude).is_ok()
    }

    pub fn lat_half(&self) -> i32 {
        self.lat_half
    }

    pub fn lon_half(&self) -> i32 {
        self.lon_half
    }

    pub fn latitude(&self) -> f64 {
        half_units_to_degrees(self.lat_half)
    }

    pub fn longitude(&self) -> f64 {
        half_units_to_degrees(self.lon_half)
    }

    /// Column label used in CSV headers, e.g. `80.0_-90.0`
    pub fn label(&self) -> String {
        format!("{:.1}_{:.1}", self.latitude(), self.longitude())
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.latitude(), self.longitude())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_degrees() {
        let coord = GridCoordinate::from_degrees(79.5, -89.5).unwrap();
        assert_eq!(coord.lat_half(), 159);
        assert_eq!(coord.lon_half(), -179);
        assert_eq!(coord.latitude(), 79.5);
        assert_eq!(coord.longitude(), -89.5);
    }

    #[test]
    fn test_lattice_check() {
        assert!(GridCoordinate::is_on_lattice(10.0, -20.5));
        assert!(!GridCoordinate::is_on_lattice(10.2, -20.5));
        assert!(!GridCoordinate::is_on_lattice(10.0, -20.7));
    }

    #[test]
    fn test_label_and_display() {
        let coord = GridCoordinate::from_half_units(160, -180);
        assert_eq!(coord.label(), "80.0_-90.0");
        assert_eq!(coord.to_string(), "(80.0, -90.0)");

        let coord = GridCoordinate::from_half_units(1, -1);
        assert_eq!(coord.label(), "0.5_-0.5");
    }
}
