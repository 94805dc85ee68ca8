use crate::error::{ProcessingError, Result};
use crate::models::GridCoordinate;
use crate::utils::constants::{
    LAT_MAX_HALF, LAT_MIN_HALF, LON_MAX_HALF, LON_MIN_HALF, N_CELLS, N_LAT, N_LON,
};

/// The fixed lattice: latitude 80.0 down to 0.0, longitude -90.0 up to 0.0,
/// both in 0.5 degree steps.
///
/// Raster order starts at the north-west corner and walks each row east
/// before moving one row south.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridGeometry;

impl GridGeometry {
    pub const ROWS: usize = N_LAT;
    pub const COLUMNS: usize = N_LON;
    pub const CELLS: usize = N_CELLS;

    /// First cell of every snapshot
    pub const fn first() -> GridCoordinate {
        GridCoordinate::from_half_units(LAT_MAX_HALF, LON_MIN_HALF)
    }

    /// Last cell of every snapshot
    pub const fn last() -> GridCoordinate {
        GridCoordinate::from_half_units(LAT_MIN_HALF, LON_MAX_HALF)
    }

    pub fn contains(coord: &GridCoordinate) -> bool {
        (LAT_MIN_HALF..=LAT_MAX_HALF).contains(&coord.lat_half())
            && (LON_MIN_HALF..=LON_MAX_HALF).contains(&coord.lon_half())
    }

    /// True when the degrees lie on the lattice and inside the grid
    pub fn is_valid_coordinate(latitude: f64, longitude: f64) -> bool {
        GridCoordinate::from_degrees(latitude, longitude)
            .map(|coord| Self::contains(&coord))
            .unwrap_or(false)
    }

    /// Raster-order linear index: `row * 181 + column`
    pub fn index_of(coord: &GridCoordinate) -> Result<usize> {
        if !Self::contains(coord) {
            return Err(ProcessingError::InvalidCoordinate(format!(
                "{} is outside the grid [0.0, 80.0] x [-90.0, 0.0]",
                coord
            )));
        }

        let row = (LAT_MAX_HALF - coord.lat_half()) as usize;
        let column = (coord.lon_half() - LON_MIN_HALF) as usize;
        Ok(row * N_LON + column)
    }

    /// Inverse of `index_of`
    pub fn coordinate_of(index: usize) -> Option<GridCoordinate> {
        if index >= N_CELLS {
            return None;
        }

        let row = (index / N_LON) as i32;
        let column = (index % N_LON) as i32;
        Some(GridCoordinate::from_half_units(
            LAT_MAX_HALF - row,
            LON_MIN_HALF + column,
        ))
    }

    /// All cells in raster order
    pub fn coordinates() -> impl Iterator<Item = GridCoordinate> {
        (0..N_CELLS).filter_map(Self::coordinate_of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dimensions() {
        assert_eq!(GridGeometry::ROWS, 161);
        assert_eq!(GridGeometry::COLUMNS, 181);
        assert_eq!(GridGeometry::CELLS, 29141);
    }

    #[test]
    fn test_corner_indices() {
        assert_eq!(GridGeometry::index_of(&GridGeometry::first()).unwrap(), 0);
        assert_eq!(
            GridGeometry::index_of(&GridGeometry::last()).unwrap(),
            GridGeometry::CELLS - 1
        );

        let second_row = GridCoordinate::from_degrees(79.5, -90.0).unwrap();
        assert_eq!(GridGeometry::index_of(&second_row).unwrap(), 181);
    }

    #[test]
    fn test_index_is_a_bijection() {
        let mut seen = HashSet::with_capacity(GridGeometry::CELLS);
        for lat_half in LAT_MIN_HALF..=LAT_MAX_HALF {
            for lon_half in LON_MIN_HALF..=LON_MAX_HALF {
                let coord = GridCoordinate::from_half_units(lat_half, lon_half);
                let index = GridGeometry::index_of(&coord).unwrap();
                assert!(index < GridGeometry::CELLS);
                assert!(seen.insert(index), "index {} produced twice", index);
                assert_eq!(GridGeometry::coordinate_of(index), Some(coord));
            }
        }
        assert_eq!(seen.len(), GridGeometry::CELLS);
    }

    #[test]
    fn test_out_of_bounds_index_fails() {
        let north = GridCoordinate::from_degrees(80.5, -90.0).unwrap();
        let east = GridCoordinate::from_degrees(10.0, 0.5).unwrap();
        let west = GridCoordinate::from_degrees(10.0, -90.5).unwrap();
        let south = GridCoordinate::from_degrees(-0.5, -10.0).unwrap();

        for coord in [north, east, west, south] {
            assert!(GridGeometry::index_of(&coord).is_err());
        }
        assert_eq!(GridGeometry::coordinate_of(GridGeometry::CELLS), None);
    }

    #[test]
    fn test_is_valid_coordinate() {
        assert!(GridGeometry::is_valid_coordinate(80.0, -90.0));
        assert!(GridGeometry::is_valid_coordinate(0.0, 0.0));
        assert!(GridGeometry::is_valid_coordinate(42.5, -17.5));
        assert!(!GridGeometry::is_valid_coordinate(42.3, -17.5));
        assert!(!GridGeometry::is_valid_coordinate(81.0, -17.5));
        assert!(!GridGeometry::is_valid_coordinate(42.5, 1.0));
    }

    #[test]
    fn test_coordinates_follow_raster_order() {
        let coords: Vec<GridCoordinate> = GridGeometry::coordinates().collect();
        assert_eq!(coords.len(), GridGeometry::CELLS);
        assert_eq!(coords[0], GridGeometry::first());
        assert_eq!(coords[1].label(), "80.0_-89.5");
        assert_eq!(coords[180].label(), "80.0_0.0");
        assert_eq!(coords[181].label(), "79.5_-90.0");
        assert_eq!(coords[GridGeometry::CELLS - 1], GridGeometry::last());
    }
}
