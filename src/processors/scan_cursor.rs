use crate::error::{ProcessingError, Result};
use crate::models::{GridCoordinate, GridGeometry};
use crate::utils::constants::{LAT_MAX_HALF, LAT_MIN_HALF, LON_MAX_HALF, LON_MIN_HALF, N_LON};

/// Current position of a raster scan over the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanCursor {
    position: GridCoordinate,
}

impl ScanCursor {
    /// A cursor on the first cell of a snapshot
    pub fn new() -> Self {
        Self {
            position: GridGeometry::first(),
        }
    }

    /// A cursor on an arbitrary in-grid cell, typically the first sample
    pub fn starting_at(position: GridCoordinate) -> Result<Self> {
        if !GridGeometry::contains(&position) {
            return Err(ProcessingError::InvalidCoordinate(format!(
                "Cannot start a scan at {}",
                position
            )));
        }
        Ok(Self { position })
    }

    pub fn position(&self) -> GridCoordinate {
        self.position
    }

    /// Move to the next cell in raster order. Returns true when the cursor
    /// wrapped from the last cell back to the first, which closes a snapshot.
    pub fn advance(&mut self) -> bool {
        let lat = self.position.lat_half();
        let lon = self.position.lon_half();

        if lon < LON_MAX_HALF {
            self.position = GridCoordinate::from_half_units(lat, lon + 1);
            return false;
        }

        if lat > LAT_MIN_HALF {
            self.position = GridCoordinate::from_half_units(lat - 1, LON_MIN_HALF);
            return false;
        }

        self.position = GridGeometry::first();
        true
    }

    /// Number of `advance` calls needed to get from `from` to `to`.
    ///
    /// Only two relationships are recognised: both cells in the same row,
    /// or `to` in the row after `from` (including the wrap from the last
    /// row to the first). The row-wrap count is `181 - |column delta|`,
    /// which is exact when `to` is not east of `from`. Anything else yields
    /// `None`, meaning the input is out of raster order.
    pub fn steps_between(from: &GridCoordinate, to: &GridCoordinate) -> Option<usize> {
        let lat_delta = (to.lat_half() - from.lat_half()).unsigned_abs();
        let lon_delta = (to.lon_half() - from.lon_half()).unsigned_abs() as usize;

        if lat_delta == 1 || lat_delta == (LAT_MAX_HALF - LAT_MIN_HALF) as u32 {
            return N_LON.checked_sub(lon_delta);
        }

        if lat_delta != 0 {
            return None;
        }

        Some(lon_delta)
    }
}

impl Default for ScanCursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn coord(lat: f64, lon: f64) -> GridCoordinate {
        GridCoordinate::from_degrees(lat, lon).unwrap()
    }

    #[test]
    fn test_advance_within_row() {
        let mut cursor = ScanCursor::new();
        assert!(!cursor.advance());
        assert_eq!(cursor.position(), coord(80.0, -89.5));
    }

    #[test]
    fn test_advance_to_next_row() {
        let mut cursor = ScanCursor::starting_at(coord(80.0, 0.0)).unwrap();
        assert!(!cursor.advance());
        assert_eq!(cursor.position(), coord(79.5, -90.0));
    }

    #[test]
    fn test_advance_wraps_at_grid_end() {
        let mut cursor = ScanCursor::starting_at(GridGeometry::last()).unwrap();
        assert!(cursor.advance());
        assert_eq!(cursor.position(), GridGeometry::first());
    }

    #[test]
    fn test_full_cycle_visits_every_cell_once() {
        let mut cursor = ScanCursor::new();
        let mut visited = HashSet::with_capacity(GridGeometry::CELLS);
        visited.insert(cursor.position());

        for step in 1..=GridGeometry::CELLS {
            let wrapped = cursor.advance();
            if step < GridGeometry::CELLS {
                assert!(!wrapped, "wrapped early at step {}", step);
                assert!(visited.insert(cursor.position()));
                assert_eq!(
                    GridGeometry::index_of(&cursor.position()).unwrap(),
                    step
                );
            } else {
                assert!(wrapped);
                assert_eq!(cursor.position(), GridGeometry::first());
            }
        }

        assert_eq!(visited.len(), GridGeometry::CELLS);
    }

    #[test]
    fn test_starting_outside_grid_fails() {
        assert!(ScanCursor::starting_at(coord(85.0, -90.0)).is_err());
    }

    #[test]
    fn test_steps_between_same_cell() {
        for c in [GridGeometry::first(), coord(40.5, -45.0), GridGeometry::last()] {
            assert_eq!(ScanCursor::steps_between(&c, &c), Some(0));
        }
    }

    #[test]
    fn test_steps_between_same_row() {
        assert_eq!(
            ScanCursor::steps_between(&coord(80.0, -90.0), &coord(80.0, -89.0)),
            Some(2)
        );
        assert_eq!(
            ScanCursor::steps_between(&coord(10.0, -90.0), &coord(10.0, 0.0)),
            Some(180)
        );
    }

    #[test]
    fn test_steps_between_next_row() {
        // End of a row to the start of the next
        assert_eq!(
            ScanCursor::steps_between(&coord(80.0, 0.0), &coord(79.5, -90.0)),
            Some(1)
        );
        // Same column one row down is a full row of steps
        assert_eq!(
            ScanCursor::steps_between(&coord(50.0, -30.0), &coord(49.5, -30.0)),
            Some(181)
        );
        // Last cell of the grid to the first cell of the next snapshot
        assert_eq!(
            ScanCursor::steps_between(&GridGeometry::last(), &GridGeometry::first()),
            Some(1)
        );
    }

    #[test]
    fn test_steps_between_matches_walk() {
        let from = coord(0.0, -3.0);
        let mut cursor = ScanCursor::starting_at(from).unwrap();
        for expected in 1..=7 {
            cursor.advance();
            assert_eq!(
                ScanCursor::steps_between(&from, &cursor.position()),
                Some(expected)
            );
        }
    }

    #[test]
    fn test_steps_between_unrelated_rows() {
        assert_eq!(
            ScanCursor::steps_between(&coord(80.0, -90.0), &coord(79.0, -90.0)),
            None
        );
        assert_eq!(
            ScanCursor::steps_between(&coord(20.0, -10.0), &coord(40.0, -10.0)),
            None
        );
    }
}
