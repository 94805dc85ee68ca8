use crate::error::{ProcessingError, Result};
use crate::utils::constants::LATTICE_STEP;

/// Convert a degree value to whole half-degree units
///
/// The value must sit exactly on the half-degree lattice, i.e. `2 * degrees`
/// has no fractional part. Doubling is exact in binary floating point, so
/// no tolerance is involved.
///
/// # Examples
/// ```
/// use grid_snapshot_processor::utils::degrees_to_half_units;
///
/// assert_eq!(degrees_to_half_units(-89.5).unwrap(), -179);
/// assert!(degrees_to_half_units(10.25).is_err());
/// ```
pub fn degrees_to_half_units(degrees: f64) -> Result<i32> {
    if !degrees.is_finite() {
        return Err(ProcessingError::InvalidCoordinate(format!(
            "Coordinate is not a finite number: {}",
            degrees
        )));
    }

    let doubled = degrees / LATTICE_STEP;
    if doubled.fract() != 0.0 {
        return Err(ProcessingError::InvalidCoordinate(format!(
            "Coordinate {} is not on the half-degree lattice",
            degrees
        )));
    }

    if doubled < i32::MIN as f64 || doubled > i32::MAX as f64 {
        return Err(ProcessingError::InvalidCoordinate(format!(
            "Coordinate {} is out of range",
            degrees
        )));
    }

    Ok(doubled as i32)
}

/// Convert half-degree units back to degrees
pub fn half_units_to_degrees(half_units: i32) -> f64 {
    half_units as f64 * LATTICE_STEP
}

/// Parse a decimal coordinate field
pub fn parse_coordinate(coord_str: &str) -> Result<f64> {
    let trimmed = coord_str.trim();
    trimmed.parse::<f64>().map_err(|_| {
        ProcessingError::InvalidCoordinate(format!("Invalid coordinate value: '{}'", coord_str))
    })
}
