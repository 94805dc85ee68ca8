use crate::error::Result;
use crate::models::{GridCoordinate, GridGeometry, OceanMask};
use crate::utils::coordinates::parse_coordinate;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Loads the ocean classification: one `lat lon` pair per line, any order
pub struct OceanMaskReader;

impl OceanMaskReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_mask(&self, path: &Path) -> Result<OceanMask> {
        let file = File::open(path)?;
        let mask = self.read_mask_from(BufReader::new(file))?;
        info!(
            "Loaded ocean mask from {}: {} eligible cells",
            path.display(),
            mask.eligible_count()
        );
        Ok(mask)
    }

    pub fn read_mask_from<R: BufRead>(&self, reader: R) -> Result<OceanMask> {
        let mut mask = OceanMask::empty();

        for (line_number, line_result) in reader.lines().enumerate() {
            let line = line_result?;

            match Self::parse_mask_line(&line) {
                Some(coord) => mask.mark(&coord)?,
                None => debug!(line = line_number + 1, "Skipping mask line: {}", line.trim()),
            }
        }

        Ok(mask)
    }

    /// Parse a single line, `None` if it should be skipped
    fn parse_mask_line(line: &str) -> Option<GridCoordinate> {
        let mut fields = line.split_whitespace();
        let latitude = parse_coordinate(fields.next()?).ok()?;
        let longitude = parse_coordinate(fields.next()?).ok()?;

        GridCoordinate::from_degrees(latitude, longitude)
            .ok()
            .filter(GridGeometry::contains)
    }
}

impl Default for OceanMaskReader {
    fn default() -> Self {
        Self::new()
    }
}
