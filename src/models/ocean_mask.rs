use crate::error::Result;
use crate::models::{GridCoordinate, GridGeometry};

/// Per-cell eligibility flags; a cell is eligible when marked as ocean
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OceanMask {
    cells: Vec<bool>,
}

impl OceanMask {
    /// A mask with no eligible cells
    pub fn empty() -> Self {
        Self {
            cells: vec![false; GridGeometry::CELLS],
        }
    }

    /// A mask with every cell eligible
    pub fn all() -> Self {
        Self {
            cells: vec![true; GridGeometry::CELLS],
        }
    }

    pub fn from_coordinates<'a, I>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a GridCoordinate>,
    {
        let mut mask = Self::empty();
        for coord in coordinates {
            mask.mark(coord)?;
        }
        Ok(mask)
    }

    /// Flag a cell as eligible; marking twice is harmless
    pub fn mark(&mut self, coord: &GridCoordinate) -> Result<()> {
        let index = GridGeometry::index_of(coord)?;
        self.cells[index] = true;
        Ok(())
    }

    pub fn is_eligible(&self, index: usize) -> bool {
        self.cells.get(index).copied().unwrap_or(false)
    }

    pub fn eligible_count(&self) -> usize {
        self.cells.iter().filter(|&&eligible| eligible).count()
    }

    /// Indices of eligible cells in raster order
    pub fn eligible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, &eligible)| eligible.then_some(index))
    }
}

impl Default for OceanMask {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_is_idempotent() -> Result<()> {
        let coord = GridCoordinate::from_degrees(80.0, -89.5)?;
        let mut mask = OceanMask::empty();
        mask.mark(&coord)?;
        mask.mark(&coord)?;

        assert_eq!(mask.eligible_count(), 1);
        assert!(mask.is_eligible(1));
        assert!(!mask.is_eligible(0));
        Ok(())
    }

    #[test]
    fn test_from_coordinates() -> Result<()> {
        let coords = [GridGeometry::first(), GridGeometry::last()];
        let mask = OceanMask::from_coordinates(&coords)?;

        let indices: Vec<usize> = mask.eligible_indices().collect();
        assert_eq!(indices, vec![0, GridGeometry::CELLS - 1]);
        Ok(())
    }

    #[test]
    fn test_out_of_grid_mark_fails() {
        let coord = GridCoordinate::from_half_units(200, 0);
        let mut mask = OceanMask::empty();
        assert!(mask.mark(&coord).is_err());
        assert!(!mask.is_eligible(GridGeometry::CELLS));
    }

    #[test]
    fn test_all() {
        assert_eq!(OceanMask::all().eligible_count(), GridGeometry::CELLS);
    }
}
