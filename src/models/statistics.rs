use serde::Serialize;

use crate::models::GridGeometry;

/// Per-cell mean and population standard deviation of the change between
/// two consecutive snapshots. Values at ineligible cells are left at zero
/// and never read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeStatistics {
    /// Sequence number of the later snapshot of the pair
    pub sequence: usize,
    pub mean: Vec<f64>,
    pub stdev: Vec<f64>,
    pub group_count: usize,
}

impl ChangeStatistics {
    pub fn new(sequence: usize) -> Self {
        Self {
            sequence,
            mean: vec![0.0; GridGeometry::CELLS],
            stdev: vec![0.0; GridGeometry::CELLS],
            group_count: 0,
        }
    }
}
