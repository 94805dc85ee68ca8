use crate::models::GridGeometry;

/// One reconstructed grid, indexed in raster order
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub sequence: usize,
    /// False when the stream ended before the last cell and the tail was
    /// padded with the default value
    pub complete: bool,
    values: Vec<i32>,
}

impl Snapshot {
    pub fn filled(sequence: usize, value: i32) -> Self {
        Self {
            sequence,
            complete: false,
            values: vec![value; GridGeometry::CELLS],
        }
    }

    /// Reuse the buffer for a new snapshot
    pub fn reset(&mut self, sequence: usize, value: i32) {
        self.sequence = sequence;
        self.complete = false;
        self.values.fill(value);
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.values.get(index).copied()
    }

    /// Panics if `index` is outside the grid; callers obtain it from
    /// `GridGeometry::index_of`.
    pub fn set(&mut self, index: usize, value: i32) {
        self.values[index] = value;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_and_reset() {
        let mut snapshot = Snapshot::filled(0, 7);
        assert_eq!(snapshot.len(), GridGeometry::CELLS);
        assert!(snapshot.values().iter().all(|&v| v == 7));

        snapshot.set(3, 42);
        snapshot.complete = true;
        snapshot.reset(5, -1);

        assert_eq!(snapshot.sequence, 5);
        assert!(!snapshot.complete);
        assert_eq!(snapshot.get(3), Some(-1));
        assert_eq!(snapshot.get(GridGeometry::CELLS), None);
    }
}
