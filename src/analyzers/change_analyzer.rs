use crate::models::{ChangeStatistics, OceanMask, Snapshot};
use std::collections::HashMap;

/// Groups eligible cells by their value in the earlier snapshot and reports,
/// per group, the mean and population standard deviation of the change to
/// the later snapshot. Every cell of a group receives the group's figures.
pub struct ChangeAnalyzer<'a> {
    mask: &'a OceanMask,
}

impl<'a> ChangeAnalyzer<'a> {
    pub fn new(mask: &'a OceanMask) -> Self {
        Self { mask }
    }

    /// Partition eligible cells into buckets of equal previous value.
    ///
    /// Buckets are ordered by their lowest index and members are in raster
    /// order, so each bucket is exactly what a forward scan starting at its
    /// first member would collect.
    pub fn buckets(&self, previous: &Snapshot) -> Vec<Vec<usize>> {
        let values = previous.values();
        let mut bucket_of: HashMap<i32, usize> = HashMap::new();
        let mut buckets: Vec<Vec<usize>> = Vec::new();

        for index in self.mask.eligible_indices() {
            let slot = *bucket_of.entry(values[index]).or_insert_with(|| {
                buckets.push(Vec::new());
                buckets.len() - 1
            });
            buckets[slot].push(index);
        }

        buckets
    }

    pub fn analyze(&self, previous: &Snapshot, current: &Snapshot) -> ChangeStatistics {
        let mut stats = ChangeStatistics::new(current.sequence);
        let before = previous.values();
        let after = current.values();

        let buckets = self.buckets(previous);
        stats.group_count = buckets.len();

        for members in &buckets {
            let (sum, sum_sq) = members.iter().fold((0.0f64, 0.0f64), |(sum, sum_sq), &k| {
                let delta = after[k] as f64 - before[k] as f64;
                (sum + delta, sum_sq + delta * delta)
            });

            let count = members.len() as f64;
            let mean = sum / count;
            // Rounding noise can push the variance below zero
            let variance = sum_sq / count - mean * mean;
            let stdev = if variance > 0.0 { variance.sqrt() } else { 0.0 };

            for &k in members {
                stats.mean[k] = mean;
                stats.stdev[k] = stdev;
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GridGeometry;

    fn snapshot_with(sequence: usize, cells: &[(usize, i32)]) -> Snapshot {
        let mut snapshot = Snapshot::filled(sequence, 0);
        for &(index, value) in cells {
            snapshot.set(index, value);
        }
        snapshot
    }

    fn mask_of(indices: &[usize]) -> OceanMask {
        let coords: Vec<_> = indices
            .iter()
            .filter_map(|&i| GridGeometry::coordinate_of(i))
            .collect();
        OceanMask::from_coordinates(&coords).unwrap()
    }

    #[test]
    fn test_buckets_partition_eligible_cells() {
        let mask = mask_of(&[0, 1, 2, 3, 4, 10]);
        let previous = snapshot_with(0, &[(0, 5), (1, 7), (2, 5), (3, 7), (4, 9), (10, 5)]);

        let analyzer = ChangeAnalyzer::new(&mask);
        let buckets = analyzer.buckets(&previous);

        assert_eq!(buckets, vec![vec![0, 2, 10], vec![1, 3], vec![4]]);

        let total: usize = buckets.iter().map(Vec::len).sum();
        assert_eq!(total, mask.eligible_count());
    }

    #[test]
    fn test_ineligible_cells_are_ignored() {
        let mask = mask_of(&[0]);
        // Cell 1 shares the bucket value but is not ocean
        let previous = snapshot_with(0, &[(0, 3), (1, 3)]);
        let current = snapshot_with(1, &[(0, 4), (1, 100)]);

        let stats = ChangeAnalyzer::new(&mask).analyze(&previous, &current);

        assert_eq!(stats.group_count, 1);
        assert_eq!(stats.mean[0], 1.0);
        assert_eq!(stats.stdev[0], 0.0);
    }

    #[test]
    fn test_group_mean_and_population_stdev() {
        let mask = mask_of(&[0, 1, 2, 3]);
        let previous = snapshot_with(0, &[(0, 10), (1, 10), (2, 10), (3, 20)]);
        let current = snapshot_with(1, &[(0, 12), (1, 14), (2, 16), (3, 15)]);

        let stats = ChangeAnalyzer::new(&mask).analyze(&previous, &current);

        // Deltas 2, 4, 6: mean 4, population variance (4 + 0 + 4) / 3
        let expected_stdev = (8.0f64 / 3.0).sqrt();
        for k in 0..3 {
            assert_eq!(stats.mean[k], 4.0);
            assert!((stats.stdev[k] - expected_stdev).abs() < 1e-12);
        }

        assert_eq!(stats.mean[3], -5.0);
        assert_eq!(stats.stdev[3], 0.0);
        assert_eq!(stats.sequence, 1);
    }

    #[test]
    fn test_singleton_groups_have_zero_stdev() {
        let mask = OceanMask::all();
        let mut previous = Snapshot::filled(0, 0);
        let mut current = Snapshot::filled(1, 0);
        for index in 0..GridGeometry::CELLS {
            previous.set(index, index as i32);
            current.set(index, (index * 7 % 13) as i32);
        }

        let stats = ChangeAnalyzer::new(&mask).analyze(&previous, &current);

        assert_eq!(stats.group_count, GridGeometry::CELLS);
        assert!(stats.stdev.iter().all(|&s| s == 0.0));
        assert_eq!(stats.mean[20], (20 * 7 % 13) as f64 - 20.0);
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        let mask = mask_of(&[0, 1]);
        let previous = snapshot_with(0, &[(0, -2_000_000_000), (1, -2_000_000_000)]);
        let current = snapshot_with(1, &[(0, 2_000_000_000), (1, 2_000_000_000)]);

        let stats = ChangeAnalyzer::new(&mask).analyze(&previous, &current);
        assert_eq!(stats.mean[0], 4_000_000_000.0);
        assert_eq!(stats.stdev[1], 0.0);
    }
}
