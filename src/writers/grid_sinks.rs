use crate::analyzers::ChangeAnalyzer;
use crate::error::Result;
use crate::models::{OceanMask, Snapshot};
use crate::processors::SnapshotSink;
use crate::writers::GridCsvWriter;
use std::io::Write;
use tracing::debug;

/// Writes every reconstructed snapshot as a value row
pub struct ReconstructionSink<'a, W: Write> {
    values: GridCsvWriter<W>,
    mask: &'a OceanMask,
    land_value: Option<i32>,
}

impl<'a, W: Write> ReconstructionSink<'a, W> {
    pub fn new(values: GridCsvWriter<W>, mask: &'a OceanMask) -> Self {
        Self {
            values,
            mask,
            land_value: None,
        }
    }

    pub fn with_land_value(mut self, land_value: Option<i32>) -> Self {
        self.land_value = land_value;
        self
    }

    pub fn into_writer(self) -> GridCsvWriter<W> {
        self.values
    }
}

impl<W: Write> SnapshotSink for ReconstructionSink<'_, W> {
    fn accept(&mut self, snapshot: &Snapshot, _previous: Option<&Snapshot>) -> Result<()> {
        self.values
            .write_snapshot(snapshot, self.mask, self.land_value)
    }
}

/// Writes value rows plus mean and standard deviation rows for every
/// consecutive pair of complete snapshots
pub struct StatisticsSink<'a, W: Write> {
    reconstruction: ReconstructionSink<'a, W>,
    mean: GridCsvWriter<W>,
    stdev: GridCsvWriter<W>,
    analyzer: ChangeAnalyzer<'a>,
    decimal_places: usize,
}

impl<'a, W: Write> StatisticsSink<'a, W> {
    pub fn new(
        values: GridCsvWriter<W>,
        mean: GridCsvWriter<W>,
        stdev: GridCsvWriter<W>,
        mask: &'a OceanMask,
        decimal_places: usize,
    ) -> Self {
        Self {
            reconstruction: ReconstructionSink::new(values, mask),
            mean,
            stdev,
            analyzer: ChangeAnalyzer::new(mask),
            decimal_places,
        }
    }

    pub fn with_land_value(mut self, land_value: Option<i32>) -> Self {
        self.reconstruction = self.reconstruction.with_land_value(land_value);
        self
    }

    /// Values, mean and stdev writers, in that order
    pub fn into_writers(self) -> (GridCsvWriter<W>, GridCsvWriter<W>, GridCsvWriter<W>) {
        (self.reconstruction.into_writer(), self.mean, self.stdev)
    }
}

impl<W: Write> SnapshotSink for StatisticsSink<'_, W> {
    fn accept(&mut self, snapshot: &Snapshot, previous: Option<&Snapshot>) -> Result<()> {
        self.reconstruction.accept(snapshot, previous)?;

        let Some(previous) = previous else {
            return Ok(());
        };

        if !snapshot.complete {
            debug!(
                snapshot = snapshot.sequence,
                "Skipping statistics for padded snapshot"
            );
            return Ok(());
        }

        let stats = self.analyzer.analyze(previous, snapshot);
        debug!(
            snapshot = stats.sequence,
            groups = stats.group_count,
            "Change statistics computed"
        );

        let mask = self.reconstruction.mask;
        self.mean
            .write_real(stats.sequence, &stats.mean, mask, self.decimal_places)?;
        self.stdev
            .write_real(stats.sequence, &stats.stdev, mask, self.decimal_places)?;
        Ok(())
    }
}
