use crate::error::{ProcessingError, Result};
use crate::models::{GridCoordinate, GridGeometry, GridSample, Snapshot};
use crate::processors::{AssemblyReport, ScanCursor};
use crate::utils::constants::DEFAULT_CELL_VALUE;
use crate::utils::progress::ProgressReporter;
use std::mem;
use tracing::{debug, info, warn};

/// Receives every snapshot the assembler completes, in sequence order.
///
/// `previous` is the snapshot completed just before this one, if any. Both
/// references are only valid for the duration of the call.
pub trait SnapshotSink {
    fn accept(&mut self, snapshot: &Snapshot, previous: Option<&Snapshot>) -> Result<()>;
}

impl SnapshotSink for Vec<Snapshot> {
    fn accept(&mut self, snapshot: &Snapshot, _previous: Option<&Snapshot>) -> Result<()> {
        self.push(snapshot.clone());
        Ok(())
    }
}

/// Value written into the `step`-th of `delta - 1` missing cells between a
/// sample valued `start` and the next sample valued `end` (`step` is 0-based)
pub fn interpolate(start: f64, end: f64, step: usize, delta: usize) -> f64 {
    (start * (delta - 1 - step) as f64 + end * (step + 1) as f64) / delta as f64
}

/// Values are stored as integers, truncated toward zero
fn to_cell_value(value: f64) -> i32 {
    value as i32
}

/// Rebuilds grid snapshots from a raster-ordered sample stream, filling
/// skipped cells by linear interpolation along the scan path.
pub struct SnapshotAssembler {
    default_value: i32,
    log_missing_cells: bool,
    cursor: Option<ScanCursor>,
    last_value: f64,
    current: Snapshot,
    previous: Option<Snapshot>,
    written_cells: usize,
    report: AssemblyReport,
}

impl SnapshotAssembler {
    pub fn new() -> Self {
        Self::with_default_value(DEFAULT_CELL_VALUE)
    }

    pub fn with_default_value(default_value: i32) -> Self {
        Self {
            default_value,
            log_missing_cells: true,
            cursor: None,
            last_value: 0.0,
            current: Snapshot::filled(0, default_value),
            previous: None,
            written_cells: 0,
            report: AssemblyReport::default(),
        }
    }

    pub fn with_missing_cell_logging(mut self, enabled: bool) -> Self {
        self.log_missing_cells = enabled;
        self
    }

    pub fn report(&self) -> &AssemblyReport {
        &self.report
    }

    /// Position of the last written cell
    pub fn position(&self) -> Option<GridCoordinate> {
        self.cursor.map(|cursor| cursor.position())
    }

    /// Feed one sample. Any snapshots completed on the way are handed to `sink`.
    pub fn push<S>(&mut self, sample: GridSample, sink: &mut S) -> Result<()>
    where
        S: SnapshotSink + ?Sized,
    {
        let mut cursor = match self.cursor {
            Some(cursor) => cursor,
            None => return self.start(sample),
        };

        let from = cursor.position();
        let to = sample.coordinate;
        let delta = ScanCursor::steps_between(&from, &to)
            .filter(|&steps| steps <= GridGeometry::CELLS)
            .ok_or(ProcessingError::TraversalOrder { from, to })?;

        for step in 0..delta.saturating_sub(1) {
            if cursor.advance() {
                self.complete_snapshot(sink)?;
            }

            let position = cursor.position();
            let value = interpolate(self.last_value, sample.value, step, delta);
            if self.log_missing_cells {
                warn!(
                    snapshot = self.current.sequence,
                    lat = position.latitude(),
                    lon = position.longitude(),
                    "Missing data, interpolated {:.2}",
                    value
                );
            }
            self.write(&position, to_cell_value(value))?;
            self.report.interpolated_cells += 1;
        }

        if cursor.advance() {
            self.complete_snapshot(sink)?;
        }

        if cursor.position() != to {
            return Err(ProcessingError::CursorMismatch {
                expected: to,
                actual: cursor.position(),
            });
        }

        self.write(&to, to_cell_value(sample.value))?;
        self.last_value = sample.value;
        self.cursor = Some(cursor);
        self.report.samples_accepted += 1;

        Ok(())
    }

    /// Feed a whole stream and flush the final snapshot
    pub fn assemble<I, S>(
        mut self,
        samples: I,
        sink: &mut S,
        progress: Option<&ProgressReporter>,
    ) -> Result<AssemblyReport>
    where
        I: IntoIterator<Item = Result<GridSample>>,
        S: SnapshotSink + ?Sized,
    {
        let mut emitted = 0;
        for sample in samples {
            self.push(sample?, sink)?;

            if let Some(progress) = progress {
                if self.report.snapshots_emitted != emitted {
                    emitted = self.report.snapshots_emitted;
                    progress.set_message(&format!("Assembled {} snapshots", emitted));
                }
            }
        }

        self.finish(sink)
    }

    /// Emit the in-progress snapshot. Cells after the last sample keep the
    /// default value. Nothing is emitted if no sample was ever pushed.
    pub fn finish<S>(mut self, sink: &mut S) -> Result<AssemblyReport>
    where
        S: SnapshotSink + ?Sized,
    {
        let Some(cursor) = self.cursor else {
            info!("No samples in stream, nothing to emit");
            return Ok(self.report);
        };

        let complete = cursor.position() == GridGeometry::last();
        if !complete {
            let last_index = GridGeometry::index_of(&cursor.position())?;
            info!(
                snapshot = self.current.sequence,
                "Stream ended at {}, {} trailing cells set to {}",
                cursor.position(),
                GridGeometry::CELLS - 1 - last_index,
                self.default_value
            );
        }

        self.current.complete = complete;
        self.emit(sink)?;
        self.report.last_snapshot_complete = complete;

        info!(
            snapshots = self.report.snapshots_emitted,
            samples = self.report.samples_accepted,
            interpolated = self.report.interpolated_cells,
            "Assembly finished"
        );

        Ok(self.report)
    }

    fn start(&mut self, sample: GridSample) -> Result<()> {
        let cursor = ScanCursor::starting_at(sample.coordinate)?;
        if cursor.position() != GridGeometry::first() {
            debug!(
                "Stream starts at {}, earlier cells keep the default value",
                cursor.position()
            );
        }

        self.write(&sample.coordinate, to_cell_value(sample.value))?;
        self.last_value = sample.value;
        self.cursor = Some(cursor);
        self.report.samples_accepted += 1;
        Ok(())
    }

    fn write(&mut self, coord: &GridCoordinate, value: i32) -> Result<()> {
        let index = GridGeometry::index_of(coord)?;
        self.current.set(index, value);
        self.written_cells += 1;
        Ok(())
    }

    /// Hand the current snapshot to the sink
    fn emit<S>(&mut self, sink: &mut S) -> Result<()>
    where
        S: SnapshotSink + ?Sized,
    {
        let untouched = GridGeometry::CELLS.saturating_sub(self.written_cells);
        self.report.default_filled_cells += untouched;

        debug!(
            snapshot = self.current.sequence,
            complete = self.current.complete,
            default_cells = untouched,
            "Snapshot emitted"
        );

        sink.accept(&self.current, self.previous.as_ref())?;
        self.report.snapshots_emitted += 1;
        Ok(())
    }

    /// The cursor wrapped: emit the current snapshot, make it the previous
    /// one and start the next in the buffer the old previous occupied.
    fn complete_snapshot<S>(&mut self, sink: &mut S) -> Result<()>
    where
        S: SnapshotSink + ?Sized,
    {
        self.current.complete = true;
        self.emit(sink)?;

        let sequence = self.current.sequence + 1;
        let mut next = self
            .previous
            .take()
            .unwrap_or_else(|| Snapshot::filled(sequence, self.default_value));
        next.reset(sequence, self.default_value);

        self.previous = Some(mem::replace(&mut self.current, next));
        self.written_cells = 0;
        Ok(())
    }
}

impl Default for SnapshotAssembler {
    fn default() -> Self {
        Self::new()
    }
}
