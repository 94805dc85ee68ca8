use crate::config::ProcessingSettings;
use crate::error::Result;
use crate::models::{OceanMask, Snapshot};
use crate::processors::{AssemblyReport, SnapshotAssembler, SnapshotSink};
use crate::readers::{OceanMaskReader, SampleReader};
use crate::utils::filename::OutputPaths;
use crate::utils::progress::ProgressReporter;
use crate::writers::{GridCsvWriter, ReconstructionSink, StatisticsSink};
use std::path::Path;

/// Drives one pass over a sample file: read, assemble, write
pub struct GridProcessor {
    settings: ProcessingSettings,
}

impl GridProcessor {
    pub fn new(settings: ProcessingSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ProcessingSettings {
        &self.settings
    }

    /// Rebuild value grids from `input` and write them to `output`
    pub fn reconstruct(
        &self,
        input: &Path,
        ocean: &Path,
        output: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<AssemblyReport> {
        let mask = self.load_mask(ocean, progress)?;

        let values = GridCsvWriter::create(output)?;
        let mut sink =
            ReconstructionSink::new(values, &mask).with_land_value(self.settings.land_value);

        let report = self.assemble(input, &mut sink, progress)?;
        sink.into_writer().flush()?;

        Ok(report)
    }

    /// Rebuild value grids and write change statistics for each pair of
    /// consecutive complete snapshots
    pub fn compute_statistics(
        &self,
        input: &Path,
        ocean: &Path,
        outputs: &OutputPaths,
        progress: Option<&ProgressReporter>,
    ) -> Result<AssemblyReport> {
        let mask = self.load_mask(ocean, progress)?;

        let mut sink = StatisticsSink::new(
            GridCsvWriter::create(&outputs.values)?,
            GridCsvWriter::create(&outputs.mean)?,
            GridCsvWriter::create(&outputs.stdev)?,
            &mask,
            self.settings.decimal_places,
        )
        .with_land_value(self.settings.land_value);

        let report = self.assemble(input, &mut sink, progress)?;

        let (mut values, mut mean, mut stdev) = sink.into_writers();
        values.flush()?;
        mean.flush()?;
        stdev.flush()?;

        Ok(report)
    }

    /// Run the assembler over `input`, discarding the snapshots
    pub fn validate(
        &self,
        input: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<AssemblyReport> {
        self.assemble(input, &mut Discard, progress)
    }

    fn load_mask(&self, ocean: &Path, progress: Option<&ProgressReporter>) -> Result<OceanMask> {
        if let Some(p) = progress {
            p.set_message("Loading ocean mask...");
        }
        OceanMaskReader::new().read_mask(ocean)
    }

    fn assemble<S>(
        &self,
        input: &Path,
        sink: &mut S,
        progress: Option<&ProgressReporter>,
    ) -> Result<AssemblyReport>
    where
        S: SnapshotSink + ?Sized,
    {
        if let Some(p) = progress {
            p.set_message("Assembling snapshots...");
        }

        let mut samples = SampleReader::new().stream_samples(input)?;
        let assembler = SnapshotAssembler::with_default_value(self.settings.default_value)
            .with_missing_cell_logging(self.settings.log_missing_cells);

        let mut report = assembler.assemble(&mut samples, sink, progress)?;
        report.skipped_lines = samples.skipped_lines();

        if let Some(p) = progress {
            p.finish_with_message(&format!("Assembled {} snapshots", report.snapshots_emitted));
        }

        Ok(report)
    }
}

struct Discard;

impl SnapshotSink for Discard {
    fn accept(&mut self, _snapshot: &Snapshot, _previous: Option<&Snapshot>) -> Result<()> {
        Ok(())
    }
}
