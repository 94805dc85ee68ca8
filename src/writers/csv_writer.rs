use crate::error::{ProcessingError, Result};
use crate::models::{GridGeometry, OceanMask, Snapshot};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes one grid per CSV row.
///
/// The header is an empty label column followed by `lat_lon` for every cell
/// in raster order. Each data row starts with the snapshot sequence number;
/// cells outside the ocean mask are written as empty fields.
pub struct GridCsvWriter<W: Write> {
    writer: csv::Writer<W>,
    rows_written: usize,
}

impl GridCsvWriter<File> {
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> GridCsvWriter<W> {
    /// Wrap a writer and emit the header row
    pub fn from_writer(inner: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(false)
            .from_writer(inner);

        let header = std::iter::once(String::new())
            .chain(GridGeometry::coordinates().map(|coord| coord.label()));
        writer.write_record(header)?;

        Ok(Self {
            writer,
            rows_written: 0,
        })
    }

    /// Integer value row. `land_value`, when set, replaces the blank field of
    /// ineligible cells.
    pub fn write_snapshot(
        &mut self,
        snapshot: &Snapshot,
        mask: &OceanMask,
        land_value: Option<i32>,
    ) -> Result<()> {
        let land = land_value.map(|v| v.to_string()).unwrap_or_default();
        let fields = snapshot
            .values()
            .iter()
            .enumerate()
            .map(|(index, value)| {
                if mask.is_eligible(index) {
                    value.to_string()
                } else {
                    land.clone()
                }
            });

        self.write_row(snapshot.sequence, fields)
    }

    /// Real-valued row with fixed decimal places
    pub fn write_real(
        &mut self,
        sequence: usize,
        values: &[f64],
        mask: &OceanMask,
        decimal_places: usize,
    ) -> Result<()> {
        let fields = values.iter().enumerate().map(|(index, value)| {
            if mask.is_eligible(index) {
                format!("{:.*}", decimal_places, value)
            } else {
                String::new()
            }
        });

        self.write_row(sequence, fields)
    }

    fn write_row<I>(&mut self, sequence: usize, fields: I) -> Result<()>
    where
        I: Iterator<Item = String>,
    {
        self.writer
            .write_record(std::iter::once(sequence.to_string()).chain(fields))?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| ProcessingError::Io(e.into_error()))
    }
}
