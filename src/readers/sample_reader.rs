use crate::error::Result;
use crate::models::GridSample;
use crate::utils::constants::DEFAULT_BUFFER_SIZE;
use crate::utils::coordinates::parse_coordinate;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Reads `lat lon value` lines. Lines that do not parse, or whose
/// coordinate is off the lattice or outside the grid, are skipped.
pub struct SampleReader;

impl SampleReader {
    pub fn new() -> Self {
        Self
    }

    /// Stream samples from a file
    pub fn stream_samples(&self, path: &Path) -> Result<SampleIterator<BufReader<File>>> {
        let file = File::open(path)?;
        Ok(SampleIterator::new(BufReader::with_capacity(
            DEFAULT_BUFFER_SIZE,
            file,
        )))
    }

    /// Stream samples from any buffered source
    pub fn stream_from<R: BufRead>(&self, reader: R) -> SampleIterator<R> {
        SampleIterator::new(reader)
    }

    /// Parse a single line, `None` if it should be skipped
    pub fn parse_sample_line(line: &str) -> Option<GridSample> {
        let mut fields = line.split_whitespace();
        let latitude = parse_coordinate(fields.next()?).ok()?;
        let longitude = parse_coordinate(fields.next()?).ok()?;
        let value = fields.next()?.parse::<f64>().ok()?;

        if !value.is_finite() {
            return None;
        }

        GridSample::from_degrees(latitude, longitude, value).ok()
    }
}

impl Default for SampleReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator for streaming samples, counting the lines it skips
pub struct SampleIterator<R> {
    reader: R,
    line_count: usize,
    skipped_lines: usize,
}

impl<R: BufRead> SampleIterator<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line_count: 0,
            skipped_lines: 0,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }
}

impl<R: BufRead> Iterator for SampleIterator<R> {
    type Item = Result<GridSample>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();

        loop {
            line.clear();

            match self.reader.read_line(&mut line) {
                Ok(0) => return None, // EOF
                Ok(_) => {
                    self.line_count += 1;

                    match SampleReader::parse_sample_line(&line) {
                        Some(sample) => return Some(Ok(sample)),
                        None => {
                            self.skipped_lines += 1;
                            debug!(line = self.line_count, "Skipping sample line: {}", line.trim());
                        }
                    }
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
