pub mod csv_writer;
pub mod grid_sinks;

pub use csv_writer::GridCsvWriter;
pub use grid_sinks::{ReconstructionSink, StatisticsSink};
