pub mod assembly_report;
pub mod grid_processor;
pub mod scan_cursor;
pub mod snapshot_assembler;

pub use assembly_report::AssemblyReport;
pub use grid_processor::GridProcessor;
pub use scan_cursor::ScanCursor;
pub use snapshot_assembler::{interpolate, SnapshotAssembler, SnapshotSink};
