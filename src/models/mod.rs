pub mod coordinate;
pub mod geometry;
pub mod ocean_mask;
pub mod sample;
pub mod snapshot;
pub mod statistics;

pub use coordinate::GridCoordinate;
pub use geometry::GridGeometry;
pub use ocean_mask::OceanMask;
pub use sample::GridSample;
pub use snapshot::Snapshot;
pub use statistics::ChangeStatistics;
