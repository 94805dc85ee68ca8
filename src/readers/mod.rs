pub mod mask_reader;
pub mod sample_reader;

pub use mask_reader::OceanMaskReader;
pub use sample_reader::{SampleIterator, SampleReader};
